//! Built-in example sets, baked into the binary at compile time via `include_str!`.
//!
//! | Example         | Files                  | Variants        |
//! |-----------------|------------------------|-----------------|
//! | `Simple`        | `App.vue`              | base, extended  |
//! | `CompilerHints` | `App.vue`, `Comp.vue`  | base, extended  |
//! | `secondScript`  | `App.vue`, `Comp.vue`  | base, extended  |
//! | `expose`        | `App.vue`, `Comp.vue`  | extended        |

use playground_core::{CatalogVariant, ExampleSpec};

type FileList = &'static [(&'static str, &'static str)];

const SIMPLE: FileList = &[("App.vue", include_str!("examples/simple/App.vue"))];

const COMPILER_HINTS: FileList = &[
    ("App.vue", include_str!("examples/compilerHints/App.vue")),
    ("Comp.vue", include_str!("examples/compilerHints/Comp.vue")),
];

const SECOND_SCRIPT: FileList = &[
    ("App.vue", include_str!("examples/secondScript/App.vue")),
    ("Comp.vue", include_str!("examples/secondScript/Comp.vue")),
];

const EXPOSE: FileList = &[
    ("App.vue", include_str!("examples/expose/App.vue")),
    ("Comp.vue", include_str!("examples/expose/Comp.vue")),
];

const BASE: &[(&str, FileList)] = &[
    ("Simple", SIMPLE),
    ("CompilerHints", COMPILER_HINTS),
    ("secondScript", SECOND_SCRIPT),
];

const EXTENDED_ONLY: &[(&str, FileList)] = &[("expose", EXPOSE)];

fn declarations(variant: CatalogVariant) -> impl Iterator<Item = &'static (&'static str, FileList)> {
    let extra: &'static [(&'static str, FileList)] = match variant {
        CatalogVariant::Base => &[],
        CatalogVariant::Extended => EXTENDED_ONLY,
    };
    BASE.iter().chain(extra)
}

/// Built-in declarations for `variant`, in declaration order.
pub fn builtin_specs(variant: CatalogVariant) -> Vec<ExampleSpec> {
    declarations(variant)
        .map(|(name, files)| ExampleSpec::from((*name, files.to_vec())))
        .collect()
}

/// Names of the built-in sets for `variant`, without building anything.
pub fn builtin_names(variant: CatalogVariant) -> Vec<&'static str> {
    declarations(variant).map(|(name, _)| *name).collect()
}
