use crate::catalog::{Shape, TraitDescriptor};

/// Name stamped into the auto-generated header of every fixture.
const GENERATOR: &str = env!("CARGO_PKG_NAME");

/// Marker attribute placed on the first variant of `Default` enum fixtures
/// so the derive has a variant to pick.
const DEFAULT_VARIANT_MARKER: &str = "#[derivative(Default)]";

/// Render one fixture as text. Pure: same descriptor and shape, same bytes.
///
/// The output layout is frozen. The compile-fail harness diffs emitted files
/// against recorded expectations, so every byte here, including trailing
/// whitespace where a marker slot is empty, is part of the contract.
pub fn render_fixture(shape: Shape, descriptor: &TraitDescriptor) -> String {
    let traits = descriptor.derive_list();
    let supertraits = descriptor.supertrait_list();

    let error_deriving = if supertraits.is_empty() {
        String::new()
    } else {
        format!("#[derive({supertraits})]")
    };

    let default_marker = if descriptor.name == "Default" && shape.is_enum() {
        DEFAULT_VARIANT_MARKER
    } else {
        ""
    };

    let code = match shape {
        Shape::EnumTuple => format!(
            "\n#[derive(Derivative)]\n#[derivative({traits})]\nenum Enum {{\n   {default_marker}\n   A(Error)\n}}\n"
        ),
        Shape::EnumStruct => format!(
            "\n#[derive(Derivative)]\n#[derivative({traits})]\nenum Enum {{\n   {default_marker}\n   A {{\n     x: Error\n   }}\n}}\n"
        ),
        Shape::StructFields => format!(
            "\n#[derive(Derivative)]\n#[derivative({traits})]\nstruct Struct {{\n    x: Error\n}}\n"
        ),
        Shape::StructTuple => format!(
            "\n#[derive(Derivative)]\n#[derivative({traits})]\nstruct Struct(\n    Error\n);\n"
        ),
    };

    format!(
        "// This file was auto-generated using '{GENERATOR}'\n\n#[cfg(feature = \"use_core\")]\nextern crate core;\n\n#[macro_use]\nextern crate derivative;\n\n{error_deriving}\nstruct Error;\n{code}\nfn main() {{}}\n"
    )
}
