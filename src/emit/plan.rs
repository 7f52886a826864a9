use crate::catalog::{Shape, TraitDescriptor};
use crate::render::render_fixture;

/// A fixture ready to be written: final file name plus full contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFixture {
    pub file_name: String,
    pub contents: String,
}

/// File name for one trait/shape pair. The trait key is spliced in
/// unmodified, so a key like `Eq, PartialEq` lands in the name as-is.
pub fn fixture_file_name(trait_key: &str, shape: Shape) -> String {
    format!("derives-span-{trait_key}-{}.rs", shape.suffix())
}

/// Expand the catalog into the full fixture set, traits in table order and
/// shapes in `Shape::ALL` order within each trait.
pub fn plan_fixtures(catalog: &[TraitDescriptor]) -> Vec<PlannedFixture> {
    let mut plans = Vec::new();
    for descriptor in catalog {
        for shape in Shape::ALL {
            if !descriptor.shapes.contains(shape.target()) {
                continue;
            }
            plans.push(PlannedFixture {
                file_name: fixture_file_name(&descriptor.name, shape),
                contents: render_fixture(shape, descriptor),
            });
        }
    }
    plans
}
