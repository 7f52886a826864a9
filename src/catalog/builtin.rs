use crate::catalog::descriptor::{TargetShapes, TraitDescriptor};
use std::collections::BTreeSet;

/// The trait table driving fixture generation, in emission order.
///
/// A trait's supertraits are the ones the auxiliary `Error` type must derive
/// so that expansion fails on the field itself rather than on a missing
/// bound.
pub fn builtin_traits() -> Vec<TraitDescriptor> {
    vec![
        TraitDescriptor::new("Default", &[], TargetShapes::ALL),
        TraitDescriptor::new("Clone", &[], TargetShapes::ALL),
        TraitDescriptor::new("PartialEq", &[], TargetShapes::ALL),
        TraitDescriptor::new("PartialOrd", &["PartialEq"], TargetShapes::ALL),
        // One literal key rather than Eq with a PartialEq supertrait: the
        // recorded fixtures expect the attribute text `Eq, PartialEq`
        // verbatim, comma and space included.
        TraitDescriptor::new("Eq, PartialEq", &[], TargetShapes::ALL),
        TraitDescriptor::new("Ord", &["Eq", "PartialOrd", "PartialEq"], TargetShapes::ALL),
        TraitDescriptor::new("Debug", &[], TargetShapes::ALL),
        TraitDescriptor::new("Hash", &[], TargetShapes::ALL),
    ]
}

/// Reject catalogs that would emit colliding or unnameable fixtures.
///
/// Keys map straight into file names, so a duplicate would silently
/// overwrite an earlier trait's fixtures instead of adding coverage.
pub fn validate_traits(traits: &[TraitDescriptor]) -> Result<(), String> {
    let mut seen = BTreeSet::new();
    for descriptor in traits {
        if descriptor.name.trim().is_empty() {
            return Err("catalog contains a trait descriptor with an empty name".to_owned());
        }
        if !seen.insert(descriptor.name.as_str()) {
            return Err(format!("duplicate trait key '{}' in catalog", descriptor.name));
        }
    }
    Ok(())
}
