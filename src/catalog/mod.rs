pub mod builtin;
pub mod descriptor;

pub use builtin::{builtin_traits, validate_traits};
pub use descriptor::{Shape, TargetShapes, TraitDescriptor};
