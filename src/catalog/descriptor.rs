use bitflags::bitflags;

bitflags! {
    /// Item shapes a trait's fixtures cover.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TargetShapes: u8 {
        const ENUM = 1 << 0;
        const STRUCT = 1 << 1;
        const ALL = Self::ENUM.bits() | Self::STRUCT.bits();
    }
}

impl TargetShapes {
    /// Human-readable shape coverage for catalog listings.
    pub fn describe(self) -> &'static str {
        match (self.contains(Self::ENUM), self.contains(Self::STRUCT)) {
            (true, true) => "enum, struct",
            (true, false) => "enum",
            (false, true) => "struct",
            (false, false) => "none",
        }
    }
}

/// Code shape a fixture exercises; selects the body template and the
/// file-name suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// `enum Enum { A(Error) }`
    EnumTuple,
    /// `enum Enum { A { x: Error } }`
    EnumStruct,
    /// `struct Struct { x: Error }`
    StructFields,
    /// `struct Struct(Error);`
    StructTuple,
}

impl Shape {
    /// Every shape, in emission order.
    pub const ALL: [Shape; 4] = [
        Shape::EnumTuple,
        Shape::EnumStruct,
        Shape::StructFields,
        Shape::StructTuple,
    ];

    /// File-name suffix appended to the trait key.
    pub const fn suffix(self) -> &'static str {
        match self {
            Shape::EnumTuple => "enum",
            Shape::EnumStruct => "enum-struct-variant",
            Shape::StructFields => "struct",
            Shape::StructTuple => "tuple-struct",
        }
    }

    pub const fn is_enum(self) -> bool {
        matches!(self, Shape::EnumTuple | Shape::EnumStruct)
    }

    /// The coverage flag a descriptor must carry for this shape to be emitted.
    pub fn target(self) -> TargetShapes {
        if self.is_enum() {
            TargetShapes::ENUM
        } else {
            TargetShapes::STRUCT
        }
    }
}

/// One row of the trait table: the derived trait, the supertraits the
/// auxiliary `Error` type must implement for the derive to get as far as the
/// field, and which shapes to emit.
///
/// Descriptors are plain immutable records; the catalog builds them once and
/// the planner only reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraitDescriptor {
    pub name: String,
    pub supertraits: Vec<String>,
    pub shapes: TargetShapes,
}

impl TraitDescriptor {
    pub fn new(name: &str, supertraits: &[&str], shapes: TargetShapes) -> Self {
        Self {
            name: name.to_owned(),
            supertraits: supertraits
                .iter()
                .map(|supertrait| (*supertrait).to_owned())
                .collect(),
            shapes,
        }
    }

    /// Contents of the main derive attribute: the trait followed by its
    /// supertraits, comma-joined without spaces.
    pub fn derive_list(&self) -> String {
        let mut parts = Vec::with_capacity(self.supertraits.len() + 1);
        parts.push(self.name.as_str());
        parts.extend(self.supertraits.iter().map(String::as_str));
        parts.join(",")
    }

    /// Contents of the `Error` type's derive attribute; empty when the trait
    /// has no supertraits.
    pub fn supertrait_list(&self) -> String {
        self.supertraits.join(",")
    }
}
