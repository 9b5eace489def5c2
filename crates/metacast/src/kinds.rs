// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Concrete metadata kinds.
//!
//! Each kind embeds its base kind as its first field, forming the same
//! single-parent chains the [`MetaId`] taxonomy declares. The structs are
//! `#[repr(C)]` so a base-typed borrow and a derived-typed borrow see the
//! same bytes at the same address; `meta_kind!` asserts the offset at
//! compile time.
//!
//! Payloads are deliberately thin. The surrounding reflection framework owns
//! the full object model (field lists, enum elements, translator behavior);
//! this crate only provides identity, ancestry, and the property block.

use crate::meta::meta_kind;
use crate::meta_id::MetaId;
use crate::property::PropertyCollection;

// --- Type metadata hierarchy ---

/// Root of the type metadata hierarchy: a named, sized type.
#[derive(Debug, Default)]
#[repr(C)]
pub struct MetaType {
    properties: PropertyCollection,
    /// Qualified name of the described type.
    pub name: String,
    /// Size in bytes of an instance of the described type.
    pub size: u32,
}

impl MetaType {
    /// Create type metadata with the given name and instance size.
    pub fn new(name: impl Into<String>, size: u32) -> Self {
        Self {
            properties: PropertyCollection::new(),
            name: name.into(),
            size,
        }
    }
}

meta_kind!(MetaType => MetaId::MetaType);

/// Metadata for an enumeration type.
#[derive(Debug, Default)]
#[repr(C)]
pub struct MetaEnum {
    base: MetaType,
}

impl MetaEnum {
    /// Create enumeration metadata; `size` is the underlying integer width.
    pub fn new(name: impl Into<String>, size: u32) -> Self {
        Self {
            base: MetaType::new(name, size),
        }
    }

    /// Name of the described enumeration.
    pub fn name(&self) -> &str {
        &self.base.name
    }

    /// Size in bytes of the underlying integer.
    pub fn size(&self) -> u32 {
        self.base.size
    }
}

meta_kind!(MetaEnum: MetaType => MetaId::MetaEnum);

/// Metadata for a structure type.
#[derive(Debug, Default)]
#[repr(C)]
pub struct MetaStruct {
    base: MetaType,
}

impl MetaStruct {
    /// Create structure metadata with the given name and instance size.
    pub fn new(name: impl Into<String>, size: u32) -> Self {
        Self {
            base: MetaType::new(name, size),
        }
    }

    /// Name of the described structure.
    pub fn name(&self) -> &str {
        &self.base.name
    }

    /// Size in bytes of an instance.
    pub fn size(&self) -> u32 {
        self.base.size
    }
}

meta_kind!(MetaStruct: MetaType => MetaId::MetaStruct);

/// Metadata for a class type: a structure with identity semantics.
#[derive(Debug, Default)]
#[repr(C)]
pub struct MetaClass {
    base: MetaStruct,
}

impl MetaClass {
    /// Create class metadata with the given name and instance size.
    pub fn new(name: impl Into<String>, size: u32) -> Self {
        Self {
            base: MetaStruct::new(name, size),
        }
    }

    /// Name of the described class.
    pub fn name(&self) -> &str {
        self.base.name()
    }

    /// Size in bytes of an instance.
    pub fn size(&self) -> u32 {
        self.base.size()
    }
}

meta_kind!(MetaClass: MetaStruct => MetaId::MetaClass);

// --- Translator hierarchy ---

/// Root of the value translator hierarchy.
///
/// A translator moves values of one described type between memory and the
/// property/wire representations; `size` is the byte size of the data it
/// moves.
#[derive(Debug, Default)]
#[repr(C)]
pub struct Translator {
    properties: PropertyCollection,
    /// Size in bytes of the data this translator moves.
    pub size: u32,
}

impl Translator {
    /// Create a translator for data of the given byte size.
    pub fn new(size: u32) -> Self {
        Self {
            properties: PropertyCollection::new(),
            size,
        }
    }
}

meta_kind!(Translator => MetaId::Translator);

/// Translator for scalar values (integers, floats, booleans).
#[derive(Debug, Default)]
#[repr(C)]
pub struct ScalarTranslator {
    base: Translator,
}

impl ScalarTranslator {
    /// Create a scalar translator for data of the given byte size.
    pub fn new(size: u32) -> Self {
        Self {
            base: Translator::new(size),
        }
    }

    /// Size in bytes of the data this translator moves.
    pub fn size(&self) -> u32 {
        self.base.size
    }
}

meta_kind!(ScalarTranslator: Translator => MetaId::ScalarTranslator);

/// Translator for nested structure values.
#[derive(Debug, Default)]
#[repr(C)]
pub struct StructureTranslator {
    base: Translator,
}

impl StructureTranslator {
    /// Create a structure translator for data of the given byte size.
    pub fn new(size: u32) -> Self {
        Self {
            base: Translator::new(size),
        }
    }

    /// Size in bytes of the data this translator moves.
    pub fn size(&self) -> u32 {
        self.base.size
    }
}

meta_kind!(StructureTranslator: Translator => MetaId::StructureTranslator);

/// Translator for pointer/reference values.
#[derive(Debug, Default)]
#[repr(C)]
pub struct PointerTranslator {
    base: Translator,
}

impl PointerTranslator {
    /// Create a pointer translator for data of the given byte size.
    pub fn new(size: u32) -> Self {
        Self {
            base: Translator::new(size),
        }
    }

    /// Size in bytes of the data this translator moves.
    pub fn size(&self) -> u32 {
        self.base.size
    }
}

meta_kind!(PointerTranslator: Translator => MetaId::PointerTranslator);

/// Translator for enumeration values.
#[derive(Debug, Default)]
#[repr(C)]
pub struct EnumerationTranslator {
    base: Translator,
}

impl EnumerationTranslator {
    /// Create an enumeration translator for data of the given byte size.
    pub fn new(size: u32) -> Self {
        Self {
            base: Translator::new(size),
        }
    }

    /// Size in bytes of the data this translator moves.
    pub fn size(&self) -> u32 {
        self.base.size
    }
}

meta_kind!(EnumerationTranslator: Translator => MetaId::EnumerationTranslator);

/// Translator for type references.
#[derive(Debug, Default)]
#[repr(C)]
pub struct TypeTranslator {
    base: Translator,
}

impl TypeTranslator {
    /// Create a type-reference translator for data of the given byte size.
    pub fn new(size: u32) -> Self {
        Self {
            base: Translator::new(size),
        }
    }

    /// Size in bytes of the data this translator moves.
    pub fn size(&self) -> u32 {
        self.base.size
    }
}

meta_kind!(TypeTranslator: Translator => MetaId::TypeTranslator);

/// Base of the container translators.
#[derive(Debug, Default)]
#[repr(C)]
pub struct ContainerTranslator {
    base: Translator,
}

impl ContainerTranslator {
    /// Create a container translator for data of the given byte size.
    pub fn new(size: u32) -> Self {
        Self {
            base: Translator::new(size),
        }
    }

    /// Size in bytes of the data this translator moves.
    pub fn size(&self) -> u32 {
        self.base.size
    }
}

meta_kind!(ContainerTranslator: Translator => MetaId::ContainerTranslator);

/// Translator for unordered unique-element containers.
#[derive(Debug, Default)]
#[repr(C)]
pub struct SetTranslator {
    base: ContainerTranslator,
}

impl SetTranslator {
    /// Create a set translator for data of the given byte size.
    pub fn new(size: u32) -> Self {
        Self {
            base: ContainerTranslator::new(size),
        }
    }

    /// Size in bytes of the data this translator moves.
    pub fn size(&self) -> u32 {
        self.base.size()
    }
}

meta_kind!(SetTranslator: ContainerTranslator => MetaId::SetTranslator);

/// Translator for ordered sequence containers.
#[derive(Debug, Default)]
#[repr(C)]
pub struct SequenceTranslator {
    base: ContainerTranslator,
}

impl SequenceTranslator {
    /// Create a sequence translator for data of the given byte size.
    pub fn new(size: u32) -> Self {
        Self {
            base: ContainerTranslator::new(size),
        }
    }

    /// Size in bytes of the data this translator moves.
    pub fn size(&self) -> u32 {
        self.base.size()
    }
}

meta_kind!(SequenceTranslator: ContainerTranslator => MetaId::SequenceTranslator);

/// Translator for key/value association containers.
#[derive(Debug, Default)]
#[repr(C)]
pub struct AssociationTranslator {
    base: ContainerTranslator,
}

impl AssociationTranslator {
    /// Create an association translator for data of the given byte size.
    pub fn new(size: u32) -> Self {
        Self {
            base: ContainerTranslator::new(size),
        }
    }

    /// Size in bytes of the data this translator moves.
    pub fn size(&self) -> u32 {
        self.base.size()
    }
}

meta_kind!(AssociationTranslator: ContainerTranslator => MetaId::AssociationTranslator);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Meta;

    fn all_kinds() -> Vec<(Box<dyn Meta>, Vec<MetaId>)> {
        vec![
            (Box::new(MetaType::new("t", 4)), vec![MetaId::MetaType]),
            (
                Box::new(MetaEnum::new("e", 4)),
                vec![MetaId::MetaEnum, MetaId::MetaType],
            ),
            (
                Box::new(MetaStruct::new("s", 8)),
                vec![MetaId::MetaStruct, MetaId::MetaType],
            ),
            (
                Box::new(MetaClass::new("c", 16)),
                vec![MetaId::MetaClass, MetaId::MetaStruct, MetaId::MetaType],
            ),
            (Box::new(Translator::new(4)), vec![MetaId::Translator]),
            (
                Box::new(ScalarTranslator::new(4)),
                vec![MetaId::ScalarTranslator, MetaId::Translator],
            ),
            (
                Box::new(StructureTranslator::new(8)),
                vec![MetaId::StructureTranslator, MetaId::Translator],
            ),
            (
                Box::new(PointerTranslator::new(8)),
                vec![MetaId::PointerTranslator, MetaId::Translator],
            ),
            (
                Box::new(EnumerationTranslator::new(4)),
                vec![MetaId::EnumerationTranslator, MetaId::Translator],
            ),
            (
                Box::new(TypeTranslator::new(8)),
                vec![MetaId::TypeTranslator, MetaId::Translator],
            ),
            (
                Box::new(ContainerTranslator::new(24)),
                vec![MetaId::ContainerTranslator, MetaId::Translator],
            ),
            (
                Box::new(SetTranslator::new(24)),
                vec![
                    MetaId::SetTranslator,
                    MetaId::ContainerTranslator,
                    MetaId::Translator,
                ],
            ),
            (
                Box::new(SequenceTranslator::new(24)),
                vec![
                    MetaId::SequenceTranslator,
                    MetaId::ContainerTranslator,
                    MetaId::Translator,
                ],
            ),
            (
                Box::new(AssociationTranslator::new(48)),
                vec![
                    MetaId::AssociationTranslator,
                    MetaId::ContainerTranslator,
                    MetaId::Translator,
                ],
            ),
        ]
    }

    #[test]
    fn test_every_kind_reports_its_own_id() {
        for (object, chain) in all_kinds() {
            assert_eq!(object.meta_id(), chain[0]);
            assert!(object.is_kind(object.meta_id()));
        }
    }

    #[test]
    fn test_is_kind_matches_expected_chains() {
        // Exhaustive truth table: true exactly on the hardcoded ancestor
        // chain, false for every other id.
        for (object, chain) in all_kinds() {
            for index in 0..MetaId::COUNT {
                let id = MetaId::from_index(index).expect("dense index");
                assert_eq!(
                    object.is_kind(id),
                    chain.contains(&id),
                    "{} vs candidate {}",
                    object.meta_id(),
                    id
                );
            }
        }
    }

    #[test]
    fn test_is_kind_agrees_with_taxonomy() {
        for (object, _) in all_kinds() {
            for index in 0..MetaId::COUNT {
                let id = MetaId::from_index(index).expect("dense index");
                assert_eq!(object.is_kind(id), object.meta_id().is_a(id));
            }
        }
    }

    #[test]
    fn test_metaclass_scenario() {
        let class = MetaClass::new("Vec3", 12);
        assert!(class.is_kind(MetaId::MetaType));
        assert!(class.is_kind(MetaId::MetaStruct));
        assert!(!class.is_kind(MetaId::Translator));
        assert!(!class.is_kind(MetaId::MetaEnum));
        assert_eq!(class.name(), "Vec3");
        assert_eq!(class.size(), 12);
    }

    #[test]
    fn test_properties_reach_root_storage() {
        // A derived kind's property block lives in the embedded root; reads
        // and writes through the trait see the same storage.
        let class = MetaClass::new("Vec3", 12);
        class.properties().set("doc", "3-component vector");
        let object: &dyn Meta = &class;
        assert_eq!(object.properties().raw("doc"), "3-component vector");
        assert_eq!(class.base.base.properties.raw("doc"), "3-component vector");
    }

    #[test]
    fn test_construction_starts_with_empty_properties() {
        for (object, _) in all_kinds() {
            assert!(object.properties().is_empty());
        }
    }
}
