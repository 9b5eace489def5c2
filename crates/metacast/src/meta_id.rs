// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! `MetaId` taxonomy: the closed set of metadata kinds.
//!
//! Every metadata object in the reflection layer belongs to exactly one kind
//! from this enumeration, assigned at build time. The taxonomy is two
//! disjoint single-parent hierarchies:
//!
//! ```text
//! MetaType
//!   +- MetaEnum
//!   +- MetaStruct
//!        +- MetaClass
//!
//! Translator
//!   +- ScalarTranslator
//!   +- StructureTranslator
//!   +- PointerTranslator
//!   +- EnumerationTranslator
//!   +- TypeTranslator
//!   +- ContainerTranslator
//!        +- SetTranslator
//!        +- SequenceTranslator
//!        +- AssociationTranslator
//! ```
//!
//! Discriminants are dense integers starting at 0 so they can index directly
//! into per-kind tables without a hash lookup. The enumeration is
//! append-only; new kinds go at the end of their hierarchy block.

use std::fmt;

/// Identity of a metadata kind.
///
/// `MetaId` values are used to:
/// - Tag every metadata object with its concrete kind
/// - Drive the chained ancestry check behind [`is_kind`](crate::Meta::is_kind)
/// - Key the safe downcast operator ([`meta_cast`](crate::meta_cast))
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MetaId {
    // --- Type metadata hierarchy ---
    /// Root of the type metadata hierarchy
    MetaType = 0,

    /// Enumeration type metadata
    MetaEnum = 1,

    /// Structure type metadata
    MetaStruct = 2,

    /// Class type metadata (a structure with identity semantics)
    MetaClass = 3,

    // --- Translator hierarchy ---
    /// Root of the value translator hierarchy
    Translator = 4,

    /// Translator for scalar values (integers, floats, booleans)
    ScalarTranslator = 5,

    /// Translator for nested structure values
    StructureTranslator = 6,

    /// Translator for pointer/reference values
    PointerTranslator = 7,

    /// Translator for enumeration values
    EnumerationTranslator = 8,

    /// Translator for type references
    TypeTranslator = 9,

    /// Base of the container translators
    ContainerTranslator = 10,

    /// Translator for unordered unique-element containers
    SetTranslator = 11,

    /// Translator for ordered sequence containers
    SequenceTranslator = 12,

    /// Translator for key/value association containers
    AssociationTranslator = 13,
}

impl MetaId {
    /// Number of kinds in the taxonomy.
    pub const COUNT: usize = 14;

    /// Display names, indexed by [`MetaId::to_index`].
    ///
    /// The array length is tied to [`MetaId::COUNT`] by its type; indexing
    /// with anything outside `[0, COUNT)` is a programming error and panics.
    pub const NAMES: [&'static str; Self::COUNT] = [
        "MetaType",
        "MetaEnum",
        "MetaStruct",
        "MetaClass",
        "Translator",
        "ScalarTranslator",
        "StructureTranslator",
        "PointerTranslator",
        "EnumerationTranslator",
        "TypeTranslator",
        "ContainerTranslator",
        "SetTranslator",
        "SequenceTranslator",
        "AssociationTranslator",
    ];

    /// Return the dense index for this kind.
    ///
    /// This avoids unchecked casts and keeps the mapping explicit.
    pub const fn to_index(self) -> usize {
        match self {
            MetaId::MetaType => 0,
            MetaId::MetaEnum => 1,
            MetaId::MetaStruct => 2,
            MetaId::MetaClass => 3,
            MetaId::Translator => 4,
            MetaId::ScalarTranslator => 5,
            MetaId::StructureTranslator => 6,
            MetaId::PointerTranslator => 7,
            MetaId::EnumerationTranslator => 8,
            MetaId::TypeTranslator => 9,
            MetaId::ContainerTranslator => 10,
            MetaId::SetTranslator => 11,
            MetaId::SequenceTranslator => 12,
            MetaId::AssociationTranslator => 13,
        }
    }

    /// Convert from a dense index.
    pub const fn from_index(value: usize) -> Option<Self> {
        match value {
            0 => Some(MetaId::MetaType),
            1 => Some(MetaId::MetaEnum),
            2 => Some(MetaId::MetaStruct),
            3 => Some(MetaId::MetaClass),
            4 => Some(MetaId::Translator),
            5 => Some(MetaId::ScalarTranslator),
            6 => Some(MetaId::StructureTranslator),
            7 => Some(MetaId::PointerTranslator),
            8 => Some(MetaId::EnumerationTranslator),
            9 => Some(MetaId::TypeTranslator),
            10 => Some(MetaId::ContainerTranslator),
            11 => Some(MetaId::SetTranslator),
            12 => Some(MetaId::SequenceTranslator),
            13 => Some(MetaId::AssociationTranslator),
            _ => None,
        }
    }

    /// Human-readable name of this kind.
    pub const fn name(self) -> &'static str {
        Self::NAMES[self.to_index()]
    }

    /// Declared parent kind, or `None` for the two hierarchy roots.
    pub const fn parent(self) -> Option<MetaId> {
        match self {
            MetaId::MetaType | MetaId::Translator => None,
            MetaId::MetaEnum | MetaId::MetaStruct => Some(MetaId::MetaType),
            MetaId::MetaClass => Some(MetaId::MetaStruct),
            MetaId::ScalarTranslator
            | MetaId::StructureTranslator
            | MetaId::PointerTranslator
            | MetaId::EnumerationTranslator
            | MetaId::TypeTranslator
            | MetaId::ContainerTranslator => Some(MetaId::Translator),
            MetaId::SetTranslator
            | MetaId::SequenceTranslator
            | MetaId::AssociationTranslator => Some(MetaId::ContainerTranslator),
        }
    }

    /// Root of the hierarchy this kind belongs to.
    pub fn root(self) -> MetaId {
        let mut current = self;
        while let Some(parent) = current.parent() {
            current = parent;
        }
        current
    }

    /// Returns true if `ancestor` is on this kind's parent chain
    /// (every kind is an ancestor of itself).
    ///
    /// This is the taxonomy-level view of the ancestry check; metadata
    /// objects answer the same question through
    /// [`Meta::is_kind`](crate::Meta::is_kind).
    pub fn is_a(self, ancestor: MetaId) -> bool {
        let mut current = Some(self);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = id.parent();
        }
        false
    }

    /// Returns true if this kind belongs to the type metadata hierarchy.
    pub const fn is_type_metadata(self) -> bool {
        matches!(
            self,
            MetaId::MetaType | MetaId::MetaEnum | MetaId::MetaStruct | MetaId::MetaClass
        )
    }

    /// Returns true if this kind belongs to the translator hierarchy.
    pub const fn is_translator(self) -> bool {
        matches!(
            self,
            MetaId::Translator
                | MetaId::ScalarTranslator
                | MetaId::StructureTranslator
                | MetaId::PointerTranslator
                | MetaId::EnumerationTranslator
                | MetaId::TypeTranslator
                | MetaId::ContainerTranslator
                | MetaId::SetTranslator
                | MetaId::SequenceTranslator
                | MetaId::AssociationTranslator
        )
    }

    /// Returns true for the container translator family.
    pub const fn is_container_translator(self) -> bool {
        matches!(
            self,
            MetaId::ContainerTranslator
                | MetaId::SetTranslator
                | MetaId::SequenceTranslator
                | MetaId::AssociationTranslator
        )
    }
}

impl fmt::Display for MetaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_are_dense() {
        for index in 0..MetaId::COUNT {
            let id = MetaId::from_index(index).expect("dense index");
            assert_eq!(id.to_index(), index);
        }
        assert_eq!(MetaId::from_index(MetaId::COUNT), None);
        assert_eq!(MetaId::from_index(usize::MAX), None);
    }

    #[test]
    fn test_names_match_indices() {
        for index in 0..MetaId::COUNT {
            let id = MetaId::from_index(index).expect("dense index");
            assert_eq!(id.name(), MetaId::NAMES[index]);
        }
        assert_eq!(MetaId::MetaClass.name(), "MetaClass");
        assert_eq!(MetaId::AssociationTranslator.name(), "AssociationTranslator");
    }

    #[test]
    fn test_parent_chains() {
        assert_eq!(MetaId::MetaType.parent(), None);
        assert_eq!(MetaId::Translator.parent(), None);
        assert_eq!(MetaId::MetaClass.parent(), Some(MetaId::MetaStruct));
        assert_eq!(MetaId::MetaStruct.parent(), Some(MetaId::MetaType));
        assert_eq!(MetaId::SetTranslator.parent(), Some(MetaId::ContainerTranslator));
        assert_eq!(MetaId::ContainerTranslator.parent(), Some(MetaId::Translator));
        assert_eq!(MetaId::ScalarTranslator.parent(), Some(MetaId::Translator));
    }

    #[test]
    fn test_is_a() {
        assert!(MetaId::MetaClass.is_a(MetaId::MetaClass));
        assert!(MetaId::MetaClass.is_a(MetaId::MetaStruct));
        assert!(MetaId::MetaClass.is_a(MetaId::MetaType));
        assert!(!MetaId::MetaClass.is_a(MetaId::MetaEnum));
        assert!(!MetaId::MetaClass.is_a(MetaId::Translator));
        assert!(MetaId::SequenceTranslator.is_a(MetaId::Translator));
        assert!(!MetaId::Translator.is_a(MetaId::SequenceTranslator));
    }

    #[test]
    fn test_roots() {
        assert_eq!(MetaId::MetaClass.root(), MetaId::MetaType);
        assert_eq!(MetaId::MetaType.root(), MetaId::MetaType);
        assert_eq!(MetaId::AssociationTranslator.root(), MetaId::Translator);
    }

    #[test]
    fn test_hierarchies_are_disjoint() {
        for index in 0..MetaId::COUNT {
            let id = MetaId::from_index(index).expect("dense index");
            assert_ne!(id.is_type_metadata(), id.is_translator(), "{} must be in exactly one hierarchy", id);
            if id.is_container_translator() {
                assert!(id.is_translator());
            }
        }
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(MetaId::MetaEnum.to_string(), "MetaEnum");
        assert_eq!(MetaId::SetTranslator.to_string(), "SetTranslator");
    }
}
