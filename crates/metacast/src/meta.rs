// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! The `Meta` base capability and the per-kind impl generator.
//!
//! The reflection layer cannot use host RTTI on its own objects (the objects
//! describe that machinery, so bootstrapping would be circular). Instead,
//! every metadata kind carries a fixed [`MetaId`] and answers ancestry
//! queries through a chained check: compare the candidate against its own id,
//! then delegate to its declared base kind. The chain terminates at the
//! hierarchy root, so the cost is O(depth) with depth bounded by the
//! taxonomy.
//!
//! Both traits here are sealed. The taxonomy is fixed at build time: there is
//! no runtime registration, and outside impls would also invalidate the
//! layout contract the downcast operator ([`meta_cast`](crate::meta_cast))
//! relies on.

use std::sync::Arc;

use crate::meta_id::MetaId;
use crate::property::PropertyCollection;

pub(crate) mod sealed {
    /// Restricts `Meta`/`MetaKind` impls to this crate.
    pub trait Sealed {}
}

/// Common ancestor capability of every metadata kind.
///
/// Object safe; shared handles are usually held as [`MetaRef`].
pub trait Meta: sealed::Sealed + Send + Sync {
    /// This object's own fixed kind identity.
    ///
    /// Side-effect free and constant for the object's lifetime.
    fn meta_id(&self) -> MetaId;

    /// Returns true iff `candidate` equals this object's own identity or the
    /// declared base kind also answers true.
    fn is_kind(&self, candidate: MetaId) -> bool;

    /// The property block embedded in this object.
    ///
    /// Properties are mutable through this shared borrow; see
    /// [`PropertyCollection`] for the rules.
    fn properties(&self) -> &PropertyCollection;
}

/// Static side of a concrete metadata kind: its fixed identity and the
/// ancestry check it declares against its base kind.
///
/// Not object safe; used as the bound of the downcast operator.
pub trait MetaKind: Meta {
    /// The kind identity assigned to this type at build time.
    const META_ID: MetaId;

    /// Chained ancestry check: own id first, then the declared base kind's
    /// check. Roots compare only their own id.
    fn chain_contains(candidate: MetaId) -> bool;
}

/// Shared-ownership handle to a metadata object.
///
/// The object (and its property block) is released when the last holder
/// drops its handle.
pub type MetaRef = Arc<dyn Meta>;

/// Generates the `Meta`/`MetaKind` impls for one concrete kind.
///
/// Two forms:
/// - `meta_kind!(Kind => MetaId::Kind)` for a hierarchy root that owns the
///   property block in a `properties` field.
/// - `meta_kind!(Kind: BaseKind => MetaId::Kind)` for a derived kind whose
///   first field is `base: BaseKind`. This form also emits the compile-time
///   layout assertion the downcast relies on.
macro_rules! meta_kind {
    ($ty:ident => $id:path) => {
        impl $crate::meta::sealed::Sealed for $ty {}

        impl $crate::MetaKind for $ty {
            const META_ID: $crate::MetaId = $id;

            #[inline]
            fn chain_contains(candidate: $crate::MetaId) -> bool {
                candidate == Self::META_ID
            }
        }

        impl $crate::Meta for $ty {
            fn meta_id(&self) -> $crate::MetaId {
                <Self as $crate::MetaKind>::META_ID
            }

            fn is_kind(&self, candidate: $crate::MetaId) -> bool {
                <Self as $crate::MetaKind>::chain_contains(candidate)
            }

            fn properties(&self) -> &$crate::PropertyCollection {
                &self.properties
            }
        }
    };
    ($ty:ident : $base:ident => $id:path) => {
        // Casting a base-typed borrow down to $ty reads the object in place,
        // so the declared base kind must be the `base` field and sit at
        // offset zero.
        const _: () = assert!(std::mem::offset_of!($ty, base) == 0);
        const _: fn(&$ty) -> &$base = |meta| &meta.base;

        impl $crate::meta::sealed::Sealed for $ty {}

        impl $crate::MetaKind for $ty {
            const META_ID: $crate::MetaId = $id;

            #[inline]
            fn chain_contains(candidate: $crate::MetaId) -> bool {
                candidate == Self::META_ID
                    || <$base as $crate::MetaKind>::chain_contains(candidate)
            }
        }

        impl $crate::Meta for $ty {
            fn meta_id(&self) -> $crate::MetaId {
                <Self as $crate::MetaKind>::META_ID
            }

            fn is_kind(&self, candidate: $crate::MetaId) -> bool {
                <Self as $crate::MetaKind>::chain_contains(candidate)
            }

            fn properties(&self) -> &$crate::PropertyCollection {
                $crate::Meta::properties(&self.base)
            }
        }
    };
}
pub(crate) use meta_kind;
