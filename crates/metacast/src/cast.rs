// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Safe downcasting between metadata kind handles.
//!
//! [`meta_cast`] turns a base-typed borrow into a concrete-kind borrow when
//! the object's identity chain says the conversion is valid, and `None`
//! otherwise. The check goes through [`Meta::is_kind`], not host RTTI, so it
//! works on the reflection layer's own objects. Cost is O(depth) in the
//! taxonomy, never panics, never mutates.
//!
//! Both borrow flavors are covered: [`meta_cast`] for shared borrows,
//! [`meta_cast_mut`] for exclusive ones. The input's capability is preserved
//! exactly; there is no way to cast exclusivity in or out. A possibly-absent
//! handle composes through `Option`:
//!
//! ```
//! use metacast::{meta_cast, Meta, MetaClass, MetaStruct};
//!
//! let class = MetaClass::new("Vec3", 12);
//! let maybe: Option<&dyn Meta> = Some(&class);
//! assert!(maybe.and_then(meta_cast::<MetaStruct>).is_some());
//! assert!(None::<&dyn Meta>.and_then(meta_cast::<MetaStruct>).is_none());
//! ```

use crate::meta::{Meta, MetaKind};

/// Downcast a shared metadata borrow to concrete kind `T`.
///
/// Returns `Some` iff the object's kind chain contains `T::META_ID`; the
/// returned borrow views the same object, at the same address, for the same
/// lifetime.
pub fn meta_cast<T: MetaKind>(meta: &dyn Meta) -> Option<&T> {
    if meta.is_kind(T::META_ID) {
        // SAFETY: `is_kind` proved `T` is on the object's kind chain. Kind
        // impls are sealed and generated by `meta_kind!`, which asserts at
        // compile time that each base kind sits at offset zero of its
        // derived kind, so the concrete object starts with a valid `T`.
        Some(unsafe { &*(meta as *const dyn Meta).cast::<T>() })
    } else {
        None
    }
}

/// Downcast an exclusive metadata borrow to concrete kind `T`.
///
/// Same contract as [`meta_cast`]; the returned borrow keeps the input's
/// exclusivity.
pub fn meta_cast_mut<T: MetaKind>(meta: &mut dyn Meta) -> Option<&mut T> {
    if meta.is_kind(T::META_ID) {
        // SAFETY: same chain and layout argument as `meta_cast`; the input
        // borrow is consumed, so the exclusive result cannot alias it.
        Some(unsafe { &mut *(meta as *mut dyn Meta).cast::<T>() })
    } else {
        None
    }
}
