// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # Metacast - self-hosted RTTI for reflection metadata
//!
//! Runtime type identification and safe downcasting for the metadata objects
//! of a reflection/serialization framework. The framework cannot use the
//! host language's own dynamic-type facilities on these objects — they are
//! the objects that *describe* those facilities, so bootstrapping would be
//! circular. This crate defines the closed kind taxonomy, the chained
//! ancestry check, the identity-keyed downcast, and the string-property
//! block every metadata object carries.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use metacast::{meta_cast, Meta, MetaClass, MetaId};
//!
//! // Concrete kinds know their whole ancestry without host RTTI.
//! let class = MetaClass::new("Vec3", 12);
//! assert!(class.is_kind(MetaId::MetaStruct));
//! assert!(!class.is_kind(MetaId::Translator));
//!
//! // Shared handles downcast through the identity chain.
//! let handle: Arc<dyn Meta> = Arc::new(class);
//! let class = meta_cast::<MetaClass>(handle.as_ref()).expect("is a MetaClass");
//! assert_eq!(class.name(), "Vec3");
//!
//! // Arbitrary string-keyed annotations attach through shared borrows.
//! handle.properties().set("ui.tooltip", "A 3-component vector");
//! assert_eq!(handle.properties().raw("ui.tooltip"), "A 3-component vector");
//! ```
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`MetaId`] | Fixed identity of each metadata kind, dense and build-time assigned |
//! | [`Meta`] | Base capability: identity, chained ancestry check, property block |
//! | [`MetaKind`] | Static per-kind identity, the bound of the downcast operator |
//! | [`meta_cast`] / [`meta_cast_mut`] | Identity-checked downcasts for both borrow flavors |
//! | [`PropertyCollection`] | String-keyed side table with typed get/set |
//! | [`MetaRef`] | Shared-ownership handle (`Arc<dyn Meta>`) |
//!
//! ## Design Notes
//!
//! - The taxonomy is fixed at build time. Both traits are sealed; there is
//!   no runtime registration of new kinds.
//! - The ancestry check is chained, not flat: each kind compares its own id
//!   and then delegates to its declared base kind, terminating at the
//!   hierarchy root. Depth is bounded by the taxonomy (at most 3 hops).
//! - Property values live only in string form; typed access converts through
//!   `Display`/`FromStr`, and a stored value that does not parse is a strict
//!   error, never a silent default.
//! - The taxonomy tables are immutable process-wide state and safe to read
//!   concurrently; property blocks serialize their own individual
//!   operations but nothing beyond that.

mod cast;
mod kinds;
mod meta;
mod meta_id;
mod property;

pub use cast::{meta_cast, meta_cast_mut};
pub use kinds::{
    AssociationTranslator, ContainerTranslator, EnumerationTranslator, MetaClass, MetaEnum,
    MetaStruct, MetaType, PointerTranslator, ScalarTranslator, SequenceTranslator, SetTranslator,
    StructureTranslator, Translator, TypeTranslator,
};
pub use meta::{Meta, MetaKind, MetaRef};
pub use meta_id::MetaId;
pub use property::{PropertyCollection, PropertyError};
