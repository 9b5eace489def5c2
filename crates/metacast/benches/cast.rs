// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Ancestry check and downcast micro-benchmarks.
//!
//! `is_kind` is a chained comparison bounded by taxonomy depth (at most 3
//! hops), and `meta_cast` adds only the pointer cast on top. These benches
//! keep an eye on both paths, hit and miss.

use criterion::{criterion_group, criterion_main, Criterion};
use metacast::{meta_cast, Meta, MetaClass, MetaId, ScalarTranslator};
use std::hint::black_box as bb;

fn bench_is_kind(c: &mut Criterion) {
    let class: Box<dyn Meta> = Box::new(MetaClass::new("Bench", 64));

    // Deepest hit: MetaClass -> MetaStruct -> MetaType.
    c.bench_function("is_kind_chain_hit", |b| {
        b.iter(|| bb(class.is_kind(bb(MetaId::MetaType))))
    });

    // Miss walks the full chain and rejects.
    c.bench_function("is_kind_chain_miss", |b| {
        b.iter(|| bb(class.is_kind(bb(MetaId::Translator))))
    });
}

fn bench_meta_cast(c: &mut Criterion) {
    let class: Box<dyn Meta> = Box::new(MetaClass::new("Bench", 64));

    c.bench_function("meta_cast_hit", |b| {
        b.iter(|| bb(meta_cast::<MetaClass>(bb(class.as_ref())).is_some()))
    });

    c.bench_function("meta_cast_miss", |b| {
        b.iter(|| bb(meta_cast::<ScalarTranslator>(bb(class.as_ref())).is_none()))
    });
}

criterion_group!(benches, bench_is_kind, bench_meta_cast);
criterion_main!(benches);
