//! Benchmarks for document conversion
//!
//! Copyright (c) 2025 Propwire Team
//! Licensed under the Apache-2.0 license

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use propwire_core::{
    from_list_document, to_document, Contact, ContactList, Document, WireConvention,
};
use serde_json::{json, Value};

fn contacts_page(size: usize) -> Document {
    let contacts: Vec<Value> = (0..size)
        .map(|i| {
            json!({
                "vid": i,
                "canonical-vid": i,
                "properties": {
                    "email": {"value": format!("user{}@example.com", i)},
                    "firstname": {"value": "Test"},
                    "lastname": {"value": format!("User {}", i)},
                    "createdate": {"value": "1392643921079"},
                    "hs_analytics_source": {"value": "DIRECT_TRAFFIC"}
                }
            })
        })
        .collect();

    match json!({"contacts": contacts, "has-more": true, "vid-offset": size}) {
        Value::Object(map) => map,
        _ => unreachable!(),
    }
}

fn bench_list_decoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_decoding");
    for size in [10usize, 100, 1000] {
        let page = contacts_page(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &page, |b, page| {
            b.iter(|| from_list_document::<ContactList>(black_box(page)).unwrap())
        });
    }
    group.finish();
}

fn bench_outbound(c: &mut Criterion) {
    let contact = Contact {
        vid: Some(1),
        email: Some("user@example.com".to_string()),
        first_name: Some("Test".to_string()),
        last_name: Some("User".to_string()),
        lifecycle_stage: Some("lead".to_string()),
        ..Default::default()
    };

    for convention in [WireConvention::PropertyEnvelope, WireConvention::FlatNamed] {
        c.bench_function(&format!("to_document_{}", convention), |b| {
            b.iter(|| to_document(black_box(&contact), convention.uses_flat()).unwrap())
        });
    }
}

criterion_group!(benches, bench_list_decoding, bench_outbound);
criterion_main!(benches);
