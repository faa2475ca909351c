// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Benchmarks for invoice totals and layout composition.
//!
//! Run with: cargo bench
//!
//! Benchmarks include:
//! - Grand total over growing item counts
//! - Layout composition over growing item counts
//! - Concurrent composition sharing one style registry

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use invoice_composer::{Composer, Invoice, JsonRenderer, LineItem, Renderer, StyleRegistry};
use rayon::prelude::*;
use rust_decimal::Decimal;

// =============================================================================
// Helper Functions
// =============================================================================

fn make_invoice(count: usize) -> Invoice {
    let items = (0..count)
        .map(|i| {
            let quantity = (i % 7) as i64 + 1;
            let price = Decimal::new(i as i64 * 37 + 99, 2);
            LineItem::new(format!("Item {i}"), quantity, price).unwrap()
        })
        .collect();
    Invoice::new("Bench Shop", "Bench Street", items)
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_grand_total(c: &mut Criterion) {
    let mut group = c.benchmark_group("grand_total");

    for count in [10, 100, 1_000].iter() {
        let invoice = make_invoice(*count);
        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &invoice, |b, invoice| {
            b.iter(|| black_box(invoice.grand_total_display()))
        });
    }
    group.finish();
}

fn bench_compose(c: &mut Criterion) {
    let styles = StyleRegistry::standard();
    let composer = Composer::new(&styles);
    let mut group = c.benchmark_group("compose");

    for count in [10, 100, 1_000].iter() {
        let invoice = make_invoice(*count);
        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &invoice, |b, invoice| {
            b.iter(|| black_box(composer.compose(invoice).unwrap()))
        });
    }
    group.finish();
}

fn bench_render_json(c: &mut Criterion) {
    let styles = StyleRegistry::standard();
    let document = Composer::new(&styles).compose(&make_invoice(100)).unwrap();

    c.bench_function("render_json_100_items", |b| {
        b.iter(|| {
            let mut out = Vec::new();
            JsonRenderer::default().render(&document, &mut out).unwrap();
            black_box(out)
        })
    });
}

fn bench_parallel_compose(c: &mut Criterion) {
    let styles = StyleRegistry::standard();
    let invoices: Vec<_> = (0..64).map(|_| make_invoice(100)).collect();

    c.bench_function("parallel_compose_64x100", |b| {
        b.iter(|| {
            let nodes: usize = invoices
                .par_iter()
                .map(|invoice| Composer::new(&styles).compose(invoice).unwrap().nodes.len())
                .sum();
            black_box(nodes)
        })
    });
}

criterion_group!(
    benches,
    bench_grand_total,
    bench_compose,
    bench_render_json,
    bench_parallel_compose
);
criterion_main!(benches);
