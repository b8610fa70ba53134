use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use lustre_catalog::{Catalog, CollectionsQuery, CollectionsSession, FilterEvent, Product};
use lustre_core::{Price, ProductId, WishlistIds};

const CATEGORIES: [&str; 4] = ["rings", "necklaces", "earrings", "bangles"];
const METALS: [&str; 3] = ["gold", "silver", "platinum"];

fn synthetic_catalog(size: u64) -> Catalog {
    let products = (1..=size)
        .map(|i| Product {
            id: ProductId::new(i),
            name: format!("Piece {i}"),
            category: CATEGORIES[(i % 4) as usize].to_string(),
            metal: METALS[(i % 3) as usize].to_string(),
            price: Price::new(1_000 + (i * 137) % 200_000),
            image_url: None,
            model_url: None,
            sku: format!("SKU-{i:05}"),
            description: String::new(),
        })
        .collect();
    Catalog::new(products).unwrap()
}

/// One keystroke in the search box: full filter pass plus full render.
fn bench_keystroke(c: &mut Criterion) {
    let mut group = c.benchmark_group("keystroke_pass");

    for size in [50u64, 500, 5_000] {
        let catalog = synthetic_catalog(size);
        let wishlist: WishlistIds = (1..=size).step_by(7).map(ProductId::new).collect();
        group.throughput(Throughput::Elements(size));

        group.bench_with_input(BenchmarkId::from_parameter(size), &catalog, |b, catalog| {
            let mut session = CollectionsSession::new(catalog.clone(), &CollectionsQuery::default());
            session
                .apply(FilterEvent::MetalToggled {
                    value: "gold".to_string(),
                    checked: true,
                })
                .unwrap();
            let mut flip = false;
            b.iter(|| {
                flip = !flip;
                let term = if flip { "pie" } else { "piece 1" };
                session
                    .apply(FilterEvent::SearchInput {
                        term: term.to_string(),
                    })
                    .unwrap();
                black_box(session.render(&wishlist))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_keystroke);
criterion_main!(benches);
