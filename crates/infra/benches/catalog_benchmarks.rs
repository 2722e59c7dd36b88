use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use std::sync::Arc;

use solemart_catalog::{Brand, Category, Gender, NewImage, ProductDraft, SortKey};
use solemart_infra::service::CatalogQuery;
use solemart_infra::store::{InMemoryProductStore, ProductStore};

fn draft(n: u64) -> ProductDraft {
    let brand = match n % 6 {
        0 => Brand::Nike,
        1 => Brand::Adidas,
        2 => Brand::Puma,
        3 => Brand::Converse,
        4 => Brand::Vans,
        _ => Brand::NewBalance,
    };
    let category = match n % 3 {
        0 => Category::Running,
        1 => Category::Sneakers,
        _ => Category::Boots,
    };
    let gender = match n % 3 {
        0 => Gender::Men,
        1 => Gender::Women,
        _ => Gender::Kids,
    };
    ProductDraft::new(
        format!("Model {n:05}"),
        5_000 + (n * 37) % 20_000,
        if n % 5 == 0 { 1_000 } else { 0 },
        brand,
        category,
        gender,
        NewImage {
            url: format!("https://img.example/{n}.jpg"),
            alt: format!("Model {n:05}"),
        },
    )
    .expect("valid draft")
}

fn seeded_query(
    rt: &tokio::runtime::Runtime,
    count: u64,
) -> CatalogQuery<Arc<InMemoryProductStore>> {
    let store = Arc::new(InMemoryProductStore::new());
    rt.block_on(async {
        for n in 0..count {
            store.insert(draft(n)).await.expect("seed insert");
        }
    });
    CatalogQuery::new(store)
}

fn bench_paged_reads(c: &mut Criterion) {
    let rt = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime");

    let mut group = c.benchmark_group("paged_reads");
    for &count in &[1_000u64, 10_000] {
        let query = seeded_query(&rt, count);
        group.throughput(Throughput::Elements(count));

        group.bench_with_input(BenchmarkId::new("list_all_sorted", count), &count, |b, _| {
            b.iter(|| {
                rt.block_on(async {
                    let page = query
                        .list_all(SortKey::PriceLowest, black_box(3), 24)
                        .await
                        .expect("list_all");
                    black_box(page)
                })
            })
        });

        group.bench_with_input(BenchmarkId::new("search", count), &count, |b, _| {
            b.iter(|| {
                rt.block_on(async {
                    let page = query
                        .search(black_box("Model 00"), 1, 24)
                        .await
                        .expect("search");
                    black_box(page)
                })
            })
        });

        group.bench_with_input(
            BenchmarkId::new("category_and_gender", count),
            &count,
            |b, _| {
                b.iter(|| {
                    rt.block_on(async {
                        let page = query
                            .list_by_category_and_gender(
                                Category::Sneakers,
                                Gender::All,
                                SortKey::NameAsc,
                                1,
                                24,
                            )
                            .await
                            .expect("category page");
                        black_box(page)
                    })
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_paged_reads);
criterion_main!(benches);
