use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use food_ordering::view_model::pricing::cart_total;
use food_ordering::view_model::PriceFormatter;
use food_ordering::{
  CartLine, CatalogItem, Coordinate, MemoryDocumentStore, MockIdentityProvider, MockLocationProvider,
  OrderingConfig, OrderingState, OrderingViewModel, Placemark, Services,
};
use std::sync::Arc;
use tokio::runtime::Runtime;

const MENU: [&str; 8] = ["Burger", "Pizza", "Burrito", "Ramen", "Salad", "Taco", "Curry", "Sushi"];

fn catalog(size: usize) -> Vec<CatalogItem> {
  (0..size)
    .map(|i| CatalogItem::new(format!("item_{}", i), format!("{} #{}", MENU[i % MENU.len()], i), 1.0 + (i % 20) as f64 * 0.25))
    .collect()
}

fn state_with(size: usize, filter: &str) -> OrderingState {
  OrderingState {
    items: catalog(size),
    applied_filter: filter.to_string(),
    ..Default::default()
  }
}

fn bench_filtered_projection(c: &mut Criterion) {
  let mut group = c.benchmark_group("FilteredProjection");

  for size in [10usize, 100, 1000].iter() {
    group.throughput(Throughput::Elements(*size as u64));
    for query in ["", "bur", "nothing-matches"].iter() {
      let state = state_with(*size, query);
      group.bench_with_input(
        BenchmarkId::new(format!("query_{:?}", query), size),
        &state,
        |b, state| b.iter(|| state.filtered()),
      );
    }
  }
  group.finish();
}

fn bench_cart_total(c: &mut Criterion) {
  let mut group = c.benchmark_group("CartTotal");
  let prices = PriceFormatter::new("USD").unwrap();

  for lines in [1usize, 10, 100].iter() {
    let cart: Vec<CartLine> = catalog(*lines).into_iter().map(CartLine::new).collect();
    group.throughput(Throughput::Elements(*lines as u64));
    group.bench_with_input(BenchmarkId::from_parameter(lines), &cart, |b, cart| {
      b.iter(|| prices.format(cart_total(cart)))
    });
  }
  group.finish();
}

fn bench_fetch_catalog(c: &mut Criterion) {
  let mut group = c.benchmark_group("FetchCatalog");
  let rt = Runtime::new().unwrap();

  for size in [10usize, 100, 1000].iter() {
    let store = Arc::new(MemoryDocumentStore::with_items("Items", &catalog(*size)));
    let services = Services::new(
      store,
      Arc::new(MockIdentityProvider::new()),
      Arc::new(MockLocationProvider::new(Coordinate::new(0.0, 0.0), Placemark::default())),
    );
    let vm = Arc::new(OrderingViewModel::new(services, OrderingConfig::default()).unwrap());

    group.throughput(Throughput::Elements(*size as u64));
    group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
      b.to_async(&rt).iter(|| {
        let vm = vm.clone();
        async move { vm.fetch_catalog().await.unwrap() }
      });
    });
  }
  group.finish();
}

criterion_group!(benches, bench_filtered_projection, bench_cart_total, bench_fetch_catalog);
criterion_main!(benches);
