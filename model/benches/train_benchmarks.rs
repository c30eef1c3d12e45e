use criterion::{criterion_group, criterion_main, Criterion};
use model::{
    base_types::{CargoType, StockId},
    config::Config,
    rolling_stock::{CargoWagon, Engine, RollingStock},
    Train,
};

fn long_train(config: &Config, length: usize) -> Vec<RollingStock> {
    let mut stock: Vec<RollingStock> = vec![Engine::new(StockId::from("E0"), config).into()];
    stock.extend((1..length).map(|i| {
        CargoWagon::new(
            StockId::from(format!("W{}", i)),
            (i % 20 + 1) as u32,
            CargoType::Freight,
            None,
            config,
        )
        .unwrap()
        .into()
    }));
    stock
}

pub fn train_benchmarks(c: &mut Criterion) {
    let config = Config::default();
    let stock = long_train(&config, 10_000);

    c.bench_function("build_long_train", |b| {
        b.iter(|| Train::new(stock.clone()));
    });

    let train = Train::new(stock.clone());
    c.bench_function("render_long_train", |b| {
        b.iter(|| train.to_string());
    });
}

criterion_group!(benches, train_benchmarks);
criterion_main!(benches);
