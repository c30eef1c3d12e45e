
use model::base_types::{CargoType, StockId};
use model::config::Config;
use model::error::StockError;
use model::rolling_stock::{CargoWagon, Engine, RollingStock};
use model::Train;

use tracing::info;
use tracing_subscriber::EnvFilter;

/// an engine pulling four cargo wagons loaded with livestock, steel and lumber
pub fn reference_train(config: &Config) -> Result<Train, StockError> {
    let wagons: Vec<(&str, u32, CargoType, Option<u32>)> = vec![
        ("UYO-892", 5, CargoType::Livestock, Some(6)),
        ("FDX-453", 5, CargoType::Livestock, Some(20)),
        ("LLK-432", 10, CargoType::Steel, Some(10)),
        ("RTY-099", 3, CargoType::Lumber, None),
    ];

    let mut stock: Vec<RollingStock> = vec![Engine::new(StockId::from("NXE-334"), config).into()];
    for (id, cargo_weight, cargo_type, cargo_quantity) in wagons {
        let wagon = CargoWagon::new(
            StockId::from(id),
            cargo_weight,
            cargo_type,
            cargo_quantity,
            config,
        )?;
        stock.push(wagon.into());
    }

    Ok(Train::new(stock))
}

pub fn run() -> Result<String, StockError> {
    let config = Config::default();
    let train = reference_train(&config)?;
    info!(
        "assembled train of {} cars with a total weight of {}t",
        train.len(),
        train.weight()
    );
    Ok(train.render())
}

/// log filter from the `RUST_LOG` directives, `info` if they are absent or invalid
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}
