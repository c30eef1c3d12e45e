use crate::base_types::{CargoType, StockId};
use crate::config::Config;
use crate::error::{StockError, TopologyError};

use super::cargo_wagon::{resolve_cargo_quantity, QuantityResolution};
use super::{CargoWagon, Engine, RollingStock, StockKind};

fn livestock_wagon(weight_per_unit: u32, quantity: Option<u32>) -> CargoWagon {
    CargoWagon::new(
        StockId::from("W"),
        weight_per_unit,
        CargoType::Livestock,
        quantity,
        &Config::default(),
    )
    .unwrap()
}

#[test]
fn cargo_wagon_without_quantity_is_filled_up() {
    for weight_per_unit in 1..=120 {
        // ACT
        let wagon = livestock_wagon(weight_per_unit, None);

        // ASSERT
        assert_eq!(wagon.cargo_quantity(), 100 / weight_per_unit);
        assert!(wagon.cargo_weight() <= 100);
        assert!(100 - wagon.cargo_weight() < weight_per_unit);
    }

    let wagon = livestock_wagon(5, None);
    assert_eq!(wagon.cargo_quantity(), 20);
    assert_eq!(wagon.cargo_weight(), 100);
    assert_eq!(wagon.weight(), 130);
}

#[test]
fn cargo_wagon_clamps_oversubscribed_quantity() {
    // ACT
    let too_much = livestock_wagon(5, Some(50));
    let exactly_full = livestock_wagon(5, Some(20));
    let overflowing = livestock_wagon(7, Some(u32::MAX));

    // ASSERT
    assert_eq!(too_much.cargo_quantity(), 20);
    assert_eq!(too_much.weight(), 130);
    assert_eq!(exactly_full.cargo_quantity(), 20);
    assert_eq!(overflowing.cargo_quantity(), 14);
    assert_eq!(overflowing.cargo_weight(), 98);
}

#[test]
fn cargo_wagon_keeps_quantity_below_capacity() {
    // ACT
    let wagon = livestock_wagon(5, Some(6));

    // ASSERT
    assert_eq!(wagon.cargo_quantity(), 6);
    assert_eq!(wagon.cargo_weight(), 30);
    assert_eq!(wagon.weight(), 60);
    assert_eq!(wagon.base_weight(), 30);
    assert_eq!(wagon.max_capacity(), 100);
}

#[test]
fn cargo_wagon_rejects_weightless_cargo() {
    // ACT
    let result = CargoWagon::new(
        StockId::from("W0"),
        0,
        CargoType::Freight,
        Some(3),
        &Config::default(),
    );

    // ASSERT
    assert_eq!(
        result,
        Err(StockError::ZeroCargoWeight {
            wagon: StockId::from("W0")
        })
    );
}

#[test]
fn cargo_wagon_defaults() {
    // ACT
    let wagon = CargoWagon::with_defaults(StockId::default(), &Config::default()).unwrap();

    // ASSERT
    assert_eq!(wagon.id().as_str(), "NOID");
    assert_eq!(*wagon.cargo_type(), CargoType::Freight);
    assert_eq!(wagon.cargo_weight_per_unit(), 10);
    assert_eq!(wagon.cargo_quantity(), 10);
    assert_eq!(wagon.to_string(), "[CARGO:FREIGHT-Q10-CW100-TW130/100:NOID]");
}

#[test]
fn cargo_wagon_respects_config() {
    // ARRANGE
    let config = Config {
        engine_base_weight: 120,
        wagon_base_weight: 20,
        wagon_max_capacity: 60,
    };

    // ACT
    let wagon = CargoWagon::new(StockId::from("W"), 7, CargoType::Steel, None, &config).unwrap();

    // ASSERT
    assert_eq!(wagon.cargo_quantity(), 8);
    assert_eq!(wagon.weight(), 76);
    assert_eq!(wagon.to_string(), "[CARGO:STEEL-Q8-CW56-TW76/60:W]");
}

#[test]
fn engine_weight_is_base_weight() {
    // ACT
    let engine = Engine::new(StockId::from("E1"), &Config::default());
    let stock = RollingStock::from(engine.clone());

    // ASSERT
    assert_eq!(engine.weight(), 180);
    assert_eq!(stock.weight(), 180);
    assert_eq!(stock.base_weight(), 180);
    assert_eq!(stock.kind(), StockKind::Engine);
    assert_eq!(stock.to_string(), "[ENG:E1]");
}

#[test]
fn only_engines_refuse_a_predecessor() {
    // ARRANGE
    let config = Config::default();
    let engine = RollingStock::from(Engine::new(StockId::from("E1"), &config));
    let wagon = RollingStock::from(livestock_wagon(5, Some(6)));

    // ACT & ASSERT
    assert_eq!(
        engine.check_previous(),
        Err(TopologyError::EngineHasNoPredecessor {
            engine: StockId::from("E1")
        })
    );
    assert_eq!(wagon.check_previous(), Ok(()));
    assert_eq!(wagon.kind(), StockKind::CargoWagon);
}

#[test]
fn cargo_type_labels() {
    assert_eq!(CargoType::from("LUMBER"), CargoType::Lumber);
    assert_eq!(CargoType::from("GRAIN"), CargoType::Other(String::from("GRAIN")));
    assert_eq!(CargoType::Other(String::from("GRAIN")).to_string(), "GRAIN");
    assert_eq!(CargoType::Livestock.to_string(), "LIVESTOCK");
}

#[test]
fn exactly_full_wagon_is_not_clamped() {
    // ACT & ASSERT
    assert_eq!(resolve_cargo_quantity(Some(20), 5, 100), QuantityResolution::Kept(20));
    assert_eq!(resolve_cargo_quantity(Some(10), 10, 100), QuantityResolution::Kept(10));
    assert_eq!(resolve_cargo_quantity(Some(6), 5, 100), QuantityResolution::Kept(6));
    assert_eq!(resolve_cargo_quantity(None, 3, 100), QuantityResolution::Filled(33));
    assert_eq!(
        resolve_cargo_quantity(Some(50), 5, 100),
        QuantityResolution::Clamped {
            requested: 50,
            loaded: 20
        }
    );
    assert_eq!(
        resolve_cargo_quantity(Some(u32::MAX), 7, 100),
        QuantityResolution::Clamped {
            requested: u32::MAX,
            loaded: 14
        }
    );
}

#[test]
fn oversized_config_saturates_weight() {
    // ARRANGE
    let config = Config {
        engine_base_weight: u32::MAX,
        wagon_base_weight: u32::MAX,
        wagon_max_capacity: 100,
    };

    // ACT
    let wagon = CargoWagon::new(StockId::from("W"), 5, CargoType::Steel, None, &config).unwrap();
    let engine = Engine::new(StockId::from("E"), &config);

    // ASSERT
    assert_eq!(wagon.cargo_weight(), 100);
    assert_eq!(wagon.weight(), u32::MAX);
    assert_eq!(wagon.to_string(), format!("[CARGO:STEEL-Q20-CW100-TW{}/100:W]", u32::MAX));
    assert_eq!(engine.weight(), u32::MAX);
}
