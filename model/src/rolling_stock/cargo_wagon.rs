use std::fmt;

use tracing::warn;

use crate::base_types::{CargoQuantity, CargoType, StockId, Tons};
use crate::config::Config;
use crate::error::StockError;

const DEFAULT_CARGO_WEIGHT_PER_UNIT: Tons = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum QuantityResolution {
    Filled(CargoQuantity),
    Kept(CargoQuantity),
    Clamped {
        requested: CargoQuantity,
        loaded: CargoQuantity,
    },
}

/// Without a request the wagon is filled up. A request whose payload reaches the capacity is
/// reduced to the largest quantity that fits; it only counts as clamped if that differs.
/// `cargo_weight_per_unit` must not be zero.
pub(super) fn resolve_cargo_quantity(
    requested: Option<CargoQuantity>,
    cargo_weight_per_unit: Tons,
    max_capacity: Tons,
) -> QuantityResolution {
    let fill_quantity = max_capacity / cargo_weight_per_unit;
    match requested {
        None => QuantityResolution::Filled(fill_quantity),
        Some(quantity) => match quantity.checked_mul(cargo_weight_per_unit) {
            Some(payload) if payload < max_capacity => QuantityResolution::Kept(quantity),
            _ if quantity == fill_quantity => QuantityResolution::Kept(quantity),
            _ => QuantityResolution::Clamped {
                requested: quantity,
                loaded: fill_quantity,
            },
        },
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CargoWagon {
    id: StockId,
    base_weight: Tons,
    max_capacity: Tons,
    cargo_type: CargoType,
    cargo_weight_per_unit: Tons,
    cargo_quantity: CargoQuantity, // always cargo_quantity * cargo_weight_per_unit <= max_capacity
}

// static functions
impl CargoWagon {
    /// Loads the wagon with `cargo_quantity` units of `cargo_weight_per_unit` tons each.
    /// Without an explicit quantity the wagon is filled up to its capacity.
    /// A quantity that would reach or exceed the capacity is reduced to the largest quantity
    /// that fits.
    pub fn new(
        id: StockId,
        cargo_weight_per_unit: Tons,
        cargo_type: CargoType,
        cargo_quantity: Option<CargoQuantity>,
        config: &Config,
    ) -> Result<CargoWagon, StockError> {
        if cargo_weight_per_unit == 0 {
            return Err(StockError::ZeroCargoWeight { wagon: id });
        }
        let max_capacity = config.wagon_max_capacity;
        let cargo_quantity =
            match resolve_cargo_quantity(cargo_quantity, cargo_weight_per_unit, max_capacity) {
                QuantityResolution::Filled(quantity) | QuantityResolution::Kept(quantity) => {
                    quantity
                }
                QuantityResolution::Clamped { requested, loaded } => {
                    warn!(
                        "cargo wagon {}: {} units of {}t exceed the capacity of {}t; loading {} units",
                        id, requested, cargo_weight_per_unit, max_capacity, loaded
                    );
                    loaded
                }
            };

        Ok(CargoWagon {
            id,
            base_weight: config.wagon_base_weight,
            max_capacity,
            cargo_type,
            cargo_weight_per_unit,
            cargo_quantity,
        })
    }

    /// A freight wagon filled with cargo of 10t per unit.
    pub fn with_defaults(id: StockId, config: &Config) -> Result<CargoWagon, StockError> {
        CargoWagon::new(
            id,
            DEFAULT_CARGO_WEIGHT_PER_UNIT,
            CargoType::default(),
            None,
            config,
        )
    }
}

// methods
impl CargoWagon {
    pub fn id(&self) -> &StockId {
        &self.id
    }

    pub fn base_weight(&self) -> Tons {
        self.base_weight
    }

    pub fn max_capacity(&self) -> Tons {
        self.max_capacity
    }

    pub fn cargo_type(&self) -> &CargoType {
        &self.cargo_type
    }

    pub fn cargo_weight_per_unit(&self) -> Tons {
        self.cargo_weight_per_unit
    }

    pub fn cargo_quantity(&self) -> CargoQuantity {
        self.cargo_quantity
    }

    /// weight of the payload only
    pub fn cargo_weight(&self) -> Tons {
        self.cargo_quantity * self.cargo_weight_per_unit
    }

    pub fn weight(&self) -> Tons {
        self.base_weight.saturating_add(self.cargo_weight())
    }
}

impl fmt::Display for CargoWagon {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[CARGO:{}-Q{}-CW{}-TW{}/{}:{}]",
            self.cargo_type,
            self.cargo_quantity,
            self.cargo_weight(),
            self.weight(),
            self.max_capacity,
            self.id
        )
    }
}
