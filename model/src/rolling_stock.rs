pub mod cargo_wagon;
pub mod engine;
#[cfg(test)]
mod tests;

use std::fmt;

use crate::base_types::{StockId, Tons};
use crate::error::TopologyError;

pub use cargo_wagon::CargoWagon;
pub use engine::Engine;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockKind {
    Engine,
    CargoWagon,
}

/// Everything that can be coupled into a train.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RollingStock {
    Engine(Engine),
    CargoWagon(CargoWagon),
}

impl RollingStock {
    pub fn kind(&self) -> StockKind {
        match self {
            RollingStock::Engine(_) => StockKind::Engine,
            RollingStock::CargoWagon(_) => StockKind::CargoWagon,
        }
    }

    pub fn id(&self) -> &StockId {
        match self {
            RollingStock::Engine(engine) => engine.id(),
            RollingStock::CargoWagon(wagon) => wagon.id(),
        }
    }

    pub fn base_weight(&self) -> Tons {
        match self {
            RollingStock::Engine(engine) => engine.base_weight(),
            RollingStock::CargoWagon(wagon) => wagon.base_weight(),
        }
    }

    /// base weight plus whatever the unit carries
    pub fn weight(&self) -> Tons {
        match self {
            RollingStock::Engine(engine) => engine.weight(),
            RollingStock::CargoWagon(wagon) => wagon.weight(),
        }
    }

    /// Checks whether this unit may be given a predecessor.
    pub fn check_previous(&self) -> Result<(), TopologyError> {
        match self {
            RollingStock::Engine(engine) => Err(TopologyError::EngineHasNoPredecessor {
                engine: engine.id().clone(),
            }),
            RollingStock::CargoWagon(_) => Ok(()),
        }
    }
}

impl From<Engine> for RollingStock {
    fn from(engine: Engine) -> Self {
        RollingStock::Engine(engine)
    }
}

impl From<CargoWagon> for RollingStock {
    fn from(wagon: CargoWagon) -> Self {
        RollingStock::CargoWagon(wagon)
    }
}

impl fmt::Display for RollingStock {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RollingStock::Engine(engine) => write!(f, "{}", engine),
            RollingStock::CargoWagon(wagon) => write!(f, "{}", wagon),
        }
    }
}
