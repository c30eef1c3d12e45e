use thiserror::Error;

use crate::base_types::{StockId, StockIdx};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TopologyError {
    #[error("engine {engine} is always the lead vehicle and cannot have a predecessor")]
    EngineHasNoPredecessor { engine: StockId },

    #[error("{0} is not part of the train")]
    UnknownStock(StockIdx),

    #[error("linking {from} to {to} would close a cycle")]
    CyclicLink { from: StockIdx, to: StockIdx },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StockError {
    #[error("cargo wagon {wagon} carries cargo without weight; cannot determine its quantity")]
    ZeroCargoWeight { wagon: StockId },
}
