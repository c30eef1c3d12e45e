use std::fmt;

use crate::base_types::{StockId, Tons};
use crate::config::Config;

/// An engine always leads its train, hence it never accepts a predecessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    id: StockId,
    base_weight: Tons,
}

impl Engine {
    pub fn new(id: StockId, config: &Config) -> Engine {
        Engine {
            id,
            base_weight: config.engine_base_weight,
        }
    }

    pub fn id(&self) -> &StockId {
        &self.id
    }

    pub fn base_weight(&self) -> Tons {
        self.base_weight
    }

    pub fn weight(&self) -> Tons {
        self.base_weight
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[ENG:{}]", self.id)
    }
}
