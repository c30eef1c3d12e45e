
use std::fmt;

use itertools::Itertools;
use tracing::debug;

use crate::base_types::{StockIdx, Tons};
use crate::error::TopologyError;
use crate::rolling_stock::RollingStock;

#[derive(Clone, Debug)]
struct Car {
    stock: RollingStock,
    previous: Option<StockIdx>,
    next: Option<StockIdx>,
}

/// A train owns its rolling stock in an arena; the coupling between the cars is given by the
/// `next` links starting at the lead car. `previous` links are only set on request and are
/// never followed.
#[derive(Clone, Debug, Default)]
pub struct Train {
    cars: Vec<Car>,
    lead_car: Option<StockIdx>,
    last_car: Option<StockIdx>, // always the end of the chain starting at lead_car
}

// static functions
impl Train {
    pub fn empty() -> Train {
        Train::default()
    }

    /// couples the given stock in the given order, the first one becomes the lead car
    pub fn new(initial_train: impl IntoIterator<Item = RollingStock>) -> Train {
        let mut train = Train::empty();
        for stock in initial_train {
            train.append(stock);
        }
        train
    }
}

// modifications
impl Train {
    /// couples the stock behind the last car and returns its position in the arena
    pub fn append(&mut self, stock: RollingStock) -> StockIdx {
        let idx = StockIdx::from(self.cars.len());
        debug!("appending {} as {}", stock.id(), idx);
        self.cars.push(Car {
            stock,
            previous: None,
            next: None,
        });

        match self.last_car {
            None => self.lead_car = Some(idx),
            Some(last) => self.cars[last.idx()].next = Some(idx),
        }
        self.last_car = Some(idx);
        idx
    }

    /// Overwrites the forward link of `idx`. Cars that are no longer reachable from the lead car
    /// stay in the arena but are not part of the coupled train anymore.
    pub fn set_next(&mut self, idx: StockIdx, next: Option<StockIdx>) -> Result<(), TopologyError> {
        self.verify(idx)?;
        if let Some(to) = next {
            self.verify(to)?;
            if self.chain_from(to).any(|reachable| reachable == idx) {
                return Err(TopologyError::CyclicLink { from: idx, to });
            }
        }

        debug!("linking {} -> {:?}", idx, next);
        self.cars[idx.idx()].next = next;
        self.last_car = self.chain_from_lead().last();
        Ok(())
    }

    /// Overwrites the backward link of `idx`, unless the stock at `idx` refuses predecessors.
    pub fn set_previous(
        &mut self,
        idx: StockIdx,
        previous: Option<StockIdx>,
    ) -> Result<(), TopologyError> {
        self.verify(idx)?;
        self.cars[idx.idx()].stock.check_previous()?;
        if let Some(from) = previous {
            self.verify(from)?;
        }

        debug!("linking {:?} <- {}", previous, idx);
        self.cars[idx.idx()].previous = previous;
        Ok(())
    }
}

// queries
impl Train {
    pub fn get(&self, idx: StockIdx) -> Option<&RollingStock> {
        self.cars.get(idx.idx()).map(|car| &car.stock)
    }

    pub fn lead_car(&self) -> Option<StockIdx> {
        self.lead_car
    }

    pub fn last_car(&self) -> Option<StockIdx> {
        self.last_car
    }

    pub fn next(&self, idx: StockIdx) -> Option<StockIdx> {
        self.cars.get(idx.idx()).and_then(|car| car.next)
    }

    pub fn previous(&self, idx: StockIdx) -> Option<StockIdx> {
        self.cars.get(idx.idx()).and_then(|car| car.previous)
    }

    /// the coupled stock from the lead car to the last car
    pub fn iter(&self) -> impl Iterator<Item = &RollingStock> + '_ {
        self.chain_from_lead().map(|idx| &self.cars[idx.idx()].stock)
    }

    /// number of coupled cars
    pub fn len(&self) -> usize {
        self.chain_from_lead().count()
    }

    pub fn is_empty(&self) -> bool {
        self.lead_car.is_none()
    }

    /// total weight of all coupled cars, saturating at `Tons::MAX`
    pub fn weight(&self) -> Tons {
        self.iter()
            .map(|stock| stock.weight())
            .fold(0, Tons::saturating_add)
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

// private helpers
impl Train {
    fn verify(&self, idx: StockIdx) -> Result<(), TopologyError> {
        if idx.idx() < self.cars.len() {
            Ok(())
        } else {
            Err(TopologyError::UnknownStock(idx))
        }
    }

    fn chain_from(&self, start: StockIdx) -> impl Iterator<Item = StockIdx> + '_ {
        std::iter::successors(Some(start), |idx| self.cars[idx.idx()].next)
    }

    fn chain_from_lead(&self) -> impl Iterator<Item = StockIdx> + '_ {
        std::iter::successors(self.lead_car, |idx| self.cars[idx.idx()].next)
    }
}

impl FromIterator<RollingStock> for Train {
    fn from_iter<I: IntoIterator<Item = RollingStock>>(iter: I) -> Self {
        Train::new(iter)
    }
}

impl fmt::Display for Train {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.iter().join("->\n"))
    }
}
