use derive_more::Display;
use derive_more::From;

pub type Idx = usize;

/// position of a car inside the arena of a `Train`
#[derive(Display, From, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display(fmt = "car{}", _0)]
pub struct StockIdx(pub Idx);

impl StockIdx {
    pub(crate) fn idx(&self) -> Idx {
        self.0
    }
}

/// label painted on the rolling stock, e.g. "NXE-334"
#[derive(Display, From, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StockId(String);

impl StockId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for StockId {
    fn default() -> Self {
        StockId(String::from("NOID"))
    }
}

impl From<&str> for StockId {
    fn from(string: &str) -> Self {
        StockId(String::from(string))
    }
}

#[derive(Display, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CargoType {
    #[default]
    #[display(fmt = "FREIGHT")]
    Freight,
    #[display(fmt = "LIVESTOCK")]
    Livestock,
    #[display(fmt = "STEEL")]
    Steel,
    #[display(fmt = "LUMBER")]
    Lumber,
    #[display(fmt = "{}", _0)]
    Other(String),
}

impl From<&str> for CargoType {
    fn from(string: &str) -> Self {
        match string {
            "FREIGHT" => CargoType::Freight,
            "LIVESTOCK" => CargoType::Livestock,
            "STEEL" => CargoType::Steel,
            "LUMBER" => CargoType::Lumber,
            other => CargoType::Other(String::from(other)),
        }
    }
}

pub type Tons = u32;
pub type CargoQuantity = u32;
