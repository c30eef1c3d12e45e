use crate::base_types::Tons;

pub struct Config {
    pub engine_base_weight: Tons,
    pub wagon_base_weight: Tons,
    pub wagon_max_capacity: Tons, // payload limit of a single cargo wagon
}

impl Default for Config {
    fn default() -> Self {
        Config {
            engine_base_weight: 180,
            wagon_base_weight: 30,
            wagon_max_capacity: 100,
        }
    }
}
