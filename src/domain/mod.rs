// Domain layer: dataset model and the ports (source, storage, surface) adapters plug into.

pub mod model;
pub mod ports;
