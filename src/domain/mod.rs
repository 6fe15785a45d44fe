// Domain layer: models, ports and the principle examples. No I/O here beyond logging.

pub mod animals;
pub mod model;
pub mod ports;
pub mod shapes;
pub mod workers;
