// Domain layer: run settings, run summary and the settings port.

pub mod model;
pub mod ports;
