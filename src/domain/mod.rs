// Domain layer: the public configuration model and the environment port.

pub mod model;
pub mod ports;
