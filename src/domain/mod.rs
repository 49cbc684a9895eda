// Domain layer: request/response models and the scorer port.

pub mod model;
pub mod ports;
