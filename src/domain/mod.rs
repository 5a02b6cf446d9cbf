// Domain layer: resource names, create payloads and the failure-reporting port.

pub mod model;
pub mod ports;
