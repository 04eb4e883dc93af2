// Domain layer: the pull protocol, run summary and ports. No runtime dependencies.

pub mod model;
pub mod ports;
