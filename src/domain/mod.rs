// Domain layer: venue model, ports (interfaces) and the pure backfill rules.

pub mod model;
pub mod ports;

pub mod services;
