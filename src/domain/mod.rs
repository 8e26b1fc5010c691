// Domain layer: core models, compiled-in rules and ports (interfaces).

pub mod model;
pub mod ports;
pub mod rules;
