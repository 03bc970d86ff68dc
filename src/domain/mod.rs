// Domain layer: the dynamic value model and the seams (ports) embedders implement.

pub mod model;
pub mod ports;
