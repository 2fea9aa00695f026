// Domain layer: Marathon models, the registration intent rules and the ports
// the client is built on.

pub mod intent;
pub mod model;
pub mod parser;
pub mod ports;
