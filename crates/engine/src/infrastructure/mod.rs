//! Infrastructure boundary: collaborator ports and telemetry.

pub mod ports;
pub mod telemetry;
