pub mod configuration;
pub mod domain;
pub mod offer;
pub mod routes;
pub mod startup;
pub mod task_queue;
pub mod telemetry;
mod utils;
