//! Domain layer: payroll rules, request shapes and the ports the engine talks through.

pub mod audit;
pub mod command;
pub mod ledger;
pub mod ports;
pub mod request;
