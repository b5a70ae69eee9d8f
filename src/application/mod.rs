//! Application layer driving the rollup request cycle.
//!
//! This module defines the `DappEngine`, which owns the payroll state, polls the
//! rollup host for work and routes each request to its handler. Requests are
//! processed strictly one at a time.

pub mod engine;
