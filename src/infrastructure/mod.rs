//! Adapters implementing the domain ports.

pub mod clock;
pub mod http;
pub mod in_memory;
