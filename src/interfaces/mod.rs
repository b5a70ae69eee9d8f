//! Wire formats shared with the rollup host.

pub mod codec;
