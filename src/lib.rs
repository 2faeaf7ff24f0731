//! CoinVest terminal client: bootstrap (config, tracing, wiring) and the
//! command handlers behind the `coinvest` binary.

pub mod bootstrap;
pub mod commands;
