//! # kaminari-connection-lib
//!
//! `kaminari-connection-lib` holds the configuration, defaults and logging setup
//! shared by the `kaminari-connection` crates.

#![deny(unused_crate_dependencies)]

pub mod config;
pub mod defaults;
pub mod utils;
