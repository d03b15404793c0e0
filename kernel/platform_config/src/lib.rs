//! Compile-time configuration of the platform Configuration Manager.
//!
//! Board-specific hardware facts are not here, see the `arm_boards` crate.

#![no_std]

pub mod cm;
pub mod logging;
