//! Outbound adapters implementing the domain storage ports.

pub mod memory;
pub mod persistence;
