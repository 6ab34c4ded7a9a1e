//! Service Ports
//!
//! Interfaces for external collaborators.

mod carrier_registry;

pub use carrier_registry::*;
