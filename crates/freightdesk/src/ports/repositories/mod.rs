//! Repository Ports
//!
//! Abstract interfaces for data storage operations.

mod booking_repository;
mod call_repository;
mod carrier_repository;
mod load_repository;
mod negotiation_repository;

pub use booking_repository::*;
pub use call_repository::*;
pub use carrier_repository::*;
pub use load_repository::*;
pub use negotiation_repository::*;
