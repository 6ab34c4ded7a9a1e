//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Carrier: Trucking company identified by MC number
//! - Load: Shipment posted on the board
//! - NegotiationRecord: One rate negotiation attempt
//! - Booking: Confirmed carrier/load assignment
//! - CallRecord: Captured call analytics

mod booking;
mod call;
mod carrier;
mod load;
mod negotiation;

pub use booking::*;
pub use call::*;
pub use carrier::*;
pub use load::*;
pub use negotiation::*;
