//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod booking_status;
mod data_source;
mod load_status;

pub use booking_status::*;
pub use data_source::*;
pub use load_status::*;
