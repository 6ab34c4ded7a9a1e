//! Infrastructure Adapters
//!
//! Implementations of domain ports:
//! - In-memory repositories (process-lifetime stores)
//! - FMCSA QCMobile carrier registry client

pub mod fmcsa;
pub mod memory;

pub use fmcsa::FmcsaRegistry;
pub use memory::{
    InMemoryBookingRepository, InMemoryCallRepository, InMemoryCarrierRepository,
    InMemoryLoadRepository, InMemoryNegotiationRepository, InMemoryStore,
};
