//! Freightdesk Domain Library
//!
//! Core domain types and interfaces for the Freightdesk brokerage desk:
//! carrier verification, load search, rate negotiation, booking and
//! call analytics capture.
//!
//! # Architecture
//!
//! This crate follows the same hexagonal layout as the server that hosts it:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Carrier, Load, NegotiationRecord, Booking, CallRecord
//!   - `value_objects/`: LoadStatus, BookingStatus, DataSource
//!   - `services/`: Load search filtering and the negotiation rule
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `services/`: External carrier registry interface
//!
//! # Usage
//!
//! ```rust,ignore
//! use freightdesk::domain::{Load, LoadSearchCriteria};
//! use freightdesk::ports::{LoadRepository, CarrierRegistry};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    evaluate_offer, filter_catalog, search_available, Booking, BookingCarrierInfo,
    BookingLoadInfo, BookingStatus, CallRecord, Carrier, ContactInfo, DataSource, DomainError,
    Load, LoadSearchCriteria, LoadStatus, NegotiationDecision, NegotiationOutcome,
    NegotiationRecord, NewCallRecord,
};
pub use ports::{
    // Repositories
    BookingRepository,
    CallRepository,
    // External services
    CarrierRegistry,
    CarrierRepository,
    LoadRepository,
    NegotiationRepository,
    RegistryCarrier,
};
