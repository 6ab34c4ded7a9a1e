//! Domain Services
//!
//! Stateless business rules that operate on entities.

mod load_search;
mod negotiation_policy;

pub use load_search::*;
pub use negotiation_policy::*;
