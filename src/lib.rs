//! In-memory carpool coordination
//!
//! Drivers publish trip offers, passengers record trip requests, and both are
//! listed back in the order they were registered.

pub mod domain;
pub use domain::{Config, ConfigError, Registry, Route, TripOffer, TripRequest};

/// The façade a presentation layer calls into.
pub mod coordinator;
pub use coordinator::{Coordinator, TripInput};
