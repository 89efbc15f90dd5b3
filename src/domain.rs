//! Domain models for carpool coordination.
//!
//! This module contains the trip offer and trip request records, the
//! in-memory registry that owns them, and configuration.

/// Trip offer and trip request records.
pub mod trip;
pub use trip::{Route, TripOffer, TripRequest};

mod config;
pub use config::{Config, ConfigError};

mod registry;
pub use registry::Registry;
