//! In-memory store of trip offers and trip requests
//!
//! The [`Registry`] knows nothing about where records come from or how they
//! are displayed. It appends and it enumerates.

use tracing::instrument;

use crate::domain::{TripOffer, TripRequest};

/// The set of trip offers and trip requests registered during a session.
///
/// Both sequences preserve insertion order. Entries are never removed,
/// reordered or mutated once appended, and no uniqueness constraint is
/// enforced: the same driver may publish the same route twice.
///
/// The two sequences share no invariant, so a caller that needs concurrent
/// access can wrap the whole registry in a single mutex.
#[derive(Debug, Default)]
pub struct Registry {
    drivers: Vec<TripOffer>,
    passengers: Vec<TripRequest>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry with pre-allocated capacity for the given
    /// number of offers and requests each.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            drivers: Vec::with_capacity(capacity),
            passengers: Vec::with_capacity(capacity),
        }
    }

    /// Appends a trip offer.
    ///
    /// Returns a reference to the stored offer.
    #[instrument(skip(self), fields(id = %offer.id()))]
    pub fn add_driver(&mut self, offer: TripOffer) -> &TripOffer {
        tracing::info!("Registered driver: {offer}");
        let index = self.drivers.len();
        self.drivers.push(offer);
        &self.drivers[index]
    }

    /// Appends a trip request.
    ///
    /// Returns a reference to the stored request.
    #[instrument(skip(self), fields(id = %request.id()))]
    pub fn add_passenger(&mut self, request: TripRequest) -> &TripRequest {
        tracing::info!("Registered passenger: {request}");
        let index = self.passengers.len();
        self.passengers.push(request);
        &self.passengers[index]
    }

    /// All trip offers, in the order they were registered.
    #[must_use]
    pub fn drivers(&self) -> &[TripOffer] {
        &self.drivers
    }

    /// All trip requests, in the order they were registered.
    #[must_use]
    pub fn passengers(&self) -> &[TripRequest] {
        &self.passengers
    }

    /// Number of registered trip offers.
    #[must_use]
    pub fn driver_count(&self) -> usize {
        self.drivers.len()
    }

    /// Number of registered trip requests.
    #[must_use]
    pub fn passenger_count(&self) -> usize {
        self.passengers.len()
    }

    /// Returns `true` if neither offers nor requests have been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty() && self.passengers.is_empty()
    }
}
