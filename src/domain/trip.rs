use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// An origin and a destination.
///
/// Both ends are free-form text. No geocoding or normalisation is applied, so
/// `"Paris"` and `"paris"` are different places as far as this type is
/// concerned.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route {
    origin: String,
    destination: String,
}

impl Route {
    /// Construct a new [`Route`].
    #[must_use]
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }

    /// Where the trip starts.
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Where the trip ends.
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.origin, self.destination)
    }
}

/// Registration metadata.
///
/// Identifies a record in logs. Never used for ordering or deduplication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Metadata {
    /// Unique identifier assigned at construction.
    pub(crate) id: Uuid,
    /// When the record was constructed.
    pub(crate) registered: DateTime<Utc>,
}

impl Metadata {
    fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            registered: Utc::now(),
        }
    }
}

/// A driver's published intent to travel a route at a time.
///
/// Offers are immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripOffer {
    driver: String,
    route: Route,
    departure: String,
    seats: u32,
    metadata: Metadata,
}

impl TripOffer {
    /// Construct a new [`TripOffer`].
    ///
    /// A new UUID and registration timestamp are generated. None of the text
    /// fields are validated; empty strings are accepted.
    #[must_use]
    pub fn new(
        driver: impl Into<String>,
        route: Route,
        departure: impl Into<String>,
        seats: u32,
    ) -> Self {
        Self {
            driver: driver.into(),
            route,
            departure: departure.into(),
            seats,
            metadata: Metadata::new(),
        }
    }

    /// The driver's name.
    #[must_use]
    pub fn driver(&self) -> &str {
        &self.driver
    }

    /// The route being offered.
    #[must_use]
    pub const fn route(&self) -> &Route {
        &self.route
    }

    /// The departure time, as entered.
    #[must_use]
    pub fn departure(&self) -> &str {
        &self.departure
    }

    /// Number of seats available to passengers.
    #[must_use]
    pub const fn seats(&self) -> u32 {
        self.seats
    }

    /// The unique identifier of this offer.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.metadata.id
    }

    /// When the offer was constructed.
    #[must_use]
    pub const fn registered(&self) -> DateTime<Utc> {
        self.metadata.registered
    }
}

impl fmt::Display for TripOffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plural = if self.seats == 1 { "" } else { "s" };
        write!(
            f,
            "{}: {} at {} ({} seat{plural})",
            self.driver, self.route, self.departure, self.seats
        )
    }
}

/// A passenger's recorded desire to travel a route at a time.
///
/// Requests are immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripRequest {
    passenger: String,
    route: Route,
    desired_time: String,
    metadata: Metadata,
}

impl TripRequest {
    /// Construct a new [`TripRequest`].
    ///
    /// A new UUID and registration timestamp are generated.
    #[must_use]
    pub fn new(passenger: impl Into<String>, route: Route, desired_time: impl Into<String>) -> Self {
        Self {
            passenger: passenger.into(),
            route,
            desired_time: desired_time.into(),
            metadata: Metadata::new(),
        }
    }

    /// The passenger's name.
    #[must_use]
    pub fn passenger(&self) -> &str {
        &self.passenger
    }

    /// The route being searched for.
    #[must_use]
    pub const fn route(&self) -> &Route {
        &self.route
    }

    /// The desired travel time, as entered.
    #[must_use]
    pub fn desired_time(&self) -> &str {
        &self.desired_time
    }

    /// The unique identifier of this request.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.metadata.id
    }

    /// When the request was constructed.
    #[must_use]
    pub const fn registered(&self) -> DateTime<Utc> {
        self.metadata.registered
    }
}

impl fmt::Display for TripRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} at {}",
            self.passenger, self.route, self.desired_time
        )
    }
}
