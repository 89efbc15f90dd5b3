//! The single seam between a presentation layer and the [`Registry`].
//!
//! A front-end implements [`TripInput`] to supply fields, then calls the
//! [`Coordinator`] to register or list trips.

use tracing::instrument;

use crate::domain::{Registry, TripOffer, TripRequest};

/// A source of trip fields, supplied by the presentation layer.
///
/// Collecting and validating the fields (and re-prompting on bad input) is
/// entirely the implementor's concern. An error means no record could be
/// produced, for example because input ended.
pub trait TripInput {
    /// The error returned when a record cannot be read.
    type Error;

    /// Read the fields of a trip offer.
    ///
    /// # Errors
    ///
    /// Returns an error if the input source fails.
    fn read_offer(&mut self) -> Result<TripOffer, Self::Error>;

    /// Read the fields of a trip request.
    ///
    /// # Errors
    ///
    /// Returns an error if the input source fails.
    fn read_request(&mut self) -> Result<TripRequest, Self::Error>;
}

/// Mediates between a presentation layer and a [`Registry`].
///
/// The coordinator borrows the registry mutably for its whole lifetime, so it
/// is the only reader or writer while it exists.
#[derive(Debug)]
pub struct Coordinator<'a> {
    registry: &'a mut Registry,
}

impl<'a> Coordinator<'a> {
    /// Construct a coordinator over an existing registry.
    pub const fn new(registry: &'a mut Registry) -> Self {
        Self { registry }
    }

    /// Reads a trip offer from `input` and registers it.
    ///
    /// # Errors
    ///
    /// Returns the input source's error unchanged. The registry is not
    /// modified in that case.
    #[instrument(skip_all)]
    pub fn propose_trip<I>(&mut self, input: &mut I) -> Result<&TripOffer, I::Error>
    where
        I: TripInput + ?Sized,
    {
        let offer = input.read_offer()?;
        Ok(self.registry.add_driver(offer))
    }

    /// Reads a trip request from `input` and registers it.
    ///
    /// This records the request only. It does not compare it against the
    /// registered offers and returns no matches.
    ///
    /// # Errors
    ///
    /// Returns the input source's error unchanged. The registry is not
    /// modified in that case.
    #[instrument(skip_all)]
    pub fn search_trip<I>(&mut self, input: &mut I) -> Result<&TripRequest, I::Error>
    where
        I: TripInput + ?Sized,
    {
        let request = input.read_request()?;
        Ok(self.registry.add_passenger(request))
    }

    /// All registered trip offers, in insertion order.
    #[must_use]
    pub fn drivers(&self) -> &[TripOffer] {
        self.registry.drivers()
    }

    /// All registered trip requests, in insertion order.
    #[must_use]
    pub fn passengers(&self) -> &[TripRequest] {
        self.registry.passengers()
    }

    /// One line of text per registered trip offer, in insertion order.
    pub fn display_drivers(&self) -> impl Iterator<Item = String> + '_ {
        self.drivers().iter().map(ToString::to_string)
    }

    /// One line of text per registered trip request, in insertion order.
    pub fn display_passengers(&self) -> impl Iterator<Item = String> + '_ {
        self.passengers().iter().map(ToString::to_string)
    }

    /// The underlying registry.
    #[must_use]
    pub const fn registry(&self) -> &Registry {
        &*self.registry
    }
}
