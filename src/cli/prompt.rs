use std::io;

use carpool::{Config, Route, TripInput, TripOffer, TripRequest};
use dialoguer::{Input, theme::ColorfulTheme};

use crate::cli::validate::{self, FieldError};

/// Collects trip fields from the terminal, asking again until each field is
/// valid.
pub struct Prompt<'a> {
    config: &'a Config,
    theme: ColorfulTheme,
}

impl<'a> Prompt<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            theme: ColorfulTheme::default(),
        }
    }

    fn text(&self, prompt: &str) -> dialoguer::Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
    }

    /// Re-prompts until `parse` accepts the text, showing each rejection
    /// inline.
    fn parsed<T>(
        &self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, FieldError>,
    ) -> dialoguer::Result<T> {
        let raw = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .validate_with(|raw: &String| {
                parse(raw).map(drop).inspect_err(|e| {
                    tracing::debug!("Rejected input for '{prompt}': {e}");
                })
            })
            .interact_text()?;

        // already accepted by the validator above
        parse(&raw).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e).into())
    }

    fn route(&self) -> dialoguer::Result<Route> {
        let origin = self.text("Origin")?;
        let destination = self.text("Destination")?;
        Ok(Route::new(origin, destination))
    }

    fn time(&self, prompt: &str) -> dialoguer::Result<String> {
        let format = self.config.time_format();
        let prompt = match format {
            Some(format) => format!("{prompt} ({format})"),
            None => prompt.to_string(),
        };
        self.parsed(&prompt, |raw| validate::parse_time(raw, format))
    }
}

impl TripInput for Prompt<'_> {
    type Error = dialoguer::Error;

    fn read_offer(&mut self) -> Result<TripOffer, Self::Error> {
        let driver = self.text("Driver name")?;
        let route = self.route()?;
        let departure = self.time("Departure time")?;
        let max = self.config.max_seats();
        let seats = self.parsed(&format!("Seats available (0-{max})"), |raw| {
            validate::parse_seats(raw, max)
        })?;
        Ok(TripOffer::new(driver, route, departure, seats))
    }

    fn read_request(&mut self) -> Result<TripRequest, Self::Error> {
        let passenger = self.text("Passenger name")?;
        let route = self.route()?;
        let desired_time = self.time("Desired time")?;
        Ok(TripRequest::new(passenger, route, desired_time))
    }
}
