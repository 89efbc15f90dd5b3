use std::{io, path::PathBuf};

mod prompt;
mod render;
mod validate;

use carpool::{Config, Coordinator, Registry, TripInput};
use clap::ArgAction;
use dialoguer::{Select, theme::ColorfulTheme};
use prompt::Prompt;
use render::{Tone, paint, print_listing};
use tracing::instrument;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        tracing::debug!(?config, "Loaded configuration");

        let mut registry = Registry::new();
        Session::new(&mut registry, Prompt::new(&config)).run()
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        // stderr, so log lines stay out of the menu on stdout
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

/// An entry in the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Propose,
    Search,
    ListDrivers,
    ListPassengers,
    Quit,
}

impl Action {
    const ALL: [Self; 5] = [
        Self::Propose,
        Self::Search,
        Self::ListDrivers,
        Self::ListPassengers,
        Self::Quit,
    ];

    const fn label(self) -> &'static str {
        match self {
            Self::Propose => "Propose a trip",
            Self::Search => "Search for a trip",
            Self::ListDrivers => "List drivers",
            Self::ListPassengers => "List passengers",
            Self::Quit => "Quit",
        }
    }
}

/// An input failure that may only mean the user has stopped typing.
trait InputError: std::error::Error + Send + Sync + 'static {
    /// Returns `true` if input has ended or there is no terminal to read from.
    fn is_end_of_input(&self) -> bool;
}

impl InputError for dialoguer::Error {
    fn is_end_of_input(&self) -> bool {
        match self {
            Self::IO(e) => matches!(
                e.kind(),
                io::ErrorKind::NotConnected | io::ErrorKind::UnexpectedEof
            ),
        }
    }
}

/// One interactive session over a single registry.
struct Session<'a, I> {
    coordinator: Coordinator<'a>,
    input: I,
    theme: ColorfulTheme,
}

impl<'a, I> Session<'a, I>
where
    I: TripInput,
    I::Error: InputError,
{
    fn new(registry: &'a mut Registry, input: I) -> Self {
        Self {
            coordinator: Coordinator::new(registry),
            input,
            theme: ColorfulTheme::default(),
        }
    }

    /// Shows the menu until the user quits.
    ///
    /// Escape at the menu, or the end of input, also quits.
    fn run(mut self) -> anyhow::Result<()> {
        while let Some(action) = self.select()? {
            if !self.perform(action)? {
                break;
            }
        }

        let registry = self.coordinator.registry();
        tracing::info!(
            drivers = registry.driver_count(),
            passengers = registry.passenger_count(),
            "Session ended"
        );
        Ok(())
    }

    fn select(&self) -> anyhow::Result<Option<Action>> {
        let labels = Action::ALL.map(Action::label);
        let choice = Select::with_theme(&self.theme)
            .with_prompt("What would you like to do?")
            .items(&labels)
            .default(0)
            .interact_opt();

        match choice {
            Ok(choice) => Ok(choice.map(|index| Action::ALL[index])),
            Err(e) if e.is_end_of_input() => {
                tracing::debug!("Input ended at the menu: {e}");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Returns `false` once the session should end.
    #[instrument(skip(self))]
    fn perform(&mut self, action: Action) -> anyhow::Result<bool> {
        let registered = match action {
            Action::Propose => self
                .coordinator
                .propose_trip(&mut self.input)
                .map(|offer| format!("✅ Registered trip offer: {offer}")),
            Action::Search => self
                .coordinator
                .search_trip(&mut self.input)
                .map(|request| format!("✅ Registered trip request: {request}")),
            Action::ListDrivers => {
                print_listing(
                    "Drivers",
                    "No drivers registered.",
                    self.coordinator.display_drivers(),
                );
                return Ok(true);
            }
            Action::ListPassengers => {
                print_listing(
                    "Passengers",
                    "No passengers registered.",
                    self.coordinator.display_passengers(),
                );
                return Ok(true);
            }
            Action::Quit => return Ok(false),
        };

        match registered {
            Ok(message) => {
                println!("{}", paint(&message, Tone::Success));
                Ok(true)
            }
            Err(e) if e.is_end_of_input() => {
                eprintln!(
                    "{}",
                    paint("Input ended; nothing was registered.", Tone::Warning)
                );
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use carpool::{Route, TripOffer, TripRequest};
    use clap::Parser;

    use super::*;

    /// Replays pre-built records, then fails with `end` once they run out.
    struct Scripted {
        offers: VecDeque<TripOffer>,
        requests: VecDeque<TripRequest>,
        end: io::ErrorKind,
    }

    impl Scripted {
        fn ending_with(end: io::ErrorKind) -> Self {
            Self {
                offers: VecDeque::new(),
                requests: VecDeque::new(),
                end,
            }
        }
    }

    impl TripInput for Scripted {
        type Error = dialoguer::Error;

        fn read_offer(&mut self) -> Result<TripOffer, Self::Error> {
            self.offers
                .pop_front()
                .ok_or_else(|| io::Error::from(self.end).into())
        }

        fn read_request(&mut self) -> Result<TripRequest, Self::Error> {
            self.requests
                .pop_front()
                .ok_or_else(|| io::Error::from(self.end).into())
        }
    }

    fn alice() -> TripOffer {
        TripOffer::new("Alice", Route::new("Paris", "Lyon"), "08:00", 3)
    }

    fn bob() -> TripRequest {
        TripRequest::new("Bob", Route::new("Paris", "Lyon"), "09:00")
    }

    #[test]
    fn closed_input_counts_as_end_of_input() {
        for kind in [io::ErrorKind::NotConnected, io::ErrorKind::UnexpectedEof] {
            assert!(dialoguer::Error::from(io::Error::from(kind)).is_end_of_input());
        }
        assert!(!dialoguer::Error::from(io::Error::from(io::ErrorKind::PermissionDenied))
            .is_end_of_input());
    }

    #[test]
    fn propose_and_search_register_and_continue() {
        let mut registry = Registry::new();
        let mut input = Scripted::ending_with(io::ErrorKind::UnexpectedEof);
        input.offers.push_back(alice());
        input.requests.push_back(bob());

        let mut session = Session::new(&mut registry, input);
        assert!(session.perform(Action::Propose).unwrap());
        assert!(session.perform(Action::Search).unwrap());
        assert!(session.perform(Action::ListDrivers).unwrap());
        assert!(session.perform(Action::ListPassengers).unwrap());
        drop(session);

        assert_eq!(registry.driver_count(), 1);
        assert_eq!(registry.passenger_count(), 1);
    }

    #[test]
    fn end_of_input_while_reading_ends_the_session() {
        for kind in [io::ErrorKind::NotConnected, io::ErrorKind::UnexpectedEof] {
            let mut registry = Registry::new();
            let mut session = Session::new(&mut registry, Scripted::ending_with(kind));

            assert!(!session.perform(Action::Propose).unwrap());
            assert!(!session.perform(Action::Search).unwrap());
            drop(session);

            assert!(registry.is_empty());
        }
    }

    #[test]
    fn other_input_errors_are_reported() {
        let mut registry = Registry::new();
        let mut session =
            Session::new(&mut registry, Scripted::ending_with(io::ErrorKind::PermissionDenied));

        assert!(session.perform(Action::Propose).is_err());
    }

    #[test]
    fn quit_ends_the_session() {
        let mut registry = Registry::new();
        let mut session =
            Session::new(&mut registry, Scripted::ending_with(io::ErrorKind::UnexpectedEof));

        assert!(!session.perform(Action::Quit).unwrap());
    }

    #[test]
    fn menu_labels_are_distinct() {
        let labels = Action::ALL.map(Action::label);
        for (i, label) in labels.iter().enumerate() {
            assert!(!labels[i + 1..].contains(label), "duplicate label {label}");
        }
    }

    #[test]
    fn quit_is_the_last_entry() {
        assert_eq!(Action::ALL.last(), Some(&Action::Quit));
    }

    #[test]
    fn parses_verbosity_and_config() {
        let cli = Cli::try_parse_from(["carpool", "-vv", "--config", "carpool.toml"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("carpool.toml")));
    }

    #[test]
    fn config_is_optional() {
        let cli = Cli::try_parse_from(["carpool"]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert!(cli.config.is_none());
    }
}
