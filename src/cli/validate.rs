//! Field validation for the console front-end.
//!
//! The registry accepts any well-typed record. These checks turn raw text
//! into those types and tell the prompt when to ask again.

use chrono::NaiveTime;

/// Why a field was rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FieldError {
    /// The seat count is not a non-negative whole number.
    #[error("'{0}' is not a whole number of seats")]
    NotANumber(String),
    /// The seat count is above the configured limit.
    #[error("{seats} seats is more than the limit of {max}")]
    TooManySeats {
        /// The seat count entered.
        seats: u32,
        /// The configured limit.
        max: u32,
    },
    /// The time does not match the configured format.
    #[error("'{input}' does not match the time format '{format}'")]
    InvalidTime {
        /// The text entered.
        input: String,
        /// The configured format.
        format: String,
    },
}

/// Parses a seat count, allowing surrounding whitespace.
pub fn parse_seats(input: &str, max: u32) -> Result<u32, FieldError> {
    let trimmed = input.trim();
    let seats: u32 = trimmed
        .parse()
        .map_err(|_| FieldError::NotANumber(trimmed.to_string()))?;

    if seats > max {
        return Err(FieldError::TooManySeats { seats, max });
    }
    Ok(seats)
}

/// Checks a time against `format`, normalising it.
///
/// With no format any text is accepted unchanged.
pub fn parse_time(input: &str, format: Option<&str>) -> Result<String, FieldError> {
    let Some(format) = format else {
        return Ok(input.to_string());
    };

    let trimmed = input.trim();
    NaiveTime::parse_from_str(trimmed, format)
        .map(|time| time.format(format).to_string())
        .map_err(|_| FieldError::InvalidTime {
            input: trimmed.to_string(),
            format: format.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seats_accepts_whole_numbers() {
        assert_eq!(parse_seats("3", 8), Ok(3));
        assert_eq!(parse_seats(" 0 ", 8), Ok(0));
        assert_eq!(parse_seats("8", 8), Ok(8));
    }

    #[test]
    fn seats_rejects_negative_numbers() {
        assert_eq!(
            parse_seats("-1", 8),
            Err(FieldError::NotANumber("-1".to_string()))
        );
    }

    #[test]
    fn seats_rejects_non_numeric_input() {
        assert!(matches!(parse_seats("three", 8), Err(FieldError::NotANumber(_))));
        assert!(matches!(parse_seats("", 8), Err(FieldError::NotANumber(_))));
        assert!(matches!(parse_seats("2.5", 8), Err(FieldError::NotANumber(_))));
    }

    #[test]
    fn seats_rejects_values_above_limit() {
        assert_eq!(
            parse_seats("9", 8),
            Err(FieldError::TooManySeats { seats: 9, max: 8 })
        );
    }

    #[test]
    fn time_is_free_text_without_format() {
        assert_eq!(parse_time("tomorrow morning", None), Ok("tomorrow morning".to_string()));
        assert_eq!(parse_time("", None), Ok(String::new()));
    }

    #[test]
    fn time_is_normalised_to_format() {
        assert_eq!(parse_time(" 8:05 ", Some("%H:%M")), Ok("08:05".to_string()));
    }

    #[test]
    fn time_rejects_mismatched_format() {
        assert!(matches!(
            parse_time("25:00", Some("%H:%M")),
            Err(FieldError::InvalidTime { .. })
        ));
        assert!(matches!(
            parse_time("noon", Some("%H:%M")),
            Err(FieldError::InvalidTime { .. })
        ));
    }
}
