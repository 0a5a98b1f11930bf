//! # DobDecode: Dates of Birth as Eight Digits
//!
//! Turns a date typed as a single `MMDDYYYY` integer into its day, month
//! and year, checking the day against the length of the month.
//!
//! ## Usage
//!
//! Put this in your `Cargo.toml`:
//!
//! ```toml
//! dobdecode = "0.1"
//! ```
//!
//! ## Example
//!
//! ```rust
//! use dobdecode::decode;
//!
//! let date = decode("02292024").unwrap();
//! assert_eq!(29, date.day());
//! assert_eq!("february", date.month().name());
//! assert_eq!(2024, date.year());
//!
//! let err = decode("02292023").unwrap_err();
//! assert_eq!("Invalid date for the month february", err.to_string());
//! ```
//!
//! ## Layout
//! ```text
//! <encoded> ::= MM * 1_000_000 + DD * 10_000 + YYYY
//!
//! month = encoded / 1_000_000
//! day   = (encoded / 10_000) % 100
//! year  = encoded % 10_000
//! ```
//!
//! A date is valid when `month` is in `1..=12` and `day` is in
//! `1..=max_day`, where February has 29 days in Gregorian leap years.
//! Inputs with more or fewer than eight digits are still split this way;
//! they only fail if the resulting fields are out of range.

pub mod date;
pub mod encoded;

pub use date::{DecomposedDate, Month, ValidDate};
pub use encoded::EncodedDate;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Invalid date for the month {month}")]
    /// The day does not fit the month, or the month is not in 1..=12,
    /// in which case `month` is `"invalid"`
    DayOutOfRange { month: &'static str, day: i64 },
    #[error("Invalid input: expected an integer in mmddyyyy form, got {0:?}")]
    /// The entry is not an integer, e.g. `"01/15/2023"` or `"hello"`
    ParseError(String),
    #[error("Invalid date: {0}")]
    /// A validated date that chrono cannot represent
    InvalidDate(String),
}

pub type Output = Result<ValidDate, Error>;

/// Decode a raw user entry such as `"01152023"`
pub fn decode(input: impl Into<String>) -> Output {
    let encoded = EncodedDate::parse(input)?;
    decode_encoded(encoded.value())
}

/// Decode an already-read MMDDYYYY integer
pub fn decode_encoded(value: i64) -> Output {
    DecomposedDate::from_encoded(EncodedDate::new(value)).validate()
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use crate::{decode, decode_encoded, Error};

    #[test_case("01152023", "Date: 15\nMonth: january\nYear: 2023" ; "mid january")]
    #[test_case("02292024", "Date: 29\nMonth: february\nYear: 2024" ; "leap day")]
    #[test_case("02292000", "Date: 29\nMonth: february\nYear: 2000" ; "leap century")]
    #[test_case("12312023", "Date: 31\nMonth: december\nYear: 2023" ; "new years eve")]
    #[test_case("07040099", "Date: 4\nMonth: july\nYear: 99" ; "short year")]
    fn test_valid(input: &str, expected: &str) {
        assert_eq!(expected, decode(input).unwrap().to_string());
    }

    #[test_case("02292023", "Invalid date for the month february" ; "not leap")]
    #[test_case("02291900", "Invalid date for the month february" ; "century not leap")]
    #[test_case("04310099", "Invalid date for the month april" ; "april 31")]
    #[test_case("13010099", "Invalid date for the month invalid" ; "month 13")]
    #[test_case("00152023", "Invalid date for the month invalid" ; "month 0")]
    #[test_case("01002023", "Invalid date for the month january" ; "day 0")]
    #[test_case("2023", "Invalid date for the month invalid" ; "year only")]
    fn test_invalid(input: &str, expected: &str) {
        assert_eq!(expected, decode(input).unwrap_err().to_string());
    }

    #[test]
    fn test_decode_encoded() {
        let date = decode_encoded(1_152_023).unwrap();

        assert_eq!(15, date.day());
        assert_eq!(1, date.month().number());
        assert_eq!(2023, date.year());
    }

    #[test]
    fn test_negative() {
        assert_eq!(
            Err(Error::DayOutOfRange {
                month: "invalid",
                day: -15
            }),
            decode("-1152023")
        );
    }

    #[test]
    fn test_malformed() {
        let err = decode("Hello World").unwrap_err();
        assert_eq!(Error::ParseError("Hello World".to_string()), err);
    }

    #[test]
    fn test_empty() {
        assert!(matches!(decode(""), Err(Error::ParseError(_))));
    }
}
