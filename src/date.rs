use chrono::NaiveDate as ChronoDate;
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::fmt;

use crate::encoded::EncodedDate;

lazy_static! {
    // Longest day of each month in a common year; February gains a day in leap years
    static ref MAX_DAYS: HashMap<Month, u32> = {
        let mut map = HashMap::new();

        map.insert(Month::January, 31);
        map.insert(Month::February, 28);
        map.insert(Month::March, 31);
        map.insert(Month::April, 30);
        map.insert(Month::May, 31);
        map.insert(Month::June, 30);
        map.insert(Month::July, 31);
        map.insert(Month::August, 31);
        map.insert(Month::September, 30);
        map.insert(Month::October, 31);
        map.insert(Month::November, 30);
        map.insert(Month::December, 31);

        map
    };
}

/// Name reported for a month number outside 1..=12
pub const INVALID_MONTH_NAME: &str = "invalid";

/// Gregorian leap year test, applied proleptically to every year
pub fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Lowercase English name of a month number, or `"invalid"`
pub fn month_name(month: i64) -> &'static str {
    Month::from_number(month).map_or(INVALID_MONTH_NAME, Month::name)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Month {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
    July = 7,
    August = 8,
    September = 9,
    October = 10,
    November = 11,
    December = 12,
}

impl Month {
    pub fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(Self::January),
            2 => Some(Self::February),
            3 => Some(Self::March),
            4 => Some(Self::April),
            5 => Some(Self::May),
            6 => Some(Self::June),
            7 => Some(Self::July),
            8 => Some(Self::August),
            9 => Some(Self::September),
            10 => Some(Self::October),
            11 => Some(Self::November),
            12 => Some(Self::December),
            _ => None,
        }
    }

    pub fn number(self) -> u32 {
        self as u32
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::January => "january",
            Self::February => "february",
            Self::March => "march",
            Self::April => "april",
            Self::May => "may",
            Self::June => "june",
            Self::July => "july",
            Self::August => "august",
            Self::September => "september",
            Self::October => "october",
            Self::November => "november",
            Self::December => "december",
        }
    }

    /// Number of days in this month
    pub fn max_day(self, leap: bool) -> u32 {
        let days = MAX_DAYS[&self];

        if self == Self::February && leap {
            days + 1
        } else {
            days
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The month, day and year fields of an EncodedDate, before any range checks
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DecomposedDate {
    pub month: i64,
    pub day: i64,
    pub year: i64,
}

impl DecomposedDate {
    /// Split an EncodedDate into its fields with truncating integer division.
    /// Values with more or fewer than 8 digits still split, they just
    /// produce fields that fail validation.
    pub fn from_encoded(encoded: EncodedDate) -> Self {
        let n = encoded.value();

        let decomposed = Self {
            month: n / 1_000_000,
            day: (n / 10_000) % 100,
            year: n % 10_000,
        };
        log::trace!("decomposed {n} into {decomposed:?}");

        decomposed
    }

    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    pub fn month_name(&self) -> &'static str {
        month_name(self.month)
    }

    /// Check the day against the month's length
    pub fn validate(&self) -> Result<ValidDate, crate::Error> {
        let out_of_range = || crate::Error::DayOutOfRange {
            month: self.month_name(),
            day: self.day,
        };

        let month = Month::from_number(self.month).ok_or_else(out_of_range)?;
        let max_day = month.max_day(self.is_leap_year());

        if self.day < 1 || self.day > i64::from(max_day) {
            log::debug!(
                "day {} outside 1..={max_day} for {month} {}",
                self.day,
                self.year
            );
            return Err(out_of_range());
        }

        // day is within 1..=31 and year within the four digits of the encoding
        Ok(ValidDate {
            day: self.day as u32,
            month,
            year: self.year as i32,
        })
    }
}

impl From<EncodedDate> for DecomposedDate {
    fn from(encoded: EncodedDate) -> Self {
        Self::from_encoded(encoded)
    }
}

/// A date whose day fits within its month
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ValidDate {
    day: u32,
    month: Month,
    year: i32,
}

impl ValidDate {
    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Convert to chrono's NaiveDate
    pub fn to_chrono(&self) -> Result<ChronoDate, crate::Error> {
        ChronoDate::from_ymd_opt(self.year, self.month.number(), self.day).ok_or(
            crate::Error::InvalidDate(format!(
                "Invalid year-month-day: {}-{}-{}",
                self.year,
                self.month.number(),
                self.day
            )),
        )
    }
}

impl fmt::Display for ValidDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Date: {}", self.day)?;
        writeln!(f, "Month: {}", self.month)?;
        write!(f, "Year: {}", self.year)
    }
}
