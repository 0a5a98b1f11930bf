/// A date of birth as the user typed it: a single integer laid out as
/// `MM * 1_000_000 + DD * 10_000 + YYYY`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EncodedDate(i64);

impl EncodedDate {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// Read a raw user entry into an EncodedDate
    ///
    /// Surrounding whitespace is ignored, an optional sign is allowed and
    /// leading zeros are kept as part of the number, so `"01152023\n"`
    /// reads as `1152023`. Anything else is a parse error.
    pub fn parse(input: impl Into<String>) -> Result<Self, crate::Error> {
        let input = input.into();
        let trimmed = input.trim();

        let digits = trimmed.strip_prefix(&['+', '-'][..]).unwrap_or(trimmed);

        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(crate::Error::ParseError(trimmed.to_string()));
        }

        trimmed
            .parse::<i64>()
            .map(Self)
            .map_err(|_| crate::Error::ParseError(trimmed.to_string()))
    }
}

impl From<i64> for EncodedDate {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::EncodedDate;
    use crate::Error;

    #[test_case("01152023", 1_152_023 ; "leading zero")]
    #[test_case("12312024\n", 12_312_024 ; "trailing newline")]
    #[test_case("  02292024  ", 2_292_024 ; "surrounding spaces")]
    #[test_case("+4302023", 4_302_023 ; "explicit plus")]
    #[test_case("-1152023", -1_152_023 ; "negative")]
    #[test_case("0", 0 ; "zero")]
    fn test_parse(input: &str, expected: i64) {
        assert_eq!(Ok(EncodedDate::new(expected)), EncodedDate::parse(input));
    }

    #[test_case("" ; "empty")]
    #[test_case("   \n" ; "only whitespace")]
    #[test_case("hello" ; "word")]
    #[test_case("01/15/2023" ; "slashes")]
    #[test_case("01-15-2023" ; "dashes")]
    #[test_case("0115 2023" ; "inner space")]
    #[test_case("-" ; "bare sign")]
    #[test_case("+-1" ; "double sign")]
    #[test_case("99999999999999999999" ; "overflow")]
    fn test_parse_rejects(input: &str) {
        assert!(matches!(
            EncodedDate::parse(input),
            Err(Error::ParseError(_))
        ));
    }

    #[test]
    fn test_parse_error_keeps_text() {
        assert_eq!(
            Err(Error::ParseError("abc".to_string())),
            EncodedDate::parse(" abc\n")
        );
    }
}
