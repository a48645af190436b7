use crate::errors::RecordError;
use chrono::NaiveDate;

/// Format of `Post Date` in Discover activity exports
pub const DISCOVER_DATE_FORMAT: &str = "%m/%d/%Y";

/// Format of `date` in HomeBank imports
pub const HOMEBANK_DATE_FORMAT: &str = "%Y-%m-%d";

/// A `Post Date` cell as it appears in a Discover export.
///
/// Discover always writes `MM/DD/YYYY`, so unlike a generic bank CSV there is
/// exactly one accepted layout and no whitespace trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoverDate(String);

impl DiscoverDate {
    pub fn parse(&self) -> Result<NaiveDate, RecordError> {
        let invalid = || RecordError::InvalidDate {
            value: self.0.clone(),
        };

        // chrono accepts signs, padding and short years in `%Y`, so the
        // layout is checked first: 1-2 digits / 1-2 digits / 4 digits
        if !has_discover_shape(&self.0) {
            return Err(invalid());
        }
        NaiveDate::parse_from_str(&self.0, DISCOVER_DATE_FORMAT).map_err(|_| invalid())
    }

    /// Parses the date and renders it the way HomeBank expects it
    pub fn to_homebank(&self) -> Result<String, RecordError> {
        self.parse()
            .map(|date| date.format(HOMEBANK_DATE_FORMAT).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn has_discover_shape(value: &str) -> bool {
    let digits = |part: &str, min: usize, max: usize| {
        (min..=max).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
    };

    let mut parts = value.split('/');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(month), Some(day), Some(year), None) => {
            digits(month, 1, 2) && digits(day, 1, 2) && digits(year, 4, 4)
        }
        _ => false,
    }
}

impl From<String> for DiscoverDate {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for DiscoverDate {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl TryFrom<DiscoverDate> for NaiveDate {
    type Error = RecordError;

    fn try_from(date: DiscoverDate) -> Result<Self, Self::Error> {
        date.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use rstest::rstest;

    #[rstest]
    #[case("02/15/2023", 2023, 2, 15)]
    #[case("12/31/2025", 2025, 12, 31)]
    #[case("01/01/2000", 2000, 1, 1)]
    #[case("02/29/2024", 2024, 2, 29)]
    #[case("2/5/2023", 2023, 2, 5)]
    fn test_discover_date_valid(
        #[case] input: &str,
        #[case] year: i32,
        #[case] month: u32,
        #[case] day: u32,
    ) {
        let date: NaiveDate = DiscoverDate::from(input).try_into().unwrap();

        assert_eq!(date.year(), year);
        assert_eq!(date.month(), month);
        assert_eq!(date.day(), day);
    }

    #[rstest]
    #[case("13/01/2023")]   // month 13
    #[case("02/30/2023")]   // no such day
    #[case("02/29/2023")]   // not a leap year
    #[case("2023-02-15")]   // already ISO
    #[case("15.02.2023")]
    #[case("not a date")]
    #[case("")]
    #[case("02/15/23")]     // two digit year
    #[case("02/15/20230")]
    #[case("02/15/-2023")]
    #[case("02/15/+2023")]
    #[case(" 02/15/2023")]
    #[case("02/ 15/2023")]
    #[case("02/15/2023 ")]
    #[case("002/15/2023")]
    #[case("02/15/2023/01")]
    #[case("０2/15/2023")]   // fullwidth digit
    fn test_discover_date_invalid(#[case] input: &str) {
        let result: Result<NaiveDate, _> = DiscoverDate::from(input).try_into();

        match result {
            Err(RecordError::InvalidDate { value }) => assert_eq!(value, input),
            other => panic!("expected InvalidDate, got {other:?}"),
        }
    }

    #[rstest]
    #[case("02/15/2023", "2023-02-15")]
    #[case("11/05/1999", "1999-11-05")]
    fn test_to_homebank(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(DiscoverDate::from(input).to_homebank().unwrap(), expected);
    }

    #[test]
    fn test_homebank_date_parses_back_to_same_day() {
        let source = DiscoverDate::from("07/04/2021");
        let rendered = source.to_homebank().unwrap();

        let back = NaiveDate::parse_from_str(&rendered, HOMEBANK_DATE_FORMAT).unwrap();
        assert_eq!(back, source.parse().unwrap());
    }
}
