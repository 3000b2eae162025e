//! Signature validity times.
//!
//! RAINS expresses signature validity windows as Unix-epoch seconds. The
//! [`Timestamp`] type wraps such a value and provides the conversions the
//! lexer and signer need: building a timestamp from the calendar fields
//! of a zonefile literal and reading the wall clock when signing.

use core::fmt;
use core::ops;
use time::{Date, Month, OffsetDateTime, PrimitiveDateTime, Time};

//------------ Timestamp -----------------------------------------------------

/// A point in time in seconds since the Unix epoch.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Returns the current time.
    pub fn now() -> Self {
        Timestamp(OffsetDateTime::now_utc().unix_timestamp())
    }

    /// Creates a timestamp from a number of epoch seconds.
    pub fn from_secs(secs: i64) -> Self {
        Timestamp(secs)
    }

    /// Creates a timestamp from UTC calendar fields.
    ///
    /// Returns an error if the fields do not describe a real calendar
    /// date and time of day.
    pub fn from_ymd_hms(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, BadTimestamp> {
        let month = Month::try_from(month).map_err(|_| BadTimestamp)?;
        let date = Date::from_calendar_date(year, month, day)
            .map_err(|_| BadTimestamp)?;
        let time =
            Time::from_hms(hour, minute, second).map_err(|_| BadTimestamp)?;
        Ok(Timestamp(
            PrimitiveDateTime::new(date, time).assume_utc().unix_timestamp(),
        ))
    }

    /// Returns the timestamp as epoch seconds.
    pub fn as_secs(self) -> i64 {
        self.0
    }
}

//--- From

impl From<i64> for Timestamp {
    fn from(secs: i64) -> Self {
        Timestamp(secs)
    }
}

//--- Add

impl ops::Add<u64> for Timestamp {
    type Output = Timestamp;

    fn add(self, secs: u64) -> Timestamp {
        Timestamp(self.0.saturating_add(secs as i64))
    }
}

//--- Display

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match OffsetDateTime::from_unix_timestamp(self.0) {
            Ok(when) => write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
                when.year(),
                u8::from(when.month()),
                when.day(),
                when.hour(),
                when.minute(),
                when.second()
            ),
            Err(_) => write!(f, "{}", self.0),
        }
    }
}

//------------ BadTimestamp --------------------------------------------------

/// Calendar fields did not describe a real point in time.
#[derive(Clone, Copy, Debug)]
pub struct BadTimestamp;

impl fmt::Display for BadTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid timestamp")
    }
}

impl std::error::Error for BadTimestamp {}

//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn epoch() {
        assert_eq!(
            Timestamp::from_ymd_hms(1970, 1, 1, 0, 0, 0).unwrap().as_secs(),
            0
        );
    }

    #[test]
    fn known_instant() {
        // One billion seconds after the epoch.
        assert_eq!(
            Timestamp::from_ymd_hms(2001, 9, 9, 1, 46, 40)
                .unwrap()
                .as_secs(),
            1_000_000_000
        );
    }

    #[test]
    fn rejects_impossible_fields() {
        assert!(Timestamp::from_ymd_hms(2020, 13, 1, 0, 0, 0).is_err());
        assert!(Timestamp::from_ymd_hms(2020, 2, 30, 0, 0, 0).is_err());
        assert!(Timestamp::from_ymd_hms(2020, 2, 3, 24, 0, 0).is_err());
    }

    #[test]
    fn add_ttl() {
        let since = Timestamp::from_secs(1_000);
        assert_eq!((since + 86_400).as_secs(), 87_400);
    }

    #[test]
    fn display() {
        assert_eq!(
            format!("{}", Timestamp::from_secs(1_000_000_000)),
            "2001-09-09T01:46:40"
        );
    }
}
