use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::macros::format_description;
use time::Date;

use crate::ValidationError;

/// Calendar day of a bar, taken from the date portion of its timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TradingDay(Date);

impl TradingDay {
    /// Parse the leading `YYYY-MM-DD` of an ISO-like date-time string.
    pub fn parse_timestamp(input: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidTimestamp {
            value: input.to_owned(),
        };
        let prefix = input.trim().get(..10).ok_or_else(invalid)?;
        Date::parse(prefix, format_description!("[year]-[month]-[day]"))
            .map(Self)
            .map_err(|_| invalid())
    }

    pub const fn date(self) -> Date {
        self.0
    }

    pub fn format_iso(self) -> String {
        self.0
            .format(format_description!("[year]-[month]-[day]"))
            .unwrap_or_else(|_| String::from("<unformattable>"))
    }

    /// Day-month-year rendering used by the history grid and chart labels.
    pub fn format_display(self) -> String {
        self.0
            .format(format_description!("[day]/[month]/[year]"))
            .unwrap_or_else(|_| String::from("<unformattable>"))
    }
}

impl Display for TradingDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_iso())
    }
}

impl Serialize for TradingDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format_iso())
    }
}

impl<'de> Deserialize<'de> for TradingDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse_timestamp(&value).map_err(D::Error::custom)
    }
}
