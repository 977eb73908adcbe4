//! Data-transfer speed, counted in bytes per second.

use std::{collections::HashMap, fmt, str::FromStr};

use chrono::TimeDelta;
use once_cell::sync::Lazy;

use crate::{
    data::{
        size::Size,
        verb::{Formatted, Verb},
    },
    error::{Error, Result},
};

pub const NANOS_PER_SECOND: i64 = 1_000_000_000;

static DURATION_TABLE: Lazy<HashMap<&'static str, TimeDelta>> = Lazy::new(|| {
    HashMap::from([
        ("ns", TimeDelta::nanoseconds(1)),
        ("µs", TimeDelta::microseconds(1)),
        ("us", TimeDelta::microseconds(1)),
        ("ms", TimeDelta::milliseconds(1)),
        ("s", TimeDelta::seconds(1)),
        ("m", TimeDelta::minutes(1)),
        ("h", TimeDelta::hours(1)),
    ])
});

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Speed(u64);

impl Speed {
    pub const ZERO: Speed = Speed(0);

    /// The speed of moving `amount` in `duration`, truncated to whole bytes
    /// per second.
    ///
    /// A zero duration gives a zero speed. Negative amounts and durations are
    /// rejected, as is any amount too large to scale to nanoseconds.
    pub fn new(amount: Size, duration: TimeDelta) -> Result<Self> {
        if duration < TimeDelta::zero() {
            return Err(Error::InvalidArgument(format!(
                "negative duration: {duration}"
            )));
        }

        if duration.is_zero() {
            return Ok(Self::ZERO);
        }

        let amount = amount.value();
        if amount < 0 {
            return Err(Error::InvalidArgument(format!("negative amount: {amount}")));
        }

        if amount > i64::MAX / NANOS_PER_SECOND {
            tracing::debug!(amount, "speed overflows i64");
            return Err(Error::Overflow(format!("speed of {amount} bytes")));
        }

        let scaled = amount * NANOS_PER_SECOND;
        // A duration past i64 nanoseconds is longer than any scaled amount.
        let bytes_per_second = duration.num_nanoseconds().map_or(0, |nanos| scaled / nanos);

        Ok(Self(bytes_per_second as u64))
    }

    pub const fn from_bytes_per_second(bytes: u64) -> Self {
        Self(bytes)
    }

    /// Parses `<size><space?>{/|p}<space?><unit>`, where the unit is one of
    /// `ns`, `µs` (or `us`), `ms`, `s`, `m` or `h`.
    pub fn parse(s: &str) -> Result<Self> {
        let trimmed = s.trim();

        let per = trimmed.rfind(['/', 'p']).ok_or_else(|| {
            tracing::debug!(input = s, "no separator in speed");
            Error::Format {
                kind: "speed",
                input: s.to_owned(),
            }
        })?;
        let (size, unit) = (&trimmed[..per], trimmed[per + 1..].trim());

        let duration = DURATION_TABLE.get(unit).copied().ok_or_else(|| {
            tracing::debug!(input = s, unit, "unknown duration unit");
            Error::UnknownDurationUnit(unit.to_owned())
        })?;

        Self::new(Size::parse(size)?, duration)
    }

    pub const fn bytes_per_second(&self) -> u64 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Bytes per second as a [`Size`], saturating at [`Size::MAX`].
    pub fn as_size(&self) -> Size {
        Size::new(i64::try_from(self.0).unwrap_or(i64::MAX))
    }

    /// Formats in the named unit, followed by `/s`.
    pub fn format_unit(&self, unit: &str, precision: usize) -> Result<String> {
        Ok(format!("{}/s", self.as_size().format_unit(unit, precision)?))
    }

    pub fn format_verb(&self, verb: Verb, precision: Option<usize>) -> String {
        match verb {
            Verb::Raw => format!("{}/s", self.0),
            _ => format!("{}/s", self.as_size().format_verb(verb, precision)),
        }
    }

    pub fn display(self, verb: Verb) -> Formatted<Speed> {
        Formatted::new(self, verb)
    }

    fn per_second(&self, unit: Size) -> f64 {
        if self.0 == 0 {
            return 0.0;
        }
        self.0 as f64 / unit.value() as f64
    }

    pub fn kilobits_per_second(&self) -> f64 {
        self.per_second(Size::KBIT)
    }

    pub fn megabits_per_second(&self) -> f64 {
        self.per_second(Size::MBIT)
    }

    pub fn kilobytes_per_second(&self) -> f64 {
        self.per_second(Size::KB)
    }

    pub fn megabytes_per_second(&self) -> f64 {
        self.per_second(Size::MB)
    }

    pub fn kibibits_per_second(&self) -> f64 {
        self.per_second(Size::KIBIT)
    }

    pub fn mebibits_per_second(&self) -> f64 {
        self.per_second(Size::MIBIT)
    }

    pub fn kibibytes_per_second(&self) -> f64 {
        self.per_second(Size::KIB)
    }

    pub fn mebibytes_per_second(&self) -> f64 {
        self.per_second(Size::MIB)
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/s", self.as_size())
    }
}

impl FromStr for Speed {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<u64> for Speed {
    fn from(bytes: u64) -> Self {
        Self(bytes)
    }
}
