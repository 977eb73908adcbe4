//! Temperatures, stored in kelvin.

use std::{fmt, str::FromStr};

use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TemperatureUnit {
    Kelvin,
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 3] = [Self::Kelvin, Self::Celsius, Self::Fahrenheit];

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Kelvin => "K",
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }

    /// `K`, `C` and `F` select a scale; `f` is an alias for celsius.
    pub fn from_verb(verb: char) -> Option<Self> {
        match verb {
            'K' => Some(Self::Kelvin),
            'C' | 'f' => Some(Self::Celsius),
            'F' => Some(Self::Fahrenheit),
            _ => None,
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "k" | "kelvin" => Ok(Self::Kelvin),
            "c" | "°c" | "celsius" => Ok(Self::Celsius),
            "f" | "°f" | "fahrenheit" => Ok(Self::Fahrenheit),
            _ => Err(Error::UnknownUnit(s.to_owned())),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Temperature(f64);

impl Temperature {
    pub const ABSOLUTE_ZERO: Temperature = Temperature(0.0);
    /// Freezing point of water, 0 °C.
    pub const FREEZING: Temperature = Temperature(273.15);
    /// Boiling point of water, 100 °C.
    pub const BOILING: Temperature = Temperature(373.15);

    pub const fn kelvin(t: f64) -> Self {
        Self(t)
    }

    pub fn celsius(t: f64) -> Self {
        Self(t + Self::FREEZING.0)
    }

    pub fn fahrenheit(t: f64) -> Self {
        Self((t - 32.0) * 5.0 / 9.0 + Self::FREEZING.0)
    }

    pub fn from_unit(t: f64, unit: TemperatureUnit) -> Self {
        match unit {
            TemperatureUnit::Kelvin => Self::kelvin(t),
            TemperatureUnit::Celsius => Self::celsius(t),
            TemperatureUnit::Fahrenheit => Self::fahrenheit(t),
        }
    }

    pub fn in_unit(&self, unit: TemperatureUnit) -> f64 {
        match unit {
            TemperatureUnit::Kelvin => self.0,
            TemperatureUnit::Celsius => self.0 - Self::FREEZING.0,
            TemperatureUnit::Fahrenheit => (self.0 - Self::FREEZING.0) * 9.0 / 5.0 + 32.0,
        }
    }

    /// `value symbol` with `precision` digits, two by default.
    pub fn format_in(&self, unit: TemperatureUnit, precision: Option<usize>) -> String {
        let precision = precision.unwrap_or(2);
        format!("{:.*} {}", precision, self.in_unit(unit), unit.symbol())
    }

    /// Unknown verbs fall back to the default celsius form.
    pub fn format_verb(&self, verb: char, precision: Option<usize>) -> String {
        match TemperatureUnit::from_verb(verb) {
            Some(unit) => self.format_in(unit, precision),
            None => self.to_string(),
        }
    }

    pub fn display(self, unit: TemperatureUnit) -> FormattedTemperature {
        FormattedTemperature { value: self, unit }
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_nan() {
            return f.write_str("0");
        }
        f.write_str(&self.format_in(TemperatureUnit::Celsius, None))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FormattedTemperature {
    value: Temperature,
    unit: TemperatureUnit,
}

impl fmt::Display for FormattedTemperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value.format_in(self.unit, f.precision()))
    }
}
