//! Strongly-typed physical quantities: data sizes, data-transfer speeds and
//! temperatures, with unit-aware formatting and parsing.
//!
//! ```
//! use realq::{Size, Speed, UnitSystem};
//!
//! let size: Size = "1536 B".parse().unwrap();
//! assert_eq!(size.to_string(), "1.50 kiB");
//! assert_eq!(size.format_unit("KiB", 2).unwrap(), "1.50 KiB");
//! assert_eq!(UnitSystem::BinaryByte.best_unit(size), "kiB");
//!
//! let speed: Speed = "2MB/s".parse().unwrap();
//! assert_eq!(speed.bytes_per_second(), 2_000_000);
//! ```

pub mod data;
pub mod error;
pub mod temperature;
pub mod units;

pub use data::{
    size::Size,
    speed::Speed,
    verb::{Formatted, Verb},
};
pub use error::{Error, Result};
pub use temperature::{Temperature, TemperatureUnit};
pub use units::system::UnitSystem;
