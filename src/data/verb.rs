use std::fmt;

use crate::{data::size::Size, data::speed::Speed, units::system::UnitSystem};

/// How a quantity is rendered: in the best unit of a family, as the raw
/// integer, or in its default form.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Verb {
    Family(UnitSystem),
    Raw,
    Default,
}

impl Verb {
    /// `B`, `M`, `b` and `m` select a unit family, `d` the raw integer.
    /// Anything else falls back to the default form.
    pub fn from_char(verb: char) -> Self {
        match verb {
            'd' => Self::Raw,
            c => UnitSystem::from_verb(c).map_or(Self::Default, Self::Family),
        }
    }
}

impl From<UnitSystem> for Verb {
    fn from(system: UnitSystem) -> Self {
        Self::Family(system)
    }
}

/// A quantity paired with a [`Verb`]. The formatter's precision, if any,
/// overrides the family default:
///
/// ```
/// use realq::{Size, UnitSystem};
///
/// let size = Size::new(1536);
/// assert_eq!(format!("{}", size.display(UnitSystem::BinaryByte.into())), "1.50 kiB");
/// assert_eq!(format!("{:.1}", size.display(UnitSystem::BinaryByte.into())), "1.5 kiB");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Formatted<T> {
    value: T,
    verb: Verb,
}

impl<T> Formatted<T> {
    pub fn new(value: T, verb: Verb) -> Self {
        Self { value, verb }
    }
}

impl fmt::Display for Formatted<Size> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value.format_verb(self.verb, f.precision()))
    }
}

impl fmt::Display for Formatted<Speed> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value.format_verb(self.verb, f.precision()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char() {
        let cases = [
            ('B', Verb::Family(UnitSystem::BinaryByte)),
            ('M', Verb::Family(UnitSystem::MetricByte)),
            ('b', Verb::Family(UnitSystem::BinaryBit)),
            ('m', Verb::Family(UnitSystem::MetricBit)),
            ('d', Verb::Raw),
            ('s', Verb::Default),
            ('v', Verb::Default),
            ('x', Verb::Default),
        ];

        for (c, want) in cases {
            assert_eq!(Verb::from_char(c), want, "{c}");
        }
    }

    #[test]
    fn test_formatted_size() {
        let size = Size::new(1536);
        let cases = [
            (format!("{}", size.display(Verb::from_char('B'))), "1.50 kiB"),
            (format!("{:.1}", size.display(Verb::from_char('B'))), "1.5 kiB"),
            (format!("{:.0}", size.display(Verb::from_char('B'))), "2 kiB"),
            (format!("{:.3}", size.display(Verb::from_char('M'))), "1.536 kB"),
            (format!("{:.2}", size.display(Verb::Raw)), "1536"),
            (format!("{:.4}", size.display(Verb::Default)), "1.50 kiB"),
            (format!("{:.2}", Size::new(3).display(Verb::from_char('B'))), "3.00 B"),
        ];

        for (got, want) in cases {
            assert_eq!(got, want);
        }
    }

    #[test]
    fn test_formatted_speed() {
        let speed = Speed::from_bytes_per_second(1536);
        assert_eq!(format!("{}", speed.display(Verb::from_char('B'))), "1.50 kiB/s");
        assert_eq!(format!("{:.1}", speed.display(Verb::from_char('B'))), "1.5 kiB/s");
        assert_eq!(format!("{}", speed.display(Verb::Raw)), "1536/s");
        assert_eq!(format!("{}", speed.display(Verb::Default)), "1.50 kiB/s");
    }
}
