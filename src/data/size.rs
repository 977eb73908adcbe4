//! A quantity of data, counted in bytes.
//!
//! Sizes are built from the named constants with ordinary arithmetic
//! (`5 * Size::MIB`) or parsed from text (`"5 MiB".parse()`). The arithmetic
//! operators follow native `i64` overflow behaviour: they panic in debug
//! builds and wrap in release builds. Use [`Size::checked_add`] and
//! [`Size::checked_mul`] where overflow is possible.

use std::{
    fmt,
    iter::Sum,
    ops::{Add, Div, Mul, Neg, Sub},
    str::FromStr,
};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    data::verb::{Formatted, Verb},
    error::{Error, Result},
    units::{is_base_unit, system::UnitSystem, table, B, BIT},
};

static NUMERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?[0-9]+").expect("numeral pattern is valid"));

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Size(i64);

impl Size {
    pub const ZERO: Size = Size(0);
    pub const BYTE: Size = Size(1);

    pub const KB: Size = Size(1000 * Self::BYTE.0);
    pub const MB: Size = Size(1000 * Self::KB.0);
    pub const GB: Size = Size(1000 * Self::MB.0);
    pub const TB: Size = Size(1000 * Self::GB.0);
    pub const PB: Size = Size(1000 * Self::TB.0);
    pub const EB: Size = Size(1000 * Self::PB.0);

    pub const KIB: Size = Size(1024 * Self::BYTE.0);
    pub const MIB: Size = Size(1024 * Self::KIB.0);
    pub const GIB: Size = Size(1024 * Self::MIB.0);
    pub const TIB: Size = Size(1024 * Self::GIB.0);
    pub const PIB: Size = Size(1024 * Self::TIB.0);
    pub const EIB: Size = Size(1024 * Self::PIB.0);

    pub const KBIT: Size = Size(Self::KB.0 / 8);
    pub const MBIT: Size = Size(Self::MB.0 / 8);
    pub const GBIT: Size = Size(Self::GB.0 / 8);
    pub const TBIT: Size = Size(Self::TB.0 / 8);
    pub const PBIT: Size = Size(Self::PB.0 / 8);
    pub const EBIT: Size = Size(Self::EB.0 / 8);

    pub const KIBIT: Size = Size(Self::KIB.0 / 8);
    pub const MIBIT: Size = Size(Self::MIB.0 / 8);
    pub const GIBIT: Size = Size(Self::GIB.0 / 8);
    pub const TIBIT: Size = Size(Self::TIB.0 / 8);
    pub const PIBIT: Size = Size(Self::PIB.0 / 8);
    pub const EIBIT: Size = Size(Self::EIB.0 / 8);

    pub const MAX: Size = Size(i64::MAX);
    pub const MIN: Size = Size(i64::MIN);

    pub const fn new(bytes: i64) -> Self {
        Self(bytes)
    }

    /// The raw byte count.
    pub const fn value(&self) -> i64 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, rhs: Size) -> Option<Size> {
        self.0.checked_add(rhs.0).map(Size)
    }

    pub fn checked_mul(self, rhs: i64) -> Option<Size> {
        self.0.checked_mul(rhs).map(Size)
    }

    /// Parses `<sign?><digits><whitespace?><unit?>`. A missing unit means
    /// bytes.
    ///
    /// An all-lowercase unit is upper-cased except for its `i`, so `mib` is
    /// read as `MiB` and `kb` as `KB`. Mixed case is taken verbatim.
    pub fn parse(s: &str) -> Result<Self> {
        let trimmed = s.trim();

        let numeral = NUMERAL.find(trimmed).ok_or_else(|| {
            tracing::debug!(input = s, "no numeral in size");
            Error::Format {
                kind: "size",
                input: s.to_owned(),
            }
        })?;

        let value: i64 = numeral
            .as_str()
            .parse()
            .map_err(|source| Error::InvalidNumber {
                input: s.to_owned(),
                source,
            })?;

        let suffix = trimmed[numeral.end()..].trim();
        let scale = if suffix.is_empty() {
            Self::BYTE
        } else {
            table::resolve(suffix)?
        };

        // Bound the numeral before multiplying so nothing ever wraps.
        if (value > 0 && value > i64::MAX / scale.0) || (value < 0 && value < i64::MIN / scale.0)
        {
            tracing::debug!(input = s, value, scale = scale.0, "size overflows i64");
            return Err(Error::Overflow(format!("size {s:?}")));
        }

        Ok(Self(value * scale.0))
    }

    /// `self / unit` as a float, computed from the integer quotient and
    /// remainder so large values keep their precision. A zero `unit` gives
    /// NaN.
    pub fn quotient(&self, unit: Size) -> f64 {
        if unit.0 == 0 {
            return f64::NAN;
        }
        let whole = self.0 / unit.0;
        let rem = self.0 % unit.0;
        whole as f64 + rem as f64 / unit.0 as f64
    }

    /// Formats the size in the named unit with `precision` fractional digits.
    ///
    /// `unit` is any spelling known to the unit table, or `b` for raw bits.
    /// The unit name is echoed back as given.
    pub fn format_unit(&self, unit: &str, precision: usize) -> Result<String> {
        let scale = match unit {
            BIT => Self::ZERO,
            _ => table::lookup(unit).ok_or_else(|| Error::UnknownUnit(unit.to_owned()))?,
        };
        Ok(self.render(unit, scale, precision))
    }

    /// The best unit of `system` for this size, at `precision` digits or
    /// the family default (none for base units, two otherwise).
    pub fn format_in(&self, system: UnitSystem, precision: Option<usize>) -> String {
        let (unit, scale) = system.best(*self);
        let precision = precision.unwrap_or(if is_base_unit(unit) { 0 } else { 2 });
        self.render(unit, scale, precision)
    }

    pub fn format_verb(&self, verb: Verb, precision: Option<usize>) -> String {
        match verb {
            Verb::Family(system) => self.format_in(system, precision),
            Verb::Raw => self.0.to_string(),
            Verb::Default => self.to_string(),
        }
    }

    /// Wraps the size so that `{}` renders it with `verb`, honouring a
    /// `{:.N}` precision.
    pub fn display(self, verb: Verb) -> Formatted<Size> {
        Formatted::new(self, verb)
    }

    fn render(&self, unit: &str, scale: Size, precision: usize) -> String {
        if self.is_zero() {
            return format!("0 {unit}");
        }

        match unit {
            B => zero_fraction(self.0, precision, unit),
            // Exact, not just in range: |i64| * 8 is at most 2^66, far inside
            // i128, so every bit count is the true product.
            BIT => zero_fraction(i128::from(self.0) * 8, precision, unit),
            _ => {
                let value = self.quotient(scale);
                if value.is_nan() {
                    return format!("NaN {unit}");
                }
                format!("{value:.precision$} {unit}")
            }
        }
    }
}

fn zero_fraction(whole: impl fmt::Display, precision: usize, unit: &str) -> String {
    if precision == 0 {
        format!("{whole} {unit}")
    } else {
        format!("{whole}.{} {unit}", "0".repeat(precision))
    }
}

impl fmt::Display for Size {
    /// Binary bytes with two digits, or a plain integer for base units.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_in(UnitSystem::BinaryByte, None))
    }
}

impl FromStr for Size {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<i64> for Size {
    fn from(bytes: i64) -> Self {
        Self(bytes)
    }
}

impl From<Size> for i64 {
    fn from(size: Size) -> Self {
        size.0
    }
}

impl Add for Size {
    type Output = Size;

    fn add(self, rhs: Size) -> Size {
        Size(self.0 + rhs.0)
    }
}

impl Sub for Size {
    type Output = Size;

    fn sub(self, rhs: Size) -> Size {
        Size(self.0 - rhs.0)
    }
}

impl Neg for Size {
    type Output = Size;

    fn neg(self) -> Size {
        Size(-self.0)
    }
}

impl Mul<i64> for Size {
    type Output = Size;

    fn mul(self, rhs: i64) -> Size {
        Size(self.0 * rhs)
    }
}

impl Mul<Size> for i64 {
    type Output = Size;

    fn mul(self, rhs: Size) -> Size {
        Size(self * rhs.0)
    }
}

impl Div<i64> for Size {
    type Output = Size;

    fn div(self, rhs: i64) -> Size {
        Size(self.0 / rhs)
    }
}

impl Sum for Size {
    fn sum<I: Iterator<Item = Size>>(iter: I) -> Size {
        iter.fold(Size::ZERO, Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(Size::KB.value(), 1000);
        assert_eq!(Size::EB.value(), 1_000_000_000_000_000_000);
        assert_eq!(Size::KIB.value(), 1024);
        assert_eq!(Size::EIB.value(), 1 << 60);
        assert_eq!(Size::KBIT.value(), 125);
        assert_eq!(Size::KIBIT.value(), 128);
        assert_eq!(Size::EIBIT.value(), 1 << 57);
        assert_eq!(Size::MIB * 5, 5 * Size::MIB);
    }

    #[test]
    fn test_quotient() {
        let cases = [
            (1024, Size::KIB, 1.0),
            (1536, Size::KIB, 1.5),
            (512, Size::KIB, 0.5),
            (-1536, Size::KIB, -1.5),
        ];
        for (bytes, unit, want) in cases {
            assert_eq!(Size::new(bytes).quotient(unit), want);
        }

        assert!(Size::BYTE.quotient(Size::ZERO).is_nan());
    }

    #[test]
    fn test_quotient_keeps_precision_for_large_values() {
        // 2^53 + 1 has no exact f64, but its quotient by 3 does.
        let size = Size::new((1 << 53) + 1);
        assert_eq!(size.quotient(Size::new(3)), 3_002_399_751_580_331.0);
    }

    #[test]
    fn test_format_unit() {
        let cases = [
            (0, "B", 0, "0 B"),
            (0, "MiB", 3, "0 MiB"),
            (42, "B", 0, "42 B"),
            (42, "B", 2, "42.00 B"),
            (1, "b", 0, "8 b"),
            (1, "b", 3, "8.000 b"),
            (1500, "kB", 2, "1.50 kB"),
            (1536, "KiB", 2, "1.50 KiB"),
            (1536, "kiB", 0, "2 kiB"),
            (1000, "kb", 2, "8.00 kb"),
            (1000, "Kb", 1, "8.0 Kb"),
            (-2048, "KiB", 1, "-2.0 KiB"),
        ];

        for (bytes, unit, precision, want) in cases {
            let got = Size::new(bytes).format_unit(unit, precision).unwrap();
            assert_eq!(got, want, "{bytes} in {unit} at {precision}");
        }
    }

    #[test]
    fn test_format_unit_bits_do_not_overflow() {
        assert_eq!(
            Size::MAX.format_unit("b", 0).unwrap(),
            "73786976294838206456 b"
        );
        assert_eq!(
            Size::MIN.format_unit("b", 1).unwrap(),
            "-73786976294838206464.0 b"
        );
        // Every byte count near the limits renders as exactly eight times itself.
        for bytes in [i64::MAX - 1, i64::MIN + 1, 1 << 62] {
            let want = format!("{} b", i128::from(bytes) * 8);
            assert_eq!(Size::new(bytes).format_unit("b", 0).unwrap(), want);
        }
    }

    #[test]
    fn test_format_unit_unknown() {
        assert_eq!(
            Size::KB.format_unit("XB", 2),
            Err(Error::UnknownUnit("XB".into()))
        );
        assert!(Size::KB.format_unit("mib", 2).is_err());
    }

    #[test]
    fn test_display() {
        let cases = [
            (Size::ZERO, "0 B"),
            (Size::new(42), "42 B"),
            (Size::new(1023), "1023 B"),
            (Size::new(1536), "1.50 kiB"),
            (Size::MIB * 5, "5.00 MiB"),
            (Size::new(-5), "-5 B"),
        ];

        for (size, want) in cases {
            assert_eq!(size.to_string(), want);
        }
    }

    #[test]
    fn test_format_verb() {
        let size = Size::new(1536);
        assert_eq!(size.format_verb(Verb::from_char('B'), None), "1.50 kiB");
        assert_eq!(size.format_verb(Verb::from_char('B'), Some(1)), "1.5 kiB");
        assert_eq!(Size::new(1500).format_verb(Verb::from_char('M'), None), "1.50 kB");
        assert_eq!(Size::new(1024).format_verb(Verb::from_char('b'), None), "8.00 kib");
        assert_eq!(Size::new(1000).format_verb(Verb::from_char('m'), None), "8.00 kb");
        assert_eq!(Size::new(1234).format_verb(Verb::from_char('d'), Some(3)), "1234");
        assert_eq!(size.format_verb(Verb::from_char('s'), Some(4)), "1.50 kiB");
        assert_eq!(Size::new(12).format_verb(Verb::from_char('m'), None), "96 b");
        assert_eq!(Size::new(12).format_verb(Verb::from_char('m'), Some(1)), "96.0 b");
    }

    #[test]
    fn test_parse() {
        let cases = [
            ("0", Size::ZERO),
            ("42", Size::new(42)),
            ("  42  ", Size::new(42)),
            ("+7B", Size::new(7)),
            ("-3 KB", Size::KB * -3),
            ("1KB", Size::KB),
            ("1 kB", Size::KB),
            ("1kb", Size::KB),
            ("1 Kb", Size::KBIT),
            ("8 Mb", Size::MB),
            ("2 mib", Size::MIB * 2),
            ("2 Mib", Size::MIBIT * 2),
            ("3GiB", Size::GIB * 3),
            ("1 b", Size::BYTE),
            ("7 EiB", Size::EIB * 7),
        ];

        for (input, want) in cases {
            assert_eq!(Size::parse(input), Ok(want), "parse({input:?})");
        }
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(Size::parse(""), Err(Error::Format { .. })));
        assert!(matches!(Size::parse("KB"), Err(Error::Format { .. })));
        assert!(matches!(Size::parse("- 5KB"), Err(Error::Format { .. })));
        assert!(matches!(Size::parse("5 mIb"), Err(Error::UnknownUnit(_))));
        assert!(matches!(Size::parse("5 XB"), Err(Error::UnknownUnit(_))));
        assert!(matches!(Size::parse("5KB2"), Err(Error::UnknownUnit(_))));
        assert!(matches!(
            Size::parse("99999999999999999999"),
            Err(Error::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_parse_overflow() {
        assert!(matches!(Size::parse("8 EiB"), Err(Error::Overflow(_))));
        assert!(matches!(Size::parse("-9 EiB"), Err(Error::Overflow(_))));
        assert!(matches!(Size::parse("10 EB"), Err(Error::Overflow(_))));
        assert_eq!(Size::parse("9 EB"), Ok(Size::EB * 9));
        assert_eq!(Size::parse("-8 EiB"), Ok(Size::MIN));
        assert_eq!(Size::parse("9223372036854775807"), Ok(Size::MAX));
    }

    #[test]
    fn test_parse_round_trips_at_base_unit() {
        for bytes in [0, 1, -1, 1023, 1 << 40, i64::MAX, i64::MIN] {
            let size = Size::new(bytes);
            let text = size.format_unit("B", 0).unwrap();
            assert_eq!(Size::parse(&text), Ok(size), "{text}");
        }
    }

    #[test]
    fn test_checked_ops() {
        assert_eq!(Size::MAX.checked_add(Size::BYTE), None);
        assert_eq!(Size::EIB.checked_mul(8), None);
        assert_eq!(Size::EIB.checked_mul(7), Some(Size::EIB * 7));
    }

    #[test]
    fn test_sum() {
        let total: Size = [Size::KIB, Size::KIB, Size::BYTE].into_iter().sum();
        assert_eq!(total, Size::new(2049));
    }
}
