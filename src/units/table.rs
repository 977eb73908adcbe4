//! Lookup from unit suffix to the [`Size`] it stands for.

use std::{borrow::Cow, collections::HashMap};

use once_cell::sync::Lazy;

use crate::{
    data::size::Size,
    error::{Error, Result},
    units::*,
};

static UNIT_TABLE: Lazy<HashMap<&'static str, Size>> = Lazy::new(|| {
    HashMap::from([
        (B, Size::BYTE),
        // metric bytes
        (KB, Size::KB),
        ("KB", Size::KB),
        (MB, Size::MB),
        (GB, Size::GB),
        (TB, Size::TB),
        (PB, Size::PB),
        (EB, Size::EB),
        // binary bytes
        (KIB, Size::KIB),
        ("KiB", Size::KIB),
        (MIB, Size::MIB),
        (GIB, Size::GIB),
        (TIB, Size::TIB),
        (PIB, Size::PIB),
        (EIB, Size::EIB),
        // metric bits
        (KBIT, Size::KBIT),
        ("Kb", Size::KBIT),
        (MBIT, Size::MBIT),
        (GBIT, Size::GBIT),
        (TBIT, Size::TBIT),
        (PBIT, Size::PBIT),
        (EBIT, Size::EBIT),
        // binary bits
        (KIBIT, Size::KIBIT),
        ("Kib", Size::KIBIT),
        (MIBIT, Size::MIBIT),
        (GIBIT, Size::GIBIT),
        (TIBIT, Size::TIBIT),
        (PIBIT, Size::PIBIT),
        (EIBIT, Size::EIBIT),
    ])
});

/// Looks `unit` up verbatim. The bit base unit `b` is not in the table since
/// a single bit is not a whole number of bytes.
pub fn lookup(unit: &str) -> Option<Size> {
    UNIT_TABLE.get(unit).copied()
}

/// Upper-cases an all-lowercase suffix, keeping every `i` as is, so that
/// `mib` reads as `MiB`. Mixed-case suffixes are returned untouched.
pub fn normalize(suffix: &str) -> Cow<'_, str> {
    if suffix.is_empty() || !suffix.chars().all(char::is_lowercase) {
        return Cow::Borrowed(suffix);
    }

    let mut unit = String::with_capacity(suffix.len());
    for c in suffix.chars() {
        if c == 'i' {
            unit.push(c);
        } else {
            unit.extend(c.to_uppercase());
        }
    }
    Cow::Owned(unit)
}

/// Resolves a user-supplied suffix to its scale.
pub fn resolve(suffix: &str) -> Result<Size> {
    let unit = normalize(suffix);
    lookup(&unit).ok_or_else(|| {
        tracing::debug!(suffix, normalized = %unit, "unit not found");
        Error::UnknownUnit(suffix.to_owned())
    })
}
