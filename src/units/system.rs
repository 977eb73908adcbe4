use crate::{data::size::Size, units::*};

/// One of the four closed families of units a size can be shown in.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum UnitSystem {
    BinaryByte,
    MetricByte,
    BinaryBit,
    MetricBit,
}

impl UnitSystem {
    pub const ALL: [UnitSystem; 4] = [
        Self::BinaryByte,
        Self::MetricByte,
        Self::BinaryBit,
        Self::MetricBit,
    ];

    // Ascending (name, threshold) pairs. The bit base unit has threshold zero
    // because one byte is already eight bits.
    pub const BINARY_BYTE_UNITS: [(&'static str, Size); 7] = [
        (B, Size::BYTE),
        (KIB, Size::KIB),
        (MIB, Size::MIB),
        (GIB, Size::GIB),
        (TIB, Size::TIB),
        (PIB, Size::PIB),
        (EIB, Size::EIB),
    ];
    pub const METRIC_BYTE_UNITS: [(&'static str, Size); 7] = [
        (B, Size::BYTE),
        (KB, Size::KB),
        (MB, Size::MB),
        (GB, Size::GB),
        (TB, Size::TB),
        (PB, Size::PB),
        (EB, Size::EB),
    ];
    pub const BINARY_BIT_UNITS: [(&'static str, Size); 7] = [
        (BIT, Size::ZERO),
        (KIBIT, Size::KIBIT),
        (MIBIT, Size::MIBIT),
        (GIBIT, Size::GIBIT),
        (TIBIT, Size::TIBIT),
        (PIBIT, Size::PIBIT),
        (EIBIT, Size::EIBIT),
    ];
    pub const METRIC_BIT_UNITS: [(&'static str, Size); 7] = [
        (BIT, Size::ZERO),
        (KBIT, Size::KBIT),
        (MBIT, Size::MBIT),
        (GBIT, Size::GBIT),
        (TBIT, Size::TBIT),
        (PBIT, Size::PBIT),
        (EBIT, Size::EBIT),
    ];

    pub fn units(&self) -> &'static [(&'static str, Size)] {
        match self {
            Self::BinaryByte => &Self::BINARY_BYTE_UNITS,
            Self::MetricByte => &Self::METRIC_BYTE_UNITS,
            Self::BinaryBit => &Self::BINARY_BIT_UNITS,
            Self::MetricBit => &Self::METRIC_BIT_UNITS,
        }
    }

    pub fn base_unit(&self) -> &'static str {
        self.units()[0].0
    }

    /// Maps a formatting verb letter to its family: `B` binary bytes, `M`
    /// metric bytes, `b` binary bits, `m` metric bits.
    pub fn from_verb(verb: char) -> Option<Self> {
        match verb {
            'B' => Some(Self::BinaryByte),
            'M' => Some(Self::MetricByte),
            'b' => Some(Self::BinaryBit),
            'm' => Some(Self::MetricBit),
            _ => None,
        }
    }

    pub fn verb(&self) -> char {
        match self {
            Self::BinaryByte => 'B',
            Self::MetricByte => 'M',
            Self::BinaryBit => 'b',
            Self::MetricBit => 'm',
        }
    }

    /// The largest unit whose threshold does not exceed `size`, together
    /// with that threshold. The base unit is the fallback for anything
    /// smaller, including zero and negative sizes.
    pub fn best(&self, size: Size) -> (&'static str, Size) {
        let units = self.units();
        let mut best = units[0];

        for &unit in &units[1..] {
            if unit.1 > size {
                break;
            }
            best = unit;
        }

        best
    }

    pub fn best_unit(&self, size: Size) -> &'static str {
        self.best(size).0
    }
}
