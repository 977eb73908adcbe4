//! Unit names as they are written in formatted output.
//!
//! Every scale has exactly one output spelling. Parsing accepts a few more
//! (see [`table`]).

pub mod system;
pub mod table;

pub const B: &str = "B";
pub const BIT: &str = "b";

pub const KB: &str = "kB";
pub const MB: &str = "MB";
pub const GB: &str = "GB";
pub const TB: &str = "TB";
pub const PB: &str = "PB";
pub const EB: &str = "EB";

pub const KIB: &str = "kiB";
pub const MIB: &str = "MiB";
pub const GIB: &str = "GiB";
pub const TIB: &str = "TiB";
pub const PIB: &str = "PiB";
pub const EIB: &str = "EiB";

pub const KBIT: &str = "kb";
pub const MBIT: &str = "Mb";
pub const GBIT: &str = "Gb";
pub const TBIT: &str = "Tb";
pub const PBIT: &str = "Pb";
pub const EBIT: &str = "Eb";

pub const KIBIT: &str = "kib";
pub const MIBIT: &str = "Mib";
pub const GIBIT: &str = "Gib";
pub const TIBIT: &str = "Tib";
pub const PIBIT: &str = "Pib";
pub const EIBIT: &str = "Eib";

/// Base units never carry a fractional remainder.
pub fn is_base_unit(unit: &str) -> bool {
    unit == B || unit == BIT
}
