use console::{pad_str, Alignment};
use realq::{Size, Speed, Temperature, TemperatureUnit, UnitSystem, Verb};

use crate::config::{Config, Quantity, Rendering};

pub fn print_report(config: &Config) -> anyhow::Result<()> {
    print!("{}", make_report(config)?);
    Ok(())
}

pub fn make_report(config: &Config) -> anyhow::Result<String> {
    let precision = config.precision;

    let report = match (&config.quantity, &config.rendering) {
        (Quantity::Size(size), Rendering::All) => {
            make_table(all_verbs(|verb| size.format_verb(verb, precision)))
        }
        (Quantity::Speed(speed), Rendering::All) => {
            make_table(all_verbs(|verb| speed.format_verb(verb, precision)))
        }
        (Quantity::Temperature(t), Rendering::All) => make_table(
            TemperatureUnit::ALL
                .iter()
                .map(|&unit| (temperature_label(unit), t.format_in(unit, precision)))
                .collect(),
        ),
        (Quantity::Size(size), Rendering::Verb(verb)) => {
            format!("{}\n", size.format_verb(*verb, precision))
        }
        (Quantity::Speed(speed), Rendering::Verb(verb)) => {
            format!("{}\n", speed.format_verb(*verb, precision))
        }
        (Quantity::Size(size), Rendering::Unit(unit)) => {
            format!("{}\n", size.format_unit(unit, precision.unwrap_or(2))?)
        }
        (Quantity::Speed(speed), Rendering::Unit(unit)) => {
            format!("{}\n", speed.format_unit(unit, precision.unwrap_or(2))?)
        }
        (Quantity::Temperature(t), Rendering::Scale(unit)) => {
            format!("{}\n", t.format_in(*unit, precision))
        }
        (quantity, rendering) => {
            anyhow::bail!("cannot render {quantity:?} as {rendering:?}")
        }
    };

    Ok(report)
}

fn all_verbs(format: impl Fn(Verb) -> String) -> Vec<(&'static str, String)> {
    UnitSystem::ALL
        .iter()
        .map(|&system| (system_label(system), format(Verb::Family(system))))
        .chain(std::iter::once(("raw", format(Verb::Raw))))
        .collect()
}

fn make_table(rows: Vec<(&'static str, String)>) -> String {
    let label_width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

    let mut table = String::new();
    for (label, value) in rows {
        table.push_str(&format!(
            "{}   {}\n",
            pad_str(label, label_width, Alignment::Left, None),
            value
        ));
    }
    table
}

fn system_label(system: UnitSystem) -> &'static str {
    match system {
        UnitSystem::BinaryByte => "binary bytes",
        UnitSystem::MetricByte => "metric bytes",
        UnitSystem::BinaryBit => "binary bits",
        UnitSystem::MetricBit => "metric bits",
    }
}

fn temperature_label(unit: TemperatureUnit) -> &'static str {
    match unit {
        TemperatureUnit::Kelvin => "kelvin",
        TemperatureUnit::Celsius => "celsius",
        TemperatureUnit::Fahrenheit => "fahrenheit",
    }
}
