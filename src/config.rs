use anyhow::{anyhow, bail, Context};
use realq::{
    units::{table, BIT},
    Size, Speed, Temperature, TemperatureUnit, UnitSystem, Verb,
};

use crate::cli::{Args, Command, QuantityArgs, TemperatureArgs};

pub struct Config {
    pub quantity: Quantity,
    pub rendering: Rendering,
    pub precision: Option<usize>,
}

#[derive(Debug, PartialEq)]
pub enum Quantity {
    Size(Size),
    Speed(Speed),
    Temperature(Temperature),
}

#[derive(Debug, PartialEq)]
pub enum Rendering {
    Verb(Verb),
    Unit(String),
    Scale(TemperatureUnit),
    All,
}

impl TryFrom<Args> for Config {
    type Error = anyhow::Error;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let (quantity, rendering) = match args.command {
            Command::Size(qa) => {
                let size = Size::parse(&qa.text)
                    .with_context(|| format!("error parsing size '{}'", qa.text))?;
                (Quantity::Size(size), quantity_rendering(qa)?)
            }
            Command::Speed(qa) => {
                let speed = Speed::parse(&qa.text)
                    .with_context(|| format!("error parsing speed '{}'", qa.text))?;
                (Quantity::Speed(speed), quantity_rendering(qa)?)
            }
            Command::Temp(ta) => temperature(ta)?,
        };

        Ok(Config {
            quantity,
            rendering,
            precision: args.precision,
        })
    }
}

fn quantity_rendering(qa: QuantityArgs) -> anyhow::Result<Rendering> {
    if qa.all {
        return Ok(Rendering::All);
    }
    if qa.raw {
        return Ok(Rendering::Verb(Verb::Raw));
    }
    if let Some(unit) = qa.unit {
        if unit != BIT && table::lookup(&unit).is_none() {
            bail!("unknown unit '{unit}'");
        }
        return Ok(Rendering::Unit(unit));
    }

    let system = match (qa.si, qa.bits) {
        (false, false) => UnitSystem::BinaryByte,
        (true, false) => UnitSystem::MetricByte,
        (false, true) => UnitSystem::BinaryBit,
        (true, true) => UnitSystem::MetricBit,
    };
    Ok(Rendering::Verb(Verb::Family(system)))
}

fn temperature(ta: TemperatureArgs) -> anyhow::Result<(Quantity, Rendering)> {
    let from: TemperatureUnit = ta
        .from
        .parse()
        .map_err(|err| anyhow!("invalid --from: {err}"))?;
    let rendering = match ta.to {
        Some(to) => Rendering::Scale(to.parse().map_err(|err| anyhow!("invalid --to: {err}"))?),
        None => Rendering::All,
    };

    Ok((
        Quantity::Temperature(Temperature::from_unit(ta.value, from)),
        rendering,
    ))
}
