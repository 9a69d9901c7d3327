use anyhow::Result;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

use crate::domain::{BatteryParams, UnavailabilityEvent, ValidationError, WeeklySchedule};
use crate::report::TariffRates;
use crate::simulation::{EnvironmentProfile, PolicyKind};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub prices: TariffRates,
    #[serde(default)]
    pub environment: EnvironmentProfile,
    pub vehicles: Vec<VehicleConfig>,
    #[serde(default)]
    pub events: Vec<UnavailabilityEvent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SimulationConfig {
    /// Number of consecutive days to simulate.
    pub days: usize,
    /// Dispatch policy for the run.
    #[serde(default)]
    pub policy: PolicyKind,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VehicleConfig {
    pub name: String,
    #[serde(default)]
    pub battery: BatteryParams,
    #[serde(default)]
    pub schedule: WeeklySchedule,
}

impl Config {
    pub fn load() -> Result<Self> {
        let figment = Figment::new()
            .merge(Toml::file("config/default.toml"))
            .merge(Env::prefixed("V2H__").split("__"));
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject anything that could corrupt a run before the simulation starts.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.environment.validate()?;
        for vehicle in &self.vehicles {
            vehicle.battery.validate()?;
            vehicle.schedule.validate()?;
        }
        for event in &self.events {
            event.validate()?;
        }
        Ok(())
    }
}
