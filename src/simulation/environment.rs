//! House demand and PV production profiles.

use serde::{Deserialize, Serialize};

use crate::domain::{ValidationError, HOURS_PER_DAY};

/// Fixed 24-hour household demand and PV production profiles.
///
/// Values are kWh moved during the hour; at hourly resolution they are
/// numerically interchangeable with average kW. Profiles are constant across
/// all days of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentProfile {
    /// House demand per hour-of-day (kWh).
    pub demand_kwh: [f64; HOURS_PER_DAY],
    /// PV production per hour-of-day (kWh).
    pub pv_kwh: [f64; HOURS_PER_DAY],
}

impl EnvironmentProfile {
    pub fn new(
        demand_kwh: [f64; HOURS_PER_DAY],
        pv_kwh: [f64; HOURS_PER_DAY],
    ) -> Result<Self, ValidationError> {
        let profile = Self { demand_kwh, pv_kwh };
        profile.validate()?;
        Ok(profile)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        for (hour, &value) in self.demand_kwh.iter().enumerate() {
            if !(value >= 0.0) || !value.is_finite() {
                return Err(ValidationError::NegativeDemand { hour, value });
            }
        }
        for (hour, &value) in self.pv_kwh.iter().enumerate() {
            if !(value >= 0.0) || !value.is_finite() {
                return Err(ValidationError::NegativePv { hour, value });
            }
        }
        Ok(())
    }

    pub fn demand(&self, hour: u32) -> f64 {
        self.demand_kwh[hour as usize]
    }

    pub fn pv(&self, hour: u32) -> f64 {
        self.pv_kwh[hour as usize]
    }

    /// Default household profile: morning and evening demand peaks with a
    /// midday PV bell.
    pub fn typical_household() -> Self {
        Self {
            demand_kwh: [
                0.5, 0.5, 0.4, 0.4, 0.3, 0.3, 0.6, 0.8, 1.2, 1.5, //
                1.0, 0.8, 0.6, 0.5, 0.5, 0.6, 1.2, 1.5, 1.3, 1.0, //
                0.8, 0.7, 0.6, 0.5,
            ],
            pv_kwh: [
                0.0, 0.0, 0.0, 0.0, 0.0, 0.2, 0.5, 1.2, 2.5, 4.0, //
                4.5, 4.2, 3.8, 3.2, 2.0, 1.0, 0.4, 0.1, 0.0, 0.0, //
                0.0, 0.0, 0.0, 0.0,
            ],
        }
    }
}

impl Default for EnvironmentProfile {
    fn default() -> Self {
        Self::typical_household()
    }
}
