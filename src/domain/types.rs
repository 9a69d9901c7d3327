//! Result types emitted by the simulators.

use serde::{Deserialize, Serialize};

use super::Weekday;

/// Hours in one simulated day.
pub const HOURS_PER_DAY: usize = 24;

/// Outcome of one hourly dispatch step. Immutable once emitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourlyRecord {
    pub hour: u32,
    /// V2H energy delivered to the house (kWh).
    pub discharge_kwh: f64,
    /// Energy delivered to the battery (kWh).
    pub charge_kwh: f64,
    /// PV-sourced share of the charge (kWh); the remainder came from the grid.
    pub pv_charge_kwh: f64,
    /// State of charge after the step (%).
    pub soc_percent: f64,
    /// Whether the vehicle was connected this hour.
    pub connected: bool,
}

/// Full hourly trace of one simulated day, always 24 records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayResult {
    pub records: Vec<HourlyRecord>,
}

impl DayResult {
    pub fn total_discharge_kwh(&self) -> f64 {
        self.records.iter().map(|r| r.discharge_kwh).sum()
    }

    pub fn total_charge_kwh(&self) -> f64 {
        self.records.iter().map(|r| r.charge_kwh).sum()
    }

    pub fn total_pv_charge_kwh(&self) -> f64 {
        self.records.iter().map(|r| r.pv_charge_kwh).sum()
    }

    /// State of charge after hour 23 (%).
    pub fn end_soc_percent(&self) -> f64 {
        self.records.last().map_or(0.0, |r| r.soc_percent)
    }
}

/// Per-day rollup produced by the period simulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    pub weekday: Weekday,
    pub discharge_kwh: f64,
    pub charge_kwh: f64,
    pub pv_charge_kwh: f64,
    pub end_soc_percent: f64,
}

impl DailySummary {
    pub fn from_day(weekday: Weekday, result: &DayResult) -> Self {
        Self {
            weekday,
            discharge_kwh: result.total_discharge_kwh(),
            charge_kwh: result.total_charge_kwh(),
            pv_charge_kwh: result.total_pv_charge_kwh(),
            end_soc_percent: result.end_soc_percent(),
        }
    }
}
