//! Flexibility and savings aggregation.
//!
//! A single-pass reduction over the daily summaries of a period run. No
//! control loop and no market settlement, just the headline numbers the
//! planning tools display.

use serde::{Deserialize, Serialize};

use crate::domain::DailySummary;

/// Electricity prices used for the savings estimate (EUR/kWh).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TariffRates {
    pub peak: f64,
    pub off_peak: f64,
    pub normal: f64,
}

impl Default for TariffRates {
    fn default() -> Self {
        Self {
            peak: 0.20,
            off_peak: 0.10,
            normal: 0.20,
        }
    }
}

/// Flexibility and savings rollup over one simulated period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlexibilityReport {
    pub days: usize,
    pub total_discharge_kwh: f64,
    pub total_charge_kwh: f64,
    pub total_pv_charge_kwh: f64,
    /// Peak energy the house did not draw from the grid, valued at the peak
    /// rate (EUR).
    pub v2h_savings: f64,
    /// Value of charging at the off-peak instead of the normal rate (EUR).
    pub charge_shift_savings: f64,
    pub total_savings: f64,
}

impl FlexibilityReport {
    pub fn from_summaries(summaries: &[DailySummary], rates: &TariffRates) -> Self {
        let total_discharge_kwh: f64 = summaries.iter().map(|s| s.discharge_kwh).sum();
        let total_charge_kwh: f64 = summaries.iter().map(|s| s.charge_kwh).sum();
        let total_pv_charge_kwh: f64 = summaries.iter().map(|s| s.pv_charge_kwh).sum();

        let v2h_savings = total_discharge_kwh * rates.peak;
        let charge_shift_savings = total_charge_kwh * (rates.normal - rates.off_peak);

        Self {
            days: summaries.len(),
            total_discharge_kwh,
            total_charge_kwh,
            total_pv_charge_kwh,
            v2h_savings,
            charge_shift_savings,
            total_savings: v2h_savings + charge_shift_savings,
        }
    }
}
