//! Hourly dispatch policies.
//!
//! A policy decides, for one connected hour, how much energy moves between
//! the vehicle battery, the house, and the grid/PV. Policies are greedy and
//! myopic: they never reserve capacity for a later hour, and each hour is
//! decided exactly once.

use serde::{Deserialize, Serialize};

use super::EnvironmentProfile;
use crate::domain::Battery;

/// House demand above this is treated as a peak hour (kWh per hour).
///
/// Fixed design constant of the tariff policy, not a run input.
pub const PEAK_DEMAND_THRESHOLD_KWH: f64 = 1.0;

/// Hours billed at the off-peak tariff: 22:00-06:00.
pub fn is_off_peak(hour: u32) -> bool {
    hour < 6 || hour >= 22
}

/// Energy moved during one connected hour.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HourlyFlows {
    pub discharge_kwh: f64,
    pub charge_kwh: f64,
    pub pv_charge_kwh: f64,
}

/// An hourly dispatch rule.
///
/// The two implementations encode different backing assumptions (peak/
/// off-peak prices vs. net PV surplus) and are selected per simulation run.
pub trait DispatchPolicy {
    fn dispatch(&self, hour: u32, battery: &mut Battery, env: &EnvironmentProfile) -> HourlyFlows;
}

/// Policy selector for a simulation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyKind {
    #[default]
    Tariff,
    PvSurplus,
}

impl PolicyKind {
    pub fn build(self) -> Box<dyn DispatchPolicy> {
        match self {
            PolicyKind::Tariff => Box::new(TariffPolicy),
            PolicyKind::PvSurplus => Box::new(PvSurplusPolicy),
        }
    }
}

/// Price-signal dispatch.
///
/// Discharges into peak house demand while above the participation floor;
/// otherwise charges toward the departure target during off-peak hours or
/// while PV produces. The branches are mutually exclusive and discharge wins
/// when an hour qualifies for both.
pub struct TariffPolicy;

impl DispatchPolicy for TariffPolicy {
    fn dispatch(&self, hour: u32, battery: &mut Battery, env: &EnvironmentProfile) -> HourlyFlows {
        let demand = env.demand(hour);
        let pv = env.pv(hour);
        let mut flows = HourlyFlows::default();

        if demand > PEAK_DEMAND_THRESHOLD_KWH && battery.energy_kwh() > battery.min_energy_kwh() {
            flows.discharge_kwh = battery.discharge(demand, battery.min_energy_kwh());
        } else if (is_off_peak(hour) || pv > 0.0) && battery.energy_kwh() < battery.target_kwh() {
            let shortfall = battery.target_kwh() - battery.energy_kwh();
            flows.charge_kwh = battery.charge(shortfall);
            flows.pv_charge_kwh = pv.min(flows.charge_kwh);
        }

        flows
    }
}

/// Net-surplus dispatch.
///
/// Whenever the battery sits above its departure target, covers house demand
/// from the vehicle; independently stores any PV production left after the
/// house is served. Ignores tariff windows entirely, so both actions can
/// occur in the same hour.
pub struct PvSurplusPolicy;

impl DispatchPolicy for PvSurplusPolicy {
    fn dispatch(&self, hour: u32, battery: &mut Battery, env: &EnvironmentProfile) -> HourlyFlows {
        let demand = env.demand(hour);
        let mut flows = HourlyFlows::default();

        if battery.energy_kwh() > battery.target_kwh() {
            flows.discharge_kwh = battery.discharge(demand, battery.target_kwh());
        }

        let surplus = env.pv(hour) - demand;
        if surplus > 0.0 {
            flows.charge_kwh = battery.charge(surplus);
            flows.pv_charge_kwh = flows.charge_kwh;
        }

        flows
    }
}
