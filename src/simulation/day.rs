//! Single-day simulation.

use std::collections::HashSet;

use crate::domain::{Battery, BatteryParams, DayResult, DaySchedule, HourlyRecord, HOURS_PER_DAY};

use super::{DispatchPolicy, EnvironmentProfile, HourlyFlows};

/// Drives one vehicle through 24 hourly dispatch steps.
///
/// Every `run` initialises a fresh battery from the schedule entry's arrival
/// SoC, so the simulator carries no state between runs and repeated runs
/// with identical inputs produce identical traces.
pub struct DaySimulator<'a> {
    params: &'a BatteryParams,
    env: &'a EnvironmentProfile,
    policy: &'a dyn DispatchPolicy,
}

impl<'a> DaySimulator<'a> {
    pub fn new(
        params: &'a BatteryParams,
        env: &'a EnvironmentProfile,
        policy: &'a dyn DispatchPolicy,
    ) -> Self {
        Self {
            params,
            env,
            policy,
        }
    }

    /// Simulate one day under `schedule`, with `blocked_hours` carved out of
    /// the connection window. Each hour is decided exactly once and the
    /// record is final.
    pub fn run(&self, schedule: &DaySchedule, blocked_hours: &HashSet<u32>) -> DayResult {
        let mut battery =
            Battery::at_arrival(self.params, schedule.soc_arrival, schedule.soc_departure);
        let mut records = Vec::with_capacity(HOURS_PER_DAY);

        for hour in 0..HOURS_PER_DAY as u32 {
            let connected = schedule.is_connected(hour) && !blocked_hours.contains(&hour);
            let flows = if connected {
                self.policy.dispatch(hour, &mut battery, self.env)
            } else {
                HourlyFlows::default()
            };

            records.push(HourlyRecord {
                hour,
                discharge_kwh: flows.discharge_kwh,
                charge_kwh: flows.charge_kwh,
                pv_charge_kwh: flows.pv_charge_kwh,
                soc_percent: battery.soc_percent(),
                connected,
            });
        }

        DayResult { records }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::TariffPolicy;

    fn fixtures() -> (BatteryParams, EnvironmentProfile) {
        (
            BatteryParams::default(),
            EnvironmentProfile::typical_household(),
        )
    }

    /// Full trace of the default commuter day (18:00 -> 07:00, 50% -> 80%)
    /// under the tariff policy and the typical household profile.
    #[test]
    fn test_default_commuter_day_trace() {
        let (params, env) = fixtures();
        let policy = TariffPolicy;
        let simulator = DaySimulator::new(&params, &env, &policy);
        let result = simulator.run(&DaySchedule::default(), &HashSet::new());

        assert_eq!(result.records.len(), 24);

        // Hours 0 and 1 charge 11 + 10 kWh off-peak, reaching the 56 kWh
        // target; hour 18 discharges into the 1.3 kWh evening peak; hour 22
        // tops the battery back up off-peak.
        assert_eq!(result.records[0].charge_kwh, 11.0);
        assert!((result.records[1].charge_kwh - 10.0).abs() < 1e-9);
        assert_eq!(result.records[2].charge_kwh, 0.0);
        assert!((result.records[18].discharge_kwh - 1.3).abs() < 1e-9);
        assert!((result.records[22].charge_kwh - 1.3).abs() < 1e-9);

        assert!((result.total_discharge_kwh() - 1.3).abs() < 1e-9);
        assert!((result.total_charge_kwh() - 22.3).abs() < 1e-9);
        assert_eq!(result.total_pv_charge_kwh(), 0.0);
        assert_eq!(result.end_soc_percent(), 80.0);
    }

    #[test]
    fn test_disconnected_hours_move_no_energy() {
        let (params, env) = fixtures();
        let policy = TariffPolicy;
        let simulator = DaySimulator::new(&params, &env, &policy);
        let result = simulator.run(&DaySchedule::default(), &HashSet::new());

        for record in &result.records {
            if !record.connected {
                assert_eq!(record.discharge_kwh, 0.0);
                assert_eq!(record.charge_kwh, 0.0);
                assert_eq!(record.pv_charge_kwh, 0.0);
            }
        }
        // 18:00 -> 07:00 leaves hours 7-17 disconnected.
        assert!(!result.records[10].connected);
        assert!(result.records[20].connected);
    }

    #[test]
    fn test_blocked_hours_override_the_window() {
        let (params, env) = fixtures();
        let policy = TariffPolicy;
        let simulator = DaySimulator::new(&params, &env, &policy);

        let blocked: HashSet<u32> = [0, 1].into_iter().collect();
        let result = simulator.run(&DaySchedule::default(), &blocked);

        assert!(!result.records[0].connected);
        assert!(!result.records[1].connected);
        assert_eq!(result.records[0].charge_kwh, 0.0);
        assert_eq!(result.records[1].charge_kwh, 0.0);
        // Charging shifts to the first unblocked off-peak hours.
        assert_eq!(result.records[2].charge_kwh, 11.0);
        assert!((result.records[3].charge_kwh - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_run_is_deterministic() {
        let (params, env) = fixtures();
        let policy = TariffPolicy;
        let simulator = DaySimulator::new(&params, &env, &policy);

        let first = simulator.run(&DaySchedule::default(), &HashSet::new());
        let second = simulator.run(&DaySchedule::default(), &HashSet::new());
        assert_eq!(first, second);
    }

    #[test]
    fn test_soc_trace_stays_within_capacity() {
        let (params, env) = fixtures();
        let policy = TariffPolicy;
        let simulator = DaySimulator::new(&params, &env, &policy);
        let result = simulator.run(&DaySchedule::default(), &HashSet::new());

        for record in &result.records {
            assert!(record.soc_percent >= 0.0);
            assert!(record.soc_percent <= 100.0);
        }
    }
}
