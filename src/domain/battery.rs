//! Vehicle battery model.
//!
//! The battery is the only mutable state inside a simulated day. All energy
//! operations self-clamp: a request that cannot be fully satisfied delivers
//! less instead of failing, so the energy level can never leave
//! `[0, capacity]`.

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Static battery parameters for one vehicle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatteryParams {
    /// Usable battery capacity (kWh).
    pub capacity_kwh: f64,
    /// Lower participation bound as a fraction of capacity (0-1).
    pub min_soc: f64,
    /// Upper participation bound as a fraction of capacity (0-1).
    pub max_soc: f64,
    /// Maximum energy accepted in one hourly step (kW).
    pub max_charge_kw: f64,
    /// Maximum energy delivered in one hourly step (kW).
    pub max_discharge_kw: f64,
}

impl Default for BatteryParams {
    fn default() -> Self {
        // Typical mid-size EV on an 11 kW bidirectional charger.
        Self {
            capacity_kwh: 70.0,
            min_soc: 0.2,
            max_soc: 0.8,
            max_charge_kw: 11.0,
            max_discharge_kw: 11.0,
        }
    }
}

impl BatteryParams {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.capacity_kwh > 0.0) || !self.capacity_kwh.is_finite() {
            return Err(ValidationError::NonPositiveCapacity(self.capacity_kwh));
        }
        if !(0.0..=1.0).contains(&self.min_soc)
            || !(0.0..=1.0).contains(&self.max_soc)
            || self.min_soc > self.max_soc
        {
            return Err(ValidationError::InvalidParticipationBand {
                min: self.min_soc,
                max: self.max_soc,
            });
        }
        for power in [self.max_charge_kw, self.max_discharge_kw] {
            if !(power >= 0.0) || !power.is_finite() {
                return Err(ValidationError::NegativePowerLimit(power));
            }
        }
        Ok(())
    }

    /// Lowest energy level the dispatch may draw the battery down to (kWh).
    pub fn min_energy_kwh(&self) -> f64 {
        self.min_soc * self.capacity_kwh
    }

    /// Highest energy level the dispatch may fill the battery up to (kWh).
    pub fn max_energy_kwh(&self) -> f64 {
        self.max_soc * self.capacity_kwh
    }
}

/// Mutable battery state, owned by the day simulator for one day's run.
#[derive(Debug, Clone)]
pub struct Battery {
    params: BatteryParams,
    energy_kwh: f64,
    target_kwh: f64,
}

impl Battery {
    /// Initialise the battery from a schedule entry's arrival and departure
    /// SoC fractions.
    pub fn at_arrival(params: &BatteryParams, arrival_soc: f64, target_soc: f64) -> Self {
        let capacity = params.capacity_kwh;
        Self {
            params: params.clone(),
            energy_kwh: (arrival_soc * capacity).clamp(0.0, capacity),
            target_kwh: (target_soc * capacity).clamp(0.0, capacity),
        }
    }

    pub fn energy_kwh(&self) -> f64 {
        self.energy_kwh
    }

    /// Desired energy level at departure (kWh).
    pub fn target_kwh(&self) -> f64 {
        self.target_kwh
    }

    /// Lower participation bound (kWh).
    pub fn min_energy_kwh(&self) -> f64 {
        self.params.min_energy_kwh()
    }

    /// Charge the battery. Delivers at most the requested amount, capped by
    /// the charger power limit and the headroom to capacity. Returns the
    /// energy actually stored.
    pub fn charge(&mut self, requested_kwh: f64) -> f64 {
        let delivered = requested_kwh
            .min(self.params.max_charge_kw)
            .min(self.params.capacity_kwh - self.energy_kwh)
            .max(0.0);
        self.energy_kwh += delivered;
        delivered
    }

    /// Discharge the battery down to `floor_kwh` at most, capped by the
    /// discharge power limit. Returns the energy actually delivered.
    ///
    /// The floor is a parameter because the dispatch policies protect
    /// different levels: the tariff policy keeps the participation minimum,
    /// the PV-surplus policy keeps the departure target.
    pub fn discharge(&mut self, requested_kwh: f64, floor_kwh: f64) -> f64 {
        let delivered = requested_kwh
            .min(self.params.max_discharge_kw)
            .min((self.energy_kwh - floor_kwh).max(0.0))
            .max(0.0);
        self.energy_kwh -= delivered;
        delivered
    }

    /// State of charge in percent, rounded to two decimals for reporting.
    pub fn soc_percent(&self) -> f64 {
        (self.energy_kwh / self.params.capacity_kwh * 10_000.0).round() / 100.0
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn params() -> BatteryParams {
        BatteryParams::default()
    }

    #[test]
    fn test_charge_respects_power_limit() {
        let mut battery = Battery::at_arrival(&params(), 0.5, 0.8);
        let delivered = battery.charge(30.0);
        assert_eq!(delivered, 11.0);
        assert_eq!(battery.energy_kwh(), 46.0);
    }

    #[test]
    fn test_charge_respects_capacity() {
        let mut battery = Battery::at_arrival(&params(), 0.9, 1.0);
        let delivered = battery.charge(11.0);
        assert!((delivered - 7.0).abs() < 1e-9);
        assert!((battery.energy_kwh() - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_discharge_respects_floor() {
        let mut battery = Battery::at_arrival(&params(), 0.5, 0.8);
        // 35 kWh on board, floor at 34: only 1 kWh available.
        let delivered = battery.discharge(5.0, 34.0);
        assert!((delivered - 1.0).abs() < 1e-9);
        assert!((battery.energy_kwh() - 34.0).abs() < 1e-9);
    }

    #[test]
    fn test_discharge_below_floor_delivers_nothing() {
        let mut battery = Battery::at_arrival(&params(), 0.2, 0.8);
        let delivered = battery.discharge(5.0, 20.0);
        assert_eq!(delivered, 0.0);
        assert!((battery.energy_kwh() - 14.0).abs() < 1e-9);
    }

    #[test]
    fn test_soc_percent_rounding() {
        let battery = Battery::at_arrival(&params(), 46.0 / 70.0, 0.8);
        // 46/70 = 65.7142...% -> reported as 65.71
        assert_eq!(battery.soc_percent(), 65.71);
    }

    #[test]
    fn test_validate_rejects_inverted_band() {
        let bad = BatteryParams {
            min_soc: 0.9,
            max_soc: 0.3,
            ..params()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_positive_capacity() {
        let bad = BatteryParams {
            capacity_kwh: 0.0,
            ..params()
        };
        assert!(bad.validate().is_err());
    }

    proptest! {
        /// Energy never leaves [0, capacity] no matter what is requested.
        #[test]
        fn prop_energy_stays_within_bounds(
            arrival_soc in 0.0f64..=1.0,
            requests in prop::collection::vec((0.0f64..50.0, 0.0f64..50.0, 0.0f64..70.0), 1..50),
        ) {
            let params = params();
            let mut battery = Battery::at_arrival(&params, arrival_soc, 0.8);
            for (charge, discharge, floor) in requests {
                let stored = battery.charge(charge);
                prop_assert!(stored >= 0.0 && stored <= charge);
                let delivered = battery.discharge(discharge, floor);
                prop_assert!(delivered >= 0.0 && delivered <= discharge);
                prop_assert!(battery.energy_kwh() >= 0.0);
                prop_assert!(battery.energy_kwh() <= params.capacity_kwh + 1e-9);
            }
        }
    }
}
