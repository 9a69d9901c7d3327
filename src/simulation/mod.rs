//! # V2H Dispatch Simulation
//!
//! Drives one vehicle battery through hourly charge/discharge decisions
//! against a fixed house demand and PV profile.
//!
//! ## Components
//!
//! - **Environment**: fixed 24-hour demand and PV profiles
//! - **Policy**: the hourly dispatch rule (tariff-aware or PV-surplus)
//! - **Day**: 24 hourly steps for one vehicle with connectivity overrides
//! - **Period**: repeats the day simulator across N days under a weekly
//!   schedule and exceptional unavailability events
//!
//! ## Usage
//!
//! ```rust
//! use std::collections::HashSet;
//! use v2h_sim::domain::{BatteryParams, DaySchedule};
//! use v2h_sim::simulation::{DaySimulator, EnvironmentProfile, TariffPolicy};
//!
//! let params = BatteryParams::default();
//! let env = EnvironmentProfile::typical_household();
//! let policy = TariffPolicy;
//!
//! let simulator = DaySimulator::new(&params, &env, &policy);
//! let result = simulator.run(&DaySchedule::default(), &HashSet::new());
//! assert_eq!(result.records.len(), 24);
//! ```

pub mod day;
pub mod environment;
pub mod period;
pub mod policy;

pub use day::DaySimulator;
pub use environment::EnvironmentProfile;
pub use period::PeriodSimulator;
pub use policy::{
    is_off_peak, DispatchPolicy, HourlyFlows, PolicyKind, PvSurplusPolicy, TariffPolicy,
    PEAK_DEMAND_THRESHOLD_KWH,
};
