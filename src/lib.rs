//! # V2H Flexibility Simulator
//!
//! Hour-by-hour vehicle-to-home dispatch simulation: given a vehicle battery,
//! a weekly connection schedule, and a fixed house demand + PV profile, the
//! core decides per hour whether the vehicle charges, discharges, or stays
//! idle, repeats that across a multi-day period, and reduces the result to
//! flexibility and savings metrics.
//!
//! The core is pure, synchronous computation: each run owns its battery and
//! result buffers, so vehicles and runs can be simulated independently in
//! parallel without coordination.

pub mod config;
pub mod domain;
pub mod report;
pub mod simulation;
pub mod telemetry;
