use thiserror::Error;

pub mod battery;
pub mod event;
pub mod schedule;
pub mod types;

pub use battery::*;
pub use event::*;
pub use schedule::*;
pub use types::*;

/// Configuration-time validation errors.
///
/// The simulation core itself never fails: every energy operation
/// self-clamps. Anything that could corrupt a run is rejected here, at
/// construction time.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("battery capacity must be positive, got {0} kWh")]
    NonPositiveCapacity(f64),
    #[error("participation band invalid: min_soc {min} / max_soc {max} (need 0 <= min <= max <= 1)")]
    InvalidParticipationBand { min: f64, max: f64 },
    #[error("power limit must be non-negative, got {0} kW")]
    NegativePowerLimit(f64),
    #[error("hour out of range: {0} (expected 0-23)")]
    HourOutOfRange(u32),
    #[error("state of charge fraction out of range: {0} (expected 0-1)")]
    SocOutOfRange(f64),
    #[error("event day number must be >= 1 (events count simulated days from 1)")]
    ZeroEventDay,
    #[error("event window invalid: start {start} / end {end} (need start < end <= 24)")]
    InvalidEventWindow { start: u32, end: u32 },
    #[error("demand profile must be non-negative, hour {hour} is {value}")]
    NegativeDemand { hour: usize, value: f64 },
    #[error("pv profile must be non-negative, hour {hour} is {value}")]
    NegativePv { hour: usize, value: f64 },
}
