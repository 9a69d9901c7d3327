//! Exceptional unavailability events.

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// An extra blocked interval layered on top of the weekly schedule.
///
/// Events address absolute simulated days counted from 1 ("day 3" is day
/// index 2), while schedules cycle by weekday name. The 1-based day number
/// is what planning tools hand over; it is converted to a 0-based index
/// exactly once, here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnavailabilityEvent {
    /// 1-based simulated day number.
    pub day: u32,
    /// First blocked hour (inclusive, 0-23).
    pub start_hour: u32,
    /// End of the blocked window (exclusive, 1-24).
    pub end_hour: u32,
}

impl UnavailabilityEvent {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.day == 0 {
            return Err(ValidationError::ZeroEventDay);
        }
        if self.start_hour >= self.end_hour || self.end_hour > 24 {
            return Err(ValidationError::InvalidEventWindow {
                start: self.start_hour,
                end: self.end_hour,
            });
        }
        Ok(())
    }

    /// 0-based index of the simulated day this event applies to.
    ///
    /// `day == 0` fails [`validate`](Self::validate) and saturates to index
    /// 0 here, so an unvalidated event can never underflow.
    pub fn day_index(&self) -> usize {
        (self.day as usize).saturating_sub(1)
    }

    /// The blocked hours, end-exclusive.
    pub fn hours(&self) -> std::ops::Range<u32> {
        self.start_hour..self.end_hour
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_index_is_zero_based() {
        let event = UnavailabilityEvent {
            day: 3,
            start_hour: 9,
            end_hour: 12,
        };
        assert_eq!(event.day_index(), 2);
        assert_eq!(event.hours().collect::<Vec<_>>(), vec![9, 10, 11]);
    }

    #[test]
    fn test_validate_rejects_inverted_window() {
        let event = UnavailabilityEvent {
            day: 1,
            start_hour: 12,
            end_hour: 9,
        };
        assert!(event.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_day_zero() {
        let event = UnavailabilityEvent {
            day: 0,
            start_hour: 9,
            end_hour: 12,
        };
        assert!(event.validate().is_err());
        // The index accessor stays total even on the invalid value.
        assert_eq!(event.day_index(), 0);
    }

    #[test]
    fn test_validate_accepts_window_ending_at_midnight() {
        let event = UnavailabilityEvent {
            day: 1,
            start_hour: 22,
            end_hour: 24,
        };
        assert!(event.validate().is_ok());
    }
}
