//! Multi-day simulation.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::domain::{BatteryParams, DailySummary, UnavailabilityEvent, WeeklySchedule};

use super::{DaySimulator, DispatchPolicy, EnvironmentProfile};

/// Repeats the day simulator across an N-day period.
///
/// Day index `i` maps to the weekly schedule entry `i mod 7` (Monday-first);
/// exceptional events matching the day's absolute index carve extra blocked
/// hours out of that day's connection window. The battery restarts from the
/// schedule's arrival SoC every day; no state carries across days.
pub struct PeriodSimulator<'a> {
    params: &'a BatteryParams,
    env: &'a EnvironmentProfile,
    policy: &'a dyn DispatchPolicy,
    schedule: &'a WeeklySchedule,
}

impl<'a> PeriodSimulator<'a> {
    pub fn new(
        params: &'a BatteryParams,
        env: &'a EnvironmentProfile,
        policy: &'a dyn DispatchPolicy,
        schedule: &'a WeeklySchedule,
    ) -> Self {
        Self {
            params,
            env,
            policy,
            schedule,
        }
    }

    /// Simulate `days` consecutive days and collect one summary per day, in
    /// day order.
    ///
    /// Events are filtered at this boundary: malformed ones (failing
    /// [`UnavailabilityEvent::validate`]) and ones addressing a day outside
    /// the period are logged and dropped, never applied.
    pub fn run(&self, days: usize, events: &[UnavailabilityEvent]) -> Vec<DailySummary> {
        let events: Vec<UnavailabilityEvent> = events
            .iter()
            .copied()
            .filter(|event| {
                if let Err(error) = event.validate() {
                    warn!(%error, "malformed unavailability event, ignoring");
                    return false;
                }
                if event.day_index() >= days {
                    warn!(
                        day = event.day,
                        days, "unavailability event outside the simulated period, ignoring"
                    );
                    return false;
                }
                true
            })
            .collect();

        let day_simulator = DaySimulator::new(self.params, self.env, self.policy);

        (0..days)
            .map(|index| {
                let (weekday, schedule) = self.schedule.for_day_index(index);
                let blocked = blocked_hours_for(&events, index);
                if !blocked.is_empty() {
                    debug!(day = index + 1, blocked = blocked.len(), "blocked hours");
                }
                let result = day_simulator.run(schedule, &blocked);
                DailySummary::from_day(weekday, &result)
            })
            .collect()
    }
}

/// Union of the hour ranges of all events addressing `day_index`.
fn blocked_hours_for(events: &[UnavailabilityEvent], day_index: usize) -> HashSet<u32> {
    events
        .iter()
        .filter(|event| event.day_index() == day_index)
        .flat_map(UnavailabilityEvent::hours)
        .collect()
}
