//! Weekly connection schedule.
//!
//! Each weekday carries one connection window (arrival to departure, with
//! optional wraparound past midnight) and the SoC the vehicle arrives with
//! and must leave with. Entries are read-only during a day's simulation.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Day of week, Monday-first to match period cycling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Weekday for an absolute simulated day index (0-based, day 0 is a
    /// Monday).
    pub fn from_day_index(index: usize) -> Self {
        Self::ALL[index % 7]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        };
        f.write_str(name)
    }
}

/// Connection window and SoC targets for one weekday.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DaySchedule {
    /// Hour the vehicle arrives and plugs in (0-23).
    pub arrival_hour: u32,
    /// Hour the vehicle departs (0-23). A value below `arrival_hour` means
    /// the connection window spans midnight.
    pub departure_hour: u32,
    /// State of charge on arrival (fraction of capacity).
    pub soc_arrival: f64,
    /// Required state of charge at departure (fraction of capacity).
    pub soc_departure: f64,
}

impl Default for DaySchedule {
    fn default() -> Self {
        // Evening commuter: home 18:00, gone 07:00, half full on arrival.
        Self {
            arrival_hour: 18,
            departure_hour: 7,
            soc_arrival: 0.5,
            soc_departure: 0.8,
        }
    }
}

impl DaySchedule {
    pub fn validate(&self) -> Result<(), ValidationError> {
        for hour in [self.arrival_hour, self.departure_hour] {
            if hour > 23 {
                return Err(ValidationError::HourOutOfRange(hour));
            }
        }
        for soc in [self.soc_arrival, self.soc_departure] {
            if !(0.0..=1.0).contains(&soc) {
                return Err(ValidationError::SocOutOfRange(soc));
            }
        }
        Ok(())
    }

    /// Whether the vehicle is plugged in at `hour`.
    ///
    /// Equal arrival and departure hours denote an empty window (the vehicle
    /// never connects that day).
    pub fn is_connected(&self, hour: u32) -> bool {
        if self.departure_hour < self.arrival_hour {
            hour >= self.arrival_hour || hour < self.departure_hour
        } else {
            hour >= self.arrival_hour && hour < self.departure_hour
        }
    }
}

/// Weekly connection plan, one entry per weekday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    #[serde(default)]
    pub monday: DaySchedule,
    #[serde(default)]
    pub tuesday: DaySchedule,
    #[serde(default)]
    pub wednesday: DaySchedule,
    #[serde(default)]
    pub thursday: DaySchedule,
    #[serde(default)]
    pub friday: DaySchedule,
    #[serde(default)]
    pub saturday: DaySchedule,
    #[serde(default)]
    pub sunday: DaySchedule,
}

impl Default for WeeklySchedule {
    fn default() -> Self {
        Self {
            monday: DaySchedule::default(),
            tuesday: DaySchedule::default(),
            wednesday: DaySchedule::default(),
            thursday: DaySchedule::default(),
            friday: DaySchedule::default(),
            saturday: DaySchedule::default(),
            sunday: DaySchedule::default(),
        }
    }
}

impl WeeklySchedule {
    pub fn get(&self, weekday: Weekday) -> &DaySchedule {
        match weekday {
            Weekday::Monday => &self.monday,
            Weekday::Tuesday => &self.tuesday,
            Weekday::Wednesday => &self.wednesday,
            Weekday::Thursday => &self.thursday,
            Weekday::Friday => &self.friday,
            Weekday::Saturday => &self.saturday,
            Weekday::Sunday => &self.sunday,
        }
    }

    /// Schedule entry for an absolute simulated day index.
    pub fn for_day_index(&self, index: usize) -> (Weekday, &DaySchedule) {
        let weekday = Weekday::from_day_index(index);
        (weekday, self.get(weekday))
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        for weekday in Weekday::ALL {
            self.get(weekday).validate()?;
        }
        Ok(())
    }
}
