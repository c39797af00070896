//! Search a trajectory for the year CO2 first reaches a threshold

use log::debug;

use crate::forward::constants::{
    DAYS_PER_YEAR, HOURS_PER_DAY, MINUTES_PER_HOUR, MONTHS_PER_YEAR, SECONDS_PER_MINUTE,
};
use crate::Trajectory;

/// A whole number of years expressed in several units.  Every unit is
/// derived from `years` with fixed ratios (no leap years), so
/// `months == years * 12` etc. hold exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElapsedTime {
    pub years: u64,
    pub months: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl ElapsedTime {
    pub fn from_years(years: u64) -> Self {
        let days = years * DAYS_PER_YEAR;
        let hours = days * HOURS_PER_DAY;
        let minutes = hours * MINUTES_PER_HOUR;
        ElapsedTime {
            years,
            months: years * MONTHS_PER_YEAR,
            days,
            hours,
            minutes,
            seconds: minutes * SECONDS_PER_MINUTE,
        }
    }
}

/// First record at or above the threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossing {
    /// Position of the record in the trajectory
    pub index: usize,
    pub start_year: i32,
    pub crossing_year: i32,
    pub co2_ppm: f64,
    pub elapsed: ElapsedTime,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThresholdOutcome {
    Crossed(Crossing),
    /// The threshold is never reached within the modelled horizon.  This is a
    /// normal result, not an error.
    NotFound { threshold_ppm: f64, horizon_years: u32 },
}

impl ThresholdOutcome {
    pub fn crossing(&self) -> Option<&Crossing> {
        match self {
            ThresholdOutcome::Crossed(c) => Some(c),
            ThresholdOutcome::NotFound { .. } => None,
        }
    }
}

/// Scan `trajectory` in year order and return the first record with
/// `co2_ppm >= threshold_ppm`.
pub fn find_crossing(trajectory: &Trajectory, threshold_ppm: f64) -> ThresholdOutcome {
    let horizon_years = trajectory.len().saturating_sub(1) as u32;
    let (Some(start_year), Some(index)) = (
        trajectory.start_year(),
        trajectory
            .co2_ppm()
            .iter()
            .position(|ppm| *ppm >= threshold_ppm),
    ) else {
        debug!("{} ppm not reached in {} years", threshold_ppm, horizon_years);
        return ThresholdOutcome::NotFound {
            threshold_ppm,
            horizon_years,
        };
    };

    let crossing_year = trajectory.years()[index];
    // years run contiguously from the start, so the record index is the elapsed year count
    let elapsed_years = index as u64;
    debug!("{} ppm reached in {} (index {})", threshold_ppm, crossing_year, index);

    ThresholdOutcome::Crossed(Crossing {
        index,
        start_year,
        crossing_year,
        co2_ppm: trajectory.co2_ppm()[index],
        elapsed: ElapsedTime::from_years(elapsed_years),
    })
}
