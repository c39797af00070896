//
// This is a forward model of atmospheric CO2 i.e. given a starting state and an
// emissions acceleration it produces a year-by-year concentration trajectory.
//
// The model is a single explicit recurrence with a one year step:
//   emissions grow at a rate which decays exponentially towards zero, natural
//   sequestration capacity decays geometrically, and the difference (converted
//   from GT to ppm) is added to the previous concentration.

use chrono::Datelike;
use derive_builder::Builder;
use log::debug;
use serde::{Deserialize, Serialize};

pub mod constants;
pub mod quickplot;
pub mod stepper;

use constants::*;

use super::{Trajectory, YearRecord};

/// Model parameters.  Missing values (in a builder or a config file) take the
/// present-day defaults from [`constants`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default)]
#[serde(default)]
pub struct ModelParams {
    /// CO2 concentration at the start of the run (default 420 ppm)
    pub start_co2_ppm: f64,
    /// Concentration considered toxic to breathe (default 4200 ppm)
    pub toxic_co2_ppm: f64,
    /// Reported for context only (default 280 ppm)
    pub preindustrial_co2_ppm: f64,
    /// Observed rate of increase, reported for context only (default 2.5 ppm/year)
    pub annual_co2_increase_ppm: f64,
    /// Emissions in the starting year (default 36.8 GT/year)
    pub annual_emissions_gt: f64,
    /// Forest sequestration (default 7.6 GT/year)
    pub tree_sequestration_gt: f64,
    /// Non-forest natural sinks (default 10.1 GT/year)
    pub additional_sinks_gt: f64,
    /// ppm per GT of CO2 (default 0.1292)
    pub gt_to_ppm: f64,
    /// Sequestration retained each year (default 0.999)
    pub sequestration_retention: f64,
    /// e-folding time of the emissions growth rate (default 100 years)
    pub growth_decay_years: f64,
}

impl Default for ModelParams {
    fn default() -> Self {
        ModelParams {
            start_co2_ppm: CURRENT_CO2_PPM,
            toxic_co2_ppm: TOXIC_BREATHING_CO2_PPM,
            preindustrial_co2_ppm: PREINDUSTRIAL_CO2_PPM,
            annual_co2_increase_ppm: CURRENT_ANNUAL_CO2_INCREASE_PPM,
            annual_emissions_gt: CURRENT_ANNUAL_EMISSIONS_GT,
            tree_sequestration_gt: TREE_SEQUESTRATION_GT,
            additional_sinks_gt: ADDITIONAL_NATURAL_SINKS_GT,
            gt_to_ppm: GT_CO2_TO_PPM,
            sequestration_retention: SEQUESTRATION_RETENTION,
            growth_decay_years: GROWTH_DECAY_YEARS,
        }
    }
}

impl ModelParams {
    /// Trees plus the other natural sinks, GT/year
    pub fn total_natural_sequestration_gt(&self) -> f64 {
        self.tree_sequestration_gt + self.additional_sinks_gt
    }

    /// Starting emissions minus starting sequestration, GT/year
    pub fn net_annual_balance_gt(&self) -> f64 {
        self.annual_emissions_gt - self.total_natural_sequestration_gt()
    }
}

/// Calendar year according to the local clock
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

#[derive(Debug, Clone, Builder)]
pub struct TrajectoryModel {
    #[builder(default)]
    pub p: ModelParams,
    /// Calendar year of the first record
    #[builder(default = "current_year()")]
    pub start_year: i32,
}

impl TrajectoryModel {
    /// See [`generate`]
    pub fn generate(&self, horizon_years: u32, acceleration_factor: f64) -> Trajectory {
        generate(&self.p, self.start_year, horizon_years, acceleration_factor)
    }
}

/// Project CO2 concentration for `horizon_years` years after `start_year`.
///
/// The result has `horizon_years + 1` records; record 0 is the starting state
/// from `p`.  `acceleration_factor` is not validated, negative values slow (or
/// reverse) emissions growth.
pub fn generate(
    p: &ModelParams,
    start_year: i32,
    horizon_years: u32,
    acceleration_factor: f64,
) -> Trajectory {
    let initial = YearRecord {
        year: start_year,
        co2_ppm: p.start_co2_ppm,
        emissions_gt: p.annual_emissions_gt,
    };
    let mut trajectory = Trajectory::starting_at(initial, horizon_years as usize + 1);

    let mut prev = initial;
    for step in 1..=horizon_years {
        let (next, _fluxes) = stepper::advance(&prev, step, acceleration_factor, p);
        trajectory.push(next);
        prev = next;
    }

    debug!(
        "Modelled {} years from {} (acceleration {}), final CO2 {:.1} ppm",
        horizon_years, start_year, acceleration_factor, prev.co2_ppm
    );
    trajectory
}
