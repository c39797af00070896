// present-day figures (2023 estimates), used as parameter defaults

/// Current atmospheric CO2, ppm
pub const CURRENT_CO2_PPM: f64 = 420.0;
/// 10x current levels
pub const TOXIC_BREATHING_CO2_PPM: f64 = 4200.0;
pub const PREINDUSTRIAL_CO2_PPM: f64 = 280.0;
/// Observed rate of CO2 increase, ppm/year
pub const CURRENT_ANNUAL_CO2_INCREASE_PPM: f64 = 2.5;

// fluxes, gigatons CO2 per year
pub const CURRENT_ANNUAL_EMISSIONS_GT: f64 = 36.8;
/// Global forest sequestration
pub const TREE_SEQUESTRATION_GT: f64 = 7.6;
/// Oceans, soil etc. beyond forests
pub const ADDITIONAL_NATURAL_SINKS_GT: f64 = 10.1;

/// 1 GT of CO2 is about 0.1292 ppm in the atmosphere
pub const GT_CO2_TO_PPM: f64 = 0.1292;

// model shape
/// Fraction of natural sequestration capacity retained from one year to the next
pub const SEQUESTRATION_RETENTION: f64 = 0.999;
/// e-folding time of the emissions growth rate, years
pub const GROWTH_DECAY_YEARS: f64 = 100.0;

// run defaults
pub const DEFAULT_HORIZON_YEARS: u32 = 1000;
pub const DEFAULT_ACCELERATION_FACTOR: f64 = 0.01;
/// Number of records drawn past the crossing year
pub const PLOT_YEARS_AFTER_CROSSING: usize = 20;

// calendar-free time conversion
pub const MONTHS_PER_YEAR: u64 = 12;
pub const DAYS_PER_YEAR: u64 = 365;
pub const HOURS_PER_DAY: u64 = 24;
pub const MINUTES_PER_HOUR: u64 = 60;
pub const SECONDS_PER_MINUTE: u64 = 60;
