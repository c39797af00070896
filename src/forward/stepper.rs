use super::ModelParams;
use crate::YearRecord;

/// Fluxes for a single modelled year, all in ppm/year
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearFluxes {
    pub emissions_ppm: f64,
    pub sequestration_ppm: f64,
}

impl YearFluxes {
    pub fn net_ppm_increase(&self) -> f64 {
        self.emissions_ppm - self.sequestration_ppm
    }
}

/// Emissions growth rate at step `step`.  Decays towards zero (but never
/// reaches it) as lower-carbon technology is adopted.
pub fn growth_rate(p: &ModelParams, step: u32, acceleration_factor: f64) -> f64 {
    acceleration_factor * (-(step as f64) / p.growth_decay_years).exp()
}

/// Natural sequestration at step `step`, GT/year.  Sink capacity is lost
/// geometrically (forest loss, warming, etc.)
pub fn sequestration_gt(p: &ModelParams, step: u32) -> f64 {
    let sequestration_factor = p.sequestration_retention.powf(step as f64);
    p.total_natural_sequestration_gt() * sequestration_factor
}

/// Advance `prev` by one year.  `step` is the index of the record being
/// produced, so the first call has `step == 1`.
///
/// Returns the new record and the fluxes which produced it.  A negative net
/// increase is a valid outcome and is not clamped.
pub fn advance(
    prev: &YearRecord,
    step: u32,
    acceleration_factor: f64,
    p: &ModelParams,
) -> (YearRecord, YearFluxes) {
    let emissions_gt = prev.emissions_gt * (1.0 + growth_rate(p, step, acceleration_factor));

    let fluxes = YearFluxes {
        emissions_ppm: emissions_gt * p.gt_to_ppm,
        sequestration_ppm: sequestration_gt(p, step) * p.gt_to_ppm,
    };

    let next = YearRecord {
        year: prev.year + 1,
        co2_ppm: prev.co2_ppm + fluxes.net_ppm_increase(),
        emissions_gt,
    };
    (next, fluxes)
}
