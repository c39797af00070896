use std::path::Path;

use itertools::izip;
use log::info;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use thiserror::Error;

use super::ModelParams;
use crate::threshold::ThresholdOutcome;
use crate::Trajectory;

const CHART_SIZE: (u32, u32) = (1200, 800);
const FOOTER_HEIGHT: u32 = 70;
const DARK_RED: RGBColor = RGBColor(139, 0, 0);
const GREEN_LINE: RGBColor = RGBColor(0, 128, 0);

const FOOTER_NOTE: [&str; 2] = [
    "Model assumes emissions continue to grow but at a decreasing rate, while natural sequestration slowly declines.",
    "Actual trajectory will depend on policy, technology, and natural feedback loops.",
];

/// Errors returned by this module
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("trajectory has no records to plot")]
    EmptySeries,
    #[error("concentration range is not finite")]
    NonFinite,
    #[error("drawing failed: {0}")]
    Draw(String),
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for ChartError {
    fn from(value: DrawingAreaErrorKind<E>) -> Self {
        ChartError::Draw(value.to_string())
    }
}

/// Number of records to plot.  With a crossing the series stops
/// `years_after_crossing` records after the crossing index, otherwise the
/// full trajectory is drawn.  The crossing record itself is always included.
pub fn plot_extent(
    trajectory_len: usize,
    crossing_index: Option<usize>,
    years_after_crossing: usize,
) -> usize {
    match crossing_index {
        Some(idx) => idx
            .saturating_add(years_after_crossing.max(1))
            .min(trajectory_len),
        None => trajectory_len,
    }
}

/// Y axis range covering the finite part of the series and both reference
/// lines, with a margin.  `None` when no finite range exists.
fn y_range(co2: &[f64], p: &ModelParams) -> Option<(f64, f64)> {
    let finite = || co2.iter().copied().filter(|v| v.is_finite());
    let lo = finite().fold(p.start_co2_ppm.min(p.toxic_co2_ppm), f64::min);
    let hi = finite().fold(p.start_co2_ppm.max(p.toxic_co2_ppm), f64::max);
    if !(hi - lo).is_finite() {
        return None;
    }
    let margin = ((hi - lo) * 0.05).max(1.0);
    let (y0, y1) = (lo - margin, hi + margin);
    // the margin can overflow for values near f64::MAX
    if (y1 - y0).is_finite() {
        Some((y0, y1))
    } else {
        Some((lo, hi))
    }
}

/// Draw concentration against year with reference lines at the starting and
/// toxic levels and a marker at the crossing year.  Written as SVG.
pub fn draw_trajectory<P>(
    trajectory: &Trajectory,
    outcome: &ThresholdOutcome,
    p: &ModelParams,
    years_after_crossing: usize,
    path: P,
) -> Result<(), ChartError>
where
    P: AsRef<Path>,
{
    if trajectory.is_empty() {
        return Err(ChartError::EmptySeries);
    }
    let crossing = outcome.crossing();
    let n = plot_extent(
        trajectory.len(),
        crossing.map(|c| c.index),
        years_after_crossing,
    );
    let years = &trajectory.years()[..n];
    let co2 = &trajectory.co2_ppm()[..n];

    let x0 = years[0];
    // a single record still needs a non-empty axis
    let x1 = years[n - 1].max(x0 + 1);
    let (y0, y1) = y_range(co2, p).ok_or(ChartError::NonFinite)?;

    let root = SVGBackend::new(path.as_ref(), CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let (upper, footer) = root.split_vertically(CHART_SIZE.1 - FOOTER_HEIGHT);

    let mut chart = ChartBuilder::on(&upper)
        .caption(
            "Projected Atmospheric CO2 Levels Over Time",
            ("sans-serif", 32).into_font(),
        )
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(80)
        .build_cartesian_2d(x0..x1, y0..y1)?;

    chart
        .configure_mesh()
        .x_desc("Year")
        .y_desc("CO2 Concentration (ppm)")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            izip!(years, co2)
                .filter(|(_, c)| c.is_finite())
                .map(|(y, c)| (*y, *c)),
            RED.stroke_width(2),
        ))?
        .label("Projected CO2 (ppm)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));

    chart
        .draw_series(LineSeries::new(
            vec![(x0, p.toxic_co2_ppm), (x1, p.toxic_co2_ppm)],
            &DARK_RED,
        ))?
        .label(format!("Toxic Breathing Level ({} ppm)", p.toxic_co2_ppm))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &DARK_RED));

    chart
        .draw_series(LineSeries::new(
            vec![(x0, p.start_co2_ppm), (x1, p.start_co2_ppm)],
            &GREEN_LINE,
        ))?
        .label(format!("Current Level ({} ppm)", p.start_co2_ppm))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &GREEN_LINE));

    if let Some(c) = crossing {
        chart
            .draw_series(LineSeries::new(
                vec![(c.crossing_year, y0), (c.crossing_year, y1)],
                &BLACK,
            ))?
            .label(format!("Year {} - Toxic Levels Reached", c.crossing_year))
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLACK));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    draw_footer(&footer)?;

    root.present()?;
    info!("Chart written to {}", path.as_ref().display());
    Ok(())
}

fn draw_footer<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    area.fill(&RGBColor(255, 165, 0).mix(0.2))?;
    for (ii, line) in FOOTER_NOTE.iter().enumerate() {
        area.draw(&Text::new(
            *line,
            (20, 15 + 25 * ii as i32),
            ("sans-serif", 16).into_font(),
        ))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forward::{generate, ModelParamsBuilder};
    use crate::threshold::find_crossing;
    use tempfile::tempdir;

    #[test]
    fn extent_stops_after_crossing() {
        assert_eq!(plot_extent(1001, Some(436), 20), 456);
        // clipped to the trajectory
        assert_eq!(plot_extent(440, Some(436), 20), 440);
        assert_eq!(plot_extent(1001, None, 20), 1001);
        assert_eq!(plot_extent(1001, Some(0), 20), 20);
        assert_eq!(plot_extent(1001, Some(0), 0), 1);
    }

    #[test]
    fn y_range_covers_reference_lines() {
        let p = ModelParams::default();
        let (lo, hi) = y_range(&[500.0, 600.0], &p).unwrap();
        assert!(lo < 420.0);
        assert!(hi > 4200.0);
    }

    #[test]
    fn y_range_skips_non_finite_values() {
        let p = ModelParams::default();
        let (lo, hi) = y_range(&[420.0, 1.0e300, f64::INFINITY, f64::NAN], &p).unwrap();
        assert!(lo.is_finite() && hi.is_finite());
        assert!(hi >= 1.0e300);

        let (lo, hi) = y_range(&[f64::MAX], &p).unwrap();
        assert!((hi - lo).is_finite());

        assert!(y_range(&[-f64::MAX, f64::MAX], &p).is_none());
    }

    #[test]
    fn can_draw_runaway_emissions() {
        let dir = tempdir().unwrap();
        let fname = dir.path().join("runaway.svg");
        let p = ModelParams::default();
        // emissions overflow to infinity within the plotted window
        let traj = generate(&p, 2025, 1000, 1.0e20);
        let outcome = find_crossing(&traj, p.toxic_co2_ppm);
        let c = *outcome.crossing().unwrap();
        assert!(traj.co2_ppm()[..c.index + 20]
            .iter()
            .any(|v| !v.is_finite()));

        draw_trajectory(&traj, &outcome, &p, 20, &fname).unwrap();
        assert!(fname.exists());
    }

    #[test]
    fn can_draw_crossing() {
        let dir = tempdir().unwrap();
        let fname = dir.path().join("crossing.svg");
        let p = ModelParams::default();
        let traj = generate(&p, 2025, 1000, 0.01);
        let outcome = find_crossing(&traj, p.toxic_co2_ppm);
        draw_trajectory(&traj, &outcome, &p, 20, &fname).unwrap();

        let svg = std::fs::read_to_string(&fname).unwrap();
        assert!(svg.contains("Toxic Levels Reached"));
        dir.close().unwrap();
    }

    #[test]
    fn can_draw_full_horizon() {
        let dir = tempdir().unwrap();
        let fname = dir.path().join("flat.svg");
        let p = ModelParamsBuilder::default()
            .annual_emissions_gt(5.0)
            .build()
            .unwrap();
        let traj = generate(&p, 2025, 50, 0.0);
        let outcome = find_crossing(&traj, p.toxic_co2_ppm);
        assert!(outcome.crossing().is_none());
        draw_trajectory(&traj, &outcome, &p, 20, &fname).unwrap();
        assert!(fname.exists());
    }

    #[test]
    fn can_draw_single_record() {
        let dir = tempdir().unwrap();
        let fname = dir.path().join("single.svg");
        let p = ModelParams::default();
        let traj = generate(&p, 2025, 0, 0.01);
        let outcome = find_crossing(&traj, p.toxic_co2_ppm);
        draw_trajectory(&traj, &outcome, &p, 20, &fname).unwrap();
        assert!(fname.exists());
    }
}
