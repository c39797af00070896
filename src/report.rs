//! Console report

use crate::forward::ModelParams;
use crate::threshold::{Crossing, ThresholdOutcome};

/// Group digits in threes, e.g. `31536000` becomes `31,536,000`
pub fn fmt_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (ii, ch) in digits.chars().enumerate() {
        if ii > 0 && (digits.len() - ii) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Message used in place of a result when the threshold is never reached
pub fn not_found_message(horizon_years: u32) -> String {
    format!(
        "CO2 does not reach toxic levels within {} years in this model",
        horizon_years
    )
}

/// Full text of the report.  The `NotFound` outcome produces only the
/// explanatory message.
pub fn render_report(p: &ModelParams, outcome: &ThresholdOutcome) -> String {
    match outcome {
        ThresholdOutcome::Crossed(c) => render_crossing(p, c),
        ThresholdOutcome::NotFound { horizon_years, .. } => not_found_message(*horizon_years),
    }
}

fn render_crossing(p: &ModelParams, c: &Crossing) -> String {
    let t = &c.elapsed;
    let mut lines = vec![
        "\n---- EARTH'S ATMOSPHERE & CO2 ESTIMATION ----".to_string(),
        format!("Current CO2 level: {} ppm", p.start_co2_ppm),
        format!("Toxic breathing CO2 level: {} ppm", p.toxic_co2_ppm),
        format!("Pre-industrial CO2 level: {} ppm", p.preindustrial_co2_ppm),
        format!(
            "Current annual CO2 increase: {} ppm/year",
            p.annual_co2_increase_ppm
        ),
        format!(
            "Current annual emissions: {:.2} gigatons/year",
            p.annual_emissions_gt
        ),
        format!(
            "Tree sequestration: {:.2} gigatons/year",
            p.tree_sequestration_gt
        ),
        format!(
            "Total natural sequestration: {:.2} gigatons/year",
            p.total_natural_sequestration_gt()
        ),
        format!(
            "Net annual increase: {:.2} gigatons/year",
            p.net_annual_balance_gt()
        ),
        format!("\nCurrent Year: {}", c.start_year),
        format!(
            "Estimated Year When Atmosphere Becomes Toxic for Breathing: {}",
            c.crossing_year
        ),
        "\nTime Left Until Earth's Atmosphere Becomes Toxic for Human Breathing:".to_string(),
    ];
    lines.extend(
        [
            ("Years", t.years),
            ("Months", t.months),
            ("Days", t.days),
            ("Hours", t.hours),
            ("Minutes", t.minutes),
            ("Seconds", t.seconds),
        ]
        .into_iter()
        .map(|(unit, value)| format!("{}: {}", unit, fmt_thousands(value))),
    );
    lines.push(
        "\nNOTE: This is a simplified model based on current trends and assumptions.".to_string(),
    );
    lines.push(
        "Technological advances, policy changes, and natural feedback loops could significantly alter these projections.".to_string(),
    );
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::threshold::ElapsedTime;

    #[test]
    fn test_fmt_thousands() {
        assert_eq!(fmt_thousands(0), "0");
        assert_eq!(fmt_thousands(999), "999");
        assert_eq!(fmt_thousands(1_000), "1,000");
        assert_eq!(fmt_thousands(159_140), "159,140");
        assert_eq!(fmt_thousands(31_536_000), "31,536,000");
        assert_eq!(fmt_thousands(13_749_696_000), "13,749,696,000");
    }

    #[test]
    fn report_lists_every_unit() {
        let p = ModelParams::default();
        let outcome = ThresholdOutcome::Crossed(Crossing {
            index: 436,
            start_year: 2025,
            crossing_year: 2461,
            co2_ppm: 4208.7,
            elapsed: ElapsedTime::from_years(436),
        });
        let text = render_report(&p, &outcome);
        assert!(text.contains("Current CO2 level: 420 ppm"));
        assert!(text.contains("Toxic breathing CO2 level: 4200 ppm"));
        assert!(text.contains("Current annual emissions: 36.80 gigatons/year"));
        assert!(text.contains("Total natural sequestration: 17.70 gigatons/year"));
        assert!(text.contains("Net annual increase: 19.10 gigatons/year"));
        assert!(text.contains("Current Year: 2025"));
        assert!(text.contains("Breathing: 2461"));
        assert!(text.contains("Years: 436\n"));
        assert!(text.contains("Months: 5,232\n"));
        assert!(text.contains("Days: 159,140\n"));
        assert!(text.contains("Hours: 3,819,360\n"));
        assert!(text.contains("Minutes: 229,161,600\n"));
        assert!(text.contains("Seconds: 13,749,696,000\n"));
        assert!(text.starts_with("\n---- EARTH'S ATMOSPHERE"));
        assert!(text.ends_with("alter these projections."));
    }

    #[test]
    fn not_found_is_a_message() {
        let p = ModelParams::default();
        let text = render_report(
            &p,
            &ThresholdOutcome::NotFound {
                threshold_ppm: 4200.0,
                horizon_years: 1000,
            },
        );
        assert_eq!(
            text,
            "CO2 does not reach toxic levels within 1000 years in this model"
        );
    }
}
