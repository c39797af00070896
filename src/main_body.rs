/// These are the main top-level driver functions
use std::fs;

use anyhow::Result;
use log::info;

use crate::appconfig::AppConfig;
use crate::cmdline::*;
use crate::forward::quickplot::draw_trajectory;
use crate::forward::{current_year, generate};
use crate::report::render_report;
use crate::threshold::{find_crossing, ThresholdOutcome};
use crate::Trajectory;

/// Trajectory together with its threshold outcome
#[derive(Debug, Clone)]
pub struct Estimate {
    pub trajectory: Trajectory,
    pub outcome: ThresholdOutcome,
}

/// Run the model and search for the toxic level.  No I/O happens here.
pub fn calculate_years_until_toxic(config: &AppConfig, start_year: i32) -> Estimate {
    let trajectory = generate(
        &config.model,
        start_year,
        config.run.horizon_years,
        config.run.acceleration_factor,
    );
    let outcome = find_crossing(&trajectory, config.model.toxic_co2_ppm);
    Estimate {
        trajectory,
        outcome,
    }
}

fn create_template(cmd_args: &TemplateArgs) -> Result<()> {
    info!("Writing template to {}", cmd_args.template_dir.display());

    let config_str = AppConfig::default().to_toml_string()?;
    let config_fname = cmd_args.template_dir.join("config.toml");
    info!(
        "Writing example configuration file to {}",
        config_fname.display()
    );
    fs::write(&config_fname, config_str)?;

    let chart_fname = cmd_args.template_dir.join("co2_trajectory.svg");
    println!(
        "Template created.  Run an estimate with:\n> timeleft estimate --config {} --output {}",
        config_fname.display(),
        chart_fname.display()
    );

    Ok(())
}

/// Load the configuration file (if any) and apply command line overrides
fn resolve_config(cmd_args: &EstimateArgs) -> Result<AppConfig> {
    let mut config = match &cmd_args.config {
        Some(fname) => {
            info!("Loading configuration from {}", fname.display());
            AppConfig::from_toml_file(fname)?
        }
        None => AppConfig::default(),
    };
    if let Some(output) = &cmd_args.output {
        config.run.chart_path = output.clone();
    }
    if let Some(horizon) = cmd_args.horizon {
        config.run.horizon_years = horizon;
    }
    if let Some(acceleration) = cmd_args.acceleration {
        config.run.acceleration_factor = acceleration;
    }
    if cmd_args.no_chart {
        config.run.draw_chart = false;
    }
    Ok(config)
}

fn run_estimate(cmd_args: &EstimateArgs) -> Result<()> {
    let config = resolve_config(cmd_args)?;

    println!("Calculating time until Earth's atmosphere becomes toxic for human breathing...");
    println!(
        "Based on current CO2 levels being {:.0}% of toxic breathing threshold.",
        100.0 * config.model.start_co2_ppm / config.model.toxic_co2_ppm
    );

    let start_year = current_year();
    info!(
        "Modelling {} years from {} with acceleration factor {}",
        config.run.horizon_years, start_year, config.run.acceleration_factor
    );
    let estimate = calculate_years_until_toxic(&config, start_year);

    println!("{}", render_report(&config.model, &estimate.outcome));

    match &estimate.outcome {
        ThresholdOutcome::NotFound { .. } => {
            info!("Toxic level not reached, no chart written");
        }
        ThresholdOutcome::Crossed(_) if !config.run.draw_chart => {
            info!("Chart disabled");
        }
        ThresholdOutcome::Crossed(_) => {
            draw_trajectory(
                &estimate.trajectory,
                &estimate.outcome,
                &config.model,
                config.run.plot_years_after_crossing,
                &config.run.chart_path,
            )?;
        }
    }

    Ok(())
}

pub fn main_body(program_args: TimeleftArgs) -> Result<()> {
    match &program_args.command {
        Some(Commands::Template(cmd_args)) => create_template(cmd_args)?,
        Some(Commands::Estimate(cmd_args)) => run_estimate(cmd_args)?,
        None => run_estimate(&EstimateArgs::default())?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appconfig::AppConfigBuilder;
    use crate::forward::ModelParamsBuilder;
    use clap::Parser;
    use tempfile::tempdir;

    #[test]
    fn default_calculation_crosses() {
        let start_year = 2030;
        let estimate = calculate_years_until_toxic(&AppConfig::default(), start_year);
        assert_eq!(estimate.trajectory.len(), 1001);
        let c = estimate.outcome.crossing().unwrap();
        assert!(c.crossing_year > start_year && c.crossing_year < start_year + 1000);
        assert_eq!(c.elapsed.years as i32, c.crossing_year - start_year);
    }

    #[test]
    fn weak_emissions_never_cross() {
        let config = AppConfigBuilder::default()
            .model(
                ModelParamsBuilder::default()
                    .annual_emissions_gt(5.0)
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();
        let estimate = calculate_years_until_toxic(&config, 2030);
        assert_eq!(
            estimate.outcome,
            ThresholdOutcome::NotFound {
                threshold_ppm: 4200.0,
                horizon_years: 1000
            }
        );
    }

    #[test]
    fn overrides_replace_config_values() {
        let args = EstimateArgs {
            horizon: Some(10),
            acceleration: Some(0.5),
            no_chart: true,
            ..Default::default()
        };
        let config = resolve_config(&args).unwrap();
        assert_eq!(config.run.horizon_years, 10);
        assert_eq!(config.run.acceleration_factor, 0.5);
        assert!(!config.run.draw_chart);
        assert_eq!(config.model, AppConfig::default().model);
    }

    /// Tests the whole program by running the top-level function as if it has been
    /// run from the command line.  First generate a template, then run an estimate
    /// from it
    #[test]
    fn run_cli() {
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info")
        }
        let _ = env_logger::builder().is_test(true).try_init();

        let dir_input = tempdir().unwrap();
        let dir_output = tempdir().unwrap();
        let template_dir = dir_input.path().join("template");

        let cmdline = vec![
            "timeleft",
            "template",
            "-t",
            template_dir.to_str().unwrap(),
        ];
        let program_args = TimeleftArgs::parse_from(cmdline);
        dbg!(&program_args);
        validate_args(&program_args).unwrap();
        main_body(program_args).unwrap();

        let config_fname = template_dir.join("config.toml");
        assert!(config_fname.exists());
        let chart_fname = dir_output.path().join("co2_trajectory.svg");
        let cmdline = vec![
            "timeleft",
            "estimate",
            "-c",
            config_fname.to_str().unwrap(),
            "-o",
            chart_fname.to_str().unwrap(),
        ];
        let program_args = TimeleftArgs::parse_from(cmdline);
        dbg!(&program_args);
        validate_args(&program_args).unwrap();
        main_body(program_args).unwrap();
        assert!(chart_fname.exists());
    }

    #[test]
    fn not_found_skips_chart() {
        let dir = tempdir().unwrap();
        let config_fname = dir.path().join("config.toml");
        fs::write(&config_fname, "[run]\nhorizon_years = 5\n").unwrap();
        let chart_fname = dir.path().join("chart.svg");
        let args = EstimateArgs {
            config: Some(config_fname),
            output: Some(chart_fname.clone()),
            ..Default::default()
        };
        run_estimate(&args).unwrap();
        assert!(!chart_fname.exists());
    }
}
