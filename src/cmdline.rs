use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

/// Estimate how long until atmospheric CO2 becomes toxic to breathe, using a
/// simple emissions-growth and sequestration-decay model.
///
/// Without a subcommand the estimate runs with default settings.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct TimeleftArgs {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

fn get_default_dir() -> PathBuf {
    env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Creates a template configuration file
    Template(TemplateArgs),
    /// Run the estimate
    Estimate(EstimateArgs),
}

#[derive(Args, Debug, Clone)]
pub struct TemplateArgs {
    /// Where to create the template
    #[arg(short, long, value_name = "DIR", default_value=get_default_dir().join("timeleft-config").into_os_string())]
    pub template_dir: PathBuf,
}

#[derive(Args, Debug, Clone, Default)]
pub struct EstimateArgs {
    /// Sets the config file (defaults are used when absent)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Sets the chart output file
    #[arg(short, long, value_name = "CHART")]
    pub output: Option<PathBuf>,

    /// Number of years to model
    #[arg(long, value_name = "YEARS")]
    pub horizon: Option<u32>,

    /// Emissions acceleration factor
    #[arg(long, value_name = "FACTOR", allow_negative_numbers = true)]
    pub acceleration: Option<f64>,

    /// Skip writing the chart
    #[arg(long)]
    pub no_chart: bool,
}

fn validate_template_dir(template_dir: &Path) -> Result<()> {
    if template_dir.exists() {
        if !template_dir.is_dir() {
            return Err(anyhow!(
                "Template directory path \"{0}\" is not a directory",
                template_dir.display()
            ));
        }
        let is_empty = template_dir.read_dir()?.next().is_none();
        if !is_empty {
            return Err(anyhow!(
                "Template directory \"{0}\" is not empty",
                template_dir.display()
            ));
        }
    } else {
        fs::create_dir_all(template_dir)?;
    }
    Ok(())
}

fn validate_estimate_args(args: &EstimateArgs) -> Result<()> {
    if let Some(config) = &args.config {
        if !config.exists() {
            return Err(anyhow!(
                "Configuration file \"{0}\" not found",
                config.display()
            ));
        }
    }
    if let Some(output) = &args.output {
        if output.is_dir() {
            return Err(anyhow!(
                "Chart output path \"{0}\" is a directory",
                output.display()
            ));
        }
        let parent = output.parent().filter(|p| !p.as_os_str().is_empty());
        if let Some(parent) = parent {
            if !parent.is_dir() {
                return Err(anyhow!(
                    "Chart output directory \"{0}\" not found",
                    parent.display()
                ));
            }
        }
    }
    Ok(())
}

/// Check arguments which clap can't, creating the template directory if needed
pub fn validate_args(args: &TimeleftArgs) -> Result<()> {
    match &args.command {
        Some(Commands::Template(cmd_args)) => validate_template_dir(&cmd_args.template_dir),
        Some(Commands::Estimate(cmd_args)) => validate_estimate_args(cmd_args),
        None => Ok(()),
    }
}

pub fn parse_cmdline() -> Result<TimeleftArgs> {
    let args = TimeleftArgs::parse_from(wild::args());
    validate_args(&args)?;
    Ok(args)
}
