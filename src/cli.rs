use std::{fs, path::PathBuf};

use clap::{Parser, Subcommand};
use serde::Deserialize;

use crate::{
    core::{
        config::{MonthlyFee, OneOffCharge, ProfileMode, ProjectConfig},
        profile::ProfileShape,
    },
    prelude::*,
    quantity::{cost::Reais, hours::Hours, rate::HourlyRate},
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: distribute the hour budget over the months and price
    /// every period.
    #[clap(name = "quote")]
    Quote(Box<QuoteArgs>),

    /// Render the percentage profile for a month count without costing it.
    #[clap(name = "profile")]
    Profile(ProfileArgs),
}

#[derive(Parser)]
pub struct QuoteArgs {
    #[clap(flatten)]
    pub project: ProjectArgs,

    #[clap(flatten)]
    pub shape: ShapeArgs,

    /// Manual percentages for months 2..N instead of the generated profile.
    #[clap(long = "manual-percentages", value_delimiter = ',', num_args = 1..)]
    pub manual_percentages: Option<Vec<f64>>,

    /// Keep manual percentages exactly as given and reject them when they
    /// break the sum/floor/multiple-of-5 invariants.
    #[clap(long = "no-normalize", requires = "manual_percentages")]
    pub no_normalize: bool,
}

#[derive(Parser)]
pub struct ProjectArgs {
    /// Project duration in months, the fixed first month included.
    #[clap(
        long,
        default_value = "6",
        env = "ORCADOR_MONTHS",
        value_parser = clap::value_parser!(u64).range(1..=20),
    )]
    pub months: u64,

    /// Total project hours.
    #[clap(long, default_value = "0", env = "ORCADOR_HOURS")]
    pub hours: Hours,

    /// Hourly rate.
    #[clap(long = "hourly-rate", default_value = "255", env = "ORCADOR_HOURLY_RATE")]
    pub hourly_rate: HourlyRate,

    /// Recurring monthly fee, `NAME=AMOUNT` or `NAME=AMOUNT@MONTH=NEWAMOUNT`
    /// (repeatable).
    #[clap(long = "monthly-fee")]
    pub monthly_fees: Vec<MonthlyFee>,

    /// TOML file with one `[[fees]]` table per recurring fee.
    #[clap(long = "fees-file", env = "ORCADOR_FEES_FILE")]
    pub fees_file: Option<PathBuf>,

    /// Flat installation cost, overriding the 20 × rate default.
    #[clap(long = "install-cost")]
    pub install_cost: Option<Reais>,

    /// Flat mapping cost, overriding the 50 × rate default.
    #[clap(long = "mapping-cost")]
    pub mapping_cost: Option<Reais>,

    /// Homologation cost (always flat).
    #[clap(long, default_value = "0")]
    pub homologation: Reais,
}

#[derive(Copy, Clone, Parser)]
pub struct ShapeArgs {
    /// How sharply effort concentrates at the project ends.
    #[clap(long, default_value = "3", value_parser = clap::value_parser!(i32).range(1..=8))]
    pub steepness: i32,

    /// Weight emphasis on the first distributed month.
    #[clap(long = "start-emphasis", default_value = "1.6")]
    pub start_emphasis: f64,

    /// Weight emphasis on the last month.
    #[clap(long = "end-emphasis", default_value = "1.8")]
    pub end_emphasis: f64,

    /// Minimum percentage per distributed month.
    #[clap(long = "min-percent", default_value = "5")]
    pub min_percent: f64,
}

impl ShapeArgs {
    #[must_use]
    pub const fn shape(self) -> ProfileShape {
        ProfileShape {
            steepness: self.steepness,
            start_emphasis: self.start_emphasis,
            end_emphasis: self.end_emphasis,
        }
    }
}

#[derive(Parser)]
pub struct ProfileArgs {
    /// Project duration in months, the fixed first month included.
    #[clap(
        long,
        default_value = "6",
        env = "ORCADOR_MONTHS",
        value_parser = clap::value_parser!(u64).range(1..=20),
    )]
    pub months: u64,

    #[clap(flatten)]
    pub shape: ShapeArgs,
}

#[derive(Deserialize)]
struct FeesFile {
    fees: Vec<MonthlyFee>,
}

impl QuoteArgs {
    pub fn try_into_config(self) -> Result<ProjectConfig> {
        let mut fees = self.project.monthly_fees;
        if let Some(path) = &self.project.fees_file {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("failed to read the fees file `{}`", path.display()))?;
            let file: FeesFile = toml::from_str(&contents)
                .with_context(|| format!("failed to parse the fees file `{}`", path.display()))?;
            fees.extend(file.fees);
        }

        let profile = match self.manual_percentages {
            Some(percentages) => {
                ProfileMode::Manual { percentages, normalize: !self.no_normalize }
            }
            None => ProfileMode::Auto(self.shape.shape()),
        };

        Ok(ProjectConfig::builder()
            .total_months(usize::try_from(self.project.months)?)
            .total_hours(self.project.hours)
            .hourly_rate(self.project.hourly_rate)
            .monthly_fees(fees)
            .maybe_installation(self.project.install_cost.map(OneOffCharge::Flat))
            .maybe_mapping(self.project.mapping_cost.map(OneOffCharge::Flat))
            .homologation(self.project.homologation)
            .min_percent(self.shape.min_percent)
            .profile(profile)
            .build())
    }
}
