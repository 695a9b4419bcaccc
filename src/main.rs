mod cli;
mod core;
mod fmt;
mod prelude;
mod quantity;
mod tables;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command, ProfileArgs, QuoteArgs},
    core::{profile::ramp_percentages, quantize::quantize_to_fives},
    prelude::*,
    tables::{build_one_off_table, build_profile_table, build_schedule_table},
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Quote(args) => quote(*args),
        Command::Profile(args) => profile(&args),
    }
}

fn quote(args: QuoteArgs) -> Result {
    let config = args.try_into_config()?;
    let estimate = crate::core::estimate::estimate(&config)?;

    println!("{}", build_schedule_table(&estimate));
    println!("{}", build_one_off_table(&estimate.one_off));
    info!(
        average_per_period = %estimate.average_per_period,
        project_total = %estimate.project_total,
        "estimated",
    );
    Ok(())
}

fn profile(args: &ProfileArgs) -> Result {
    let k = usize::try_from(args.months)? - 1;
    let raw = ramp_percentages(k, args.shape.shape());
    let quantized = quantize_to_fives(&raw, true, args.shape.min_percent);

    println!("{}", build_profile_table(&raw, &quantized));
    Ok(())
}
