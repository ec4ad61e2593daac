use anyhow::Context;
use clap::Parser;
use log::info;

use pico_palette::cli::Args;
use pico_palette::convert::run;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let job = Args::parse().into_job();
    info!(
        "Converting {} to {} mode(s)",
        job.input.display(),
        job.modes.len()
    );

    let written = run(&job).with_context(|| format!("converting {}", job.input.display()))?;
    for path in &written {
        info!("Generated {}", path.display());
    }

    Ok(())
}
