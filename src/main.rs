use anyhow::Context;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use house_lights::config::{CliArgs, PipelineConfig};
use house_lights::pipeline::Pipeline;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // Init tracing
    let filter = if args.verbose {
        EnvFilter::new("house_lights=debug")
    } else {
        EnvFilter::new("house_lights=info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config: PipelineConfig = args.into();

    // Configure rayon thread pool
    if let Some(threads) = config.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure rayon thread pool")?;
    }

    match Pipeline::run(&config) {
        Ok(result) => {
            println!(
                "Done: {} lights for {}/{} houses in {:.2}s",
                result.lights,
                result.succeeded,
                result.houses,
                result.duration.as_secs_f64()
            );
            if result.all_succeeded() {
                Ok(())
            } else {
                for failure in &result.failures {
                    eprintln!("  {}: {}", failure.house, failure.error);
                }
                anyhow::bail!("{} of {} houses failed", result.failures.len(), result.houses)
            }
        }
        Err(e) => {
            error!(%e, "Pipeline failed");
            Err(anyhow::anyhow!(e)).context("house-lights pipeline failed")
        }
    }
}
