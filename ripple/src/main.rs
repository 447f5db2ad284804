//! Console demo for `ripple-noise`.
//!
//! Prints an undulating terrain of asterisks, one noise sample per line. In
//! `cycle` mode the walk traces a circle in noise space, so the terrain repeats
//! seamlessly. Runs until Ctrl-C or the configured frame limit.

mod config;
mod harness;
mod logging;

use std::io;

use anyhow::Context;
use tokio::signal;
use tokio_util::sync::CancellationToken;

use crate::config::RippleConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let config = RippleConfig::from_env().context("Failed to load config")?;
    log::info!(
        "Walking {:?} with step {} every {}ms (scale {})",
        config.mode,
        config.step,
        config.frame_delay_ms,
        config.scale
    );

    let cancel_token = CancellationToken::new();
    let signal_token = cancel_token.clone();
    tokio::spawn(async move {
        match signal::ctrl_c().await {
            Ok(()) => {
                log::info!("Received Ctrl-C, stopping");
                signal_token.cancel();
            }
            Err(err) => log::error!("Failed to listen for Ctrl-C: {err}"),
        }
    });

    let stats = harness::run(&config, &mut io::stdout(), cancel_token)
        .await
        .context("Failed to write frame")?;

    match (stats.min(), stats.max()) {
        (Some(min), Some(max)) => log::info!(
            "Rendered {} frames, range [{min:+.3}, {max:+.3}], {:?} per sample",
            stats.frames(),
            stats.mean_sample_time()
        ),
        _ => log::info!("Rendered no frames"),
    }

    Ok(())
}
