//! Console terrain demo.
//!
//! Walks through noise space one frame at a time and draws each sample as a
//! marker whose column follows the noise value, so successive lines form an
//! undulating terrain.

mod render;
mod stats;
mod walk;

use std::io::{self, Write};
use std::time::{Duration, Instant};

use ripple_noise::SimplexNoise;
use tokio::time::{self, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::config::RippleConfig;

use render::render_line;
use walk::{NoiseWalk, Walk};

pub use stats::SampleStats;

/// Render frames to `out` until `max_frames` is reached or `cancel` fires.
///
/// Frames are paced by `frame_delay_ms`; a tick that is missed because the
/// writer was slow is skipped rather than bursted. Returns the statistics of
/// every rendered frame.
#[tracing::instrument(skip_all, fields(mode = ?config.mode))]
pub async fn run<W: Write>(
    config: &RippleConfig,
    out: &mut W,
    cancel: CancellationToken,
) -> io::Result<SampleStats> {
    let noise = SimplexNoise::new();
    let mut walk = Walk::from_config(config);
    let mut stats = SampleStats::default();

    let mut ticker = (config.frame_delay_ms > 0).then(|| {
        let mut ticker = time::interval(Duration::from_millis(config.frame_delay_ms));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        ticker
    });

    loop {
        if config.max_frames.is_some_and(|max| stats.frames() >= max) {
            log::debug!("Reached frame limit");
            break;
        }

        match ticker.as_mut() {
            Some(ticker) => tokio::select! {
                biased;
                () = cancel.cancelled() => break,
                _ = ticker.tick() => {}
            },
            None if cancel.is_cancelled() => break,
            None => {}
        }

        let point = walk.next_point();
        let started = Instant::now();
        let n = noise.sample(point.x, point.y);
        stats.record(n, started.elapsed());

        writeln!(out, "{}", render_line(n, config.scale))?;
        if config.show_stats {
            writeln!(out, "{}", stats.line(n, point.phase))?;
        }
        out.flush()?;
    }

    Ok(stats)
}
