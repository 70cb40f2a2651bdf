use std::io::Write;
use std::time::{Duration, Instant};

use crate::player::{Player, PlayerConfig, elapsed_millis};
use anyhow::Result;
use log::info;

/// Redraws the spinner in place on a single line until the countdown ends.
/// Without a countdown this only returns on a write error.
pub fn run_plain<W: Write>(out: &mut W, config: &PlayerConfig) -> Result<()> {
    let mut player = Player::new(config)?;
    let tick = Duration::from_millis(config.tick_millis);
    let start = Instant::now();

    info!("plain player started ({})", config.interval.describe());
    draw_line(out, &config.label, player.frame())?;

    loop {
        let elapsed = elapsed_millis(start);
        if !plain_tick(out, &mut player, config, elapsed)? {
            break;
        }
        std::thread::sleep(tick);
    }

    info!("plain player finished");
    Ok(())
}

/// One poll of the plain player. Returns false once the run is over.
pub fn plain_tick<W: Write>(
    out: &mut W,
    player: &mut Player,
    config: &PlayerConfig,
    elapsed_millis: u64,
) -> std::io::Result<bool> {
    let advanced = player.tick(elapsed_millis);
    if player.finished {
        write!(out, "\n{}\n", config.done_message)?;
        out.flush()?;
        return Ok(false);
    }
    if advanced {
        draw_line(out, &config.label, player.frame())?;
    }
    Ok(true)
}

fn draw_line<W: Write>(out: &mut W, label: &str, frame: &str) -> std::io::Result<()> {
    write!(out, "\r{} {}", label, frame)?;
    out.flush()
}
