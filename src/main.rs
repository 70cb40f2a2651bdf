use anyhow::{Context, Result};
use clap::Parser;
use crossterm::ExecutableCommand;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use log::debug;
use std::io::IsTerminal;

use spinstep::countdown::Countdown;
use spinstep::pace::Pace;
use spinstep::player::{Interval, PlayerConfig};
use spinstep::spinner::SpinnerStyle;
use spinstep::{plain, ui};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Spinner frame set
    #[arg(short, long, value_enum, default_value_t = SpinnerStyle::Ascii)]
    style: SpinnerStyle,

    /// Frame interval preset
    #[arg(short, long, value_enum, default_value_t = Pace::Normal)]
    pace: Pace,

    /// Frame interval in milliseconds, overrides --pace
    #[arg(short, long)]
    interval_ms: Option<u64>,

    /// Advance the frame on every tick
    #[arg(short, long, conflicts_with = "interval_ms")]
    unthrottled: bool,

    /// Stop the animation after this many milliseconds
    #[arg(short, long)]
    duration_ms: Option<u64>,

    /// Polling period of the player loop
    #[arg(short, long, default_value_t = 50, value_parser = clap::value_parser!(u64).range(1..))]
    tick_ms: u64,

    /// Text shown next to the spinner
    #[arg(short, long, default_value = "Loading")]
    label: String,

    /// Text shown once the duration has elapsed
    #[arg(long, default_value = "Load complete.")]
    done: String,

    /// Write a single self-overwriting line instead of the full-screen view
    #[arg(long)]
    plain: bool,

    /// Quit as soon as the duration has elapsed
    #[arg(short, long, requires = "duration_ms")]
    exit_on_finish: bool,
}

impl Args {
    fn player_config(&self) -> PlayerConfig {
        let interval = if self.unthrottled {
            Interval::EveryTick
        } else if let Some(ms) = self.interval_ms {
            Interval::Fixed(ms)
        } else {
            Interval::Preset(self.pace)
        };
        PlayerConfig {
            style: self.style,
            interval,
            countdown: self.duration_ms.map(Countdown::new),
            label: self.label.clone(),
            done_message: self.done.clone(),
            tick_millis: self.tick_ms,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = args.player_config();
    debug!("{:?}", config);

    if args.plain || !std::io::stdout().is_terminal() {
        return plain::run_plain(&mut std::io::stdout(), &config);
    }

    // Set up the terminal
    setup_terminal()?;

    let backend = CrosstermBackend::new(std::io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = ui::run_ui(&mut terminal, &config, args.exit_on_finish);

    // Restore before reporting any UI error
    restore_terminal()?;

    if result? {
        println!("{}", config.done_message);
    }

    Ok(())
}

fn setup_terminal() -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    std::io::stdout()
        .execute(EnterAlternateScreen)
        .context("Failed to enter alternate screen")?;
    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    std::io::stdout()
        .execute(LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    Ok(())
}
