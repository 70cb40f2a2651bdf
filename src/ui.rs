use std::time::{Duration, Instant};

use crate::player::{Player, PlayerConfig, elapsed_millis};
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use log::info;
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};

const HELP_TEXT: &str =
    "space: Pause | n: Step | r: Reset frame | s: Cycle style | p: Cycle pace | q: Quit";

pub struct AppState {
    pub player: Player,
    pub quit: bool,
}

impl AppState {
    pub fn new(config: &PlayerConfig) -> Result<Self> {
        Ok(Self {
            player: Player::new(config)?,
            quit: false,
        })
    }

    pub fn handle_key(&mut self, code: KeyCode) -> Result<()> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Char(' ') => self.player.toggle_pause(),
            KeyCode::Char('n') => {
                self.player.step();
            }
            KeyCode::Char('r') => self.player.reset(),
            KeyCode::Char('s') => self.player.cycle_style()?,
            KeyCode::Char('p') => self.player.cycle_interval()?,
            _ => {}
        }
        Ok(())
    }

    pub fn header(&self, config: &PlayerConfig) -> String {
        if self.player.finished {
            config.done_message.clone()
        } else {
            format!("{} {}", self.player.frame(), config.label)
        }
    }

    pub fn status(&self, elapsed_millis: u64) -> String {
        let player = &self.player;
        let mut parts = vec![
            format!("style: {}", player.style.as_str()),
            format!("pace: {}", player.interval.describe()),
            format!("frame {}/{}", player.position() + 1, player.frame_count()),
        ];
        if player.paused {
            parts.push("paused".to_string());
        }
        if let Some(countdown) = player.countdown {
            parts.push(format!("{}s left", countdown.remaining_secs(elapsed_millis)));
        }
        parts.join(" | ")
    }
}

/// Runs until the user quits. Returns whether the countdown ran out.
pub fn run_ui<B: Backend>(
    terminal: &mut Terminal<B>,
    config: &PlayerConfig,
    exit_on_finish: bool,
) -> Result<bool> {
    let mut app_state = AppState::new(config)?;
    let tick = Duration::from_millis(config.tick_millis);
    let start = Instant::now();

    info!("tui player started ({})", config.interval.describe());

    loop {
        let elapsed = elapsed_millis(start);
        app_state.player.tick(elapsed);

        if app_state.player.finished && exit_on_finish {
            break;
        }

        terminal.draw(|f| {
            let has_gauge = app_state.player.countdown.is_some();
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(2),                            // Spinner line with border
                    Constraint::Length(1),                            // Settings
                    Constraint::Length(if has_gauge { 1 } else { 0 }), // Countdown gauge
                    Constraint::Min(0),
                    Constraint::Length(1), // Help line
                ])
                .split(f.area());

            let header_style = if app_state.player.finished {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Yellow)
            };
            let header = Paragraph::new(Line::from(vec![Span::styled(
                app_state.header(config),
                header_style,
            )]))
            .block(Block::default().borders(Borders::BOTTOM));
            f.render_widget(header, chunks[0]);

            let status = Paragraph::new(app_state.status(elapsed))
                .style(Style::default().fg(Color::White));
            f.render_widget(status, chunks[1]);

            if let Some(countdown) = app_state.player.countdown {
                let gauge = Gauge::default()
                    .gauge_style(Style::default().fg(Color::Magenta))
                    .ratio(countdown.fraction_done(elapsed));
                f.render_widget(gauge, chunks[2]);
            }

            let help_line = Paragraph::new(HELP_TEXT).style(Style::default().fg(Color::DarkGray));
            f.render_widget(help_line, chunks[4]);
        })?;

        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app_state.handle_key(key.code)?;
                }
            }
        }

        if app_state.quit {
            break;
        }
    }

    info!("tui player stopped");
    Ok(app_state.player.finished)
}
