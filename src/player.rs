use crate::countdown::Countdown;
use crate::cycle::Cycle;
use crate::pace::Pace;
use crate::spinner::SpinnerStyle;
use crate::stepper::{CyclicStepper, StepperError};
use log::debug;
use std::time::Instant;

/// Milliseconds since `start`, pinned at `u64::MAX` on overflow.
pub fn elapsed_millis(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

/// How often the spinner frame may change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interval {
    Preset(Pace),
    Fixed(u64),
    EveryTick,
}

impl Interval {
    pub fn millis(&self) -> Option<u64> {
        match self {
            Interval::Preset(pace) => Some(pace.interval_millis()),
            Interval::Fixed(ms) => Some(*ms),
            Interval::EveryTick => None,
        }
    }

    // Presets keep cycling; a custom interval drops back to the first preset.
    pub fn next(&self) -> Interval {
        match self {
            Interval::Preset(pace) => Interval::Preset(pace.next()),
            Interval::Fixed(_) | Interval::EveryTick => Interval::Preset(Pace::variants()[0]),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Interval::Preset(pace) => format!("{} ({} ms)", pace.as_str(), pace.interval_millis()),
            Interval::Fixed(ms) => format!("custom ({} ms)", ms),
            Interval::EveryTick => "every tick".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlayerConfig {
    pub style: SpinnerStyle,
    pub interval: Interval,
    pub countdown: Option<Countdown>,
    pub label: String,
    pub done_message: String,
    pub tick_millis: u64,
}

/// Animation state shared by the TUI and plain front ends.
pub struct Player {
    pub style: SpinnerStyle,
    pub interval: Interval,
    pub countdown: Option<Countdown>,
    pub paused: bool,
    pub finished: bool,
    stepper: CyclicStepper,
}

impl Player {
    pub fn new(config: &PlayerConfig) -> Result<Self, StepperError> {
        Ok(Self {
            style: config.style,
            interval: config.interval,
            countdown: config.countdown,
            paused: false,
            finished: false,
            stepper: build_stepper(config.style, config.interval)?,
        })
    }

    /// Called once per tick. Returns true when the visible frame changed.
    pub fn tick(&mut self, elapsed_millis: u64) -> bool {
        if self.finished {
            return false;
        }
        if let Some(countdown) = self.countdown {
            if countdown.is_finished(elapsed_millis) {
                debug!("countdown of {} ms finished", countdown.total_millis());
                self.finished = true;
                return false;
            }
        }
        if self.paused {
            return false;
        }
        let (advanced, _) = self.stepper.try_advance(elapsed_millis);
        advanced
    }

    /// Moves one frame regardless of pause state or interval.
    pub fn step(&mut self) -> usize {
        self.stepper.advance()
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn reset(&mut self) {
        self.stepper.reset();
    }

    pub fn cycle_style(&mut self) -> Result<(), StepperError> {
        self.style = self.style.next();
        let last_advance = self.stepper.last_advance_time();
        self.stepper = build_stepper(self.style, self.interval)?.with_last_advance(last_advance);
        debug!("style -> {} ({} frames)", self.style.as_str(), self.stepper.len());
        Ok(())
    }

    pub fn cycle_interval(&mut self) -> Result<(), StepperError> {
        self.interval = self.interval.next();
        let position = self.stepper.current();
        let last_advance = self.stepper.last_advance_time();
        self.stepper = build_stepper(self.style, self.interval)?.with_last_advance(last_advance);
        // same frame count, so walk the fresh stepper back to where we were
        for _ in 0..position {
            self.stepper.advance();
        }
        debug!("interval -> {}", self.interval.describe());
        Ok(())
    }

    pub fn position(&self) -> usize {
        self.stepper.current()
    }

    pub fn frame_count(&self) -> usize {
        self.stepper.len()
    }

    pub fn frame(&self) -> &'static str {
        self.style.frame(self.stepper.current())
    }
}

fn build_stepper(style: SpinnerStyle, interval: Interval) -> Result<CyclicStepper, StepperError> {
    CyclicStepper::new(style.frames().len(), interval.millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(interval: Interval, countdown: Option<u64>) -> PlayerConfig {
        PlayerConfig {
            style: SpinnerStyle::Ascii,
            interval,
            countdown: countdown.map(Countdown::new),
            label: "Loading".to_string(),
            done_message: "Done.".to_string(),
            tick_millis: 10,
        }
    }

    #[test]
    fn ticks_follow_the_interval() {
        let mut player = Player::new(&config(Interval::Preset(Pace::Normal), None)).unwrap();
        assert!(!player.tick(0));
        assert!(!player.tick(150));
        assert!(player.tick(200));
        assert_eq!(player.frame(), "\\");
        assert!(!player.tick(300));
        assert!(player.tick(400));
        assert_eq!(player.frame(), "|");
    }

    #[test]
    fn every_tick_moves_each_call() {
        let mut player = Player::new(&config(Interval::EveryTick, None)).unwrap();
        for _ in 0..4 {
            assert!(player.tick(0));
        }
        assert_eq!(player.position(), 0);
    }

    #[test]
    fn paused_player_holds_frame_but_can_step() {
        let mut player = Player::new(&config(Interval::EveryTick, None)).unwrap();
        player.toggle_pause();
        assert!(!player.tick(10));
        assert_eq!(player.position(), 0);
        assert_eq!(player.step(), 1);
        player.toggle_pause();
        assert!(player.tick(20));
        assert_eq!(player.position(), 2);
    }

    #[test]
    fn countdown_stops_the_animation() {
        let mut player = Player::new(&config(Interval::EveryTick, Some(100))).unwrap();
        assert!(player.tick(50));
        assert!(!player.tick(100));
        assert!(player.finished);
        assert!(!player.tick(150));
        assert_eq!(player.position(), 1);
    }

    #[test]
    fn style_change_rebuilds_with_new_length() {
        let mut player = Player::new(&config(Interval::EveryTick, None)).unwrap();
        player.step();
        player.cycle_style().unwrap();
        assert_eq!(player.style, SpinnerStyle::Braille);
        assert_eq!(player.frame_count(), 8);
        assert_eq!(player.position(), 0);
    }

    #[test]
    fn interval_change_keeps_position() {
        let mut player = Player::new(&config(Interval::Fixed(75), None)).unwrap();
        player.step();
        player.step();
        player.cycle_interval().unwrap();
        assert_eq!(player.interval, Interval::Preset(Pace::Fast));
        assert_eq!(player.position(), 2);
        player.cycle_interval().unwrap();
        assert_eq!(player.interval, Interval::Preset(Pace::Normal));
    }

    #[test]
    fn style_change_keeps_the_pace() {
        let mut player = Player::new(&config(Interval::Preset(Pace::Slow), None)).unwrap();
        assert!(player.tick(1000));
        player.cycle_style().unwrap();
        assert!(!player.tick(1010));
        assert!(!player.tick(1499));
        assert!(player.tick(1500));
    }

    #[test]
    fn interval_change_keeps_the_pace() {
        let mut player = Player::new(&config(Interval::Preset(Pace::Slow), None)).unwrap();
        assert!(player.tick(1000));
        player.cycle_interval().unwrap();
        assert_eq!(player.interval, Interval::Preset(Pace::Fast));
        assert!(!player.tick(1010));
        assert!(player.tick(1100));
    }

    #[test]
    fn elapsed_is_small_right_after_start() {
        assert!(elapsed_millis(Instant::now()) < 1000);
    }

    #[test]
    fn reset_rewinds() {
        let mut player = Player::new(&config(Interval::EveryTick, None)).unwrap();
        player.step();
        player.step();
        player.reset();
        assert_eq!(player.position(), 0);
        assert_eq!(player.frame(), "-");
    }

    #[test]
    fn interval_descriptions() {
        assert_eq!(Interval::Preset(Pace::Slow).describe(), "slow (500 ms)");
        assert_eq!(Interval::Fixed(42).describe(), "custom (42 ms)");
        assert_eq!(Interval::EveryTick.describe(), "every tick");
    }
}
