use crate::cycle::Cycle;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Pace {
    Fast,
    Normal,
    Slow,
}

impl Pace {
    pub fn interval_millis(&self) -> u64 {
        match self {
            Pace::Fast => 100,
            Pace::Normal => 200,
            Pace::Slow => 500,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Pace::Fast => "fast",
            Pace::Normal => "normal",
            Pace::Slow => "slow",
        }
    }
}

impl Cycle for Pace {
    fn variants() -> &'static [Self] {
        static ALL: [Pace; 3] = [Pace::Fast, Pace::Normal, Pace::Slow];
        &ALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_get_slower_along_the_cycle() {
        assert!(Pace::Fast.interval_millis() < Pace::Normal.interval_millis());
        assert!(Pace::Normal.interval_millis() < Pace::Slow.interval_millis());
        assert_eq!(Pace::Slow.next(), Pace::Fast);
    }
}
