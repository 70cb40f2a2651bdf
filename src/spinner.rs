use crate::cycle::Cycle;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SpinnerStyle {
    Ascii,
    Braille,
    Moon,
    Dots,
}

const ASCII_FRAMES: [&str; 4] = ["-", "\\", "|", "/"];
const BRAILLE_FRAMES: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];
const MOON_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];
const DOTS_FRAMES: [&str; 4] = [".  ", ".. ", "...", "   "];

impl Cycle for SpinnerStyle {
    fn variants() -> &'static [Self] {
        static ALL: [SpinnerStyle; 4] = [
            SpinnerStyle::Ascii,
            SpinnerStyle::Braille,
            SpinnerStyle::Moon,
            SpinnerStyle::Dots,
        ];
        &ALL
    }
}

impl SpinnerStyle {
    pub fn frames(&self) -> &'static [&'static str] {
        match self {
            SpinnerStyle::Ascii => &ASCII_FRAMES,
            SpinnerStyle::Braille => &BRAILLE_FRAMES,
            SpinnerStyle::Moon => &MOON_FRAMES,
            SpinnerStyle::Dots => &DOTS_FRAMES,
        }
    }

    /// Frame for a stepper position. Out-of-range positions wrap.
    pub fn frame(&self, position: usize) -> &'static str {
        let frames = self.frames();
        frames[position % frames.len()]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SpinnerStyle::Ascii => "ascii",
            SpinnerStyle::Braille => "braille",
            SpinnerStyle::Moon => "moon",
            SpinnerStyle::Dots => "dots",
        }
    }
}
