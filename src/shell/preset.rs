//! Starting-configuration choice.

use clap::ValueEnum;

/// How to seed the grid before the first step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum Preset {
    /// Glider in the top-left corner.
    Glider,
    /// Three-cell blinker on row 8.
    Semaphore,
    /// Every cell alive with probability 0.5.
    Random,
    /// Coordinates typed by the user.
    Custom,
}

impl Preset {
    /// Interpret an interactive answer by its first letter.
    ///
    /// `g`, `s` and `r` (either case) pick the matching preset. Anything
    /// else, including an empty answer, means `Custom`.
    ///
    /// ```
    /// use rust_life::shell::Preset;
    ///
    /// assert_eq!(Preset::from_choice("G"), Preset::Glider);
    /// assert_eq!(Preset::from_choice("random"), Preset::Random);
    /// assert_eq!(Preset::from_choice("?"), Preset::Custom);
    /// ```
    #[must_use]
    pub fn from_choice(answer: &str) -> Preset {
        match answer.trim_start().chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('g') => Preset::Glider,
            Some('s') => Preset::Semaphore,
            Some('r') => Preset::Random,
            _ => Preset::Custom,
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Preset::Glider => "glider",
            Preset::Semaphore => "semaphore",
            Preset::Random => "random",
            Preset::Custom => "custom",
        };
        write!(f, "{}", name)
    }
}
