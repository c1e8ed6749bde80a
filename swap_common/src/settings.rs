//! User-facing swap settings: slippage tolerance, deadline, theme and toggles.
//!
//! Only [`Slippage`] feeds the quote calculator. The remaining fields are
//! carried in dashboard state and shown to the user.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Upper bound accepted for slippage tolerance, in percent.
pub const MAX_SLIPPAGE_PCT: f64 = 50.0;
/// Preset slippage values offered as quick picks, in percent.
pub const SLIPPAGE_PRESETS: [f64; 3] = [0.1, 0.5, 1.0];
/// Default transaction deadline in minutes.
pub const DEFAULT_DEADLINE_MINUTES: u32 = 20;

/// Slippage tolerance in percent, always within `[0, 50]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Slippage(f64);

impl Slippage {
    /// Clamps `pct` into `[0, 50]`. NaN maps to zero.
    pub fn new(pct: f64) -> Self {
        if pct.is_nan() {
            return Slippage(0.0);
        }
        Slippage(pct.clamp(0.0, MAX_SLIPPAGE_PCT))
    }

    /// Parses free-form user text such as `"0.5"` or `"1%"`.
    ///
    /// Text that is not a number yields zero, matching a cleared custom field.
    pub fn parse_lenient(text: &str) -> Self {
        let trimmed = text.trim().trim_end_matches('%').trim();
        Slippage::new(trimmed.parse::<f64>().unwrap_or(0.0))
    }

    /// Percent value.
    pub fn pct(self) -> f64 {
        self.0
    }

    /// Returns `true` if this value equals one of [`SLIPPAGE_PRESETS`].
    pub fn is_preset(self) -> bool {
        SLIPPAGE_PRESETS.contains(&self.0)
    }
}

impl Default for Slippage {
    fn default() -> Self {
        Slippage(0.5)
    }
}

impl From<f64> for Slippage {
    fn from(pct: f64) -> Self {
        Slippage::new(pct)
    }
}

impl From<Slippage> for f64 {
    fn from(s: Slippage) -> Self {
        s.0
    }
}

impl std::fmt::Display for Slippage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Cosmetic colour theme.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    Serialize,
    Deserialize,
    ValueEnum,
    Display,
    EnumString,
    Eq,
    PartialEq,
)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
#[strum(ascii_case_insensitive, serialize_all = "kebab-case")]
pub enum Theme {
    /// Dark (default).
    #[default]
    Dark,
    /// Dark blue.
    DarkBlue,
    /// Purple night.
    PurpleNight,
    /// Cyberpunk.
    Cyberpunk,
}

/// Everything the settings modal edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Slippage tolerance applied to quotes.
    pub slippage: Slippage,
    /// Transaction deadline in minutes; display-only.
    pub deadline_minutes: u32,
    /// Colour theme.
    pub theme: Theme,
    /// Warn when the price impact is high.
    pub show_price_impact: bool,
    /// Route through multiple pools automatically.
    pub auto_router: bool,
    /// Skip confirmations.
    pub expert_mode: bool,
}

impl Settings {
    /// Sets the deadline, raising anything below one minute to one.
    pub fn set_deadline_minutes(&mut self, minutes: u32) {
        self.deadline_minutes = minutes.max(1);
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            slippage: Slippage::default(),
            deadline_minutes: DEFAULT_DEADLINE_MINUTES,
            theme: Theme::default(),
            show_price_impact: true,
            auto_router: true,
            expert_mode: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slippage_is_clamped() {
        assert_eq!(Slippage::new(-3.0).pct(), 0.0);
        assert_eq!(Slippage::new(75.0).pct(), 50.0);
        assert_eq!(Slippage::new(f64::NAN).pct(), 0.0);
        assert_eq!(Slippage::new(f64::INFINITY).pct(), 50.0);
        assert_eq!(Slippage::new(2.5).pct(), 2.5);
    }

    #[test]
    fn slippage_parses_user_text() {
        assert_eq!(Slippage::parse_lenient(" 1% ").pct(), 1.0);
        assert_eq!(Slippage::parse_lenient("0.1").pct(), 0.1);
        assert_eq!(Slippage::parse_lenient("").pct(), 0.0);
        assert_eq!(Slippage::parse_lenient("abc").pct(), 0.0);
        assert_eq!(Slippage::parse_lenient("99").pct(), 50.0);
    }

    #[test]
    fn slippage_deserializes_through_clamp() {
        let s: Slippage = serde_json::from_str("120.0").unwrap();
        assert_eq!(s.pct(), 50.0);
        assert_eq!(serde_json::to_string(&Slippage::new(1.0)).unwrap(), "1.0");
    }

    #[test]
    fn presets() {
        assert!(Slippage::default().is_preset());
        assert!(!Slippage::new(0.7).is_preset());
    }

    #[test]
    fn theme_parses_case_insensitive() {
        assert_eq!("Cyberpunk".parse::<Theme>().unwrap(), Theme::Cyberpunk);
        assert_eq!("dark-blue".parse::<Theme>().unwrap(), Theme::DarkBlue);
        assert_eq!(Theme::PurpleNight.to_string(), "purple-night");
    }

    #[test]
    fn deadline_has_a_floor() {
        let mut settings = Settings::default();
        assert_eq!(settings.deadline_minutes, 20);
        settings.set_deadline_minutes(0);
        assert_eq!(settings.deadline_minutes, 1);
    }
}
