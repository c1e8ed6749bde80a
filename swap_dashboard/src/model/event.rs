//! User input events and their line-command syntax.
//!
//! Each stdin line is one command: a keyword followed by an optional argument,
//! e.g. `amount 1.5`, `from btc`, `expert on`. Keywords are case-insensitive;
//! token symbols are kept as typed and matched against the catalog later.

use std::str::FromStr;
use strum::EnumString;
use swap_common::{Slippage, SwapError, Theme};

use crate::model::state::Tab;

/// A single user action on the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Switch tab.
    SelectTab(Tab),
    /// Set the source token.
    SetFrom(String),
    /// Set the destination token.
    SetTo(String),
    /// Set the source amount; empty clears it.
    SetAmount(String),
    /// Swap source and destination.
    Flip,
    /// Set slippage tolerance.
    SetSlippage(Slippage),
    /// Set transaction deadline in minutes.
    SetDeadline(u32),
    /// Set colour theme.
    SetTheme(Theme),
    /// Toggle expert mode.
    SetExpertMode(bool),
    /// Toggle the auto router.
    SetAutoRouter(bool),
    /// Toggle the price impact warning.
    SetPriceImpact(bool),
    /// Open or close the settings modal.
    ShowSettings(bool),
    /// Connect the mock wallet.
    ConnectWallet,
    /// Submit the swap form.
    Swap,
    /// Dismiss a notification by id.
    Dismiss(u64),
    /// Redraw the current view.
    Show,
    /// Print the state record as JSON.
    DumpState,
    /// Leave the dashboard.
    Quit,
}

#[derive(Debug, EnumString)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
enum Keyword {
    Tab,
    From,
    To,
    Amount,
    Flip,
    Slippage,
    Deadline,
    Theme,
    Expert,
    Router,
    Impact,
    Settings,
    Connect,
    Swap,
    Dismiss,
    Show,
    State,
    #[strum(serialize = "quit", serialize = "exit")]
    Quit,
}

impl FromStr for UiEvent {
    type Err = SwapError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, arg) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        if word.is_empty() {
            return Err(SwapError::Command("empty command".to_string()));
        }
        let keyword = word
            .parse::<Keyword>()
            .map_err(|_| SwapError::Command(format!("unknown command: {}", word)))?;

        let event = match keyword {
            Keyword::Tab => UiEvent::SelectTab(
                arg.parse()
                    .map_err(|_| SwapError::Command(format!("unknown tab: {}", arg)))?,
            ),
            Keyword::From => UiEvent::SetFrom(symbol(arg)?),
            Keyword::To => UiEvent::SetTo(symbol(arg)?),
            Keyword::Amount => UiEvent::SetAmount(arg.to_string()),
            Keyword::Flip => UiEvent::Flip,
            Keyword::Slippage => UiEvent::SetSlippage(Slippage::parse_lenient(arg)),
            Keyword::Deadline => UiEvent::SetDeadline(
                arg.parse()
                    .map_err(|_| SwapError::Command(format!("invalid deadline: {}", arg)))?,
            ),
            Keyword::Theme => UiEvent::SetTheme(
                arg.parse()
                    .map_err(|_| SwapError::Command(format!("unknown theme: {}", arg)))?,
            ),
            Keyword::Expert => UiEvent::SetExpertMode(switch(arg)?),
            Keyword::Router => UiEvent::SetAutoRouter(switch(arg)?),
            Keyword::Impact => UiEvent::SetPriceImpact(switch(arg)?),
            Keyword::Settings => match arg.to_ascii_lowercase().as_str() {
                "" | "open" => UiEvent::ShowSettings(true),
                "close" => UiEvent::ShowSettings(false),
                other => {
                    return Err(SwapError::Command(format!(
                        "expected open or close, got {}",
                        other
                    )));
                }
            },
            Keyword::Connect => UiEvent::ConnectWallet,
            Keyword::Swap => UiEvent::Swap,
            Keyword::Dismiss => UiEvent::Dismiss(
                arg.parse()
                    .map_err(|_| SwapError::Command(format!("invalid notification id: {}", arg)))?,
            ),
            Keyword::Show => UiEvent::Show,
            Keyword::State => UiEvent::DumpState,
            Keyword::Quit => UiEvent::Quit,
        };
        Ok(event)
    }
}

fn symbol(arg: &str) -> Result<String, SwapError> {
    if arg.is_empty() {
        return Err(SwapError::Command("missing token symbol".to_string()));
    }
    Ok(arg.to_string())
}

fn switch(arg: &str) -> Result<bool, SwapError> {
    match arg.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        other => Err(SwapError::Command(format!("expected on or off, got {:?}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> UiEvent {
        line.parse().unwrap()
    }

    #[test]
    fn parses_form_commands() {
        assert_eq!(parse("from btc"), UiEvent::SetFrom("btc".into()));
        assert_eq!(parse("TO  USDC "), UiEvent::SetTo("USDC".into()));
        assert_eq!(parse("amount 1.5"), UiEvent::SetAmount("1.5".into()));
        assert_eq!(parse("amount"), UiEvent::SetAmount(String::new()));
        assert_eq!(parse("flip"), UiEvent::Flip);
    }

    #[test]
    fn parses_settings_commands() {
        assert_eq!(parse("slippage 1%"), UiEvent::SetSlippage(Slippage::new(1.0)));
        assert_eq!(parse("slippage 80"), UiEvent::SetSlippage(Slippage::new(50.0)));
        assert_eq!(parse("deadline 30"), UiEvent::SetDeadline(30));
        assert_eq!(parse("theme cyberpunk"), UiEvent::SetTheme(Theme::Cyberpunk));
        assert_eq!(parse("expert on"), UiEvent::SetExpertMode(true));
        assert_eq!(parse("router off"), UiEvent::SetAutoRouter(false));
        assert_eq!(parse("impact no"), UiEvent::SetPriceImpact(false));
        assert_eq!(parse("settings"), UiEvent::ShowSettings(true));
        assert_eq!(parse("settings close"), UiEvent::ShowSettings(false));
    }

    #[test]
    fn parses_misc_commands() {
        assert_eq!(parse("tab Portfolio"), UiEvent::SelectTab(Tab::Portfolio));
        assert_eq!(parse("connect"), UiEvent::ConnectWallet);
        assert_eq!(parse("swap"), UiEvent::Swap);
        assert_eq!(parse("dismiss 7"), UiEvent::Dismiss(7));
        assert_eq!(parse("state"), UiEvent::DumpState);
        assert_eq!(parse("exit"), UiEvent::Quit);
    }

    #[test]
    fn rejects_bad_commands() {
        for line in ["", "   ", "launch", "tab charts", "from", "expert maybe", "deadline soon", "dismiss x"] {
            let err = line.parse::<UiEvent>().unwrap_err();
            assert!(matches!(err, SwapError::Command(_)), "line {line:?}");
        }
    }
}
