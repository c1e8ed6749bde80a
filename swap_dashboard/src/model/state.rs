//! Explicit dashboard state.
//!
//! `DashboardState` is the single record behind every view: active tab, swap
//! form fields, wallet flag, settings modal. It is plain data (serde) and all
//! transitions are methods that take the catalog by reference, so the quote
//! calculator stays free of any presentation concern.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use swap_common::quote::{Quote, QuoteRequest, exchange_rate};
use swap_common::{Catalog, Settings, Slippage, SwapError, Theme};

/// Masked address shown once the mock wallet is connected.
pub const MOCK_WALLET_ADDRESS: &str = "0x1234...5678";

/// Top-level navigation tab.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// Token swap form.
    #[default]
    Swap,
    /// Liquidity pool listing.
    Pools,
    /// Staking pool listing.
    Stake,
    /// Portfolio summary.
    Portfolio,
}

/// Everything the dashboard shows that the user can change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardState {
    /// Selected tab.
    pub active_tab: Tab,
    /// Source token symbol.
    pub from_token: String,
    /// Destination token symbol.
    pub to_token: String,
    /// Source amount as typed.
    pub from_amount: String,
    /// Quoted destination amount, empty when there is no valid quote.
    pub to_amount: String,
    /// Reason the current form cannot be quoted.
    pub quote_error: Option<String>,
    /// Connected wallet address, `None` until connected.
    pub wallet: Option<String>,
    /// Whether the settings modal is open.
    pub show_settings: bool,
    /// Settings edited in the modal.
    pub settings: Settings,
}

impl Default for DashboardState {
    fn default() -> Self {
        DashboardState {
            active_tab: Tab::Swap,
            from_token: "ETH".to_string(),
            to_token: "USDC".to_string(),
            from_amount: String::new(),
            to_amount: String::new(),
            quote_error: None,
            wallet: None,
            show_settings: false,
            settings: Settings::default(),
        }
    }
}

impl DashboardState {
    /// The quote request the swap form currently describes.
    pub fn quote_request(&self) -> QuoteRequest {
        QuoteRequest::new(
            &self.from_amount,
            &self.from_token,
            &self.to_token,
            self.settings.slippage.pct(),
        )
    }

    /// Prices the swap form.
    pub fn current_quote(&self, catalog: &Catalog) -> Result<Quote, SwapError> {
        Quote::compute(&self.quote_request(), catalog)
    }

    /// Refreshes `to_amount` and `quote_error` from the form.
    ///
    /// An empty amount clears both without reporting an error.
    pub fn recompute_quote(&mut self, catalog: &Catalog) {
        if self.from_amount.trim().is_empty() {
            self.to_amount.clear();
            self.quote_error = None;
            return;
        }
        match self.current_quote(catalog) {
            Ok(quote) => {
                self.to_amount = quote.amount_out_display();
                self.quote_error = None;
                debug!(
                    "Quoted {} {} -> {} {}",
                    self.from_amount, self.from_token, self.to_amount, self.to_token
                );
            }
            Err(e) => {
                warn!("Quote rejected: {}", e);
                self.to_amount.clear();
                self.quote_error = Some(e.to_string());
            }
        }
    }

    /// Selects a tab.
    pub fn select_tab(&mut self, tab: Tab) {
        debug!("Tab {} -> {}", self.active_tab, tab);
        self.active_tab = tab;
    }

    /// Sets the source token and requotes.
    pub fn set_from_token(&mut self, symbol: &str, catalog: &Catalog) {
        self.from_token = symbol.to_string();
        self.recompute_quote(catalog);
    }

    /// Sets the destination token and requotes.
    pub fn set_to_token(&mut self, symbol: &str, catalog: &Catalog) {
        self.to_token = symbol.to_string();
        self.recompute_quote(catalog);
    }

    /// Sets the source amount and requotes.
    pub fn set_amount(&mut self, amount: &str, catalog: &Catalog) {
        self.from_amount = amount.to_string();
        self.recompute_quote(catalog);
    }

    /// Swaps source and destination tokens and requotes.
    pub fn flip_tokens(&mut self, catalog: &Catalog) {
        std::mem::swap(&mut self.from_token, &mut self.to_token);
        self.recompute_quote(catalog);
    }

    /// Sets slippage tolerance and requotes.
    pub fn set_slippage(&mut self, slippage: Slippage, catalog: &Catalog) {
        self.settings.slippage = slippage;
        self.recompute_quote(catalog);
    }

    /// Sets the transaction deadline in minutes.
    pub fn set_deadline(&mut self, minutes: u32) {
        self.settings.set_deadline_minutes(minutes);
    }

    /// Sets the colour theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.settings.theme = theme;
    }

    /// Replaces all settings at once and requotes.
    pub fn apply_settings(&mut self, settings: Settings, catalog: &Catalog) {
        self.settings = settings;
        self.settings.set_deadline_minutes(self.settings.deadline_minutes);
        self.show_settings = false;
        self.recompute_quote(catalog);
    }

    /// Marks the mock wallet as connected.
    pub fn connect_wallet(&mut self) {
        self.wallet = Some(MOCK_WALLET_ADDRESS.to_string());
    }

    /// Whether the mock wallet is connected.
    pub fn is_connected(&self) -> bool {
        self.wallet.is_some()
    }

    /// Label of the swap button for the current form.
    pub fn swap_button_label(&self) -> &'static str {
        if !self.is_connected() {
            "Connect Wallet"
        } else if self.from_amount.trim().is_empty() {
            "Enter Amount"
        } else {
            "Swap Tokens"
        }
    }

    /// `1 FROM = rate TO`, or the rejection text.
    pub fn exchange_rate_line(&self, catalog: &Catalog) -> String {
        match exchange_rate(&self.from_token, &self.to_token, catalog) {
            Ok(rate) => format!("1 {} = {} {}", self.from_token, rate, self.to_token),
            Err(e) => e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::default()
    }

    #[test]
    fn defaults() {
        let s = DashboardState::default();
        assert_eq!(s.active_tab, Tab::Swap);
        assert_eq!((s.from_token.as_str(), s.to_token.as_str()), ("ETH", "USDC"));
        assert_eq!(s.settings.slippage.pct(), 0.5);
        assert!(!s.is_connected());
        assert_eq!(s.swap_button_label(), "Connect Wallet");
    }

    #[test]
    fn amount_change_requotes() {
        let mut s = DashboardState::default();
        s.set_slippage(Slippage::new(0.0), &catalog());
        s.set_amount("1", &catalog());
        assert_eq!(s.to_amount, "2456.780000");
        s.set_slippage(Slippage::new(1.0), &catalog());
        assert_eq!(s.to_amount, "2432.212200");
    }

    #[test]
    fn flip_swaps_tokens() {
        let mut s = DashboardState::default();
        s.set_slippage(Slippage::new(0.0), &catalog());
        s.set_amount("2456.78", &catalog());
        s.flip_tokens(&catalog());
        assert_eq!(s.from_token, "USDC");
        assert_eq!(s.to_token, "ETH");
        assert_eq!(s.to_amount, "1.000000");
    }

    #[test]
    fn rejection_clears_output_and_records_reason() {
        let mut s = DashboardState::default();
        s.set_amount("1", &catalog());
        s.set_to_token("ETH", &catalog());
        assert!(s.to_amount.is_empty());
        assert_eq!(s.quote_error.as_deref(), Some("Cannot swap ETH for itself"));

        s.set_to_token("USDT", &catalog());
        assert!(s.quote_error.is_none());
        assert!(!s.to_amount.is_empty());
    }

    #[test]
    fn clearing_amount_clears_quote_silently() {
        let mut s = DashboardState::default();
        s.set_amount("abc", &catalog());
        assert!(s.quote_error.is_some());
        s.set_amount("", &catalog());
        assert!(s.quote_error.is_none());
        assert!(s.to_amount.is_empty());
    }

    #[test]
    fn unknown_token_is_reported() {
        let mut s = DashboardState::default();
        s.set_amount("1", &catalog());
        s.set_from_token("DOGE", &catalog());
        assert_eq!(s.quote_error.as_deref(), Some("Unknown token: DOGE"));
        assert_eq!(s.exchange_rate_line(&catalog()), "Unknown token: DOGE");
    }

    #[test]
    fn exchange_rate_line() {
        let mut s = DashboardState::default();
        assert_eq!(s.exchange_rate_line(&catalog()), "1 ETH = 2456.780000 USDC");
        s.set_to_token("ETH", &catalog());
        assert_eq!(s.exchange_rate_line(&catalog()), "1 ETH = 1.000000 ETH");
    }

    #[test]
    fn button_label_follows_form() {
        let mut s = DashboardState::default();
        s.connect_wallet();
        assert_eq!(s.swap_button_label(), "Enter Amount");
        s.set_amount("3", &catalog());
        assert_eq!(s.swap_button_label(), "Swap Tokens");
    }

    #[test]
    fn apply_settings_closes_modal() {
        let mut s = DashboardState::default();
        s.show_settings = true;
        let settings = Settings {
            deadline_minutes: 0,
            expert_mode: true,
            ..Settings::default()
        };
        s.apply_settings(settings, &catalog());
        assert!(!s.show_settings);
        assert!(s.settings.expert_mode);
        assert_eq!(s.settings.deadline_minutes, 1);
    }

    #[test]
    fn tab_parses_case_insensitive() {
        assert_eq!("Pools".parse::<Tab>().unwrap(), Tab::Pools);
        assert_eq!(Tab::Portfolio.to_string(), "portfolio");
    }

    #[test]
    fn state_round_trips_through_json() {
        let mut s = DashboardState::default();
        s.connect_wallet();
        s.set_amount("2", &catalog());
        let json = serde_json::to_string(&s).unwrap();
        let back: DashboardState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
