//! Plain-text rendering of the dashboard.

use std::fmt;
use swap_common::quote::format_decimal;

use crate::model::dashboard::Dashboard;
use crate::model::market::{MARKET_STATS_LEN, format_usd_compact};
use crate::model::notifications::Clock;
use crate::model::state::Tab;

/// Borrowing view over a dashboard; `Display` draws the active tab.
pub struct DashboardView<'a, C: Clock> {
    dashboard: &'a Dashboard<C>,
}

impl<'a, C: Clock> DashboardView<'a, C> {
    /// Wraps `dashboard` for display.
    pub fn new(dashboard: &'a Dashboard<C>) -> Self {
        Self { dashboard }
    }

    fn header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = &self.dashboard.state;
        let wallet = state.wallet.as_deref().unwrap_or("Connect Wallet");
        writeln!(f, "== DEX [{}] theme={} wallet={}", state.active_tab, state.settings.theme, wallet)?;
        for n in self.dashboard.notifications.visible() {
            writeln!(f, "  ({}) #{} {}", n.kind, n.id, n.message)?;
        }
        Ok(())
    }

    fn swap(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.dashboard;
        let state = &d.state;
        writeln!(f, "-- Token Swap")?;
        writeln!(f, "From: {:<6} {}", state.from_token, or_placeholder(&state.from_amount))?;
        writeln!(f, "To:   {:<6} {}", state.to_token, or_placeholder(&state.to_amount))?;
        if let Some(err) = &state.quote_error {
            writeln!(f, "  ! {}", err)?;
        }
        writeln!(f, "Exchange Rate       {}", state.exchange_rate_line(&d.catalog))?;
        writeln!(f, "Slippage Tolerance  {}", state.settings.slippage)?;
        writeln!(f, "Deadline            {} min", state.settings.deadline_minutes)?;
        if let Ok(quote) = state.current_quote(&d.catalog) {
            writeln!(f, "Value               ${:.2}", quote.value_in_usd)?;
        }
        writeln!(f, "[ {} ]", state.swap_button_label())
    }

    fn pools(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let market = &self.dashboard.market;
        writeln!(f, "-- Liquidity Pools (total TVL {})", format_usd_compact(market.total_tvl_usd()))?;
        writeln!(f, "{:<10} {:>8} {:>7} {:>10} {:>8}", "Pair", "TVL", "APR", "Mine", "24h Fees")?;
        for p in &market.liquidity_pools {
            writeln!(
                f,
                "{:<10} {:>8} {:>6}% {:>10} {:>8}",
                p.pair,
                format_usd_compact(p.tvl_usd),
                p.apr_pct,
                format_usd_compact(p.my_liquidity_usd),
                format_usd_compact(p.fees_24h_usd),
            )?;
        }
        Ok(())
    }

    fn stake(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "-- Staking")?;
        writeln!(f, "{:<6} {:>7} {:>10} {:>10} {:>10}", "Token", "APR", "Staked", "Rewards", "Lock")?;
        for p in &self.dashboard.market.staking_pools {
            writeln!(
                f,
                "{:<6} {:>6}% {:>10} {:>10} {:>10}",
                p.token,
                p.apr_pct,
                p.staked,
                p.rewards,
                p.lock.to_string(),
            )?;
        }
        Ok(())
    }

    fn portfolio(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.dashboard.market.portfolio(&self.dashboard.catalog);
        writeln!(f, "-- Portfolio")?;
        writeln!(f, "Total Value  ${:.2}", summary.total_value_usd)?;
        writeln!(f, "24h Change   {}", signed_pct(summary.change_24h_pct))?;
        for a in &summary.assets {
            writeln!(
                f,
                "{} {:<5} {:>10} ${:>10.2} {}",
                a.icon,
                a.token,
                a.amount,
                a.value_usd,
                signed_pct(a.change_24h),
            )?;
        }
        Ok(())
    }

    fn market_stats(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "-- Market")?;
        for t in self.dashboard.catalog.iter().take(MARKET_STATS_LEN) {
            writeln!(f, "{} {:<5} ${:>10.2} {}", t.icon, t.symbol, t.price, signed_pct(t.change_24h))?;
        }
        Ok(())
    }

    fn settings(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.dashboard.state.settings;
        writeln!(f, "-- Settings")?;
        writeln!(f, "Slippage     {} (presets 0.1% 0.5% 1%)", s.slippage)?;
        writeln!(f, "Deadline     {} min", s.deadline_minutes)?;
        writeln!(f, "Theme        {}", s.theme)?;
        writeln!(f, "Price impact {}", on_off(s.show_price_impact))?;
        writeln!(f, "Auto router  {}", on_off(s.auto_router))?;
        writeln!(f, "Expert mode  {}", on_off(s.expert_mode))
    }
}

impl<C: Clock> fmt::Display for DashboardView<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.header(f)?;
        match self.dashboard.state.active_tab {
            Tab::Swap => self.swap(f)?,
            Tab::Pools => self.pools(f)?,
            Tab::Stake => self.stake(f)?,
            Tab::Portfolio => self.portfolio(f)?,
        }
        self.market_stats(f)?;
        if self.dashboard.state.show_settings {
            self.settings(f)?;
        }
        Ok(())
    }
}

fn or_placeholder(s: &str) -> &str {
    if s.is_empty() { "0.00" } else { s }
}

fn signed_pct(pct: f64) -> String {
    let digits = format_decimal(pct);
    let digits = digits.trim_end_matches('0').trim_end_matches('.');
    let sign = if pct >= 0.0 { "+" } else { "" };
    format!("{}{}%", sign, digits)
}

fn on_off(on: bool) -> &'static str {
    if on { "on" } else { "off" }
}
