//! Mock market data: wallet holdings, liquidity pools and staking pools.
//!
//! Nothing here is fetched. Holdings are valued against the catalog's current
//! prices so the portfolio view stays consistent with the swap form.

use serde::{Deserialize, Serialize};
use swap_common::Catalog;

/// Number of catalog tokens shown in the market stats sidebar.
pub const MARKET_STATS_LEN: usize = 4;

/// Amount of a token held by the mock wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Token symbol.
    pub token: String,
    /// Units held.
    pub amount: f64,
}

/// A liquidity pool row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiquidityPool {
    /// Pair label, e.g. `ETH/USDC`.
    pub pair: String,
    /// Total value locked in USD.
    pub tvl_usd: f64,
    /// Annual percentage rate.
    pub apr_pct: f64,
    /// The user's share in USD.
    pub my_liquidity_usd: f64,
    /// Fees earned by the pool over the last day in USD.
    pub fees_24h_usd: f64,
}

/// How long staked tokens are locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LockPeriod {
    /// Withdraw at any time.
    Flexible,
    /// Locked for a number of days.
    Days(u32),
}

impl std::fmt::Display for LockPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LockPeriod::Flexible => write!(f, "Flexible"),
            LockPeriod::Days(d) => write!(f, "{} days", d),
        }
    }
}

/// A staking pool row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StakingPool {
    /// Staked token symbol.
    pub token: String,
    /// Annual percentage rate.
    pub apr_pct: f64,
    /// Units the user has staked.
    pub staked: f64,
    /// Unclaimed rewards in units of `token`.
    pub rewards: f64,
    /// Lock period.
    pub lock: LockPeriod,
}

/// One portfolio row valued at current prices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetRow {
    /// Token symbol.
    pub token: String,
    /// Display glyph; first letter of the symbol when unlisted.
    pub icon: String,
    /// Units held.
    pub amount: f64,
    /// USD value, zero when unlisted.
    pub value_usd: f64,
    /// 24h change of the token in percent.
    pub change_24h: f64,
}

/// Aggregated portfolio figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioSummary {
    /// Sum of all asset values in USD.
    pub total_value_usd: f64,
    /// Value-weighted 24h change in percent.
    pub change_24h_pct: f64,
    /// Per-asset rows in holding order.
    pub assets: Vec<AssetRow>,
}

/// All mock market data the dashboard lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketData {
    /// Wallet holdings.
    pub holdings: Vec<Holding>,
    /// Liquidity pools.
    pub liquidity_pools: Vec<LiquidityPool>,
    /// Staking pools.
    pub staking_pools: Vec<StakingPool>,
}

impl MarketData {
    /// Values the holdings against `catalog`.
    pub fn portfolio(&self, catalog: &Catalog) -> PortfolioSummary {
        let assets: Vec<AssetRow> = self
            .holdings
            .iter()
            .map(|h| match catalog.get(&h.token) {
                Some(token) => AssetRow {
                    token: h.token.clone(),
                    icon: token.icon.clone(),
                    amount: h.amount,
                    value_usd: h.amount * token.price,
                    change_24h: token.change_24h,
                },
                None => AssetRow {
                    token: h.token.clone(),
                    icon: h.token.chars().next().map(String::from).unwrap_or_default(),
                    amount: h.amount,
                    value_usd: 0.0,
                    change_24h: 0.0,
                },
            })
            .collect();

        let total_value_usd: f64 = assets.iter().map(|a| a.value_usd).sum();
        let change_24h_pct = if total_value_usd > 0.0 {
            assets
                .iter()
                .map(|a| a.value_usd * a.change_24h)
                .sum::<f64>()
                / total_value_usd
        } else {
            0.0
        };

        PortfolioSummary {
            total_value_usd,
            change_24h_pct,
            assets,
        }
    }

    /// Total value locked across all liquidity pools.
    pub fn total_tvl_usd(&self) -> f64 {
        self.liquidity_pools.iter().map(|p| p.tvl_usd).sum()
    }
}

impl Default for MarketData {
    fn default() -> Self {
        MarketData {
            holdings: vec![
                Holding { token: "ETH".into(), amount: 2.5 },
                Holding { token: "USDC".into(), amount: 1500.0 },
                Holding { token: "LINK".into(), amount: 100.0 },
            ],
            liquidity_pools: vec![
                LiquidityPool {
                    pair: "ETH/USDC".into(),
                    tvl_usd: 2_400_000.0,
                    apr_pct: 12.5,
                    my_liquidity_usd: 1_234.0,
                    fees_24h_usd: 156.0,
                },
                LiquidityPool {
                    pair: "BTC/ETH".into(),
                    tvl_usd: 1_800_000.0,
                    apr_pct: 8.7,
                    my_liquidity_usd: 856.0,
                    fees_24h_usd: 98.0,
                },
                LiquidityPool {
                    pair: "LINK/ETH".into(),
                    tvl_usd: 892_000.0,
                    apr_pct: 15.2,
                    my_liquidity_usd: 0.0,
                    fees_24h_usd: 45.0,
                },
            ],
            staking_pools: vec![
                StakingPool {
                    token: "NEXO".into(),
                    apr_pct: 18.5,
                    staked: 1_000.0,
                    rewards: 12.34,
                    lock: LockPeriod::Days(30),
                },
                StakingPool {
                    token: "ETH".into(),
                    apr_pct: 4.2,
                    staked: 0.5,
                    rewards: 0.02,
                    lock: LockPeriod::Flexible,
                },
            ],
        }
    }
}

/// Formats a USD amount compactly: `$2.4M`, `$892K`, `$156`.
pub fn format_usd_compact(value: f64) -> String {
    let abs = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };
    if abs >= 1_000_000.0 {
        format!("{}${}M", sign, trim_zeros(format!("{:.1}", abs / 1_000_000.0)))
    } else if abs >= 10_000.0 {
        format!("{}${}K", sign, trim_zeros(format!("{:.1}", abs / 1_000.0)))
    } else {
        format!("{}${}", sign, trim_zeros(format!("{:.2}", abs)))
    }
}

fn trim_zeros(s: String) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}
