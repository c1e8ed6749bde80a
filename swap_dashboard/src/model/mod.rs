//! Domain models of the dashboard.
//!
//! - `state` — the explicit `DashboardState` record and its transitions.
//! - `event` — `UiEvent` and the line-command syntax.
//! - `notifications` — toasts with scheduled, clock-driven dismissal.
//! - `market` — mock holdings, liquidity pools and staking pools.
//! - `dashboard` — controller tying the above together.

pub mod dashboard;
pub mod event;
pub mod market;
pub mod notifications;
pub mod state;
