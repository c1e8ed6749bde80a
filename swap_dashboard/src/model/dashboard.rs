//! Dashboard controller: applies `UiEvent`s to state and posts notifications.

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use log::{info, warn};
use swap_common::quote::Quote;
use swap_common::{Catalog, SwapError};

use crate::model::event::UiEvent;
use crate::model::market::MarketData;
use crate::model::notifications::{Clock, NotificationCenter, NotificationKind};
use crate::model::state::DashboardState;

/// What the event loop should do after an event was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Redraw the current view.
    Render,
    /// Print the state record.
    PrintState,
    /// Stop the loop.
    Quit,
}

/// A submitted mock swap.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapTicket {
    /// The quote that was accepted.
    pub quote: Quote,
    /// Time after which the swap would be void.
    pub deadline: DateTime<Utc>,
}

/// State, reference data and notifications of one dashboard session.
pub struct Dashboard<C: Clock> {
    /// Explicit UI state.
    pub state: DashboardState,
    /// Token prices.
    pub catalog: Catalog,
    /// Mock pools and holdings.
    pub market: MarketData,
    /// Toasts with scheduled dismissal.
    pub notifications: NotificationCenter<C>,
}

impl<C: Clock> Dashboard<C> {
    /// Creates a session with default state and mock market data.
    pub fn new(catalog: Catalog, notifications: NotificationCenter<C>) -> Self {
        Self {
            state: DashboardState::default(),
            catalog,
            market: MarketData::default(),
            notifications,
        }
    }

    /// Applies one user event. `now` stamps swap deadlines.
    ///
    /// Advisory rejections are turned into error notifications and returned so
    /// the caller can log them; they never end the session.
    pub fn apply(&mut self, event: UiEvent, now: DateTime<Utc>) -> Result<Flow, SwapError> {
        let catalog = &self.catalog;
        let state = &mut self.state;
        match event {
            UiEvent::SelectTab(tab) => state.select_tab(tab),
            UiEvent::SetFrom(symbol) => {
                state.set_from_token(&catalog.canonical_symbol(&symbol), catalog)
            }
            UiEvent::SetTo(symbol) => {
                state.set_to_token(&catalog.canonical_symbol(&symbol), catalog)
            }
            UiEvent::SetAmount(amount) => state.set_amount(&amount, catalog),
            UiEvent::Flip => state.flip_tokens(catalog),
            UiEvent::SetSlippage(slippage) => state.set_slippage(slippage, catalog),
            UiEvent::SetDeadline(minutes) => state.set_deadline(minutes),
            UiEvent::SetTheme(theme) => state.set_theme(theme),
            UiEvent::SetExpertMode(on) => state.settings.expert_mode = on,
            UiEvent::SetAutoRouter(on) => state.settings.auto_router = on,
            UiEvent::SetPriceImpact(on) => state.settings.show_price_impact = on,
            UiEvent::ShowSettings(open) => state.show_settings = open,
            UiEvent::ConnectWallet => self.connect_wallet(),
            UiEvent::Swap => {
                self.submit_swap(now)?;
            }
            UiEvent::Dismiss(id) => {
                self.notifications.dismiss(id);
            }
            UiEvent::Show => {}
            UiEvent::DumpState => return Ok(Flow::PrintState),
            UiEvent::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Render)
    }

    /// Connects the mock wallet.
    pub fn connect_wallet(&mut self) {
        self.state.connect_wallet();
        info!("Wallet connected");
        self.notifications
            .push("Wallet connected successfully!", NotificationKind::Success);
    }

    /// Submits the swap form.
    ///
    /// Fails with `WalletNotConnected` before [`Self::connect_wallet`], or with
    /// the quote rejection. Every outcome posts a notification.
    pub fn submit_swap(&mut self, now: DateTime<Utc>) -> Result<SwapTicket, SwapError> {
        if !self.state.is_connected() {
            return Err(self.reject(SwapError::WalletNotConnected));
        }
        let quote = match self.state.current_quote(&self.catalog) {
            Ok(quote) => quote,
            Err(e) => return Err(self.reject(e)),
        };
        let deadline =
            now + ChronoDuration::minutes(i64::from(self.state.settings.deadline_minutes));
        let message = format!(
            "Swapping {} {} for {} {} (deadline {})",
            self.state.from_amount.trim(),
            quote.from,
            quote.amount_out_display(),
            quote.to,
            deadline.format("%H:%M UTC"),
        );
        info!("{}", message);
        self.notifications.push(message, NotificationKind::Success);
        Ok(SwapTicket { quote, deadline })
    }

    /// Posts `error` as an error notification and hands it back.
    pub fn reject(&mut self, error: SwapError) -> SwapError {
        warn!("Rejected: {}", error);
        self.notifications
            .push(error.to_string(), NotificationKind::Error);
        error
    }
}
