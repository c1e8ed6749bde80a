//! Transient toast notifications with scheduled auto-dismiss.
//!
//! Every notification gets an id from a monotonically increasing counter and a
//! pending dismissal due `lifetime` after it was posted. The pending dismissal
//! is keyed by id, so:
//!
//! - `NotificationCenter::dismiss(id)` removes the toast and cancels its
//!   pending dismissal; calling it again is a no-op.
//! - `NotificationCenter::expire()` fires every dismissal whose due time has
//!   passed and returns the ids that were actually removed.
//!
//! Time comes from a [`Clock`]. [`SystemClock`] is monotonic (`Instant`);
//! [`ManualClock`] is advanced by hand so tests never sleep.

use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use strum::Display;

/// How long a notification stays visible unless configured otherwise.
pub const DEFAULT_LIFETIME: Duration = Duration::from_secs(5);

/// Source of "now" for the notification center, as elapsed time since an origin.
pub trait Clock {
    /// Time elapsed since the clock's origin.
    fn now(&self) -> Duration;
}

/// Wall-clock backed by `Instant`.
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Starts a clock at the current instant.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Simulated clock for deterministic tests.
#[derive(Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    /// Moves time forward by `by`.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Visual category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[strum(serialize_all = "lowercase")]
pub enum NotificationKind {
    /// Completed action.
    Success,
    /// Rejected action.
    Error,
    /// Anything else.
    Info,
}

/// A visible toast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique, increasing identifier.
    pub id: u64,
    /// Text shown to the user.
    pub message: String,
    /// Visual category.
    pub kind: NotificationKind,
}

/// Holds visible notifications and their pending dismissals.
pub struct NotificationCenter<C: Clock> {
    clock: C,
    lifetime: Duration,
    next_id: u64,
    visible: Vec<Notification>,
    /// Pending auto-dismissals: id -> due time on `clock`.
    pending: HashMap<u64, Duration>,
}

impl<C: Clock> NotificationCenter<C> {
    /// Creates a center whose notifications live for `lifetime`.
    pub fn new(clock: C, lifetime: Duration) -> Self {
        Self {
            clock,
            lifetime,
            next_id: 1,
            visible: Vec::new(),
            pending: HashMap::new(),
        }
    }

    /// Posts a notification and schedules its dismissal. Returns its id.
    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let due = self
            .clock
            .now()
            .checked_add(self.lifetime)
            .unwrap_or(Duration::MAX);
        self.visible.push(Notification {
            id,
            message: message.into(),
            kind,
        });
        self.pending.insert(id, due);
        id
    }

    /// Removes notification `id` and cancels its pending dismissal.
    ///
    /// Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        self.pending.remove(&id);
        let before = self.visible.len();
        self.visible.retain(|n| n.id != id);
        self.visible.len() != before
    }

    /// Fires every pending dismissal that is due. Returns removed ids, oldest first.
    pub fn expire(&mut self) -> Vec<u64> {
        let now = self.clock.now();
        let mut due: Vec<(Duration, u64)> = self
            .pending
            .iter()
            .filter(|&(_, &at)| at <= now)
            .map(|(&id, &at)| (at, id))
            .collect();
        due.sort_unstable();

        due.into_iter()
            .filter_map(|(_, id)| self.dismiss(id).then_some(id))
            .collect()
    }

    /// Time left until the next pending dismissal, if any.
    pub fn next_due_in(&self) -> Option<Duration> {
        let now = self.clock.now();
        self.pending
            .values()
            .min()
            .map(|&at| at.saturating_sub(now))
    }

    /// Visible notifications in posting order.
    pub fn visible(&self) -> &[Notification] {
        &self.visible
    }

    /// The clock driving this center.
    pub fn clock(&self) -> &C {
        &self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn center() -> NotificationCenter<ManualClock> {
        NotificationCenter::new(ManualClock::default(), DEFAULT_LIFETIME)
    }

    #[test]
    fn ids_increase() {
        let mut c = center();
        let a = c.push("a", NotificationKind::Info);
        let b = c.push("b", NotificationKind::Success);
        assert!(b > a);
        assert_eq!(c.visible().len(), 2);
    }

    #[test]
    fn expires_after_five_seconds() {
        let mut c = center();
        let id = c.push("Wallet connected successfully!", NotificationKind::Success);

        c.clock().advance(Duration::from_millis(4_999));
        assert!(c.expire().is_empty());
        assert_eq!(c.visible().len(), 1);

        c.clock().advance(Duration::from_millis(1));
        assert_eq!(c.expire(), vec![id]);
        assert!(c.visible().is_empty());
    }

    #[test]
    fn huge_lifetime_never_expires() {
        let mut c = NotificationCenter::new(ManualClock::default(), Duration::from_secs(u64::MAX));
        c.clock().advance(Duration::from_secs(1));
        let id = c.push("Wallet connected successfully!", NotificationKind::Success);
        assert_eq!(c.visible()[0].id, id);

        c.clock().advance(Duration::from_secs(86_400));
        assert!(c.expire().is_empty());
        assert_eq!(c.visible().len(), 1);
        assert!(c.dismiss(id));
    }

    #[test]
    fn expiry_is_per_notification() {
        let mut c = center();
        let first = c.push("first", NotificationKind::Info);
        c.clock().advance(Duration::from_secs(3));
        let second = c.push("second", NotificationKind::Info);

        c.clock().advance(Duration::from_secs(2));
        assert_eq!(c.expire(), vec![first]);
        assert_eq!(c.visible()[0].id, second);

        c.clock().advance(Duration::from_secs(3));
        assert_eq!(c.expire(), vec![second]);
    }

    #[test]
    fn dismiss_is_idempotent_and_cancels_expiry() {
        let mut c = center();
        let id = c.push("x", NotificationKind::Error);
        assert!(c.dismiss(id));
        assert!(!c.dismiss(id));

        c.clock().advance(Duration::from_secs(10));
        assert!(c.expire().is_empty());
    }

    #[test]
    fn expire_twice_is_a_noop() {
        let mut c = center();
        c.push("x", NotificationKind::Info);
        c.clock().advance(Duration::from_secs(6));
        assert_eq!(c.expire().len(), 1);
        assert!(c.expire().is_empty());
    }

    #[test]
    fn next_due_tracks_earliest() {
        let mut c = center();
        assert_eq!(c.next_due_in(), None);
        c.push("x", NotificationKind::Info);
        c.clock().advance(Duration::from_secs(2));
        c.push("y", NotificationKind::Info);
        assert_eq!(c.next_due_in(), Some(Duration::from_secs(3)));
    }
}
