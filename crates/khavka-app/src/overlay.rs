//! Overlay lifecycle coordination.
//!
//! Drawers, modals and the chat panel all share the same shape: they do
//! not disappear the instant the user dismisses them, they play an exit
//! animation first and are torn down when it ends. [`Overlay`] is the
//! pure three-state machine behind that behavior, [`OverlayHandle`] wraps
//! it in a signal and owns the timer that walks `Closing` to `Closed`.

use leptos::leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};
use leptos::prelude::*;
use std::time::Duration;

/// Exit animation length for the cart and navigation drawers.
pub const DRAWER_CLOSE_DELAY: Duration = Duration::from_millis(300);
/// Exit animation length for the product and checkout modals.
pub const MODAL_CLOSE_DELAY: Duration = Duration::from_millis(300);
/// Exit animation length for the chat panel.
pub const CHAT_CLOSE_DELAY: Duration = Duration::from_millis(200);

/// Where an overlay is in its lifecycle.
///
/// `Closing` means the element is still in the DOM playing its exit
/// animation; only `Closed` removes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Closed,
    Open,
    Closing,
}

/// The pure overlay machine. Transitions never touch the clock; `close`
/// hands the delay back to the caller, who is expected to schedule
/// [`Overlay::finish_close`] after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlay {
    state: OverlayState,
    close_delay: Duration,
}

impl Overlay {
    pub fn new(close_delay: Duration) -> Self {
        Self {
            state: OverlayState::Closed,
            close_delay,
        }
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == OverlayState::Open
    }

    pub fn is_closing(&self) -> bool {
        self.state == OverlayState::Closing
    }

    /// Whether the element should be in the DOM at all. True for both
    /// `Open` and `Closing`.
    pub fn is_visible(&self) -> bool {
        self.state != OverlayState::Closed
    }

    /// Opens a closed overlay. A `Closing` overlay stays on its way out;
    /// reopening mid-animation is not supported.
    pub fn open(&mut self) -> bool {
        if self.state == OverlayState::Closed {
            self.state = OverlayState::Open;
            true
        } else {
            false
        }
    }

    /// Begins the close. Returns the delay after which the caller must
    /// invoke [`Overlay::finish_close`], or `None` when there was nothing
    /// to close.
    #[must_use]
    pub fn close(&mut self) -> Option<Duration> {
        if self.state == OverlayState::Open {
            self.state = OverlayState::Closing;
            Some(self.close_delay)
        } else {
            None
        }
    }

    /// Opens when closed, closes when open. Toggles arriving while the
    /// exit animation plays are dropped.
    #[must_use]
    pub fn toggle(&mut self) -> Option<Duration> {
        match self.state {
            OverlayState::Closed => {
                self.state = OverlayState::Open;
                None
            }
            OverlayState::Open => self.close(),
            OverlayState::Closing => None,
        }
    }

    /// Completes a pending close. A stale timer firing after the overlay
    /// was force-closed and reopened finds the machine in `Open` and does
    /// nothing.
    pub fn finish_close(&mut self) -> bool {
        if self.state == OverlayState::Closing {
            self.state = OverlayState::Closed;
            true
        } else {
            false
        }
    }

    /// Drops straight to `Closed` with no exit animation. Used when one
    /// overlay is replaced by another in the same interaction, like the
    /// cart drawer handing off to the checkout modal.
    pub fn force_close(&mut self) -> bool {
        if self.state == OverlayState::Closed {
            false
        } else {
            self.state = OverlayState::Closed;
            true
        }
    }
}

/// Reactive wrapper around [`Overlay`].
///
/// `Copy`, so it can be captured freely by event handlers. The teardown
/// timer lives in local storage because [`TimeoutHandle`] is not `Send`;
/// it is cancelled if the owner is disposed while a close is pending.
#[derive(Clone, Copy)]
pub struct OverlayHandle {
    machine: RwSignal<Overlay>,
    /// Mount gates subscribe here instead of the raw machine signal, so
    /// `Open -> Closing` does not remount (and thereby reset) overlay
    /// content mid-fade; only a real visibility flip notifies.
    visible: Memo<bool>,
    timer: StoredValue<Option<TimeoutHandle>, LocalStorage>,
    on_closed: StoredValue<Option<Callback<()>>, LocalStorage>,
}

impl OverlayHandle {
    /// Must be called within a reactive owner (a component body).
    pub fn new(close_delay: Duration) -> Self {
        let machine = RwSignal::new(Overlay::new(close_delay));
        let handle = Self {
            machine,
            visible: Memo::new(move |_| machine.with(|m| m.is_visible())),
            timer: StoredValue::new_local(None),
            on_closed: StoredValue::new_local(None),
        };
        on_cleanup(move || handle.clear_timer());
        handle
    }

    /// Like [`OverlayHandle::new`], with a callback invoked once the
    /// overlay actually reaches `Closed` (after the exit animation, or
    /// immediately on a force-close).
    pub fn with_on_closed(close_delay: Duration, on_closed: Callback<()>) -> Self {
        let handle = Self::new(close_delay);
        handle.on_closed.set_value(Some(on_closed));
        handle
    }

    pub fn state(&self) -> OverlayState {
        self.machine.with(|m| m.state())
    }

    pub fn is_open(&self) -> bool {
        self.machine.with(|m| m.is_open())
    }

    pub fn is_closing(&self) -> bool {
        self.machine.with(|m| m.is_closing())
    }

    /// Whether the overlay's content should be mounted. Memoized: a
    /// subscriber re-runs when this flips, not on every state change.
    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    pub fn open(&self) {
        self.machine.update(|m| {
            m.open();
        });
    }

    pub fn close(&self) {
        let scheduled = self.machine.try_update(|m| m.close()).flatten();
        if let Some(delay) = scheduled {
            self.schedule_finish(delay);
        }
    }

    pub fn toggle(&self) {
        let scheduled = self.machine.try_update(|m| m.toggle()).flatten();
        if let Some(delay) = scheduled {
            self.schedule_finish(delay);
        }
    }

    /// Skips the exit animation entirely.
    pub fn force_close(&self) {
        self.clear_timer();
        let closed = self.machine.try_update(|m| m.force_close()).unwrap_or(false);
        if closed {
            self.notify_closed();
        }
    }

    fn schedule_finish(self, delay: Duration) {
        let scheduled = set_timeout_with_handle(
            move || {
                self.timer.set_value(None);
                let finished = self.machine.try_update(|m| m.finish_close()).unwrap_or(false);
                if finished {
                    self.notify_closed();
                }
            },
            delay,
        );
        if let Ok(handle) = scheduled {
            let stale = self.timer.try_update_value(|t| t.replace(handle)).flatten();
            if let Some(stale) = stale {
                stale.clear();
            }
        }
    }

    fn clear_timer(&self) {
        let pending = self.timer.try_update_value(|t| t.take()).flatten();
        if let Some(pending) = pending {
            pending.clear();
        }
    }

    fn notify_closed(&self) {
        let callback = self.on_closed.try_with_value(|cb| *cb).flatten();
        if let Some(callback) = callback {
            callback.run(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drawer() -> Overlay {
        Overlay::new(DRAWER_CLOSE_DELAY)
    }

    #[test]
    fn test_full_lifecycle() {
        let mut overlay = drawer();
        assert_eq!(overlay.state(), OverlayState::Closed);
        assert!(!overlay.is_visible());

        assert!(overlay.open());
        assert_eq!(overlay.state(), OverlayState::Open);
        assert!(overlay.is_visible());

        assert_eq!(overlay.close(), Some(DRAWER_CLOSE_DELAY));
        assert_eq!(overlay.state(), OverlayState::Closing);
        assert!(overlay.is_visible());

        assert!(overlay.finish_close());
        assert_eq!(overlay.state(), OverlayState::Closed);
        assert!(!overlay.is_visible());
    }

    #[test]
    fn test_open_is_idempotent() {
        let mut overlay = drawer();
        assert!(overlay.open());
        assert!(!overlay.open());
        assert_eq!(overlay.state(), OverlayState::Open);
    }

    #[test]
    fn test_close_when_closed_is_a_no_op() {
        let mut overlay = drawer();
        assert_eq!(overlay.close(), None);
        assert_eq!(overlay.state(), OverlayState::Closed);
    }

    #[test]
    fn test_open_ignored_while_closing() {
        let mut overlay = drawer();
        overlay.open();
        let _ = overlay.close();
        assert!(!overlay.open());
        assert_eq!(overlay.state(), OverlayState::Closing);
    }

    #[test]
    fn test_double_close_schedules_once() {
        let mut overlay = drawer();
        overlay.open();
        assert!(overlay.close().is_some());
        assert_eq!(overlay.close(), None);
    }

    #[test]
    fn test_stale_timer_cannot_close_a_reopened_overlay() {
        let mut overlay = drawer();
        overlay.open();
        let _ = overlay.close();

        // Force-closed and reopened before the scheduled finish fires.
        overlay.force_close();
        assert!(overlay.open());

        assert!(!overlay.finish_close());
        assert_eq!(overlay.state(), OverlayState::Open);
    }

    #[test]
    fn test_toggle_walks_open_and_close() {
        let mut overlay = drawer();
        assert_eq!(overlay.toggle(), None);
        assert_eq!(overlay.state(), OverlayState::Open);

        assert_eq!(overlay.toggle(), Some(DRAWER_CLOSE_DELAY));
        assert_eq!(overlay.state(), OverlayState::Closing);

        // Mid-animation toggles are dropped.
        assert_eq!(overlay.toggle(), None);
        assert_eq!(overlay.state(), OverlayState::Closing);
    }

    #[test]
    fn test_force_close_skips_the_closing_state() {
        let mut overlay = drawer();
        overlay.open();
        assert!(overlay.force_close());
        assert_eq!(overlay.state(), OverlayState::Closed);

        assert!(!overlay.force_close());
    }

    #[test]
    fn test_force_close_while_closing() {
        let mut overlay = drawer();
        overlay.open();
        let _ = overlay.close();
        assert!(overlay.force_close());
        assert_eq!(overlay.state(), OverlayState::Closed);
    }

    #[test]
    fn test_handle_keeps_content_mounted_while_closing() {
        let owner = Owner::new();
        owner.set();

        let handle = OverlayHandle::new(MODAL_CLOSE_DELAY);
        assert!(!handle.is_visible());

        handle.open();
        assert!(handle.is_visible());

        // Step the machine directly; scheduling needs a browser clock.
        handle.machine.update(|m| {
            let _ = m.close();
        });
        assert_eq!(handle.state(), OverlayState::Closing);
        // A half-filled modal must stay mounted for the whole exit fade.
        assert!(handle.is_visible());

        handle.machine.update(|m| {
            m.finish_close();
        });
        assert!(!handle.is_visible());
    }

    #[test]
    fn test_delays_match_the_stylesheet() {
        assert_eq!(DRAWER_CLOSE_DELAY, Duration::from_millis(300));
        assert_eq!(MODAL_CLOSE_DELAY, Duration::from_millis(300));
        assert_eq!(CHAT_CLOSE_DELAY, Duration::from_millis(200));
    }
}
