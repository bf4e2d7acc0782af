//! Cosmetic feedback effects: bounce animation and the "Meow!" notification.
//!
//! Both are fire-and-forget. The state machine never consumes their results.

use notify_rust::{Notification, Timeout};

use crate::log;

/// Vertical offsets for the bounce, one per tick of the main loop. Reaching
/// the end of the table is the one-shot completion signal that clears the
/// active flag.
pub const BOUNCE_FRAMES: &[u16] = &[1, 2, 3, 3, 2, 1, 0];

/// One-shot bounce animation state.
///
/// Triggering while a bounce is already running is a no-op: the animation
/// neither restarts nor stacks. After the final frame it can be retriggered.
#[derive(Debug, Default)]
pub struct Bounce {
    active: bool,
    frame: usize,
}

impl Bounce {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the bounce unless one is already running.
    pub fn trigger(&mut self) {
        if self.active {
            return;
        }
        self.active = true;
        self.frame = 0;
    }

    /// Advance one frame; clears the active flag after the last one.
    pub fn tick(&mut self) {
        if !self.active {
            return;
        }
        self.frame += 1;
        if self.frame >= BOUNCE_FRAMES.len() {
            self.active = false;
            self.frame = 0;
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Current upward offset in rows.
    pub fn offset(&self) -> u16 {
        if self.active {
            BOUNCE_FRAMES[self.frame]
        } else {
            0
        }
    }
}

/// Optional host notification capability. Absence is a valid state, not an
/// error.
pub trait HostNotify {
    fn notify(&self, kind: &str, message: &str) -> anyhow::Result<()>;
}

/// Notifications through the desktop notification server.
pub struct DesktopNotifier;

impl HostNotify for DesktopNotifier {
    fn notify(&self, kind: &str, message: &str) -> anyhow::Result<()> {
        Notification::new()
            .summary(kind)
            .body(message)
            .timeout(Timeout::Milliseconds(5000))
            .show()?;
        Ok(())
    }
}

/// Fire the "Meow!" notification. When the host capability is absent or
/// fails, falls back to a plain log line. Never surfaces an error.
pub fn notify_meow(host: Option<&dyn HostNotify>) {
    match host {
        Some(host) => {
            if let Err(e) = host.notify("Info", "Meow!") {
                log::warn(&format!("Notification failed, falling back to log: {}", e));
                log::log("Meow!");
            }
        }
        None => log::log("Meow!"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_trigger_while_active_is_noop() {
        let mut bounce = Bounce::new();
        bounce.trigger();
        bounce.tick();
        bounce.tick();
        let frame_before = bounce.offset();

        // Second trigger must not restart the animation
        bounce.trigger();
        assert!(bounce.is_active());
        assert_eq!(bounce.offset(), frame_before);
    }

    #[test]
    fn test_bounce_completes_and_clears() {
        let mut bounce = Bounce::new();
        bounce.trigger();

        for _ in 0..BOUNCE_FRAMES.len() {
            assert!(bounce.is_active());
            bounce.tick();
        }
        assert!(!bounce.is_active());
        assert_eq!(bounce.offset(), 0);
    }

    #[test]
    fn test_bounce_retriggers_after_completion() {
        let mut bounce = Bounce::new();
        bounce.trigger();
        for _ in 0..BOUNCE_FRAMES.len() {
            bounce.tick();
        }

        bounce.trigger();
        assert!(bounce.is_active());
        assert_eq!(bounce.offset(), BOUNCE_FRAMES[0]);
    }

    #[test]
    fn test_tick_without_trigger_is_noop() {
        let mut bounce = Bounce::new();
        bounce.tick();
        assert!(!bounce.is_active());
        assert_eq!(bounce.offset(), 0);
    }

    struct RecordingNotifier {
        calls: RefCell<Vec<(String, String)>>,
    }

    impl HostNotify for RecordingNotifier {
        fn notify(&self, kind: &str, message: &str) -> anyhow::Result<()> {
            self.calls
                .borrow_mut()
                .push((kind.to_string(), message.to_string()));
            Ok(())
        }
    }

    struct FailingNotifier;

    impl HostNotify for FailingNotifier {
        fn notify(&self, _kind: &str, _message: &str) -> anyhow::Result<()> {
            anyhow::bail!("notification server unavailable")
        }
    }

    #[test]
    fn test_notify_uses_host_capability() {
        let host = RecordingNotifier {
            calls: RefCell::new(vec![]),
        };
        notify_meow(Some(&host));

        let calls = host.calls.borrow();
        assert_eq!(calls.as_slice(), &[("Info".to_string(), "Meow!".to_string())]);
    }

    #[test]
    fn test_notify_swallows_host_failure() {
        notify_meow(Some(&FailingNotifier));
    }

    #[test]
    fn test_notify_tolerates_absent_capability() {
        notify_meow(None);
    }
}
