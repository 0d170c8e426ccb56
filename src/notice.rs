//! Transient confirmation shown after shopping-list actions.
//!
//! Every `show` starts a new generation. A hide timer only expires the generation it was
//! started for, so an older timer cannot hide a newer message early.

use std::time::Duration;

pub const NOTICE_HIDE_DELAY: Duration = Duration::from_secs(5);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Notice {
    message: String,
    visible: bool,
    generation: u64,
}

impl Notice {
    /// Displays `message` and returns the generation its hide timer must pass to `expire`.
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        self.generation += 1;
        self.message = message.into();
        self.visible = true;
        self.generation
    }

    /// Hides the notice if `generation` is still the latest. Returns whether it hid.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_then_expire() {
        let mut notice = Notice::default();
        assert!(!notice.is_visible());

        let generation = notice.show("Rice added to your shopping list");
        assert!(notice.is_visible());
        assert_eq!(notice.message(), "Rice added to your shopping list");

        assert!(notice.expire(generation));
        assert!(!notice.is_visible());
        assert!(!notice.expire(generation));
    }

    #[test]
    fn test_older_timer_does_not_hide_newer_message() {
        let mut notice = Notice::default();
        let first = notice.show("Rice added to your shopping list");
        let second = notice.show("Onions added to your shopping list");

        assert!(!notice.expire(first));
        assert!(notice.is_visible());
        assert_eq!(notice.message(), "Onions added to your shopping list");

        assert!(notice.expire(second));
        assert!(!notice.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_show_gets_full_delay() {
        use std::sync::{Arc, Mutex};

        let notice = Arc::new(Mutex::new(Notice::default()));
        let start_timer = |generation: u64| {
            let notice = Arc::clone(&notice);
            tokio::spawn(async move {
                tokio::time::sleep(NOTICE_HIDE_DELAY).await;
                notice.lock().unwrap().expire(generation);
            })
        };

        let first = notice.lock().unwrap().show("first");
        let first_timer = start_timer(first);
        tokio::time::sleep(Duration::from_secs(4)).await;

        let second = notice.lock().unwrap().show("second");
        let second_timer = start_timer(second);

        // The first timer fires one second later and must leave the new message up.
        first_timer.await.unwrap();
        assert!(notice.lock().unwrap().is_visible());

        second_timer.await.unwrap();
        assert!(!notice.lock().unwrap().is_visible());
    }
}
