use std::time::Duration;

use crate::constants::COPY_ACK_DURATION_MS;

/// "Copied" acknowledgment on a copy button.
///
/// Each acknowledgment returns a token; only the timer holding the latest
/// token may clear the flag, so a quick second copy is not cut short.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CopyFeedback {
    acknowledged: bool,
    token: u64,
}

impl CopyFeedback {
    pub fn acknowledge(&mut self) -> u64 {
        self.token += 1;
        self.acknowledged = true;
        self.token
    }

    /// Clears the flag if `token` is still current. Returns whether it did.
    pub fn expire(&mut self, token: u64) -> bool {
        if token != self.token || !self.acknowledged {
            return false;
        }
        self.acknowledged = false;
        true
    }

    pub fn is_acknowledged(&self) -> bool {
        self.acknowledged
    }
}

/// Waits out the acknowledgment window, then hands `token` to `expire`.
pub async fn expire_after_delay<F>(token: u64, mut expire: F) -> bool
where
    F: FnMut(u64) -> bool,
{
    tokio::time::sleep(Duration::from_millis(COPY_ACK_DURATION_MS)).await;
    expire(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_acknowledge_then_expire() {
        let mut feedback = CopyFeedback::default();
        assert!(!feedback.is_acknowledged());
        let token = feedback.acknowledge();
        assert!(feedback.is_acknowledged());
        assert!(feedback.expire(token));
        assert!(!feedback.is_acknowledged());
    }

    #[test]
    fn test_older_timer_does_not_clear_newer_ack() {
        let mut feedback = CopyFeedback::default();
        let first = feedback.acknowledge();
        let second = feedback.acknowledge();
        assert!(!feedback.expire(first));
        assert!(feedback.is_acknowledged());
        assert!(feedback.expire(second));
    }

    #[tokio::test(start_paused = true)]
    async fn test_flag_reverts_after_ack_window() {
        let feedback = Arc::new(Mutex::new(CopyFeedback::default()));
        let token = feedback.lock().unwrap().acknowledge();

        let shared = Arc::clone(&feedback);
        let timer = tokio::spawn(expire_after_delay(token, move |token| {
            shared.lock().unwrap().expire(token)
        }));
        tokio::task::yield_now().await;

        tokio::time::advance(Duration::from_millis(COPY_ACK_DURATION_MS - 1)).await;
        tokio::task::yield_now().await;
        assert!(!timer.is_finished());
        assert!(feedback.lock().unwrap().is_acknowledged());

        tokio::time::advance(Duration::from_millis(2)).await;
        assert!(timer.await.unwrap());
        assert!(!feedback.lock().unwrap().is_acknowledged());
    }
}
