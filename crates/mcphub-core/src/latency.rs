//! Simulated network latency.
//!
//! Every service call sleeps before touching storage so that the UI
//! exercises its loading states the way it would against a real
//! backend. Catalog reads get a random spread on top of a fixed floor;
//! auth and chat steps use fixed pauses tuned to feel plausible.
//!
//! Delays are independent per call and nothing sequences or cancels
//! overlapping calls. Two listings issued back to back can finish in
//! either order, and whichever lands last wins. That race is part of
//! the simulation: a UI that mishandles stale responses should show it
//! here too.

use std::time::Duration;

use rand::Rng;
use tokio::time::sleep;

/// Delay profile applied by the services.
///
/// Construct with [`Latency::default`] for UI-plausible timings or
/// [`Latency::zero`] to make tests instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    /// Fixed floor for catalog, user, and stats calls.
    pub catalog_floor: Duration,

    /// Upper bound of the random spread added on top of the floor.
    pub catalog_jitter: Duration,

    /// Fixed delay for login and signup.
    pub auth: Duration,

    /// Fixed delay for session restore and logout.
    pub session: Duration,

    /// Pause before the assistant picks a tool.
    pub chat_thinking: Duration,

    /// Simulated tool run time between a pending call and its result.
    pub tool_execution: Duration,
}

impl Latency {
    /// The UI-plausible profile.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            catalog_floor: Duration::from_millis(200),
            catalog_jitter: Duration::from_millis(300),
            auth: Duration::from_millis(500),
            session: Duration::from_millis(200),
            chat_thinking: Duration::from_millis(500),
            tool_execution: Duration::from_millis(1500),
        }
    }

    /// All delays disabled; every call returns as fast as the runtime
    /// can schedule it.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            catalog_floor: Duration::ZERO,
            catalog_jitter: Duration::ZERO,
            auth: Duration::ZERO,
            session: Duration::ZERO,
            chat_thinking: Duration::ZERO,
            tool_execution: Duration::ZERO,
        }
    }

    /// Sleep for the catalog floor plus a uniform random spread below
    /// the jitter bound.
    pub async fn catalog(&self) {
        let spread = self.catalog_jitter.mul_f64(rand::thread_rng().gen_range(0.0..1.0));
        sleep(self.catalog_floor + spread).await;
    }

    /// Sleep for the login/signup delay.
    pub async fn auth(&self) {
        sleep(self.auth).await;
    }

    /// Sleep for the session restore/logout delay.
    pub async fn session(&self) {
        sleep(self.session).await;
    }

    /// Sleep for the assistant's thinking pause.
    pub async fn chat_thinking(&self) {
        sleep(self.chat_thinking).await;
    }

    /// Sleep for the simulated tool run.
    pub async fn tool_execution(&self) {
        sleep(self.tool_execution).await;
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_matches_ui_timings() {
        let latency = Latency::default();
        assert_eq!(latency.catalog_floor, Duration::from_millis(200));
        assert_eq!(latency.catalog_jitter, Duration::from_millis(300));
        assert_eq!(latency.auth, Duration::from_millis(500));
        assert_eq!(latency.session, Duration::from_millis(200));
        assert_eq!(latency.chat_thinking, Duration::from_millis(500));
        assert_eq!(latency.tool_execution, Duration::from_millis(1500));
    }

    #[tokio::test]
    async fn test_zero_profile_returns_immediately() {
        let latency = Latency::zero();
        let start = std::time::Instant::now();
        latency.catalog().await;
        latency.auth().await;
        latency.session().await;
        latency.chat_thinking().await;
        latency.tool_execution().await;
        // Generous bound; the point is that nothing waited for real
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[tokio::test]
    async fn test_catalog_waits_at_least_the_floor() {
        let latency = Latency {
            catalog_floor: Duration::from_millis(20),
            catalog_jitter: Duration::ZERO,
            ..Latency::zero()
        };
        let start = std::time::Instant::now();
        latency.catalog().await;
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
