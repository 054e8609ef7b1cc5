//! Shop Session State Management
//!
//! This module manages the application state: the loaded catalog, the
//! configuration and the live shop sessions.

use super::helpers::SessionKey;
use super::models::ShopSession;
use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::host::HostHints;
use axum::http::HeaderMap;
use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state containing the catalog and visitor sessions
pub struct AppState {
    /// In-memory shop sessions, keyed by session id.
    /// DashMap allows concurrent access without external Mutexes.
    pub sessions: DashMap<String, ShopSession>,

    pub catalog: Catalog,

    pub config: StorefrontConfig,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(StorefrontConfig::default(), Catalog::demo())
    }
}

impl AppState {
    pub fn new(config: StorefrontConfig, catalog: Catalog) -> Self {
        Self {
            sessions: DashMap::new(),
            catalog,
            config,
        }
    }

    /// Runs `f` against the session `id`, creating it first when unknown.
    ///
    /// The session's map entry stays locked for the duration of `f`, so
    /// operations on one session never interleave.
    pub fn with_session<R>(
        &self,
        id: &str,
        hints: HostHints,
        f: impl FnOnce(&mut ShopSession) -> R,
    ) -> R {
        let mut entry = self.sessions.entry(id.to_string()).or_insert_with(|| {
            let bridge = self.config.host_mode.bridge(hints);
            tracing::debug!(
                session_id = id,
                host = bridge.is_present(),
                "Created shop session"
            );
            ShopSession::new(bridge)
        });
        entry.touch();
        f(entry.value_mut())
    }

    /// Resolves the request's session key. A cookie naming a session this
    /// process does not hold (expired or made up) gets a fresh id.
    pub fn session_key(&self, headers: &HeaderMap) -> SessionKey {
        let key = SessionKey::from_headers(headers);
        if key.is_new || self.sessions.contains_key(&key.id) {
            key
        } else {
            tracing::debug!(session_id = %key.id, "Unknown session cookie, issuing a new one");
            key.reissue()
        }
    }

    /// Runs `f` against session `id` without creating it. Unknown ids see a
    /// fresh session that is thrown away afterwards.
    pub fn inspect_session<R>(
        &self,
        id: &str,
        hints: HostHints,
        f: impl FnOnce(&ShopSession) -> R,
    ) -> R {
        match self.sessions.get_mut(id) {
            Some(mut entry) => {
                entry.touch();
                f(entry.value())
            }
            None => f(&ShopSession::new(self.config.host_mode.bridge(hints))),
        }
    }

    /// Drops sessions idle for longer than the configured TTL.
    pub fn evict_idle(&self) -> usize {
        match Instant::now().checked_sub(self.config.session_ttl) {
            Some(cutoff) => self.evict_seen_before(cutoff),
            None => 0,
        }
    }

    /// Drops sessions last seen before `cutoff`, returning how many went.
    pub fn evict_seen_before(&self, cutoff: Instant) -> usize {
        let mut evicted = 0;
        self.sessions.retain(|_, session| {
            let keep = session.last_seen() >= cutoff;
            if !keep {
                evicted += 1;
            }
            keep
        });
        evicted
    }

    pub fn operator(&self) -> &str {
        &self.config.operator_handle
    }
}

/// Periodically evicts idle sessions for as long as the runtime lives.
pub fn spawn_session_sweeper(state: SharedState) -> JoinHandle<()> {
    let period = (state.config.session_ttl / 4).clamp(Duration::from_secs(1), Duration::from_secs(60));
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            let evicted = state.evict_idle();
            if evicted > 0 {
                tracing::debug!(evicted, remaining = state.sessions.len(), "Evicted idle sessions");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::HostMode;
    use axum::http::{header, HeaderValue};
    use std::thread::sleep;

    #[test]
    fn test_sessions_are_isolated() {
        let state = AppState::default();
        let kelly = state.catalog.find("p1").unwrap().clone();

        state.with_session("one", HostHints::default(), |s| s.add_to_cart(&kelly));
        state.with_session("one", HostHints::default(), |s| s.add_to_cart(&kelly));
        state.with_session("two", HostHints::default(), |s| s.add_to_cart(&kelly));

        let one = state.with_session("one", HostHints::default(), |s| s.cart().count());
        let two = state.with_session("two", HostHints::default(), |s| s.cart().count());
        assert_eq!((one, two), (2, 1));
        assert_eq!(state.sessions.len(), 2);
    }

    #[test]
    fn test_bridge_chosen_on_creation_only() {
        let config = StorefrontConfig {
            host_mode: HostMode::Auto,
            ..StorefrontConfig::default()
        };
        let state = AppState::new(config, Catalog::demo());
        let telegram = HostHints {
            init_data_header: true,
            ..HostHints::default()
        };

        assert!(state.with_session("a", telegram, |s| s.is_host_present()));
        // later hints do not swap the bridge
        assert!(state.with_session("a", HostHints::default(), |s| s.is_host_present()));
        assert!(!state.with_session("b", HostHints::default(), |s| s.is_host_present()));
    }

    #[test]
    fn test_evicts_only_idle_sessions() {
        let state = AppState::default();
        state.with_session("stale", HostHints::default(), |_| ());
        sleep(Duration::from_millis(5));
        let cutoff = Instant::now();
        sleep(Duration::from_millis(5));
        state.with_session("fresh", HostHints::default(), |_| ());

        assert_eq!(state.evict_seen_before(cutoff), 1);
        assert!(state.sessions.contains_key("fresh"));
        assert!(!state.sessions.contains_key("stale"));
    }

    #[test]
    fn test_activity_keeps_session_alive() {
        let state = AppState::default();
        state.with_session("a", HostHints::default(), |_| ());
        sleep(Duration::from_millis(5));
        let cutoff = Instant::now();
        sleep(Duration::from_millis(5));
        state.inspect_session("a", HostHints::default(), |_| ());

        assert_eq!(state.evict_seen_before(cutoff), 0);
        assert_eq!(state.sessions.len(), 1);
    }

    #[test]
    fn test_evict_idle_uses_configured_ttl() {
        let config = StorefrontConfig {
            session_ttl: Duration::from_millis(1),
            ..StorefrontConfig::default()
        };
        let state = AppState::new(config, Catalog::demo());
        state.with_session("a", HostHints::default(), |_| ());
        sleep(Duration::from_millis(20));
        assert_eq!(state.evict_idle(), 1);
        assert!(state.sessions.is_empty());

        let state = AppState::default();
        state.with_session("b", HostHints::default(), |_| ());
        assert_eq!(state.evict_idle(), 0);
    }

    #[test]
    fn test_inspect_does_not_create_sessions() {
        let state = AppState::default();
        for n in 0..100 {
            let count = state.inspect_session(&format!("ghost-{n}"), HostHints::default(), |s| {
                s.cart().count()
            });
            assert_eq!(count, 0);
        }
        assert!(state.sessions.is_empty());
    }

    #[test]
    fn test_unknown_cookie_is_reissued() {
        let state = AppState::default();
        state.with_session("known", HostHints::default(), |_| ());

        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("shop_session=known"));
        let key = state.session_key(&headers);
        assert_eq!(key.id, "known");
        assert!(!key.is_new);

        headers.insert(header::COOKIE, HeaderValue::from_static("shop_session=forged"));
        let key = state.session_key(&headers);
        assert_ne!(key.id, "forged");
        assert!(key.is_new);
    }

    #[tokio::test]
    async fn test_sweeper_runs_in_background() {
        let config = StorefrontConfig {
            session_ttl: Duration::from_millis(1),
            ..StorefrontConfig::default()
        };
        let state = Arc::new(AppState::new(config, Catalog::demo()));
        state.with_session("a", HostHints::default(), |_| ());
        tokio::time::sleep(Duration::from_millis(5)).await;

        // the first tick fires immediately
        let sweeper = spawn_session_sweeper(state.clone());
        tokio::time::sleep(Duration::from_millis(50)).await;
        sweeper.abort();
        assert!(state.sessions.is_empty());
    }
}
