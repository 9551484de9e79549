//! Connectivity signals.
//!
//! `online` is the client's own connectivity, consulted synchronously before
//! every outbound request; when it is false the request is never issued.
//! `upstream` is what the optional background probe last saw of the
//! provider. It is reported by `/api/health` and logged, but never gates a
//! request: an unreachable provider surfaces as a network failure of the
//! request itself.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::llm::LlmProvider;

/// Shared connectivity flags. Clones observe the same state.
#[derive(Debug, Clone)]
pub struct Connectivity {
    online: Arc<AtomicBool>,
    upstream: Arc<AtomicBool>,
}

impl Default for Connectivity {
    fn default() -> Self {
        Self::online()
    }
}

impl Connectivity {
    pub fn online() -> Self {
        Self::with_state(true)
    }

    pub fn offline() -> Self {
        Self::with_state(false)
    }

    fn with_state(online: bool) -> Self {
        Self {
            online: Arc::new(AtomicBool::new(online)),
            upstream: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Client connectivity.
    pub fn is_online(&self) -> bool {
        self.online.load(Ordering::Acquire)
    }

    /// Update the client flag; returns the previous value.
    pub fn set_online(&self, online: bool) -> bool {
        self.online.swap(online, Ordering::AcqRel)
    }

    /// Provider reachability as of the last probe. `true` until a probe says otherwise.
    pub fn is_upstream_reachable(&self) -> bool {
        self.upstream.load(Ordering::Acquire)
    }

    /// Update the upstream flag; returns the previous value.
    pub fn set_upstream_reachable(&self, reachable: bool) -> bool {
        self.upstream.swap(reachable, Ordering::AcqRel)
    }

    /// Ping `provider` every `interval` until `shutdown` fires, recording the
    /// result in the upstream flag.
    pub fn spawn_probe(
        &self,
        provider: LlmProvider,
        interval: Duration,
        shutdown: CancellationToken,
    ) -> JoinHandle<()> {
        let this = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                tokio::select! {
                    biased;
                    _ = shutdown.cancelled() => {
                        debug!("connectivity probe stopped");
                        break;
                    }
                    _ = ticker.tick() => {
                        let reachable = match provider.ping().await {
                            Ok(()) => true,
                            Err(e) => {
                                debug!(error = %e, "connectivity probe failed");
                                false
                            }
                        };
                        let was_reachable = this.set_upstream_reachable(reachable);
                        if was_reachable != reachable {
                            if reachable {
                                info!(provider = provider.name(), "provider reachable again");
                            } else {
                                warn!(provider = provider.name(), "provider unreachable");
                            }
                        }
                    }
                }
            }
        })
    }
}
