//! Bounded execution for blocking probes.
//!
//! A probe runs on the blocking pool under a timeout. If it hangs, the cycle
//! moves on without it, and later cycles report the probe as busy until the
//! stuck call returns, so a dead source never piles up blocked threads.

use crate::error::ProbeError;
use log::{debug, info, warn};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

pub struct ProbeGuard {
    name: &'static str,
    limit: Duration,
    busy: Arc<AtomicBool>,
    last_failure: Option<String>,
}

/// Clears the busy flag when the probe returns or unwinds.
struct BusyFlag(Arc<AtomicBool>);

impl Drop for BusyFlag {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl ProbeGuard {
    pub fn new(name: &'static str, limit: Duration) -> Self {
        ProbeGuard {
            name,
            limit,
            busy: Arc::new(AtomicBool::new(false)),
            last_failure: None,
        }
    }

    pub async fn run<T, F>(&self, probe: F) -> Result<T, ProbeError>
    where
        F: FnOnce() -> Result<T, ProbeError> + Send + 'static,
        T: Send + 'static,
    {
        if self.busy.swap(true, Ordering::AcqRel) {
            return Err(ProbeError::Busy { probe: self.name });
        }
        let flag = BusyFlag(Arc::clone(&self.busy));

        let handle = tokio::task::spawn_blocking(move || {
            let _flag = flag;
            probe()
        });

        match tokio::time::timeout(self.limit, handle).await {
            Ok(Ok(result)) => result,
            Ok(Err(_)) => Err(ProbeError::Panicked { probe: self.name }),
            Err(_) => Err(ProbeError::TimedOut {
                probe: self.name,
                limit: self.limit,
            }),
        }
    }

    /// Log a probe outcome once per change and hand back the value, if any.
    ///
    /// A daemon that is simply not running is normal, so MPD failures stay at
    /// debug level.
    pub fn settle<T>(&mut self, result: Result<T, ProbeError>) -> Option<T> {
        match result {
            Ok(value) => {
                if self.last_failure.take().is_some() {
                    info!("{} probe recovered", self.name);
                }
                Some(value)
            }
            Err(e) => {
                let message = e.to_string();
                if self.last_failure.as_deref() != Some(message.as_str()) {
                    match e {
                        ProbeError::Mpd(_) => debug!("{}", message),
                        _ => warn!("{}", message),
                    }
                    self.last_failure = Some(message);
                }
                None
            }
        }
    }

    #[cfg(test)]
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}
