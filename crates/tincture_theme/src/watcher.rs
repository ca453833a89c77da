//! System color-scheme watcher
//!
//! Platforms without a native change notification can poll: the watcher
//! samples a [`SchemeSource`] on an interval and forwards changes to
//! [`ThemeContext::handle_system_scheme_change`], which keeps the
//! explicit-choice rule in force. Hosts with a real notification (a webview
//! media-query listener, a settings daemon) should call the entry point
//! directly instead of running a watcher.

use crate::state::ThemeContext;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;
use tincture_platform::SchemeSource;

/// Polling configuration
#[derive(Clone, Copy, Debug)]
pub struct WatcherConfig {
    pub interval: Duration,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(2),
        }
    }
}

/// Handle to the polling thread; stops and joins on drop
pub struct SchemeWatcher {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl SchemeWatcher {
    /// Start polling `source` and forwarding changes into `context`
    pub fn spawn(
        context: Arc<ThemeContext>,
        source: Arc<dyn SchemeSource>,
        config: WatcherConfig,
    ) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = stop.clone();
        let handle = std::thread::Builder::new()
            .name("tincture-scheme-watcher".into())
            .spawn(move || {
                let mut last = source.current();
                while !stop_flag.load(Ordering::SeqCst) {
                    std::thread::sleep(config.interval);
                    if stop_flag.load(Ordering::SeqCst) {
                        break;
                    }
                    let current = source.current();
                    if let Some(scheme) = current {
                        if last != Some(scheme) {
                            tracing::debug!(%scheme, "OS color scheme changed");
                            context.handle_system_scheme_change(scheme);
                        }
                    }
                    last = current;
                }
            })
            .expect("failed to spawn scheme watcher thread");

        Self {
            stop,
            handle: Some(handle),
        }
    }

    /// Stop polling and wait for the thread to exit
    ///
    /// Latency is bounded by the polling interval.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for SchemeWatcher {
    fn drop(&mut self) {
        self.shutdown();
    }
}
