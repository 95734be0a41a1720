//! User preferences store.
//!
//! Manages user settings with persistence and change notification.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use stylepeek_fetch::host::http::DEFAULT_TIMEOUT_SECS;
use stylepeek_fetch::{DEFAULT_MIN_BODY_CHARS, FetchSettings, ProxyEndpoint};
use tokio::sync::{RwLock, watch};
use tracing::{debug, info, warn};

use crate::error::StoreError;
use crate::persistence::{default_settings_path, load_json, save_json};

// ============================================================================
// Settings Types
// ============================================================================

/// User preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// CORS proxies, tried in order.
    pub proxies: Vec<ProxyEndpoint>,

    /// Time budget for each proxy attempt, in seconds.
    pub request_timeout_secs: u64,

    /// Bodies with this many characters or fewer are rejected.
    pub min_body_chars: usize,

    /// Log level.
    pub log_level: LogLevel,

    /// Save every successful extraction to the project collection.
    pub auto_save: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            proxies: ProxyEndpoint::defaults(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            min_body_chars: DEFAULT_MIN_BODY_CHARS,
            log_level: LogLevel::default(),
            auto_save: true,
        }
    }
}

impl Settings {
    /// Builds the fetch settings these preferences describe.
    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings::default()
            .with_proxies(self.proxies.clone())
            .with_timeout(Duration::from_secs(self.request_timeout_secs))
            .with_min_body_chars(self.min_body_chars)
    }

    /// Checks that the settings can drive a fetch.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Config`] for a zero timeout or a proxy template
    /// that cannot produce a request URL.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.request_timeout_secs == 0 {
            return Err(StoreError::Config("request_timeout_secs must be > 0".into()));
        }
        for proxy in &self.proxies {
            proxy
                .validate()
                .map_err(|e| StoreError::Config(format!("proxy {}: {}", proxy.name, e)))?;
        }
        Ok(())
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    /// Error level logging.
    Error,
    /// Warning level logging.
    #[default]
    Warn,
    /// Info level logging.
    Info,
    /// Debug level logging.
    Debug,
    /// Trace level logging.
    Trace,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

// ============================================================================
// Settings Store
// ============================================================================

/// Persistent settings store with change notifications.
pub struct SettingsStore {
    settings: Arc<RwLock<Settings>>,
    path: PathBuf,
    notify: watch::Sender<u64>,
}

impl SettingsStore {
    /// Creates a store with default settings, persisted at `path`.
    pub fn new(path: PathBuf) -> Self {
        let (notify, _) = watch::channel(0);
        Self {
            settings: Arc::new(RwLock::new(Settings::default())),
            path,
            notify,
        }
    }

    /// Loads settings from the default path.
    pub async fn load_default() -> Self {
        Self::load(default_settings_path()).await
    }

    /// Loads settings from a path.
    ///
    /// A missing, unreadable or invalid file falls back to defaults.
    pub async fn load(path: PathBuf) -> Self {
        let settings = if path.exists() {
            info!(path = %path.display(), "Loading settings");
            match load_json::<Settings>(&path).await {
                Ok(settings) => match settings.validate() {
                    Ok(()) => settings,
                    Err(e) => {
                        warn!(error = %e, "Invalid settings, using defaults");
                        Settings::default()
                    }
                },
                Err(e) => {
                    warn!(error = %e, "Failed to load settings, using defaults");
                    Settings::default()
                }
            }
        } else {
            debug!(path = %path.display(), "Settings file not found, using defaults");
            Settings::default()
        };

        let (notify, _) = watch::channel(0);
        Self {
            settings: Arc::new(RwLock::new(settings)),
            path,
            notify,
        }
    }

    /// Returns the file the settings persist to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Gets a copy of the current settings.
    pub async fn get(&self) -> Settings {
        self.settings.read().await.clone()
    }

    /// Updates settings and notifies subscribers.
    pub async fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut Settings),
    {
        {
            let mut settings = self.settings.write().await;
            f(&mut settings);
        }
        self.notify_change();
    }

    /// Saves settings to disk.
    ///
    /// # Errors
    ///
    /// Returns error if settings cannot be written to disk.
    pub async fn save(&self) -> Result<(), StoreError> {
        let settings = self.settings.read().await;
        save_json(&self.path, &*settings).await?;
        info!(path = %self.path.display(), "Settings saved");
        Ok(())
    }

    /// Subscribes to settings changes. The value is a change counter.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.notify.subscribe()
    }

    fn notify_change(&self) {
        self.notify.send_modify(|version| *version += 1);
    }

    // ========================================================================
    // Convenience Methods
    // ========================================================================

    /// Fetch settings derived from the current preferences.
    pub async fn fetch_settings(&self) -> FetchSettings {
        self.settings.read().await.fetch_settings()
    }

    /// Appends a proxy template after validating it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Config`] if the template is unusable.
    pub async fn add_proxy(&self, template: &str) -> Result<ProxyEndpoint, StoreError> {
        let proxy = ProxyEndpoint::new(template);
        proxy
            .validate()
            .map_err(|e| StoreError::Config(e.to_string()))?;

        let added = proxy.clone();
        self.update(|s| s.proxies.push(proxy)).await;
        debug!(proxy = %added, "Proxy added");
        Ok(added)
    }

    /// Removes the proxy at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Config`] if `index` is out of range.
    pub async fn remove_proxy(&self, index: usize) -> Result<ProxyEndpoint, StoreError> {
        let removed = {
            let mut settings = self.settings.write().await;
            if index >= settings.proxies.len() {
                return Err(StoreError::Config(format!(
                    "no proxy at index {} ({} configured)",
                    index,
                    settings.proxies.len()
                )));
            }
            settings.proxies.remove(index)
        };
        self.notify_change();
        debug!(proxy = %removed, "Proxy removed");
        Ok(removed)
    }

    /// Sets the per-attempt timeout.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Config`] for zero.
    pub async fn set_request_timeout(&self, secs: u64) -> Result<(), StoreError> {
        if secs == 0 {
            return Err(StoreError::Config("timeout must be at least 1 second".into()));
        }
        self.update(|s| s.request_timeout_secs = secs).await;
        Ok(())
    }

    /// Restores every setting to its default.
    pub async fn reset(&self) {
        self.update(|s| *s = Settings::default()).await;
    }
}

// ============================================================================
// Tests
// ============================================================================
