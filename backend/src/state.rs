//! Application state management
//!
//! The calculator keeps no per-user or per-request data. The state only
//! carries read-only configuration and the optional metrics handle, both
//! cheap to clone into every handler.

use crate::config::AppConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Prometheus render handle, absent when no recorder is installed
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: AppConfig, metrics: Option<PrometheusHandle>) -> Self {
        Self {
            config: Arc::new(config),
            metrics,
        }
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Directory static assets are served from
    #[inline]
    pub fn static_dir(&self) -> &Path {
        Path::new(&self.config.assets.static_dir)
    }

    /// Location of the calculator form page
    pub fn index_path(&self) -> PathBuf {
        self.static_dir().join("index.html")
    }
}
