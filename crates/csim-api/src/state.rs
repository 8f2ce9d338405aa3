//! # Service State
//!
//! Configuration, the report store and the simulator, cloned into every
//! handler through axum's `State` extractor.
//!
//! The simulation core never fetches reports itself. Routes that work on
//! stored reports read them through the [`ReportProvider`] trait; the
//! in-memory [`ReportStore`] is the provider this service ships with.

use std::collections::HashMap;
use std::sync::Arc;

use csim_core::ComplianceReport;
use csim_engine::Simulator;
use parking_lot::RwLock;

// -- Report Provider ----------------------------------------------------------

/// Source of compliance reports by id.
pub trait ReportProvider: Send + Sync + std::fmt::Debug {
    /// Fetch one report.
    fn report(&self, id: &str) -> Option<ComplianceReport>;

    /// All reports, in the order they were first stored.
    fn reports(&self) -> Vec<ComplianceReport>;
}

// -- In-Memory Store ----------------------------------------------------------

#[derive(Debug, Default)]
struct Inner {
    by_id: HashMap<String, ComplianceReport>,
    order: Vec<String>,
}

/// Thread-safe, cloneable in-memory report store.
///
/// The lock is `parking_lot` and is never held across an `.await`.
/// Listing preserves first-insertion order so portfolio views are stable.
#[derive(Debug, Clone, Default)]
pub struct ReportStore {
    data: Arc<RwLock<Inner>>,
}

impl ReportStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a report under its id, returning the previous value if the id existed.
    ///
    /// Replacing a report keeps its original listing position.
    pub fn insert(&self, id: impl Into<String>, report: ComplianceReport) -> Option<ComplianceReport> {
        let id = id.into();
        let mut guard = self.data.write();
        let previous = guard.by_id.insert(id.clone(), report);
        if previous.is_none() {
            guard.order.push(id);
        }
        previous
    }

    /// Retrieve a report by id.
    pub fn get(&self, id: &str) -> Option<ComplianceReport> {
        self.data.read().by_id.get(id).cloned()
    }

    /// List all reports in insertion order.
    pub fn list(&self) -> Vec<ComplianceReport> {
        let guard = self.data.read();
        guard
            .order
            .iter()
            .filter_map(|id| guard.by_id.get(id).cloned())
            .collect()
    }

    /// Return the number of reports.
    pub fn len(&self) -> usize {
        self.data.read().by_id.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ReportProvider for ReportStore {
    fn report(&self, id: &str) -> Option<ComplianceReport> {
        self.get(id)
    }

    fn reports(&self) -> Vec<ComplianceReport> {
        self.list()
    }
}

// -- Configuration ------------------------------------------------------------

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
}

impl AppConfig {
    /// Read `PORT` (default 8080) from the environment.
    ///
    /// An unparseable `PORT` is an error rather than a silent fallback.
    pub fn from_env() -> Result<Self, String> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|e| format!("invalid PORT {raw:?}: {e}"))?,
            Err(_) => Self::default().port,
        };
        Ok(Self { port })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { port: 8080 }
    }
}

// -- Application State --------------------------------------------------------

/// State shared by every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub reports: ReportStore,
    pub simulator: Simulator,
}

impl AppState {
    /// State with default configuration and an empty store.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// State with the given configuration and an empty store.
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            reports: ReportStore::new(),
            simulator: Simulator::new(),
        }
    }

    /// The report provider used by stored-report routes.
    pub fn provider(&self) -> &dyn ReportProvider {
        &self.reports
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
