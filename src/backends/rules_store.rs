//! Rules store boundary.
//!
//! The production system keeps per-report-type rulesets in a document
//! store; this trait is that dependency made explicit. The in-memory
//! implementation decouples tests and local runs from any database.

use std::collections::BTreeMap;

use crate::error::{ChartError, EngineResult};
use crate::rules::{default_config, AspectRuleConfig, ReportType};

/// Fetches the stored base ruleset for a report type.
///
/// The returned document is a private copy; the store's own state is
/// read-only from the engine's perspective.
pub trait RulesStore: Send + Sync {
    /// Fetch the ruleset for a report type.
    ///
    /// A missing ruleset is a `ConfigResolution` error, which callers
    /// recover from with the hardcoded defaults.
    fn get(&self, report_type: ReportType) -> EngineResult<AspectRuleConfig>;
}

/// In-memory rules store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRulesStore {
    docs: BTreeMap<ReportType, AspectRuleConfig>,
}

impl InMemoryRulesStore {
    /// Empty store; every fetch is a `ConfigResolution` miss.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the default ruleset for every report type.
    pub fn with_defaults() -> Self {
        let mut docs = BTreeMap::new();
        for report_type in [ReportType::Natal, ReportType::Transit, ReportType::Synastry] {
            docs.insert(report_type, default_config(report_type));
        }
        Self { docs }
    }

    /// Insert or replace the ruleset for a report type.
    pub fn insert(&mut self, config: AspectRuleConfig) {
        self.docs.insert(config.report_type, config);
    }

    /// Insert a ruleset from its stored JSON document form.
    pub fn insert_doc(&mut self, doc: &str) -> EngineResult<()> {
        let config: AspectRuleConfig = serde_json::from_str(doc).map_err(|e| {
            ChartError::validation(
                format!("malformed rules document: {e}"),
                crate::error::ErrorContext::new("parse_rules_doc"),
            )
        })?;
        self.insert(config);
        Ok(())
    }
}

impl RulesStore for InMemoryRulesStore {
    fn get(&self, report_type: ReportType) -> EngineResult<AspectRuleConfig> {
        self.docs.get(&report_type).cloned().ok_or_else(|| {
            ChartError::config_resolution(report_type, "no stored ruleset for report type")
        })
    }
}
