//! Error types for chart computation.
//!
//! Every failure carries the computation stage it occurred in plus
//! structured context for diagnostics. Callers get a typed error kind,
//! never a formatting or business decision.

use std::fmt;

use crate::rules::ReportType;

/// Result type for chart computations.
pub type EngineResult<T> = Result<T, ChartError>;

/// Computation stage where an error originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Coordinate-to-zone lookup
    TimezoneResolution,
    /// Wall-clock localization and Julian Day derivation
    MomentResolution,
    /// Per-body ephemeris computation
    Positions,
    /// House cusp and angle solving
    Houses,
    /// Aspect rule configuration
    Rules,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::TimezoneResolution => "timezone_resolution",
            Stage::MomentResolution => "moment_resolution",
            Stage::Positions => "positions",
            Stage::Houses => "houses",
            Stage::Rules => "rules",
        };
        write!(f, "{name}")
    }
}

/// Structured context attached to an error.
///
/// Records the operation being performed, the entity involved and any
/// additional detail, so diagnostics don't depend on the message string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorContext {
    /// The operation being performed (e.g. "resolve_moment", "solve_houses")
    pub operation: Option<String>,
    /// The entity involved (e.g. a body name, a zone id)
    pub entity: Option<String>,
    /// Additional details about the failing input
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with an operation name.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: Some(operation.into()),
            ..Default::default()
        }
    }

    /// Set the entity involved.
    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    /// Set additional details.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(op) = &self.operation {
            parts.push(format!("operation={op}"));
        }
        if let Some(entity) = &self.entity {
            parts.push(format!("entity={entity}"));
        }
        if let Some(details) = &self.details {
            parts.push(format!("details={details}"));
        }
        write!(f, "[{}]", parts.join(", "))
    }
}

/// Error type for all chart computation failures.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum ChartError {
    /// Input validation failed (bad coordinates, unparseable date/time).
    /// Raised before any computation begins; always fatal.
    #[error("validation error: {message} {context}")]
    Validation {
        message: String,
        context: ErrorContext,
    },

    /// An injected backend failed to compute.
    ///
    /// Recoverable at body granularity for `Stage::Positions`; fatal for
    /// `Stage::Houses` (no chart without angles).
    #[error("backend computation error in {stage}: {message} {context}")]
    Backend {
        stage: Stage,
        message: String,
        context: ErrorContext,
    },

    /// No stored ruleset for the requested report type.
    /// Recoverable via the hardcoded default ruleset.
    #[error("config resolution error for {report_type}: {message}")]
    ConfigResolution {
        report_type: ReportType,
        message: String,
    },
}

impl ChartError {
    /// Shorthand for a validation error.
    pub fn validation(message: impl Into<String>, context: ErrorContext) -> Self {
        ChartError::Validation {
            message: message.into(),
            context,
        }
    }

    /// Shorthand for a backend error at a given stage.
    pub fn backend(stage: Stage, message: impl Into<String>, context: ErrorContext) -> Self {
        ChartError::Backend {
            stage,
            message: message.into(),
            context,
        }
    }

    /// Shorthand for a missing-ruleset error.
    pub fn config_resolution(report_type: ReportType, message: impl Into<String>) -> Self {
        ChartError::ConfigResolution {
            report_type,
            message: message.into(),
        }
    }

    /// The stage this error belongs to.
    pub fn stage(&self) -> Stage {
        match self {
            ChartError::Validation { .. } => Stage::MomentResolution,
            ChartError::Backend { stage, .. } => *stage,
            ChartError::ConfigResolution { .. } => Stage::Rules,
        }
    }
}
