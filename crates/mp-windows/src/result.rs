//! Calculation results.
//!
//! On the wire a result is one of
//!
//! ```json
//! { "success": true,  "input": {..}, "calculations": {..}, "timestamp": "..." }
//! { "success": false, "error": "Invalid date format: ...", "timestamp": "..." }
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::delivery::{Delivery1Window, Delivery2Window};
use crate::program_start::ProgramStartDate;
use crate::request::NormalizedInput;

/// Per-stage results. Stages that did not run are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Calculations {
    /// Earliest program start.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_start_date: Option<ProgramStartDate>,
    /// Delivery 1 window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery1: Option<Delivery1Window>,
    /// Delivery 2 window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery2: Option<Delivery2Window>,
}

/// Whether the call produced calculations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The request parsed; stage results (including stage-level rule
    /// violations) are in `calculations`.
    Computed {
        /// The normalized request.
        input: NormalizedInput,
        /// Stages that ran.
        calculations: Calculations,
    },
    /// The request could not be processed at all.
    Failed {
        /// Human-readable reason.
        error: String,
    },
}

/// The full response to a calculation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculationResult {
    /// Computed stages or the reason there are none.
    pub outcome: Outcome,
    /// When the result was produced.
    pub timestamp: DateTime<Utc>,
}

impl CalculationResult {
    /// `true` when the request was processed.
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Computed { .. })
    }

    /// The stage results, on success.
    pub fn calculations(&self) -> Option<&Calculations> {
        match &self.outcome {
            Outcome::Computed { calculations, .. } => Some(calculations),
            Outcome::Failed { .. } => None,
        }
    }

    /// The normalized request, on success.
    pub fn input(&self) -> Option<&NormalizedInput> {
        match &self.outcome {
            Outcome::Computed { input, .. } => Some(input),
            Outcome::Failed { .. } => None,
        }
    }

    /// The failure reason, on failure.
    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Computed { .. } => None,
            Outcome::Failed { error } => Some(error),
        }
    }

    /// RFC 3339 UTC timestamp with millisecond precision
    /// (`2026-01-09T03:00:00.000Z`).
    pub fn timestamp_rfc3339(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

impl Serialize for CalculationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry("success", &self.is_success())?;
        match &self.outcome {
            Outcome::Computed {
                input,
                calculations,
            } => {
                map.serialize_entry("input", input)?;
                map.serialize_entry("calculations", calculations)?;
            }
            Outcome::Failed { error } => map.serialize_entry("error", error)?,
        }
        map.serialize_entry("timestamp", &self.timestamp_rfc3339())?;
        map.end()
    }
}
