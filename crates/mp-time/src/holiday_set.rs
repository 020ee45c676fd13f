//! `HolidaySet` — an immutable, versioned table of public holidays.
//!
//! A holiday set is built once, either from a built-in table (see
//! [`crate::calendars`]) or from a TOML / JSON configuration file, and is
//! never mutated afterwards. Calendars share it behind an `Arc`.
//!
//! ```toml
//! jurisdiction = "Singapore"
//! version = "2026.1"
//! year = 2026
//!
//! [[holidays]]
//! date = "2026-01-01"
//! name = "New Year's Day"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use mp_core::ensure;
use mp_core::errors::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::date::Date;

/// A single named holiday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The calendar date of the holiday.
    pub date: Date,
    /// Display name, e.g. `"Deepavali"`.
    #[serde(default)]
    pub name: String,
}

impl Holiday {
    /// Create a named holiday.
    pub fn new(date: Date, name: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
        }
    }
}

/// An immutable set of non-working dates for one jurisdiction and version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HolidayTable", into = "HolidayTable")]
pub struct HolidaySet {
    jurisdiction: String,
    version: String,
    year: Option<u16>,
    holidays: BTreeMap<Date, String>,
}

impl HolidaySet {
    /// Build a holiday set.
    ///
    /// Duplicate dates collapse to a single entry (the first name wins).
    /// Dates outside `year`, when one is declared, are kept but logged.
    ///
    /// # Errors
    /// Returns [`Error::Precondition`] if `jurisdiction` or `version` is empty.
    pub fn new(
        jurisdiction: impl Into<String>,
        version: impl Into<String>,
        year: Option<u16>,
        holidays: impl IntoIterator<Item = Holiday>,
    ) -> Result<Self> {
        let jurisdiction = jurisdiction.into();
        let version = version.into();
        ensure!(
            !jurisdiction.trim().is_empty(),
            "holiday table jurisdiction must not be empty"
        );
        ensure!(
            !version.trim().is_empty(),
            "holiday table for {jurisdiction} must declare a version"
        );

        let mut map = BTreeMap::new();
        for holiday in holidays {
            if let Some(y) = year {
                if holiday.date.year() != y {
                    tracing::warn!(
                        %jurisdiction,
                        %version,
                        date = %holiday.date,
                        declared_year = y,
                        "holiday falls outside the table's declared year"
                    );
                }
            }
            map.entry(holiday.date).or_insert(holiday.name);
        }

        Ok(Self {
            jurisdiction,
            version,
            year,
            holidays: map,
        })
    }

    /// An empty set, useful for calendars that only observe Sundays.
    pub fn empty(jurisdiction: impl Into<String>, version: impl Into<String>) -> Result<Self> {
        Self::new(jurisdiction, version, None, std::iter::empty())
    }

    /// Parse a holiday table from TOML.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| Error::Config(format!("invalid holiday table: {e}")))
    }

    /// Parse a holiday table from JSON.
    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| Error::Config(format!("invalid holiday table: {e}")))
    }

    /// Load a holiday table from disk. Files ending in `.json` are parsed as
    /// JSON, everything else as TOML.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let set = if is_json {
            Self::from_json_str(&text)?
        } else {
            Self::from_toml_str(&text)?
        };
        tracing::info!(
            path = %path.display(),
            label = %set.label(),
            holidays = set.len(),
            "loaded holiday table"
        );
        Ok(set)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Jurisdiction the table applies to (e.g. `"Singapore"`).
    pub fn jurisdiction(&self) -> &str {
        &self.jurisdiction
    }

    /// Version tag of the table (e.g. `"2026.1"`).
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Declared year, if the table covers a single year.
    pub fn year(&self) -> Option<u16> {
        self.year
    }

    /// `"<jurisdiction> <version>"`, used in logs and calendar names.
    pub fn label(&self) -> String {
        format!("{} {}", self.jurisdiction, self.version)
    }

    /// Return `true` if `date` is a listed holiday.
    pub fn contains(&self, date: Date) -> bool {
        self.holidays.contains_key(&date)
    }

    /// Return the holiday's name if `date` is listed.
    pub fn name_of(&self, date: Date) -> Option<&str> {
        self.holidays.get(&date).map(String::as_str)
    }

    /// Number of distinct holiday dates.
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Return `true` if no holidays are listed.
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    /// Iterate over `(date, name)` pairs in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (Date, &str)> {
        self.holidays.iter().map(|(d, n)| (*d, n.as_str()))
    }
}

// ── Serde representation ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct HolidayTable {
    jurisdiction: String,
    version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    year: Option<u16>,
    #[serde(default)]
    holidays: Vec<Holiday>,
}

impl TryFrom<HolidayTable> for HolidaySet {
    type Error = Error;

    fn try_from(table: HolidayTable) -> Result<Self> {
        HolidaySet::new(table.jurisdiction, table.version, table.year, table.holidays)
    }
}

impl From<HolidaySet> for HolidayTable {
    fn from(set: HolidaySet) -> Self {
        HolidayTable {
            jurisdiction: set.jurisdiction,
            version: set.version,
            year: set.year,
            holidays: set
                .holidays
                .into_iter()
                .map(|(date, name)| Holiday { date, name })
                .collect(),
        }
    }
}
