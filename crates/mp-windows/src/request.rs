//! Calculation requests as they arrive on the wire, and their normalized form.

use std::str::FromStr;

use mp_core::errors::{Error, Result};
use mp_time::Date;
use serde::{Deserialize, Deserializer, Serialize};

/// Which stages to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Calculation {
    /// Every stage whose inputs are present.
    #[default]
    All,
    /// Program start date only.
    Psd,
    /// Delivery 1 only.
    D1,
    /// Delivery 2 only.
    D2,
}

impl Calculation {
    /// Wire name (`"all"`, `"psd"`, `"d1"`, `"d2"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Calculation::All => "all",
            Calculation::Psd => "psd",
            Calculation::D1 => "d1",
            Calculation::D2 => "d2",
        }
    }

    /// Whether the program start stage runs.
    pub fn includes_program_start(&self) -> bool {
        matches!(self, Calculation::All | Calculation::Psd)
    }

    /// Whether the delivery 1 stage runs (given its inputs).
    pub fn includes_delivery1(&self) -> bool {
        matches!(self, Calculation::All | Calculation::D1)
    }

    /// Whether the delivery 2 stage runs (given its inputs).
    pub fn includes_delivery2(&self) -> bool {
        matches!(self, Calculation::All | Calculation::D2)
    }
}

impl FromStr for Calculation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Calculation::All),
            "psd" => Ok(Calculation::Psd),
            "d1" => Ok(Calculation::D1),
            "d2" => Ok(Calculation::D2),
            other => Err(Error::InvalidArgument(format!(
                "unknown calculation \"{other}\" (expected all, psd, d1 or d2)"
            ))),
        }
    }
}

impl std::fmt::Display for Calculation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request body. Every field is optional; dates are raw strings so that a
/// malformed one can be reported instead of rejected by the decoder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalculationRequest {
    /// Signup date, `YYYY-MM-DD`. Defaults to today.
    pub signup_date: Option<String>,
    /// Chosen program start date.
    pub program_start_date: Option<String>,
    /// Chosen delivery 1 date.
    pub delivery1_date: Option<String>,
    /// Cheat days extending Day 6. Defaults to 0. Integers beyond `i64`
    /// are clamped so they still reach the cheat-day range check.
    #[serde(deserialize_with = "saturating_integer")]
    pub cheat_days: Option<i64>,
    /// Stage selector. Defaults to `all`.
    pub calculation: Option<String>,
}

impl CalculationRequest {
    /// Set the signup date.
    pub fn with_signup_date(mut self, date: impl Into<String>) -> Self {
        self.signup_date = Some(date.into());
        self
    }

    /// Set the program start date.
    pub fn with_program_start_date(mut self, date: impl Into<String>) -> Self {
        self.program_start_date = Some(date.into());
        self
    }

    /// Set the delivery 1 date.
    pub fn with_delivery1_date(mut self, date: impl Into<String>) -> Self {
        self.delivery1_date = Some(date.into());
        self
    }

    /// Set the cheat days.
    pub fn with_cheat_days(mut self, cheat_days: i64) -> Self {
        self.cheat_days = Some(cheat_days);
        self
    }

    /// Set the stage selector.
    pub fn with_calculation(mut self, calculation: Calculation) -> Self {
        self.calculation = Some(calculation.as_str().to_string());
        self
    }

    /// Parse every supplied date and apply defaults.
    ///
    /// Empty strings count as absent. `today` is consulted only when the
    /// signup date is absent.
    ///
    /// # Errors
    /// [`Error::Parse`] for any malformed date, [`Error::InvalidArgument`]
    /// for an unknown selector.
    pub fn normalize(&self, today: impl FnOnce() -> Result<Date>) -> Result<NormalizedInput> {
        let signup_date = match present(&self.signup_date) {
            Some(raw) => raw.parse::<Date>()?,
            None => today()?,
        };
        let program_start_date = present(&self.program_start_date)
            .map(str::parse::<Date>)
            .transpose()?;
        let delivery1_date = present(&self.delivery1_date)
            .map(str::parse::<Date>)
            .transpose()?;
        let calculation = present(&self.calculation)
            .map(str::parse::<Calculation>)
            .transpose()?
            .unwrap_or_default();

        Ok(NormalizedInput {
            signup_date,
            program_start_date,
            delivery1_date,
            cheat_days: self.cheat_days.unwrap_or(0),
            calculation,
        })
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

fn saturating_integer<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<i64>, D::Error> {
    let Some(n) = Option::<serde_json::Number>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if let Some(v) = n.as_i64() {
        return Ok(Some(v));
    }
    if n.as_u64().is_some() {
        return Ok(Some(i64::MAX));
    }
    match n.as_f64() {
        // `as` saturates at the i64 bounds.
        Some(f) if f.fract() == 0.0 => Ok(Some(f as i64)),
        _ => Err(<D::Error as serde::de::Error>::custom(format!(
            "invalid value {n}, expected an integer"
        ))),
    }
}

/// A request with defaults applied and dates parsed. Echoed back in results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedInput {
    /// Signup date (today if none was supplied).
    pub signup_date: Date,
    /// Program start date, if supplied.
    pub program_start_date: Option<Date>,
    /// Delivery 1 date, if supplied.
    pub delivery1_date: Option<Date>,
    /// Cheat days as supplied (not yet range-checked).
    pub cheat_days: i64,
    /// Stage selector.
    pub calculation: Calculation,
}
