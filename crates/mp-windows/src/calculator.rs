//! `WindowCalculator` — runs the program start, delivery 1 and delivery 2
//! rules for one request.
//!
//! The calculator owns its delivery calendar (the holiday table is shared
//! behind an `Arc`), its rule constants, and a [`Clock`]. It holds no mutable
//! state, so one instance can serve any number of callers.

use std::sync::Arc;

use mp_core::errors::Result;
use mp_time::calendars::singapore;
use mp_time::{Calendar, Date, DeliveryCalendar, HolidaySet};

use crate::clock::{Clock, SystemClock};
use crate::config::RuleConfig;
use crate::delivery::{delivery1_window, delivery2_window, Delivery1Window, Delivery2Window};
use crate::program_start::{program_start_date, ProgramStartDate};
use crate::request::{CalculationRequest, NormalizedInput};
use crate::result::{CalculationResult, Calculations, Outcome};

/// Computes the date windows of a meal-prep program.
#[derive(Debug, Clone)]
pub struct WindowCalculator<K = SystemClock> {
    calendar: DeliveryCalendar,
    rules: RuleConfig,
    clock: K,
}

impl WindowCalculator<SystemClock> {
    /// Create a calculator over `calendar` with default rules and the
    /// system clock.
    pub fn new(calendar: DeliveryCalendar) -> Self {
        Self {
            calendar,
            rules: RuleConfig::default(),
            clock: SystemClock,
        }
    }

    /// Create a calculator over a shared holiday table.
    pub fn with_holidays(holidays: Arc<HolidaySet>) -> Self {
        Self::new(DeliveryCalendar::new(holidays))
    }

    /// Calculator using the built-in Singapore 2026 holiday table.
    pub fn singapore_2026() -> Result<Self> {
        Ok(Self::new(singapore::holidays_2026()?.into()))
    }
}

impl<K: Clock> WindowCalculator<K> {
    /// Replace the rule constants.
    ///
    /// # Errors
    /// If `rules` fails [`RuleConfig::validate`].
    pub fn with_rules(mut self, rules: RuleConfig) -> Result<Self> {
        rules.validate()?;
        self.rules = rules;
        Ok(self)
    }

    /// Replace the clock.
    pub fn with_clock<K2: Clock>(self, clock: K2) -> WindowCalculator<K2> {
        WindowCalculator {
            calendar: self.calendar,
            rules: self.rules,
            clock,
        }
    }

    /// The delivery calendar in use.
    pub fn calendar(&self) -> &DeliveryCalendar {
        &self.calendar
    }

    /// The rule constants in use.
    pub fn rules(&self) -> &RuleConfig {
        &self.rules
    }

    /// Earliest program start for a signup.
    pub fn program_start_date(&self, signup: Date) -> Result<ProgramStartDate> {
        program_start_date(signup, &self.rules)
    }

    /// Delivery 1 window for a signup and program start.
    pub fn delivery1(&self, signup: Date, program_start: Date) -> Result<Delivery1Window> {
        delivery1_window(signup, program_start, &self.calendar, &self.rules)
    }

    /// Delivery 2 window for a delivery 1 date, program start, and cheat
    /// days.
    pub fn delivery2(
        &self,
        delivery1: Date,
        program_start: Date,
        cheat_days: i64,
    ) -> Result<Delivery2Window> {
        delivery2_window(delivery1, program_start, cheat_days, &self.calendar, &self.rules)
    }

    /// Process a request.
    ///
    /// Never fails: a request that cannot be processed yields a result with
    /// `success: false` and the reason.
    pub fn calculate(&self, request: &CalculationRequest) -> CalculationResult {
        let outcome = match self.run(request) {
            Ok((input, calculations)) => Outcome::Computed {
                input,
                calculations,
            },
            Err(e) => {
                if e.is_input_error() {
                    tracing::warn!(error = %e, "calculation request rejected");
                } else {
                    tracing::error!(error = %e, "calculation failed");
                }
                Outcome::Failed {
                    error: e.to_string(),
                }
            }
        };
        CalculationResult {
            outcome,
            timestamp: self.clock.now(),
        }
    }

    /// Decode a JSON request body and process it.
    ///
    /// A body that is not a valid request object yields a failed result.
    pub fn calculate_json(&self, body: &str) -> CalculationResult {
        match serde_json::from_str::<CalculationRequest>(body) {
            Ok(request) => self.calculate(&request),
            Err(e) => {
                tracing::warn!(error = %e, "undecodable request body");
                CalculationResult {
                    outcome: Outcome::Failed {
                        error: format!("Invalid request body: {e}"),
                    },
                    timestamp: self.clock.now(),
                }
            }
        }
    }

    fn run(&self, request: &CalculationRequest) -> Result<(NormalizedInput, Calculations)> {
        let input = request.normalize(|| self.clock.today())?;
        let selector = input.calculation;
        tracing::debug!(
            signup = %input.signup_date,
            calculation = %selector,
            calendar = %self.calendar.name(),
            "calculating windows"
        );

        let mut calculations = Calculations::default();

        if selector.includes_program_start() {
            calculations.program_start_date = Some(self.program_start_date(input.signup_date)?);
        }

        if selector.includes_delivery1() {
            if let Some(psd) = input.program_start_date {
                calculations.delivery1 = Some(self.delivery1(input.signup_date, psd)?);
            }
        }

        if selector.includes_delivery2() {
            if let (Some(d1), Some(psd)) = (input.delivery1_date, input.program_start_date) {
                calculations.delivery2 = Some(self.delivery2(d1, psd, input.cheat_days)?);
            }
        }

        Ok((input, calculations))
    }
}
