use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use mp_time::calendars::singapore;
use mp_time::{Calendar, HolidaySet};
use mp_windows::{CalculationRequest, CalculationResult, RuleConfig, WindowCalculator};

use crate::cli::{CalculateArgs, Cli, Command, RequestArgs};

/// Exit status when the calculator reports `success: false`.
const EXIT_REJECTED: i32 = 2;

/// Run a subcommand and return the process exit status.
pub fn run(cli: Cli) -> Result<i32> {
    let holidays = load_holidays(cli.holidays.as_deref())?;
    match cli.command {
        Command::Calculate(args) => {
            let calc = build_calculator(holidays, cli.rules.as_deref())?;
            calculate(&calc, args)
        }
        Command::Request(args) => {
            let calc = build_calculator(holidays, cli.rules.as_deref())?;
            request(&calc, args)
        }
        Command::Holidays => {
            list_holidays(&holidays);
            Ok(0)
        }
    }
}

fn load_holidays(path: Option<&Path>) -> Result<Arc<HolidaySet>> {
    let set = match path {
        Some(p) => HolidaySet::from_path(p)
            .with_context(|| format!("failed to load holiday table {}", p.display()))?,
        None => singapore::holidays_2026().context("built-in holiday table is invalid")?,
    };
    Ok(Arc::new(set))
}

fn build_calculator(holidays: Arc<HolidaySet>, rules: Option<&Path>) -> Result<WindowCalculator> {
    let calc = WindowCalculator::with_holidays(holidays);
    let Some(path) = rules else {
        return Ok(calc);
    };
    let rules = RuleConfig::from_path(path)
        .with_context(|| format!("failed to load rule config {}", path.display()))?;
    tracing::info!(path = %path.display(), ?rules, "loaded rule config");
    Ok(calc.with_rules(rules)?)
}

fn calculate(calc: &WindowCalculator, args: CalculateArgs) -> Result<i32> {
    let request = CalculationRequest {
        signup_date: args.signup,
        program_start_date: args.psd,
        delivery1_date: args.d1,
        cheat_days: args.cheat_days,
        calculation: args.calculation,
    };
    emit(&calc.calculate(&request), args.pretty)
}

fn request(calc: &WindowCalculator, args: RequestArgs) -> Result<i32> {
    let body = if args.input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read request from stdin")?;
        buf
    } else {
        std::fs::read_to_string(&args.input)
            .with_context(|| format!("failed to read {}", args.input.display()))?
    };
    emit(&calc.calculate_json(&body), args.pretty)
}

fn emit(result: &CalculationResult, pretty: bool) -> Result<i32> {
    let text = if pretty {
        serde_json::to_string_pretty(result)
    } else {
        serde_json::to_string(result)
    }
    .context("failed to serialize result")?;
    println!("{text}");
    Ok(if result.is_success() { 0 } else { EXIT_REJECTED })
}

fn list_holidays(holidays: &Arc<HolidaySet>) {
    let calendar = mp_time::DeliveryCalendar::new(Arc::clone(holidays));
    println!("{} ({} holidays)", calendar.name(), holidays.len());
    for (date, name) in holidays.iter() {
        println!("{date}  {:<9}  {name}", date.weekday().name());
    }
}
