use anyhow::{anyhow, bail, Context, Result};
use chrono::{Local, NaiveDate};
use colored::Colorize;
use form_engine::validators::parse_calendar_date;
use form_engine::{shared_signup_schema, EngineConfig, Field, FormRecord, FormSession};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Edits run in a fixed order: every `sets` entry, then `checks`, then `unchecks`
pub struct ValidateArgs {
    pub record: PathBuf,
    pub today: Option<String>,
    pub stop_on_first: bool,
    pub sets: Vec<String>,
    pub checks: Vec<String>,
    pub unchecks: Vec<String>,
    pub json: bool,
}

/// Returns whether the record passed
pub fn execute(config: &EngineConfig, args: ValidateArgs) -> Result<bool> {
    let record = read_record(&args.record)?;
    let today = evaluation_date(config, args.today.as_deref())?;

    let mut options = config.validation.options();
    options.stop_on_first_field_error |= args.stop_on_first;

    let mut session = FormSession::with_record(shared_signup_schema(), record).options(options);

    for assignment in &args.sets {
        let (field, value) = split_assignment(assignment)?;
        session
            .edit(field, value)
            .with_context(|| format!("Cannot set {}", field))?;
    }
    for assignment in &args.checks {
        let (field, item) = split_assignment(assignment)?;
        session
            .toggle(field, item, true)
            .with_context(|| format!("Cannot check {}", field))?;
    }
    for assignment in &args.unchecks {
        let (field, item) = split_assignment(assignment)?;
        session
            .toggle(field, item, false)
            .with_context(|| format!("Cannot uncheck {}", field))?;
    }

    debug!(%today, "validating record");
    let valid = session.submit_on(today).is_accepted();
    let result = session
        .last_result()
        .ok_or_else(|| anyhow!("No validation result"))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(valid);
    }

    if valid {
        println!("{}", "✓ Record is valid".green().bold());
    } else {
        println!(
            "{}",
            format!("✗ {} field(s) failed validation", result.errors.len())
                .red()
                .bold()
        );
        println!();
        let record = session.record();
        for (field, message) in result.errors.iter() {
            println!(
                "  {:<16} {} {}",
                field.to_string().cyan(),
                message,
                format!("(got {:?})", shown_value(record, field)).dimmed()
            );
        }
    }

    Ok(valid)
}

/// Submitted value as echoed back to the user, secrets masked
fn shown_value(record: &FormRecord, field: Field) -> String {
    if field.is_secret() && !record.get(field).is_unset() {
        "********".to_string()
    } else {
        record.get(field).to_string()
    }
}

fn read_record(path: &Path) -> Result<FormRecord> {
    let content = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read record from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read record file: {:?}", path))?
    };

    serde_json::from_str(&content).with_context(|| format!("Invalid record: {:?}", path))
}

/// Command line date, then the configured date, then the local calendar date
fn evaluation_date(config: &EngineConfig, flag: Option<&str>) -> Result<NaiveDate> {
    match flag {
        Some(text) => parse_calendar_date(text)
            .ok_or_else(|| anyhow!("Invalid --today date: {} (expected YYYY-MM-DD)", text)),
        None => Ok(config
            .validation
            .today
            .unwrap_or_else(|| Local::now().date_naive())),
    }
}

fn split_assignment(assignment: &str) -> Result<(Field, &str)> {
    let Some((name, value)) = assignment.split_once('=') else {
        bail!("Expected FIELD=VALUE, got {:?}", assignment);
    };
    let field = name.trim().parse::<Field>()?;
    Ok((field, value))
}
