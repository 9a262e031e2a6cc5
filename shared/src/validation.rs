//! Input validation rules for member payloads
//!
//! The regional phone format is a local `0` or the `+254` country prefix,
//! followed by nine digits whose first digit is `1` or `7`.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use validator::{ValidationError, ValidationErrors};

use crate::error::{AppError, ErrorCode};

// ── Limits ──────────────────────────────────────────────────────────

/// Member display names
pub const MAX_NAME_LEN: usize = 200;

/// Smallest accepted monthly contribution (whole units)
pub const MIN_CONTRIBUTION: u64 = 100;

/// Largest accepted monthly contribution (whole units)
pub const MAX_CONTRIBUTION: u64 = 1_000_000;

/// Contributions are accepted in multiples of this step
pub const CONTRIBUTION_STEP: u64 = 50;

/// Regional mobile number, e.g. `0712345678` or `+254722123456`
pub static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\+254|0)[17][0-9]{8}$").expect("phone pattern compiles"));

// Validation error codes, mapped onto `ErrorCode` below.
const NAME_CODE: &str = "name";
const PHONE_CODE: &str = "phone";
const CONTRIBUTION_CODE: &str = "contribution";

fn rule_error(code: &'static str, message: String) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Owned(message));
    err
}

pub fn validate_member_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(rule_error(NAME_CODE, "name must not be empty".to_string()));
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(rule_error(
            NAME_CODE,
            format!("name is too long (max {MAX_NAME_LEN} chars)"),
        ));
    }
    Ok(())
}

pub fn validate_contribution(amount: u64) -> Result<(), ValidationError> {
    if amount < MIN_CONTRIBUTION {
        return Err(rule_error(
            CONTRIBUTION_CODE,
            format!("monthly contribution must be at least {MIN_CONTRIBUTION}"),
        ));
    }
    if amount > MAX_CONTRIBUTION {
        return Err(rule_error(
            CONTRIBUTION_CODE,
            format!("monthly contribution must be at most {MAX_CONTRIBUTION}"),
        ));
    }
    if amount % CONTRIBUTION_STEP != 0 {
        return Err(rule_error(
            CONTRIBUTION_CODE,
            format!("monthly contribution must be a multiple of {CONTRIBUTION_STEP}"),
        ));
    }
    Ok(())
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut code = ErrorCode::ValidationFailed;
        let mut messages = Vec::new();
        let mut fields = serde_json::Map::new();

        let mut field_errors: Vec<(String, &Vec<ValidationError>)> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| (field.to_string(), errs))
            .collect();
        field_errors.sort_by(|a, b| a.0.cmp(&b.0));

        for (name, errs) in field_errors {
            for err in errs.iter() {
                let specific = match &*err.code {
                    NAME_CODE => ErrorCode::InvalidMemberName,
                    PHONE_CODE => ErrorCode::InvalidPhoneNumber,
                    CONTRIBUTION_CODE => ErrorCode::InvalidContribution,
                    _ => ErrorCode::ValidationFailed,
                };
                // A single failing rule keeps its specific code; several fall back to the generic one.
                code = if messages.is_empty() {
                    specific
                } else {
                    ErrorCode::ValidationFailed
                };
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{name} is invalid"));
                fields.insert(name.clone(), serde_json::Value::String(message.clone()));
                messages.push(message);
            }
        }

        AppError::with_message(code, messages.join("; ")).with_detail("fields", fields)
    }
}
