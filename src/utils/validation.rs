use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use validator::{ValidationError, ValidationErrors};

/// 6-16 ASCII letters, digits, `_` or `-`; or 2-5 CJK characters.
const EMP_NAME_PATTERN: &str = r"^(?:[a-zA-Z0-9_-]{6,16}|[\x{2E80}-\x{9FFF}]{2,5})$";

pub const EMP_NAME_FORMAT_MSG: &str =
    "Username must be 2-5 CJK characters or 6-16 letters, digits, underscores or hyphens";

static EMP_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMP_NAME_PATTERN).expect("valid regex"));

pub fn is_valid_emp_name(name: &str) -> bool {
    EMP_NAME_RE.is_match(name)
}

pub fn validate_emp_name(name: &str) -> Result<(), ValidationError> {
    if !is_valid_emp_name(name) {
        return Err(with_message("emp_name", EMP_NAME_FORMAT_MSG));
    }
    Ok(())
}

pub fn validate_gender(gender: &str) -> Result<(), ValidationError> {
    if gender != "M" && gender != "F" {
        return Err(with_message("gender", "Gender must be either 'M' or 'F'"));
    }
    Ok(())
}

fn with_message(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

/// Flattens validator output into one message per offending field.
pub fn field_error_map(errors: &ValidationErrors) -> BTreeMap<String, String> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let message = errs
                .first()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => e.code.to_string(),
                })
                .unwrap_or_default();
            (field.to_string(), message)
        })
        .collect()
}
