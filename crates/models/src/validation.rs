//! Field-level checks shared by the entity payload schemas. Every check
//! fails fast with a `ModelError::Validation` naming the offending field.
use chrono::NaiveDate;

use crate::errors::ModelError;

pub fn not_blank(field: &str, value: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::Validation(format!("\"{field}\" is required")));
    }
    Ok(())
}

pub fn one_of(field: &str, value: &str, allowed: &[&str]) -> Result<(), ModelError> {
    if !allowed.contains(&value) {
        return Err(ModelError::Validation(format!(
            "\"{field}\" must be one of [{}]",
            allowed.join(", ")
        )));
    }
    Ok(())
}

pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, ModelError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        ModelError::Validation(format!("\"{field}\" must be a valid date (YYYY-MM-DD)"))
    })
}

pub fn parse_date_opt(field: &str, value: Option<&str>) -> Result<Option<NaiveDate>, ModelError> {
    match value {
        Some(v) => parse_date(field, v).map(Some),
        None => Ok(None),
    }
}

pub fn in_range(field: &str, value: i32, min: i32, max: i32) -> Result<(), ModelError> {
    if value < min || value > max {
        return Err(ModelError::Validation(format!(
            "\"{field}\" must be between {min} and {max}"
        )));
    }
    Ok(())
}

pub fn non_negative(field: &str, value: i32) -> Result<(), ModelError> {
    if value < 0 {
        return Err(ModelError::Validation(format!("\"{field}\" must not be negative")));
    }
    Ok(())
}
