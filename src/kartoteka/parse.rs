//! Field extraction and validation for a single input line.
//!
//! The line grammar is `SURNAME NAME PATRONYMIC DATE PHONE GENDER`. Tokens are
//! separated by runs of ASCII whitespace and at most five splits are made, so the
//! sixth token is whatever remains of the line. Validation is fail-fast: the first
//! bad field, left to right, is the one reported.
//!
//! ```
//! use kartoteka::model::Gender;
//! use kartoteka::parse::parse_record;
//!
//! let record = parse_record("Smith John Doe 01.01.1990 123 M").unwrap();
//! assert_eq!(record.gender, Gender::Male);
//! assert_eq!(record.to_line(), "Smith John Doe 01.01.1990 123 м");
//!
//! assert!(parse_record("Smith John Doe 01.01.1990 123").is_err());
//! ```

use crate::error::{IngestError, Result};
use crate::model::{Field, Gender, PersonRecord, DATE_FORMAT};
use chrono::{Datelike, NaiveDate};
use tracing::debug;

pub const FIELD_COUNT: usize = 6;

const MALE_TOKENS: [&str; 4] = ["м", "мужской", "male", "m"];
const FEMALE_TOKENS: [&str; 4] = ["ж", "женский", "female", "f"];

fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Splits `line` into at most [`FIELD_COUNT`] tokens.
///
/// Leading whitespace produces an empty first token, and the last token keeps
/// everything after the fifth delimiter untouched (including further whitespace).
pub fn split_tokens(line: &str) -> Vec<&str> {
    let mut tokens = Vec::with_capacity(FIELD_COUNT);
    let mut rest = line;

    while tokens.len() < FIELD_COUNT - 1 {
        let Some(start) = rest.find(is_separator) else {
            break;
        };
        let after = rest[start..].trim_start_matches(is_separator);
        tokens.push(&rest[..start]);
        rest = after;
    }

    tokens.push(rest);
    tokens
}

/// Trims a name field and rejects it if nothing is left.
pub fn parse_name(token: &str, field: Field) -> Result<String> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return Err(IngestError::EmptyField(field));
    }
    Ok(trimmed.to_string())
}

/// Parses an exact `dd.mm.yyyy` date. Single-digit components, other separators,
/// year `0000` and impossible calendar days are all rejected.
///
/// Impossible days such as `30.02.2021` are errors here rather than being clamped
/// to the last day of the month.
pub fn parse_birth_date(token: &str) -> Result<NaiveDate> {
    let invalid = |reason: String| IngestError::InvalidDate {
        input: token.to_string(),
        reason,
    };

    let date = NaiveDate::parse_from_str(token, DATE_FORMAT).map_err(|e| invalid(e.to_string()))?;

    // chrono also takes unpadded or signed components, which the pattern does not allow
    let shaped = token.len() == 10
        && token.bytes().enumerate().all(|(i, b)| match i {
            2 | 5 => b == b'.',
            _ => b.is_ascii_digit(),
        });
    if !shaped {
        return Err(invalid("ожидается формат dd.mm.yyyy".to_string()));
    }

    if date.year() < 1 {
        return Err(invalid("год должен быть не меньше 0001".to_string()));
    }

    Ok(date)
}

/// Parses a base-10 signed integer. Only a leading `-` is allowed as a sign.
pub fn parse_phone_number(token: &str) -> Result<i64> {
    if token.starts_with('+') {
        return Err(IngestError::InvalidPhoneNumber {
            input: token.to_string(),
            reason: "знак '+' не допускается".to_string(),
        });
    }

    token
        .parse::<i64>()
        .map_err(|e| IngestError::InvalidPhoneNumber {
            input: token.to_string(),
            reason: e.to_string(),
        })
}

/// Lowercases a gender token with the Unicode default case mapping, which does
/// not depend on the process locale.
pub fn normalize_token(token: &str) -> String {
    token.to_lowercase()
}

pub fn parse_gender(token: &str) -> Result<Gender> {
    let normalized = normalize_token(token);
    if MALE_TOKENS.contains(&normalized.as_str()) {
        Ok(Gender::Male)
    } else if FEMALE_TOKENS.contains(&normalized.as_str()) {
        Ok(Gender::Female)
    } else {
        Err(IngestError::InvalidGender(token.to_string()))
    }
}

/// Builds a [`PersonRecord`] from one raw input line.
pub fn parse_record(line: &str) -> Result<PersonRecord> {
    let tokens = split_tokens(line);
    debug!(count = tokens.len(), "split input line");

    let &[surname, given_name, patronymic, birth_date, phone_number, gender] = tokens.as_slice()
    else {
        return Err(IngestError::MalformedInput);
    };

    Ok(PersonRecord {
        surname: parse_name(surname, Field::Surname)?,
        given_name: parse_name(given_name, Field::GivenName)?,
        patronymic: parse_name(patronymic, Field::Patronymic)?,
        birth_date: parse_birth_date(birth_date)?,
        phone_number: parse_phone_number(phone_number)?,
        gender: parse_gender(gender)?,
    })
}
