//! Turns untyped JSON input into [`BmiRequest`] / [`BmrRequest`].
//!
//! Fields are checked in the order height, weight, age, gender and the first
//! failure is reported. Unknown keys are ignored and `null` is treated the
//! same as a missing key. Numbers are never coerced from strings.

use serde_json::{Map, Value};
use strum::{AsRefStr, Display};

use crate::measurement::{BmiRequest, BmrRequest, Gender};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Height,
    Weight,
    Age,
    Gender,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("request body must be a JSON object")]
    NotAnObject,
    #[error("field '{0}' is required")]
    MissingField(Field),
    #[error("field '{0}' must be a number")]
    NotANumber(Field),
    #[error("field '{0}' must be an integer")]
    NotAnInteger(Field),
    #[error("field '{0}' must be a finite number")]
    NotFinite(Field),
    #[error("field '{0}' must be greater than 0")]
    NotPositive(Field),
    #[error("field '{0}' is out of range")]
    OutOfRange(Field),
    #[error("field '{0}' must be a string")]
    NotAString(Field),
    #[error("gender must be 'male' or 'female', got '{0}'")]
    InvalidGender(String),
}

pub fn validate_bmi(input: &Value) -> Result<BmiRequest, ValidationError> {
    let fields = as_object(input)?;
    let height = number(fields, Field::Height)?;
    let weight = number(fields, Field::Weight)?;
    BmiRequest::new(height, weight)
}

pub fn validate_bmr(input: &Value) -> Result<BmrRequest, ValidationError> {
    let fields = as_object(input)?;
    let height = number(fields, Field::Height)?;
    let weight = number(fields, Field::Weight)?;
    let age = integer(fields, Field::Age)?;
    let gender = parse_gender(fields)?;
    BmrRequest::new(height, weight, age, gender)
}

impl TryFrom<&Value> for BmiRequest {
    type Error = ValidationError;

    fn try_from(input: &Value) -> Result<Self, Self::Error> {
        validate_bmi(input)
    }
}

impl TryFrom<&Value> for BmrRequest {
    type Error = ValidationError;

    fn try_from(input: &Value) -> Result<Self, Self::Error> {
        validate_bmr(input)
    }
}

fn as_object(input: &Value) -> Result<&Map<String, Value>, ValidationError> {
    input.as_object().ok_or(ValidationError::NotAnObject)
}

fn required(fields: &Map<String, Value>, field: Field) -> Result<&Value, ValidationError> {
    let key: &str = field.as_ref();
    match fields.get(key) {
        None | Some(Value::Null) => Err(ValidationError::MissingField(field)),
        Some(value) => Ok(value),
    }
}

fn number(fields: &Map<String, Value>, field: Field) -> Result<f64, ValidationError> {
    let value = required(fields, field)?
        .as_f64()
        .ok_or(ValidationError::NotANumber(field))?;
    positive(field, value)
}

/// Shared range check for real-valued measurements.
pub(crate) fn positive(field: Field, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        Err(ValidationError::NotFinite(field))
    } else if value <= 0.0 {
        Err(ValidationError::NotPositive(field))
    } else {
        Ok(value)
    }
}

fn integer(fields: &Map<String, Value>, field: Field) -> Result<u32, ValidationError> {
    let Value::Number(n) = required(fields, field)? else {
        return Err(ValidationError::NotANumber(field));
    };

    let value = match (n.as_i64(), n.as_f64()) {
        (Some(i), _) => i,
        (None, Some(f)) if f.fract() == 0.0 => {
            if f <= 0.0 {
                return Err(ValidationError::NotPositive(field));
            }
            return u32::try_from(f as i64).map_err(|_| ValidationError::OutOfRange(field));
        }
        _ => return Err(ValidationError::NotAnInteger(field)),
    };

    if value <= 0 {
        return Err(ValidationError::NotPositive(field));
    }
    u32::try_from(value).map_err(|_| ValidationError::OutOfRange(field))
}

fn parse_gender(fields: &Map<String, Value>) -> Result<Gender, ValidationError> {
    let raw = required(fields, Field::Gender)?
        .as_str()
        .ok_or(ValidationError::NotAString(Field::Gender))?;
    Gender::parse(raw).map_err(|_| ValidationError::InvalidGender(raw.to_owned()))
}
