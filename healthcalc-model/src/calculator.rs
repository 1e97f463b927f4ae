//! Body mass index and Harris-Benedict basal metabolic rate.

use crate::measurement::Gender;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error("height must be greater than zero, got {0}")]
    NonPositiveHeight(f64),
    #[error("gender must be 'male' or 'female', got '{0}'")]
    UnknownGender(String),
    #[error("result is too large to represent")]
    NonFiniteResult,
}

fn finite(value: f64) -> Result<f64, DomainError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::NonFiniteResult)
    }
}

/// BMI from height in meters and weight in kilograms.
pub fn compute_bmi(height_m: f64, weight_kg: f64) -> Result<f64, DomainError> {
    if !(height_m > 0.0) {
        return Err(DomainError::NonPositiveHeight(height_m));
    }
    finite(weight_kg / height_m.powf(2.0))
}

/// BMR in kcal/day from height in centimeters, weight in kilograms and age
/// in years.
pub fn compute_bmr(
    height_cm: f64,
    weight_kg: f64,
    age: u32,
    gender: Gender,
) -> Result<f64, DomainError> {
    let age = age as f64;
    finite(match gender {
        Gender::Male => 88.362 + 13.397 * weight_kg + 4.799 * height_cm - 5.677 * age,
        Gender::Female => 447.593 + 9.247 * weight_kg + 3.098 * height_cm - 4.330 * age,
    })
}

/// Rounds to two decimal places, exact ties going to the even digit.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
