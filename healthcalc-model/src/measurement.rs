use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::calculator::{self, DomainError};
use crate::validate::{positive, Field, ValidationError};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    Display,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Case-insensitive parse of `"male"` / `"female"`.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        value
            .parse()
            .map_err(|_| DomainError::UnknownGender(value.to_owned()))
    }
}

/// Height in meters and weight in kilograms, both strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiRequest {
    height_m: f64,
    weight_kg: f64,
}

impl BmiRequest {
    pub fn new(height_m: f64, weight_kg: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            height_m: positive(Field::Height, height_m)?,
            weight_kg: positive(Field::Weight, weight_kg)?,
        })
    }

    pub fn height_m(&self) -> f64 {
        self.height_m
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn compute(&self) -> Result<BmiResult, DomainError> {
        calculator::compute_bmi(self.height_m, self.weight_kg).map(|bmi| BmiResult {
            bmi: calculator::round2(bmi),
        })
    }
}

/// Height in centimeters, weight in kilograms, age in years.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmrRequest {
    height_cm: f64,
    weight_kg: f64,
    age: u32,
    gender: Gender,
}

impl BmrRequest {
    pub fn new(
        height_cm: f64,
        weight_kg: f64,
        age: u32,
        gender: Gender,
    ) -> Result<Self, ValidationError> {
        if age == 0 {
            return Err(ValidationError::NotPositive(Field::Age));
        }
        Ok(Self {
            height_cm: positive(Field::Height, height_cm)?,
            weight_kg: positive(Field::Weight, weight_kg)?,
            age,
            gender,
        })
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn compute(&self) -> Result<BmrResult, DomainError> {
        calculator::compute_bmr(self.height_cm, self.weight_kg, self.age, self.gender).map(|bmr| {
            BmrResult {
                bmr: calculator::round2(bmr),
            }
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    pub bmi: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmrResult {
    pub bmr: f64,
}
