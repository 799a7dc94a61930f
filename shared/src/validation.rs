// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::field::{Field, FieldValue};
use crate::messages::registration::{FavFood, FavLanguage};
use std::fmt;

pub const USERNAME_MIN_LENGTH: usize = 3;
pub const USERNAME_MAX_LENGTH: usize = 20;

/// A broken validation rule. The display text is what's shown next to the field.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValidationError {
	UsernameRequired,
	UsernameMin,
	UsernameMax,
	FavLanguageRequired,
	FavLanguageOptions,
	FavFoodRequired,
	FavFoodOptions,
	AgreementRequired,
	AgreementOptions,
}

impl ValidationError {
	pub fn message(&self) -> &'static str {
		match self {
			Self::UsernameRequired => "username is required",
			Self::UsernameMin => "username must be at least 3 characters",
			Self::UsernameMax => "username cannot exceed 20 characters",
			Self::FavLanguageRequired => "favLanguage is required",
			Self::FavLanguageOptions => "favLanguage must be either javascript or rust",
			Self::FavFoodRequired => "favFood is required",
			Self::FavFoodOptions => "favFood must be either broccoli, spaghetti or pizza",
			Self::AgreementRequired => "agreement is required",
			Self::AgreementOptions => "agreement must be accepted",
		}
	}
}

impl fmt::Display for ValidationError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.message())
	}
}

/// Checks a username, returning it trimmed if it's acceptable.
///
/// Length is counted in characters (Unicode scalar values), not UTF-16 code units, so `"😀😀"` is too short.
pub fn validate_username(username: &str) -> Result<String, ValidationError> {
	let username = username.trim();
	if username.is_empty() {
		return Err(ValidationError::UsernameRequired);
	}
	let length = username.chars().count();
	if length < USERNAME_MIN_LENGTH {
		return Err(ValidationError::UsernameMin);
	}
	if length > USERNAME_MAX_LENGTH {
		return Err(ValidationError::UsernameMax);
	}
	Ok(username.to_string())
}

pub fn validate_fav_language(fav_language: &str) -> Result<FavLanguage, ValidationError> {
	let fav_language = fav_language.trim();
	if fav_language.is_empty() {
		return Err(ValidationError::FavLanguageRequired);
	}
	fav_language.parse().map_err(|_| ValidationError::FavLanguageOptions)
}

pub fn validate_fav_food(fav_food: &str) -> Result<FavFood, ValidationError> {
	let fav_food = fav_food.trim();
	if fav_food.is_empty() {
		return Err(ValidationError::FavFoodRequired);
	}
	fav_food.parse().map_err(|_| ValidationError::FavFoodOptions)
}

/// Checks the terms agreement. `None` means the value couldn't be read as a checkbox state at all.
pub fn validate_agreement(agreement: Option<bool>) -> Result<(), ValidationError> {
	match agreement {
		Some(true) => Ok(()),
		Some(false) => Err(ValidationError::AgreementRequired),
		None => Err(ValidationError::AgreementOptions),
	}
}

/// Validates a single field's raw input against that field's rule.
pub fn validate_field(field: Field, value: &FieldValue) -> Result<(), ValidationError> {
	match field {
		Field::Username => validate_username(&value.as_text()).map(|_| ()),
		Field::FavLanguage => validate_fav_language(&value.as_text()).map(|_| ()),
		Field::FavFood => validate_fav_food(&value.as_text()).map(|_| ()),
		Field::Agreement => validate_agreement(value.as_checked()),
	}
}

/// The current error for each field, if any
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ValidationErrors {
	pub username: Option<ValidationError>,
	pub fav_language: Option<ValidationError>,
	pub fav_food: Option<ValidationError>,
	pub agreement: Option<ValidationError>,
}

impl ValidationErrors {
	pub fn get(&self, field: Field) -> Option<ValidationError> {
		match field {
			Field::Username => self.username,
			Field::FavLanguage => self.fav_language,
			Field::FavFood => self.fav_food,
			Field::Agreement => self.agreement,
		}
	}

	pub fn set(&mut self, field: Field, error: Option<ValidationError>) {
		let slot = match field {
			Field::Username => &mut self.username,
			Field::FavLanguage => &mut self.fav_language,
			Field::FavFood => &mut self.fav_food,
			Field::Agreement => &mut self.agreement,
		};
		*slot = error;
	}

	/// The message to show for a field; empty when the field is valid.
	pub fn message(&self, field: Field) -> String {
		self.get(field).map(|error| error.to_string()).unwrap_or_default()
	}

	pub fn is_empty(&self) -> bool {
		Field::ALL.into_iter().all(|field| self.get(field).is_none())
	}
}
