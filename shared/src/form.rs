// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::field::{Field, FieldValue};
use crate::validation::{
	validate_agreement, validate_fav_food, validate_fav_language, validate_field, validate_username, ValidationErrors,
};
use serde::{Deserialize, Serialize};

/// What the user has entered so far. Selector values are kept as raw text so empty and unexpected values can be
/// displayed and reported.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
	pub username: String,
	pub fav_language: String,
	pub fav_food: String,
	pub agreement: bool,
}

impl FormValues {
	/// Stores a field's new value. Checkbox fields store the checked state; the rest store text.
	pub fn apply(&mut self, field: Field, value: &FieldValue) {
		match field {
			Field::Username => self.username = value.as_text(),
			Field::FavLanguage => self.fav_language = value.as_text(),
			Field::FavFood => self.fav_food = value.as_text(),
			Field::Agreement => self.agreement = value.as_checked().unwrap_or(false),
		}
	}

	/// Checks every field at once, reporting every field's error on failure.
	pub fn validate(&self) -> Result<(), ValidationErrors> {
		let errors = ValidationErrors {
			username: validate_username(&self.username).err(),
			fav_language: validate_fav_language(&self.fav_language).err(),
			fav_food: validate_fav_food(&self.fav_food).err(),
			agreement: validate_agreement(Some(self.agreement)).err(),
		};
		if errors.is_empty() {
			Ok(())
		} else {
			Err(errors)
		}
	}

	pub fn is_valid(&self) -> bool {
		self.validate().is_ok()
	}
}

/// The banner shown after a submission attempt
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ServerResult {
	Success(String),
	Failure(String),
}

/// All state behind the registration form
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RegistrationForm {
	pub values: FormValues,
	pub errors: ValidationErrors,
	pub server_result: Option<ServerResult>,
}

impl RegistrationForm {
	pub fn new() -> Self {
		Self::default()
	}

	/// Handles an edit to one field: stores the value and re-validates only that field.
	pub fn change(&mut self, field: Field, value: FieldValue) {
		self.values.apply(field, &value);
		self.errors.set(field, validate_field(field, &value).err());
	}

	/// Whether the submit control should be enabled
	pub fn can_submit(&self) -> bool {
		self.values.is_valid()
	}

	/// The values to send for a submission, exactly as entered, or `None` if the form can't be submitted yet.
	pub fn submission(&self) -> Option<&FormValues> {
		self.values.validate().ok().map(|()| &self.values)
	}

	/// Records an accepted registration. The form starts over empty.
	pub fn record_success(&mut self, message: String) {
		self.values = FormValues::default();
		self.errors = ValidationErrors::default();
		self.server_result = Some(ServerResult::Success(message));
	}

	/// Records a rejected registration. Entered values are kept so the user can fix them.
	pub fn record_failure(&mut self, message: String) {
		self.server_result = Some(ServerResult::Failure(message));
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::validation::ValidationError;

	fn filled_form() -> RegistrationForm {
		let mut form = RegistrationForm::new();
		form.change(Field::Username, FieldValue::Text(String::from("ferris")));
		form.change(Field::FavLanguage, FieldValue::Text(String::from("rust")));
		form.change(Field::FavFood, FieldValue::Text(String::from("pizza")));
		form.change(Field::Agreement, FieldValue::Checked(true));
		form
	}

	#[test]
	fn new_form_is_empty_and_locked() {
		let form = RegistrationForm::new();
		assert_eq!(form.values, FormValues::default());
		assert!(form.errors.is_empty());
		assert!(form.server_result.is_none());
		assert!(!form.can_submit());
	}

	#[test]
	fn change_only_validates_the_changed_field() {
		let mut form = RegistrationForm::new();
		form.change(Field::Username, FieldValue::Text(String::from("ab")));
		assert_eq!(form.errors.username, Some(ValidationError::UsernameMin));
		assert_eq!(form.errors.fav_language, None);
		assert_eq!(form.errors.fav_food, None);
		assert_eq!(form.errors.agreement, None);
	}

	#[test]
	fn change_keeps_untrimmed_username() {
		let mut form = RegistrationForm::new();
		form.change(Field::Username, FieldValue::Text(String::from("  ferris ")));
		assert_eq!(form.values.username, "  ferris ");
		assert_eq!(form.errors.username, None);
	}

	#[test]
	fn agreement_toggle_clears_error() {
		let mut form = RegistrationForm::new();
		form.change(Field::Agreement, FieldValue::Checked(false));
		assert_eq!(form.errors.message(Field::Agreement), "agreement is required");
		form.change(Field::Agreement, FieldValue::Checked(true));
		assert_eq!(form.errors.message(Field::Agreement), "");
		assert!(form.values.agreement);
	}

	#[test]
	fn gate_opens_only_when_every_field_passes() {
		let mut form = filled_form();
		assert!(form.can_submit());
		form.change(Field::FavFood, FieldValue::Text(String::new()));
		assert!(!form.can_submit());
		form.change(Field::FavFood, FieldValue::Text(String::from("broccoli")));
		assert!(form.can_submit());
		form.change(Field::Agreement, FieldValue::Checked(false));
		assert!(!form.can_submit());
	}

	#[test]
	fn whole_form_validation_reports_every_field() {
		let values = FormValues {
			username: String::from("ab"),
			fav_language: String::new(),
			fav_food: String::from("pizza"),
			agreement: true,
		};
		let errors = values.validate().unwrap_err();
		assert_eq!(errors.message(Field::Username), "username must be at least 3 characters");
		assert_eq!(errors.message(Field::FavLanguage), "favLanguage is required");
		assert_eq!(errors.fav_food, None);
		assert_eq!(errors.agreement, None);
	}

	#[test]
	fn submission_sends_values_as_entered() {
		let mut form = filled_form();
		form.change(Field::Username, FieldValue::Text(String::from("  ferris  ")));
		let submitted = form.submission().unwrap();
		assert_eq!(submitted, &form.values);
		assert_eq!(submitted.username, "  ferris  ");
		assert_eq!(submitted.fav_language, "rust");
		assert_eq!(submitted.fav_food, "pizza");
		assert!(submitted.agreement);
	}

	#[test]
	fn invalid_form_has_no_submission() {
		let mut form = filled_form();
		form.change(Field::Username, FieldValue::Text(String::from("ab")));
		assert!(form.submission().is_none());
	}

	#[test]
	fn success_resets_the_form() {
		let mut form = filled_form();
		form.record_failure(String::from("Username taken"));
		form.record_success(String::from("Success! Welcome, ferris!"));
		assert_eq!(form.values, FormValues::default());
		assert!(form.errors.is_empty());
		assert_eq!(
			form.server_result,
			Some(ServerResult::Success(String::from("Success! Welcome, ferris!")))
		);
		assert!(!form.can_submit());
	}

	#[test]
	fn failure_keeps_entered_values() {
		let mut form = filled_form();
		form.server_result = Some(ServerResult::Success(String::from("Welcome!")));
		let values_before = form.values.clone();
		form.record_failure(String::from("Username is taken"));
		assert_eq!(form.values, values_before);
		assert_eq!(form.server_result, Some(ServerResult::Failure(String::from("Username is taken"))));
	}
}
