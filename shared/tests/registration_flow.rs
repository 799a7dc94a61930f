// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use registration_form_shared::field::{Field, FieldValue};
use registration_form_shared::form::{FormValues, RegistrationForm, ServerResult};
use registration_form_shared::messages::registration::RegistrationResponse;
use serde_json::json;

fn type_into(form: &mut RegistrationForm, field: Field, text: &str) {
	form.change(field, FieldValue::Text(text.to_string()));
}

#[test]
fn example_form_is_locked_with_inline_errors() {
	let mut form = RegistrationForm::new();
	type_into(&mut form, Field::Username, "ab");
	type_into(&mut form, Field::FavLanguage, "");
	type_into(&mut form, Field::FavFood, "pizza");
	form.change(Field::Agreement, FieldValue::Checked(true));

	assert!(!form.can_submit());
	assert!(form.submission().is_none());
	assert_eq!(form.errors.message(Field::Username), "username must be at least 3 characters");
	assert_eq!(form.errors.message(Field::FavLanguage), "favLanguage is required");
	assert_eq!(form.errors.message(Field::FavFood), "");
	assert_eq!(form.errors.message(Field::Agreement), "");
}

#[test]
fn out_of_set_selections_report_options_errors() {
	let mut form = RegistrationForm::new();
	type_into(&mut form, Field::FavLanguage, "cobol");
	type_into(&mut form, Field::FavFood, "sushi");
	assert_eq!(
		form.errors.message(Field::FavLanguage),
		"favLanguage must be either javascript or rust"
	);
	assert_eq!(
		form.errors.message(Field::FavFood),
		"favFood must be either broccoli, spaghetti or pizza"
	);
}

#[test]
fn gate_matches_per_field_validity() {
	let usernames = ["", "ab", "abc", "  ferris  ", "abcdefghijklmnopqrstu"];
	let languages = ["", "rust", "javascript", "go"];
	let foods = ["", "pizza", "broccoli", "kale"];
	for username in usernames {
		for language in languages {
			for food in foods {
				for agreement in [false, true] {
					let mut form = RegistrationForm::new();
					type_into(&mut form, Field::Username, username);
					type_into(&mut form, Field::FavLanguage, language);
					type_into(&mut form, Field::FavFood, food);
					form.change(Field::Agreement, FieldValue::Checked(agreement));
					assert_eq!(form.can_submit(), form.errors.is_empty(), "{:?}", form.values);
				}
			}
		}
	}
}

#[test]
fn submit_then_success_then_failure() {
	let mut form = RegistrationForm::new();
	type_into(&mut form, Field::Username, "ferris");
	type_into(&mut form, Field::FavLanguage, "javascript");
	type_into(&mut form, Field::FavFood, "spaghetti");
	form.change(Field::Agreement, FieldValue::Checked(true));

	let submitted = form.submission().expect("form should be submittable").clone();
	assert_eq!(
		submitted,
		FormValues {
			username: String::from("ferris"),
			fav_language: String::from("javascript"),
			fav_food: String::from("spaghetti"),
			agreement: true,
		}
	);

	form.record_success(String::from("Success! Welcome, ferris!"));
	assert!(!form.can_submit());
	assert_eq!(form.values.username, "");

	type_into(&mut form, Field::Username, "ferris");
	type_into(&mut form, Field::FavLanguage, "rust");
	type_into(&mut form, Field::FavFood, "pizza");
	form.change(Field::Agreement, FieldValue::Checked(true));
	form.record_failure(String::from("Username is taken"));
	assert_eq!(form.server_result, Some(ServerResult::Failure(String::from("Username is taken"))));
	assert_eq!(form.values.username, "ferris");
	assert!(form.can_submit());
}

#[test]
fn request_body_is_the_entered_values() {
	let mut form = RegistrationForm::new();
	type_into(&mut form, Field::Username, "  ferris  ");
	type_into(&mut form, Field::FavLanguage, "rust");
	type_into(&mut form, Field::FavFood, "broccoli");
	form.change(Field::Agreement, FieldValue::Checked(true));

	let body = serde_json::to_value(form.submission().expect("form should be submittable")).unwrap();
	assert_eq!(body, serde_json::to_value(&form.values).unwrap());
	assert_eq!(
		body,
		json!({
			"username": "  ferris  ",
			"favLanguage": "rust",
			"favFood": "broccoli",
			"agreement": true,
		})
	);
}

#[test]
fn response_message_is_read() {
	let response: RegistrationResponse =
		serde_json::from_str(r#"{"message":"Sorry! Username is taken","extra":1}"#).unwrap();
	assert_eq!(response.message, "Sorry! Username is taken");
}
