// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;
use std::str::FromStr;

/// One of the inputs on the registration form
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Field {
	Username,
	FavLanguage,
	FavFood,
	Agreement,
}

impl Field {
	pub const ALL: [Field; 4] = [Field::Username, Field::FavLanguage, Field::FavFood, Field::Agreement];

	/// The name used for this field both in the DOM and in request bodies
	pub fn name(&self) -> &'static str {
		match self {
			Self::Username => "username",
			Self::FavLanguage => "favLanguage",
			Self::FavFood => "favFood",
			Self::Agreement => "agreement",
		}
	}
}

impl fmt::Display for Field {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.name())
	}
}

#[derive(Debug, Eq, PartialEq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "\"{}\" is not a registration form field", self.0)
	}
}

impl FromStr for Field {
	type Err = UnknownField;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Field::ALL
			.into_iter()
			.find(|field| field.name() == s)
			.ok_or_else(|| UnknownField(s.to_string()))
	}
}

/// The raw value carried by an input event
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldValue {
	Text(String),
	Checked(bool),
}

impl FieldValue {
	/// The value as text. Checkbox states become `"true"` or `"false"`.
	pub fn as_text(&self) -> String {
		match self {
			Self::Text(text) => text.clone(),
			Self::Checked(checked) => checked.to_string(),
		}
	}

	/// The value as a checkbox state, or `None` if the text can't be read as one.
	pub fn as_checked(&self) -> Option<bool> {
		match self {
			Self::Checked(checked) => Some(*checked),
			Self::Text(text) => match text.trim() {
				"true" | "on" => Some(true),
				"false" | "" => Some(false),
				_ => None,
			},
		}
	}
}
