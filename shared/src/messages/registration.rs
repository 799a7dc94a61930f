// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::Deserialize;
use std::str::FromStr;

/// The registration endpoint used when the host page doesn't configure one
pub const DEFAULT_REGISTRATION_ENDPOINT: &str = "https://webapis.bloomtechdev.com/registration";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FavLanguage {
	Javascript,
	Rust,
}

impl FavLanguage {
	pub const ALL: [FavLanguage; 2] = [FavLanguage::Javascript, FavLanguage::Rust];

	pub fn value(&self) -> &'static str {
		match self {
			Self::Javascript => "javascript",
			Self::Rust => "rust",
		}
	}

	pub fn label(&self) -> &'static str {
		match self {
			Self::Javascript => "JavaScript",
			Self::Rust => "Rust",
		}
	}
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FavFood {
	Broccoli,
	Spaghetti,
	Pizza,
}

impl FavFood {
	/// Options in the order they're offered in the food selector
	pub const ALL: [FavFood; 3] = [FavFood::Pizza, FavFood::Spaghetti, FavFood::Broccoli];

	pub fn value(&self) -> &'static str {
		match self {
			Self::Broccoli => "broccoli",
			Self::Spaghetti => "spaghetti",
			Self::Pizza => "pizza",
		}
	}

	pub fn label(&self) -> &'static str {
		match self {
			Self::Broccoli => "Broccoli",
			Self::Spaghetti => "Spaghetti",
			Self::Pizza => "Pizza",
		}
	}
}

/// Returned when text doesn't name one of an enumeration's options
#[derive(Debug, Eq, PartialEq)]
pub struct NotAnOption;

impl FromStr for FavLanguage {
	type Err = NotAnOption;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL.into_iter().find(|option| option.value() == s).ok_or(NotAnOption)
	}
}

impl FromStr for FavFood {
	type Err = NotAnOption;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL.into_iter().find(|option| option.value() == s).ok_or(NotAnOption)
	}
}

/// Response body from the server for both accepted and rejected registrations
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct RegistrationResponse {
	pub message: String,
}
