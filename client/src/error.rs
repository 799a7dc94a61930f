// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

/// Errors that can occur while submitting a registration
pub enum SubmissionError {
	/// The registration couldn't be encoded as JSON
	Encode(serde_json::Error),
	/// The request couldn't be built or sent, or the response body couldn't be read
	Http(gloo_net::Error),
	/// The server responded, but not with a message we understand
	Decode { status: u16, error: serde_json::Error },
	/// The server refused the registration and told us why
	Rejected { status: u16, message: String },
}

impl From<gloo_net::Error> for SubmissionError {
	fn from(error: gloo_net::Error) -> Self {
		Self::Http(error)
	}
}

impl fmt::Display for SubmissionError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Encode(error) => write!(f, "Failed to prepare registration data: {}", error),
			Self::Http(error) => write!(f, "Failed to reach the registration server: {}", error),
			Self::Decode { status, error } => write!(
				f,
				"The registration server sent an unreadable response (status {}): {}",
				status, error
			),
			Self::Rejected { message, .. } => write!(f, "{}", message),
		}
	}
}
