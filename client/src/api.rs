// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::SubmissionError;
use gloo_net::http::Request;
use registration_form_shared::form::FormValues;
use registration_form_shared::messages::registration::RegistrationResponse;
use serde::de::DeserializeOwned;

/// Parses a JSON response body. `status` is only kept to describe the failure.
fn parse_json_body<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, SubmissionError> {
	serde_json::from_str(body).map_err(|error| SubmissionError::Decode { status, error })
}

/// Decides what a registration response means: the server's message on success, or a rejection carrying the
/// server's message otherwise.
fn response_outcome(accepted: bool, status: u16, body: &str) -> Result<String, SubmissionError> {
	let RegistrationResponse { message } = parse_json_body(status, body)?;
	if accepted {
		Ok(message)
	} else {
		Err(SubmissionError::Rejected { status, message })
	}
}

/// Posts the entered form values to the server, returning the server's success message.
///
/// # Errors
///
/// When the server rejects the registration, the error is [`SubmissionError::Rejected`] carrying the server's
/// message. Other errors mean no message was received from the server.
pub async fn submit_registration(endpoint: &str, values: &FormValues) -> Result<String, SubmissionError> {
	let body = serde_json::to_string(values).map_err(SubmissionError::Encode)?;
	let response = Request::post(endpoint)
		.header("Content-Type", "application/json")
		.body(body)?
		.send()
		.await?;

	let body = response.text().await?;
	response_outcome(response.ok(), response.status(), &body)
}
