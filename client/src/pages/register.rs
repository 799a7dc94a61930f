// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::api::submit_registration;
use crate::components::server_banner::ServerBanner;
use crate::components::validation_message::ValidationMessage;
use crate::config::ClientConfig;
use crate::dom::changed_control;
use crate::error::SubmissionError;
use registration_form_shared::field::Field;
use registration_form_shared::form::RegistrationForm;
use registration_form_shared::messages::registration::{FavFood, FavLanguage};
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[component]
pub fn RegistrationView<G: Html>(ctx: Scope<'_>) -> View<G> {
	let config: &ClientConfig = use_context(ctx);

	let form_signal = create_signal(ctx, RegistrationForm::new());
	let values_signal = create_memo(ctx, || form_signal.get().values.clone());
	let errors_signal = create_memo(ctx, || form_signal.get().errors.clone());
	let server_result_signal = create_memo(ctx, || form_signal.get().server_result.clone());
	let submit_disabled_signal = create_memo(ctx, || !values_signal.get().is_valid());

	let field_change_handler = move |event: WebEvent| {
		let Some((name, value)) = changed_control(&event) else {
			log::warn!("Ignoring a change event that didn't come from a form control");
			return;
		};
		let field: Field = match name.parse() {
			Ok(field) => field,
			Err(error) => {
				log::warn!("Ignoring a change event: {}", error);
				return;
			}
		};

		form_signal.modify().change(field, value);
		log::debug!(
			"Validated {}: {:?}",
			field,
			form_signal.get().errors.get(field).map(|error| error.message())
		);
	};

	let form_submission_handler = move |event: WebEvent| {
		event.prevent_default();

		// Enter in a text box can still submit a form whose button is disabled
		let Some(values) = form_signal.get().submission().cloned() else {
			return;
		};

		let endpoint = config.registration_endpoint.clone();
		log::info!("Submitting registration for {}", values.username.trim());

		spawn_local_scoped(ctx, async move {
			match submit_registration(&endpoint, &values).await {
				Ok(message) => {
					log::info!("Registration accepted: {}", message);
					form_signal.modify().record_success(message);
				}
				Err(error) => {
					match &error {
						SubmissionError::Rejected { status, message } => {
							log::warn!("Registration rejected with status {}: {}", status, message)
						}
						_ => log::error!("{}", error),
					}
					form_signal.modify().record_failure(error.to_string());
				}
			}
		});
	};

	view! {
		ctx,
		div(id="registration") {
			h2 { "Create an Account" }
			form(id="registration_form", on:submit=form_submission_handler) {
				ServerBanner(result=server_result_signal)

				div(class="inputGroup") {
					label(for="username") { "Username:" }
					input(
						id="username",
						name="username",
						type="text",
						placeholder="Type Username",
						prop:value=values_signal.get().username.clone(),
						on:input=field_change_handler
					)
					ValidationMessage(errors=errors_signal, field=Field::Username)
				}

				div(class="inputGroup") {
					fieldset {
						legend { "Favorite Language:" }
						label {
							input(
								type="radio",
								name="favLanguage",
								value=FavLanguage::Javascript.value(),
								prop:checked=values_signal.get().fav_language == FavLanguage::Javascript.value(),
								on:change=field_change_handler
							)
							(FavLanguage::Javascript.label())
						}
						label {
							input(
								type="radio",
								name="favLanguage",
								value=FavLanguage::Rust.value(),
								prop:checked=values_signal.get().fav_language == FavLanguage::Rust.value(),
								on:change=field_change_handler
							)
							(FavLanguage::Rust.label())
						}
					}
					ValidationMessage(errors=errors_signal, field=Field::FavLanguage)
				}

				div(class="inputGroup") {
					label(for="favFood") { "Favorite Food:" }
					select(
						id="favFood",
						name="favFood",
						prop:value=values_signal.get().fav_food.clone(),
						on:change=field_change_handler
					) {
						option(value="") { "-- Select Favorite Food --" }
						option(value=FavFood::ALL[0].value()) { (FavFood::ALL[0].label()) }
						option(value=FavFood::ALL[1].value()) { (FavFood::ALL[1].label()) }
						option(value=FavFood::ALL[2].value()) { (FavFood::ALL[2].label()) }
					}
					ValidationMessage(errors=errors_signal, field=Field::FavFood)
				}

				div(class="inputGroup") {
					label {
						input(
							id="agreement",
							name="agreement",
							type="checkbox",
							prop:checked=values_signal.get().agreement,
							on:change=field_change_handler
						)
						"Agree to our terms"
					}
					ValidationMessage(errors=errors_signal, field=Field::Agreement)
				}

				div {
					input(type="submit", disabled=*submit_disabled_signal.get())
				}
			}
		}
	}
}
