// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use config::ClientConfig;
use pages::register::RegistrationView;
use sycamore::prelude::*;

mod api;
mod components;
mod config;
mod dom;
mod error;
mod pages;

fn main() {
	console_error_panic_hook::set_once();

	let config = ClientConfig::from_page();
	wasm_logger::init(wasm_logger::Config::new(config.log_level));
	log::info!(
		"Starting registration form; registrations go to {}",
		config.registration_endpoint
	);

	sycamore::render(move |ctx| {
		provide_context(ctx, config);
		view! { ctx, RegistrationView {} }
	});
}
