// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use registration_form_shared::messages::registration::DEFAULT_REGISTRATION_ENDPOINT;
use std::str::FromStr;

const ENDPOINT_META_NAME: &str = "registration-endpoint";
const LOG_LEVEL_META_NAME: &str = "log-level";

/// Settings the host page can provide through `<meta>` tags
#[derive(Clone, Debug)]
pub struct ClientConfig {
	pub registration_endpoint: String,
	pub log_level: log::Level,
}

impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			registration_endpoint: String::from(DEFAULT_REGISTRATION_ENDPOINT),
			log_level: log::Level::Info,
		}
	}
}

impl ClientConfig {
	/// Reads the configuration from the current page. Anything missing or unreadable keeps its default value.
	pub fn from_page() -> Self {
		let mut config = Self::default();
		if let Some(endpoint) = meta_content(ENDPOINT_META_NAME) {
			config.registration_endpoint = endpoint;
		}
		if let Some(level) = meta_content(LOG_LEVEL_META_NAME).and_then(|level| log::Level::from_str(&level).ok()) {
			config.log_level = level;
		}
		config
	}
}

/// Gets the trimmed content of the named `<meta>` tag, if the page has one with non-empty content.
fn meta_content(name: &str) -> Option<String> {
	let document = web_sys::window()?.document()?;
	let element = document
		.query_selector(&format!("meta[name=\"{}\"]", name))
		.ok()
		.flatten()?;
	let content = element.get_attribute("content")?;
	let content = content.trim();
	if content.is_empty() {
		None
	} else {
		Some(content.to_string())
	}
}
