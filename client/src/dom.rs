// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use registration_form_shared::field::FieldValue;
use wasm_bindgen::JsCast;
use web_sys::{Event as WebEvent, HtmlInputElement, HtmlSelectElement};

/// Reads the name and new value of the form control that fired an event. Checkboxes report their checked state;
/// every other control reports its value.
pub fn changed_control(event: &WebEvent) -> Option<(String, FieldValue)> {
	let target = event.target()?;

	if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
		let value = if input.type_() == "checkbox" {
			FieldValue::Checked(input.checked())
		} else {
			FieldValue::Text(input.value())
		};
		return Some((input.name(), value));
	}

	let select: &HtmlSelectElement = target.dyn_ref()?;
	Some((select.name(), FieldValue::Text(select.value())))
}
