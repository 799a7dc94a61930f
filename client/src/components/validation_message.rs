// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use registration_form_shared::field::Field;
use registration_form_shared::validation::ValidationErrors;
use sycamore::prelude::*;

#[derive(Prop)]
pub struct ValidationMessageProps<'a> {
	errors: &'a ReadSignal<ValidationErrors>,
	field: Field,
}

/// The inline error text shown under a field. Renders nothing while the field is valid.
#[component]
pub fn ValidationMessage<'a, G: Html>(ctx: Scope<'a>, props: ValidationMessageProps<'a>) -> View<G> {
	let errors = props.errors;
	let field = props.field;
	let message = create_memo(ctx, move || errors.get().message(field));
	let message_id = format!("{}_validation", field.name());

	view! {
		ctx,
		(
			if message.get().is_empty() {
				view! { ctx, }
			} else {
				let message_id = message_id.clone();
				view! {
					ctx,
					div(id=message_id, class="validation") { ((*message.get()).clone()) }
				}
			}
		)
	}
}
