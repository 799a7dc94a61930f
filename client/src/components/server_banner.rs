// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use registration_form_shared::form::ServerResult;
use sycamore::prelude::*;

#[derive(Prop)]
pub struct ServerBannerProps<'a> {
	result: &'a ReadSignal<Option<ServerResult>>,
}

/// Shows the server's response to the last submission attempt
#[component]
pub fn ServerBanner<'a, G: Html>(ctx: Scope<'a>, props: ServerBannerProps<'a>) -> View<G> {
	let result = props.result;

	view! {
		ctx,
		(
			match (*result.get()).clone() {
				Some(ServerResult::Success(message)) => view! { ctx, h4(class="success") { (message) } },
				Some(ServerResult::Failure(message)) => view! { ctx, h4(class="error") { (message) } },
				None => view! { ctx, }
			}
		)
	}
}
