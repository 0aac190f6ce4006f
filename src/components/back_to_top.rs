//! Floating back-to-top button.

use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollToOptions};

/// Scroll offset past which the button becomes visible.
const VISIBLE_AT: f64 = 500.0;

/// Button that appears after scrolling down and smooth-scrolls back to the
/// top of the page.
#[component]
pub fn BackToTop() -> impl IntoView {
	let visible = RwSignal::new(false);

	let handle = window_event_listener(leptos::ev::scroll, move |_| {
		visible.set(window().scroll_y().unwrap_or(0.0) > VISIBLE_AT);
	});
	on_cleanup(move || handle.remove());

	view! {
		<button
			class="back-to-top"
			class:visible=move || visible.get()
			aria-label="Back to top"
			on:click=move |_| {
				let options = ScrollToOptions::new();
				options.set_top(0.0);
				options.set_behavior(ScrollBehavior::Smooth);
				window().scroll_to_with_scroll_to_options(&options);
			}
		>
			"\u{2191}"
		</button>
	}
}
