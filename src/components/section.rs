//! Shared section header with a scroll-in reveal.

use leptos::html::Div;
use leptos::prelude::*;

use super::reveal::{RevealOptions, reveal_signal};

/// Heading block at the top of each page section; fades in the first time
/// it scrolls into view.
#[component]
pub fn SectionHeader(
	#[prop(into)] title: String,
	#[prop(into)] subtitle: String,
) -> impl IntoView {
	let node_ref = NodeRef::<Div>::new();
	let revealed = reveal_signal(node_ref, RevealOptions::default(), 0);

	view! {
		<div class="section-header reveal" node_ref=node_ref class:visible=move || revealed.get()>
			<h2>{title}</h2>
			<p class="section-subtitle">{subtitle}</p>
		</div>
	}
}
