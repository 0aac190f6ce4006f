//! About section with the two-person content toggle.

use leptos::html::Div;
use leptos::prelude::*;

use super::reveal::{RevealOptions, reveal_signal};
use super::section::SectionHeader;
use crate::content::PersonProfile;

/// About section: a toggle selects which of the two profiles is shown.
#[component]
pub fn AboutSection(persons: Vec<PersonProfile>) -> impl IntoView {
	let active = RwSignal::new(0usize);

	let buttons = persons
		.iter()
		.enumerate()
		.map(|(i, p)| {
			let name = p.name.clone();
			view! {
				<button
					class="toggle-btn"
					class:active=move || active.get() == i
					on:click=move |_| active.set(i)
				>
					{name}
				</button>
			}
		})
		.collect_view();

	let cards = persons
		.iter()
		.enumerate()
		.map(|(i, p)| {
			let p = p.clone();
			let node_ref = NodeRef::<Div>::new();
			let revealed = reveal_signal(node_ref, RevealOptions::default(), (i as u64) * 80);
			view! {
				<div
					class="person-card reveal"
					node_ref=node_ref
					class:visible=move || revealed.get()
					class:active=move || active.get() == i
				>
					<h3>{p.name}</h3>
					<p class="person-role">{p.role}</p>
					<p class="person-bio">{p.bio}</p>
					<ul class="person-highlights">
						{p.highlights
							.iter()
							.map(|h| view! { <li>{h.clone()}</li> })
							.collect_view()}
					</ul>
				</div>
			}
		})
		.collect_view();

	view! {
		<section id="about" class="section">
			<SectionHeader title="About Us" subtitle="Two makers, one studio" />
			<div class="person-toggle">
				{buttons}
				<div class="toggle-slider" class:right=move || active.get() == 1></div>
			</div>
			<div class="person-cards">{cards}</div>
		</section>
	}
}
