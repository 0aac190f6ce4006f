//! Top navigation bar.
//!
//! Swaps to a compact style once the page is scrolled, tracks which section
//! is currently in view to highlight its link, collapses into a toggle menu
//! on small screens, and smooth-scrolls to sections instead of letting
//! anchor navigation jump.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// A navigation target: section element id plus its link label.
#[derive(Clone, Copy)]
pub struct SectionLink {
	pub id: &'static str,
	pub label: &'static str,
}

/// Scroll offset past which the navbar takes its compact style.
const SCROLLED_AT: f64 = 80.0;
/// Slack above each section when deciding which link is active.
const ACTIVE_OFFSET: f64 = 120.0;

/// The active section is the last one, in document order, whose top edge
/// (minus the slack) has scrolled past.
fn active_section(scroll_y: f64, offsets: &[(&'static str, f64)]) -> Option<&'static str> {
	let mut current = None;
	for &(id, top) in offsets {
		if scroll_y >= top - ACTIVE_OFFSET {
			current = Some(id);
		}
	}
	current
}

/// Smooth-scroll the viewport to a section by element id.
fn scroll_to_section(id: &str) {
	let Some(el) = document().get_element_by_id(id) else {
		return;
	};
	let options = ScrollIntoViewOptions::new();
	options.set_behavior(ScrollBehavior::Smooth);
	el.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Fixed navigation bar over the given sections.
#[component]
pub fn Navbar(sections: Vec<SectionLink>) -> impl IntoView {
	let scrolled = RwSignal::new(false);
	let menu_open = RwSignal::new(false);
	let active = RwSignal::new(Option::<&'static str>::None);

	let ids: Vec<&'static str> = sections.iter().map(|s| s.id).collect();
	let handle = window_event_listener(leptos::ev::scroll, move |_| {
		let y = window().scroll_y().unwrap_or(0.0);
		scrolled.set(y > SCROLLED_AT);

		let offsets: Vec<(&'static str, f64)> = ids
			.iter()
			.filter_map(|&id| {
				let el = document().get_element_by_id(id)?;
				let el: web_sys::HtmlElement = el.dyn_into().ok()?;
				Some((id, el.offset_top() as f64))
			})
			.collect();
		active.set(active_section(y, &offsets));
	});
	on_cleanup(move || handle.remove());

	let links = sections
		.iter()
		.map(|s| {
			let SectionLink { id, label } = *s;
			view! {
				<a
					href=format!("#{id}")
					class="nav-link"
					class:active=move || active.get() == Some(id)
					on:click=move |ev| {
						ev.prevent_default();
						menu_open.set(false);
						scroll_to_section(id);
					}
				>
					{label}
				</a>
			}
		})
		.collect_view();

	view! {
		<nav class="navbar" class:scrolled=move || scrolled.get()>
			<a
				class="nav-brand"
				href="#home"
				on:click=move |ev| {
					ev.prevent_default();
					scroll_to_section("home");
				}
			>
				"C"<span class="brand-x">"x"</span>"A"
			</a>
			<button
				class="nav-toggle"
				class:active=move || menu_open.get()
				aria-label="Toggle navigation"
				on:click=move |_| menu_open.update(|open| *open = !*open)
			>
				<span></span>
				<span></span>
				<span></span>
			</button>
			<div class="nav-links" class:open=move || menu_open.get()>{links}</div>
		</nav>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const OFFSETS: &[(&str, f64)] = &[
		("home", 0.0),
		("about", 600.0),
		("projects", 1400.0),
		("contact", 2200.0),
	];

	#[test]
	fn test_active_section_tracks_scroll() {
		assert_eq!(active_section(0.0, OFFSETS), Some("home"));
		assert_eq!(active_section(479.9, OFFSETS), Some("home"));
		// 600 - 120 = 480 is where "about" takes over.
		assert_eq!(active_section(480.0, OFFSETS), Some("about"));
		assert_eq!(active_section(3000.0, OFFSETS), Some("contact"));
	}

	#[test]
	fn test_active_section_empty() {
		assert_eq!(active_section(100.0, &[]), None);
	}
}
