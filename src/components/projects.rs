//! Projects section with category filtering.
//!
//! Filter buttons are derived from the project categories. Cards outside
//! the active filter are hidden; cards coming back get a short fade-in
//! animation class, removed once it has played.

use std::time::Duration;

use leptos::html::Div;
use leptos::prelude::*;

use super::reveal::{RevealOptions, reveal_signal};
use super::section::SectionHeader;
use crate::content::Project;

/// The filter value that shows every card.
const ALL_FILTER: &str = "all";
/// How long re-shown cards keep their fade-in animation class.
const FADE_MS: u64 = 500;

/// Whether a card in `category` passes the active filter.
fn matches_filter(filter: &str, category: &str) -> bool {
	filter == ALL_FILTER || filter == category
}

/// Button label for a category value.
fn filter_label(category: &str) -> String {
	let mut chars = category.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
		None => String::new(),
	}
}

/// Projects section: filter bar plus the card grid.
#[component]
pub fn ProjectsSection(projects: Vec<Project>) -> impl IntoView {
	let filter = RwSignal::new(ALL_FILTER.to_string());
	let fading = RwSignal::new(false);

	let mut categories: Vec<String> = vec![ALL_FILTER.to_string()];
	for p in &projects {
		if !categories.contains(&p.category) {
			categories.push(p.category.clone());
		}
	}

	let buttons = categories
		.iter()
		.map(|c| {
			let label = filter_label(c);
			let value = c.clone();
			let selected = c.clone();
			view! {
				<button
					class="filter-btn"
					class:active=move || filter.get() == value
					on:click=move |_| {
						filter.set(selected.clone());
						fading.set(true);
						set_timeout(move || fading.set(false), Duration::from_millis(FADE_MS));
					}
				>
					{label}
				</button>
			}
		})
		.collect_view();

	let cards = projects
		.iter()
		.enumerate()
		.map(|(i, p)| {
			let p = p.clone();
			let node_ref = NodeRef::<Div>::new();
			let revealed = reveal_signal(node_ref, RevealOptions::default(), (i as u64) * 80);
			let category = p.category.clone();
			let visible = Signal::derive(move || matches_filter(&filter.get(), &category));
			view! {
				<div
					class="project-card reveal"
					node_ref=node_ref
					class:visible=move || revealed.get()
					class:hidden=move || !visible.get()
					class=("fade-in", move || visible.get() && fading.get())
				>
					<span class="project-category">{filter_label(&p.category)}</span>
					<h3>{p.title}</h3>
					<p>{p.description}</p>
					<div class="project-tags">
						{p.tags.iter().map(|t| view! { <span class="tag">{t.clone()}</span> }).collect_view()}
					</div>
				</div>
			}
		})
		.collect_view();

	view! {
		<section id="projects" class="section">
			<SectionHeader title="Projects" subtitle="Selected work we are proud of" />
			<div class="project-filters">{buttons}</div>
			<div class="project-grid">{cards}</div>
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_all_filter_matches_everything() {
		assert!(matches_filter("all", "web"));
		assert!(matches_filter("all", "design"));
	}

	#[test]
	fn test_category_filter_is_exact() {
		assert!(matches_filter("web", "web"));
		assert!(!matches_filter("web", "mobile"));
		assert!(!matches_filter("mobile", "web"));
	}

	#[test]
	fn test_filter_label_capitalizes() {
		assert_eq!(filter_label("web"), "Web");
		assert_eq!(filter_label(""), "");
	}
}
