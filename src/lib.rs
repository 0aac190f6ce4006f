//! duo-portfolio: interactive two-person portfolio page.
//!
//! A client-side-rendered WASM app: animated particle background, navbar
//! with scroll tracking, a two-person about toggle, filterable projects,
//! scroll-triggered reveals and counters, and a simulated contact form.
//! Page content can be overridden by a JSON island in the host page.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod content;

use components::about::AboutSection;
use components::back_to_top::BackToTop;
use components::contact::ContactSection;
use components::navbar::{Navbar, SectionLink};
use components::particle_field::ParticleCanvas;
use components::projects::ProjectsSection;
use components::skills::SkillsSection;
use components::stats::StatCounter;
pub use content::PageData;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("duo-portfolio: logging initialized");
}

/// Load page content from a script element with id="page-data".
/// Expected format: JSON matching [`PageData`].
fn load_page_data() -> Option<PageData> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("page-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<PageData>(&json_text) {
		Ok(data) => {
			info!(
				"duo-portfolio: loaded {} projects, {} skill groups",
				data.projects.len(),
				data.skill_groups.len()
			);
			Some(data)
		}
		Err(e) => {
			warn!("duo-portfolio: failed to parse page data: {}", e);
			None
		}
	}
}

/// Sections the navbar links to, in document order.
fn nav_sections() -> Vec<SectionLink> {
	vec![
		SectionLink {
			id: "home",
			label: "Home",
		},
		SectionLink {
			id: "about",
			label: "About",
		},
		SectionLink {
			id: "skills",
			label: "Skills",
		},
		SectionLink {
			id: "projects",
			label: "Projects",
		},
		SectionLink {
			id: "contact",
			label: "Contact",
		},
	]
}

/// Main application component.
/// Loads page content from the DOM (with a built-in fallback) and renders
/// the full portfolio page.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let data = load_page_data().unwrap_or_else(PageData::sample);

	let stats = data
		.stats
		.iter()
		.map(|s| view! { <StatCounter value=s.value label=s.label.clone() /> })
		.collect_view();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text=data.hero.title.clone() />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<ParticleCanvas />
		<Navbar sections=nav_sections() />
		<main>
			<section id="home" class="hero">
				<h1>{data.hero.title.clone()}</h1>
				<p class="hero-subtitle">{data.hero.subtitle.clone()}</p>
				<div class="hero-stats">{stats}</div>
			</section>
			<AboutSection persons=data.persons.clone() />
			<SkillsSection groups=data.skill_groups.clone() />
			<ProjectsSection projects=data.projects.clone() />
			<ContactSection />
		</main>
		<footer class="footer">
			<p>{format!("\u{a9} {}", data.hero.title)}</p>
		</footer>
		<BackToTop />
	}
}
