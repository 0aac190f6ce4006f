//! Skills section with animated proficiency bars.
//!
//! Each bar fills from zero to its level the first time it scrolls into
//! view, with a small stagger down the list.

use leptos::html::Div;
use leptos::prelude::*;

use super::reveal::{RevealOptions, reveal_signal};
use super::section::SectionHeader;
use crate::content::SkillGroup;

/// Bar-fill reveals want a larger slice of the element on screen than the
/// default fade-ins.
const BAR_THRESHOLD: f64 = 0.3;
/// Stagger between consecutive bars in a group.
const STAGGER_MS: u64 = 80;

/// One labeled proficiency bar.
#[component]
fn SkillBar(name: String, level: u8, delay_ms: u64) -> impl IntoView {
	let node_ref = NodeRef::<Div>::new();
	let revealed = reveal_signal(node_ref, RevealOptions::threshold(BAR_THRESHOLD), delay_ms);

	view! {
		<div class="skill-item reveal" node_ref=node_ref class:visible=move || revealed.get()>
			<div class="skill-name">
				<span>{name}</span>
				<span class="skill-level">{format!("{level}%")}</span>
			</div>
			<div class="skill-bar">
				<div
					class="skill-fill"
					style:width=move || {
						if revealed.get() { format!("{level}%") } else { "0%".to_string() }
					}
				></div>
			</div>
		</div>
	}
}

/// Skills section: one bar group per person.
#[component]
pub fn SkillsSection(groups: Vec<SkillGroup>) -> impl IntoView {
	let group_views = groups
		.iter()
		.map(|g| {
			let bars = g
				.skills
				.iter()
				.enumerate()
				.map(|(i, s)| {
					view! {
						<SkillBar
							name=s.name.clone()
							level=s.level
							delay_ms=(i as u64) * STAGGER_MS
						/>
					}
				})
				.collect_view();
			view! {
				<div class="skills-group">
					<h3 class="skills-person-header">{g.person.clone()}</h3>
					{bars}
				</div>
			}
		})
		.collect_view();

	view! {
		<section id="skills" class="section">
			<SectionHeader title="Skills" subtitle="What we bring to the table" />
			<div class="skills-grid">{group_views}</div>
		</section>
	}
}
