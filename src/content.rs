//! Typed page content for the portfolio.
//!
//! The page body (hero copy, the two profiles, skills, projects, stats) is
//! data, not markup. It can be overridden by a JSON island in the host page;
//! [`PageData::sample`] is the built-in dataset used when no island exists.

use serde::Deserialize;

/// Headline copy for the hero section.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct HeroContent {
	pub title: String,
	pub subtitle: String,
}

/// One of the two people behind the portfolio.
#[derive(Clone, Debug, Deserialize)]
pub struct PersonProfile {
	pub name: String,
	pub role: String,
	pub bio: String,
	/// Short bullet points shown on the person card.
	#[serde(default)]
	pub highlights: Vec<String>,
}

/// A single skill with its proficiency level.
#[derive(Clone, Debug, Deserialize)]
pub struct Skill {
	pub name: String,
	/// Percentage in `0..=100`, rendered as the bar fill width.
	pub level: u8,
}

/// The skills belonging to one person.
#[derive(Clone, Debug, Deserialize)]
pub struct SkillGroup {
	pub person: String,
	pub skills: Vec<Skill>,
}

/// A portfolio project card.
#[derive(Clone, Debug, Deserialize)]
pub struct Project {
	pub title: String,
	pub description: String,
	/// Filter category (e.g. "web", "mobile", "design").
	pub category: String,
	#[serde(default)]
	pub tags: Vec<String>,
}

/// An animated headline number in the hero section.
#[derive(Clone, Debug, Deserialize)]
pub struct Stat {
	pub label: String,
	pub value: u32,
}

/// Complete page content.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PageData {
	pub hero: HeroContent,
	pub persons: Vec<PersonProfile>,
	pub stats: Vec<Stat>,
	pub skill_groups: Vec<SkillGroup>,
	pub projects: Vec<Project>,
}

impl PageData {
	/// Built-in content used when the host page ships no data island.
	pub fn sample() -> Self {
		Self {
			hero: HeroContent {
				title: "Chari & Angie".into(),
				subtitle: "We design and build delightful things for the web.".into(),
			},
			persons: vec![
				PersonProfile {
					name: "Chari".into(),
					role: "Full-Stack Developer".into(),
					bio: "Builds fast, resilient web applications end to end, from \
					      database schemas to pixel-level interactions."
						.into(),
					highlights: vec![
						"Rust & WebAssembly".into(),
						"Distributed systems".into(),
						"Performance tuning".into(),
					],
				},
				PersonProfile {
					name: "Angie".into(),
					role: "Product Designer".into(),
					bio: "Turns fuzzy ideas into crisp interfaces, with a soft spot \
					      for motion design and accessible color systems."
						.into(),
					highlights: vec![
						"Interaction design".into(),
						"Design systems".into(),
						"Brand identity".into(),
					],
				},
			],
			stats: vec![
				Stat {
					label: "Projects Completed".into(),
					value: 48,
				},
				Stat {
					label: "Happy Clients".into(),
					value: 27,
				},
				Stat {
					label: "Years Experience".into(),
					value: 6,
				},
			],
			skill_groups: vec![
				SkillGroup {
					person: "Chari".into(),
					skills: vec![
						Skill {
							name: "Rust".into(),
							level: 92,
						},
						Skill {
							name: "TypeScript".into(),
							level: 85,
						},
						Skill {
							name: "PostgreSQL".into(),
							level: 78,
						},
					],
				},
				SkillGroup {
					person: "Angie".into(),
					skills: vec![
						Skill {
							name: "Figma".into(),
							level: 95,
						},
						Skill {
							name: "Motion Design".into(),
							level: 82,
						},
						Skill {
							name: "Illustration".into(),
							level: 74,
						},
					],
				},
			],
			projects: vec![
				Project {
					title: "Orbit Dashboard".into(),
					description: "Realtime analytics dashboard with streaming charts."
						.into(),
					category: "web".into(),
					tags: vec!["Rust".into(), "WASM".into(), "Charts".into()],
				},
				Project {
					title: "Fernweh".into(),
					description: "Travel journal app with offline-first sync.".into(),
					category: "mobile".into(),
					tags: vec!["Flutter".into(), "Sync".into()],
				},
				Project {
					title: "Nimbus Brand Kit".into(),
					description: "Identity system and component library for a \
					              weather startup."
						.into(),
					category: "design".into(),
					tags: vec!["Branding".into(), "Design system".into()],
				},
				Project {
					title: "Ledgerline".into(),
					description: "Invoicing tool for freelancers with live previews."
						.into(),
					category: "web".into(),
					tags: vec!["SaaS".into(), "Payments".into()],
				},
			],
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_page_data() {
		let json = r#"{
			"hero": { "title": "T", "subtitle": "S" },
			"persons": [
				{ "name": "A", "role": "Dev", "bio": "b", "highlights": ["x"] },
				{ "name": "B", "role": "Design", "bio": "b" }
			],
			"stats": [ { "label": "Projects", "value": 12 } ],
			"skill_groups": [
				{ "person": "A", "skills": [ { "name": "Rust", "level": 90 } ] }
			],
			"projects": [
				{ "title": "P", "description": "d", "category": "web" }
			]
		}"#;

		let data: PageData = serde_json::from_str(json).unwrap();
		assert_eq!(data.persons.len(), 2);
		assert!(data.persons[1].highlights.is_empty());
		assert_eq!(data.stats[0].value, 12);
		assert_eq!(data.skill_groups[0].skills[0].level, 90);
		assert!(data.projects[0].tags.is_empty());
	}

	#[test]
	fn test_sample_is_well_formed() {
		let data = PageData::sample();
		assert_eq!(data.persons.len(), 2);
		assert!(!data.projects.is_empty());
		assert!(data.skill_groups.iter().all(|g| !g.skills.is_empty()));
		assert!(
			data.skill_groups
				.iter()
				.flat_map(|g| &g.skills)
				.all(|s| s.level <= 100)
		);
	}
}
