//! Scroll-triggered stat counters for the hero section.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use leptos::html::Div;
use leptos::prelude::*;

use super::reveal::{RevealOptions, reveal_signal};

/// Number of interval ticks a count-up takes.
const COUNTER_STEPS: u32 = 40;
/// Total count-up duration.
const COUNTER_DURATION_MS: u64 = 1500;
/// Counters start once half the element is on screen.
const COUNTER_THRESHOLD: f64 = 0.5;

/// Animate `display` from zero up to `target`, then settle on "`target`+".
fn start_count(target: u32, display: RwSignal<String>) {
	let increment = f64::from(target) / f64::from(COUNTER_STEPS);
	let current = Rc::new(Cell::new(0.0_f64));
	let handle: Rc<RefCell<Option<IntervalHandle>>> = Rc::new(RefCell::new(None));

	let (current_tick, handle_tick) = (current.clone(), handle.clone());
	let result = set_interval_with_handle(
		move || {
			let next = current_tick.get() + increment;
			current_tick.set(next);
			if next >= f64::from(target) {
				display.set(format!("{target}+"));
				if let Some(h) = handle_tick.borrow_mut().take() {
					h.clear();
				}
			} else {
				display.set(format!("{}", next.floor() as u32));
			}
		},
		Duration::from_millis(COUNTER_DURATION_MS / u64::from(COUNTER_STEPS)),
	);
	if let Ok(h) = result {
		*handle.borrow_mut() = Some(h);
	}
}

/// A stat tile that counts up the first time it scrolls into view.
#[component]
pub fn StatCounter(value: u32, #[prop(into)] label: String) -> impl IntoView {
	let node_ref = NodeRef::<Div>::new();
	let display = RwSignal::new("0".to_string());
	let revealed = reveal_signal(node_ref, RevealOptions::threshold(COUNTER_THRESHOLD), 0);
	let started = RwSignal::new(false);

	Effect::new(move |_| {
		if revealed.get() && !started.get() {
			started.set(true);
			start_count(value, display);
		}
	});

	view! {
		<div class="stat" node_ref=node_ref>
			<span class="stat-number">{move || display.get()}</span>
			<span class="stat-label">{label}</span>
		</div>
	}
}
