//! One-shot visibility observation for scroll-triggered effects.
//!
//! Wraps `IntersectionObserver` in the shape the page needs: fire a callback
//! the first time an element scrolls into view, then stop watching it.
//! Reveal transitions, skill-bar fills, and stat counters all trigger
//! through here.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use js_sys::Array;
use leptos::html::Div;
use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Observation tuning for a reveal trigger.
#[derive(Clone, Debug)]
pub struct RevealOptions {
	/// Fraction of the element that must be visible before firing.
	pub threshold: f64,
	/// CSS-style margin applied to the viewport for the intersection test.
	pub root_margin: &'static str,
}

impl RevealOptions {
	/// Options with a custom threshold and no viewport margin.
	pub fn threshold(threshold: f64) -> Self {
		Self {
			threshold,
			root_margin: "0px",
		}
	}
}

impl Default for RevealOptions {
	fn default() -> Self {
		// Shrink the viewport bottom a little so elements reveal slightly
		// before they would be fully on screen.
		Self {
			threshold: 0.1,
			root_margin: "0px 0px -50px 0px",
		}
	}
}

/// Invoke `on_visible` the first time `el` intersects the viewport, then
/// stop observing.
///
/// The observer lives for the page session; its callback is released to the
/// host once registered. If the observer cannot be constructed the callback
/// fires immediately so content is never stranded invisible.
pub fn observe_once(el: &Element, options: &RevealOptions, on_visible: impl FnMut() + 'static) {
	let on_visible: Rc<RefCell<dyn FnMut()>> = Rc::new(RefCell::new(on_visible));

	let handler = on_visible.clone();
	let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
		move |entries: Array, observer: IntersectionObserver| {
			for entry in entries.iter() {
				let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
					continue;
				};
				if entry.is_intersecting() {
					(handler.borrow_mut())();
					observer.unobserve(&entry.target());
					observer.disconnect();
				}
			}
		},
	);

	let init = IntersectionObserverInit::new();
	init.set_threshold(&JsValue::from_f64(options.threshold));
	init.set_root_margin(options.root_margin);

	match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
		Ok(observer) => {
			observer.observe(el);
			callback.forget();
		}
		Err(e) => {
			warn!("reveal: observer construction failed: {e:?}");
			// Degrade to immediately visible.
			(on_visible.borrow_mut())();
		}
	}
}

/// Signal that flips to `true` the first time the referenced element scrolls
/// into view, optionally after a stagger delay.
pub fn reveal_signal(node_ref: NodeRef<Div>, options: RevealOptions, delay_ms: u64) -> RwSignal<bool> {
	let revealed = RwSignal::new(false);

	Effect::new(move |_| {
		let Some(el) = node_ref.get() else {
			return;
		};
		let el: web_sys::HtmlDivElement = el.into();
		observe_once(&el, &options, move || {
			if delay_ms > 0 {
				set_timeout(move || revealed.set(true), Duration::from_millis(delay_ms));
			} else {
				revealed.set(true);
			}
		});
	});

	revealed
}
