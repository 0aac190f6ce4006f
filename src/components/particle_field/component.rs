//! Leptos component wrapping the particle background canvas.
//!
//! The component creates a full-viewport canvas and drives the simulation
//! with a `requestAnimationFrame` loop. A window resize listener keeps the
//! surface matched to the viewport. Both the frame handle and the listener
//! are torn down explicitly when the component is removed.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::__reexports::send_wrapper::SendWrapper;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::field::ParticleField;
use super::render;
use super::theme::FieldStyle;

/// Renders the decorative particle background behind the page.
///
/// The canvas ignores pointer events and is sized to the window; the
/// particle collection is created once on mount and bounces inside the
/// current bounds for the lifetime of the page.
#[component]
pub fn ParticleCanvas() -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let field: Rc<RefCell<Option<ParticleField>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let frame_handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
	let (field_init, animate_init, resize_cb_init, frame_init) = (
		field.clone(),
		animate.clone(),
		resize_cb.clone(),
		frame_handle.clone(),
	);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let (w, h) = (
			window.inner_width().unwrap().as_f64().unwrap(),
			window.inner_height().unwrap().as_f64().unwrap(),
		);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		let style = FieldStyle::default();
		*field_init.borrow_mut() = Some(ParticleField::new(&style, w, h));

		let (field_resize, canvas_resize) = (field_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let win: Window = web_sys::window().unwrap();
			let (nw, nh) = (
				win.inner_width().unwrap().as_f64().unwrap(),
				win.inner_height().unwrap().as_f64().unwrap(),
			);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut f) = *field_resize.borrow_mut() {
				f.resize(nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (field_anim, animate_inner, frame_anim) = (
			field_init.clone(),
			animate_init.clone(),
			frame_init.clone(),
		);
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut f) = *field_anim.borrow_mut() {
				f.update();
				render::render(f, &ctx, &style);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Ok(id) = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref())
				{
					frame_anim.set(Some(id));
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				frame_init.set(Some(id));
			}
		}
	});

	// The teardown state is built from `Rc`s, which are `!Send`/`!Sync`, but
	// `on_cleanup` requires a `Send + Sync` closure. In this CSR-only build the
	// cleanup always runs on the (single) browser thread, so carrying the
	// handles through a `SendWrapper` satisfies the bound without changing
	// behavior.
	let cleanup_state = SendWrapper::new((frame_handle, resize_cb, animate, field));
	on_cleanup(move || {
		let (frame_handle, resize_cb, animate, field) = &*cleanup_state;
		let window: Window = web_sys::window().unwrap();
		if let Some(id) = frame_handle.take() {
			let _ = window.cancel_animation_frame(id);
		}
		if let Some(cb) = resize_cb.borrow_mut().take() {
			let _ =
				window.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
		animate.borrow_mut().take();
		field.borrow_mut().take();
	});

	view! { <canvas node_ref=canvas_ref class="particle-canvas" aria-hidden="true"></canvas> }
}
