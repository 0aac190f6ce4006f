//! Contact section with a simulated submission flow.
//!
//! Submitting never touches the network: the form sits in a sending state
//! briefly, swaps to a success message, then resets itself after a pause.

use std::time::Duration;

use leptos::prelude::*;

use super::section::SectionHeader;

/// Simulated latency before the submission "succeeds".
const SEND_DELAY_MS: u64 = 1500;
/// How long the success message stays up before the form resets.
const RESET_DELAY_MS: u64 = 4000;

#[derive(Clone, Copy, PartialEq, Eq)]
enum FormStatus {
	Idle,
	Sending,
	Sent,
}

/// Contact section: info blurb plus the simulated form.
#[component]
pub fn ContactSection() -> impl IntoView {
	let status = RwSignal::new(FormStatus::Idle);
	let name = RwSignal::new(String::new());
	let email = RwSignal::new(String::new());
	let message = RwSignal::new(String::new());

	let on_submit = move |ev: leptos::ev::SubmitEvent| {
		ev.prevent_default();
		if status.get() != FormStatus::Idle {
			return;
		}
		status.set(FormStatus::Sending);
		set_timeout(
			move || {
				status.set(FormStatus::Sent);
				set_timeout(
					move || {
						name.set(String::new());
						email.set(String::new());
						message.set(String::new());
						status.set(FormStatus::Idle);
					},
					Duration::from_millis(RESET_DELAY_MS),
				);
			},
			Duration::from_millis(SEND_DELAY_MS),
		);
	};

	view! {
		<section id="contact" class="section">
			<SectionHeader title="Get in Touch" subtitle="Tell us about your project" />
			<div class="contact-layout">
				<div class="contact-card">
					<h3>"Let's work together"</h3>
					<p>
						"We take on a small number of projects at a time so each one "
						"gets our full attention."
					</p>
				</div>
				<div class="contact-form-wrapper">
					<form
						class="contact-form"
						style:display=move || {
							if status.get() == FormStatus::Sent { "none" } else { "" }
						}
						on:submit=on_submit
					>
						<input
							type="text"
							placeholder="Your name"
							required
							prop:value=move || name.get()
							on:input=move |ev| name.set(event_target_value(&ev))
						/>
						<input
							type="email"
							placeholder="Your email"
							required
							prop:value=move || email.get()
							on:input=move |ev| email.set(event_target_value(&ev))
						/>
						<textarea
							placeholder="Your message"
							required
							prop:value=move || message.get()
							on:input=move |ev| message.set(event_target_value(&ev))
						></textarea>
						<button
							type="submit"
							disabled=move || status.get() == FormStatus::Sending
						>
							{move || {
								if status.get() == FormStatus::Sending {
									"Sending..."
								} else {
									"Send Message"
								}
							}}
						</button>
					</form>
					<div class="form-success" class:show=move || status.get() == FormStatus::Sent>
						<p>"Thanks for reaching out! We'll get back to you soon."</p>
					</div>
				</div>
			</div>
		</section>
	}
}
