//! Canvas drawing for the particle field.
//!
//! One pass per frame: clear the surface, fill each particle as a circle,
//! then stroke the proximity connections between close pairs.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::field::ParticleField;
use super::theme::FieldStyle;

/// Renders the complete field to the canvas.
pub fn render(field: &ParticleField, ctx: &CanvasRenderingContext2d, style: &FieldStyle) {
	ctx.clear_rect(0.0, 0.0, field.width(), field.height());

	for p in &field.particles {
		ctx.set_fill_style_str(&p.color.css(p.opacity));
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.size, 0.0, PI * 2.0);
		ctx.fill();
	}

	ctx.set_line_width(style.connect_width);
	field.visit_connections(|a, b, alpha| {
		ctx.set_stroke_style_str(&style.connect_color.css(alpha));
		ctx.begin_path();
		ctx.move_to(a.x, a.y);
		ctx.line_to(b.x, b.y);
		ctx.stroke();
	});
}
