//! Particle field simulation for the animated page background.
//!
//! Pure state and arithmetic only — no DOM or canvas types appear here, so
//! the module compiles and tests on the native target. Drawing lives in
//! [`super::render`] and frame scheduling in [`super::component`].

use super::theme::{Color, FieldStyle};

/// A single drifting particle.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub speed_x: f64,
	pub speed_y: f64,
	/// Render radius.
	pub size: f64,
	/// Fill opacity in `[0, 1]`.
	pub opacity: f64,
	pub color: Color,
}

/// Owns the particle collection and the bounds particles bounce inside.
///
/// Created once when the canvas mounts, then mutated each frame by the
/// animation loop, which is the collection's only reader and writer.
/// Particles are never re-randomized after construction.
pub struct ParticleField {
	pub particles: Vec<Particle>,
	width: f64,
	height: f64,
	connect_distance: f64,
	connect_alpha: f64,
}

impl ParticleField {
	pub fn new(style: &FieldStyle, width: f64, height: f64) -> Self {
		let count = particle_count(width, height, style);
		let mut particles = Vec::with_capacity(count);

		for i in 0..count {
			// Deterministic pseudo-random based on index for a consistent look
			let seed = i as f64;
			particles.push(Particle {
				x: pseudo_random(seed * 1.1) * width,
				y: pseudo_random(seed * 2.3) * height,
				size: style.size_min
					+ pseudo_random(seed * 3.7) * (style.size_max - style.size_min),
				speed_x: (pseudo_random(seed * 4.1) - 0.5) * 2.0 * style.max_speed,
				speed_y: (pseudo_random(seed * 5.3) - 0.5) * 2.0 * style.max_speed,
				opacity: style.opacity_min
					+ pseudo_random(seed * 6.7) * (style.opacity_max - style.opacity_min),
				color: style.palette.pick(pseudo_random(seed * 7.9)),
			});
		}

		Self {
			particles,
			width,
			height,
			connect_distance: style.connect_distance,
			connect_alpha: style.connect_alpha,
		}
	}

	/// Advance every particle one frame and bounce at the edges.
	///
	/// A velocity component is only inverted while the particle is out of
	/// bounds *and* still heading outward, so each crossing flips it exactly
	/// once, and a particle stranded outside by a shrinking resize keeps
	/// moving back in instead of oscillating at the edge.
	pub fn update(&mut self) {
		for p in &mut self.particles {
			p.x += p.speed_x;
			p.y += p.speed_y;

			if (p.x < 0.0 && p.speed_x < 0.0) || (p.x > self.width && p.speed_x > 0.0) {
				p.speed_x = -p.speed_x;
			}
			if (p.y < 0.0 && p.speed_y < 0.0) || (p.y > self.height && p.speed_y > 0.0) {
				p.speed_y = -p.speed_y;
			}
		}
	}

	/// Update the bounds to the new surface size.
	///
	/// Existing particles are neither repositioned nor regenerated; any that
	/// end up outside the new bounds drift back in through the edge test in
	/// [`ParticleField::update`].
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}

	/// Opacity of the line joining two particles `dist` apart, or `None`
	/// beyond the connection distance. Decays linearly to zero exactly at
	/// the threshold.
	pub fn connection_alpha(&self, dist: f64) -> Option<f64> {
		(dist < self.connect_distance)
			.then(|| (1.0 - dist / self.connect_distance) * self.connect_alpha)
	}

	/// Visit every unordered pair of particles close enough to connect.
	///
	/// O(n²) over all pairs; acceptable for the capped particle count.
	pub fn visit_connections(&self, mut f: impl FnMut(&Particle, &Particle, f64)) {
		for i in 0..self.particles.len() {
			for j in (i + 1)..self.particles.len() {
				let (a, b) = (&self.particles[i], &self.particles[j]);
				let (dx, dy) = (a.x - b.x, a.y - b.y);
				let dist = (dx * dx + dy * dy).sqrt();
				if let Some(alpha) = self.connection_alpha(dist) {
					f(a, b, alpha);
				}
			}
		}
	}
}

/// Particle count for a surface: one per `area_per_particle` square pixels,
/// capped at `max_particles`.
pub fn particle_count(width: f64, height: f64, style: &FieldStyle) -> usize {
	let by_area = (width * height / style.area_per_particle).floor() as usize;
	by_area.min(style.max_particles)
}

/// Simple pseudo-random function (deterministic)
fn pseudo_random(seed: f64) -> f64 {
	let x = (seed * 12.9898 + seed * 78.233).sin() * 43758.5453;
	x - x.floor()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn field(width: f64, height: f64) -> ParticleField {
		ParticleField::new(&FieldStyle::default(), width, height)
	}

	#[test]
	fn test_count_from_area() {
		let style = FieldStyle::default();
		// 800 * 600 / 15000 = 32
		assert_eq!(particle_count(800.0, 600.0, &style), 32);
		assert_eq!(field(800.0, 600.0).particles.len(), 32);
	}

	#[test]
	fn test_count_capped() {
		let style = FieldStyle::default();
		// 2000 * 1000 / 15000 = 133, capped at 80
		assert_eq!(particle_count(2000.0, 1000.0, &style), 80);
	}

	#[test]
	fn test_count_zero_area() {
		let style = FieldStyle::default();
		assert_eq!(particle_count(0.0, 600.0, &style), 0);
		assert!(field(0.0, 0.0).particles.is_empty());
	}

	#[test]
	fn test_initial_attributes_in_range() {
		let style = FieldStyle::default();
		let f = field(1200.0, 800.0);
		for p in &f.particles {
			assert!((0.0..1200.0).contains(&p.x));
			assert!((0.0..800.0).contains(&p.y));
			assert!((style.size_min..style.size_max).contains(&p.size));
			assert!(p.speed_x.abs() <= style.max_speed);
			assert!(p.speed_y.abs() <= style.max_speed);
			assert!((style.opacity_min..style.opacity_max).contains(&p.opacity));
			assert!(style.palette.colors.contains(&p.color));
		}
	}

	#[test]
	fn test_particles_stay_near_bounds() {
		let style = FieldStyle::default();
		let mut f = field(640.0, 480.0);
		for _ in 0..10_000 {
			f.update();
		}
		// A particle may overshoot by at most one velocity step before the
		// bounce turns it around.
		for p in &f.particles {
			assert!(p.x >= -style.max_speed && p.x <= 640.0 + style.max_speed);
			assert!(p.y >= -style.max_speed && p.y <= 480.0 + style.max_speed);
		}
	}

	#[test]
	fn test_bounce_flips_exactly_once() {
		let mut f = field(100.0, 100.0);
		f.particles = vec![Particle {
			x: 99.9,
			y: 50.0,
			speed_x: 0.15,
			speed_y: 0.0,
			size: 1.0,
			opacity: 0.5,
			color: Color::rgb(255, 255, 255),
		}];

		// Crosses the right edge: one flip.
		f.update();
		assert!(f.particles[0].x > 100.0);
		assert_eq!(f.particles[0].speed_x, -0.15);

		// Still marginally outside but now inbound: no second flip.
		f.update();
		assert_eq!(f.particles[0].speed_x, -0.15);
		assert!(f.particles[0].x < 100.0);
	}

	#[test]
	fn test_stranded_particle_returns_after_shrink() {
		let mut f = field(200.0, 100.0);
		f.particles = vec![Particle {
			x: 150.0,
			y: 50.0,
			speed_x: 0.2,
			speed_y: 0.0,
			size: 1.0,
			opacity: 0.5,
			color: Color::rgb(255, 255, 255),
		}];
		f.resize(100.0, 100.0);

		f.update();
		assert_eq!(f.particles[0].speed_x, -0.2);
		for _ in 0..1000 {
			f.update();
			// Inbound velocity must hold until the particle is back inside.
			if f.particles[0].x > 100.0 {
				assert_eq!(f.particles[0].speed_x, -0.2);
			}
		}
		assert!(f.particles[0].x <= 100.0);
	}

	#[test]
	fn test_connection_alpha_decays_to_zero_at_threshold() {
		let f = field(800.0, 600.0);
		assert!((f.connection_alpha(0.0).unwrap() - 0.15).abs() < 1e-9);
		assert!((f.connection_alpha(100.0).unwrap() - 0.05).abs() < 1e-9);
		assert!(f.connection_alpha(149.999).unwrap() > 0.0);
		assert_eq!(f.connection_alpha(150.0), None);
		assert_eq!(f.connection_alpha(500.0), None);
	}

	#[test]
	fn test_connection_alpha_monotonic() {
		let f = field(800.0, 600.0);
		let mut prev = f64::INFINITY;
		for step in 0..150 {
			let alpha = f.connection_alpha(step as f64).unwrap();
			assert!(alpha < prev);
			prev = alpha;
		}
	}

	#[test]
	fn test_visit_connections_pairs() {
		let mut f = field(800.0, 600.0);
		let template = Particle {
			x: 0.0,
			y: 0.0,
			speed_x: 0.0,
			speed_y: 0.0,
			size: 1.0,
			opacity: 0.5,
			color: Color::rgb(255, 255, 255),
		};
		f.particles = vec![
			template.clone(),
			Particle { x: 100.0, ..template.clone() },
			Particle { x: 400.0, ..template },
		];

		let mut seen = Vec::new();
		f.visit_connections(|a, b, alpha| seen.push((a.x, b.x, alpha)));

		// Only the (0, 100) pair is within range; its alpha is
		// (1 - 100/150) * 0.15 = 0.05.
		assert_eq!(seen.len(), 1);
		assert_eq!((seen[0].0, seen[0].1), (0.0, 100.0));
		assert!((seen[0].2 - 0.05).abs() < 1e-9);
	}

	#[test]
	fn test_resize_is_idempotent() {
		let mut f = field(800.0, 600.0);
		let before: Vec<(f64, f64)> = f.particles.iter().map(|p| (p.x, p.y)).collect();
		f.resize(800.0, 600.0);
		f.resize(800.0, 600.0);
		let after: Vec<(f64, f64)> = f.particles.iter().map(|p| (p.x, p.y)).collect();
		assert_eq!(before, after);
		assert_eq!(f.width(), 800.0);
		assert_eq!(f.height(), 600.0);
	}

	#[test]
	fn test_pseudo_random_unit_interval() {
		for i in 0..1000 {
			let r = pseudo_random(i as f64 * 1.1);
			assert!((0.0..1.0).contains(&r));
		}
	}
}
