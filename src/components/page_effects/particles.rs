//! Ambient particle pool for the background overlay.
//!
//! The pool holds a fixed number of particles, each with randomized spawn
//! parameters and a finite lifetime. Expired particles are replaced in
//! place on the same tick, so the pool size never changes after the initial
//! fill. The random source is passed in by the caller so the pool itself is
//! deterministic.

use rand::Rng;

use super::theme::ParticleStyle;

/// One floating particle.
#[derive(Clone, Debug)]
pub struct Particle {
	/// Horizontal position in percent of the overlay width.
	pub x_percent: f64,
	/// Horizontal drift (px) across the particle's rise.
	pub drift: f64,
	/// Timestamp (ms) the particle was created.
	pub spawned_at: f64,
	/// Animation start delay (ms).
	pub delay_ms: f64,
	/// Animation lifetime (ms), counted after the delay.
	pub lifetime_ms: f64,
}

impl Particle {
	fn spawn(style: &ParticleStyle, now_ms: f64, rng: &mut impl Rng) -> Self {
		Self {
			x_percent: rng.gen_range(0.0..=100.0),
			drift: rng.gen_range(-style.drift_max..=style.drift_max),
			spawned_at: now_ms,
			delay_ms: rng.gen_range(0.0..=style.delay_max_ms),
			lifetime_ms: rng.gen_range(style.lifetime_min_ms..=style.lifetime_max_ms),
		}
	}

	/// Instant (ms) this particle expires and must be replaced.
	pub fn expires_at(&self) -> f64 {
		self.spawned_at + self.delay_ms + self.lifetime_ms
	}
}

/// Fixed-size pool of ambient particles.
pub struct ParticlePool {
	particles: Vec<Particle>,
	style: ParticleStyle,
	stopped: bool,
}

impl ParticlePool {
	/// Create the pool and fill it to `style.count`.
	pub fn new(style: ParticleStyle, now_ms: f64, rng: &mut impl Rng) -> Self {
		let particles = (0..style.count)
			.map(|_| Particle::spawn(&style, now_ms, rng))
			.collect();
		Self {
			particles,
			style,
			stopped: false,
		}
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Replace every particle whose lifetime has elapsed with a freshly
	/// randomized one spawned at `now_ms`. Returns the indices that were
	/// replaced so the caller can rebuild their DOM nodes. After `stop`
	/// this is a no-op.
	pub fn tick(&mut self, now_ms: f64, rng: &mut impl Rng) -> Vec<usize> {
		if self.stopped {
			return Vec::new();
		}
		let mut respawned = Vec::new();
		for (i, p) in self.particles.iter_mut().enumerate() {
			if now_ms >= p.expires_at() {
				*p = Particle::spawn(&self.style, now_ms, rng);
				respawned.push(i);
			}
		}
		respawned
	}

	/// Permanently stop the respawn loop. Subsequent ticks do nothing.
	pub fn stop(&mut self) {
		self.stopped = true;
	}

	pub fn is_stopped(&self) -> bool {
		self.stopped
	}
}
