//! Hover momentum for the logo spin.
//!
//! Entering hover winds the rotation up to its maximum; after the pointer
//! leaves, the rotation decays by a fixed step each animation frame until it
//! reaches zero.

use super::theme::MomentumStyle;

/// Rotation scalar driven by hover state and per-frame decay.
#[derive(Clone, Debug)]
pub struct Momentum {
	rotation: f64,
	hovering: bool,
	style: MomentumStyle,
}

impl Momentum {
	pub fn new(style: MomentumStyle) -> Self {
		Self {
			rotation: 0.0,
			hovering: false,
			style,
		}
	}

	/// Pointer entered: reset rotation to the maximum and hold it there.
	pub fn hover_start(&mut self) {
		self.hovering = true;
		self.rotation = self.style.max_rotation;
	}

	/// Pointer left: decay resumes on the next frame.
	pub fn hover_end(&mut self) {
		self.hovering = false;
	}

	pub fn rotation(&self) -> f64 {
		self.rotation
	}

	pub fn is_hovering(&self) -> bool {
		self.hovering
	}

	/// Advance one frame. Returns the new rotation when it changed, so the
	/// caller only writes the transform on decay frames.
	pub fn tick(&mut self) -> Option<f64> {
		if self.hovering || self.rotation <= 0.0 {
			return None;
		}
		self.rotation = (self.rotation - self.style.decay_per_frame).max(0.0);
		Some(self.rotation)
	}
}
