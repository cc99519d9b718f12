//! Named configuration for the page effects.
//!
//! Every tuning constant lives here so the behavior of an effect can be read
//! off its style struct instead of being spread through the event handlers.

/// RGBA color representation.
#[derive(Clone, Copy, Debug)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Warm parchment tone used across the site for accents and borders.
pub const ACCENT: Color = Color::rgb(196, 181, 160);

/// Near-black background tone the header gradient fades from.
pub const INK: Color = Color::rgb(26, 22, 18);

/// Scroll-driven header and parallax behavior.
#[derive(Clone, Debug)]
pub struct ScrollStyle {
	/// Offset (px) past which the header switches to its compact form.
	pub compact_threshold: f64,
	/// Distance (px) subtracted from a section's top when deciding which
	/// nav link is active.
	pub active_offset: f64,
	/// Offset (px) over which the header gradient reaches full opacity.
	pub fade_distance: f64,
	/// Parallax speed for the band name (fraction of the scroll offset).
	pub band_name_parallax: f64,
	/// Parallax speed for the tagline.
	pub tagline_parallax: f64,
}

impl Default for ScrollStyle {
	fn default() -> Self {
		Self {
			compact_threshold: 100.0,
			active_offset: 200.0,
			fade_distance: 300.0,
			band_name_parallax: 0.5,
			tagline_parallax: 0.3,
		}
	}
}

/// One-shot reveal transition for elements entering the viewport.
#[derive(Clone, Debug)]
pub struct RevealStyle {
	/// Fraction of the element that must be visible to trigger.
	pub threshold: f64,
	/// How far (px) the effective viewport is shrunk from the bottom, so
	/// elements reveal slightly after they scroll into view.
	pub bottom_margin: f64,
	/// Extra delay (ms) per element within a batch that became visible in
	/// the same notification.
	pub stagger_ms: f64,
	/// Vertical offset (px) elements start from before revealing.
	pub initial_offset: f64,
	/// Transition duration (seconds).
	pub duration_secs: f64,
}

impl Default for RevealStyle {
	fn default() -> Self {
		Self {
			threshold: 0.1,
			bottom_margin: 100.0,
			stagger_ms: 100.0,
			initial_offset: 30.0,
			duration_secs: 0.6,
		}
	}
}

/// Character-by-character reveal of the tagline text.
#[derive(Clone, Debug)]
pub struct TypewriterStyle {
	/// Fraction of the element that must be visible to start typing.
	pub threshold: f64,
	/// Delay (ms) between characters.
	pub char_delay_ms: f64,
}

impl Default for TypewriterStyle {
	fn default() -> Self {
		Self {
			threshold: 0.5,
			char_delay_ms: 100.0,
		}
	}
}

/// Ambient particle field configuration.
#[derive(Clone, Debug)]
pub struct ParticleStyle {
	/// Number of concurrently alive particles.
	pub count: usize,
	/// Minimum particle lifetime (ms).
	pub lifetime_min_ms: f64,
	/// Maximum particle lifetime (ms).
	pub lifetime_max_ms: f64,
	/// Maximum animation start delay (ms), drawn uniformly from zero.
	pub delay_max_ms: f64,
	/// Maximum horizontal drift (px) over a particle's rise, symmetric
	/// around zero.
	pub drift_max: f64,
	/// Particle color.
	pub color: Color,
}

impl Default for ParticleStyle {
	fn default() -> Self {
		Self {
			count: 50,
			lifetime_min_ms: 10_000.0,
			lifetime_max_ms: 20_000.0,
			delay_max_ms: 10_000.0,
			drift_max: 60.0,
			color: ACCENT.with_alpha(0.6),
		}
	}
}

/// Logo spin that winds down after the pointer leaves.
#[derive(Clone, Debug)]
pub struct MomentumStyle {
	/// Rotation (degrees) applied when the pointer enters.
	pub max_rotation: f64,
	/// Degrees removed per animation frame while winding down.
	pub decay_per_frame: f64,
}

impl Default for MomentumStyle {
	fn default() -> Self {
		Self {
			max_rotation: 360.0,
			decay_per_frame: 5.0,
		}
	}
}

/// Randomly triggered text-shadow flicker on the band name.
#[derive(Clone, Debug)]
pub struct GlitchStyle {
	/// Interval (ms) between trigger rolls.
	pub interval_ms: f64,
	/// Probability that a roll triggers a flicker.
	pub probability: f64,
	/// How long (ms) the flicker stays applied.
	pub duration_ms: f64,
}

impl Default for GlitchStyle {
	fn default() -> Self {
		Self {
			interval_ms: 3_000.0,
			probability: 0.1,
			duration_ms: 300.0,
		}
	}
}

/// Expanding ripple spawned by button clicks.
#[derive(Clone, Debug)]
pub struct RippleStyle {
	/// Lifetime (ms) of a ripple span before it is removed.
	pub duration_ms: f64,
}

impl Default for RippleStyle {
	fn default() -> Self {
		Self {
			duration_ms: 600.0,
		}
	}
}

/// Track-list row border colors for the hover effect.
#[derive(Clone, Debug)]
pub struct TrackStyle {
	/// Bottom border while hovered.
	pub hover_border: Color,
	/// Bottom border at rest.
	pub rest_border: Color,
}

impl Default for TrackStyle {
	fn default() -> Self {
		Self {
			hover_border: ACCENT.with_alpha(0.5),
			rest_border: ACCENT.with_alpha(0.2),
		}
	}
}

/// Complete effects configuration.
#[derive(Clone, Debug, Default)]
pub struct EffectsConfig {
	pub scroll: ScrollStyle,
	pub reveal: RevealStyle,
	pub typewriter: TypewriterStyle,
	pub particles: ParticleStyle,
	pub momentum: MomentumStyle,
	pub glitch: GlitchStyle,
	pub ripple: RippleStyle,
	pub tracks: TrackStyle,
}
