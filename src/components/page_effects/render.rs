//! DOM writes for the page effects.
//!
//! The pure state machines decide what should happen; everything that
//! touches an element's style, class list, or children lives here. Style
//! writes are best-effort: a failed property set is ignored, matching how
//! the page degrades when markup is partial.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, MouseEvent};

use super::countdown::Countdown;
use super::particles::Particle;
use super::scroll::ScrollFrame;
use super::theme::{Color, EffectsConfig, INK, RevealStyle};

const ACTIVE_CLASS: &str = "active";

/// Write the header's gradient, blur, and slide state for one frame.
pub fn apply_header(header: &HtmlElement, frame: &ScrollFrame) {
	let style = header.style();
	let alpha = 0.9 + frame.header_fade * 0.1;
	let _ = style.set_property(
		"background",
		&format!(
			"linear-gradient(to bottom, {}, transparent)",
			INK.with_alpha(alpha).to_css()
		),
	);
	if frame.header_compact {
		let _ = style.set_property("backdrop-filter", "blur(10px)");
	} else {
		let _ = style.remove_property("backdrop-filter");
	}
	let transform = if frame.header_hidden {
		"translateY(-100%)"
	} else {
		"translateY(0)"
	};
	let _ = style.set_property("transform", transform);
}

/// Mark at most one nav link active, clearing the marker everywhere else.
pub fn apply_active_links(links: &[(HtmlElement, String)], active: Option<&str>) {
	for (link, section_id) in links {
		let list = link.class_list();
		if active == Some(section_id.as_str()) {
			let _ = list.add_1(ACTIVE_CLASS);
		} else {
			let _ = list.remove_1(ACTIVE_CLASS);
		}
	}
}

/// Vertical parallax translation at the given speed.
pub fn apply_parallax(el: &HtmlElement, offset: f64, speed: f64) {
	let _ = el
		.style()
		.set_property("transform", &format!("translateY({}px)", offset * speed));
}

/// Put an element into its pre-reveal state and install the transition.
pub fn prepare_reveal(el: &HtmlElement, style: &RevealStyle) {
	let s = el.style();
	let _ = s.set_property("opacity", "0");
	let _ = s.set_property(
		"transform",
		&format!("translateY({}px)", style.initial_offset),
	);
	let _ = s.set_property(
		"transition",
		&format!(
			"opacity {}s ease, transform {}s ease",
			style.duration_secs, style.duration_secs
		),
	);
}

/// Run the reveal transition, delayed for batch staggering.
pub fn apply_reveal(el: &HtmlElement, delay_ms: f64) {
	let s = el.style();
	let _ = s.set_property("transition-delay", &format!("{delay_ms}ms"));
	let _ = s.set_property("opacity", "1");
	let _ = s.set_property("transform", "translateY(0)");
}

/// Rotate the logo to the given angle.
pub fn apply_rotation(el: &HtmlElement, degrees: f64) {
	let _ = el
		.style()
		.set_property("transform", &format!("rotate({degrees}deg)"));
}

/// Toggle the glitch text-shadow flicker.
pub fn apply_glitch(el: &HtmlElement, on: bool) {
	let style = el.style();
	if on {
		let _ = style.set_property(
			"text-shadow",
			&format!(
				"2px 0 {}, -2px 0 {}",
				Color::rgba(196, 181, 160, 0.8).to_css(),
				Color::rgba(120, 160, 196, 0.6).to_css()
			),
		);
	} else {
		let _ = style.remove_property("text-shadow");
	}
}

/// Create a particle element inside the overlay. Position and timing come
/// from the pool; appearance comes from the injected stylesheet.
pub fn spawn_particle(overlay: &HtmlElement, particle: &Particle) -> Option<HtmlElement> {
	let document = overlay.owner_document()?;
	let el: HtmlElement = document.create_element("span").ok()?.dyn_into().ok()?;
	el.set_class_name("particle");
	let style = el.style();
	let _ = style.set_property("left", &format!("{:.2}%", particle.x_percent));
	let _ = style.set_property("animation-duration", &format!("{:.0}ms", particle.lifetime_ms));
	let _ = style.set_property("animation-delay", &format!("{:.0}ms", particle.delay_ms));
	let _ = style.set_property("--drift", &format!("{:.1}px", particle.drift));
	overlay.append_child(&el).ok()?;
	Some(el)
}

/// Clip the button so ripples expand inside it.
pub fn prepare_button(button: &HtmlElement) {
	let style = button.style();
	let _ = style.set_property("position", "relative");
	let _ = style.set_property("overflow", "hidden");
}

/// Spawn a ripple span centered on the click point, sized to cover the
/// button.
pub fn spawn_ripple(button: &HtmlElement, ev: &MouseEvent) -> Option<HtmlElement> {
	let document = button.owner_document()?;
	let ripple: HtmlElement = document.create_element("span").ok()?.dyn_into().ok()?;
	let rect = button.get_bounding_client_rect();
	let size = rect.width().max(rect.height());
	let x = ev.client_x() as f64 - rect.left() - size / 2.0;
	let y = ev.client_y() as f64 - rect.top() - size / 2.0;

	ripple.set_class_name("ripple");
	let style = ripple.style();
	let _ = style.set_property("width", &format!("{size}px"));
	let _ = style.set_property("height", &format!("{size}px"));
	let _ = style.set_property("left", &format!("{x}px"));
	let _ = style.set_property("top", &format!("{y}px"));

	button.append_child(&ripple).ok()?;
	Some(ripple)
}

/// Rewrite the countdown container for the given distance to release.
pub fn render_countdown(el: &Element, distance_ms: f64) {
	match Countdown::from_distance_ms(distance_ms) {
		Countdown::Counting(parts) => {
			el.set_inner_html(&format!(
				r#"<div class="countdown-label">Countdown</div><div class="countdown-display"><span class="countdown-unit">{}d</span> <span class="countdown-unit">{}h</span> <span class="countdown-unit">{}m</span> <span class="countdown-unit">{}s</span></div>"#,
				parts.days, parts.hours, parts.minutes, parts.seconds
			));
		}
		Countdown::Released => {
			el.set_inner_html(r#"<div class="countdown-label">Available Now!</div>"#);
		}
	}
}

/// Install the ripple and particle animation rules. Everything else the
/// effects rely on ships with the page stylesheet.
pub fn inject_effect_css(document: &Document, config: &EffectsConfig) -> Option<Element> {
	let style = document.create_element("style").ok()?;
	style.set_text_content(Some(&format!(
		r#"
.ripple {{
	position: absolute;
	border-radius: 50%;
	background: rgba(255, 255, 255, 0.5);
	transform: scale(0);
	animation: rippleAnimation {ripple_ms}ms ease-out;
	pointer-events: none;
}}

@keyframes rippleAnimation {{
	to {{
		transform: scale(4);
		opacity: 0;
	}}
}}

.particle {{
	position: absolute;
	bottom: -10px;
	width: 3px;
	height: 3px;
	border-radius: 50%;
	background: {particle_color};
	opacity: 0;
	animation-name: particleRise;
	animation-timing-function: linear;
}}

@keyframes particleRise {{
	0% {{ transform: translate(0, 0); opacity: 0; }}
	10% {{ opacity: 1; }}
	90% {{ opacity: 1; }}
	100% {{ transform: translate(var(--drift, 0px), -110vh); opacity: 0; }}
}}
"#,
		ripple_ms = config.ripple.duration_ms,
		particle_color = config.particles.color.to_css(),
	)));
	let head = document.head()?;
	head.append_child(&style).ok()?;
	Some(style)
}

/// Bottom border color for the track-list hover effect.
pub fn apply_track_border(el: &HtmlElement, color: Color) {
	let _ = el
		.style()
		.set_property("border-bottom-color", &color.to_css());
}
