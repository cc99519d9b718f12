// Host-side tests for the logo momentum scalar.

use little_whispers::components::page_effects::momentum::Momentum;
use little_whispers::components::page_effects::theme::MomentumStyle;

#[test]
fn hover_winds_up_and_holds() {
	let mut m = Momentum::new(MomentumStyle::default());
	m.hover_start();
	assert_eq!(m.rotation(), 360.0);
	assert!(m.is_hovering());

	// No decay while the pointer stays on the logo.
	for _ in 0..10 {
		assert_eq!(m.tick(), None);
	}
	assert_eq!(m.rotation(), 360.0);
}

#[test]
fn decays_by_a_fixed_step_after_leave() {
	let mut m = Momentum::new(MomentumStyle::default());
	m.hover_start();
	m.hover_end();

	assert_eq!(m.tick(), Some(355.0));
	assert_eq!(m.tick(), Some(350.0));

	// 360 / 5 = 72 frames total to reach zero.
	let mut frames = 2;
	while m.tick().is_some() {
		frames += 1;
	}
	assert_eq!(frames, 72);
	assert_eq!(m.rotation(), 0.0);
}

#[test]
fn rotation_clamps_at_zero() {
	let mut m = Momentum::new(MomentumStyle {
		max_rotation: 7.0,
		decay_per_frame: 5.0,
	});
	m.hover_start();
	m.hover_end();
	assert_eq!(m.tick(), Some(2.0));
	assert_eq!(m.tick(), Some(0.0));
	assert_eq!(m.tick(), None);
}

#[test]
fn idle_momentum_ticks_to_nothing() {
	let mut m = Momentum::new(MomentumStyle::default());
	assert_eq!(m.tick(), None);
	assert_eq!(m.rotation(), 0.0);
}

#[test]
fn re_entering_hover_rewinds_mid_decay() {
	let mut m = Momentum::new(MomentumStyle::default());
	m.hover_start();
	m.hover_end();
	for _ in 0..20 {
		m.tick();
	}
	assert_eq!(m.rotation(), 260.0);
	m.hover_start();
	assert_eq!(m.rotation(), 360.0);
}
