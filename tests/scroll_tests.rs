// Host-side tests for the scroll classifier. Pure logic, no browser needed.

use little_whispers::components::page_effects::scroll::{ScrollClassifier, SectionBounds};
use little_whispers::components::page_effects::theme::ScrollStyle;

fn two_section_classifier() -> ScrollClassifier {
	ScrollClassifier::new(
		vec![
			SectionBounds::new("a", 0.0, 500.0),
			SectionBounds::new("b", 500.0, 500.0),
		],
		ScrollStyle::default(),
	)
}

#[test]
fn initial_offset_is_expanded_and_visible() {
	let mut c = two_section_classifier();
	let frame = c.classify(0.0);
	assert!(!frame.header_compact);
	assert!(!frame.header_hidden);
	assert_eq!(frame.header_fade, 0.0);
}

#[test]
fn hidden_implies_compact_for_any_sequence() {
	// Property: the header can only hide while it is compact.
	let offsets = [
		0.0, 50.0, 150.0, 120.0, 400.0, 90.0, 600.0, 30.0, 101.0, 100.0, 99.0, 2000.0,
	];
	let mut c = two_section_classifier();
	for &offset in &offsets {
		let frame = c.classify(offset);
		assert!(
			!frame.header_hidden || frame.header_compact,
			"hidden without compact at offset {offset}"
		);
	}
}

#[test]
fn hides_exactly_when_downward_motion_continues_past_threshold() {
	let mut c = two_section_classifier();
	assert!(!c.classify(0.0).header_hidden);
	assert!(!c.classify(50.0).header_hidden);
	// 100 is not past the threshold yet.
	assert!(!c.classify(100.0).header_compact);
	// First offset past the threshold, still moving down: hide.
	let frame = c.classify(101.0);
	assert!(frame.header_compact);
	assert!(frame.header_hidden);
	assert!(c.classify(150.0).header_hidden);
	// Scrolling back up while compact: visible again.
	let frame = c.classify(140.0);
	assert!(frame.header_compact);
	assert!(!frame.header_hidden);
}

#[test]
fn repeated_offset_counts_as_not_scrolling_down() {
	let mut c = two_section_classifier();
	assert!(c.classify(300.0).header_hidden);
	// Same offset again: not moving down, so the header comes back.
	assert!(!c.classify(300.0).header_hidden);
}

#[test]
fn active_section_windows() {
	// Window for "a" is (-200, 300], for "b" is (300, 800].
	let mut c = two_section_classifier();
	assert_eq!(c.classify(250.0).active_section.as_deref(), Some("a"));
	assert_eq!(c.classify(600.0).active_section.as_deref(), Some("b"));
	assert_eq!(c.active_section(), Some("b"));
}

#[test]
fn gap_between_sections_retains_last_active() {
	let mut c = ScrollClassifier::new(
		vec![SectionBounds::new("about", 300.0, 100.0)],
		ScrollStyle::default(),
	);
	// Window is (100, 200].
	assert_eq!(c.classify(150.0).active_section.as_deref(), Some("about"));
	// Far outside every window: the old highlight stays.
	assert_eq!(c.classify(900.0).active_section.as_deref(), Some("about"));
	assert_eq!(c.classify(0.0).active_section.as_deref(), Some("about"));
}

#[test]
fn no_section_ever_matched_means_no_active_link() {
	let mut c = two_section_classifier();
	assert_eq!(c.classify(900.0).active_section, None);
}

#[test]
fn header_fade_ramps_and_clamps() {
	let mut c = two_section_classifier();
	assert_eq!(c.classify(150.0).header_fade, 0.5);
	assert_eq!(c.classify(300.0).header_fade, 1.0);
	assert_eq!(c.classify(1500.0).header_fade, 1.0);
}
