//! Scroll-offset classification for the header and navigation.
//!
//! The classifier is a small state machine fed the vertical scroll offset on
//! every notification. It derives the header's compact/hidden flags, the
//! gradient fade amount, and which section the nav should mark active. The
//! hidden flag depends on scroll direction, so the previous offset is kept
//! across invocations.

use super::theme::ScrollStyle;

/// Layout of one page section, read once from the document at mount.
#[derive(Clone, Debug)]
pub struct SectionBounds {
	pub id: String,
	pub top: f64,
	pub height: f64,
}

impl SectionBounds {
	pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
		Self {
			id: id.into(),
			top,
			height,
		}
	}
}

/// Output of one classification, consumed by the render side.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollFrame {
	/// Raw offset this frame was classified from.
	pub offset: f64,
	/// Header has scrolled past the compact threshold.
	pub header_compact: bool,
	/// Header should slide out of view. Only ever true while compact.
	pub header_hidden: bool,
	/// Gradient opacity ramp in [0, 1].
	pub header_fade: f64,
	/// Id of the section whose nav link is active, if any section has ever
	/// matched.
	pub active_section: Option<String>,
}

/// Classifies scroll offsets into discrete header and nav states.
///
/// Section boundaries are captured at construction and assumed stable;
/// nothing re-measures them on resize.
pub struct ScrollClassifier {
	sections: Vec<SectionBounds>,
	style: ScrollStyle,
	previous_offset: f64,
	active: Option<usize>,
}

impl ScrollClassifier {
	pub fn new(sections: Vec<SectionBounds>, style: ScrollStyle) -> Self {
		Self {
			sections,
			style,
			previous_offset: 0.0,
			active: None,
		}
	}

	/// Classify the current offset. Must be called in dispatch order;
	/// intermediate offsets may be coalesced away by the caller, only the
	/// latest one matters.
	pub fn classify(&mut self, offset: f64) -> ScrollFrame {
		let header_compact = offset > self.style.compact_threshold;
		let header_hidden = header_compact && offset > self.previous_offset;
		let header_fade = (offset / self.style.fade_distance).clamp(0.0, 1.0);

		// A section is active while the offset sits inside its window,
		// shifted up by the active offset. When no window matches the
		// previous match is kept, which leaves the last link highlighted
		// across gaps between sections.
		for (i, s) in self.sections.iter().enumerate() {
			let start = s.top - self.style.active_offset;
			if offset > start && offset <= start + s.height {
				self.active = Some(i);
				break;
			}
		}

		self.previous_offset = offset;

		ScrollFrame {
			offset,
			header_compact,
			header_hidden,
			header_fade,
			active_section: self.active.map(|i| self.sections[i].id.clone()),
		}
	}

	/// Id of the currently active section, if any.
	pub fn active_section(&self) -> Option<&str> {
		self.active.map(|i| self.sections[i].id.as_str())
	}
}
