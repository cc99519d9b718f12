//! Page-level data supplied by the embedding document.

use serde::Deserialize;

/// Epoch milliseconds for 2026-01-20T05:00:00Z, the album release instant.
const DEFAULT_RELEASE_EPOCH_MS: f64 = 1_768_885_200_000.0;

/// Configuration read from a `<script id="fx-config">` JSON block.
///
/// Everything here is optional; a page that ships no config block gets the
/// defaults below.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct PageConfig {
	/// Release instant shown by the countdown, as epoch milliseconds.
	pub release_epoch_ms: f64,
	/// Fixed RNG seed. When absent the effects seed from the wall clock;
	/// demo pages set this to get a reproducible particle field.
	pub seed: Option<u64>,
}

impl Default for PageConfig {
	fn default() -> Self {
		Self {
			release_epoch_ms: DEFAULT_RELEASE_EPOCH_MS,
			seed: None,
		}
	}
}
