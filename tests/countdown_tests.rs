// Host-side tests for the countdown decomposition.

use little_whispers::components::page_effects::countdown::{Countdown, CountdownParts};

#[test]
fn decomposes_whole_units() {
	// 2 days, 3 hours, 4 minutes, 5 seconds.
	let distance = (((2 * 24 + 3) * 3_600 + 4 * 60 + 5) * 1_000) as f64;
	assert_eq!(
		Countdown::from_distance_ms(distance),
		Countdown::Counting(CountdownParts {
			days: 2,
			hours: 3,
			minutes: 4,
			seconds: 5,
		})
	);
}

#[test]
fn sub_second_distance_still_counts() {
	assert_eq!(
		Countdown::from_distance_ms(500.0),
		Countdown::Counting(CountdownParts {
			days: 0,
			hours: 0,
			minutes: 0,
			seconds: 0,
		})
	);
}

#[test]
fn one_second_boundary() {
	assert_eq!(
		Countdown::from_distance_ms(1_000.0),
		Countdown::Counting(CountdownParts {
			days: 0,
			hours: 0,
			minutes: 0,
			seconds: 1,
		})
	);
}

#[test]
fn zero_and_negative_are_released() {
	assert_eq!(Countdown::from_distance_ms(0.0), Countdown::Released);
	assert_eq!(Countdown::from_distance_ms(-5_000.0), Countdown::Released);
}
