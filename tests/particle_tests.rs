// Host-side tests for the particle pool lifecycle, driven by a seeded RNG
// and a simulated clock.

use little_whispers::components::page_effects::particles::ParticlePool;
use little_whispers::components::page_effects::theme::ParticleStyle;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn seeded_pool(seed: u64, now_ms: f64) -> ParticlePool {
	let mut rng = StdRng::seed_from_u64(seed);
	ParticlePool::new(ParticleStyle::default(), now_ms, &mut rng)
}

#[test]
fn pool_fills_to_count_with_parameters_in_range() {
	let style = ParticleStyle::default();
	let pool = seeded_pool(42, 0.0);
	assert_eq!(pool.len(), style.count);

	for p in pool.particles() {
		assert!((0.0..=100.0).contains(&p.x_percent), "x {}", p.x_percent);
		assert!(
			(style.lifetime_min_ms..=style.lifetime_max_ms).contains(&p.lifetime_ms),
			"lifetime {}",
			p.lifetime_ms
		);
		assert!(
			(0.0..=style.delay_max_ms).contains(&p.delay_ms),
			"delay {}",
			p.delay_ms
		);
		assert!(p.drift.abs() <= style.drift_max, "drift {}", p.drift);
		assert_eq!(p.spawned_at, 0.0);
	}
}

#[test]
fn pool_size_is_invariant_across_many_respawn_cycles() {
	let mut rng = StdRng::seed_from_u64(7);
	let mut pool = ParticlePool::new(ParticleStyle::default(), 0.0, &mut rng);
	let count = pool.len();

	let mut total_respawned = 0usize;
	let mut now = 0.0;
	while now < 120_000.0 {
		now += 500.0;
		let respawned = pool.tick(now, &mut rng);
		total_respawned += respawned.len();
		assert_eq!(pool.len(), count, "pool size changed at t={now}");
		for idx in respawned {
			assert_eq!(pool.particles()[idx].spawned_at, now);
		}
	}
	// Two minutes is several lifetimes; plenty of cycles must have run.
	assert!(total_respawned > count, "only {total_respawned} respawns");
}

#[test]
fn a_long_gap_replaces_every_particle_at_once() {
	let mut rng = StdRng::seed_from_u64(3);
	let mut pool = ParticlePool::new(ParticleStyle::default(), 0.0, &mut rng);
	// Max expiry is delay_max + lifetime_max = 30s after spawn.
	let respawned = pool.tick(40_000.0, &mut rng);
	assert_eq!(respawned.len(), pool.len());
}

#[test]
fn expiry_includes_the_start_delay() {
	let mut rng = StdRng::seed_from_u64(11);
	let pool = ParticlePool::new(ParticleStyle::default(), 1_000.0, &mut rng);
	for p in pool.particles() {
		assert_eq!(p.expires_at(), 1_000.0 + p.delay_ms + p.lifetime_ms);
	}
}

#[test]
fn stopped_pool_never_respawns_again() {
	let mut rng = StdRng::seed_from_u64(42);
	let mut pool = ParticlePool::new(ParticleStyle::default(), 0.0, &mut rng);
	pool.stop();
	assert!(pool.is_stopped());

	for step in 1..200 {
		let respawned = pool.tick(step as f64 * 1_000.0, &mut rng);
		assert!(respawned.is_empty(), "respawn after stop at step {step}");
	}
	assert_eq!(pool.len(), ParticleStyle::default().count);
}

#[test]
fn same_seed_gives_the_same_field() {
	let a = seeded_pool(123, 0.0);
	let b = seeded_pool(123, 0.0);
	for (pa, pb) in a.particles().iter().zip(b.particles()) {
		assert_eq!(pa.x_percent, pb.x_percent);
		assert_eq!(pa.lifetime_ms, pb.lifetime_ms);
		assert_eq!(pa.delay_ms, pb.delay_ms);
		assert_eq!(pa.drift, pb.drift);
	}
}
