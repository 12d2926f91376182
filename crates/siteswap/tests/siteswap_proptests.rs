//! Property-based tests for pattern validation, orbit decomposition and
//! animation synthesis.

use proptest::prelude::*;
use siteswap::{lcm, Motion, SiteSwap};

// ===== Strategy definitions =====

/// Generate a valid siteswap as `(heights, hands)`.
///
/// Any permutation `p` of `0..n` gives a valid pattern through
/// `h_i = ((p_i - i) mod n) + n * k_i`, because throw `i` then lands on
/// slot `p_i`.
fn siteswap_strategy() -> impl Strategy<Value = (Vec<u32>, usize)> {
    (1usize..=5)
        .prop_flat_map(|n| {
            (
                Just((0..n).collect::<Vec<usize>>()).prop_shuffle(),
                prop::collection::vec(0u32..=2, n),
                1usize..=4,
            )
        })
        .prop_map(|(perm, lifts, hands)| {
            let n = perm.len();
            let heights: Vec<u32> = perm
                .iter()
                .zip(&lifts)
                .enumerate()
                .map(|(i, (&p, &k))| ((p + n - i) % n) as u32 + n as u32 * k)
                .collect();
            (heights, hands)
        })
        .prop_filter("pattern needs at least one ball", |(heights, _)| {
            heights.iter().any(|&h| h > 0)
        })
}

fn siteswap() -> impl Strategy<Value = SiteSwap> {
    siteswap_strategy().prop_map(|(heights, hands)| {
        SiteSwap::new(heights, hands).unwrap_or_else(|e| panic!("generator produced {e}"))
    })
}

/// Sample times across one cycle: every quarter beat for short cycles,
/// 256 evenly spaced samples for long ones.
fn sample_times(cycle: u64) -> impl Iterator<Item = f64> {
    let samples = (cycle * 4).min(256);
    (0..samples).map(move |i| cycle as f64 * i as f64 / samples as f64)
}

fn covering(path: &[Motion], t: f64, cycle: f64) -> usize {
    path.iter().filter(|m| m.covers(t, cycle)).count()
}

// ===== Validation properties =====

proptest! {
    /// Ball count is the integral mean and landings form a permutation
    #[test]
    fn prop_valid_patterns_validate((heights, _hands) in siteswap_strategy()) {
        let n = heights.len();
        let balls = SiteSwap::validate_pattern(&heights);
        prop_assert!(balls.is_ok());
        let sum: u64 = heights.iter().map(|&h| u64::from(h)).sum();
        prop_assert_eq!(sum % n as u64, 0);
        prop_assert_eq!(balls.ok(), Some((sum / n as u64) as usize));

        let mut landed = vec![false; n];
        for (i, &h) in heights.iter().enumerate() {
            let slot = (i + h as usize) % n;
            prop_assert!(!landed[slot]);
            landed[slot] = true;
        }
    }

    /// Bumping one throw by one beat breaks the ball count
    #[test]
    fn prop_single_bump_is_rejected((heights, _hands) in siteswap_strategy(), pick in any::<prop::sample::Index>()) {
        prop_assume!(heights.len() > 1);
        let mut bumped = heights;
        let i = pick.index(bumped.len());
        bumped[i] += 1;
        prop_assert!(SiteSwap::validate_pattern(&bumped).is_err());
    }

    /// Formatting then parsing gives back the same pattern
    #[test]
    fn prop_string_round_trip(pattern in siteswap()) {
        let text = pattern.pattern_string();
        let parsed = SiteSwap::from_string(&text, pattern.num_hands());
        prop_assert_eq!(parsed, Ok(pattern));
    }

    /// The throw cursor cycles through the pattern forever
    #[test]
    fn prop_throws_cycle(pattern in siteswap(), count in 0usize..50) {
        for (i, throw) in pattern.throws().take(count).enumerate() {
            prop_assert_eq!(throw.index, i % pattern.len());
            prop_assert_eq!(throw.height, pattern.pattern()[i % pattern.len()]);
        }
    }
}

// ===== Analysis properties =====

proptest! {
    /// Every ball belongs to exactly one orbit
    #[test]
    fn prop_orbits_partition_balls(pattern in siteswap()) {
        let analysis = pattern.analyze();
        let mut ids: Vec<usize> = analysis
            .orbits
            .iter()
            .flat_map(|o| o.ball_ids.iter().copied())
            .collect();
        ids.sort_unstable();
        let expected: Vec<usize> = (0..pattern.num_balls()).collect();
        prop_assert_eq!(ids, expected);
    }

    /// The cycle is the lcm of orbit lengths and every orbit divides it
    #[test]
    fn prop_cycle_is_lcm(pattern in siteswap()) {
        let analysis = pattern.analyze();
        let lengths: Vec<u64> = analysis.orbits.iter().map(|o| o.length).collect();
        prop_assert_eq!(analysis.cycle_length, lcm(lengths.iter().copied()));
        for length in lengths {
            prop_assert_eq!(analysis.cycle_length % length, 0);
        }
    }

    /// Orbit length is the sum of its heights and returns to its first hand
    #[test]
    fn prop_orbits_close(pattern in siteswap()) {
        let analysis = pattern.analyze();
        for orbit in &analysis.orbits {
            let total: u64 = orbit.sequence.iter().map(|s| s.height).sum();
            prop_assert_eq!(total, orbit.length);
            prop_assert_eq!(orbit.length % orbit.num_balls() as u64, 0);
            for pair in orbit.sequence.windows(2) {
                prop_assert_eq!(pair[0].catch_hand, pair[1].throw_hand);
            }
            let first = orbit.sequence[0];
            let last = orbit.sequence[orbit.sequence.len() - 1];
            prop_assert_eq!(last.catch_hand, first.throw_hand);
        }
    }
}

// ===== Animation properties =====

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Exactly one motion covers every sampled time, for every ball and hand
    #[test]
    fn prop_paths_tile_cycle(pattern in siteswap()) {
        let anim = pattern.animation();
        prop_assert_eq!(anim.num_balls(), pattern.num_balls());
        prop_assert_eq!(anim.num_hands(), pattern.num_hands());
        let cycle = anim.cycle_length() as f64;
        for t in sample_times(anim.cycle_length()) {
            for ball in 0..anim.num_balls() {
                prop_assert_eq!(covering(anim.ball_path(ball), t, cycle), 1, "ball {} at {}", ball, t);
            }
            for hand in 0..anim.num_hands() {
                prop_assert_eq!(covering(anim.hand_path(hand), t, cycle), 1, "hand {} at {}", hand, t);
            }
        }
    }

    /// Positions repeat after one cycle
    #[test]
    fn prop_locations_periodic(pattern in siteswap(), t in -50.0f64..50.0) {
        let anim = pattern.animation();
        let cycle = anim.cycle_length() as f64;
        let now = anim.frame_at(t);
        let later = anim.frame_at(t + cycle);
        for (a, b) in now.balls.iter().chain(&now.hands).zip(later.balls.iter().chain(&later.hands)) {
            prop_assert!(a.distance(*b) < 1e-6, "{:?} vs {:?}", a, b);
        }
    }

    /// Every sampled position lies inside the bounding box
    #[test]
    fn prop_samples_inside_bounding_box(pattern in siteswap()) {
        let anim = pattern.animation();
        let bbox = anim.bounding_box();
        prop_assert!(bbox.minima.is_finite() && bbox.maxima.is_finite());
        prop_assert!(bbox.minima.x <= bbox.maxima.x);
        prop_assert!(bbox.minima.y <= bbox.maxima.y);
        for t in sample_times(anim.cycle_length()) {
            let frame = anim.frame_at(t + 0.125);
            for p in frame.balls.iter().chain(&frame.hands) {
                prop_assert!(bbox.contains(*p, 1e-6), "{:?} outside {:?}", p, bbox);
            }
        }
    }
}
