use rand::Rng;

use crate::geometry::Position;

/// Draws an (origin, destination) pair of stop indices that never coincide.
///
/// A destination draw that lands on the origin is moved to the next stop in
/// list order instead of redrawn, so the pick always terminates.
/// Returns `None` when there are fewer than two stops to choose from.
pub fn pick_stop_pair<R: Rng + ?Sized>(rng: &mut R, stop_count: usize) -> Option<(usize, usize)> {
    if stop_count < 2 {
        return None;
    }

    let origin = rng.gen_range(0..stop_count);
    let drawn = rng.gen_range(0..stop_count);
    let destination = if drawn == origin {
        (drawn + 1) % stop_count
    } else {
        drawn
    };

    Some((origin, destination))
}

/// Uniform offset in `[-range, range]` on both axes around `center`.
pub fn jittered<R: Rng + ?Sized>(rng: &mut R, center: Position, range: f32) -> Position {
    if range <= 0.0 {
        return center;
    }
    center.offset(rng.gen_range(-range..=range), rng.gen_range(-range..=range))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_pair_never_repeats_origin() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..2000 {
            let (origin, destination) = pick_stop_pair(&mut rng, 6).unwrap();
            assert_ne!(origin, destination);
            assert!(origin < 6 && destination < 6);
        }
    }

    #[test]
    fn test_two_stops_always_swap() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..100 {
            let (origin, destination) = pick_stop_pair(&mut rng, 2).unwrap();
            assert_eq!(destination, 1 - origin);
        }
    }

    #[test]
    fn test_too_few_stops() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(pick_stop_pair(&mut rng, 0), None);
        assert_eq!(pick_stop_pair(&mut rng, 1), None);
    }

    #[test]
    fn test_jitter_stays_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let center = Position::new(110.0, 110.0);
        for _ in 0..500 {
            let p = jittered(&mut rng, center, 12.0);
            assert!((p.x - center.x).abs() <= 12.0);
            assert!((p.y - center.y).abs() <= 12.0);
        }
    }

    #[test]
    fn test_same_seed_same_draws() {
        let mut a = ChaCha8Rng::seed_from_u64(99);
        let mut b = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..50 {
            assert_eq!(pick_stop_pair(&mut a, 6), pick_stop_pair(&mut b, 6));
        }
    }
}
