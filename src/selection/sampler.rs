use rand::Rng;

/// Draws `count` entries from `pool` uniformly without replacement, in
/// random order. A count of zero or less returns the whole pool in its
/// original order: zero deliberately means "take everything", and negative
/// counts are treated as zero.
pub fn sample<R: Rng>(rng: &mut R, pool: Vec<String>, count: i64) -> Vec<String> {
    if count <= 0 {
        return pool;
    }

    let mut remaining = pool;
    let take = (count as usize).min(remaining.len());
    let mut picks = Vec::with_capacity(take);
    for _ in 0..take {
        let idx = rng.gen_range(0..remaining.len());
        picks.push(remaining.swap_remove(idx));
    }
    picks
}
