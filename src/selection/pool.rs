use rand::Rng;

use crate::selection::sampler::sample;
use crate::{Identifier, Selection};

/// Picks from a flat candidate pool. The excluded identifier (the PR
/// author) is filtered out first, then the draw is partitioned into plain
/// users and team references. Duplicate entries in the pool stay distinct.
pub fn choose_users<R: Rng>(
    rng: &mut R,
    pool: &[String],
    count: i64,
    exclude: Option<&str>,
) -> Selection {
    let filtered: Vec<String> = pool
        .iter()
        .filter(|candidate| exclude != Some(candidate.as_str()))
        .cloned()
        .collect();

    classify(sample(rng, filtered, count))
}

fn classify(picks: Vec<String>) -> Selection {
    let mut selection = Selection::default();
    for pick in picks {
        match Identifier::parse(&pick) {
            Identifier::User(name) => selection.users.push(name),
            Identifier::Team(name) => selection.teams.push(name),
        }
    }
    selection
}
