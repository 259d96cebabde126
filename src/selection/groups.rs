use rand::Rng;
use std::collections::BTreeMap;

use crate::selection::sampler::sample;

/// Draws up to `count` entries from every group independently, owner
/// removed, and concatenates the draws in group-name order. Groups left
/// empty after owner removal contribute nothing. Picks are returned as raw
/// identifiers; no team/user classification happens at this layer.
pub fn choose_users_from_groups<R: Rng>(
    rng: &mut R,
    owner: &str,
    groups: &BTreeMap<String, Vec<String>>,
    count: i64,
) -> Vec<String> {
    let mut picks = Vec::new();
    for members in groups.values() {
        let filtered = without_owner(members, owner);
        if filtered.is_empty() {
            continue;
        }
        picks.extend(sample(rng, filtered, count));
    }
    picks
}

/// Draws up to `count` entries total from the freedom teams the owner
/// belongs to. An owner outside every team draws from all of them. Unlike
/// review groups, `count` bounds the whole draw, not a per-team draw.
pub fn choose_users_from_freedom_teams<R: Rng>(
    rng: &mut R,
    owner: &str,
    teams: &BTreeMap<String, Vec<String>>,
    count: i64,
) -> Vec<String> {
    let mut candidate_teams: Vec<&[String]> = teams
        .values()
        .filter(|members| members.iter().any(|member| member.as_str() == owner))
        .map(Vec::as_slice)
        .collect();
    if candidate_teams.is_empty() {
        candidate_teams = teams.values().map(Vec::as_slice).collect();
    }

    let pool: Vec<String> = candidate_teams
        .into_iter()
        .flat_map(|members| without_owner(members, owner))
        .collect();

    sample(rng, pool, count)
}

fn without_owner(members: &[String], owner: &str) -> Vec<String> {
    members
        .iter()
        .filter(|member| member.as_str() != owner)
        .cloned()
        .collect()
}
