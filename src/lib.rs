pub mod config;
pub mod selection;

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::config::AssignConfig;
use crate::selection::{choose_users, choose_users_from_freedom_teams, choose_users_from_groups};

/// A candidate identifier. Anything containing a slash names a team
/// (`/handle` or `org/handle`); the team name is the part after the last
/// slash. Everything else is a plain user handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    User(String),
    Team(String),
}

impl Identifier {
    pub fn parse(raw: &str) -> Self {
        match raw.rfind('/') {
            Some(idx) => Identifier::Team(raw[idx + 1..].to_string()),
            None => Identifier::User(raw.to_string()),
        }
    }
}

/// One sampling pass over a flat pool, partitioned by the slash rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub users: Vec<String>,
    pub teams: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRequest {
    pub reviewers: Vec<String>,
    pub team_reviewers: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssigneeList {
    pub assignees: Vec<String>,
}

pub fn includes_skip_keywords(title: &str, skip_keywords: &[String]) -> bool {
    let lowered = title.to_lowercase();
    skip_keywords
        .iter()
        .any(|keyword| lowered.contains(&keyword.to_lowercase()))
}

pub fn choose_reviewers<R: Rng>(rng: &mut R, owner: &str, config: &AssignConfig) -> ReviewRequest {
    let mut reviewers = Vec::new();
    let mut team_reviewers = Vec::new();

    if config.use_freedom_teams {
        reviewers.extend(choose_users_from_freedom_teams(
            rng,
            owner,
            &config.freedom_teams,
            config.number_of_reviewers,
        ));
    }

    if config.use_review_groups {
        reviewers.extend(choose_users_from_groups(
            rng,
            owner,
            &config.review_groups,
            config.number_of_reviewers,
        ));
    }

    if config.add_reviewers {
        let selection = choose_users(
            rng,
            &config.reviewers,
            config.number_of_reviewers,
            Some(owner),
        );
        reviewers.extend(selection.users);
        team_reviewers.extend(selection.teams);
    }

    drop_skipped(&mut reviewers, &config.skip_users);
    drop_skipped(&mut team_reviewers, &config.skip_users);

    ReviewRequest {
        reviewers: dedup_stable(reviewers),
        team_reviewers: dedup_stable(team_reviewers),
    }
}

pub fn choose_assignees<R: Rng>(rng: &mut R, owner: &str, config: &AssignConfig) -> AssigneeList {
    let mut assignees = Vec::new();

    if config.use_assignee_groups {
        assignees.extend(choose_users_from_groups(
            rng,
            owner,
            &config.assignee_groups,
            config.number_of_assignees,
        ));
    }

    if config.add_assignees {
        // The flat assignee pool falls back to the reviewer pool when unset,
        // and team references are dropped since teams cannot be assigned.
        let pool = if config.assignees.is_empty() {
            &config.reviewers
        } else {
            &config.assignees
        };
        let selection = choose_users(rng, pool, config.number_of_assignees, Some(owner));
        assignees.extend(selection.users);
    }

    drop_skipped(&mut assignees, &config.skip_users);

    AssigneeList {
        assignees: dedup_stable(assignees),
    }
}

fn drop_skipped(entries: &mut Vec<String>, skip_users: &[String]) {
    if skip_users.is_empty() {
        return;
    }
    entries.retain(|entry| !skip_users.contains(entry));
}

fn dedup_stable(entries: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    entries
        .into_iter()
        .filter(|entry| seen.insert(entry.clone()))
        .collect()
}
