//! E-E-A-T scoring.
//!
//! Four independent, pure scoring functions map extracted signals to integer
//! scores in `0..=5`; [`ScoreCard`] sums them into a total in `0..=20`.
//! Weights and breakpoints are fixed constants.

use crate::entities::EntitySet;
use crate::signals::{ExtractedSignals, LastUpdated};
use serde::Serialize;
use std::collections::BTreeSet;

/// Highest score a single dimension can reach.
pub const MAX_DIMENSION_SCORE: u8 = 5;

/// Highest total score.
pub const MAX_TOTAL_SCORE: u8 = 4 * MAX_DIMENSION_SCORE;

/// `(minimum entity count, score)`, checked top-down.
const EXPERTISE_STEPS: [(usize, u8); 5] = [(10, 5), (7, 4), (5, 3), (3, 2), (1, 1)];

/// `(minimum outbound link count, score)`, checked top-down.
const TRUSTWORTHINESS_STEPS: [(usize, u8); 5] = [(10, 5), (7, 4), (4, 3), (2, 2), (1, 1)];

/// `(schema type, points)` for authoritativeness.
const AUTHORITATIVE_SCHEMA_TYPES: [(&str, u8); 3] =
    [("Organization", 2), ("Person", 2), ("WebPage", 1)];

fn step(count: usize, steps: &[(usize, u8)]) -> u8 {
    steps
        .iter()
        .find(|(minimum, _)| count >= *minimum)
        .map(|(_, score)| *score)
        .unwrap_or(0)
}

/// Authorship (+2), author bio (+1) and an update marker (+2).
pub fn score_experience(has_author: bool, has_bio: bool, last_updated: &LastUpdated) -> u8 {
    let mut score = 0;
    if has_author {
        score += 2;
    }
    if has_bio {
        score += 1;
    }
    if last_updated.is_found() {
        score += 2;
    }
    score.min(MAX_DIMENSION_SCORE)
}

/// Step function over the combined entity count.
pub fn score_expertise(entity_count: usize) -> u8 {
    step(entity_count, &EXPERTISE_STEPS)
}

/// Points for recognized JSON-LD types; unknown types are ignored.
pub fn score_authoritativeness(schema_types: &BTreeSet<String>) -> u8 {
    let score: u8 = AUTHORITATIVE_SCHEMA_TYPES
        .iter()
        .filter(|(name, _)| schema_types.contains(*name))
        .map(|(_, points)| points)
        .sum();
    score.min(MAX_DIMENSION_SCORE)
}

/// Step function over the outbound link count.
pub fn score_trustworthiness(external_link_count: usize) -> u8 {
    step(external_link_count, &TRUSTWORTHINESS_STEPS)
}

/// Scores for the four E-E-A-T dimensions and their sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreCard {
    pub experience: u8,
    pub expertise: u8,
    pub authoritativeness: u8,
    pub trustworthiness: u8,
    pub total: u8,
}

impl ScoreCard {
    /// Build a card from component scores, deriving the total.
    pub fn new(experience: u8, expertise: u8, authoritativeness: u8, trustworthiness: u8) -> Self {
        Self {
            experience,
            expertise,
            authoritativeness,
            trustworthiness,
            total: experience + expertise + authoritativeness + trustworthiness,
        }
    }

    /// Score a page from its signals and aggregated entities.
    pub fn score(signals: &ExtractedSignals, entities: &EntitySet) -> Self {
        Self::new(
            score_experience(signals.has_author, signals.has_bio, &signals.last_updated),
            score_expertise(entities.count()),
            score_authoritativeness(&signals.schema_types),
            score_trustworthiness(signals.outbound_links.len()),
        )
    }

    /// `(label, score)` per dimension, in E-E-A-T order.
    pub fn dimensions(&self) -> [(&'static str, u8); 4] {
        [
            ("Experience", self.experience),
            ("Expertise", self.expertise),
            ("Authoritativeness", self.authoritativeness),
            ("Trustworthiness", self.trustworthiness),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn types(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn experience_weights() {
        let updated = LastUpdated::Found("2024-01-01 updated".to_string());
        assert_eq!(score_experience(false, false, &LastUpdated::NotFound), 0);
        assert_eq!(score_experience(true, true, &updated), 5);
        assert_eq!(score_experience(true, false, &LastUpdated::NotFound), 2);
        assert_eq!(score_experience(false, true, &LastUpdated::NotFound), 1);
        assert_eq!(score_experience(false, false, &updated), 2);
        assert_eq!(score_experience(true, false, &updated), 4);
    }

    #[test]
    fn expertise_breakpoints() {
        let expected = [
            (0, 0),
            (1, 1),
            (2, 1),
            (3, 2),
            (4, 2),
            (5, 3),
            (6, 3),
            (7, 4),
            (9, 4),
            (10, 5),
            (1000, 5),
        ];
        for (count, score) in expected {
            assert_eq!(score_expertise(count), score, "entity count {count}");
        }
    }

    #[test]
    fn trustworthiness_breakpoints() {
        let expected = [
            (0, 0),
            (1, 1),
            (2, 2),
            (3, 2),
            (4, 3),
            (6, 3),
            (7, 4),
            (9, 4),
            (10, 5),
            (250, 5),
        ];
        for (count, score) in expected {
            assert_eq!(score_trustworthiness(count), score, "link count {count}");
        }
    }

    #[test]
    fn step_scores_are_monotonic_and_bounded() {
        let mut previous = (0, 0);
        for n in 0..50 {
            let current = (score_expertise(n), score_trustworthiness(n));
            assert!(current.0 >= previous.0 && current.1 >= previous.1);
            assert!(current.0 <= MAX_DIMENSION_SCORE && current.1 <= MAX_DIMENSION_SCORE);
            previous = current;
        }
    }

    #[test]
    fn authoritativeness_weights() {
        assert_eq!(score_authoritativeness(&types(&[])), 0);
        assert_eq!(score_authoritativeness(&types(&["Organization"])), 2);
        assert_eq!(score_authoritativeness(&types(&["Person", "WebPage"])), 3);
        assert_eq!(
            score_authoritativeness(&types(&["Organization", "Person", "WebPage"])),
            5
        );
        assert_eq!(
            score_authoritativeness(&types(&["Organization", "Person", "WebPage", "Extra"])),
            5
        );
        // matching is exact and case-sensitive
        assert_eq!(score_authoritativeness(&types(&["organization", "Webpage"])), 0);
    }

    #[test]
    fn total_is_sum_of_components_and_bounded() {
        let updated = LastUpdated::Found("updated".to_string());
        for has_author in [false, true] {
            for has_bio in [false, true] {
                for last in [&LastUpdated::NotFound, &updated] {
                    for n in [0, 1, 3, 5, 7, 10, 40] {
                        let card = ScoreCard::new(
                            score_experience(has_author, has_bio, last),
                            score_expertise(n),
                            score_authoritativeness(&types(&["Person", "WebPage"])),
                            score_trustworthiness(n),
                        );
                        let sum: u8 = card.dimensions().iter().map(|(_, s)| s).sum();
                        assert_eq!(card.total, sum);
                        assert!(card.total <= MAX_TOTAL_SCORE);
                    }
                }
            }
        }
    }
}
