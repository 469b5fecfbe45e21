//! # Recovery Scoring
//!
//! Matches the questionnaire's selected signs against each recovery type.
//! The score of a type is how many entries of its `signs` list are in the
//! selection (exact string equality, duplicates counted per entry).
//!
//! Ranking sorts descending by score with a stable sort, so types with the
//! same score keep their catalog order and repeated evaluations of the same
//! selection produce the same ranking.

use std::collections::BTreeSet;

use crate::catalog::{Catalog, RecoveryType};

/// One recovery type with its match count for a given selection.
#[derive(Debug)]
pub struct RecoveryScore<'a> {
    pub recovery_type: &'a RecoveryType,
    pub matched: usize,
}

/// Score every recovery type against `selected` and rank best-first.
pub fn rank<'a>(catalog: &'a Catalog, selected: &BTreeSet<String>) -> Vec<RecoveryScore<'a>> {
    let mut scores: Vec<RecoveryScore<'a>> = catalog
        .recovery_types()
        .iter()
        .map(|recovery_type| RecoveryScore {
            matched: recovery_type
                .signs
                .iter()
                .filter(|sign| selected.contains(sign.as_str()))
                .count(),
            recovery_type,
        })
        .collect();
    // sort_by is stable: equal scores keep catalog order
    scores.sort_by(|a, b| b.matched.cmp(&a.matched));
    scores
}

/// The top-ranked type, or `None` when nothing matched at all.
/// "No matches" is a distinct outcome, not a winner with score zero.
pub fn best_match<'a>(ranked: &'a [RecoveryScore<'a>]) -> Option<&'a RecoveryScore<'a>> {
    ranked.first().filter(|score| score.matched > 0)
}
