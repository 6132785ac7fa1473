//! Likelihood-answer lookup table.
//!
//! Intake forms ask "how likely are you to come?" as free text or a
//! dropdown. The answers map onto a 1-4 likelihood score through this one
//! table rather than string conditionals scattered through form handlers.
//! Matching is case- and whitespace-insensitive; anything unrecognized
//! falls back to [`DEFAULT_LIKELIHOOD`].

/// Score assigned to answers the table does not recognize.
pub const DEFAULT_LIKELIHOOD: u8 = 1;

/// Maps a free-text likelihood answer to a 1-4 score.
///
/// `4` is a firm yes, `1` is a no or an unrecognized answer.
#[must_use]
pub fn likelihood_score(answer: &str) -> u8 {
    let normalized = answer.trim().to_lowercase();
    match normalized.as_str() {
        "definitely" | "count me in" | "yes" | "absolutely" => 4,
        "very likely" | "probably" | "likely" => 3,
        "maybe" | "not sure" | "possibly" | "depends" => 2,
        "unlikely" | "probably not" | "no" => 1,
        _ => DEFAULT_LIKELIHOOD,
    }
}

/// Expands a 1-4 likelihood score onto the 0-10 engagement scale used by
/// champion criteria.
///
/// Scores below 1 clamp to 0 and scores above 4 clamp to 10, so callers
/// can feed either scale through without pre-checking.
#[must_use]
pub const fn engagement_scale(score: u8) -> u8 {
    match score {
        0 | 1 => 0,
        2 => 3,
        3 => 6,
        _ => 10,
    }
}
