use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::auth::Learner;
use crate::db::operations::learning;
use crate::db::operations::MasteryRecord;
use crate::db::DatabaseProxy;
use crate::services::CoreError;

pub const MAX_MASTERY: i64 = 100;
/// Mastery at or above which a word counts as learned on dashboards and achievements.
pub const LEARNED_THRESHOLD: i64 = 80;

// Fixed answer for sessions without a stored learner.
const EPHEMERAL_MASTERY_CORRECT: i64 = 75;
const EPHEMERAL_MASTERY_INCORRECT: i64 = 50;
const EPHEMERAL_ATTEMPTS: i64 = 3;
const EPHEMERAL_CORRECT: i64 = 2;

/// `min(100, floor(100 * correct / attempts))`, or 0 before any attempt.
pub fn mastery_score(correct: i64, attempts: i64) -> i64 {
    if attempts <= 0 {
        return 0;
    }
    (MAX_MASTERY * correct.max(0) / attempts).min(MAX_MASTERY)
}

/// Applies one attempt on top of `current` (or a fresh record) and recomputes mastery.
pub fn next_record(
    current: Option<&MasteryRecord>,
    learner_id: i64,
    word_id: i64,
    was_correct: bool,
    now: DateTime<Utc>,
) -> MasteryRecord {
    let (attempts, correct) = current.map_or((0, 0), |r| (r.attempts, r.correct));
    let attempts = attempts + 1;
    let correct = correct + i64::from(was_correct);

    MasteryRecord {
        learner_id,
        word_id,
        attempts,
        correct,
        mastery: mastery_score(correct, attempts),
        last_practiced_at: now,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    Recorded(MasteryRecord),
    /// Nothing was stored; the triple is a fixed placeholder kept for client compatibility.
    Synthetic {
        mastery: i64,
        attempts: i64,
        correct: i64,
    },
}

impl AttemptOutcome {
    pub fn mastery(&self) -> i64 {
        match self {
            AttemptOutcome::Recorded(record) => record.mastery,
            AttemptOutcome::Synthetic { mastery, .. } => *mastery,
        }
    }

    pub fn attempts(&self) -> i64 {
        match self {
            AttemptOutcome::Recorded(record) => record.attempts,
            AttemptOutcome::Synthetic { attempts, .. } => *attempts,
        }
    }

    pub fn correct(&self) -> i64 {
        match self {
            AttemptOutcome::Recorded(record) => record.correct,
            AttemptOutcome::Synthetic { correct, .. } => *correct,
        }
    }

    pub fn summary(&self) -> AttemptSummary {
        AttemptSummary {
            success: true,
            mastery: self.mastery(),
            attempts: self.attempts(),
            correct: self.correct(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttemptSummary {
    pub success: bool,
    pub mastery: i64,
    pub attempts: i64,
    pub correct: i64,
}

/// Records one practice outcome. Word existence is the caller's concern: an unknown
/// `word_id` produces an orphan record rather than an error.
pub async fn record_attempt(
    proxy: &DatabaseProxy,
    learner: &Learner,
    word_id: i64,
    was_correct: bool,
) -> Result<AttemptOutcome, CoreError> {
    let learner_id = match learner {
        Learner::Registered { id, .. } => *id,
        Learner::Ephemeral { .. } => {
            return Ok(AttemptOutcome::Synthetic {
                mastery: if was_correct {
                    EPHEMERAL_MASTERY_CORRECT
                } else {
                    EPHEMERAL_MASTERY_INCORRECT
                },
                attempts: EPHEMERAL_ATTEMPTS,
                correct: EPHEMERAL_CORRECT,
            });
        }
    };

    let record =
        learning::apply_attempt(proxy, learner_id, word_id, was_correct, Utc::now()).await?;
    tracing::debug!(
        learner_id,
        word_id,
        attempts = record.attempts,
        mastery = record.mastery,
        "practice attempt recorded"
    );
    Ok(AttemptOutcome::Recorded(record))
}
