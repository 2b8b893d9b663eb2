use crate::auth::Learner;
use crate::db::operations::{content, WordSnapshot};
use crate::db::DatabaseProxy;
use crate::services::CoreError;

/// Words below this mastery stay in rotation.
pub const REINFORCEMENT_THRESHOLD: i64 = 70;

/// Picks up to `limit` words of `tier_id` that still need practice, in ascending word id order.
///
/// Registered learners get words they have never attempted or hold below
/// [`REINFORCEMENT_THRESHOLD`]; ephemeral learners have no history, so every word of the tier
/// is eligible.
pub async fn select_practice_words(
    proxy: &DatabaseProxy,
    learner: &Learner,
    tier_id: i64,
    limit: i64,
) -> Result<Vec<WordSnapshot>, CoreError> {
    if limit <= 0 {
        return Ok(Vec::new());
    }

    if content::get_tier(proxy, tier_id).await?.is_none() {
        return Err(CoreError::NotFound(format!("tier {tier_id}")));
    }

    let words = match learner {
        Learner::Registered { id, .. } => {
            content::list_reinforcement_words(proxy, *id, tier_id, REINFORCEMENT_THRESHOLD, limit)
                .await?
        }
        Learner::Ephemeral { .. } => content::list_tier_words(proxy, tier_id, limit).await?,
    };

    tracing::debug!(
        tier_id,
        limit,
        selected = words.len(),
        ephemeral = learner.is_ephemeral(),
        "practice words selected"
    );
    Ok(words)
}
