use std::collections::HashSet;

use chrono::{Duration, NaiveDate, Utc};
use serde::Serialize;

use crate::auth::SessionContext;
use crate::db::operations::{content, learning};
use crate::db::DatabaseProxy;
use crate::services::mastery::LEARNED_THRESHOLD;
use crate::services::CoreError;

// Display values for sessions without stored history.
const EPHEMERAL_LEARNED_WORDS: i64 = 8;
const EPHEMERAL_MASTERED_WORDS: i64 = 15;
const EPHEMERAL_STREAK_DAYS: i64 = 3;

/// Tiers above this get the older-learner wording and goals.
const YOUNG_LEARNER_MAX_TIER: i64 = 2;
const STREAK_PROGRESS_DAYS: i64 = 30;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub username: String,
    pub tier_id: i64,
    pub tier_name: Option<String>,
    pub is_ephemeral: bool,
    pub total_words: i64,
    pub learned_words: i64,
    pub progress_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Achievement {
    pub icon: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub points: i64,
    pub progress: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AchievementStats {
    pub words_learned: i64,
    pub total_words: i64,
    pub streak_days: i64,
    pub streak_progress: f64,
    pub total_points: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AchievementBoard {
    pub earned: Vec<Achievement>,
    pub available: Vec<Achievement>,
    pub stats: AchievementStats,
}

pub async fn dashboard(
    proxy: &DatabaseProxy,
    session: &SessionContext,
) -> Result<DashboardSummary, CoreError> {
    let tier_id = session.tier_id();
    let tier_name = content::get_tier(proxy, tier_id).await?.map(|tier| tier.name);
    let total_words = content::count_words_in_tier(proxy, tier_id).await?;

    let learned_words = match session.learner.registered_id() {
        Some(learner_id) => {
            learning::count_mastered_words(proxy, learner_id, LEARNED_THRESHOLD).await?
        }
        None => EPHEMERAL_LEARNED_WORDS,
    };

    Ok(DashboardSummary {
        username: session.username.clone(),
        tier_id,
        tier_name,
        is_ephemeral: session.is_ephemeral(),
        total_words,
        learned_words,
        progress_percentage: progress_percentage(learned_words, total_words),
    })
}

pub async fn achievements(
    proxy: &DatabaseProxy,
    session: &SessionContext,
) -> Result<AchievementBoard, CoreError> {
    let tier_id = session.tier_id();
    let total_words = content::count_words_in_tier(proxy, tier_id).await?;

    let (mastered, streak) = match session.learner.registered_id() {
        Some(learner_id) => {
            let mastered =
                learning::count_mastered_words(proxy, learner_id, LEARNED_THRESHOLD).await?;
            let days: Vec<NaiveDate> = learning::list_practice_times(proxy, learner_id)
                .await?
                .into_iter()
                .map(|at| at.date_naive())
                .collect();
            (mastered, practice_streak(&days, Utc::now().date_naive()))
        }
        None => (EPHEMERAL_MASTERED_WORDS, EPHEMERAL_STREAK_DAYS),
    };

    Ok(build_achievement_board(tier_id, mastered, streak, total_words))
}

/// Percentage of the tier learned, one decimal, capped at 100; zero for an empty tier.
pub fn progress_percentage(learned: i64, total: i64) -> f64 {
    if total <= 0 {
        return 0.0;
    }
    let raw = (learned as f64 / total as f64 * 100.0).min(100.0);
    (raw * 10.0).round() / 10.0
}

/// Consecutive practice days ending today, or ending yesterday when today has no practice yet.
pub fn practice_streak(days: &[NaiveDate], today: NaiveDate) -> i64 {
    let practiced: HashSet<NaiveDate> = days.iter().copied().collect();

    let mut cursor = if practiced.contains(&today) {
        today
    } else {
        today - Duration::days(1)
    };

    let mut streak = 0;
    while practiced.contains(&cursor) {
        streak += 1;
        cursor -= Duration::days(1);
    }
    streak
}

pub fn build_achievement_board(
    tier_id: i64,
    mastered: i64,
    streak_days: i64,
    total_words: i64,
) -> AchievementBoard {
    let young = tier_id <= YOUNG_LEARNER_MAX_TIER;
    let master_goal = if young { 25 } else { 50 };

    let all = vec![
        Achievement {
            icon: "🏆",
            name: if young { "First Winner" } else { "First Achievement" },
            description: if young {
                "Win your first prize by learning 5 words!"
            } else {
                "Earn your first achievement by mastering 5 vocabulary words"
            },
            points: 10,
            progress: capped_ratio(mastered, 5),
        },
        Achievement {
            icon: "🔥",
            name: if young { "Hot Streak" } else { "Learning Streak" },
            description: if young {
                "Practice for 3 days in a row!"
            } else {
                "Maintain a 7-day learning streak"
            },
            points: 25,
            progress: capped_ratio(streak_days, 7),
        },
        Achievement {
            icon: "⭐",
            name: if young { "Super Star" } else { "Vocabulary Master" },
            description: if young {
                "Learn 25 words to become a super star!"
            } else {
                "Master 50 vocabulary words in your tier"
            },
            points: 50,
            progress: capped_ratio(mastered, master_goal),
        },
    ];

    let (earned, available): (Vec<_>, Vec<_>) =
        all.into_iter().partition(|achievement| achievement.progress >= 100.0);
    let total_points = earned.iter().map(|achievement| achievement.points).sum();

    AchievementBoard {
        earned,
        available,
        stats: AchievementStats {
            words_learned: mastered,
            total_words,
            streak_days,
            streak_progress: capped_ratio(streak_days, STREAK_PROGRESS_DAYS),
            total_points,
        },
    }
}

fn capped_ratio(value: i64, goal: i64) -> f64 {
    (value as f64 / goal as f64 * 100.0).min(100.0)
}
