use crate::db::operations::{content, AgeTier, NewWord};
use crate::db::DatabaseProxy;

struct TierSeed {
    id: i64,
    name: &'static str,
    min_age: i64,
    max_age: i64,
    description: &'static str,
    cognitive_stage: &'static str,
    attention_span_minutes: i64,
    words_per_session: i64,
}

const AGE_TIERS: &[TierSeed] = &[
    TierSeed {
        id: 1,
        name: "Early Verbal",
        min_age: 2,
        max_age: 4,
        description: "Learning through sensory input and repetition",
        cognitive_stage: "Preoperational (early)",
        attention_span_minutes: 5,
        words_per_session: 5,
    },
    TierSeed {
        id: 2,
        name: "Preschool",
        min_age: 4,
        max_age: 6,
        description: "Language explosion and social play development",
        cognitive_stage: "Preoperational (advanced)",
        attention_span_minutes: 10,
        words_per_session: 8,
    },
    TierSeed {
        id: 3,
        name: "Elementary",
        min_age: 6,
        max_age: 10,
        description: "Logical thinking with concrete objects",
        cognitive_stage: "Concrete Operational",
        attention_span_minutes: 15,
        words_per_session: 12,
    },
    TierSeed {
        id: 4,
        name: "Middle School",
        min_age: 11,
        max_age: 14,
        description: "Abstract thinking development and problem solving",
        cognitive_stage: "Formal Operational (emerging)",
        attention_span_minutes: 25,
        words_per_session: 15,
    },
    TierSeed {
        id: 5,
        name: "High School",
        min_age: 15,
        max_age: 18,
        description: "Advanced abstract reasoning and goal-oriented behavior",
        cognitive_stage: "Formal Operational",
        attention_span_minutes: 30,
        words_per_session: 20,
    },
    TierSeed {
        id: 6,
        name: "Adult",
        min_age: 18,
        max_age: 99,
        description: "Self-directed learning and specialized domain focus",
        cognitive_stage: "Postformal",
        attention_span_minutes: 45,
        words_per_session: 25,
    },
];

// (tier, word, definition, part of speech, category)
const SAMPLE_WORDS: &[(i64, &str, &str, &str, &str)] = &[
    (1, "cat", "A small furry pet animal", "noun", "animals"),
    (1, "red", "The color of an apple", "adjective", "colors"),
    (1, "big", "Large in size", "adjective", "descriptors"),
    (3, "democracy", "A system of government by the people", "noun", "civics"),
    (3, "photosynthesis", "How plants make food from sunlight", "noun", "science"),
    (3, "multiply", "To increase a number by itself several times", "verb", "math"),
    (6, "paradigm", "A typical example or pattern of something", "noun", "academic"),
    (6, "ubiquitous", "Present, appearing, or found everywhere", "adjective", "academic"),
    (6, "etymology", "The origin and historical development of words", "noun", "linguistics"),
];

/// Installs the age tiers and a handful of starter words into an empty database.
/// Returns `false` when tiers already exist and nothing was written.
pub async fn seed_catalog(proxy: &DatabaseProxy) -> Result<bool, sqlx::Error> {
    if content::count_tiers(proxy).await? > 0 {
        tracing::debug!("age tiers already present, skipping seed");
        return Ok(false);
    }

    for tier in AGE_TIERS {
        content::insert_tier(
            proxy,
            &AgeTier {
                id: tier.id,
                name: tier.name.to_string(),
                min_age: tier.min_age,
                max_age: tier.max_age,
                description: Some(tier.description.to_string()),
                cognitive_stage: Some(tier.cognitive_stage.to_string()),
                attention_span_minutes: Some(tier.attention_span_minutes),
                words_per_session: Some(tier.words_per_session),
            },
        )
        .await?;
    }

    let words: Vec<NewWord> = SAMPLE_WORDS
        .iter()
        .map(|(tier_id, word, definition, part_of_speech, category)| {
            NewWord::new(*tier_id, *word, *definition, part_of_speech, category)
        })
        .collect();
    let inserted = content::insert_words(proxy, &words).await?;

    tracing::info!(
        tiers = AGE_TIERS.len(),
        words = inserted,
        "seeded age tiers and sample vocabulary"
    );
    Ok(true)
}
