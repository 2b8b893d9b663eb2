//! Bulk catalog growth: synthesizes tier-appropriate vocabulary from seed word lists and
//! suffix rules until every tier reaches its target size.

use std::collections::HashSet;

use serde::Serialize;

use crate::db::operations::{content, NewWord};
use crate::db::DatabaseProxy;
use crate::services::word_lists::categories_for_tier;
use crate::services::CoreError;

const BATCH_SIZE: usize = 100;
const MAX_DIFFICULTY: i64 = 10;
const MAX_VARIATIONS: usize = 5;
const ABSTRACT_SUFFIXES: [&str; 4] = ["tion", "ism", "ity", "ness"];

#[derive(Debug, Clone, Copy)]
pub struct ExpansionPlan {
    pub min_target: i64,
    pub multiplier: i64,
}

impl Default for ExpansionPlan {
    fn default() -> Self {
        Self {
            min_target: 1000,
            multiplier: 100,
        }
    }
}

impl ExpansionPlan {
    pub fn target_for(&self, current: i64) -> i64 {
        self.min_target.max(current * self.multiplier)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierExpansion {
    pub tier_id: i64,
    pub tier_name: String,
    pub before: i64,
    pub added: i64,
    pub after: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedWord {
    pub word: String,
    pub definition: String,
    pub part_of_speech: &'static str,
    pub category: String,
    pub difficulty: i64,
}

impl GeneratedWord {
    fn into_new_word(self, tier_id: i64) -> NewWord {
        NewWord::new(
            tier_id,
            self.word,
            self.definition,
            self.part_of_speech,
            &self.category,
        )
        .with_difficulty(self.difficulty)
    }
}

pub async fn expand_all_tiers(
    proxy: &DatabaseProxy,
    plan: ExpansionPlan,
) -> Result<Vec<TierExpansion>, CoreError> {
    let tiers = content::list_tiers(proxy).await?;
    let mut reports = Vec::with_capacity(tiers.len());

    for tier in tiers {
        let report = expand_tier(proxy, tier.id, &tier.name, plan).await?;
        reports.push(report);
    }

    Ok(reports)
}

pub async fn expand_tier(
    proxy: &DatabaseProxy,
    tier_id: i64,
    tier_name: &str,
    plan: ExpansionPlan,
) -> Result<TierExpansion, CoreError> {
    let before = content::count_words_in_tier(proxy, tier_id).await?;
    let target = plan.target_for(before);
    let needed = (target - before).max(0);

    tracing::info!(tier_id, tier_name, before, target, needed, "expanding tier");

    let mut known: HashSet<String> = content::list_tier_spellings(proxy, tier_id)
        .await?
        .into_iter()
        .collect();
    let mut pending: Vec<NewWord> = Vec::with_capacity(BATCH_SIZE);
    let mut added: i64 = 0;

    let from_lists = categories_for_tier(tier_id)
        .iter()
        .flat_map(|(category, words)| {
            words
                .iter()
                .flat_map(move |base| generate_word_variations(base, category, tier_id))
        });

    for candidate in from_lists {
        if added >= needed {
            break;
        }
        if !known.insert(candidate.word.to_lowercase()) {
            continue;
        }
        added += 1;
        stage_word(proxy, &mut pending, candidate.into_new_word(tier_id), added).await?;
    }

    // Generated names carry the running count of added words; a clash moves on to the next number.
    let mut clashes = 0;
    while added < needed {
        let candidate = generate_educational_word(tier_id, added as usize + clashes);
        if !known.insert(candidate.word.to_lowercase()) {
            clashes += 1;
            continue;
        }
        added += 1;
        stage_word(proxy, &mut pending, candidate.into_new_word(tier_id), added).await?;
    }

    if !pending.is_empty() {
        content::insert_words(proxy, &pending).await?;
    }

    let after = content::count_words_in_tier(proxy, tier_id).await?;
    tracing::info!(tier_id, tier_name, added, after, "tier expansion complete");

    Ok(TierExpansion {
        tier_id,
        tier_name: tier_name.to_string(),
        before,
        added,
        after,
    })
}

async fn stage_word(
    proxy: &DatabaseProxy,
    pending: &mut Vec<NewWord>,
    word: NewWord,
    added: i64,
) -> Result<(), CoreError> {
    let tier_id = word.tier_id;
    pending.push(word);
    if pending.len() == BATCH_SIZE {
        content::insert_words(proxy, pending).await?;
        pending.clear();
        tracing::info!(tier_id, added, "vocabulary batch committed");
    }
    Ok(())
}

pub fn generate_word_variations(base_word: &str, category: &str, tier_id: i64) -> Vec<GeneratedWord> {
    let base_difficulty = (tier_id * 2).min(MAX_DIFFICULTY);
    let mut variations = vec![GeneratedWord {
        word: base_word.to_string(),
        definition: tier_appropriate_definition(base_word, tier_id),
        part_of_speech: "noun",
        category: category.to_string(),
        difficulty: base_difficulty,
    }];

    if tier_id >= 3 && !base_word.ends_with('s') {
        let plural = match base_word.strip_suffix('y') {
            Some(stem) => format!("{stem}ies"),
            None => format!("{base_word}s"),
        };
        variations.push(GeneratedWord {
            word: plural,
            definition: format!("More than one {base_word}"),
            part_of_speech: "noun",
            category: category.to_string(),
            difficulty: base_difficulty,
        });
    }

    if tier_id >= 4 {
        let adjective_suffix = match category {
            "color" => Some("ish"),
            "emotion" => Some("ly"),
            "science" => Some("ic"),
            _ => None,
        };
        if let Some(suffix) = adjective_suffix {
            variations.push(GeneratedWord {
                word: format!("{base_word}{suffix}"),
                definition: format!("Having the quality of {base_word}"),
                part_of_speech: "adjective",
                category: category.to_string(),
                difficulty: (tier_id * 2 + 1).min(MAX_DIFFICULTY),
            });
        }
    }

    if tier_id >= 5 {
        for suffix in ABSTRACT_SUFFIXES {
            if variations.len() >= MAX_VARIATIONS {
                break;
            }
            variations.push(GeneratedWord {
                word: format!("{base_word}{suffix}"),
                definition: format!("The concept or state related to {base_word}"),
                part_of_speech: "noun",
                category: category.to_string(),
                difficulty: (tier_id * 2 + 2).min(MAX_DIFFICULTY),
            });
        }
    }

    variations
}

pub fn generate_educational_word(tier_id: i64, index: usize) -> GeneratedWord {
    let (prefixes, bases): (&[&str; 5], &[&str; 5]) = match tier_id {
        i64::MIN..=1 => (
            &["big", "small", "good", "bad", "nice"],
            &["thing", "place", "time", "person", "animal"],
        ),
        2 => (
            &["happy", "funny", "pretty", "smart", "kind"],
            &["story", "game", "friend", "family", "school"],
        ),
        3 => (
            &["amazing", "important", "interesting", "wonderful", "excellent"],
            &["discovery", "adventure", "mystery", "invention", "explorer"],
        ),
        4 => (
            &["significant", "remarkable", "substantial", "comprehensive", "fundamental"],
            &["phenomenon", "hypothesis", "investigation", "experiment", "analysis"],
        ),
        5 => (
            &["extraordinary", "sophisticated", "unprecedented", "revolutionary", "paradigmatic"],
            &["methodology", "framework", "paradigm", "synthesis", "implementation"],
        ),
        _ => (
            &[
                "multidisciplinary",
                "interdisciplinary",
                "transformational",
                "epistemological",
                "phenomenological",
            ],
            &[
                "conceptualization",
                "systematization",
                "operationalization",
                "institutionalization",
                "internationalization",
            ],
        ),
    };

    let word = format!(
        "{}_{}_{index}",
        prefixes[index % prefixes.len()],
        bases[index % bases.len()]
    );

    GeneratedWord {
        definition: tier_appropriate_definition(&word, tier_id),
        word,
        part_of_speech: "noun",
        category: "generated".to_string(),
        difficulty: (tier_id * 2).min(MAX_DIFFICULTY),
    }
}

pub fn tier_appropriate_definition(word: &str, tier_id: i64) -> String {
    match tier_id {
        i64::MIN..=2 => format!("A {word} is something you can see and learn about"),
        3 => format!(
            "A {word} is an important concept that helps us understand the world around us"
        ),
        4 => format!(
            "The term {word} refers to a significant element in academic study and critical thinking"
        ),
        5 => format!(
            "The concept of {word} represents an advanced topic requiring analytical and synthetic thinking skills"
        ),
        _ => format!(
            "The term {word} denotes a sophisticated construct within academic, professional, or specialized discourse"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::operations::AgeTier;
    use crate::db::test_proxy;

    fn words(variations: &[GeneratedWord]) -> Vec<&str> {
        variations.iter().map(|v| v.word.as_str()).collect()
    }

    #[test]
    fn young_tiers_only_get_the_base_word() {
        let variations = generate_word_variations("puppy", "animals", 1);
        assert_eq!(words(&variations), vec!["puppy"]);
        assert_eq!(variations[0].difficulty, 2);
        assert_eq!(
            variations[0].definition,
            "A puppy is something you can see and learn about"
        );
    }

    #[test]
    fn elementary_adds_plurals() {
        assert_eq!(
            words(&generate_word_variations("mystery", "literature", 3)),
            vec!["mystery", "mysteries"]
        );
        assert_eq!(
            words(&generate_word_variations("magnet", "science", 3)),
            vec!["magnet", "magnets"]
        );
        assert_eq!(
            words(&generate_word_variations("gas", "science", 3)),
            vec!["gas"]
        );
    }

    #[test]
    fn middle_school_adds_adjectives_for_known_categories() {
        let variations = generate_word_variations("atom", "science", 4);
        assert_eq!(words(&variations), vec!["atom", "atoms", "atomic"]);
        assert_eq!(variations[2].part_of_speech, "adjective");
        assert_eq!(variations[2].difficulty, 9);

        assert_eq!(
            words(&generate_word_variations("cell", "biology", 4)),
            vec!["cell", "cells"]
        );
    }

    #[test]
    fn high_school_fills_up_to_five_with_abstract_forms() {
        let variations = generate_word_variations("limit", "calculus", 5);
        assert_eq!(
            words(&variations),
            vec!["limit", "limits", "limittion", "limitism", "limitity"]
        );
        assert!(variations.iter().all(|v| v.difficulty <= 10));
    }

    #[test]
    fn generated_words_cycle_through_tier_lists() {
        let word = generate_educational_word(3, 7);
        assert_eq!(word.word, "wonderful_mystery_7");
        assert_eq!(word.category, "generated");
        assert_eq!(word.difficulty, 6);
        assert!(word.definition.starts_with("A wonderful_mystery_7 is an important concept"));
    }

    #[test]
    fn plan_targets_at_least_the_minimum() {
        let plan = ExpansionPlan::default();
        assert_eq!(plan.target_for(3), 1000);
        assert_eq!(plan.target_for(20), 2000);
    }

    async fn insert_tier(proxy: &DatabaseProxy, id: i64, name: &str) {
        content::insert_tier(
            proxy,
            &AgeTier {
                id,
                name: name.to_string(),
                min_age: 2,
                max_age: 4,
                description: None,
                cognitive_stage: None,
                attention_span_minutes: Some(5),
                words_per_session: Some(5),
            },
        )
        .await
        .unwrap();
    }

    fn generated_numbers(spellings: &[String]) -> Vec<usize> {
        let mut numbers: Vec<usize> = spellings
            .iter()
            .filter(|word| word.contains('_'))
            .filter_map(|word| word.rsplit('_').next()?.parse().ok())
            .collect();
        numbers.sort_unstable();
        numbers
    }

    #[tokio::test]
    async fn expansion_reaches_target_without_duplicates() {
        let proxy = test_proxy().await;
        insert_tier(&proxy, 1, "Early Verbal").await;
        content::insert_word(&proxy, &NewWord::new(1, "Puppy", "A young dog", "noun", "animals"))
            .await
            .unwrap();

        let plan = ExpansionPlan {
            min_target: 250,
            multiplier: 100,
        };
        let report = expand_tier(&proxy, 1, "Early Verbal", plan).await.unwrap();

        assert_eq!(report.before, 1);
        assert_eq!(report.added, 249);
        assert_eq!(report.after, 250);

        let spellings = content::list_tier_spellings(&proxy, 1).await.unwrap();
        let unique: HashSet<&String> = spellings.iter().collect();
        assert_eq!(unique.len(), spellings.len());

        // Running again with the same target adds nothing.
        let again = expand_tier(
            &proxy,
            1,
            "Early Verbal",
            ExpansionPlan {
                min_target: 250,
                multiplier: 1,
            },
        )
        .await
        .unwrap();
        assert_eq!(again.added, 0);
    }

    #[tokio::test]
    async fn generated_words_are_numbered_by_words_added_so_far() {
        let proxy = test_proxy().await;
        insert_tier(&proxy, 1, "Early Verbal").await;

        let plan = ExpansionPlan {
            min_target: 250,
            multiplier: 1,
        };
        let report = expand_tier(&proxy, 1, "Early Verbal", plan).await.unwrap();
        let spellings = content::list_tier_spellings(&proxy, 1).await.unwrap();
        let numbers = generated_numbers(&spellings);

        assert!(!numbers.is_empty());
        let from_lists = report.added as usize - numbers.len();
        assert!(from_lists > 0);
        assert_eq!(numbers, (from_lists..report.added as usize).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn clashing_generated_word_is_skipped_not_repeated() {
        let proxy = test_proxy().await;
        // No category lists for this tier, so every new word is generated.
        insert_tier(&proxy, 7, "Custom").await;
        content::insert_word(
            &proxy,
            &NewWord::new(7, "interdisciplinary_systematization_1", "Taken", "noun", "generated"),
        )
        .await
        .unwrap();

        let plan = ExpansionPlan {
            min_target: 4,
            multiplier: 1,
        };
        let report = expand_tier(&proxy, 7, "Custom", plan).await.unwrap();
        assert_eq!(report.added, 3);
        assert_eq!(report.after, 4);

        let spellings = content::list_tier_spellings(&proxy, 7).await.unwrap();
        assert_eq!(generated_numbers(&spellings), vec![0, 1, 2, 3]);
    }
}
