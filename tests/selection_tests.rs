// Integration tests for the stratified random selector and its preview

use lexipick::{
    preview_distribution, select_random_with_rng, FilterTag, SyntCategory, TagPosition, Word,
    WordFilters,
};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::collections::HashMap;
use std::collections::HashSet;

fn rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

fn make_word(ortho: &str, category: &str, syllables: u32, grapheme_seg: &str) -> Word {
    serde_json::from_value(serde_json::json!({
        "MOTS": ortho,
        "PHONEMES": format!("ph{ortho}"),
        "SYNT": category,
        "NBSYLL": syllables.to_string(),
        "segmentation graphèmes": grapheme_seg,
    }))
    .unwrap()
}

fn even_pool(per_category: usize) -> Vec<Word> {
    let mut words = Vec::new();
    for category in ["NC", "VER"] {
        for i in 0..per_category {
            words.push(make_word(&format!("mot{category}{i}"), category, 1, ""));
        }
    }
    words
}

// ============ Count Contracts ============

#[test]
fn test_returns_exactly_n_distinct_members() {
    let pool = even_pool(50);
    let filters = WordFilters::default();

    for n in [1, 7, 30, 100] {
        let selected = select_random_with_rng(n, &pool, &filters, &mut rng(1));
        assert_eq!(selected.len(), n.min(pool.len()));

        let ids: HashSet<String> = selected.iter().map(|w| w.identity()).collect();
        assert_eq!(ids.len(), selected.len(), "duplicates for n={n}");

        let pool_ids: HashSet<String> = pool.iter().map(|w| w.identity()).collect();
        assert!(selected.iter().all(|w| pool_ids.contains(&w.identity())));
    }
}

#[test]
fn test_oversized_count_returns_whole_pool() {
    let pool = even_pool(5);
    let selected = select_random_with_rng(1000, &pool, &WordFilters::default(), &mut rng(2));
    assert_eq!(selected.len(), 10);

    let ids: HashSet<String> = selected.iter().map(|w| w.identity()).collect();
    assert_eq!(ids.len(), 10, "every pool record exactly once");
}

// ============ Balance ============

#[test]
fn test_single_criterion_balanced_within_one() {
    let pool = even_pool(50);
    let mut filters = WordFilters::default();
    filters.categories = vec![SyntCategory::CommonNoun, SyntCategory::Verb];

    // spec'd example: 100 words split 50/50, n=20 -> 10 per category
    let selected = select_random_with_rng(20, &pool, &filters, &mut rng(3));
    assert_eq!(selected.len(), 20);

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for w in &selected {
        *counts.entry(w.category.code()).or_insert(0) += 1;
    }
    assert_eq!(counts["NC"], 10);
    assert_eq!(counts["VER"], 10);
}

#[test]
fn test_balance_holds_across_seeds() {
    let pool = even_pool(40);
    let mut filters = WordFilters::default();
    filters.categories = vec![SyntCategory::CommonNoun, SyntCategory::Verb];

    for seed in 0..20 {
        let selected = select_random_with_rng(15, &pool, &filters, &mut rng(seed));
        let nc = selected
            .iter()
            .filter(|w| w.category == SyntCategory::CommonNoun)
            .count();
        let ver = selected.len() - nc;
        assert!(
            nc.abs_diff(ver) <= 1,
            "seed {seed}: unbalanced split {nc}/{ver}"
        );
    }
}

#[test]
fn test_starved_category_fills_without_error() {
    let mut pool = even_pool(0);
    for i in 0..40 {
        pool.push(make_word(&format!("nc{i}"), "NC", 1, ""));
    }
    pool.push(make_word("ver0", "VER", 1, ""));

    let mut filters = WordFilters::default();
    filters.categories = vec![SyntCategory::CommonNoun, SyntCategory::Verb];

    let selected = select_random_with_rng(10, &pool, &filters, &mut rng(4));
    assert_eq!(selected.len(), 10, "deficit made up from elsewhere");

    let ver = selected
        .iter()
        .filter(|w| w.category == SyntCategory::Verb)
        .count();
    assert_eq!(ver, 1);
}

#[test]
fn test_empty_combination_rolls_into_fill() {
    // No 3-syllable words at all: that combination contributes zero
    let mut pool = Vec::new();
    for i in 0..30 {
        pool.push(make_word(&format!("a{i}"), "NC", 2, ""));
    }

    let mut filters = WordFilters::default();
    filters.min_syllables = 2;
    filters.max_syllables = 3;

    let selected = select_random_with_rng(12, &pool, &filters, &mut rng(5));
    assert_eq!(selected.len(), 12);
    assert!(selected.iter().all(|w| w.syllables() == Some(2)));
}

// ============ Preview Consistency ============

#[test]
fn test_preview_matches_selector_axes() {
    let mut filters = WordFilters::default();
    filters.categories = vec![SyntCategory::CommonNoun, SyntCategory::Verb];

    let preview = preview_distribution(20, &filters);
    assert_eq!(preview.len(), 1);
    assert_eq!(preview[0].label, "Catégories (Nom commun, Verbe)");
    assert_eq!(preview[0].per_value, 10);
    assert!(!preview[0].is_single_value);
}

#[test]
fn test_preview_weighted_sum_approximates_count() {
    let mut filters = WordFilters::default();
    filters.categories = vec![
        SyntCategory::CommonNoun,
        SyntCategory::Verb,
        SyntCategory::Adjective,
    ];
    filters.min_syllables = 2;
    filters.max_syllables = 3;

    let count = 30;
    let preview = preview_distribution(count, &filters);
    for entry in &preview {
        assert!(!entry.is_single_value);
        // per_value * cardinality stays within rounding of the count
        let cardinality = entry.label.matches(',').count() + 1;
        let total = entry.per_value * cardinality;
        assert!(
            total.abs_diff(count) <= cardinality,
            "{}: {total} vs {count}",
            entry.label
        );
    }
}

#[test]
fn test_preview_single_value_entries() {
    let mut filters = WordFilters::default();
    filters.categories = vec![SyntCategory::CommonNoun];
    filters.graphemes.push(FilterTag::include("ch", TagPosition::Start));

    let preview = preview_distribution(18, &filters);
    assert_eq!(preview.len(), 2);
    assert!(preview.iter().all(|p| p.is_single_value));
    assert!(preview.iter().all(|p| p.per_value == 18));
}

#[test]
fn test_preview_empty_for_default_filters() {
    assert!(preview_distribution(25, &WordFilters::default()).is_empty());
}

// ============ Grapheme Stratification ============

#[test]
fn test_grapheme_axis_draws_from_both_values() {
    let mut pool = Vec::new();
    for i in 0..20 {
        pool.push(make_word(&format!("ch{i}"), "NC", 1, "ch-a-t"));
    }
    for i in 0..20 {
        pool.push(make_word(&format!("ou{i}"), "NC", 1, "p-ou-l"));
    }

    let mut filters = WordFilters::default();
    filters.graphemes.push(FilterTag::include("ch", TagPosition::Anywhere));
    filters.graphemes.push(FilterTag::include("ou", TagPosition::Anywhere));

    let selected = select_random_with_rng(10, &pool, &filters, &mut rng(6));
    assert_eq!(selected.len(), 10);

    let with_ch = selected
        .iter()
        .filter(|w| w.grapheme_segments().iter().any(|s| s == "ch"))
        .count();
    assert_eq!(with_ch, 5, "5 per grapheme value");
}

// ============ Determinism ============

#[test]
fn test_same_seed_same_draw() {
    let pool = even_pool(25);
    let mut filters = WordFilters::default();
    filters.categories = vec![SyntCategory::CommonNoun, SyntCategory::Verb];

    let a: Vec<String> = select_random_with_rng(9, &pool, &filters, &mut rng(11))
        .iter()
        .map(|w| w.identity())
        .collect();
    let b: Vec<String> = select_random_with_rng(9, &pool, &filters, &mut rng(11))
        .iter()
        .map(|w| w.identity())
        .collect();
    assert_eq!(a, b);
}
