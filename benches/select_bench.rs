// Performance benchmarks for lexipick filtering and selection

use lexipick::{
    filter_pool, select_random_with_rng, FilterTag, SyntCategory, TagPosition, Word, WordFilters,
};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::time::Instant;

fn main() {
    println!("🏃 Lexipick Performance Benchmarks\n");

    let pool = synthetic_pool(5000);

    bench_filter(&pool);
    bench_uniform_select(&pool);
    bench_stratified_select(&pool);

    println!("\n✅ Benchmarks completed!");
}

/// Pool in the size range of the real base (a few thousand records)
fn synthetic_pool(size: usize) -> Vec<Word> {
    let categories = ["NC", "VER", "ADJ", "ADV", "PRE"];
    let structures = ["a", "b", "c", "d", "e", "f", "g"];

    (0..size)
        .map(|i| {
            let ortho = format!("mot{i}");
            serde_json::from_value(serde_json::json!({
                "MOTS": ortho,
                "PHONEMES": format!("ph{i}"),
                "SYNT": categories[i % categories.len()],
                "NBSYLL": ((i % 4) + 1).to_string(),
                "APPUI LEXICAL": ((i % 4) + 1).to_string(),
                "progression structure": structures[i % structures.len()],
                "progression graphèmes": ((i % 13) + 1).to_string(),
                "segmentation graphèmes": "ch-a-t",
                "segmentation phonèmes": "S.a",
            }))
            .unwrap()
        })
        .collect()
}

fn bench_filter(pool: &[Word]) {
    println!("🔍 FILTER ({} records)", pool.len());
    println!("─────────────────────────────");

    let mut narrow = WordFilters::default();
    narrow.categories = vec![SyntCategory::CommonNoun, SyntCategory::Verb];
    narrow.min_syllables = 1;
    narrow.max_syllables = 2;
    narrow.search.push(FilterTag::include("mot", TagPosition::Start));

    let cases = [
        ("default", WordFilters::default()),
        ("narrow", narrow),
    ];

    for (name, filters) in &cases {
        let start = Instant::now();
        let kept = filter_pool(pool, filters);
        let duration = start.elapsed();

        println!(
            "  {:<12} → {} kept in {:.3}ms",
            name,
            kept.len(),
            duration.as_secs_f64() * 1000.0
        );
    }
    println!();
}

fn bench_uniform_select(pool: &[Word]) {
    println!("🎲 UNIFORM SELECT (no criteria)");
    println!("─────────────────────────────");

    let filters = WordFilters::default();
    let mut rng = ChaCha20Rng::seed_from_u64(42);

    for count in [10, 100, 1000] {
        let start = Instant::now();
        let selected = select_random_with_rng(count, pool, &filters, &mut rng);
        let duration = start.elapsed();

        println!(
            "  n={:<6} → {} drawn in {:.3}ms",
            count,
            selected.len(),
            duration.as_secs_f64() * 1000.0
        );
    }
    println!();
}

fn bench_stratified_select(pool: &[Word]) {
    println!("📐 STRATIFIED SELECT (category x syllables)");
    println!("─────────────────────────────");

    let mut filters = WordFilters::default();
    filters.categories = vec![
        SyntCategory::CommonNoun,
        SyntCategory::Verb,
        SyntCategory::Adjective,
    ];
    filters.min_syllables = 1;
    filters.max_syllables = 4;

    let mut rng = ChaCha20Rng::seed_from_u64(42);

    for count in [10, 100, 1000] {
        let start = Instant::now();
        let selected = select_random_with_rng(count, pool, &filters, &mut rng);
        let duration = start.elapsed();

        println!(
            "  n={:<6} → {} drawn in {:.3}ms",
            count,
            selected.len(),
            duration.as_secs_f64() * 1000.0
        );
    }
}
