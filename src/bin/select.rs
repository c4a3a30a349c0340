// Lexipick Selection CLI
// Filter the word base and draw balanced random word lists

use clap::Parser;
use lexipick::{FilterTag, Lexicon, SyntCategory, TagMode, TagPosition, Word, WordFilters};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Word-base curation tool - filter the base, preview and draw balanced selections
#[derive(Parser, Debug)]
#[command(name = "lexi-select")]
#[command(about = "Filter the word base and draw balanced random selections", long_about = None)]
#[command(version)]
struct Args {
    /// Syntactic categories to keep (NC, ADJ, VER, ADV, PRE, NP); repeatable
    #[arg(short = 'c', long = "category", value_name = "CODE")]
    categories: Vec<String>,

    /// Structure progression codes (a-g); repeatable
    #[arg(long = "structure", value_name = "CODE")]
    structures: Vec<String>,

    /// Grapheme-complexity progression codes (1-13); repeatable
    #[arg(long = "grapheme-level", value_name = "CODE")]
    grapheme_levels: Vec<String>,

    /// Frequency codes (1-4); repeatable
    #[arg(long = "frequency", value_name = "CODE")]
    frequencies: Vec<String>,

    /// Search tag on the orthographic form: "[!]VALUE[:start|end|middle|anywhere]"
    /// ('!' prefix excludes); repeatable
    #[arg(short = 's', long = "search", value_name = "TAG")]
    search: Vec<String>,

    /// Grapheme tag against the segmentation, same syntax as --search; repeatable
    #[arg(long = "grapheme", value_name = "TAG")]
    graphemes: Vec<String>,

    /// Phoneme tag against the segmentation, same syntax as --search; repeatable
    #[arg(long = "phoneme", value_name = "TAG")]
    phonemes: Vec<String>,

    /// Minimum syllable count
    #[arg(long, default_value_t = 1)]
    min_syllables: u32,

    /// Maximum syllable count
    #[arg(long, default_value_t = 5)]
    max_syllables: u32,

    /// Minimum letter count
    #[arg(long, default_value_t = 1)]
    min_letters: u32,

    /// Maximum letter count
    #[arg(long, default_value_t = 14)]
    max_letters: u32,

    /// Keep only words with an image (true) or without (false)
    #[arg(long)]
    has_image: Option<bool>,

    /// Draw N words at random instead of listing the whole filtered pool
    #[arg(short = 'n', long, value_name = "N")]
    count: Option<usize>,

    /// Show the expected distribution before drawing
    #[arg(short, long)]
    preview: bool,

    /// Show statistics of the filtered pool
    #[arg(long)]
    stats: bool,

    /// RNG seed for a reproducible draw
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum number of words to display
    #[arg(short, long, default_value = "30")]
    limit: usize,

    /// Show detailed information
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    if args.verbose {
        println!("🔍 Loading word base...");
    }

    let lexicon = Lexicon::new()?;
    let filters = build_filters(&args)?;

    if args.verbose {
        println!("✅ Word base loaded: {} records\n", lexicon.total_words());
    }

    let pool = lexicon.filter(&filters);
    println!(
        "Filtered pool: {} / {} words",
        pool.len(),
        lexicon.total_words()
    );

    if args.stats {
        print_stats(&lexicon, &filters);
    }

    if let Some(count) = args.count {
        let count = count.min(pool.len());

        if args.preview {
            print_preview(&lexicon, count, &filters);
        }

        let selection = match args.seed {
            Some(seed) => {
                let mut rng = ChaCha20Rng::seed_from_u64(seed);
                lexicon.select_random_with_rng(count, &filters, &mut rng)
            }
            None => lexicon.select_random(count, &filters),
        };

        println!("\n🎲 Drew {} words:\n", selection.len());
        print_words(&selection, args.limit, args.verbose);
    } else {
        println!();
        print_words(&pool, args.limit, args.verbose);
    }

    Ok(())
}

/// Build the filter configuration from the command line
fn build_filters(args: &Args) -> Result<WordFilters, String> {
    let mut filters = WordFilters::default();

    for code in &args.categories {
        filters.categories.push(parse_category(code)?);
    }
    filters.structures = args.structures.clone();
    filters.grapheme_display = args.grapheme_levels.clone();
    filters.frequencies = args.frequencies.clone();

    for spec in &args.search {
        filters.search.push(parse_tag(spec)?);
    }
    for spec in &args.graphemes {
        filters.graphemes.push(parse_tag(spec)?);
    }
    for spec in &args.phonemes {
        filters.phonemes.push(parse_tag(spec)?);
    }

    filters.min_syllables = args.min_syllables;
    filters.max_syllables = args.max_syllables;
    filters.min_letters = args.min_letters;
    filters.max_letters = args.max_letters;
    filters.has_image = args.has_image;

    Ok(filters)
}

fn parse_category(code: &str) -> Result<SyntCategory, String> {
    match code.to_uppercase().as_str() {
        "NC" => Ok(SyntCategory::CommonNoun),
        "ADJ" => Ok(SyntCategory::Adjective),
        "VER" => Ok(SyntCategory::Verb),
        "ADV" => Ok(SyntCategory::Adverb),
        "PRE" => Ok(SyntCategory::Preposition),
        "NP" => Ok(SyntCategory::ProperNoun),
        other => Err(format!(
            "Unknown category '{other}' (expected NC, ADJ, VER, ADV, PRE or NP)"
        )),
    }
}

/// Parse a tag spec: "[!]VALUE[:start|end|middle|anywhere]"
fn parse_tag(spec: &str) -> Result<FilterTag, String> {
    let (mode, rest) = match spec.strip_prefix('!') {
        Some(rest) => (TagMode::Exclude, rest),
        None => (TagMode::Include, spec),
    };

    let (value, position) = match rest.split_once(':') {
        Some((value, pos)) => {
            let position = match pos {
                "start" => TagPosition::Start,
                "end" => TagPosition::End,
                "middle" => TagPosition::Middle,
                "anywhere" => TagPosition::Anywhere,
                other => return Err(format!("Unknown position '{other}'")),
            };
            (value, position)
        }
        None => (rest, TagPosition::Anywhere),
    };

    if value.is_empty() {
        return Err(format!("Empty tag value in '{spec}'"));
    }

    Ok(FilterTag {
        value: value.to_string(),
        position,
        mode,
    })
}

fn print_preview(lexicon: &Lexicon, count: usize, filters: &WordFilters) {
    let preview = lexicon.preview_distribution(count, filters);
    if preview.is_empty() {
        println!("\nRépartition: tirage uniforme (aucun critère multi-valeurs)");
        return;
    }

    println!("\nRépartition estimée:");
    for entry in preview {
        if entry.is_single_value {
            println!("  {:<45} {} mots (valeur unique)", entry.label, entry.per_value);
        } else {
            println!("  {:<45} ~{} chacun", entry.label, entry.per_value);
        }
    }
}

fn print_stats(lexicon: &Lexicon, filters: &WordFilters) {
    let stats = lexicon.stats(filters);

    println!("\n📊 Pool statistics:");
    let mut categories: Vec<_> = stats.categories.iter().collect();
    categories.sort_by_key(|(c, _)| c.code());
    for (category, n) in categories {
        println!("  {:<15} {}", category.label(), n);
    }

    let mut syllables: Vec<_> = stats.syllables.iter().collect();
    syllables.sort();
    for (count, n) in syllables {
        println!("  {count} syllabe(s)    {n}");
    }
}

fn print_words(words: &[&Word], limit: usize, verbose: bool) {
    for (idx, word) in words.iter().take(limit).enumerate() {
        if verbose {
            println!(
                "{}. {:<15} [{}] {} syll, structure {}, /{}/",
                idx + 1,
                word.ortho,
                word.category.code(),
                word.syllable_count,
                word.structure,
                word.phonemes
            );
        } else {
            println!("{}. {:<15} [{}]", idx + 1, word.ortho, word.category.code());
        }
    }

    if words.len() > limit {
        println!("... and {} more", words.len() - limit);
    }
}
