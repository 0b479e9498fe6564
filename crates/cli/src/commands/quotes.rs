use crate::defaults::QUOTES;

/// List the preset targets with the index `--quote` expects.
pub fn list_quotes() {
    println!("📜 Preset quotes");
    println!("============================================\n");
    for (i, quote) in QUOTES.iter().enumerate() {
        println!("  {:>2}. {quote}", i + 1);
    }
    println!("\nUse with: phrasevo run --quote N");
}
