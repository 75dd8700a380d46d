//! # Task Handlers
//!
//! The individual units of work the engine dispatches to. Each handler is an
//! independent transform over files under the sandbox root with no coupling
//! to the others: it reads its fixed inputs, writes its fixed outputs, and
//! returns a short status string or an error for the engine's boundary to
//! normalize.
//!
//! ## Modules
//!
//! - `datagen` - Fetch the remote data generator output for an email
//! - `format` - Run prettier over a markdown file as an external process
//! - `dates` - Count Wednesdays in a newline-delimited date list
//! - `contacts` - Stable-sort a JSON array of contacts
//! - `logs` - First line of the most recent log (by filename, not mtime)
//! - `docs` - Index first H1 headings across a markdown tree
//! - `mail` - Naive sender extraction from an email blob
//! - `vision` - OCR a card image; resize an image to fixed dimensions
//! - `comments` - Pairwise most-similar comment scan
//! - `sales` - Aggregate Gold ticket sales from a SQLite db
//! - `web` - Fetch a page and keep only its visible text
//! - `audio` - Transcribe a clip through an external recognizer
//! - `markup` - Render CommonMark to HTML
//! - `tabular` - Filter CSV rows by column equality into JSON records

pub mod audio;
pub mod comments;
pub mod contacts;
pub mod datagen;
pub mod dates;
pub mod docs;
pub mod format;
pub mod logs;
pub mod mail;
pub mod markup;
pub mod sales;
pub mod tabular;
pub mod vision;
pub mod web;

use crate::extract::ParamRule;
use crate::registry::Registry;

/// Build the standard operation table.
///
/// Registration order IS dispatch priority: the first phrase found in the
/// task text wins. The broad `"Format"` entry sits near the top on purpose,
/// reproducing the reference dispatch chain; any later entry whose phrase
/// contains `"Format"` would be shadowed by it. New entries should go in
/// narrowest-first unless they are deliberately matching reference order.
pub fn standard() -> Registry {
    let mut registry = Registry::new();

    registry.register(
        "run datagen",
        vec![
            ParamRule::marker("email", "${user.email}"),
            ParamRule::fixed("output", "generated_data.txt"),
        ],
        |ctx, p| Box::pin(datagen::generate(ctx, p)),
    );
    registry.register(
        "Format",
        vec![ParamRule::fixed("input", "format.md")],
        |ctx, p| Box::pin(format::prettier(ctx, p)),
    );
    registry.register(
        "count Wednesdays",
        vec![
            ParamRule::fixed("input", "dates.txt"),
            ParamRule::fixed("output", "dates-wednesdays.txt"),
        ],
        |ctx, p| Box::pin(dates::count_wednesdays(ctx, p)),
    );
    registry.register(
        "sort contacts",
        vec![
            ParamRule::fixed("input", "contacts.json"),
            ParamRule::fixed("output", "contacts-sorted.json"),
        ],
        |ctx, p| Box::pin(contacts::sort(ctx, p)),
    );
    registry.register(
        "write first line of log",
        vec![
            ParamRule::fixed("input", "logs"),
            ParamRule::fixed("output", "logs-recent.txt"),
        ],
        |ctx, p| Box::pin(logs::recent_first_line(ctx, p)),
    );
    registry.register(
        "extract H1",
        vec![
            ParamRule::fixed("input", "docs"),
            ParamRule::fixed("output", "docs/index.json"),
        ],
        |ctx, p| Box::pin(docs::index_headings(ctx, p)),
    );
    registry.register(
        "extract email",
        vec![
            ParamRule::fixed("input", "email.txt"),
            ParamRule::fixed("output", "email-sender.txt"),
        ],
        |ctx, p| Box::pin(mail::extract_sender(ctx, p)),
    );
    registry.register(
        "extract card number",
        vec![
            ParamRule::fixed("input", "credit-card.png"),
            ParamRule::fixed("output", "credit-card.txt"),
        ],
        |ctx, p| Box::pin(vision::card_number(ctx, p)),
    );
    registry.register(
        "find similar comments",
        vec![
            ParamRule::fixed("input", "comments.txt"),
            ParamRule::fixed("output", "comments-similar.txt"),
        ],
        |ctx, p| Box::pin(comments::most_similar(ctx, p)),
    );
    registry.register(
        "query ticket sales",
        vec![
            ParamRule::fixed("input", "ticket-sales.db"),
            ParamRule::fixed("output", "ticket-sales-gold.txt"),
        ],
        |ctx, p| Box::pin(sales::gold_total(ctx, p)),
    );
    registry.register(
        "scrape website",
        vec![
            ParamRule::marker("url", "url="),
            ParamRule::fixed("output", "webpage.txt"),
        ],
        |ctx, p| Box::pin(web::scrape_text(ctx, p)),
    );
    registry.register(
        "resize image",
        vec![
            ParamRule::fixed("input", "image.png"),
            ParamRule::fixed("output", "image-resized.png"),
        ],
        |ctx, p| Box::pin(vision::resize(ctx, p)),
    );
    registry.register(
        "transcribe audio",
        vec![
            ParamRule::fixed("input", "audio.mp3"),
            ParamRule::fixed("output", "audio-transcript.txt"),
        ],
        |ctx, p| Box::pin(audio::transcribe(ctx, p)),
    );
    registry.register(
        "convert markdown",
        vec![
            ParamRule::fixed("input", "doc.md"),
            ParamRule::fixed("output", "doc.html"),
        ],
        |ctx, p| Box::pin(markup::render_html(ctx, p)),
    );
    registry.register(
        "filter CSV",
        vec![
            ParamRule::marker("column", "column="),
            ParamRule::marker("value", "value="),
            ParamRule::fixed("input", "table.csv"),
            ParamRule::fixed("output", "filtered.json"),
        ],
        |ctx, p| Box::pin(tabular::filter_rows(ctx, p)),
    );

    registry
}

#[cfg(test)]
pub(crate) mod testing {
    //! Shared fixtures for handler tests: a context rooted at a temp
    //! sandbox and a quick way to build fixed parameter sets.

    use crate::config::TaskdeskConfig;
    use crate::engine::TaskContext;
    use crate::extract::{self, ParamRule, ParamSet};
    use std::path::Path;

    pub fn ctx(sandbox: &Path) -> TaskContext {
        TaskContext::new(TaskdeskConfig::with_data_dir(sandbox))
    }

    pub fn params(pairs: &[(&'static str, &'static str)]) -> ParamSet {
        let rules: Vec<ParamRule> = pairs
            .iter()
            .map(|(name, value)| ParamRule::fixed(name, value))
            .collect();
        extract::extract("", &rules).expect("fixed rules cannot fail")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_is_populated() {
        let registry = standard();
        assert_eq!(registry.len(), 15);
    }

    #[test]
    fn test_every_reference_phrase_resolves() {
        let registry = standard();
        for phrase in [
            "run datagen",
            "count Wednesdays",
            "sort contacts",
            "write first line of log",
            "extract H1",
            "extract email",
            "extract card number",
            "find similar comments",
            "query ticket sales",
            "scrape website",
            "resize image",
            "transcribe audio",
            "convert markdown",
            "filter CSV",
        ] {
            assert!(registry.resolve(phrase).is_some(), "no entry for {phrase:?}");
        }
    }

    #[test]
    fn test_format_shadows_narrower_format_phrasings() {
        // Reference ordering risk, kept deliberately: "Format markdown file
        // with a specific version" still lands on the generic Format entry.
        let registry = standard();
        let entry = registry.resolve("Format markdown file").unwrap();
        assert_eq!(entry.phrase, "Format");
    }
}
