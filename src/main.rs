// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nexus_search::{
    group_by_category_with, load_manifest, search_scored_with, Entry, Highlighter, Index,
    SearchOptions, ScoredResult,
};

mod cli;
use cli::display::{self, *};
use cli::{Cli, Commands};

/// JSON shape for `search --json`. `score` is null for fallback entries.
#[derive(Serialize)]
struct JsonResult<'a> {
    #[serde(flatten)]
    entry: &'a Entry,
    score: Option<f64>,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nexus_search=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Search {
            file,
            query,
            limit,
            json,
        } => run_search(&file, &query, limit, json),
        Commands::Inspect { file } => run_inspect(&file),
        Commands::Highlight { text, query, json } => run_highlight(&text, &query, json),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn load(file: &str) -> Result<Index> {
    load_manifest(file).with_context(|| format!("cannot build index from {}", file))
}

fn run_search(file: &str, query: &str, limit: usize, json: bool) -> Result<()> {
    let index = load(file)?;

    // Empty query: the page list, unscored, exactly like the search modal.
    let results: Vec<(&Entry, Option<f64>)> = if query.trim().is_empty() {
        index.pages().into_iter().map(|entry| (entry, None)).collect()
    } else {
        let options = SearchOptions::with_limit(limit);
        search_scored_with(query, &index, &options)
            .into_iter()
            .map(|ScoredResult { entry, score, .. }| (entry, Some(score)))
            .collect()
    };

    if json {
        let output: Vec<JsonResult<'_>> = results
            .iter()
            .map(|&(entry, score)| JsonResult { entry, score })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let label = if query.trim().is_empty() {
        format!("{} pages", results.len())
    } else {
        format!("{} results for \"{}\"", results.len(), query.trim())
    };
    section_top(&label);

    if results.is_empty() {
        row(&themed(palette().frame, &[], "  no matches"));
        section_bot();
        return Ok(());
    }

    let highlighter = Highlighter::new(query);
    for (category, members) in group_by_category_with(&results, |(entry, _)| entry.category()) {
        row(&format!(" {}", themed(palette().heading, &[BOLD], category.label())));
        for (entry, score) in members {
            let score = score.map_or_else(|| " ".repeat(6), display::score_value);
            let title = display::render_segments(&highlighter.segments(entry.title()));
            row(&format!(
                "  {} {} {}  {}",
                category_badge(entry.category()),
                score,
                title,
                themed(palette().frame, &[], entry.destination())
            ));
            if !entry.description().is_empty() {
                let description = truncate(entry.description(), BOX_WIDTH - 22);
                row(&format!(
                    "{}{}",
                    " ".repeat(20),
                    display::render_segments(&highlighter.segments(&description))
                ));
            }
        }
    }
    section_bot();
    Ok(())
}

fn run_inspect(file: &str) -> Result<()> {
    let index = load(file)?;

    section_top(&format!("{} ({} entries)", file, index.len()));
    for (category, count) in index.category_counts() {
        if count > 0 {
            row(&format!("  {} {:>4}", category_badge(category), count));
        }
    }
    section_bot();

    section_top("Entries");
    for (position, entry) in index.iter().enumerate() {
        row(&format!(
            " {:>4}  {} {}  {}",
            position,
            category_badge(entry.category()),
            truncate(entry.title(), 36),
            themed(palette().frame, &[], &truncate(entry.destination(), 28))
        ));
    }
    section_bot();
    Ok(())
}

fn run_highlight(text: &str, query: &str, json: bool) -> Result<()> {
    let segments = Highlighter::new(query).segments(text);
    if json {
        println!("{}", serde_json::to_string_pretty(&segments)?);
    } else {
        println!("{}", display::render_segments(&segments));
    }
    Ok(())
}
