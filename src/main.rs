use std::fs;

use clap::Parser;
use serde::Serialize;

use docdex::{search, snippet, tokenize_terms, SearchIndex, Snippet};

mod cli;
use cli::{display, Cli, Commands};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonResult<'a> {
    location: &'a str,
    page: &'a str,
    title: &'a str,
    category: &'a str,
    score: f64,
    snippet: &'a str,
    highlights: &'a [(usize, usize)],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonStats {
    entries: usize,
    vocabulary: usize,
    postings: usize,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Search {
            index,
            query,
            limit,
            snippet: snippet_len,
            json,
        } => {
            let index = load_index(&index)?;
            let terms = tokenize_terms(&query);
            let results = search(&index, &query, limit);

            let snippets: Vec<Snippet> = results
                .iter()
                .map(|r| snippet(index.entry(r.entry), &terms, snippet_len))
                .collect();

            if json {
                let payload: Vec<JsonResult<'_>> = results
                    .iter()
                    .zip(&snippets)
                    .map(|(r, s)| {
                        let entry = index.entry(r.entry);
                        JsonResult {
                            location: &entry.location,
                            page: &entry.page,
                            title: &entry.title,
                            category: entry.category.as_str(),
                            score: r.score,
                            snippet: &s.text,
                            highlights: &s.highlights,
                        }
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else if results.is_empty() {
                println!("no results for '{}'", query);
            } else {
                for (rank, (result, snip)) in results.iter().zip(&snippets).enumerate() {
                    display::print_result(rank + 1, index.entry(result.entry), result, snip);
                }
            }
        }

        Commands::Inspect { index, json } => {
            let index = load_index(&index)?;
            if json {
                let stats = JsonStats {
                    entries: index.len(),
                    vocabulary: index.vocabulary().len(),
                    postings: index
                        .inverted()
                        .terms
                        .values()
                        .map(|list| list.postings.len())
                        .sum(),
                };
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                display::print_stats(&index);
            }
        }
    }

    Ok(())
}

fn load_index(path: &str) -> Result<SearchIndex, Box<dyn std::error::Error>> {
    let payload = fs::read_to_string(path)
        .map_err(|e| format!("failed to read index file '{}': {}", path, e))?;
    Ok(SearchIndex::from_json(&payload)?)
}
