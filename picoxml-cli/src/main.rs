//! picoxml CLI
//!
//! Parses picoxml markup from a file, an inline string, or stdin, and
//! prints the rendered document plus an indented tree dump. With no
//! arguments it runs in streaming mode: each stdin line is fed to the
//! parser as one chunk and the in-progress document is rendered after
//! every line.

use std::fs;
use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use owo_colors::OwoColorize;
use picoxml_parse::{XmlParser, print_tree};

/// Streaming parser and pretty-printer for picoxml markup.
#[derive(Parser)]
#[command(name = "picoxml", version, about)]
struct Cli {
    /// Markup file to parse. Reads stdin line by line when omitted.
    file: Option<PathBuf>,

    /// Parse an inline markup string instead of a file.
    #[arg(long, value_name = "MARKUP", conflicts_with = "file")]
    markup: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(markup) = cli.markup {
        parse_whole(&markup)
    } else if let Some(path) = cli.file {
        let markup =
            fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
        parse_whole(&markup)
    } else {
        stream_stdin()
    }
}

/// Parses a complete document in one shot and dumps it.
fn parse_whole(markup: &str) -> Result<()> {
    let mut parser = XmlParser::new();
    parser.feed(markup)?;
    if !parser.is_finished() {
        bail!("document is incomplete: {}", parser.render());
    }

    println!("{}", parser.render());
    println!();
    println!("=== Tree ===");
    print_tree(parser.document());
    Ok(())
}

/// Feeds stdin to the parser line by line, rendering after every line.
///
/// Open elements are auto-closed in the rendering, so the output is always
/// well formed even while the document is only partly read.
fn stream_stdin() -> Result<()> {
    let mut parser = XmlParser::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        parser.feed(&line)?;
        if parser.is_finished() {
            println!(":: {}: {}", "FINISHED".green(), parser.render());
        } else {
            println!(":: {}: {}", "UNFINISHED".yellow(), parser.render());
        }
    }
    Ok(())
}
