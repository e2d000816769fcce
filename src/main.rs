use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use prettydiff::{HtmlRenderer, RenderOptions, git, parse_patch_set};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Unified diff to render; reads stdin when omitted or "-"
    input: Option<PathBuf>,

    /// Git diff arguments (e.g., "HEAD~1", "main..feature") to render instead of INPUT
    #[arg(long, conflicts_with = "input")]
    git: Option<String>,

    /// Write the HTML page here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Highlight changed characters within modified lines
    #[arg(long)]
    word_diff: bool,

    /// Page title
    #[arg(long, default_value = "DIFF")]
    title: String,
}

fn read_input(args: &Args) -> Result<String> {
    if let Some(git_args) = &args.git {
        return git::load_diff(git_args);
    }

    match &args.input {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let diff_text = read_input(&args)?;

    let files = parse_patch_set(&diff_text).context("failed to parse diff")?;
    log::info!("parsed {} file(s)", files.len());

    let options = RenderOptions {
        title: args.title.clone(),
        intra_line: args.word_diff,
        ..RenderOptions::default()
    };
    let html = HtmlRenderer::new(options)
        .render(&files)
        .context("failed to render HTML")?;

    match &args.output {
        Some(path) => fs::write(path, html)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => io::stdout()
            .write_all(html.as_bytes())
            .context("failed to write stdout")?,
    }

    Ok(())
}
