use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use markgen::{export_document, Document, OutputConfig, Result, Section, Tag};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output file path; prints to stdout when omitted
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,
}

fn main() {
    // Initialize the default subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false) // Don't show target
        .without_time() // Don't show timestamps
        .init(); // Initialize the subscriber

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    info!("Building document");
    let document = build_document()?;

    let config = match args.output {
        Some(path) => OutputConfig::file(path),
        None => OutputConfig::stdout(),
    };

    export_document(&document, &config)
}

/// The document this program generates
fn build_document() -> Result<Document> {
    let mut head = Section::new("head");
    head.append(Tag::new("title").with_text("hello"))?;

    let mut body = Section::new("body");
    body.append(Tag::new("h1").with_class("main-text").with_text("Test"))?;

    let mut div = Tag::new("div")
        .with_classes(["container", "container-fluid"])
        .with_attribute("id", "lead")
        .with_attribute("test_attr", "random value");
    div.append(
        Tag::new("p")
            .child_style()
            .with_attribute("another_attr", "test")
            .with_text("another test"),
    )?;
    div.append(
        Tag::single("img")
            .child_style()
            .with_attribute("src", "/icon.png"),
    )?;
    body.append(div)?;

    Ok(Document::new(head, body))
}
