/// Example: Load a chapter document and print its slide timeline.
///
/// This example demonstrates how to use the slide-chapter library to:
/// - Open a chapter document
/// - Walk the expanded picture/sound transitions
/// - Reload the document and report whether the timeline changed
///
/// Usage:
///   cargo run --example dump_chapter -- chapter.xml
///   RUST_LOG=debug cargo run --example dump_chapter -- chapter.xml --resolve --json
use clap::Parser;
use slide_chapter::{Chapter, LoadOptions};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "dump_chapter")]
#[command(about = "Print the slide timeline of a chapter document", long_about = None)]
struct Args {
    /// Chapter document to load
    path: String,

    /// Resolve relative picture and sound paths against the document directory
    #[arg(long)]
    resolve: bool,

    /// Print the timeline as JSON
    #[arg(long)]
    json: bool,

    /// Reload the document once and report whether the timeline changed
    #[arg(long)]
    reload: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();
    let options = LoadOptions::new().with_resolve_relative_paths(args.resolve);
    let mut chapter = Chapter::open_with_options(&args.path, options)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(chapter.slides())?);
    } else {
        println!("Chapter: {}", chapter.source());
        println!("{}", "=".repeat(60));
        for (i, slide) in chapter.iter().enumerate() {
            let picture = slide.picture().unwrap_or("(keep)");
            let sound = slide.sound().unwrap_or("(keep)");
            println!("{:>4}  picture: {:<24} sound: {}", i + 1, picture, sound);
        }
        println!("{}", "-".repeat(60));
        println!("{} slides", chapter.len());
    }

    if args.reload {
        let before = chapter.slides().to_vec();
        chapter.reload()?;
        if before == chapter.slides() {
            println!("Reload: unchanged");
        } else {
            println!("Reload: timeline changed, now {} slides", chapter.len());
        }
    }

    Ok(())
}
