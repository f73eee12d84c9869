//! bru2md's main application entry point.
//! Handles command-line argument parsing and runs the conversion.

use bru2md::{
    cli::{get_args, Args},
    config::load_collection,
    diagnostics::LogSink,
    error::{default_error_handler, Result},
    logger::init_logger,
    processor::Processor,
    renderer::MarkdownRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads `bruno.json` from the collection root
/// 2. Builds the ignore set and the processor
/// 3. Writes one document per directory and the root index
fn run(args: Args) -> Result<()> {
    let collection = load_collection(&args.collection_path)?;

    println!("Starting conversion for collection: '{}'", collection.name);
    println!("Output will be saved to: '{}'", args.output.display());

    let renderer = MarkdownRenderer::new();
    let sink = LogSink::new();
    let processor = Processor::new(&renderer, &sink, &collection, &args.output)?;
    processor.run()?;

    println!("\nConversion complete!");
    Ok(())
}
