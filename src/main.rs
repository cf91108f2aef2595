//! # chatlog-csv CLI
//!
//! Command-line interface for the chatlog-csv library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatlog_csv::cli::Args;
use chatlog_csv::ChatlogError;
use chatlog_csv::config::{ExtractConfig, OutputConfig};
use chatlog_csv::core::extract_and_write;

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatlogError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();
    let input = args.input_path();
    let output = args.output_path();

    // Print header
    println!("📦 chatlog-csv v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", input.display());
    println!("💾 Output:  {}", output.display());
    println!();

    // Extract and write
    println!("⏳ Extracting records into {}...", output.display());
    let run_start = Instant::now();
    let stats = extract_and_write(input, output, ExtractConfig::new(), &OutputConfig::new())?;
    println!(
        "   Wrote {} records ({:.2}s)",
        stats.total(),
        run_start.elapsed().as_secs_f64()
    );

    let total_time = total_start.elapsed();

    println!();
    println!("✅ Done! Output saved to {}", output.display());

    // Summary
    println!();
    println!("📊 Summary:");
    println!("   Messages:  {}", stats.text);
    println!("   Images:    {}", stats.images);
    println!("   Links:     {}", stats.links);
    println!("   w/ emoji:  {}", stats.with_emoji);
    println!("   Total:     {} records", stats.total());
    println!("   Text:      {:.1}%", stats.text_ratio());
    println!("   Scanned:   {} lines", stats.lines);

    // Performance stats
    println!();
    println!("⚡ Performance:");
    println!("   Total time:  {:.2}s", total_time.as_secs_f64());
    let per_sec = stats.total() as f64 / total_time.as_secs_f64().max(f64::EPSILON);
    println!("   Throughput:  {:.0} records/sec", per_sec);

    Ok(())
}
