use clap::Parser;
use bugbait_lib::select::process_data;
use bugbait_lib::stats::calculate_average;
use bugbait::input::{parse_elements, parse_numbers};
use bugbait::report::build_output;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bugbait")]
#[command(about = "Seeded-fault specimen runner for code-review tooling", long_about = None)]
struct Args {
    /// Comma-separated numeric sequence to average
    #[arg(short, long, default_value = "")]
    values: String,

    /// Comma-separated element sequence whose head gets upper-cased
    #[arg(short, long, default_value = "")]
    data: String,

    /// Output format: json or text
    #[arg(short, long, default_value = "json")]
    format: String,

    /// Output file path (optional)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Validate format
    if args.format != "json" && args.format != "text" {
        eprintln!("Error: Unknown format '{}'. Use 'json' or 'text'", args.format);
        std::process::exit(1);
    }

    let numbers = parse_numbers(&args.values)?;
    let elements = parse_elements(&args.data);

    // Both calls propagate their demonstration errors uncaught
    eprintln!("📊 Averaging {} value(s)", numbers.len());
    let average = calculate_average(&numbers)?;

    eprintln!("🔤 Upper-casing the head of {} element(s)", elements.len());
    let upper = process_data(&elements)?;

    let output = build_output(&args.format, average, &upper, &numbers, &elements)?;

    if let Some(output_path) = &args.output {
        std::fs::write(output_path, &output)?;
        eprintln!("✅ Output written to {}", output_path.display());
    } else {
        println!("{output}");
    }

    Ok(())
}
