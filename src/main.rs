use std::io::Read;

use clap::Parser;
use serde::Serialize;

#[derive(Parser)]
#[command(
    name = "scholarlint",
    about = "Assess manuscript originality and quality",
    version
)]
struct Cli {
    /// Manuscript text file to assess (reads stdin if not provided)
    manuscript: Option<String>,
    /// File containing the manuscript abstract
    #[arg(short, long)]
    abstract_file: Option<String>,
}

#[derive(Serialize)]
struct Assessment {
    plagiarism: scholarlint::SimilarityReport,
    quality: scholarlint::QualityReport,
}

fn read_file(path: &str) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading {path}: {e}");
        std::process::exit(1);
    })
}

fn main() {
    let cli = Cli::parse();

    let text = match &cli.manuscript {
        Some(path) => read_file(path),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .expect("Failed to read stdin");
            input
        }
    };
    let abstract_text = cli.abstract_file.as_deref().map(read_file).unwrap_or_default();

    let assessment = Assessment {
        plagiarism: scholarlint::check_plagiarism(&text),
        quality: scholarlint::assess_quality(&text, &abstract_text),
    };
    println!("{}", serde_json::to_string_pretty(&assessment).unwrap());
}
