use std::io::{self, BufRead, Write};

use clap::{Parser, ValueEnum};
use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

use huffman_text::{run, Config, Report, TieBreak};


#[derive(Debug, Clone, Copy, ValueEnum)]
enum TieBreakArg {
    Oldest,
    Newest,
}

impl From<TieBreakArg> for TieBreak {

    fn from(arg: TieBreakArg) -> Self {
        match arg {
            TieBreakArg::Oldest => TieBreak::Oldest,
            TieBreakArg::Newest => TieBreak::Newest,
        }
    }

}


/// Huffman encode and decode lines of text, showing the tree that was built
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {

    /// Text to encode. Without it, lines are read interactively from stdin
    text: Option<String>,

    /// Which node is merged first when frequencies are equal
    #[arg(long, value_enum, default_value_t = TieBreakArg::Oldest)]
    tie_break: TieBreakArg,

    /// Also print the code of every character
    #[arg(long)]
    codes: bool,

    /// Also print encoded and original sizes
    #[arg(long)]
    stats: bool,

    /// Do not draw the tree
    #[arg(long)]
    no_tree: bool,

}


fn main() -> Result<()> {

    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config { tie_break: cli.tie_break.into() };

    if let Some(text) = &cli.text {
        return run_once(&cli, &config, text);
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {

        prompt("Enter some text: ")?;
        let Some(text) = lines.next().transpose()? else {
            break;
        };
        println!();

        process(&cli, &config, &text);

        prompt("\nEncode another? (y/n): ")?;
        let Some(choice) = lines.next().transpose()? else {
            break;
        };

        if !wants_another(&choice) {
            break;
        }
        println!();
    }

    Ok(())
}


fn prompt(message: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "{message}")?;
    stdout.flush()
}


/// `y` in English, `s` (sim) in Portuguese
fn wants_another(choice: &str) -> bool {
    matches!(choice.trim().to_lowercase().as_str(), "y" | "s")
}


/// Without a loop to go back to, a failed run ends the process with an error
fn run_once(cli: &Cli, config: &Config, text: &str) -> Result<()> {
    let report = run(text, config)?;
    print_report(cli, &report);
    Ok(())
}


fn process(cli: &Cli, config: &Config, text: &str) {
    match run(text, config) {
        Ok(report) => print_report(cli, &report),
        Err(err) => tracing::error!("could not encode {:?}: {}", text, err),
    }
}


fn print_report(cli: &Cli, report: &Report) {

    println!("Original text: {}", report.original);
    println!("Encoded text: {}", report.encoded);
    println!("Decoded text: {}", report.decoded);

    if cli.codes && !report.codes.is_empty() {
        println!("\n--- Codes");
        for (ch, code) in report.codes.sorted().iter() {
            println!("{:?}: {}", ch, code);
        }
    }

    if cli.stats {
        let stats = &report.stats;
        println!(
            "\n{} characters ({} distinct)\nOriginal size: {} bits\nEncoded size: {} bits\nCompression ratio: {:.2}%",
            stats.symbols, stats.distinct, stats.original_bits, stats.encoded_bits, stats.ratio() * 100.0
        );
    }

    if !cli.no_tree && report.tree.is_some() {
        println!("\n--- Huffman tree");
        for line in report.tree_lines() {
            println!("{line}");
        }
    }
}
