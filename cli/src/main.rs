//! nbmeta CLI - notebook publication metadata rewriter

use std::io::Write;
use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use colored::Colorize;

use nbmeta::{rewrite_file, RewriteOptions};

#[derive(Parser)]
#[command(name = "nbmeta")]
#[command(author = "fuzzingbook")]
#[command(version)]
#[command(about = "Rewrite notebook metadata for publication", long_about = None)]
struct Cli {
    /// Generate a title page from the first chapter heading
    #[arg(long)]
    titlepage: bool,

    /// Input notebook files, processed in order
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if cli.files.is_empty() {
        let mut cmd = Cli::command();
        eprintln!("{}", cmd.render_usage());
        std::process::exit(1);
    }

    let options = RewriteOptions::new().with_titlepage(cli.titlepage);

    if let Err(e) = run(&cli.files, &options) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(files: &[PathBuf], options: &RewriteOptions) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    // Each file gets a freshly parsed document; any failure aborts the run
    for file in files {
        log::debug!("rewriting {}", file.display());
        let output = rewrite_file(file, options)?;
        out.write_all(output.as_bytes())?;
    }

    out.flush()?;
    Ok(())
}
