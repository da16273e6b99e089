use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use lzw::batch::{compress_files, compress_tree, decompress_file};
use lzw::Config;

const EXIT_ERROR: u8 = 1;
const EXIT_USAGE: u8 = 2;

#[derive(Parser)]
#[command(name = "lzw", about = "LZW compression with fixed 16-bit codes", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Dictionary cap; must match between compression and decompression
    #[arg(long, global = true, default_value_t = lzw::MAX_DICT_SIZE)]
    max_dict_size: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress one or more files into a single output
    Compress {
        /// Output file
        output: PathBuf,

        /// Input files, compressed in order with one shared dictionary
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },

    /// Decompress a file produced by `compress`
    Decompress {
        /// Compressed input
        input: PathBuf,

        /// Output file
        output: PathBuf,
    },

    /// Compress every file under a directory to `<file>.lzw`
    CompressTree {
        /// Directory to walk
        root: PathBuf,
    },
}

fn init_tracing(cli: &Cli) {
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    } else {
        tracing_subscriber::EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    let config = match Config::new(cli.max_dict_size) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(EXIT_USAGE);
        }
    };

    match run(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(cli: Cli, config: &Config) -> anyhow::Result<()> {
    let quiet = cli.quiet;
    match cli.command {
        Commands::Compress { output, inputs } => {
            let report = compress_files(&output, inputs.as_slice(), config)
                .with_context(|| format!("compressing into {}", output.display()))?;
            for skipped in &report.skipped {
                eprintln!("Error opening input file: {}", skipped.path.display());
            }
            if !quiet {
                println!("Compression completed. Output written to {}", output.display());
            }
        }
        Commands::Decompress { input, output } => {
            let stats = decompress_file(&input, &output, config)
                .with_context(|| format!("decompressing {}", input.display()))?;
            if !quiet {
                println!(
                    "Decompression completed. {} bytes written to {}",
                    stats.bytes_out,
                    output.display()
                );
            }
        }
        Commands::CompressTree { root } => {
            let report = compress_tree(&root, config)
                .with_context(|| format!("compressing tree {}", root.display()))?;
            if !quiet {
                println!(
                    "compress done: {} files, {} -> {} bytes",
                    report.processed.len(),
                    report.bytes_in(),
                    report.bytes_out()
                );
            }
        }
    }
    Ok(())
}
