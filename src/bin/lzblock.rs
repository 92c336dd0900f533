use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use lzblock::{compress_file, output_path_for, verify, BlockFormat, EncodeConfig};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "lzblock")]
#[command(about = "Compress a file into fixed-width LZ77 blocks")]
#[command(version)]
struct Args {
    /// Input file
    input: PathBuf,

    /// Output file (default: <INPUT>-compressed.bin)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Wire layout for offset digits and match lengths
    #[arg(long, value_enum, default_value = "ascii")]
    format: FormatArg,

    /// Buffer size for I/O operations
    #[arg(long, default_value = "131072")]
    buffer_size: usize,

    /// Decode the written file and compare it with the input
    #[arg(long)]
    verify: bool,

    /// Show verbose statistics
    #[arg(short, long)]
    verbose: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    /// Digits and lengths stored as value + '0'
    Ascii,
    /// Digits and lengths stored as raw values
    Binary,
}

impl From<FormatArg> for BlockFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Ascii => BlockFormat::Ascii,
            FormatArg::Binary => BlockFormat::Binary,
        }
    }
}

const EXIT_ERROR: u8 = 1;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(&args.log_level)?;

    let output_path = args.output.clone().unwrap_or_else(|| output_path_for(&args.input));
    let config = EncodeConfig { format: args.format.into(), buffer_size: args.buffer_size };

    let start = std::time::Instant::now();
    let stats = compress_file(&args.input, &output_path, config.clone())?;
    let elapsed = start.elapsed();

    info!(input = %args.input.display(), output = %output_path.display(), "compressed");

    if args.verify {
        let original = fs::read(&args.input)?;
        let compressed = fs::read(&output_path)?;
        verify(&original, &compressed, config.format)?;
        if args.verbose {
            eprintln!("Verification passed");
        }
    }

    if args.verbose {
        eprintln!("Compression complete:");
        eprintln!("  Input bytes:      {}", stats.input_bytes);
        eprintln!("  Output bytes:     {}", stats.output_bytes);
        eprintln!("  Blocks:           {}", stats.blocks_written);
        eprintln!("  Literal blocks:   {}", stats.literal_blocks);
        eprintln!("  Reference blocks: {}", stats.reference_blocks);
        eprintln!("  Ratio:            {:.3}", stats.compression_ratio());
        eprintln!("  Time:             {:.2?}", elapsed);
    }

    println!("Compression finished! File name: {}", output_path.display());
    Ok(())
}

fn init_logging(level: &str) -> Result<(), Box<dyn std::error::Error>> {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
