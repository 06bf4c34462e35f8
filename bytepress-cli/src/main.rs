//! Bytepress CLI - pure Rust Huffman and LZ77 file compression.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use bytepress_core::{Codec, read_file, write_file_atomic};
use bytepress_huffman::HuffmanCodec;
use bytepress_lz77::Lz77Codec;

#[derive(Parser)]
#[command(name = "bytepress")]
#[command(author, version, about = "Pure Rust byte-stream compression")]
#[command(long_about = "
Bytepress compresses single files with one of two independent codecs:
a Huffman entropy coder (.huf) or an LZ77 dictionary coder (.lz).

Examples:
  bytepress compress notes.txt notes.txt.huf
  bytepress compress -a lz77 notes.txt notes.txt.lz
  bytepress decompress notes.txt.huf notes.txt
  bytepress info notes.txt.huf
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file
    #[command(alias = "c")]
    Compress {
        /// File to compress
        input: PathBuf,

        /// Destination for the compressed container
        output: PathBuf,

        /// Codec to use (inferred from the output extension if omitted)
        #[arg(short, long, value_enum)]
        algorithm: Option<Algorithm>,
    },

    /// Decompress a file
    #[command(aliases = ["d", "x"])]
    Decompress {
        /// Compressed container to expand
        input: PathBuf,

        /// Destination for the decompressed data
        output: PathBuf,

        /// Codec to use (inferred from the input extension if omitted)
        #[arg(short, long, value_enum)]
        algorithm: Option<Algorithm>,
    },

    /// Show information about a compressed container
    #[command(alias = "i")]
    Info {
        /// Compressed container to inspect
        file: PathBuf,

        /// Codec that produced the file (inferred from the extension if omitted)
        #[arg(short, long, value_enum)]
        algorithm: Option<Algorithm>,
    },
}

/// Selectable compression algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    /// Huffman entropy coder
    Huffman,
    /// LZ77 dictionary coder
    Lz77,
}

impl Algorithm {
    fn codec(self) -> &'static dyn Codec {
        match self {
            Algorithm::Huffman => &HuffmanCodec,
            Algorithm::Lz77 => &Lz77Codec,
        }
    }

    fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "huf" => Some(Algorithm::Huffman),
            "lz" => Some(Algorithm::Lz77),
            _ => None,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            algorithm,
        } => cmd_compress(&input, &output, algorithm),
        Commands::Decompress {
            input,
            output,
            algorithm,
        } => cmd_decompress(&input, &output, algorithm),
        Commands::Info { file, algorithm } => cmd_info(&file, algorithm),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Resolve the algorithm from the flag or a container path's extension.
fn resolve_algorithm(
    explicit: Option<Algorithm>,
    container_path: &Path,
) -> Result<Algorithm, Box<dyn std::error::Error>> {
    explicit
        .or_else(|| Algorithm::from_extension(container_path))
        .ok_or_else(|| {
            format!(
                "cannot infer codec from '{}'; pass --algorithm (expected a .huf or .lz extension)",
                container_path.display()
            )
            .into()
        })
}

fn cmd_compress(
    input: &Path,
    output: &Path,
    algorithm: Option<Algorithm>,
) -> Result<(), Box<dyn std::error::Error>> {
    let algorithm = resolve_algorithm(algorithm, output)?;
    let codec = algorithm.codec();

    let data = read_file(input)?;
    let compressed = codec.compress(&data)?;
    write_file_atomic(output, &compressed)?;

    let savings = if data.is_empty() {
        0.0
    } else {
        (1.0 - compressed.len() as f64 / data.len() as f64) * 100.0
    };
    println!(
        "Compressed {} -> {} ({}): {} -> {} bytes ({:.1}% savings)",
        input.display(),
        output.display(),
        codec.name(),
        data.len(),
        compressed.len(),
        savings
    );
    Ok(())
}

fn cmd_decompress(
    input: &Path,
    output: &Path,
    algorithm: Option<Algorithm>,
) -> Result<(), Box<dyn std::error::Error>> {
    let algorithm = resolve_algorithm(algorithm, input)?;
    let codec = algorithm.codec();

    let data = read_file(input)?;
    let decompressed = codec.decompress(&data)?;
    write_file_atomic(output, &decompressed)?;

    println!(
        "Decompressed {} -> {} ({}): {} -> {} bytes",
        input.display(),
        output.display(),
        codec.name(),
        data.len(),
        decompressed.len()
    );
    Ok(())
}

fn cmd_info(file: &Path, algorithm: Option<Algorithm>) -> Result<(), Box<dyn std::error::Error>> {
    let algorithm = resolve_algorithm(algorithm, file)?;
    let data = read_file(file)?;

    println!("Container Information");
    println!("=====================");
    println!("File: {}", file.display());
    println!("Codec: {}", algorithm.codec().name());
    println!("Size: {} bytes", data.len());

    match algorithm {
        Algorithm::Huffman => {
            let info = bytepress_huffman::container_info(&data)?;
            println!();
            println!("Huffman header:");
            println!("  Codebook: {} bits", info.codebook_bits);
            println!("  Payload: {} bits", info.data_bits);
            println!("  Distinct symbols: {}", info.distinct_symbols);
        }
        Algorithm::Lz77 => {
            let records = bytepress_lz77::record_count(&data)?;
            println!();
            println!("LZ77 stream:");
            println!(
                "  Records: {} ({} bytes each)",
                records,
                bytepress_lz77::RECORD_SIZE
            );
        }
    }

    Ok(())
}
