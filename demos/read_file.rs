//! Demo: open an NBT file, print it as SNBT, and optionally read or change
//! one value by path.
//!
//! NBT files are often gzip or zlib compressed; the data is inflated with
//! flate2 before it reaches the decoder.
//!
//! Run with: cargo run --example read_file -- <file> [path [snbt-value]]

use std::env;
use std::fs::File;
use std::io::{BufReader, Read};

use flate2::read::{GzDecoder, ZlibDecoder};
use nbt_edit::{Config, Document, Endian, parse_text};

/// Compression type detected from file header
#[derive(Debug, Clone, Copy)]
enum Compression {
    None,
    Gzip,
    Zlib,
}

fn detect_compression(data: &[u8]) -> Compression {
    match data {
        [0x1f, 0x8b, ..] => Compression::Gzip,
        [0x78, 0x01 | 0x5e | 0x9c | 0xda, ..] => Compression::Zlib,
        _ => Compression::None,
    }
}

fn read_nbt_file(path: &str) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let mut raw_data = Vec::new();
    BufReader::new(File::open(path)?).read_to_end(&mut raw_data)?;

    let compression = detect_compression(&raw_data);
    println!("Compression: {compression:?}");

    let mut data = Vec::new();
    match compression {
        Compression::None => return Ok(raw_data),
        Compression::Gzip => GzDecoder::new(&raw_data[..]).read_to_end(&mut data)?,
        Compression::Zlib => ZlibDecoder::new(&raw_data[..]).read_to_end(&mut data)?,
    };
    Ok(data)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    let Some(file) = args.get(1) else {
        println!("Usage: cargo run --example read_file -- <file> [path [snbt-value]]");
        println!();
        println!("Examples:");
        println!("  cargo run --example read_file -- level.dat");
        println!("  cargo run --example read_file -- level.dat Data.LevelName");
        println!("  cargo run --example read_file -- level.dat Data.Time 0L");
        return Ok(());
    };

    let data = read_nbt_file(file)?;
    println!("Decompressed size: {} bytes", data.len());

    let mut config = Config::default();
    let mut doc = match Document::from_binary(&data, &config) {
        Ok(doc) => doc,
        Err(e) => {
            println!("Not big-endian NBT ({e}), trying little-endian");
            config.endian = Endian::Little;
            Document::from_binary(&data, &config)?
        }
    };

    match (args.get(2), args.get(3)) {
        (None, _) => println!("{}", doc.to_text(&config)),
        (Some(path), None) => println!("{path} = {:#}", doc.get_path(path.as_str())?),
        (Some(path), Some(value)) => {
            doc.set_path(path.as_str(), parse_text(value)?)?;
            println!("{path} = {:#}", doc.get_path(path.as_str())?);
            println!("Re-encoded size: {} bytes", doc.to_binary(&config)?.len());
        }
    }

    Ok(())
}
