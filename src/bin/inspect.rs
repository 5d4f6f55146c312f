//! rowkey key inspector
//!
//! Offline encode/decode of raw engine keys. The group/marker layout is
//! an on-disk contract, so external tooling can check stored keys against
//! what this codec produces.

use clap::{Parser, Subcommand};
use rowkey::{encode_int_row_id, escape, KeyAdapter, KeyBuf};
use tracing_subscriber::{fmt, EnvFilter};

/// rowkey inspector
#[derive(Parser, Debug)]
#[command(name = "rowkey-inspect")]
#[command(about = "Inspect engine keys produced by the rowkey codec")]
#[command(version)]
struct Args {
    /// Treat keys as plain (Noop adapter) instead of duplicate-detection encoded
    #[arg(long)]
    no_dup_detect: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode hex-encoded engine keys back to user keys
    Decode {
        /// Hex-encoded engine keys
        keys: Vec<String>,
    },

    /// Encode hex-encoded user keys with a synthetic integer row ID
    Encode {
        /// Row ID appended after the escaped key
        #[arg(short, long, default_value = "0")]
        row_id: i64,

        /// Hex-encoded user keys
        keys: Vec<String>,
    },
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,rowkey=debug"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();
    let adapter = if args.no_dup_detect {
        KeyAdapter::Noop
    } else {
        KeyAdapter::DupDetect
    };

    let result = match args.command {
        Commands::Decode { keys } => decode_keys(adapter, &keys),
        Commands::Encode { row_id, keys } => encode_keys(adapter, row_id, &keys),
    };

    if let Err(e) = result {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn decode_keys(adapter: KeyAdapter, keys: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    for hex_key in keys {
        let data = hex::decode(hex_key)?;
        let mut buf = KeyBuf::new();

        match adapter {
            KeyAdapter::Noop => {
                adapter.decode(&mut buf, &data)?;
                println!("key={}", hex::encode(buf.as_slice()));
            }
            KeyAdapter::DupDetect => {
                let consumed = escape::unescape_to(&mut buf, &data)?;
                println!(
                    "key={} row_id={}",
                    hex::encode(buf.as_slice()),
                    hex::encode(&data[consumed..])
                );
            }
        }
    }
    Ok(())
}

fn encode_keys(
    adapter: KeyAdapter,
    row_id: i64,
    keys: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    let encoded_row_id = encode_int_row_id(row_id);
    for hex_key in keys {
        let key = hex::decode(hex_key)?;
        let mut buf = KeyBuf::with_capacity(adapter.encoded_len(&key, &encoded_row_id));
        adapter.encode(&mut buf, &key, &encoded_row_id);
        println!("{}", hex::encode(buf.as_slice()));
    }
    Ok(())
}
