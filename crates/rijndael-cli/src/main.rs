//! Command-line driver for the `rijndael` AES-128 engine.

#![forbid(unsafe_code)]

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use log::{debug, info, warn};
use rand::{CryptoRng, Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rijndael::{Aes128, Aes128Key, Block};

const KAT_KEY: &str = "000102030405060708090a0b0c0d0e0f";
const KAT_PLAIN: &str = "00112233445566778899aabbccddeeff";
const KAT_CIPHER: &str = "69c4e0d86a7b0430d8cdb78070b4c55a";

/// AES-128 single-block CLI.
#[derive(Parser)]
#[command(name = "rijndael", version, author, about = "AES-128 single-block tool")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt one block.
    Encrypt {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Plaintext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Decrypt one block.
    Decrypt {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Ciphertext block as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        block_hex: String,
    },
    /// Print the 11 round keys derived from a key.
    Expand {
        /// AES-128 key as 32 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
    },
    /// Run the FIPS-197 known-answer test and random encrypt/decrypt round trips.
    Check {
        /// Number of random samples to test.
        #[arg(long, default_value_t = 64)]
        samples: usize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Measure how many ciphertext bits change when one plaintext bit flips.
    Avalanche {
        /// Number of random samples to test.
        #[arg(long, default_value_t = 1024)]
        samples: usize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.command {
        Commands::Encrypt { key_hex, block_hex } => cmd_encrypt(&key_hex, &block_hex),
        Commands::Decrypt { key_hex, block_hex } => cmd_decrypt(&key_hex, &block_hex),
        Commands::Expand { key_hex } => cmd_expand(&key_hex),
        Commands::Check { samples, seed } => cmd_check(samples, seed),
        Commands::Avalanche { samples, seed } => cmd_avalanche(samples, seed),
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn cmd_encrypt(key_hex: &str, block_hex: &str) -> Result<()> {
    let cipher = Aes128::new(&parse_key_hex(key_hex)?);
    let block = parse_block_hex("block", block_hex)?;
    println!("{}", hex::encode(cipher.encrypt_block(&block)));
    Ok(())
}

fn cmd_decrypt(key_hex: &str, block_hex: &str) -> Result<()> {
    let cipher = Aes128::new(&parse_key_hex(key_hex)?);
    let block = parse_block_hex("block", block_hex)?;
    println!("{}", hex::encode(cipher.decrypt_block(&block)));
    Ok(())
}

fn cmd_expand(key_hex: &str) -> Result<()> {
    let round_keys = rijndael::expand_key_with(&parse_key_hex(key_hex)?);
    for (round, round_key) in round_keys.iter().enumerate() {
        println!("{round:2}: {}", hex::encode(round_key));
    }
    Ok(())
}

fn cmd_check(samples: usize, seed: Option<u64>) -> Result<()> {
    let key = parse_key_hex(KAT_KEY)?;
    let plaintext = parse_block_hex("KAT plaintext", KAT_PLAIN)?;
    let expected = parse_block_hex("KAT ciphertext", KAT_CIPHER)?;
    let cipher = Aes128::new(&key);
    let actual = cipher.encrypt_block(&plaintext);
    if actual != expected {
        bail!(
            "known-answer mismatch: expected {KAT_CIPHER}, got {}",
            hex::encode(actual)
        );
    }
    if cipher.decrypt_block(&expected) != plaintext {
        bail!("known-answer decryption did not recover the plaintext");
    }
    info!("FIPS-197 known-answer test passed");

    let mut rng = seeded_rng(seed);
    for sample in 0..samples {
        let key = Aes128Key::from(rng.gen::<[u8; 16]>());
        let block: Block = rng.gen();
        let cipher = Aes128::new(&key);
        let ciphertext = cipher.encrypt_block(&block);
        let recovered = cipher.decrypt_block(&ciphertext);
        debug!(
            "sample {sample}: key={} pt={} ct={}",
            hex::encode(key.as_bytes()),
            hex::encode(block),
            hex::encode(ciphertext)
        );
        if recovered != block {
            bail!(
                "round trip failed for key {} block {}",
                hex::encode(key.as_bytes()),
                hex::encode(block)
            );
        }
    }
    println!("ok: known-answer test and {samples} random round trips passed");
    Ok(())
}

fn cmd_avalanche(samples: usize, seed: Option<u64>) -> Result<()> {
    if samples == 0 {
        bail!("--samples must be at least 1");
    }
    let mut rng = seeded_rng(seed);
    let cipher = Aes128::new(&Aes128Key::from(rng.gen::<[u8; 16]>()));

    let mut flipped = 0u64;
    for _ in 0..samples {
        let plaintext: Block = rng.gen();
        let bit = rng.gen_range(0..128usize);
        let mut tweaked = plaintext;
        tweaked[bit / 8] ^= 1 << (bit % 8);
        flipped += hamming_distance(
            &cipher.encrypt_block(&plaintext),
            &cipher.encrypt_block(&tweaked),
        ) as u64;
    }
    let mean = flipped as f64 / (samples as f64 * 128.0);
    println!("mean flipped fraction over {samples} samples: {mean:.4}");
    if !(0.4..0.6).contains(&mean) {
        warn!("avalanche ratio {mean:.4} is far from 0.5");
    }
    Ok(())
}

fn hamming_distance(a: &Block, b: &Block) -> u32 {
    a.iter().zip(b.iter()).map(|(x, y)| (x ^ y).count_ones()).sum()
}

fn parse_hex16(what: &str, hex_str: &str) -> Result<[u8; 16]> {
    let bytes = hex::decode(hex_str.trim()).with_context(|| format!("decode {what} hex"))?;
    if bytes.len() != 16 {
        bail!(
            "{what} must be 16 bytes (32 hex characters), got {} bytes",
            bytes.len()
        );
    }
    let mut out = [0u8; 16];
    out.copy_from_slice(&bytes);
    Ok(out)
}

fn parse_key_hex(hex_str: &str) -> Result<Aes128Key> {
    parse_hex16("AES-128 key", hex_str).map(Aes128Key::from)
}

fn parse_block_hex(what: &str, hex_str: &str) -> Result<Block> {
    parse_hex16(what, hex_str)
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    let mut seed_bytes = [0u8; 32];
    match seed {
        Some(value) => seed_bytes[..8].copy_from_slice(&value.to_le_bytes()),
        None => rand::rngs::OsRng.fill_bytes(&mut seed_bytes),
    }
    ChaCha20Rng::from_seed(seed_bytes)
}
