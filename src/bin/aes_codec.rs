// src/bin/aes_codec.rs
//! aes-codec — encode and decode text with an AES key

use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use thenextlvl_crypto::config::{Config, ConfigSource};
use thenextlvl_crypto::{
    decode_file, encode_file, key_representations, load_config, resolve_key, Aes,
    Base64Alphabet, KeyOverrides, KeySize, SecretKey,
};
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// AES/ECB/PKCS#7 text codec with Base64 output
#[derive(Parser)]
#[command(name = "aes-codec")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct KeyArgs {
    /// Key as hex (16, 24 or 32 bytes)
    #[arg(long, conflicts_with_all = ["key", "passphrase"])]
    key_hex: Option<String>,

    /// Key as a UTF-8 string of 16, 24 or 32 bytes
    #[arg(long, conflicts_with = "passphrase")]
    key: Option<String>,

    /// Passphrase of any length, hashed with SHA-256 into an AES-256 key
    #[arg(long)]
    passphrase: Option<String>,

    /// Base64 alphabet for ciphertext text (defaults to the config value)
    #[arg(long, value_enum)]
    alphabet: Option<AlphabetArg>,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum AlphabetArg {
    Standard,
    UrlSafe,
}

impl From<AlphabetArg> for Base64Alphabet {
    fn from(arg: AlphabetArg) -> Self {
        match arg {
            AlphabetArg::Standard => Base64Alphabet::Standard,
            AlphabetArg::UrlSafe => Base64Alphabet::UrlSafe,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum SizeArg {
    Aes128,
    Aes192,
    Aes256,
}

impl From<SizeArg> for KeySize {
    fn from(arg: SizeArg) -> Self {
        match arg {
            SizeArg::Aes128 => KeySize::Aes128,
            SizeArg::Aes192 => KeySize::Aes192,
            SizeArg::Aes256 => KeySize::Aes256,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text and print it as Base64 (reads stdin when TEXT is omitted)
    Encode {
        text: Option<String>,
        #[command(flatten)]
        key: KeyArgs,
    },
    /// Decrypt Base64 text (reads stdin when TEXT is omitted)
    Decode {
        text: Option<String>,
        #[command(flatten)]
        key: KeyArgs,
    },
    /// Encrypt a file into a Base64 text file
    EncodeFile {
        input: PathBuf,
        output: PathBuf,
        #[command(flatten)]
        key: KeyArgs,
    },
    /// Decrypt a Base64 text file
    DecodeFile {
        input: PathBuf,
        output: PathBuf,
        #[command(flatten)]
        key: KeyArgs,
    },
    /// Generate a random key and print its representations
    Keygen {
        #[arg(long, value_enum)]
        size: Option<SizeArg>,
        /// Print JSON instead of plain lines
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config().context("Failed to load config")?;

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter))
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
    match &config.source {
        ConfigSource::File(path) => debug!(path = %path.display(), "config loaded"),
        ConfigSource::Defaults => warn!("no config file found — using built-in defaults"),
        ConfigSource::Inline => debug!("inline config loaded"),
    }

    match cli.command {
        Commands::Encode { text, key } => {
            let aes = build_codec(&key, config)?;
            let input = text_or_stdin(text)?;
            println!("{}", aes.encode(input));
        }
        Commands::Decode { text, key } => {
            let aes = build_codec(&key, config)?;
            let input = text_or_stdin(text)?;
            let plaintext = aes
                .decode(input.trim())
                .context("Decoding failed — wrong key or corrupted input?")?;
            println!("{plaintext}");
        }
        Commands::EncodeFile { input, output, key } => {
            let aes = build_codec(&key, config)?;
            let size = encode_file(&input, &output, &aes)
                .with_context(|| format!("Failed to encode {}", input.display()))?;
            info!("Encoded {} ({size} bytes) → {}", input.display(), output.display());
        }
        Commands::DecodeFile { input, output, key } => {
            let aes = build_codec(&key, config)?;
            let size = decode_file(&input, &output, &aes)
                .with_context(|| format!("Failed to decode {}", input.display()))?;
            info!("Decoded {} ({size} bytes) → {}", input.display(), output.display());
        }
        Commands::Keygen { size, json } => {
            let size = size.map(KeySize::from).unwrap_or(config.keygen.size);
            let repr = key_representations(&SecretKey::generate(size));
            if json {
                println!("{}", serde_json::to_string_pretty(&repr)?);
            } else {
                println!("size:             {} bits", size.bits());
                println!("hex:              {}", repr.hex);
                println!("base64:           {}", repr.base64);
                println!("base64url_no_pad: {}", repr.base64url_no_pad);
            }
        }
    }

    Ok(())
}

/// Key precedence: CLI flags, config hex, env var, interactive prompt
fn resolve_or_prompt(args: &KeyArgs, config: &Config) -> Result<SecretKey> {
    let overrides = KeyOverrides {
        hex: args.key_hex.clone(),
        utf8: args.key.clone(),
        passphrase: args.passphrase.clone(),
    };
    if let Some((key, origin)) = resolve_key(&overrides, config).with_context(|| {
        format!(
            "Invalid key (from --key-hex/--key, [key] hex or ${})",
            config.key.env_var
        )
    })? {
        debug!(?origin, fingerprint = %key.fingerprint(), "key resolved");
        return Ok(key);
    }

    let secret = rpassword::prompt_password("Secret key: ").context("Failed to read key")?;
    if secret.is_empty() {
        bail!("No key given");
    }
    SecretKey::from_str_utf8(&secret).context("Invalid key")
}

fn build_codec(args: &KeyArgs, config: &Config) -> Result<Aes> {
    let key = resolve_or_prompt(args, config)?;
    let alphabet = args
        .alphabet
        .map(Base64Alphabet::from)
        .unwrap_or(config.codec.alphabet);
    Ok(Aes::new(key).with_alphabet(alphabet))
}

fn text_or_stdin(text: Option<String>) -> Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf.trim_end_matches(['\r', '\n']).to_string())
        }
    }
}
