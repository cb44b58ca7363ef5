// src/main.rs
//! rexcrypt CLI
//!
//! Commands:
//!   encrypt           - encrypt one file under a fresh key (key is printed)
//!   decrypt           - decrypt one file with a supplied key
//!   encrypt_recursive - encrypt every file under a directory, one key each
//!   decrypt_recursive - decrypt every .rex file under a directory, one key
//!
//! Exit status is 0 only on full success; any failed file makes it 1.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::error;

use rexcrypt::consts::ENCRYPTED_SUFFIX;
use rexcrypt::{
    decrypt_file, decrypt_tree, encode_key, encrypt_file, encrypt_tree, parse_key, TreeFailure,
};

#[derive(Parser, Debug)]
#[command(
    name = "rexcrypt",
    version,
    about = "Authenticated file encryption, single files or whole trees"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encrypt one file under a freshly generated key
    ///
    /// The key is printed to stdout — store it, it cannot be recovered.
    Encrypt {
        /// File to encrypt
        #[arg(long)]
        file: PathBuf,
        /// Output path (default: <file>.rex)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Decrypt one file with a supplied key
    Decrypt {
        /// File to decrypt
        #[arg(long)]
        file: PathBuf,
        /// Key text as printed by encrypt
        #[arg(long)]
        key: String,
        /// Output path (default: <file> without its .rex suffix, or with
        /// a .dec extension when there is no .rex suffix to strip)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Encrypt every regular file under a directory, one fresh key per file
    ///
    /// Prints the relative-path → key mapping as JSON on stdout.
    #[command(name = "encrypt_recursive")]
    EncryptRecursive {
        /// Directory to walk
        directory: PathBuf,
    },

    /// Decrypt every .rex file under a directory with one supplied key
    ///
    /// Files encrypted under a different key fail authentication and are
    /// reported; they do not abort the run.
    #[command(name = "decrypt_recursive")]
    DecryptRecursive {
        /// Directory to walk
        directory: PathBuf,
        /// Key text as printed by encrypt
        #[arg(long)]
        key: String,
    },
}

fn default_encrypt_output(file: &Path) -> PathBuf {
    let mut name = file.as_os_str().to_owned();
    name.push(".");
    name.push(ENCRYPTED_SUFFIX);
    PathBuf::from(name)
}

fn default_decrypt_output(file: &Path) -> PathBuf {
    let stripped = file.with_extension("");
    if file
        .extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(ENCRYPTED_SUFFIX))
        .unwrap_or(false)
    {
        stripped
    } else {
        file.with_extension("dec")
    }
}

fn print_failures(failures: &[TreeFailure]) {
    for failure in failures {
        eprintln!("FAILED {}: {}", failure.path.display(), failure.error);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encrypt { file, output } => {
            let output = output.unwrap_or_else(|| default_encrypt_output(&file));
            let key = encrypt_file(&file, &output)
                .with_context(|| format!("failed to encrypt {}", file.display()))?;
            println!("File encrypted successfully: {}", output.display());
            println!("Key (store this securely, it cannot be recovered):");
            println!("{}", encode_key(&key));
        }
        Commands::Decrypt { file, key, output } => {
            let key = parse_key(&key)?;
            let output = output.unwrap_or_else(|| default_decrypt_output(&file));
            decrypt_file(&file, &output, &key)
                .with_context(|| format!("failed to decrypt {}", file.display()))?;
            println!("File decrypted successfully: {}", output.display());
        }
        Commands::EncryptRecursive { directory } => {
            let report = encrypt_tree(&directory)?;

            let mapping: BTreeMap<String, String> = report
                .keys
                .iter()
                .map(|(path, key)| (path.display().to_string(), encode_key(key)))
                .collect();
            println!("{}", serde_json::to_string_pretty(&mapping)?);

            print_failures(&report.failures);
            if !report.all_succeeded() {
                anyhow::bail!("{} file(s) failed to encrypt", report.failures.len());
            }
        }
        Commands::DecryptRecursive { directory, key } => {
            let key = parse_key(&key)?;
            let report = decrypt_tree(&directory, &key)?;

            for path in &report.restored {
                println!("restored {}", path.display());
            }
            print_failures(&report.failures);
            if !report.all_succeeded() {
                anyhow::bail!("{} file(s) failed to decrypt", report.failures.len());
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
