use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod cli;
mod error;
mod exec;
mod github;
mod prompt;
mod ssh;
mod ui;

pub use error::{KeyupError, Result};

#[derive(Parser)]
#[command(name = "keyup")]
#[command(about = "Provision an SSH key pair and register it with your GitHub account")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new SSH key pair with ssh-keygen
    Generate {
        /// Key file name, created under ~/.ssh
        #[arg(default_value = ssh::DEFAULT_KEY_NAME)]
        name: String,

        /// Treat an already existing key as provisioned instead of failing
        #[arg(short, long)]
        allow_existing: bool,
    },

    /// List public keys in the SSH directory
    List,

    /// Upload a public key to your GitHub account
    Upload {
        /// Path to the public key file
        key_file: PathBuf,

        /// GitHub hostname to upload to
        #[arg(long, default_value = "github.com")]
        hostname: String,

        /// Title for the key on the remote account
        #[arg(short, long)]
        title: Option<String>,

        /// Access token with write:public_key scope
        #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
        token: String,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            name,
            allow_existing,
        } => {
            cli::commands::generate::execute(name, allow_existing)?;
            Ok(())
        }
        Commands::List => {
            cli::commands::list::execute()?;
            Ok(())
        }
        Commands::Upload {
            key_file,
            hostname,
            title,
            token,
        } => {
            cli::commands::upload::execute(key_file, hostname, title, token)?;
            Ok(())
        }
    }
}
