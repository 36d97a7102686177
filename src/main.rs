use clap::{Parser, Subcommand};
use phrasecloak::{decrypt_phrase, encrypt_phrase};
use std::process::ExitCode;

/// Version info from build.rs
const VERSION: &str = env!("PHRASECLOAK_VERSION");
const BUILD: &str = env!("PHRASECLOAK_BUILD");
const PROFILE: &str = env!("PHRASECLOAK_PROFILE");
const GIT_HASH: &str = env!("PHRASECLOAK_GIT_HASH");

/// Combined version string (compile-time concatenation not possible, so we build at runtime)
fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "phrasecloak")]
#[command(author, about = "Reversible word obfuscation under phrase encryption", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a phrase; prints the envelope and reverse key as JSON
    #[command(alias = "e")]
    Encrypt {
        /// Space-separated phrase to protect
        phrase: String,

        /// Password for key derivation and transform seeding
        #[arg(long, required = true)]
        password: String,
    },

    /// Decrypt a phrase from its envelope and reverse key
    #[command(alias = "d")]
    Decrypt {
        /// Encrypted data (versioned envelope or bare transit string)
        data: String,

        /// Reverse key (packed or legacy form)
        reverse_key: String,

        /// Password used at encryption time
        #[arg(long, required = true)]
        password: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle --version flag
    if cli.version {
        println!("phrasecloak {}", get_version());
        return ExitCode::SUCCESS;
    }

    // Require a command if not showing version
    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // Show help when no command provided
            use clap::CommandFactory;
            Cli::command().print_help().unwrap();
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Encrypt { phrase, password } => match encrypt_phrase(&phrase, &password) {
            Ok(sealed) => match serde_json::to_string(&sealed) {
                Ok(json) => {
                    println!("{}", json);
                    Ok(())
                }
                Err(e) => Err(e.into()),
            },
            Err(e) => Err(e),
        },

        Commands::Decrypt {
            data,
            reverse_key,
            password,
        } => match decrypt_phrase(&data, &reverse_key, &password) {
            Ok(phrase) => {
                println!("{}", phrase);
                Ok(())
            }
            Err(e) => Err(e),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
