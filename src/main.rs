use clap::{Parser, Subcommand};
use retina::{Client, ClientConfig, Options, PosType};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "retina", about = "Query a Retina semantic fingerprint server")]
struct Cli {
    /// Write debug logs to /tmp/retina-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    /// Override the api key from config / RETINA_API_KEY.
    #[arg(long)]
    api_key: Option<String>,

    /// Override the server address, e.g. http://localhost:8080/rest.
    #[arg(long)]
    server: Option<String>,

    /// Override the retina name, e.g. en_synonymous.
    #[arg(long)]
    retina: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the retinas hosted by the server.
    Retinas,
    /// Terms similar to TERM.
    SimilarTerms {
        term: String,
        #[arg(long, default_value_t = retina::DEFAULT_MAX_RESULTS)]
        max_results: u32,
        /// NOUN, VERB or ADJECTIVE.
        #[arg(long)]
        pos_type: Option<PosType>,
    },
    /// Resolve an expression given as JSON, e.g. '{"and":[{"term":"a"},{"term":"b"}]}'.
    Fingerprint { expression: String },
    /// Compare two models given as JSON fragments.
    Compare { left: String, right: String },
    /// Keywords of TEXT.
    Keywords { text: String },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/retina-debug.log")?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("retina debug log started, tail -f /tmp/retina-debug.log");
    }

    let mut config = ClientConfig::load()?;
    if let Some(key) = cli.api_key {
        config = config.with_api_key(key);
    }
    if let Some(server) = cli.server {
        config = config.with_server_address(server);
    }
    if let Some(retina) = cli.retina {
        config = config.with_retina_name(retina);
    }
    let client = Client::connect(config)?;

    match cli.command {
        Command::Retinas => print_json(&client.retinas()?),
        Command::SimilarTerms {
            term,
            max_results,
            pos_type,
        } => {
            let mut opts = Options::new().max_results(max_results);
            opts.pos_type = pos_type;
            print_json(&client.similar_terms_for_term_with(&term, &opts)?)
        }
        Command::Fingerprint { expression } => {
            print_json(&client.fingerprint_for_expression(expression.as_str())?)
        }
        Command::Compare { left, right } => {
            print_json(&client.compare_json(&format!("[{left},{right}]"))?)
        }
        Command::Keywords { text } => print_json(&client.keywords_for_text(&text)?),
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
