// command line interface

use clap::{ArgAction, Parser, Subcommand};
use miette::Result;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::core::{ClientHandle, Gateway, Provider};
use crate::Server;

#[derive(Parser)]
#[command(name = "zenvibe", version, about = "A safe space for teens to share and support each other")]
struct Cli {
    /// ai provider
    #[arg(long, short = 'p', value_enum, default_value = "gemini", env = "ZENVIBE_PROVIDER", global = true)]
    provider: Provider,

    /// api key for the ai provider (falls back to the provider's env vars)
    #[arg(long, short = 'k', global = true)]
    api_key: Option<String>,

    /// model override
    #[arg(long, short = 'm', global = true)]
    model: Option<String>,

    /// more logging (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// start as http server
    Serve {
        /// port number
        #[arg(long, short = 'P', default_value = "3000")]
        port: u16,

        /// host to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },

    /// check a message the way the feed does
    Moderate { text: String },

    /// write a supportive reply to a post
    Reply { text: String },

    /// feedback for a stress check score (0-10)
    QuizFeedback { score: f64 },
}

fn init_logging(verbose: u8, tui: bool) {
    // RUST_LOG wins; the tui stays quiet unless asked since stderr would draw over it
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match (verbose, tui) {
        (0, true) => EnvFilter::new("off"),
        (0, false) => EnvFilter::new("warn"),
        (1, _) => EnvFilter::new("info"),
        (2, _) => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.command.is_none());

    let config = Config::resolve(cli.provider, cli.api_key, cli.model);
    let gateway = Gateway::new(ClientHandle::init(
        config.provider,
        config.api_key,
        config.model,
    ));

    match cli.command {
        Some(Commands::Serve { port, host }) => Ok(Server::run(gateway, &host, port).await?),

        Some(Commands::Moderate { text }) => {
            let result = gateway.moderate_content(&text).await;
            println!(
                "{}",
                serde_json::to_string_pretty(&result).map_err(crate::Error::from)?
            );
            Ok(())
        }

        Some(Commands::Reply { text }) => {
            println!("{}", gateway.generate_supportive_reply(&text).await);
            Ok(())
        }

        Some(Commands::QuizFeedback { score }) => {
            println!("{}", gateway.get_quiz_feedback(score).await);
            Ok(())
        }

        None => Ok(crate::tui::run(gateway).await?),
    }
}
