use std::io;

use clap::Parser;
use course_quiz::commands::{self, Command, CommandResult};
use course_quiz::render::text::format_panel;
use course_quiz::{ApiClient, Config, Error, Result};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// API origin, overrides QUIZ_API_BASE_URL
    #[arg(long)]
    base_url: Option<String>,

    /// Bearer token, overrides QUIZ_API_TOKEN
    #[arg(long)]
    token: Option<String>,

    /// Expand the raw JSON under listed results
    #[arg(long)]
    raw: bool,

    /// Sign a short-lived token with QUIZ_DEV_TOKEN_SECRET
    #[cfg(feature = "dev-token")]
    #[arg(long, conflicts_with = "token")]
    dev_token: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let command = args.command.clone().unwrap_or(Command::Quiz);
    init_tracing(command == Command::Quiz);

    if let Err(e) = run(args, command).await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args, command: Command) -> Result<()> {
    let mut config = Config::from_env()?;
    if let Some(base_url) = &args.base_url {
        config = config.with_base_url(base_url)?;
    }
    if args.token.is_some() {
        config.token = args.token.clone();
    }

    #[cfg(feature = "dev-token")]
    if args.dev_token {
        let secret = config
            .dev_token_secret
            .as_deref()
            .ok_or_else(|| Error::Config("QUIZ_DEV_TOKEN_SECRET is not set".to_string()))?;
        let credential = course_quiz::Credential::mint_dev_now(secret)?;
        config.token = Some(credential.as_str().to_string());
    }

    let api = ApiClient::from_config(&config);
    if config.token.is_some() && api.credential().is_none() {
        return Err(Error::Config("the token is empty".to_string()));
    }

    match commands::execute(&api, command, args.raw).await? {
        CommandResult::Output(panel) => println!("{}", format_panel(&panel).trim_end()),
        CommandResult::Quiz => course_quiz::run_quiz(api).await?,
    }
    Ok(())
}

/// Logs go to stderr, except while the wizard owns the terminal.
fn init_tracing(interactive: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if interactive {
        builder.with_writer(io::sink).init();
    } else {
        builder.with_writer(io::stderr).init();
    }
}
