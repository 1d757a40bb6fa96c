//! GoShepherd client - terminal UI and scripting commands for a GoShepherd registry
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use go_shepherd::cli::{self, Command, ConfigAction};
use shepherd_app::{config, Engine};
use shepherd_client::HttpRegistryClient;
use shepherd_core::prelude::*;
use shepherd_core::logging;

/// GoShepherd client - register Go profiling tools and browse the registry
#[derive(Parser, Debug)]
#[command(name = "shepherd")]
#[command(about = "Terminal client for the GoShepherd tool registry", long_about = None)]
struct Args {
    /// Service URL, overrides `service.url` from the config file
    #[arg(long, value_name = "URL", global = true)]
    server: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = logging::init() {
        eprintln!("Logging disabled: {}", e);
    }

    if let Err(e) = run(args).await {
        error!("Exiting with error: {:?}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    if let Some(Command::Config {
        action: ConfigAction::Init,
    }) = &args.command
    {
        let path = args
            .config
            .clone()
            .or_else(config::default_config_path)
            .ok_or_else(|| Error::config("No config directory on this platform; pass --config"))?;
        return cli::config_init(&path, &mut io::stdout());
    }

    let mut settings = config::load_settings_from(args.config.as_deref());
    if let Some(server) = args.server {
        settings.service.url = server;
    }

    let endpoint = settings.service.endpoint()?;
    let client = HttpRegistryClient::new(endpoint.clone(), settings.service.request_timeout())?;
    let mut out = io::stdout();

    match args.command {
        None => {
            let engine = Engine::new(client, endpoint, settings);
            shepherd_tui::run(engine).await
        }
        Some(Command::List) => cli::list(&client, &endpoint, &mut out).await,
        Some(Command::Add {
            tool,
            name,
            path1,
            path2,
        }) => cli::add(
            &client,
            &endpoint,
            shepherd_client::AddRequest::new(tool, name, path1, &path2),
            &mut out,
        )
        .await
        .map(|_| ()),
        Some(Command::Remove { port }) => cli::remove(&client, port, &mut out).await,
        Some(Command::Upload {
            file,
            name,
            tool,
            path2,
        }) => cli::upload(&client, &endpoint, &file, name, tool, &path2, &mut out)
            .await
            .map(|_| ()),
        Some(Command::Config { .. }) => Ok(()),
    }
}
