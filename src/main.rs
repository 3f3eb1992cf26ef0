use clap::Parser;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

use iris::config::Config;
use iris::consts::{ASSISTANT_NAME, NO_COMMAND, VERSION};
use iris::dispatcher::Dispatcher;
use iris::server;

#[derive(Parser, Debug)]
#[command(
    name = "iris",
    version,
    about = "A keyword-driven personal assistant."
)]
struct Cli {
    /// Serve the chat endpoint over HTTP instead of answering once
    #[arg(long)]
    serve: bool,

    /// Bind host (overrides IRIS_HOST)
    #[arg(long, requires = "serve")]
    host: Option<String>,

    /// Bind port (overrides PORT)
    #[arg(short, long, requires = "serve")]
    port: Option<u16>,

    /// Provider timeout in seconds (overrides IRIS_PROVIDER_TIMEOUT_SECS)
    #[arg(short, long, requires = "serve")]
    timeout: Option<u64>,

    /// What to ask, e.g. `iris what time is it`
    #[arg(trailing_var_arg = true, allow_negative_numbers = true, conflicts_with = "serve")]
    text: Vec<String>,
}

fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.serve {
        init_logging("info");

        let mut config = Config::load();
        if let Some(host) = cli.host {
            config.host = host;
        }
        if let Some(port) = cli.port.filter(|p| *p != 0) {
            config.port = port;
        }
        if let Some(secs) = cli.timeout.filter(|s| *s > 0) {
            config.provider_timeout = Duration::from_secs(secs);
        }

        info!(
            "{ASSISTANT_NAME} v{VERSION} starting, provider timeout {}s",
            config.provider_timeout.as_secs()
        );
        let dispatcher = Dispatcher::live(&config)?;
        return server::run(&config, dispatcher).await;
    }

    init_logging("warn");

    if cli.text.is_empty() {
        println!("{NO_COMMAND}");
        return Ok(());
    }

    let config = Config::load();
    let dispatcher = Dispatcher::live(&config)?;
    println!("{}", dispatcher.respond(&cli.text.join(" ")).await);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("iris").chain(args.iter().copied()))
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn words_are_the_question() {
        let cli = parse(&["what", "time", "is", "it"]).unwrap();
        assert!(!cli.serve);
        assert_eq!(cli.text.join(" "), "what time is it");
    }

    #[test]
    fn serve_as_first_word_is_text() {
        let cli = parse(&["serve", "me", "a", "joke"]).unwrap();
        assert!(!cli.serve);
        assert_eq!(cli.text, ["serve", "me", "a", "joke"]);

        let cli = parse(&["serve"]).unwrap();
        assert!(!cli.serve);
        assert_eq!(cli.text, ["serve"]);
    }

    #[test]
    fn serve_flag_takes_overrides() {
        let cli = parse(&["--serve", "--host", "127.0.0.1", "--port", "8080", "-t", "2"]).unwrap();
        assert!(cli.serve);
        assert_eq!(cli.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(cli.port, Some(8080));
        assert_eq!(cli.timeout, Some(2));
        assert!(cli.text.is_empty());
    }

    #[test]
    fn server_options_need_serve() {
        assert!(parse(&["--port", "8080"]).is_err());
    }

    #[test]
    fn negative_numbers_are_text() {
        let cli = parse(&["-2", "+", "3"]).unwrap();
        assert_eq!(cli.text.join(" "), "-2 + 3");
    }

    #[test]
    fn no_arguments_is_empty() {
        let cli = parse(&[]).unwrap();
        assert!(!cli.serve);
        assert!(cli.text.is_empty());
    }
}
