use clap::Parser;
use explorer_engine::config::EngineConfig;
use explorer_engine::engine::Engine;

#[derive(Debug, Parser)]
#[command(
    name = "sqlite-explorer",
    version,
    about = "Browse and query a hosted SQLite database from the browser",
    disable_help_subcommand = true
)]
struct Cli {
    /// Start the HTTP server at HOST:PORT
    #[arg(short = 'S', value_name = "HOST:PORT")]
    serve: Option<String>,

    /// API token for the hosting platform
    #[arg(long, env = "VALTOWN_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Base URL of the hosting platform API
    #[arg(long, env = "VALTOWN_API_URL", default_value = "https://api.val.town")]
    api_url: String,
}

fn parse_host_port(s: &str) -> Result<(String, u16), String> {
    if let Some(rest) = s.strip_prefix('[') {
        // bracketed IPv6: [host]:port
        if let Some(end) = rest.find(']') {
            let host = &rest[..end];
            let remain = &rest[end + 1..];
            let port = remain
                .strip_prefix(':')
                .ok_or("missing port after IPv6 host")?;
            let port: u16 = port.parse().map_err(|_| "invalid port".to_string())?;
            return Ok((host.to_string(), port));
        }
        return Err("invalid bracketed IPv6 address".to_string());
    }
    let mut parts = s.rsplitn(2, ':');
    let port_str = parts.next().ok_or("missing port")?;
    let host = parts.next().ok_or("missing host")?;
    let port: u16 = port_str.parse().map_err(|_| "invalid port".to_string())?;
    Ok((host.to_string(), port))
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = EngineConfig::default().set_api_url(cli.api_url);
    if let Some(addr) = cli.serve.as_deref() {
        match parse_host_port(addr) {
            Ok((host, port)) => {
                config.host = host;
                config.port = port;
            }
            Err(e) => {
                eprintln!("-S expects HOST:PORT (e.g. 127.0.0.1:3000), error: {}", e);
                std::process::exit(2);
            }
        }
    }

    // older deployments export the token as `valtown`
    if let Some(token) = cli.token.or_else(|| std::env::var("valtown").ok()) {
        config = config.set_token(token);
    }

    let engine = match Engine::new_with_config(config) {
        Ok(engine) => engine,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(2);
        }
    };

    if let Err(e) = engine.run().await {
        tracing::error!("server error: {}", e);
        std::process::exit(1);
    }
}
