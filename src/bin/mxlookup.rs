#[path = "mxlookup/args.rs"]
mod args;
#[path = "mxlookup/output.rs"]
mod output;

use std::sync::Arc;

use anyhow::{Context, Result};
use mxlookup::{LookupMx, ServerConfig, resolve_bulk, resolve_mx, serve, system_resolver};
use tracing_subscriber::EnvFilter;

use args::{Cli, Commands, format_from_str};

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let resolver = system_resolver().context("load system DNS configuration")?;

    match cli.cmd {
        Commands::Serve { listen, base_path } => {
            let config = ServerConfig::new(listen, base_path);
            let resolver: Arc<dyn LookupMx> = Arc::new(resolver);
            serve(&config, resolver).await?;
        }
        Commands::Lookup { domains, format } => {
            let format = format_from_str(&format)?;
            // un seul domaine : l'erreur DNS est affichée telle quelle
            if let [domain] = domains.as_slice() {
                match resolve_mx(&resolver, domain).await {
                    Ok(exchangers) => {
                        println!("{}", output::render_single(domain, &exchangers, format)?);
                    }
                    Err(err) => {
                        eprintln!("[FAILED] {domain} :: {err}");
                        std::process::exit(2);
                    }
                }
            } else {
                let result = resolve_bulk(&resolver, &domains).await?;
                println!("{}", output::render_bulk(&domains, &result, format)?);
                // codes de sortie : 0 OK, 2 domaine(s) non résolu(s), 1 fatal
                if domains.iter().any(|d| !result.contains_key(d)) {
                    std::process::exit(2);
                }
            }
        }
    }
    Ok(())
}
