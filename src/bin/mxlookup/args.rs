use std::net::SocketAddr;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use mxlookup::config::DEFAULT_LISTEN;

#[derive(Parser)]
#[command(name = "mxlookup", version, about = "MX record lookup service")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,

    /// niveau de log (trace|debug|info|warn|error), ignoré si RUST_LOG est défini
    #[arg(long, global = true, env = "MXLOOKUP_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// lance le service HTTP
    Serve {
        /// adresse d'écoute
        #[arg(long, env = "MXLOOKUP_LISTEN", default_value = DEFAULT_LISTEN)]
        listen: SocketAddr,
        /// préfixe des routes (ex: /chatgpt/dns-actions)
        #[arg(long, env = "MXLOOKUP_BASE_PATH")]
        base_path: Option<String>,
    },
    /// résout les MX d'un ou plusieurs domaines et affiche le résultat
    Lookup {
        /// domaines à résoudre (50 maximum)
        #[arg(required = true)]
        domains: Vec<String>,
        /// format: human|json
        #[arg(long, default_value = "human")]
        format: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

pub fn format_from_str(s: &str) -> Result<OutputFormat> {
    match s {
        "human" => Ok(OutputFormat::Human),
        "json" => Ok(OutputFormat::Json),
        other => bail!("unknown --format '{other}', use: human|json"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_defaults() {
        let cli = Cli::try_parse_from(["mxlookup", "serve"]).expect("parse");
        match cli.cmd {
            Commands::Serve { listen, base_path } => {
                assert_eq!(listen.to_string(), DEFAULT_LISTEN);
                assert!(base_path.is_none());
            }
            Commands::Lookup { .. } => panic!("expected serve"),
        }
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn lookup_requires_a_domain() {
        assert!(Cli::try_parse_from(["mxlookup", "lookup"]).is_err());
        let cli = Cli::try_parse_from(["mxlookup", "lookup", "a.example", "b.example"])
            .expect("parse");
        match cli.cmd {
            Commands::Lookup { domains, format } => {
                assert_eq!(domains, ["a.example", "b.example"]);
                assert_eq!(format, "human");
            }
            Commands::Serve { .. } => panic!("expected lookup"),
        }
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert_eq!(format_from_str("json").expect("json"), OutputFormat::Json);
        assert!(format_from_str("csv").is_err());
    }
}
