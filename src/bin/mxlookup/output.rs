use std::collections::HashSet;

use anyhow::Result;
use mxlookup::{BulkResult, MailExchanger};

use crate::args::OutputFormat;

pub fn human_summary(exchangers: &[MailExchanger]) -> String {
    if exchangers.is_empty() {
        return "no mail exchanger".to_string();
    }
    exchangers
        .iter()
        .map(|mx| format!("{}:{} [{}]", mx.preference, mx.host, mx.addresses.join(", ")))
        .collect::<Vec<_>>()
        .join("; ")
}

pub fn render_single(
    domain: &str,
    exchangers: &[MailExchanger],
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(format!("[OK]     {domain} :: {}", human_summary(exchangers))),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(exchangers)?),
    }
}

/// Renders a bulk result. Human output follows the order of `domains` and
/// flags the ones missing from `result`.
pub fn render_bulk(domains: &[String], result: &BulkResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Human => {
            let mut seen = HashSet::new();
            let mut lines = Vec::new();
            for domain in domains {
                if !seen.insert(domain.as_str()) {
                    continue;
                }
                match result.get(domain) {
                    Some(exchangers) => {
                        lines.push(format!("[OK]     {domain} :: {}", human_summary(exchangers)))
                    }
                    None => lines.push(format!("[FAILED] {domain} :: MX lookup failed")),
                }
            }
            Ok(lines.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exchanger(host: &str, preference: u16, addresses: &[&str]) -> MailExchanger {
        MailExchanger {
            host: host.to_string(),
            preference,
            addresses: addresses.iter().map(|a| a.to_string()).collect(),
        }
    }

    #[test]
    fn human_summary_lists_records() {
        let exchangers = vec![
            exchanger("mx1.example", 10, &["192.0.2.1", "2001:db8::1"]),
            exchanger("mx2.example", 20, &["192.0.2.2"]),
        ];
        assert_eq!(
            human_summary(&exchangers),
            "10:mx1.example [192.0.2.1, 2001:db8::1]; 20:mx2.example [192.0.2.2]"
        );
        assert_eq!(human_summary(&[]), "no mail exchanger");
    }

    #[test]
    fn render_bulk_flags_missing_domains_once() {
        let mut result = BulkResult::new();
        result.insert(
            "good.example".to_string(),
            vec![exchanger("mx1.example", 10, &["192.0.2.1"])],
        );
        let domains = vec![
            "bad.example".to_string(),
            "good.example".to_string(),
            "bad.example".to_string(),
        ];

        let out = render_bulk(&domains, &result, OutputFormat::Human).expect("render");
        assert_eq!(
            out,
            "[FAILED] bad.example :: MX lookup failed\n[OK]     good.example :: 10:mx1.example [192.0.2.1]"
        );
    }

    #[test]
    fn render_bulk_json_matches_http_shape() {
        let mut result = BulkResult::new();
        result.insert("nomail.example".to_string(), Vec::new());

        let out = render_bulk(&["nomail.example".to_string()], &result, OutputFormat::Json)
            .expect("render");
        let value: serde_json::Value = serde_json::from_str(&out).expect("valid json");
        assert_eq!(value, serde_json::json!({ "nomail.example": [] }));
    }
}
