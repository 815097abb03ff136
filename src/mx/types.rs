use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Raw MX answer: exchange host, as the resolver returned it, and its
/// preference, before address resolution.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MxRecord {
    pub preference: u16,
    pub exchange: String,
}

impl MxRecord {
    pub fn new(preference: u16, exchange: impl Into<String>) -> Self {
        Self {
            preference,
            exchange: exchange.into(),
        }
    }
}

/// One mail exchanger of a domain together with the addresses its host resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MailExchanger {
    /// DNS name of the mail exchanger.
    #[schema(example = "mx1.example.com")]
    pub host: String,
    /// MX preference; lower values are tried first.
    #[schema(example = 10)]
    pub preference: u16,
    /// IPv4 and IPv6 addresses in resolver order.
    pub addresses: Vec<String>,
}

impl MailExchanger {
    pub fn new(host: impl Into<String>, preference: u16, addresses: Vec<String>) -> Self {
        Self {
            host: host.into(),
            preference,
            addresses,
        }
    }

    /// Ordering used for every result: preference ascending, then host ascending.
    pub fn priority_cmp(&self, other: &Self) -> Ordering {
        self.preference
            .cmp(&other.preference)
            .then_with(|| self.host.cmp(&other.host))
    }
}

/// Per-domain results of a bulk lookup. Domains whose MX lookup failed are absent.
pub type BulkResult = BTreeMap<String, Vec<MailExchanger>>;
