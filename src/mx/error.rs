use thiserror::Error;

use super::MAX_BULK_DOMAINS;

#[derive(Debug, Error)]
pub enum MxError {
    #[error("domain is empty")]
    EmptyDomain,
    #[error("resolver initialization failed: {source}")]
    ResolverInit {
        #[source]
        source: std::io::Error,
    },
    #[error("MX lookup failed for {domain}: {source}")]
    Lookup {
        domain: String,
        #[source]
        source: trust_dns_resolver::error::ResolveError,
    },
}

impl MxError {
    pub(crate) fn resolver_init(source: std::io::Error) -> Self {
        Self::ResolverInit { source }
    }

    pub(crate) fn lookup(
        domain: impl Into<String>,
        source: trust_dns_resolver::error::ResolveError,
    ) -> Self {
        Self::Lookup {
            domain: domain.into(),
            source,
        }
    }
}

/// Rejections of a bulk query, raised before any DNS traffic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BulkError {
    #[error("no domains provided")]
    NoDomains,
    #[error("too many domains: maximum {max} domains allowed")]
    TooManyDomains { max: usize, requested: usize },
}

impl BulkError {
    pub(crate) fn too_many(requested: usize) -> Self {
        Self::TooManyDomains {
            max: MAX_BULK_DOMAINS,
            requested,
        }
    }
}
