use std::net::IpAddr;

use async_trait::async_trait;
use futures::future::join_all;
use trust_dns_resolver::{
    TokioAsyncResolver,
    config::{LookupIpStrategy, ResolverOpts},
    error::{ResolveError, ResolveErrorKind},
    proto::op::ResponseCode,
    system_conf,
};

use super::{Error, MailExchanger, MxRecord};

/// Lookup MX records for `domain` with the system resolver and attach the
/// addresses of every exchange host.
///
/// See [`resolve_mx`] for the shaping rules.
pub async fn check_mx(domain: &str) -> Result<Vec<MailExchanger>, Error> {
    let resolver = system_resolver()?;
    resolve_mx(&resolver, domain).await
}

/// Builds a resolver from the host's DNS configuration that answers address
/// queries with A and AAAA records combined and never serves from a cache.
pub fn system_resolver() -> Result<TokioAsyncResolver, Error> {
    let (config, opts) = system_conf::read_system_conf().map_err(Error::resolver_init)?;
    Ok(TokioAsyncResolver::tokio(config, lookup_opts(opts)))
}

pub(crate) fn lookup_opts(mut opts: ResolverOpts) -> ResolverOpts {
    opts.ip_strategy = LookupIpStrategy::Ipv4AndIpv6;
    // every call goes to DNS
    opts.cache_size = 0;
    opts
}

/// Resolves the mail exchangers of `domain`.
///
/// A failing MX query fails the whole call. Exchange hosts whose addresses
/// cannot be resolved are left out. The result is ordered by preference, then
/// host name, independently of the order the resolver answered in. An empty
/// domain is rejected without querying DNS.
pub async fn resolve_mx<R>(resolver: &R, domain: &str) -> Result<Vec<MailExchanger>, Error>
where
    R: LookupMx + ?Sized,
{
    if domain.trim().is_empty() {
        return Err(Error::EmptyDomain);
    }

    let records = resolver
        .lookup_mx(domain)
        .await
        .map_err(|err| Error::lookup(domain, err))?;

    let lookups = records.into_iter().map(|record| async move {
        let addresses = resolver.lookup_host(&record.exchange).await;
        (record, addresses)
    });

    let mut exchangers = Vec::new();
    for (record, addresses) in join_all(lookups).await {
        match addresses {
            Ok(addresses) => {
                let addresses = addresses.iter().map(IpAddr::to_string).collect();
                let host = normalize_exchange(record.exchange);
                exchangers.push(MailExchanger::new(host, record.preference, addresses));
            }
            Err(err) => {
                tracing::debug!(
                    domain,
                    host = %record.exchange,
                    error = %err,
                    "dropping mail exchanger without addresses"
                );
            }
        }
    }

    exchangers.sort_by(MailExchanger::priority_cmp);
    Ok(exchangers)
}

pub(crate) fn normalize_exchange(exchange: String) -> String {
    let trimmed = exchange.trim_end_matches('.');
    trimmed.to_ascii_lowercase()
}

/// DNS capability used by the MX resolver. Implemented for the trust-dns
/// async resolver; tests provide their own.
#[async_trait]
pub trait LookupMx: Send + Sync {
    /// MX records of `domain`, exchanges as returned by DNS (fully qualified).
    /// An answer without MX records is an empty list.
    async fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, ResolveError>;

    /// A and AAAA addresses of `host`, as one list.
    async fn lookup_host(&self, host: &str) -> Result<Vec<IpAddr>, ResolveError>;
}

#[async_trait]
impl LookupMx for TokioAsyncResolver {
    async fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, ResolveError> {
        let lookup = match TokioAsyncResolver::mx_lookup(self, domain).await {
            Ok(lookup) => lookup,
            Err(err) => {
                if should_treat_as_empty(&err) {
                    return Ok(Vec::new());
                }
                return Err(err);
            }
        };
        let mut records = Vec::new();
        for mx in lookup.iter() {
            records.push(MxRecord::new(mx.preference(), mx.exchange().to_utf8()));
        }
        Ok(records)
    }

    async fn lookup_host(&self, host: &str) -> Result<Vec<IpAddr>, ResolveError> {
        let lookup = TokioAsyncResolver::lookup_ip(self, host).await?;
        Ok(lookup.iter().collect())
    }
}

// NXDOMAIN stays an error; only NOERROR without MX data counts as "no records".
pub(crate) fn should_treat_as_empty(err: &ResolveError) -> bool {
    matches!(
        err.kind(),
        ResolveErrorKind::NoRecordsFound { response_code, .. }
            if *response_code == ResponseCode::NoError
    )
}
