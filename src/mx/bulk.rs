use futures::future::join_all;

use super::{BulkError, BulkResult, LookupMx, MAX_BULK_DOMAINS, resolve_mx};

/// Resolves every domain of `domains` and maps each one that succeeded to its
/// mail exchangers.
///
/// The list must hold between 1 and [`MAX_BULK_DOMAINS`] entries; otherwise no
/// query is sent. Domains whose MX lookup fails are omitted from the map. A
/// domain listed twice keeps a single entry.
pub async fn resolve_bulk<R, S>(resolver: &R, domains: &[S]) -> Result<BulkResult, BulkError>
where
    R: LookupMx + ?Sized,
    S: AsRef<str>,
{
    validate(domains)?;

    let lookups = domains.iter().map(|domain| async move {
        let domain = domain.as_ref();
        (domain, resolve_mx(resolver, domain).await)
    });

    let mut result = BulkResult::new();
    for (domain, outcome) in join_all(lookups).await {
        match outcome {
            Ok(exchangers) => {
                result.insert(domain.to_string(), exchangers);
            }
            Err(err) => {
                tracing::debug!(domain, error = %err, "omitting domain from bulk result");
            }
        }
    }
    Ok(result)
}

pub(crate) fn validate<S>(domains: &[S]) -> Result<(), BulkError> {
    if domains.is_empty() {
        return Err(BulkError::NoDomains);
    }
    if domains.len() > MAX_BULK_DOMAINS {
        return Err(BulkError::too_many(domains.len()));
    }
    Ok(())
}
