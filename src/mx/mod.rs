//! DNS MX resolution with address enrichment.
//!
//! [`resolve_mx`] looks up the mail exchangers of one domain through any
//! [`LookupMx`] implementation and attaches the addresses of each exchange
//! host. [`resolve_bulk`] applies it to a bounded list of domains.
//! [`check_mx`] is the shortcut that uses the system resolver.

mod bulk;
mod error;
mod resolver;
mod types;

/// Largest number of domains accepted by [`resolve_bulk`].
pub const MAX_BULK_DOMAINS: usize = 50;

pub use bulk::resolve_bulk;
pub use error::{BulkError, MxError as Error};
pub use resolver::{LookupMx, check_mx, resolve_mx, system_resolver};
pub use types::{BulkResult, MailExchanger, MxRecord};
