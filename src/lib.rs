#![forbid(unsafe_code)]
//! mxlookup — MX record lookup with mail-exchanger addresses, as a library
//! and as an HTTP service.

pub mod config;
pub mod mx;
pub mod server;

pub use config::ServerConfig;
pub use mx::{
    BulkError, BulkResult, Error as MxError, LookupMx, MAX_BULK_DOMAINS, MailExchanger, MxRecord,
    check_mx, resolve_bulk, resolve_mx, system_resolver,
};
pub use server::{create_router, serve};
