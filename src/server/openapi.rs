//! OpenAPI documentation

use utoipa::OpenApi;
use utoipa::openapi::server::Server;

use super::error::ErrorResponse;
use super::handlers;
use super::types::{BulkRequest, BulkResponse};
use crate::mx::MailExchanger;

#[derive(OpenApi)]
#[openapi(
    paths(handlers::get_mx, handlers::get_mx_bulk),
    components(schemas(MailExchanger, BulkRequest, BulkResponse, ErrorResponse)),
    tags((name = "mx", description = "MX record lookup")),
    info(
        title = "MX lookup",
        description = "Resolve the mail exchangers of one or many domains."
    )
)]
pub struct ApiDoc;

/// Builds the document, announcing `base_path` as the server URL when routes
/// are mounted under a prefix.
pub fn document(base_path: Option<&str>) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    if let Some(prefix) = base_path {
        doc.servers = Some(vec![Server::new(prefix)]);
    }
    doc
}
