//! Request, response and state types of the HTTP service.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use utoipa::openapi::OpenApi;
use utoipa::{IntoParams, ToSchema};

use crate::mx::{BulkResult, LookupMx, MailExchanger};

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<dyn LookupMx>,
    pub openapi: Arc<OpenApi>,
}

impl AppState {
    pub fn resolver(&self) -> &dyn LookupMx {
        self.resolver.as_ref()
    }
}

/// Query string of `GET /mx`
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MxQuery {
    /// The domain name to look at
    pub domain: String,
}

/// Body of `POST /mx/bulk`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BulkRequest {
    /// Up to 50 domain names
    #[schema(example = json!(["example.com", "example.org"]))]
    pub domains: Vec<String>,
}

/// Mail exchangers keyed by domain; domains whose lookup failed are absent
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct BulkResponse(pub BTreeMap<String, Vec<MailExchanger>>);

impl From<BulkResult> for BulkResponse {
    fn from(result: BulkResult) -> Self {
        Self(result)
    }
}
