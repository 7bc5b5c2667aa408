//! Search client: one GET per search, no timeout, no retry.

use prodsearch_core::errors::ErrorMap;
use prodsearch_core::filters::FilterOptions;
use prodsearch_core::product::Product;
use prodsearch_core::query::SearchParams;
use prodsearch_core::session::SearchOutcome;
use prodsearch_core::ClientConfig;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::error::ClientError;

#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    search_url: String,
    lists_url: String,
}

impl SearchClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(http: reqwest::Client, config: &ClientConfig) -> Self {
        Self {
            http,
            search_url: config.search_url(),
            lists_url: config.lists_url(),
        }
    }

    /// Full request URL for `params`, as it would be sent.
    pub fn request_url(&self, params: &SearchParams) -> String {
        format!("{}?{}", self.search_url, params.to_query_string())
    }

    /// Run a search.
    ///
    /// A success status yields [`SearchOutcome::Found`], any other status with a
    /// field-keyed JSON object carrying at least one message yields
    /// [`SearchOutcome::Rejected`]. Everything else (transport failure,
    /// undecodable body, error object with nothing to show) is a [`ClientError`].
    pub async fn search(&self, params: &SearchParams) -> Result<SearchOutcome, ClientError> {
        debug!(url = %self.request_url(params), "searching");
        let response = self.http.get(&self.search_url).query(params.pairs()).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if status.is_success() {
            let products: Vec<Product> = decode(&self.search_url, &body)?;
            return Ok(SearchOutcome::Found(products));
        }

        let value: serde_json::Value = decode(&self.search_url, &body)?;
        match ErrorMap::from_json(value) {
            Some(errors) if errors.has_messages() => Ok(SearchOutcome::Rejected(errors)),
            _ => Err(ClientError::UnexpectedBody {
                status: status.as_u16(),
            }),
        }
    }

    /// [`SearchClient::search`] with client errors folded into the generic
    /// `general` error.
    pub async fn search_outcome(&self, params: &SearchParams) -> SearchOutcome {
        match self.search(params).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("search failed: {e}");
                SearchOutcome::Rejected(e.into_error_map())
            }
        }
    }

    /// Selectable filter values from the lists endpoint.
    pub async fn filter_options(&self) -> Result<FilterOptions, ClientError> {
        debug!(url = %self.lists_url, "fetching filter options");
        let response = self.http.get(&self.lists_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::UnexpectedBody {
                status: status.as_u16(),
            });
        }
        let body = response.bytes().await?;
        decode(&self.lists_url, &body)
    }
}

fn decode<T: DeserializeOwned>(url: &str, body: &[u8]) -> Result<T, ClientError> {
    serde_json::from_slice(body).map_err(|source| ClientError::Decode {
        url: url.to_string(),
        source,
    })
}
