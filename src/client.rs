use reqwest::header;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::Error;
use crate::sceau::compute_sceau;
use crate::types::{Params, ProduitsResponse, RawResponse, params};

/// Client for the vendor's form-encoded HTTP API.
///
/// Holds the resolved configuration and a reusable HTTP client. Calls are
/// independent and nothing is mutated between them, so one instance can be
/// shared across tasks.
pub struct ProduitsClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl ProduitsClient {
    /// Build a client from the environment (`API_KEY`, `BASE_URL`,
    /// `VERSION`, `USER_API`).
    pub fn new() -> Result<Self, Error> {
        Ok(Self::with_config(ClientConfig::resolve(None, None, None)?))
    }

    /// Build a client from an explicit configuration. No environment access.
    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Compute the `SCEAU` for `params` with the configured API key.
    pub fn compute_sceau(&self, params: &Params, order: &[&str]) -> String {
        compute_sceau(&self.config.api_key, params, order)
    }

    /// Sign and submit a request.
    ///
    /// Appends the computed `SCEAU` to `params`, form-urlencodes the full
    /// list as the POST body, and sends it to the configured endpoint.
    /// Single attempt: transport failures propagate, non-2xx statuses do
    /// not — the status travels with the returned response.
    pub async fn send_request(
        &self,
        params: &mut Params,
        order: &[&str],
    ) -> Result<RawResponse, Error> {
        let sceau = self.compute_sceau(params, order);
        params.push((params::SCEAU.to_string(), sceau));

        let encoded = serde_urlencoded::to_string(&*params)?;
        debug!(body = %encoded, "submitting signed request");

        let response = self
            .http
            .post(&self.config.base_url)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(encoded)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        Ok(RawResponse { status, body })
    }

    /// Fetch the product catalogue for `date` and decode the response.
    ///
    /// `date_livraison` is optional; pass `""` to omit it. The omitted slot
    /// still takes part in the signature as an empty string. The body is
    /// decoded whatever the HTTP status; use [`Self::get_produits_raw`]
    /// when the status matters.
    pub async fn get_produits(
        &self,
        date: &str,
        adresse_mail: &str,
        date_livraison: &str,
    ) -> Result<ProduitsResponse, Error> {
        let response = self
            .get_produits_raw(date, adresse_mail, date_livraison)
            .await?;
        ProduitsResponse::from_form_body(&response.body)
    }

    /// Same request as [`Self::get_produits`], returning the raw response.
    pub async fn get_produits_raw(
        &self,
        date: &str,
        adresse_mail: &str,
        date_livraison: &str,
    ) -> Result<RawResponse, Error> {
        let mut params = self.build_produits_params(date, adresse_mail, date_livraison);
        self.send_request(&mut params, &params::GET_PRODUITS_ORDER)
            .await
    }

    /// Request parameters for `GET_PRODUITS`, in wire order.
    /// `DATE_LIVRAISON` only enters the body when non-empty.
    fn build_produits_params(
        &self,
        date: &str,
        adresse_mail: &str,
        date_livraison: &str,
    ) -> Params {
        let mut request = vec![
            (params::VERSION.to_string(), self.config.version.clone()),
            (params::USER_API.to_string(), self.config.user_api.clone()),
            (params::DATE.to_string(), date.to_string()),
            (
                params::ACTION.to_string(),
                params::ACTION_GET_PRODUITS.to_string(),
            ),
            (params::ADRESSE_MAIL.to_string(), adresse_mail.to_string()),
        ];
        if !date_livraison.is_empty() {
            request.push((params::DATE_LIVRAISON.to_string(), date_livraison.to_string()));
        }
        request
    }
}
