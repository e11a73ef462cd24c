use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Ordered request parameters.
///
/// Insertion order is the order pairs are form-encoded into the POST body.
/// Signature order is independent of it: a fixed name list per operation
/// (see [`params::GET_PRODUITS_ORDER`]). Lookups take the first occurrence
/// of a name.
pub type Params = Vec<(String, String)>;

/// Wire parameter names, action values, and signature orders.
pub mod params {
    pub const VERSION: &str = "VERSION";
    pub const USER_API: &str = "USER_API";
    pub const DATE: &str = "DATE";
    pub const ACTION: &str = "ACTION";
    pub const DATE_LIVRAISON: &str = "DATE_LIVRAISON";
    pub const ADRESSE_MAIL: &str = "ADRESSE_MAIL";
    pub const SCEAU: &str = "SCEAU";

    pub const CODE_RETOUR: &str = "CODE_RETOUR";
    pub const PRODUITS: &str = "PRODUITS";
    pub const FOURNISSEURS: &str = "FOURNISSEURS";

    /// `ACTION` value for the product catalogue request.
    pub const ACTION_GET_PRODUITS: &str = "GET_PRODUITS";

    /// Signature input order for `GET_PRODUITS`. `DATE_LIVRAISON` keeps its
    /// slot even when the request body omits it.
    pub const GET_PRODUITS_ORDER: [&str; 6] =
        [VERSION, USER_API, DATE, ACTION, DATE_LIVRAISON, ADRESSE_MAIL];
}

/// Raw outcome of a signed request: HTTP status and unparsed body.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: reqwest::StatusCode,
    pub body: String,
}

/// Decoded `GET_PRODUITS` response.
///
/// The body is form-encoded; `PRODUITS` and `FOURNISSEURS` carry JSON
/// encoded a second time as string values. Fields the upstream leaves out
/// decode to `None` rather than failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProduitsResponse {
    pub code_retour: Option<String>,
    pub produits: Option<serde_json::Value>,
    pub fournisseurs: Option<serde_json::Value>,
    pub sceau: Option<String>,
}

impl ProduitsResponse {
    /// Decode a form-encoded response body.
    ///
    /// Blank values decode like absent ones; the upstream sends nothing for
    /// empty fields. Malformed JSON inside `PRODUITS` or `FOURNISSEURS` is
    /// an [`Error::Decode`] naming the field.
    pub fn from_form_body(body: &str) -> Result<Self, Error> {
        let fields: Vec<(String, String)> = serde_urlencoded::from_str(body)?;

        let first = |name: &str| {
            fields
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.clone())
                .filter(|v| !v.is_empty())
        };

        Ok(Self {
            code_retour: first(params::CODE_RETOUR),
            produits: decode_embedded_json(params::PRODUITS, first(params::PRODUITS))?,
            fournisseurs: decode_embedded_json(params::FOURNISSEURS, first(params::FOURNISSEURS))?,
            sceau: first(params::SCEAU),
        })
    }
}

fn decode_embedded_json(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<serde_json::Value>, Error> {
    match value {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| Error::Decode { field, source }),
        None => Ok(None),
    }
}
