//! HMAC-SHA1 request signing.
//!
//! The upstream API authenticates each request with a "sceau": the values of
//! an ordered subset of the request parameters, joined with `*` and keyed
//! with the account's API key.

use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::types::Params;

type HmacSha1 = Hmac<Sha1>;

/// Compute the `SCEAU` value for a request.
///
/// Names in `order` that are absent from `params` contribute an empty
/// string, so an optional parameter can stay out of the request body while
/// keeping its slot in the signature input. Values are joined with a literal
/// `*` and are not escaped; the upstream verifier joins the same way, so a
/// value containing `*` can alias two different parameter lists to the same
/// input string.
pub fn compute_sceau(api_key: &str, params: &Params, order: &[&str]) -> String {
    let message = order
        .iter()
        .map(|name| param_value(params, name))
        .collect::<Vec<_>>()
        .join("*");

    let mut mac =
        HmacSha1::new_from_slice(api_key.as_bytes()).expect("HMAC can take key of any size");
    mac.update(message.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// First value for `name`, or the empty string when the parameter is absent.
fn param_value<'a>(params: &'a Params, name: &str) -> &'a str {
    params
        .iter()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.as_str())
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::params::GET_PRODUITS_ORDER;

    fn pair(name: &str, value: &str) -> (String, String) {
        (name.to_string(), value.to_string())
    }

    #[test]
    fn known_vector() {
        // HMAC_SHA1("k", "1*2*31/03/2025*GET_PRODUITS**abc@example.com")
        let params = vec![
            pair("VERSION", "1"),
            pair("USER_API", "2"),
            pair("DATE", "31/03/2025"),
            pair("ACTION", "GET_PRODUITS"),
            pair("ADRESSE_MAIL", "abc@example.com"),
        ];
        let sceau = compute_sceau("k", &params, &GET_PRODUITS_ORDER);
        assert_eq!(sceau, "66a9ce71ce1d3b941f10dfd8d53a90851af00fae");
    }

    #[test]
    fn hmac_sha1_sanity() {
        let params = vec![pair("MSG", "The quick brown fox jumps over the lazy dog")];
        let sceau = compute_sceau("key", &params, &["MSG"]);
        assert_eq!(sceau, "de7c9b85b8b78aa6bc8a7a36f70a90701c9db4d9");
    }

    #[test]
    fn deterministic() {
        let params = vec![pair("A", "1"), pair("B", "2"), pair("C", "3")];
        let first = compute_sceau("secret", &params, &["A", "B", "C"]);
        let second = compute_sceau("secret", &params, &["A", "B", "C"]);
        assert_eq!(first, second);
    }

    #[test]
    fn order_changes_digest() {
        let params = vec![pair("A", "1"), pair("B", "2")];
        let forward = compute_sceau("secret", &params, &["A", "B"]);
        let reversed = compute_sceau("secret", &params, &["B", "A"]);
        assert_ne!(forward, reversed);
    }

    #[test]
    fn value_changes_digest() {
        let base = vec![pair("A", "1"), pair("B", "2")];
        let changed = vec![pair("A", "1"), pair("B", "x")];
        assert_ne!(
            compute_sceau("secret", &base, &["A", "B"]),
            compute_sceau("secret", &changed, &["A", "B"]),
        );
    }

    #[test]
    fn absent_parameter_signs_as_empty_string() {
        let without = vec![pair("A", "1"), pair("C", "3")];
        let with_blank = vec![pair("A", "1"), pair("B", ""), pair("C", "3")];
        assert_eq!(
            compute_sceau("secret", &without, &["A", "B", "C"]),
            compute_sceau("secret", &with_blank, &["A", "B", "C"]),
        );
    }

    #[test]
    fn star_in_value_aliases_distinct_param_lists() {
        // "x*y" + "z" and "x" + "y*z" both join to "x*y*z". The upstream
        // verifier has the same ambiguity, so the digests must match.
        let left = vec![pair("A", "x*y"), pair("B", "z")];
        let right = vec![pair("A", "x"), pair("B", "y*z")];
        assert_eq!(
            compute_sceau("secret", &left, &["A", "B"]),
            compute_sceau("secret", &right, &["A", "B"]),
        );
    }
}
