use std::env;
use std::fmt;

use crate::error::Error;

/// Resolved client configuration.
///
/// All four values are required and immutable for the lifetime of the
/// client. Environment reading happens here and nowhere else; the client
/// itself only ever sees a fully resolved `ClientConfig`.
#[derive(Clone)]
pub struct ClientConfig {
    /// Secret key for the HMAC signature.
    pub api_key: String,
    /// Endpoint URL the signed POST is sent to.
    pub base_url: String,
    /// `VERSION` wire parameter.
    pub version: String,
    /// `USER_API` wire parameter.
    pub user_api: String,
}

impl ClientConfig {
    /// Build a configuration from explicit values. No environment access.
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        version: impl Into<String>,
        user_api: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            version: version.into(),
            user_api: user_api.into(),
        }
    }

    /// Read all four values from the environment: `API_KEY`, `BASE_URL`,
    /// `VERSION`, `USER_API`. A missing variable fails with
    /// [`Error::MissingConfig`]; nothing is defaulted.
    pub fn from_env() -> Result<Self, Error> {
        Ok(Self {
            api_key: require("API_KEY")?,
            base_url: require("BASE_URL")?,
            version: require("VERSION")?,
            user_api: require("USER_API")?,
        })
    }

    /// Resolve configuration the way the upstream reference client does:
    /// each argument falls back to its environment variable when `None`.
    ///
    /// Quirk kept for upstream compatibility: an explicit `version` is also
    /// used as `user_api`, and the `USER_API` variable is only consulted
    /// when `version` is `None`. Use [`ClientConfig::new`] to set a
    /// distinct `user_api`.
    pub fn resolve(
        base_url: Option<&str>,
        version: Option<&str>,
        api_key: Option<&str>,
    ) -> Result<Self, Error> {
        let api_key = or_env(api_key, "API_KEY")?;
        let base_url = or_env(base_url, "BASE_URL")?;
        let user_api = match version {
            Some(v) => v.to_string(),
            None => require("USER_API")?,
        };
        let version = or_env(version, "VERSION")?;

        Ok(Self {
            api_key,
            base_url,
            version,
            user_api,
        })
    }
}

// Keep the secret out of logs and panic messages.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("version", &self.version)
            .field("user_api", &self.user_api)
            .finish()
    }
}

fn require(name: &'static str) -> Result<String, Error> {
    env::var(name).map_err(|_| Error::MissingConfig(name))
}

fn or_env(value: Option<&str>, name: &'static str) -> Result<String, Error> {
    match value {
        Some(v) => Ok(v.to_string()),
        None => require(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_explicit() {
        let config = ClientConfig::new("key", "https://api.example.test", "7", "usr");
        assert_eq!(config.api_key, "key");
        assert_eq!(config.base_url, "https://api.example.test");
        assert_eq!(config.version, "7");
        assert_eq!(config.user_api, "usr");
    }

    // All env-dependent cases live in one test: the process environment is
    // shared across test threads.
    #[test]
    fn resolve_env_fallback_and_version_quirk() {
        unsafe {
            env::set_var("API_KEY", "k");
            env::set_var("BASE_URL", "https://api.example.test/webservice.php");
            env::set_var("VERSION", "7");
            env::set_var("USER_API", "env-user");
        }

        let config = ClientConfig::resolve(None, None, None).unwrap();
        assert_eq!(config.api_key, "k");
        assert_eq!(config.version, "7");
        assert_eq!(config.user_api, "env-user");

        // An explicit version shadows USER_API entirely.
        let config = ClientConfig::resolve(None, Some("9"), None).unwrap();
        assert_eq!(config.version, "9");
        assert_eq!(config.user_api, "9");

        // Explicit arguments win over the environment.
        let config =
            ClientConfig::resolve(Some("https://other.example.test"), None, Some("k2")).unwrap();
        assert_eq!(config.base_url, "https://other.example.test");
        assert_eq!(config.api_key, "k2");

        // Missing BASE_URL with no argument fails before any network call.
        unsafe { env::remove_var("BASE_URL") };
        let err = ClientConfig::resolve(None, Some("9"), None).unwrap_err();
        assert!(matches!(err, Error::MissingConfig("BASE_URL")));

        let err = ClientConfig::from_env().unwrap_err();
        assert!(matches!(err, Error::MissingConfig("BASE_URL")));

        unsafe {
            env::remove_var("API_KEY");
            env::remove_var("VERSION");
            env::remove_var("USER_API");
        }
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = ClientConfig::new("s3cret", "https://api.example.test", "7", "7");
        let printed = format!("{:?}", config);
        assert!(!printed.contains("s3cret"));
        assert!(printed.contains("<redacted>"));
    }
}
