use crate::env::ReadEnv;

/// Sentinel token value when neither token variable is set.
///
/// Still sent as a literal bearer credential; rejecting it is the server's
/// job, not this crate's.
pub const UNSET: &str = "unset";

/// In-cluster service URL used when `DATACOVES__DBT_API_ENDPOINT` is unset.
pub const DEFAULT_API_ENDPOINT: &str =
    "http://core-dbt-api-svc.core.svc.cluster.local:80/api/internal";

/// Configuration for a Datacoves reference.
///
/// Immutable after construction; resolve once at startup and pass to
/// [`Datacoves::from_config`](crate::Datacoves::from_config).
#[derive(Debug, Clone)]
pub struct ReferenceConfig {
    /// Project whose manifest to fetch.
    pub project_name: String,
    /// Bearer token. Env: `DATACOVES__DBT_API_TOKEN`, falling back to
    /// `DATACOVES__SECRETS_TOKEN`, then the [`UNSET`] sentinel.
    pub api_token: String,
    /// API base URL. Env: `DATACOVES__DBT_API_ENDPOINT`.
    /// Default: [`DEFAULT_API_ENDPOINT`].
    pub api_endpoint: String,
}

impl ReferenceConfig {
    pub fn new(
        project_name: impl Into<String>,
        api_token: impl Into<String>,
        api_endpoint: impl Into<String>,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            api_token: api_token.into(),
            api_endpoint: api_endpoint.into(),
        }
    }

    /// Resolve token and endpoint from environment variables.
    pub fn from_env<E: ReadEnv>(env: &E, project_name: impl Into<String>) -> Self {
        let api_token = env
            .var("DATACOVES__DBT_API_TOKEN")
            .or_else(|_| env.var("DATACOVES__SECRETS_TOKEN"))
            .unwrap_or_else(|_| UNSET.to_string());

        if api_token == UNSET {
            tracing::warn!(
                "no Datacoves API token found in DATACOVES__DBT_API_TOKEN or \
                 DATACOVES__SECRETS_TOKEN; requests will carry the '{UNSET}' sentinel"
            );
        }

        let api_endpoint = env
            .var("DATACOVES__DBT_API_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_API_ENDPOINT.to_string());

        Self {
            project_name: project_name.into(),
            api_token,
            api_endpoint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::InMemoryEnv;

    #[test]
    fn token_prefers_dbt_api_token() {
        let env = InMemoryEnv::new();
        env.set("DATACOVES__DBT_API_TOKEN", "primary");
        env.set("DATACOVES__SECRETS_TOKEN", "fallback");

        let config = ReferenceConfig::from_env(&env, "acme");

        assert_eq!(config.api_token, "primary");
    }

    #[test]
    fn token_falls_back_to_secrets_token() {
        let env = InMemoryEnv::new();
        env.set("DATACOVES__SECRETS_TOKEN", "sec");

        let config = ReferenceConfig::from_env(&env, "acme");

        assert_eq!(config.api_token, "sec");
    }

    #[test]
    fn token_defaults_to_unset_sentinel() {
        let env = InMemoryEnv::new();

        let config = ReferenceConfig::from_env(&env, "acme");

        assert_eq!(config.api_token, UNSET);
    }

    #[test]
    fn endpoint_defaults_to_cluster_url() {
        let env = InMemoryEnv::new();

        let config = ReferenceConfig::from_env(&env, "acme");

        assert_eq!(
            config.api_endpoint,
            "http://core-dbt-api-svc.core.svc.cluster.local:80/api/internal"
        );
    }

    #[test]
    fn endpoint_read_from_env() {
        let env = InMemoryEnv::new();
        env.set("DATACOVES__DBT_API_ENDPOINT", "http://localhost:9000/api");

        let config = ReferenceConfig::from_env(&env, "acme");

        assert_eq!(config.api_endpoint, "http://localhost:9000/api");
    }

    #[test]
    fn project_name_is_stored_verbatim() {
        let env = InMemoryEnv::new();

        let config = ReferenceConfig::from_env(&env, "jaffle_shop");

        assert_eq!(config.project_name, "jaffle_shop");
    }

    #[test]
    fn explicit_constructor_skips_env() {
        let config = ReferenceConfig::new("acme", "tok123", "http://host/api");

        assert_eq!(config.project_name, "acme");
        assert_eq!(config.api_token, "tok123");
        assert_eq!(config.api_endpoint, "http://host/api");
    }
}
