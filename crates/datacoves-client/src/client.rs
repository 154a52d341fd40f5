//! API client for Datacoves — fetches the latest manifest for a given dbt
//! project.

use serde_json::Value;

use crate::config::ReferenceConfig;
use crate::events::{EmitNote, TracingNotes};

// ── Client ────────────────────────────────────────────────────────────────────

/// Datacoves dbt API client.
///
/// All fields are read-only after construction, so an instance can be shared
/// across tasks as long as the note sink `N` is `Sync`. Every call to
/// [`Datacoves::get_models`] re-issues the request; nothing is cached.
pub struct Datacoves<N: EmitNote = TracingNotes> {
    project_name: String,
    api_endpoint: String,
    /// Two entries: `Authorization: Bearer <token>` and `Content-Type`.
    auth_headers: [(&'static str, String); 2],
    http: reqwest::Client,
    notes: N,
}

impl Datacoves<TracingNotes> {
    /// Create a client that emits notes through the global tracing subscriber.
    ///
    /// No I/O; builds the header pairs synchronously. The token is not
    /// validated; whatever is passed (including the [`UNSET`](crate::UNSET)
    /// sentinel) goes out as `Bearer <token>`.
    pub fn new(
        project_name: impl Into<String>,
        api_token: impl Into<String>,
        api_endpoint: impl Into<String>,
    ) -> Self {
        Self::with_notes(project_name, api_token, api_endpoint, TracingNotes)
    }

    pub fn from_config(config: &ReferenceConfig) -> Self {
        Self::new(
            config.project_name.clone(),
            config.api_token.clone(),
            config.api_endpoint.clone(),
        )
    }
}

impl<N: EmitNote> Datacoves<N> {
    /// Create a client with an explicit note sink.
    pub fn with_notes(
        project_name: impl Into<String>,
        api_token: impl Into<String>,
        api_endpoint: impl Into<String>,
        notes: N,
    ) -> Self {
        let auth_headers = [
            ("Authorization", format!("Bearer {}", api_token.into())),
            ("Content-Type", "application/json".to_string()),
        ];
        Self {
            project_name: project_name.into(),
            api_endpoint: api_endpoint.into(),
            auth_headers,
            http: reqwest::Client::new(),
            notes,
        }
    }

    fn manifest_path(&self) -> String {
        format!("projects/{}/latest-manifest?trimmed=true", self.project_name)
    }

    /// Query the Datacoves dbt API.
    ///
    /// The response status is not inspected: any body that decodes as JSON
    /// is returned, error pages included. Transport and decode failures
    /// surface as the raw [`reqwest::Error`].
    async fn query(&self, path: &str) -> Result<Value, reqwest::Error> {
        let uri = format!("{}/{}", self.api_endpoint, path);
        self.notes.note(&format!("Querying datacoves API at {uri}"));

        let mut request = self.http.get(&uri);
        for (name, value) in &self.auth_headers {
            request = request.header(*name, value.as_str());
        }

        request.send().await?.json().await
    }

    /// Get the latest manifest json for the configured project.
    async fn get_manifest(&self) -> Result<Value, reqwest::Error> {
        self.query(&self.manifest_path()).await
    }

    /// Get the latest state of all models.
    pub async fn get_models(&self) -> Result<Value, reqwest::Error> {
        self.get_manifest().await
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
