//! Repository info, languages and the merged metadata record.

use rmc_core::metadata::{STRUCTURE_UNAVAILABLE, UNLICENSED};
use rmc_core::{RepoIdentifier, RepositoryMetadata};
use serde::Deserialize;
use serde_json::Value;

use crate::{GitHubClient, GitHubError, JsonFetch};

/// Subset of `GET /repos/{owner}/{repo}` used for the README.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepoInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub full_name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub html_url: String,
    pub license: Option<LicenseInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LicenseInfo {
    pub spdx_id: Option<String>,
}

impl RepoInfo {
    /// SPDX identifier, or `"unlicensed"` when GitHub reports none.
    #[must_use]
    pub fn license_id(&self) -> String {
        self.license
            .as_ref()
            .and_then(|l| l.spdx_id.clone())
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| UNLICENSED.to_string())
    }
}

impl<F: JsonFetch> GitHubClient<F> {
    /// Fetch repository info.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError`] if the request fails or the body is malformed.
    pub async fn fetch_repo_info(&self, id: &RepoIdentifier) -> Result<RepoInfo, GitHubError> {
        let value = self.fetch.fetch_json(&self.repo_url(id, "")).await?;
        serde_json::from_value(value).map_err(|e| GitHubError::Parse(e.to_string()))
    }

    /// Fetch language names in response order. Byte counts are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError`] if the request fails or the body is not an
    /// object.
    pub async fn fetch_languages(&self, id: &RepoIdentifier) -> Result<Vec<String>, GitHubError> {
        match self.fetch.fetch_json(&self.repo_url(id, "/languages")).await? {
            Value::Object(map) => Ok(map.into_iter().map(|(language, _)| language).collect()),
            other => Err(GitHubError::Parse(format!(
                "languages response is not an object: {other}"
            ))),
        }
    }

    /// Fetch and merge everything the README needs.
    ///
    /// The three lookups run concurrently. Repository info and languages are
    /// required, and the first of them to fail cancels the tree walk; a failed
    /// tree walk degrades to a single placeholder line.
    ///
    /// # Errors
    ///
    /// Returns the first repository info or languages error.
    pub async fn fetch_repo_data(
        &self,
        id: &RepoIdentifier,
    ) -> Result<RepositoryMetadata, GitHubError> {
        let (info, languages, tree) = tokio::try_join!(
            self.fetch_repo_info(id),
            self.fetch_languages(id),
            async { Ok::<_, GitHubError>(self.walk_tree(id).await) },
        )?;

        let structure = match tree {
            Ok(listing) => listing.into_structure(),
            Err(error) => {
                tracing::warn!(%id, %error, "failed to get project structure");
                vec![STRUCTURE_UNAVAILABLE.to_string()]
            }
        };

        let license = info.license_id();
        Ok(RepositoryMetadata {
            owner: id.owner.clone(),
            repo: id.repo.clone(),
            name: info.name,
            full_name: info.full_name,
            description: info.description,
            repo_url: info.html_url,
            license,
            languages,
            structure,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::FixtureFetcher;
    use pretty_assertions::assert_eq;
    use rmc_config::WalkConfig;
    use serde_json::json;

    const BASE: &str = "https://api.test";
    const REPO: &str = "https://api.test/repos/octo/demo";

    fn id() -> RepoIdentifier {
        RepoIdentifier {
            owner: "octo".into(),
            repo: "demo".into(),
        }
    }

    fn repo_body(license: Value) -> Value {
        json!({
            "name": "demo",
            "full_name": "octo/demo",
            "description": "A demo",
            "html_url": "https://github.com/octo/demo",
            "license": license,
            "stargazers_count": 3
        })
    }

    fn full_fixture(license: Value) -> FixtureFetcher {
        FixtureFetcher::new()
            .with_json(REPO, repo_body(license))
            .with_json(
                format!("{REPO}/languages"),
                json!({ "TypeScript": 9000, "JavaScript": 120, "CSS": 40 }),
            )
            .with_json(
                format!("{REPO}/contents/"),
                json!([{ "name": "index.js", "path": "index.js", "type": "file" }]),
            )
    }

    fn client(fetcher: FixtureFetcher) -> GitHubClient<FixtureFetcher> {
        GitHubClient::with_fetcher(fetcher, BASE, WalkConfig::default())
    }

    #[tokio::test]
    async fn merges_all_three_lookups() {
        let meta = client(full_fixture(json!({ "key": "mit", "spdx_id": "MIT" })))
            .fetch_repo_data(&id())
            .await
            .unwrap();

        assert_eq!(
            meta,
            RepositoryMetadata {
                owner: "octo".into(),
                repo: "demo".into(),
                name: "demo".into(),
                full_name: "octo/demo".into(),
                description: Some("A demo".into()),
                repo_url: "https://github.com/octo/demo".into(),
                license: "MIT".into(),
                languages: vec!["TypeScript".into(), "JavaScript".into(), "CSS".into()],
                structure: vec!["└── 📄 index.js".into()],
            }
        );
    }

    #[tokio::test]
    async fn missing_license_is_unlicensed() {
        let meta = client(full_fixture(Value::Null))
            .fetch_repo_data(&id())
            .await
            .unwrap();
        assert_eq!(meta.license, "unlicensed");
    }

    #[tokio::test]
    async fn license_without_spdx_is_unlicensed() {
        let meta = client(full_fixture(json!({ "key": "other", "spdx_id": null })))
            .fetch_repo_data(&id())
            .await
            .unwrap();
        assert_eq!(meta.license, UNLICENSED);
    }

    #[tokio::test]
    async fn tree_failure_degrades_to_placeholder() {
        let fetcher = full_fixture(Value::Null).with_status(
            format!("{REPO}/contents/"),
            403,
            "Resource not accessible",
        );
        let meta = client(fetcher).fetch_repo_data(&id()).await.unwrap();

        assert_eq!(meta.structure, vec![STRUCTURE_UNAVAILABLE.to_string()]);
        assert_eq!(meta.name, "demo");
        assert_eq!(meta.languages.len(), 3);
    }

    #[tokio::test]
    async fn repo_info_failure_is_fatal() {
        let fetcher = full_fixture(Value::Null).with_status(REPO, 404, "Not Found");
        let err = client(fetcher).fetch_repo_data(&id()).await.unwrap_err();
        assert!(matches!(err, GitHubError::Api { status: 404, .. }));
    }

    #[tokio::test]
    async fn repo_info_failure_stops_the_tree_walk() {
        let mut fetcher = FixtureFetcher::new()
            .with_status(REPO, 404, "Not Found")
            .with_json(format!("{REPO}/languages"), json!({ "Rust": 1 }));
        let mut path = String::new();
        for depth in 0..20 {
            let name = format!("d{depth}");
            fetcher = fetcher.with_json(
                format!("{REPO}/contents/{path}"),
                json!([{ "name": name, "path": name, "type": "dir" }]),
            );
            path = format!("{path}{name}/");
        }
        let client = GitHubClient::with_fetcher(fetcher, BASE, WalkConfig::unbounded());

        let err = client.fetch_repo_data(&id()).await.unwrap_err();

        assert!(matches!(err, GitHubError::Api { status: 404, .. }));
        let calls = client.fetcher().calls();
        assert!(calls.len() <= 3, "unexpected requests: {calls:?}");
        assert!(!calls.iter().any(|url| url.contains("/contents/d0/")));
    }

    #[tokio::test]
    async fn languages_failure_is_fatal() {
        let fetcher =
            full_fixture(Value::Null).with_status(format!("{REPO}/languages"), 500, "boom");
        let err = client(fetcher).fetch_repo_data(&id()).await.unwrap_err();
        assert!(matches!(err, GitHubError::Api { status: 500, .. }));
    }

    #[tokio::test]
    async fn languages_must_be_an_object() {
        let fetcher = FixtureFetcher::new().with_json(format!("{REPO}/languages"), json!([]));
        let err = client(fetcher).fetch_languages(&id()).await.unwrap_err();
        assert!(matches!(err, GitHubError::Parse(_)));
    }
}
