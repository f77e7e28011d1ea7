use color_eyre::eyre::{Result, WrapErr, eyre};
use fuels::types::ContractId;
use serde::Deserialize;
use std::time::Duration;

pub const IPFS_GATEWAY: &str = "https://ipfs.io/ipfs/";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Identifies the raffle card a metadata document belongs to, so results
/// can be applied in a stable order regardless of arrival order.
pub type MetadataKey = (ContractId, u64);

#[derive(Clone)]
pub struct TokenMetadataClient {
    http: reqwest::Client,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMetadata {
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MetadataDocument {
    image: Option<String>,
}

impl TokenMetadataClient {
    pub fn new() -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .wrap_err("Failed to build metadata HTTP client")?;
        Ok(Self { http })
    }

    /// Fetches `<token_uri>.json` and extracts the image pointer.
    pub async fn fetch(&self, token_uri: &str) -> Result<TokenMetadata> {
        let url = format!("{token_uri}.json");
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .wrap_err_with(|| format!("Metadata request failed for {url}"))?;
        if !response.status().is_success() {
            return Err(eyre!(
                "Metadata request for {url} returned {}",
                response.status()
            ));
        }
        let doc = response
            .json::<MetadataDocument>()
            .await
            .wrap_err_with(|| format!("Metadata document at {url} was not valid JSON"))?;
        Ok(TokenMetadata {
            image_url: doc.image.map(|raw| rewrite_ipfs_uri(&raw)),
        })
    }

    /// Fans out one fetch per entry and joins them all; each result keeps
    /// its key so callers can apply documents by raffle rather than by
    /// arrival order.
    pub async fn fetch_all(
        &self,
        entries: Vec<(MetadataKey, String)>,
    ) -> Vec<(MetadataKey, Result<TokenMetadata>)> {
        let fetches = entries.into_iter().map(|(key, uri)| async move {
            let result = self.fetch(&uri).await;
            (key, result)
        });
        futures::future::join_all(fetches).await
    }
}

/// `ipfs://X` becomes a public gateway URL; everything else is untouched.
pub fn rewrite_ipfs_uri(uri: &str) -> String {
    match uri.strip_prefix("ipfs://") {
        Some(rest) => format!("{IPFS_GATEWAY}{rest}"),
        None => uri.to_string(),
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]
    use super::*;

    #[test]
    fn rewrite_ipfs_uri__maps_ipfs_scheme_to_gateway() {
        // given
        let uri = "ipfs://QmYx3hZ";

        // when
        let rewritten = rewrite_ipfs_uri(uri);

        // then
        assert_eq!(rewritten, "https://ipfs.io/ipfs/QmYx3hZ");
    }

    #[test]
    fn rewrite_ipfs_uri__passes_other_schemes_through() {
        // given
        let uri = "https://example.com/meta/7";

        // when
        let rewritten = rewrite_ipfs_uri(uri);

        // then
        assert_eq!(rewritten, uri);
    }
}
