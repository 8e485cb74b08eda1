use crate::io::ChangelogSource;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;

/// Fetches the changelog page over HTTP. No timeout and no retry: a failed
/// request surfaces directly to the caller.
pub struct HttpChangelogSource {
    pub client: Client,
    pub url: String,
}

impl HttpChangelogSource {
    pub fn new(url: String) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }
}

#[async_trait]
impl ChangelogSource for HttpChangelogSource {
    async fn fetch(&self) -> Result<String> {
        let res = self.client.get(&self.url).send().await;

        match res {
            Ok(response) if response.status().is_success() => Ok(response.text().await?),
            Ok(response) => {
                anyhow::bail!("Upstream returned status {}", response.status());
            }
            Err(e) => {
                anyhow::bail!("Failed to reach upstream changelog: {}", e);
            }
        }
    }
}
