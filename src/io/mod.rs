use anyhow::Result;
use async_trait::async_trait;

pub mod upstream;

pub use upstream::HttpChangelogSource;

// a changelog source hands back the raw upstream document as one string,
// swappable so tests never touch the network
#[async_trait]
pub trait ChangelogSource: Send + Sync {
    async fn fetch(&self) -> Result<String>;
}
