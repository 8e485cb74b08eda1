use crate::config::CHANGELOG_URL;
use crate::domain::{ContentKind, Entry, EntrySnapshot};
use crate::io::ChangelogSource;
use crate::parser::changelog::scan_entries;
use anyhow::{Context, Result};
use tokio::sync::RwLock;

/// Owns the upstream source and the cached extraction result.
///
/// The cache holds the last successful snapshot for the life of the process;
/// there is no expiry and no background refresh. Concurrent refreshes are
/// allowed to race, last write wins.
pub struct FeedService {
    source: Box<dyn ChangelogSource>,
    cache: RwLock<Option<EntrySnapshot>>,
}

impl FeedService {
    pub fn new(source: Box<dyn ChangelogSource>) -> Self {
        Self {
            source,
            cache: RwLock::new(None),
        }
    }

    /// Returns the entries for the requested content variant, fetching and
    /// extracting on the first request that finds the cache empty.
    pub async fn entries(&self, kind: ContentKind) -> Result<Vec<Entry>> {
        {
            let cache_guard = self.cache.read().await;
            if let Some(snapshot) = cache_guard.as_ref() {
                return Ok(pick_variant(snapshot, kind));
            }
        }

        println!("FeedService: loading entries");
        let snapshot = self.refresh().await?;

        Ok(pick_variant(&snapshot, kind))
    }

    /// Unconditionally re-fetches the changelog and replaces the cached
    /// snapshot, even when the new result holds fewer entries than before.
    pub async fn reload(&self) -> Result<()> {
        println!("FeedService: reloading entries");
        self.refresh().await?;

        Ok(())
    }

    async fn refresh(&self) -> Result<EntrySnapshot> {
        let document = self
            .source
            .fetch()
            .await
            .context("Failed to fetch upstream changelog")?;

        let snapshot = scan_entries(&document, CHANGELOG_URL);

        let mut cache_guard = self.cache.write().await;
        *cache_guard = Some(snapshot.clone());

        Ok(snapshot)
    }
}

fn pick_variant(snapshot: &EntrySnapshot, kind: ContentKind) -> Vec<Entry> {
    match kind {
        ContentKind::Html => snapshot.html.clone(),
        ContentKind::Plain => snapshot.plain.clone(),
    }
}
