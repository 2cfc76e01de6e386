use serde::{Deserialize, Serialize};

/// A single page discovered during a crawl.
///
/// Created empty the moment its URL is first observed and inserted into the
/// coordinator's visited set; mutated only by the worker that owns it,
/// between dispatch and publication of its result. Immutable after that.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Page {
    pub url: String,
    /// Document order, may contain duplicates — dedup across a page is an
    /// explicit non-feature.
    pub assets: Vec<Asset>,
    /// Document order, first occurrence wins; every entry shares the seed's
    /// host.
    pub pages: Vec<String>,
}

impl Page {
    pub fn empty(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            assets: Vec::new(),
            pages: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Link,
    Image,
    Script,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Asset {
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub url: String,
}

/// The result of a completed crawl: an unordered collection of pages.
/// Serialization order is unspecified — tests must compare as sets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sitemap {
    pub pages: Vec<Page>,
}
