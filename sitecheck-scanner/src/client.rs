use crate::error::Result;
use crate::result::{HeadFetch, LinkCheck, PageFetch};
use futures::future::join_all;
use reqwest::Client;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tokio::sync::Semaphore;
use tracing::{debug, warn};

const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Shared HTTP client for every request an audit run makes.
///
/// All fetch methods degrade instead of propagating: a timeout or transport
/// error comes back as `None` (or status 0 for probes), and callers must
/// treat that exactly like an error status.
#[derive(Clone)]
pub struct SiteClient {
    client: Client,
}

impl SiteClient {
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(
                "sitecheck/",
                env!("CARGO_PKG_VERSION"),
                " (+https://www.voiceover-captions-ai.com/)"
            ))
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs((timeout_secs / 2).max(1)))
            .pool_max_idle_per_host(50)
            .pool_idle_timeout(Duration::from_secs(90))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;

        Ok(Self { client })
    }

    /// GET a page with a cache-busting query parameter so CDN caches never
    /// mask a broken deploy. The body is only read for statuses below 400.
    pub async fn get_page(&self, url: &str) -> Option<PageFetch> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .query(&[("_qa", cache_buster())])
            .header("accept", "text/html,application/xhtml+xml")
            .send()
            .await;

        match response {
            Ok(response) => {
                let status = response.status().as_u16();
                let body = if status < 400 {
                    response.text().await.unwrap_or_default()
                } else {
                    String::new()
                };
                Some(PageFetch {
                    url: url.to_string(),
                    status,
                    body,
                })
            }
            Err(e) => {
                warn!("GET {} failed: {}", url, e);
                None
            }
        }
    }

    /// HEAD a URL, keeping the response headers for inspection.
    pub async fn head(&self, url: &str) -> Option<HeadFetch> {
        debug!("HEAD {}", url);
        match self.client.head(url).send().await {
            Ok(response) => Some(HeadFetch {
                status: response.status().as_u16(),
                headers: response.headers().clone(),
            }),
            Err(e) => {
                warn!("HEAD {} failed: {}", url, e);
                None
            }
        }
    }

    /// Check link reachability: HEAD first, then a single GET fallback when
    /// HEAD gives no response, an error status, or 405 (servers that refuse
    /// HEAD). Returns the final status, 0 meaning no response at all.
    pub async fn probe(&self, url: &str) -> u16 {
        let mut status = match self.client.head(url).send().await {
            Ok(response) => response.status().as_u16(),
            Err(e) => {
                debug!("HEAD {} failed: {}", url, e);
                0
            }
        };

        if status == 0 || status >= 400 || status == 405 {
            match self.client.get(url).send().await {
                Ok(response) => status = response.status().as_u16(),
                Err(e) => debug!("GET fallback {} failed: {}", url, e),
            }
        }

        status
    }
}

/// Probe every link concurrently, capped by `workers` permits. Results come
/// back in the order the links were given.
pub async fn check_links(client: &SiteClient, links: Vec<String>, workers: usize) -> Vec<LinkCheck> {
    let semaphore = Arc::new(Semaphore::new(workers.max(1)));
    let mut tasks = Vec::with_capacity(links.len());

    for url in links {
        let client = client.clone();
        let semaphore = semaphore.clone();
        tasks.push(tokio::spawn(async move {
            let _permit = semaphore.acquire_owned().await.unwrap();
            let status = client.probe(&url).await;
            LinkCheck { url, status }
        }));
    }

    join_all(tasks)
        .await
        .into_iter()
        .filter_map(|joined| joined.ok())
        .collect()
}

fn cache_buster() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis().to_string())
        .unwrap_or_else(|_| "0".to_string())
}
