//! Fixture-backed image source
//!
//! Pages through an embedded JSON set with a short artificial delay so the
//! infinite scroll loader is visible.

use mosaic_core::ImageDescriptor;
use mosaic_ui::timer::sleep_ms;
use serde::Deserialize;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::debug;

/// Embedded fixture data (compiled into the binary)
const FIXTURE_JSON: &str = include_str!("../fixtures/images.json");

/// Images per page
pub const PAGE_SIZE: usize = 18;

const LATENCY_MS: u64 = 450;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Fixture data is invalid: {0}")]
    Fixture(String),
}

#[derive(Debug, Deserialize)]
struct FixtureData {
    images: Vec<ImageDescriptor>,
}

static FIXTURE: OnceLock<Result<Vec<ImageDescriptor>, String>> = OnceLock::new();

fn fixture_images() -> Result<&'static [ImageDescriptor], SourceError> {
    FIXTURE
        .get_or_init(|| {
            serde_json::from_str::<FixtureData>(FIXTURE_JSON)
                .map(|data| data.images)
                .map_err(|e| e.to_string())
        })
        .as_deref()
        .map_err(|e| SourceError::Fixture(e.clone()))
}

/// One page of results
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub images: Vec<ImageDescriptor>,
    pub has_more: bool,
}

/// Slice page `index` (zero-based) out of the fixture set
pub fn page(index: usize, page_size: usize) -> Result<Page, SourceError> {
    let all = fixture_images()?;
    let start = (index * page_size).min(all.len());
    let end = (start + page_size).min(all.len());
    Ok(Page {
        images: all[start..end].to_vec(),
        has_more: end < all.len(),
    })
}

pub async fn fetch_page(index: usize) -> Result<Page, SourceError> {
    sleep_ms(LATENCY_MS).await;
    let page = page(index, PAGE_SIZE)?;
    debug!(
        "Served page {index}: {} images, has_more={}",
        page.images.len(),
        page.has_more
    );
    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_parses() {
        let images = fixture_images().unwrap();
        assert!(!images.is_empty());
        assert!(images.iter().all(|image| !image.html_id.is_empty()));
    }

    #[test]
    fn test_pages_cover_fixture_once() {
        let total = fixture_images().unwrap().len();
        let mut seen = Vec::new();
        let mut index = 0;
        loop {
            let page = page(index, PAGE_SIZE).unwrap();
            seen.extend(page.images.iter().map(|image| image.id));
            index += 1;
            if !page.has_more {
                break;
            }
        }
        assert_eq!(seen.len(), total);
        seen.dedup();
        assert_eq!(seen.len(), total);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let page = page(1000, PAGE_SIZE).unwrap();
        assert!(page.images.is_empty());
        assert!(!page.has_more);
    }
}
