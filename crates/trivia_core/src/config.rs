//! Catalog configuration.
//!
//! # Invariants
//! - `page_size` handed to the catalog is always positive and otherwise
//!   exactly what the caller configured.

use serde::Deserialize;

/// Questions per page when callers do not configure one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Caller-supplied catalog settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub page_size: u32,
}

impl CatalogConfig {
    /// Creates a config with a normalized page size.
    pub fn with_page_size(page_size: u32) -> Self {
        Self {
            page_size: normalize_page_size(Some(page_size)),
        }
    }

    /// Returns a copy with `page_size` normalized.
    ///
    /// Deserialized configs may carry a zero page size.
    pub fn normalized(self) -> Self {
        Self::with_page_size(self.page_size)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Missing or zero page sizes fall back to `DEFAULT_PAGE_SIZE`; any other
/// value is kept as given.
pub fn normalize_page_size(page_size: Option<u32>) -> u32 {
    match page_size {
        Some(0) | None => DEFAULT_PAGE_SIZE,
        Some(value) => value,
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_page_size, CatalogConfig, DEFAULT_PAGE_SIZE};

    #[test]
    fn page_size_defaults_and_keeps_large_values() {
        assert_eq!(normalize_page_size(None), DEFAULT_PAGE_SIZE);
        assert_eq!(normalize_page_size(Some(0)), DEFAULT_PAGE_SIZE);
        assert_eq!(normalize_page_size(Some(7)), 7);
        assert_eq!(normalize_page_size(Some(500)), 500);
    }

    #[test]
    fn deserialized_config_fills_missing_fields_and_normalizes() {
        let config: CatalogConfig =
            serde_json::from_str("{}").expect("empty config should deserialize");
        assert_eq!(config, CatalogConfig::default());

        let config: CatalogConfig =
            serde_json::from_str(r#"{"page_size": 0}"#).expect("config should deserialize");
        assert_eq!(config.normalized().page_size, DEFAULT_PAGE_SIZE);
    }
}
