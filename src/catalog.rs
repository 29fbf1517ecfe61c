use crate::errors::{RoutineError, RoutineResult};
use crate::models::{Catalog, Product};
use std::path::PathBuf;

/// Where the static product list lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Url(String),
}

impl CatalogSource {
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            CatalogSource::Url(location.to_string())
        } else {
            CatalogSource::File(PathBuf::from(location))
        }
    }
}

/// Loads every product in the catalog, in document order.
pub async fn load_products(
    source: &CatalogSource,
    client: &reqwest::Client,
) -> RoutineResult<Vec<Product>> {
    let body = match source {
        CatalogSource::File(path) => tokio::fs::read_to_string(path).await.map_err(|e| {
            RoutineError::catalog_error(format!("Failed to read {}: {}", path.display(), e))
        })?,
        CatalogSource::Url(url) => {
            let response = client
                .get(url)
                .send()
                .await
                .map_err(|e| RoutineError::catalog_error(format!("Request failed: {}", e)))?;

            let status = response.status();
            if !status.is_success() {
                return Err(RoutineError::catalog_error(format!(
                    "Catalog returned status {}",
                    status
                )));
            }
            response.text().await?
        }
    };

    let catalog: Catalog = serde_json::from_str(&body)
        .map_err(|e| RoutineError::catalog_error(format!("Failed to parse catalog: {}", e)))?;
    Ok(catalog.products)
}

pub fn filter_by_category(products: &[Product], category: &str) -> Vec<Product> {
    products
        .iter()
        .filter(|product| product.category == category)
        .cloned()
        .collect()
}
