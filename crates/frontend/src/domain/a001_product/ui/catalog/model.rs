use contracts::domain::a001_product::{parse_product_list, try_resolve_display, ProductRecord};
use gloo_net::http::Request;
use serde::Deserialize;

/// Откуда витрина берёт список товаров
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub products_url: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            products_url: "/static/products.json".to_string(),
        }
    }
}

/// Загрузить список товаров.
///
/// Записи, не прошедшие разбор, пропускаются с предупреждением в лог.
pub async fn fetch_products(url: &str) -> Result<Vec<ProductRecord>, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;

    let parsed = parse_product_list(&text).map_err(|e| format!("Failed to parse response: {}", e))?;
    for (index, err) in &parsed.rejected {
        log::warn!("Skipping product #{}: {}", index, err);
    }
    for product in &parsed.products {
        if let Some(err) = incomplete_reason(product) {
            log::warn!(
                "Product '{}' is shown with incomplete figures: {}",
                product.name.as_deref().unwrap_or("<unnamed>"),
                err
            );
        }
    }

    Ok(parsed.products)
}

/// Почему у товара не получится честно посчитать прибыль и итог.
///
/// Такие товары всё равно показываются, суммы на карточке будут `NaN`.
pub fn incomplete_reason(product: &ProductRecord) -> Option<String> {
    try_resolve_display(product).err().map(|e| e.to_string())
}
