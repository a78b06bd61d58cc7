pub mod model;

use super::card::ProductCard;
use crate::shared::format::CurrencyFormat;
use contracts::domain::a001_product::ProductRecord;
use leptos::prelude::*;
pub use model::CatalogConfig;
use thaw::*;

/// Grid of product cards loaded from `config.products_url`
#[component]
pub fn ProductCatalog(
    #[prop(optional)]
    config: CatalogConfig,
    #[prop(optional_no_strip)]
    currency: Option<CurrencyFormat>,
    #[prop(optional)]
    on_action: Option<Callback<ProductRecord>>,
) -> impl IntoView {
    let (products, set_products) = signal::<Vec<ProductRecord>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    let url = config.products_url.clone();
    wasm_bindgen_futures::spawn_local(async move {
        match model::fetch_products(&url).await {
            Ok(items) => {
                log::info!("Loaded {} products from {}", items.len(), url);
                set_products.set(items);
            }
            Err(e) => {
                log::error!("Failed to load products from {}: {}", url, e);
                set_error.set(Some(e));
            }
        }
        set_loading.set(false);
    });

    view! {
        <div class="product-catalog">
            {move || {
                if loading.get() {
                    view! {
                        <Flex justify=FlexJustify::Center align=FlexAlign::Center gap=FlexGap::Small>
                            <Spinner />
                            "Memuat..."
                        </Flex>
                    }.into_any()
                } else if let Some(err) = error.get() {
                    view! {
                        <div class="product-catalog__error">{format!("Gagal memuat produk: {}", err)}</div>
                    }.into_any()
                } else {
                    let items = products.get();
                    if items.is_empty() {
                        view! {
                            <div class="product-catalog__empty">"Belum ada produk"</div>
                        }.into_any()
                    } else {
                        let currency = currency.clone();
                        view! {
                            <div class="product-catalog__grid">
                                {items.into_iter().map(|product| {
                                    let currency = currency.clone();
                                    view! {
                                        <ProductCard product=product currency=currency on_action=on_action />
                                    }
                                }).collect_view()}
                            </div>
                        }.into_any()
                    }
                }
            }}
        </div>
    }
}
