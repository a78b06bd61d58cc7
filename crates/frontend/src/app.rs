use crate::domain::a001_product::ui::ProductCatalog;
use contracts::domain::a001_product::ProductRecord;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let on_action = Callback::new(|product: ProductRecord| {
        log::info!(
            "Product action: {}",
            product.name.as_deref().unwrap_or("<unnamed>")
        );
    });

    view! {
        <main class="app">
            <ProductCatalog on_action=on_action />
        </main>
    }
}
