pub mod style;

use crate::shared::components::ui::{Badge, BadgeTone};
use crate::shared::format::{format_currency, CurrencyFormat};
use crate::shared::icons::icon;
use contracts::domain::a001_product::{resolve_display, ProductRecord, StyleVariant};
use leptos::prelude::*;
pub use style::CardStyle;

/// Product card: image on the left (60%), price/profit/total panel on the right.
///
/// Display values are recomputed from `product` on every render; the record
/// itself is never modified.
#[component]
pub fn ProductCard(
    product: ProductRecord,
    /// Currency formatting for price, profit and total income (rupiah when absent)
    #[prop(optional_no_strip)]
    currency: Option<CurrencyFormat>,
    /// Called with the product when the action row is clicked
    #[prop(optional_no_strip)]
    on_action: Option<Callback<ProductRecord>>,
) -> impl IntoView {
    let display = resolve_display(&product);
    let style = CardStyle::for_variant(StyleVariant::for_record(&product));

    log::debug!(
        "ProductCard '{}': variant={}, commission={}%, total={}",
        product.name.as_deref().unwrap_or_default(),
        style.variant.as_str(),
        display.display_commission,
        display.total_income
    );

    let money = |amount: f64| match &currency {
        Some(fmt) => fmt.format(amount),
        None => format_currency(amount),
    };
    let price_text = money(product.price.unwrap_or(f64::NAN));
    let profit_text = money(display.display_profit);
    let total_text = money(display.total_income);
    let commission_text = format!("({}%)", display.display_commission);

    let name = product.name.clone().unwrap_or_default();
    let label = product.label.clone();

    let image_view = match product.image_url.clone() {
        Some(src) => view! {
            <img src=src alt=name.clone() class=style.image />
        }
        .into_any(),
        None => view! {
            <div class="product-card__image-placeholder">{icon("image-off")}</div>
        }
        .into_any(),
    };

    let action_product = product.clone();
    let handle_action = move |_: leptos::ev::MouseEvent| {
        if let Some(handler) = on_action {
            handler.run(action_product.clone());
        }
    };

    view! {
        <div class=style.root data-variant=style.variant.as_str()>
            {style.show_glow.then(|| view! { <div class="product-card__glow"></div> })}

            <div class="product-card__visual">
                {image_view}
                <div class="product-card__shade"></div>

                {label.map(|text| view! {
                    <Badge tone=BadgeTone::Overlay class="product-card__label">{text}</Badge>
                })}

                {style.show_badge.then(|| view! {
                    <div class="product-card__badge">
                        <Badge tone=BadgeTone::Gold>"EXCLUSIVE"</Badge>
                        <div class="product-card__badge-underline"></div>
                    </div>
                })}
            </div>

            <div class=style.panel>
                <div class="product-card__heading">
                    <h3 class=style.title>{name}</h3>
                    <div class=style.divider></div>
                </div>

                <div class="product-card__figures">
                    <div class="product-card__row">
                        <span class="product-card__caption">"HARGA"</span>
                        <span class="product-card__value">{price_text}</span>
                    </div>
                    <div class="product-card__row">
                        <div class="product-card__caption-line">
                            <span class=format!("product-card__caption {}", style.accent)>"PROFIT"</span>
                            <span class=format!("product-card__hint {}", style.accent)>{commission_text}</span>
                        </div>
                        <span class=style.profit_value>{profit_text}</span>
                    </div>

                    <div class=style.total_row>
                        <span class="product-card__caption">"Total Pendapatan"</span>
                        <span class=style.total_value>{total_text}</span>
                    </div>
                </div>

                <div class=style.action_row on:click=handle_action>
                    <span class=style.action_text>{display.action_text}</span>
                    <div class="product-card__action-line"></div>
                    <span class=format!("product-card__chevron {}", style.accent)>{icon("chevron-right")}</span>
                </div>
            </div>

            <div class=style.corner_glow></div>
        </div>
    }
}
