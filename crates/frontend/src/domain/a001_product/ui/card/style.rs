//! CSS classes of the product card, one immutable set per [`StyleVariant`].
//!
//! Classes are defined in `static/product_card.css`.

use contracts::domain::a001_product::StyleVariant;

/// Class names and decorations for one card variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardStyle {
    pub variant: StyleVariant,
    pub root: &'static str,
    pub image: &'static str,
    pub panel: &'static str,
    pub title: &'static str,
    pub divider: &'static str,
    /// Colour of the PROFIT label and commission hint
    pub accent: &'static str,
    pub profit_value: &'static str,
    pub total_row: &'static str,
    pub total_value: &'static str,
    pub action_row: &'static str,
    pub action_text: &'static str,
    pub corner_glow: &'static str,
    /// EXCLUSIVE badge in the image corner
    pub show_badge: bool,
    /// Gold gradient overlay over the whole card
    pub show_glow: bool,
}

pub const EXCLUSIVE_STYLE: CardStyle = CardStyle {
    variant: StyleVariant::Exclusive,
    root: "product-card product-card--exclusive",
    image: "product-card__image product-card__image--exclusive",
    panel: "product-card__panel product-card__panel--exclusive",
    title: "product-card__title product-card__title--exclusive",
    divider: "product-card__divider product-card__divider--exclusive",
    accent: "product-card__accent--gold",
    profit_value: "product-card__value product-card__value--profit-exclusive",
    total_row: "product-card__total product-card__total--exclusive",
    total_value: "product-card__total-value product-card__total-value--exclusive",
    action_row: "product-card__action product-card__action--exclusive",
    action_text: "product-card__action-text product-card__accent--gold",
    corner_glow: "product-card__corner-glow product-card__corner-glow--exclusive",
    show_badge: true,
    show_glow: true,
};

pub const STANDARD_STYLE: CardStyle = CardStyle {
    variant: StyleVariant::Standard,
    root: "product-card",
    image: "product-card__image",
    panel: "product-card__panel",
    title: "product-card__title",
    divider: "product-card__divider",
    accent: "product-card__accent",
    profit_value: "product-card__value product-card__value--profit",
    total_row: "product-card__total",
    total_value: "product-card__total-value",
    action_row: "product-card__action",
    action_text: "product-card__action-text",
    corner_glow: "product-card__corner-glow",
    show_badge: false,
    show_glow: false,
};

impl CardStyle {
    pub fn for_variant(variant: StyleVariant) -> &'static CardStyle {
        match variant {
            StyleVariant::Exclusive => &EXCLUSIVE_STYLE,
            StyleVariant::Standard => &STANDARD_STYLE,
        }
    }
}
