use serde::{Deserialize, Serialize};

use super::aggregate::ProductRecord;
use super::error::ProductRecordError;

/// Фиксированная комиссия эксклюзивного товара, %
pub const EXCLUSIVE_COMMISSION_PERCENT: f64 = 50.0;

/// Доля цены, которая идёт в прибыль эксклюзивного товара
pub const EXCLUSIVE_PROFIT_RATIO: f64 = 0.5;

/// Подпись кнопки действия по умолчанию
pub const DEFAULT_ACTION_TEXT: &str = "Detail";

// ============================================================================
// Style variant
// ============================================================================

/// Вариант оформления карточки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleVariant {
    Exclusive,
    Standard,
}

impl StyleVariant {
    pub fn from_exclusive(is_exclusive: bool) -> Self {
        if is_exclusive {
            StyleVariant::Exclusive
        } else {
            StyleVariant::Standard
        }
    }

    pub fn for_record(product: &ProductRecord) -> Self {
        Self::from_exclusive(product.is_exclusive)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StyleVariant::Exclusive => "exclusive",
            StyleVariant::Standard => "standard",
        }
    }
}

// ============================================================================
// Derived display values
// ============================================================================

/// Значения, которые показывает карточка. Пересчитываются на каждый рендер.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedDisplay {
    #[serde(rename = "displayCommission")]
    pub display_commission: f64,
    #[serde(rename = "displayProfit")]
    pub display_profit: f64,
    #[serde(rename = "totalIncome")]
    pub total_income: f64,
    #[serde(rename = "actionText")]
    pub action_text: String,
}

/// `0` и `NaN` считаются отсутствующим значением, как и `None`
fn or_zero(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v != 0.0 && !v.is_nan() => v,
        _ => 0.0,
    }
}

fn action_text(product: &ProductRecord) -> String {
    match product.status_text.as_deref() {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => DEFAULT_ACTION_TEXT.to_string(),
    }
}

/// Рассчитать отображаемые значения карточки.
///
/// Никогда не падает. Отсутствующая цена превращается в `NaN` и уходит
/// дальше в арифметику как есть, форматтер получит `NaN`.
pub fn resolve_display(product: &ProductRecord) -> DerivedDisplay {
    let price = product.price.unwrap_or(f64::NAN);

    let (display_commission, display_profit) = match StyleVariant::for_record(product) {
        StyleVariant::Exclusive => (EXCLUSIVE_COMMISSION_PERCENT, price * EXCLUSIVE_PROFIT_RATIO),
        StyleVariant::Standard => (or_zero(product.commission), or_zero(product.profit)),
    };

    // NOTE: для эксклюзивного товара переданный totalIncome игнорируется,
    // а для обычного берётся как есть. Асимметрия сохранена намеренно
    // до подтверждения со стороны продукта.
    let total_income = match (product.is_exclusive, product.total_income) {
        (false, Some(total)) => total,
        _ => price + display_profit,
    };

    DerivedDisplay {
        display_commission,
        display_profit,
        total_income,
        action_text: action_text(product),
    }
}

/// Строгий вариант: без цены расчёт прибыли и итога невозможен.
///
/// Цена не нужна только обычному товару с готовым `totalIncome`.
pub fn try_resolve_display(product: &ProductRecord) -> Result<DerivedDisplay, ProductRecordError> {
    let needs_price = product.is_exclusive || product.total_income.is_none();
    if needs_price && product.price.is_none() {
        return Err(ProductRecordError::MissingPrice);
    }
    Ok(resolve_display(product))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exclusive(price: f64) -> ProductRecord {
        ProductRecord {
            is_exclusive: true,
            ..ProductRecord::with_price(price)
        }
    }

    #[test]
    fn test_exclusive_scenario() {
        let display = resolve_display(&exclusive(200.0));
        assert_eq!(
            display,
            DerivedDisplay {
                display_commission: 50.0,
                display_profit: 100.0,
                total_income: 300.0,
                action_text: "Detail".to_string(),
            }
        );
    }

    #[test]
    fn test_standard_scenario() {
        let product = ProductRecord {
            commission: Some(10.0),
            profit: Some(15.0),
            ..ProductRecord::with_price(200.0)
        };
        let display = resolve_display(&product);
        assert_eq!(display.display_commission, 10.0);
        assert_eq!(display.display_profit, 15.0);
        assert_eq!(display.total_income, 215.0);
        assert_eq!(display.action_text, "Detail");
    }

    #[test]
    fn test_exclusive_ignores_supplied_values() {
        let product = ProductRecord {
            commission: Some(7.0),
            profit: Some(3.0),
            total_income: Some(999.0),
            ..exclusive(100.0)
        };
        let display = resolve_display(&product);
        assert_eq!(display.display_commission, 50.0);
        assert_eq!(display.display_profit, 50.0);
        assert_eq!(display.total_income, 150.0);
    }

    #[test]
    fn test_standard_honours_total_income_override() {
        let product = ProductRecord {
            profit: Some(20.0),
            total_income: Some(500.0),
            ..ProductRecord::with_price(100.0)
        };
        assert_eq!(resolve_display(&product).total_income, 500.0);

        let product = ProductRecord {
            profit: Some(20.0),
            ..ProductRecord::with_price(100.0)
        };
        assert_eq!(resolve_display(&product).total_income, 120.0);
    }

    #[test]
    fn test_zero_total_income_is_still_an_override() {
        let product = ProductRecord {
            profit: Some(20.0),
            total_income: Some(0.0),
            ..ProductRecord::with_price(100.0)
        };
        assert_eq!(resolve_display(&product).total_income, 0.0);
    }

    #[test]
    fn test_falsy_commission_and_profit_fall_back_to_zero() {
        let product = ProductRecord {
            commission: Some(f64::NAN),
            profit: Some(0.0),
            ..ProductRecord::with_price(80.0)
        };
        let display = resolve_display(&product);
        assert_eq!(display.display_commission, 0.0);
        assert_eq!(display.display_profit, 0.0);
        assert_eq!(display.total_income, 80.0);

        let display = resolve_display(&ProductRecord::with_price(80.0));
        assert_eq!(display.display_commission, 0.0);
        assert_eq!(display.display_profit, 0.0);
    }

    #[test]
    fn test_negative_zero_falls_back_but_negative_values_are_kept() {
        let product = ProductRecord {
            commission: Some(-0.0),
            profit: Some(-0.0),
            ..ProductRecord::with_price(80.0)
        };
        let display = resolve_display(&product);
        assert_eq!(display.display_commission, 0.0);
        assert!(display.display_commission.is_sign_positive());
        assert!(display.display_profit.is_sign_positive());
        assert_eq!(display.total_income, 80.0);

        let product = ProductRecord {
            commission: Some(-2.0),
            profit: Some(-5.0),
            ..ProductRecord::with_price(80.0)
        };
        let display = resolve_display(&product);
        assert_eq!(display.display_commission, -2.0);
        assert_eq!(display.display_profit, -5.0);
        assert_eq!(display.total_income, 75.0);
    }

    #[test]
    fn test_action_text() {
        let mut product = ProductRecord::default();
        assert_eq!(resolve_display(&product).action_text, "Detail");

        product.status_text = Some(String::new());
        assert_eq!(resolve_display(&product).action_text, "Detail");

        product.status_text = Some("Lihat".to_string());
        assert_eq!(resolve_display(&product).action_text, "Lihat");
    }

    #[test]
    fn test_missing_price_propagates_nan() {
        let display = resolve_display(&ProductRecord::default());
        assert_eq!(display.display_commission, 0.0);
        assert_eq!(display.display_profit, 0.0);
        assert!(display.total_income.is_nan());

        let display = resolve_display(&ProductRecord {
            is_exclusive: true,
            ..ProductRecord::default()
        });
        assert_eq!(display.display_commission, 50.0);
        assert!(display.display_profit.is_nan());
        assert!(display.total_income.is_nan());
    }

    #[test]
    fn test_strict_resolve_requires_price_only_when_used() {
        assert!(matches!(
            try_resolve_display(&ProductRecord::default()),
            Err(ProductRecordError::MissingPrice)
        ));

        let exclusive_without_price = ProductRecord {
            is_exclusive: true,
            total_income: Some(10.0),
            ..ProductRecord::default()
        };
        assert!(try_resolve_display(&exclusive_without_price).is_err());

        let with_override = ProductRecord {
            total_income: Some(10.0),
            ..ProductRecord::default()
        };
        assert_eq!(try_resolve_display(&with_override).unwrap().total_income, 10.0);
    }

    #[test]
    fn test_resolve_is_pure() {
        let product = ProductRecord {
            commission: Some(5.0),
            profit: Some(12.0),
            status_text: Some("Beli".to_string()),
            ..ProductRecord::with_price(240.0)
        };
        let snapshot = product.clone();

        let first = resolve_display(&product);
        let second = resolve_display(&product);
        assert_eq!(first, second);
        assert_eq!(product, snapshot);
    }

    #[test]
    fn test_style_variant_follows_flag() {
        assert_eq!(StyleVariant::for_record(&exclusive(1.0)), StyleVariant::Exclusive);
        assert_eq!(
            StyleVariant::for_record(&ProductRecord::with_price(1.0)),
            StyleVariant::Standard
        );
        assert_eq!(StyleVariant::Standard.as_str(), "standard");
    }

    #[test]
    fn test_resolves_records_parsed_from_json() {
        let product = ProductRecord::from_json(
            r#"{"price": 100, "isExclusive": "true", "profit": 20, "totalIncome": 500}"#,
        )
        .unwrap();
        assert_eq!(resolve_display(&product).total_income, 500.0);
    }
}
