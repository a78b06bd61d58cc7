use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::error::ProductRecordError;

// ============================================================================
// Product record
// ============================================================================

/// Запись товара для карточки витрины.
///
/// Форма приходит от загрузчика данных; все числовые поля необязательные.
/// `null` и отсутствие поля читаются одинаково как `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// Комиссия в процентах (0..100)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commission: Option<f64>,

    /// Заранее посчитанная прибыль
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profit: Option<f64>,

    /// Заранее посчитанный итоговый доход
    #[serde(
        rename = "totalIncome",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub total_income: Option<f64>,

    /// Эксклюзивный товар. Только JSON `true` включает режим,
    /// `"true"`, `1` и прочие значения считаются `false`.
    #[serde(
        rename = "isExclusive",
        default,
        deserialize_with = "deserialize_strict_true"
    )]
    pub is_exclusive: bool,

    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Метка категории поверх изображения
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Текст кнопки действия вместо "Detail"
    #[serde(rename = "statusText", default, skip_serializing_if = "Option::is_none")]
    pub status_text: Option<String>,
}

fn deserialize_strict_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value == Value::Bool(true))
}

impl ProductRecord {
    /// Товар с ценой, остальные поля пустые
    pub fn with_price(price: f64) -> Self {
        Self {
            price: Some(price),
            ..Self::default()
        }
    }

    /// Разобрать одну запись из JSON
    pub fn from_json(json: &str) -> Result<Self, ProductRecordError> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Разобрать одну запись из уже распарсенного JSON-значения
    pub fn from_value(value: Value) -> Result<Self, ProductRecordError> {
        check_numeric_fields(&value)?;
        Ok(serde_json::from_value(value)?)
    }
}

/// JSON-имена числовых полей
const NUMERIC_FIELDS: [&str; 4] = ["price", "commission", "profit", "totalIncome"];

/// Числовое поле допускает только число или `null`
fn check_numeric_fields(value: &Value) -> Result<(), ProductRecordError> {
    let Value::Object(fields) = value else {
        return Ok(());
    };
    for field in NUMERIC_FIELDS {
        match fields.get(field) {
            None | Some(Value::Null) | Some(Value::Number(_)) => {}
            Some(other) => {
                return Err(ProductRecordError::InvalidField {
                    field,
                    expected: "a number",
                    found: json_kind(other),
                })
            }
        }
    }
    Ok(())
}

// ============================================================================
// List parsing
// ============================================================================

/// Результат разбора списка: принятые записи и отклонённые с индексом
#[derive(Debug, Default)]
pub struct ParsedProductList {
    pub products: Vec<ProductRecord>,
    pub rejected: Vec<(usize, ProductRecordError)>,
}

/// Разобрать JSON-массив товаров.
///
/// Битые элементы не валят весь список: они попадают в `rejected`,
/// остальные возвращаются в исходном порядке.
pub fn parse_product_list(json: &str) -> Result<ParsedProductList, ProductRecordError> {
    let root: Value = serde_json::from_str(json)?;
    let items = match root {
        Value::Array(items) => items,
        other => {
            return Err(ProductRecordError::NotAList {
                found: json_kind(&other),
            })
        }
    };

    let mut parsed = ParsedProductList::default();
    for (index, item) in items.into_iter().enumerate() {
        match ProductRecord::from_value(item) {
            Ok(product) => parsed.products.push(product),
            Err(e) => parsed.rejected.push((index, e)),
        }
    }
    Ok(parsed)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
