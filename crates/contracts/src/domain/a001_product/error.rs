use thiserror::Error;

/// Ошибки на границе приёма карточки товара
#[derive(Debug, Error)]
pub enum ProductRecordError {
    #[error("invalid product JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Поле есть, но имеет не тот JSON-тип
    #[error("field `{field}` must be {expected}, got {found}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("expected a JSON array of products, got {found}")]
    NotAList { found: &'static str },

    /// Цена нужна для расчёта, но не передана (только строгий режим)
    #[error("price is required to derive profit and total income")]
    MissingPrice,
}
