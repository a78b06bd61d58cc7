//! Форматирование денежных значений для карточек товаров

use serde::Deserialize;

/// Настройки вывода валюты
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CurrencyFormat {
    /// Префикс перед суммой, например "Rp "
    pub prefix: String,
    pub thousands_separator: char,
    pub decimal_separator: char,
    pub decimals: u8,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            prefix: "Rp ".to_string(),
            thousands_separator: '.',
            decimal_separator: ',',
            decimals: 0,
        }
    }
}

impl CurrencyFormat {
    /// Форматирует сумму. `NaN` и бесконечности выводятся как есть,
    /// без подмены на ноль.
    ///
    /// # Примеры
    ///
    /// ```
    /// use frontend::shared::format::CurrencyFormat;
    /// assert_eq!(CurrencyFormat::default().format(1500000.0), "Rp 1.500.000");
    /// ```
    pub fn format(&self, amount: f64) -> String {
        if amount.is_nan() {
            return format!("{}NaN", self.prefix);
        }
        if amount.is_infinite() {
            let sign = if amount < 0.0 { "-" } else { "" };
            return format!("{}{}\u{221e}", sign, self.prefix);
        }

        let factor = 10f64.powi(self.decimals as i32);
        // round() округляет половину от нуля; у огромных сумм дробной части нет
        let scaled = amount * factor;
        let rounded = if scaled.is_finite() {
            scaled.round() / factor
        } else {
            amount
        };
        let sign = if rounded < 0.0 { "-" } else { "" };

        let formatted = format!("{:.*}", self.decimals as usize, rounded.abs());
        let (integer_part, decimal_part) = match formatted.split_once('.') {
            Some((int, dec)) => (int, Some(dec)),
            None => (formatted.as_str(), None),
        };

        let grouped = group_thousands(integer_part, self.thousands_separator);
        match decimal_part {
            Some(d) => format!(
                "{}{}{}{}{}",
                sign, self.prefix, grouped, self.decimal_separator, d
            ),
            None => format!("{}{}{}", sign, self.prefix, grouped),
        }
    }
}

fn group_thousands(digits: &str, separator: char) -> String {
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(separator);
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Форматирует сумму в рупиях с настройками по умолчанию
pub fn format_currency(amount: f64) -> String {
    CurrencyFormat::default().format(amount)
}
