//! Request and response bodies in the store's vocabulary
//!
//! Responses deserialize straight into [`ExpenseRecord`] through its field
//! aliases; requests go out with the store's own names.

use serde::{Deserialize, Serialize};

use crate::models::{Amount, ExpenseRecord, MonthlyIncome};

/// Body of a create or replace request
#[derive(Debug, Serialize)]
pub(crate) struct ExpenseBody<'a> {
    item: &'a str,
    valor: String,
    categoria: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    tipo: Option<&'static str>,
}

impl<'a> From<&'a ExpenseRecord> for ExpenseBody<'a> {
    fn from(record: &'a ExpenseRecord) -> Self {
        Self {
            item: record.description.trim(),
            // The store keeps two decimal places
            valor: format!("{:.2}", record.amount_value()),
            categoria: record.category.trim(),
            tipo: record.kind.map(|k| k.wire_name()),
        }
    }
}

/// Income in either direction
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct IncomeBody {
    #[serde(default)]
    renda_mensal: Amount,
}

impl IncomeBody {
    pub(crate) fn income(&self) -> MonthlyIncome {
        MonthlyIncome::new(self.renda_mensal.value())
    }
}

impl From<MonthlyIncome> for IncomeBody {
    fn from(income: MonthlyIncome) -> Self {
        Self {
            renda_mensal: Amount::Text(format!("{:.2}", income.value())),
        }
    }
}

/// Error body: either `{"detail": "..."}` or a field -> messages map
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ErrorBody {
    Detail { detail: String },
    Fields(std::collections::BTreeMap<String, serde_json::Value>),
}

impl ErrorBody {
    pub(crate) fn message(&self) -> String {
        match self {
            Self::Detail { detail } => detail.clone(),
            Self::Fields(fields) => fields
                .iter()
                .map(|(field, value)| {
                    let text = match value {
                        serde_json::Value::Array(items) => items
                            .iter()
                            .map(|i| i.as_str().map(str::to_string).unwrap_or_else(|| i.to_string()))
                            .collect::<Vec<_>>()
                            .join(" "),
                        serde_json::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    };
                    format!("{}: {}", field, text)
                })
                .collect::<Vec<_>>()
                .join("; "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseKind;

    #[test]
    fn test_expense_body_uses_store_names() {
        let record = ExpenseRecord::new(" Feira ", 80.0, "Alimentação").with_kind(ExpenseKind::Variable);
        let json = serde_json::to_value(ExpenseBody::from(&record)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "item": "Feira",
                "valor": "80.00",
                "categoria": "Alimentação",
                "tipo": "variável"
            })
        );
    }

    #[test]
    fn test_income_body_accepts_string_or_number() {
        let text: IncomeBody = serde_json::from_str(r#"{"renda_mensal": "5000.00"}"#).unwrap();
        let number: IncomeBody = serde_json::from_str(r#"{"renda_mensal": 4200.5}"#).unwrap();
        let null: IncomeBody = serde_json::from_str(r#"{"renda_mensal": null}"#).unwrap();

        assert_eq!(text.income().value(), 5000.0);
        assert_eq!(number.income().value(), 4200.5);
        assert_eq!(null.income().value(), 0.0);
    }

    #[test]
    fn test_error_body_messages() {
        let detail: ErrorBody = serde_json::from_str(r#"{"detail": "Usuário não encontrado."}"#).unwrap();
        assert_eq!(detail.message(), "Usuário não encontrado.");

        let fields: ErrorBody =
            serde_json::from_str(r#"{"valor": ["A valid number is required."], "item": ["This field is required."]}"#)
                .unwrap();
        assert_eq!(
            fields.message(),
            "item: This field is required.; valor: A valid number is required."
        );
    }
}
