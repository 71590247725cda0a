//! Expense record model
//!
//! An expense as known to the remote store. Field names follow the client
//! vocabulary (`description`, `amount`, `category`, `kind`, `createdAt`) but
//! the store's own names (`item`, `valor`, `categoria`, `tipo`, `criado_em`)
//! are accepted when reading.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::amount::Amount;

/// Recurrence nature of an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseKind {
    /// Recurs every month (rent, subscriptions)
    #[serde(rename = "fixed", alias = "fixo")]
    Fixed,
    /// One-off or irregular
    #[serde(rename = "variable", alias = "variável", alias = "variavel")]
    Variable,
}

impl ExpenseKind {
    /// The tag the remote store uses for this kind
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Fixed => "fixo",
            Self::Variable => "variável",
        }
    }
}

impl fmt::Display for ExpenseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed => write!(f, "fixed"),
            Self::Variable => write!(f, "variable"),
        }
    }
}

impl FromStr for ExpenseKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fixed" | "fixo" => Ok(Self::Fixed),
            "variable" | "variável" | "variavel" => Ok(Self::Variable),
            other => Err(format!("Unknown expense kind '{}', use fixed or variable", other)),
        }
    }
}

/// A single expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    /// Assigned by the store; absent while pending creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// What the money was spent on
    #[serde(default, alias = "item")]
    pub description: String,

    /// Amount exactly as received
    #[serde(default, alias = "valor")]
    pub amount: Amount,

    /// Free-form category label
    #[serde(default, alias = "categoria")]
    pub category: String,

    /// Fixed or variable
    #[serde(default, alias = "tipo", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ExpenseKind>,

    /// Creation timestamp as text (ISO date-time)
    #[serde(
        default,
        alias = "criado_em",
        alias = "created_at",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<String>,
}

impl ExpenseRecord {
    /// Create a new record pending creation
    pub fn new(
        description: impl Into<String>,
        amount: impl Into<Amount>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            description: description.into(),
            amount: amount.into(),
            category: category.into(),
            kind: None,
            created_at: None,
        }
    }

    /// Builder-style setter for the id
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Builder-style setter for the kind
    pub fn with_kind(mut self, kind: ExpenseKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Builder-style setter for the creation timestamp
    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = Some(created_at.into());
        self
    }

    /// Coerced amount (0.0 when malformed)
    pub fn amount_value(&self) -> f64 {
        self.amount.value()
    }

    /// Whether the store has not assigned an id yet
    pub fn is_pending(&self) -> bool {
        self.id.is_none()
    }

    /// Calendar date of `created_at`, if it parses
    pub fn created_date(&self) -> Option<NaiveDate> {
        self.created_at.as_deref().and_then(parse_timestamp)
    }

    /// Validate a record before sending it to the store
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }

        if self.category.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyCategory);
        }

        match self.amount.try_value() {
            None => Err(ExpenseValidationError::InvalidAmount(self.amount.to_string())),
            Some(v) if v < 0.0 => Err(ExpenseValidationError::NegativeAmount(v)),
            Some(_) => Ok(()),
        }
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2})", self.description, self.amount_value())
    }
}

/// Parse the store's timestamp formats into a calendar date
///
/// Offset-carrying timestamps keep the date as written in their own offset.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.date());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Validation errors for expense records
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseValidationError {
    EmptyDescription,
    EmptyCategory,
    InvalidAmount(String),
    NegativeAmount(f64),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Expense description cannot be empty"),
            Self::EmptyCategory => write!(f, "Expense category cannot be empty"),
            Self::InvalidAmount(raw) => write!(f, "Expense amount is not a number: '{}'", raw),
            Self::NegativeAmount(v) => write!(f, "Expense amount cannot be negative: {}", v),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_pending() {
        let record = ExpenseRecord::new("Coffee", 4.5, "Food");
        assert!(record.is_pending());
        assert_eq!(record.amount_value(), 4.5);
        assert!(record.with_id(7).id.is_some());
    }

    #[test]
    fn test_deserialize_store_payload() {
        let json = r#"{
            "id": 3,
            "item": "Aluguel",
            "valor": "1200.00",
            "categoria": "Custos Fixos",
            "criado_em": "2024-03-01T10:00:00.123456-03:00"
        }"#;
        let record: ExpenseRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.id, Some(3));
        assert_eq!(record.description, "Aluguel");
        assert_eq!(record.amount_value(), 1200.0);
        assert_eq!(record.category, "Custos Fixos");
        assert_eq!(
            record.created_date(),
            NaiveDate::from_ymd_opt(2024, 3, 1)
        );
    }

    #[test]
    fn test_serialize_uses_client_names() {
        let record = ExpenseRecord::new("X", 10.0, "Food").with_kind(ExpenseKind::Fixed);
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["description"], "X");
        assert_eq!(json["kind"], "fixed");
        assert!(json.get("id").is_none());
        assert!(json.get("createdAt").is_none());
    }

    #[test]
    fn test_kind_aliases() {
        let fixed: ExpenseKind = serde_json::from_str("\"fixo\"").unwrap();
        let variable: ExpenseKind = serde_json::from_str("\"variável\"").unwrap();
        assert_eq!(fixed, ExpenseKind::Fixed);
        assert_eq!(variable, ExpenseKind::Variable);
        assert_eq!("Variable".parse::<ExpenseKind>().unwrap(), ExpenseKind::Variable);
        assert!("monthly".parse::<ExpenseKind>().is_err());
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let march_5 = NaiveDate::from_ymd_opt(2024, 3, 5);
        assert_eq!(parse_timestamp("2024-03-05"), march_5);
        assert_eq!(parse_timestamp("2024-03-05T08:30:00Z"), march_5);
        assert_eq!(parse_timestamp("2024-03-05T08:30:00.5"), march_5);
        assert_eq!(parse_timestamp("2024-03-05 08:30:00"), march_5);
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp("2024-13-40"), None);
    }

    #[test]
    fn test_validate() {
        assert!(ExpenseRecord::new("Rent", 1000.0, "Fixed Costs").validate().is_ok());
        assert_eq!(
            ExpenseRecord::new("  ", 1.0, "Food").validate(),
            Err(ExpenseValidationError::EmptyDescription)
        );
        assert_eq!(
            ExpenseRecord::new("X", 1.0, "").validate(),
            Err(ExpenseValidationError::EmptyCategory)
        );
        assert_eq!(
            ExpenseRecord::new("X", -1.0, "Food").validate(),
            Err(ExpenseValidationError::NegativeAmount(-1.0))
        );
        assert!(matches!(
            ExpenseRecord::new("X", Amount::Text("abc".into()), "Food").validate(),
            Err(ExpenseValidationError::InvalidAmount(_))
        ));
    }
}
