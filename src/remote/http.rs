//! Blocking HTTP client for the remote store

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{StatusCode, Url};

use crate::error::{GastosError, GastosResult};
use crate::models::{ExpenseRecord, MonthlyIncome};

use super::credential::Credential;
use super::wire::{ErrorBody, ExpenseBody, IncomeBody};
use super::ExpenseStore;

/// What a 404 refers to
#[derive(Clone, Copy)]
enum Missing<'a> {
    Expense(i64),
    User(&'a str),
    Nothing,
}

/// [`ExpenseStore`] backed by the store's REST API
#[derive(Debug, Clone)]
pub struct HttpExpenseStore {
    http: Client,
    base_url: Url,
}

impl HttpExpenseStore {
    pub fn new(base_url: &str, credential: &Credential, timeout: Duration) -> GastosResult<Self> {
        let base_url = Url::parse(base_url.trim())
            .map_err(|e| GastosError::Config(format!("Invalid store URL '{}': {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(GastosError::Config(format!(
                "Store URL '{}' cannot have a path",
                base_url
            )));
        }

        let mut auth = HeaderValue::from_str(&credential.bearer())
            .map_err(|_| GastosError::Unauthorized("Access token contains invalid characters".into()))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| GastosError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { http, base_url })
    }

    /// `{base}/seg1/seg2/.../` with every segment percent-encoded
    fn endpoint(&self, segments: &[&str]) -> GastosResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| GastosError::Config(format!("Store URL '{}' cannot have a path", self.base_url)))?
            .pop_if_empty()
            .extend(segments)
            .push("");
        Ok(url)
    }

    /// Turn a non-success response into the matching error
    fn check(response: Response, missing: Missing<'_>) -> GastosResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().clone();
        let body = response.text().unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.message())
            .unwrap_or_else(|_| {
                if body.trim().is_empty() {
                    status.canonical_reason().unwrap_or("no details").to_string()
                } else {
                    body.trim().to_string()
                }
            });

        Err(match (status, missing) {
            (StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN, _) => GastosError::Unauthorized(message),
            (StatusCode::NOT_FOUND, Missing::Expense(id)) => GastosError::expense_not_found(id.to_string()),
            (StatusCode::NOT_FOUND, Missing::User(username)) => GastosError::user_not_found(username),
            (StatusCode::BAD_REQUEST, _) => GastosError::Validation(message),
            _ => GastosError::Remote {
                status: status.as_u16(),
                message: format!("{} ({})", message, url),
            },
        })
    }
}

impl ExpenseStore for HttpExpenseStore {
    fn list_expenses(&self) -> GastosResult<Vec<ExpenseRecord>> {
        let url = self.endpoint(&["api", "gastos"])?;
        let response = self.http.get(url).send()?;
        Ok(Self::check(response, Missing::Nothing)?.json()?)
    }

    fn list_expenses_of(&self, username: &str) -> GastosResult<Vec<ExpenseRecord>> {
        let url = self.endpoint(&["api", "gastos", "de", username])?;
        let response = self.http.get(url).send()?;
        Ok(Self::check(response, Missing::User(username))?.json()?)
    }

    fn create_expense(&self, record: &ExpenseRecord) -> GastosResult<ExpenseRecord> {
        let url = self.endpoint(&["api", "gastos"])?;
        let response = self.http.post(url).json(&ExpenseBody::from(record)).send()?;
        Ok(Self::check(response, Missing::Nothing)?.json()?)
    }

    fn replace_expense(&self, id: i64, record: &ExpenseRecord) -> GastosResult<ExpenseRecord> {
        let url = self.endpoint(&["api", "gastos", &id.to_string()])?;
        let response = self.http.put(url).json(&ExpenseBody::from(record)).send()?;
        Ok(Self::check(response, Missing::Expense(id))?.json()?)
    }

    fn delete_expense(&self, id: i64) -> GastosResult<()> {
        let url = self.endpoint(&["api", "gastos", &id.to_string()])?;
        let response = self.http.delete(url).send()?;
        Self::check(response, Missing::Expense(id))?;
        Ok(())
    }

    fn get_income(&self) -> GastosResult<MonthlyIncome> {
        let url = self.endpoint(&["api", "renda"])?;
        let response = self.http.get(url).send()?;
        let body: IncomeBody = Self::check(response, Missing::Nothing)?.json()?;
        Ok(body.income())
    }

    fn set_income(&self, income: MonthlyIncome) -> GastosResult<MonthlyIncome> {
        let url = self.endpoint(&["api", "renda"])?;
        let response = self.http.put(url).json(&IncomeBody::from(income)).send()?;
        let body: IncomeBody = Self::check(response, Missing::Nothing)?.json()?;
        Ok(body.income())
    }
}
