//! In-memory store for tests

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{GastosError, GastosResult};
use crate::models::{Amount, ExpenseRecord, MonthlyIncome};

use super::ExpenseStore;

pub(crate) const CREATED_AT: &str = "2024-03-10T12:00:00Z";

#[derive(Default)]
struct State {
    own: Vec<ExpenseRecord>,
    others: HashMap<String, Vec<ExpenseRecord>>,
    income: f64,
    next_id: i64,
    offline: bool,
    /// Mimics a deployment that does not route the income endpoint
    income_unrouted: bool,
}

#[derive(Default)]
pub(crate) struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    pub(crate) fn with_expenses(records: Vec<ExpenseRecord>) -> Self {
        let next_id = records.iter().filter_map(|r| r.id).max().unwrap_or(0) + 1;
        Self {
            state: Mutex::new(State {
                own: records,
                next_id,
                ..State::default()
            }),
        }
    }

    pub(crate) fn add_user(&self, username: &str, records: Vec<ExpenseRecord>) {
        self.state.lock().unwrap().others.insert(username.to_string(), records);
    }

    pub(crate) fn set_offline(&self, offline: bool) {
        self.state.lock().unwrap().offline = offline;
    }

    pub(crate) fn unroute_income(&self) {
        self.state.lock().unwrap().income_unrouted = true;
    }

    pub(crate) fn own(&self) -> Vec<ExpenseRecord> {
        self.state.lock().unwrap().own.clone()
    }

    fn with_state<T>(&self, f: impl FnOnce(&mut State) -> GastosResult<T>) -> GastosResult<T> {
        let mut state = self.state.lock().unwrap();
        if state.offline {
            return Err(GastosError::Network("store unreachable".into()));
        }
        f(&mut state)
    }
}

/// The record as the store would echo it: decimal as text, server-side timestamp
fn stored(record: &ExpenseRecord, id: i64, created_at: Option<String>) -> ExpenseRecord {
    ExpenseRecord {
        id: Some(id),
        amount: Amount::Text(format!("{:.2}", record.amount_value())),
        created_at: created_at.or_else(|| Some(CREATED_AT.to_string())),
        ..record.clone()
    }
}

impl ExpenseStore for MemoryStore {
    fn list_expenses(&self) -> GastosResult<Vec<ExpenseRecord>> {
        self.with_state(|s| Ok(s.own.clone()))
    }

    fn list_expenses_of(&self, username: &str) -> GastosResult<Vec<ExpenseRecord>> {
        self.with_state(|s| {
            s.others
                .get(username)
                .cloned()
                .ok_or_else(|| GastosError::user_not_found(username))
        })
    }

    fn create_expense(&self, record: &ExpenseRecord) -> GastosResult<ExpenseRecord> {
        self.with_state(|s| {
            let created = stored(record, s.next_id, None);
            s.next_id += 1;
            s.own.push(created.clone());
            Ok(created)
        })
    }

    fn replace_expense(&self, id: i64, record: &ExpenseRecord) -> GastosResult<ExpenseRecord> {
        self.with_state(|s| {
            let slot = s
                .own
                .iter_mut()
                .find(|r| r.id == Some(id))
                .ok_or_else(|| GastosError::expense_not_found(id.to_string()))?;
            *slot = stored(record, id, slot.created_at.clone());
            Ok(slot.clone())
        })
    }

    fn delete_expense(&self, id: i64) -> GastosResult<()> {
        self.with_state(|s| {
            let before = s.own.len();
            s.own.retain(|r| r.id != Some(id));
            if s.own.len() == before {
                return Err(GastosError::expense_not_found(id.to_string()));
            }
            Ok(())
        })
    }

    fn get_income(&self) -> GastosResult<MonthlyIncome> {
        self.with_state(|s| {
            if s.income_unrouted {
                return Err(GastosError::Remote {
                    status: 404,
                    message: "Not Found".into(),
                });
            }
            Ok(MonthlyIncome::new(s.income))
        })
    }

    fn set_income(&self, income: MonthlyIncome) -> GastosResult<MonthlyIncome> {
        self.with_state(|s| {
            s.income = income.value();
            Ok(income)
        })
    }
}
