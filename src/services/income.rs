//! Income service
//!
//! Keeps the cached monthly income in step with the remote store.

use crate::audit::EntityType;
use crate::error::{GastosError, GastosResult};
use crate::models::MonthlyIncome;
use crate::remote::ExpenseStore;
use crate::storage::Storage;

const INCOME_ENTITY_ID: &str = "renda";

/// Service for the monthly income
pub struct IncomeService<'a> {
    storage: &'a Storage,
    store: Option<&'a dyn ExpenseStore>,
}

impl<'a> IncomeService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            storage,
            store: None,
        }
    }

    pub fn online(storage: &'a Storage, store: &'a dyn ExpenseStore) -> Self {
        Self {
            storage,
            store: Some(store),
        }
    }

    fn remote(&self) -> GastosResult<&'a dyn ExpenseStore> {
        self.store.ok_or_else(|| {
            GastosError::Unauthorized(
                "This command talks to the remote store; pass --token or set GASTOS_TOKEN".into(),
            )
        })
    }

    /// Last known income, if any
    pub fn cached(&self) -> GastosResult<Option<MonthlyIncome>> {
        self.storage.income.get()
    }

    /// Fetch the income from the store and cache it
    pub fn refresh(&self) -> GastosResult<MonthlyIncome> {
        let income = self.remote()?.get_income()?;
        self.remember(income)?;
        Ok(income)
    }

    /// Change the income on the store
    pub fn set(&self, value: f64) -> GastosResult<MonthlyIncome> {
        let income = MonthlyIncome::new(value);
        income
            .validate()
            .map_err(|e| GastosError::Validation(e.to_string()))?;

        let stored = self.remote()?.set_income(income)?;
        self.remember(stored)?;
        Ok(stored)
    }

    fn remember(&self, income: MonthlyIncome) -> GastosResult<()> {
        let previous = self.storage.income.set(income)?;
        self.storage.income.save()?;

        match previous {
            Some(before) if before == income => Ok(()),
            Some(before) => self.storage.log_update(
                EntityType::Income,
                INCOME_ENTITY_ID,
                None,
                &before,
                &income,
                Some(format!("{} -> {}", before, income)),
            ),
            None => self
                .storage
                .log_create(EntityType::Income, INCOME_ENTITY_ID, None, &income),
        }
    }
}
