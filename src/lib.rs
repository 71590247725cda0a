//! gastos - personal expenses against a monthly income
//!
//! This library provides the core of the `gastos` terminal client. Expenses
//! live on a remote REST store; the client keeps a local snapshot of them,
//! summarizes the snapshot month by month against the user's income and
//! compares it with another user's spending.
//!
//! # Architecture
//!
//! - `config`: settings and path management
//! - `error`: the crate error type
//! - `models`: expense records, amounts, income and months
//! - `aggregate`: pure filtering, grouping and comparison functions
//! - `remote`: the REST client for the expense store
//! - `storage`: local JSON snapshots of the store
//! - `services`: operations combining store, snapshot and audit log
//! - `audit`: append-only log of changes
//! - `reports`, `display`, `export`: rendering for the terminal and files
//! - `cli`, `tui`: the command line and interactive surfaces
//!
//! # Example
//!
//! ```rust,ignore
//! use gastos::config::{GastosPaths, Settings};
//! use gastos::storage::Storage;
//!
//! let paths = GastosPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths)?;
//! storage.load_all()?;
//! ```

pub mod aggregate;
pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod remote;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{GastosError, GastosResult};
