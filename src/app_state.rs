//! Implements the struct that holds the state of the web server.

use std::sync::{Arc, Mutex};

use crate::ledger::Ledger;

/// The state shared across request handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The in-memory expense ledger.
    ///
    /// Each handler takes the lock for the duration of one event; no
    /// handler holds it across an await point.
    pub ledger: Arc<Mutex<Ledger>>,
}

impl AppState {
    /// Create the shared state around `ledger`.
    pub fn new(ledger: Ledger) -> Self {
        Self {
            ledger: Arc::new(Mutex::new(ledger)),
        }
    }
}
