//! Extra Ledger
//!
//! Per-extra quantities for the loaded food item, kept in API order.

use super::{CartError, CartResult};
use crate::models::{ExtraDefinition, ExtraState};
use rust_decimal::Decimal;

/// Snapshot of the quantity picked for each extra
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtraLedger {
    extras: Vec<ExtraState>,
}

impl ExtraLedger {
    /// Fresh ledger for a newly loaded item, every quantity at 0
    pub fn initialize(definitions: &[ExtraDefinition]) -> Self {
        Self {
            extras: definitions.iter().map(ExtraState::from).collect(),
        }
    }

    pub fn extras(&self) -> &[ExtraState] {
        &self.extras
    }

    pub fn len(&self) -> usize {
        self.extras.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extras.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&ExtraState> {
        self.extras.iter().find(|e| e.id == id)
    }

    /// Quantity of an extra, `None` if the item does not offer it
    pub fn quantity_of(&self, id: i64) -> Option<u32> {
        self.get(id).map(|e| e.quantity)
    }

    /// Sum of `quantity * value` over all extras
    pub fn extras_total(&self) -> Decimal {
        self.extras.iter().map(ExtraState::subtotal).sum()
    }

    /// One more unit of `id`; unknown ids leave the ledger unchanged
    pub fn incremented(&self, id: i64) -> Self {
        self.try_incremented(id).unwrap_or_else(|_| {
            tracing::debug!(extra_id = id, "Ignoring increment of unknown extra");
            self.clone()
        })
    }

    /// One less unit of `id`, floored at 0; unknown ids leave the ledger unchanged
    pub fn decremented(&self, id: i64) -> Self {
        self.try_decremented(id).unwrap_or_else(|_| {
            tracing::debug!(extra_id = id, "Ignoring decrement of unknown extra");
            self.clone()
        })
    }

    pub fn try_incremented(&self, id: i64) -> CartResult<Self> {
        self.updated(id, |q| q.saturating_add(1))
    }

    pub fn try_decremented(&self, id: i64) -> CartResult<Self> {
        self.updated(id, |q| q.saturating_sub(1))
    }

    fn updated(&self, id: i64, f: impl Fn(u32) -> u32) -> CartResult<Self> {
        if self.get(id).is_none() {
            return Err(CartError::UnknownExtra(id));
        }

        let extras = self
            .extras
            .iter()
            .map(|extra| {
                if extra.id == id {
                    ExtraState {
                        quantity: f(extra.quantity),
                        ..extra.clone()
                    }
                } else {
                    extra.clone()
                }
            })
            .collect();

        Ok(Self { extras })
    }
}
