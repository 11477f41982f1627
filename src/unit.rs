//! Capacity-bounded storage unit.
//!
//! A unit holds a balance that never drops below zero and never exceeds its
//! capacity. Out-of-range inputs are clamped silently instead of rejected.

use rust_decimal::Decimal;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct StorageUnit {
    capacity: Decimal,
    balance: Decimal,
}

impl StorageUnit {
    /// Builds a unit, coercing a non-positive capacity to zero and clamping
    /// the initial balance into `[0, capacity]`.
    pub fn new(capacity: Decimal, initial_balance: Decimal) -> Self {
        let capacity = capacity.max(Decimal::ZERO);
        let balance = if initial_balance < Decimal::ZERO {
            Decimal::ZERO
        } else if initial_balance <= capacity {
            initial_balance
        } else {
            // Overflow is discarded
            capacity
        };
        Self { capacity, balance }
    }

    /// Empty unit of the given capacity.
    pub fn with_capacity(capacity: Decimal) -> Self {
        Self::new(capacity, Decimal::ZERO)
    }

    pub fn capacity(&self) -> Decimal {
        self.capacity
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn remaining(&self) -> Decimal {
        self.capacity - self.balance
    }

    /// Adds `amount` to the balance, saturating at capacity.
    /// Negative amounts are ignored.
    pub fn deposit(&mut self, amount: Decimal) {
        if amount < Decimal::ZERO {
            return;
        }
        // remaining() is rounded near Decimal::MAX, so compare the sum instead
        self.balance = match self.balance.checked_add(amount) {
            Some(sum) if sum <= self.capacity => sum,
            _ => self.capacity,
        };
    }

    /// Takes up to `amount` out of the unit and returns what was actually removed.
    /// Negative amounts remove nothing.
    pub fn withdraw(&mut self, amount: Decimal) -> Decimal {
        if amount < Decimal::ZERO {
            return Decimal::ZERO;
        }
        if amount > self.balance {
            let drained = self.balance;
            self.balance = Decimal::ZERO;
            return drained;
        }
        self.balance -= amount;
        amount
    }
}

impl fmt::Display for StorageUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "balance = {}, remaining {}", self.balance, self.remaining())
    }
}
