use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::{Error, StorageUnit};

/// Registry of storage units keyed by an id that is allocated by the store.
/// Ids start at 1, increase monotonically and are never reused, even after
/// the unit holding them is deleted.
#[derive(Debug, Default)]
pub struct UnitsStore {
    units: HashMap<u64, StorageUnit>,
    last_id: u64,
}

impl UnitsStore {
    pub fn new() -> Self {
        Self {
            units: HashMap::new(),
            last_id: 0,
        }
    }

    fn next_id(&mut self) -> u64 {
        self.last_id += 1;
        self.last_id
    }

    /// Builds a new unit and stores it under a freshly allocated id.
    pub fn create(&mut self, capacity: Decimal, initial_balance: Decimal) -> u64 {
        let id = self.next_id();
        self.units.insert(id, StorageUnit::new(capacity, initial_balance));
        id
    }

    /// Replaces the unit with one of the new capacity, carrying over the
    /// current balance under the usual clamp rule.
    pub fn edit(&mut self, id: u64, capacity: Decimal) -> Result<(), Error> {
        let unit = self.get_mut(id)?;
        *unit = StorageUnit::new(capacity, unit.balance());
        Ok(())
    }

    pub fn delete(&mut self, id: u64) -> Result<(), Error> {
        self.units
            .remove(&id)
            .map(|_| ())
            .ok_or(Error::UnitNotFound(id))
    }

    pub fn get(&self, id: u64) -> Option<&StorageUnit> {
        self.units.get(&id)
    }

    /// Gets a unit entry, or returns an error if it doesn't exist.
    pub fn get_mut(&mut self, id: u64) -> Result<&mut StorageUnit, Error> {
        self.units.get_mut(&id).ok_or(Error::UnitNotFound(id))
    }

    pub fn deposit(&mut self, id: u64, amount: Decimal) -> Result<(), Error> {
        self.get_mut(id)?.deposit(amount);
        Ok(())
    }

    /// Returns the amount actually removed from the unit.
    pub fn withdraw(&mut self, id: u64, amount: Decimal) -> Result<Decimal, Error> {
        Ok(self.get_mut(id)?.withdraw(amount))
    }

    /// Iterates over all entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &StorageUnit)> {
        self.units.iter().map(|(id, unit)| (*id, unit))
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_new_store_is_empty() {
        let store = UnitsStore::new();
        assert!(store.is_empty());
        assert!(store.get(1).is_none());
    }

    #[test]
    fn test_create_allocates_sequential_ids() {
        let mut store = UnitsStore::new();
        assert_eq!(store.create(dec!(100), dec!(0)), 1);
        assert_eq!(store.create(dec!(50), dec!(10)), 2);
        assert_eq!(store.create(dec!(10), dec!(0)), 3);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let mut store = UnitsStore::new();
        let first = store.create(dec!(10), dec!(0));
        store.delete(first).unwrap();
        assert_eq!(store.create(dec!(10), dec!(0)), 2);
    }

    #[test]
    fn test_deposit_then_drain() {
        let mut store = UnitsStore::new();
        let id = store.create(dec!(100), dec!(0));
        assert_eq!(id, 1);

        store.deposit(id, dec!(50)).unwrap();
        assert_eq!(store.get(id).unwrap().balance(), dec!(50));

        assert_eq!(store.withdraw(id, dec!(1000)).unwrap(), dec!(50));
        assert_eq!(store.get(id).unwrap().balance(), Decimal::ZERO);
    }

    #[test]
    fn test_create_clamps_inputs() {
        let mut store = UnitsStore::new();

        let id = store.create(dec!(-100), dec!(0));
        let unit = store.get(id).unwrap();
        assert_eq!(unit.capacity(), Decimal::ZERO);
        assert_eq!(unit.balance(), Decimal::ZERO);

        let id = store.create(dec!(100), dec!(-50.7));
        let unit = store.get(id).unwrap();
        assert_eq!(unit.capacity(), dec!(100));
        assert_eq!(unit.balance(), Decimal::ZERO);
    }

    #[test]
    fn test_edit_keeps_balance() {
        let mut store = UnitsStore::new();
        let id = store.create(dec!(100), dec!(50));
        store.edit(id, dec!(200)).unwrap();

        let unit = store.get(id).unwrap();
        assert_eq!(unit.capacity(), dec!(200));
        assert_eq!(unit.balance(), dec!(50));
    }

    #[test]
    fn test_edit_below_balance_saturates() {
        let mut store = UnitsStore::new();
        let id = store.create(dec!(100), dec!(80));
        store.edit(id, dec!(30)).unwrap();

        let unit = store.get(id).unwrap();
        assert_eq!(unit.capacity(), dec!(30));
        assert_eq!(unit.balance(), dec!(30));
    }

    #[test]
    fn test_edit_to_negative_capacity_empties_unit() {
        let mut store = UnitsStore::new();
        let id = store.create(dec!(100), dec!(80));
        store.edit(id, dec!(-5)).unwrap();

        let unit = store.get(id).unwrap();
        assert_eq!(unit.capacity(), Decimal::ZERO);
        assert_eq!(unit.balance(), Decimal::ZERO);
    }

    #[test]
    fn test_delete_removes_entry() {
        let mut store = UnitsStore::new();
        let id = store.create(dec!(100), dec!(0));
        store.delete(id).unwrap();
        assert!(store.get(id).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_unknown_id_operations_fail_without_side_effects() {
        let mut store = UnitsStore::new();
        let id = store.create(dec!(100), dec!(10));

        assert_eq!(store.edit(999, dec!(5)), Err(Error::UnitNotFound(999)));
        assert_eq!(store.delete(999), Err(Error::UnitNotFound(999)));
        assert_eq!(store.deposit(999, dec!(5)), Err(Error::UnitNotFound(999)));
        assert_eq!(store.withdraw(999, dec!(5)), Err(Error::UnitNotFound(999)));

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(id).unwrap().balance(), dec!(10));
    }

    #[test]
    fn test_iter_yields_all_entries() {
        let mut store = UnitsStore::new();
        store.create(dec!(10), dec!(1));
        store.create(dec!(20), dec!(2));

        let mut ids: Vec<_> = store.iter().map(|(id, _)| id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2]);
    }
}
