//! Storage collaborator.
//!
//! `Ledger` is the minimal account-store surface the client needs: allocate a
//! fixed-size slot once, write it once, read one slot, scan by exact size.
//! The network transport that usually backs these calls is out of scope;
//! `MemoryLedger` provides the same allocate-once and write-once semantics
//! in-process for tests and local tooling.

use std::collections::HashMap;
use std::sync::RwLock;

use anchor_lang::prelude::Pubkey;
use thiserror::Error;

/// Slot identity. Caller-chosen and unique per record, like an account key.
pub type SlotId = Pubkey;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("slot {0} is already allocated")]
    AlreadyAllocated(SlotId),

    #[error("slot {0} was already written")]
    AlreadyWritten(SlotId),

    #[error("slot {0} is not allocated")]
    Unallocated(SlotId),

    #[error("slot {slot}: record of {len} bytes exceeds slot size {size}")]
    Oversize { slot: SlotId, len: usize, size: usize },
}

/// Account-store surface. Slots are exclusively owned by the single caller
/// that initializes them; once written they are read-only and safe to share
/// across concurrent scans.
pub trait Ledger {
    /// Allocates a zero-filled slot of exactly `size` bytes, permanently
    /// retained on behalf of `funder`. Fails if the slot already exists.
    fn allocate_slot(&self, slot: SlotId, size: usize, funder: Pubkey)
        -> Result<(), LedgerError>;

    /// Writes a slot exactly once. The slot keeps its allocated size; bytes
    /// past the record stay zero.
    fn write_slot(&self, slot: SlotId, bytes: &[u8]) -> Result<(), LedgerError>;

    /// Full slot contents, or `None` if the slot was never allocated.
    fn read_slot(&self, slot: SlotId) -> Option<Vec<u8>>;

    /// All allocated slots, optionally restricted to slots of an exact size.
    /// Uninitialized (still zero-filled) slots are included; readers exclude
    /// them through the schema tag check.
    fn scan_slots(&self, size_filter: Option<usize>) -> Vec<(SlotId, Vec<u8>)>;
}

struct Slot {
    data: Vec<u8>,
    funder: Pubkey,
    written: bool,
}

/// In-process ledger with the same create-once semantics as the chain.
#[derive(Default)]
pub struct MemoryLedger {
    slots: RwLock<HashMap<SlotId, Slot>>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Identity that funded a slot's allocation, if the slot exists.
    pub fn funder_of(&self, slot: SlotId) -> Option<Pubkey> {
        let slots = self.slots.read().expect("ledger lock poisoned");
        slots.get(&slot).map(|entry| entry.funder)
    }
}

impl Ledger for MemoryLedger {
    fn allocate_slot(
        &self,
        slot: SlotId,
        size: usize,
        funder: Pubkey,
    ) -> Result<(), LedgerError> {
        let mut slots = self.slots.write().expect("ledger lock poisoned");
        if slots.contains_key(&slot) {
            return Err(LedgerError::AlreadyAllocated(slot));
        }
        slots.insert(
            slot,
            Slot {
                data: vec![0u8; size],
                funder,
                written: false,
            },
        );
        Ok(())
    }

    fn write_slot(&self, slot: SlotId, bytes: &[u8]) -> Result<(), LedgerError> {
        let mut slots = self.slots.write().expect("ledger lock poisoned");
        let entry = slots.get_mut(&slot).ok_or(LedgerError::Unallocated(slot))?;
        if entry.written {
            return Err(LedgerError::AlreadyWritten(slot));
        }
        if bytes.len() > entry.data.len() {
            return Err(LedgerError::Oversize {
                slot,
                len: bytes.len(),
                size: entry.data.len(),
            });
        }
        entry.data[..bytes.len()].copy_from_slice(bytes);
        entry.written = true;
        Ok(())
    }

    fn read_slot(&self, slot: SlotId) -> Option<Vec<u8>> {
        let slots = self.slots.read().expect("ledger lock poisoned");
        slots.get(&slot).map(|entry| entry.data.clone())
    }

    fn scan_slots(&self, size_filter: Option<usize>) -> Vec<(SlotId, Vec<u8>)> {
        let slots = self.slots.read().expect("ledger lock poisoned");
        slots
            .iter()
            .filter(|(_, entry)| size_filter.map_or(true, |size| entry.data.len() == size))
            .map(|(id, entry)| (*id, entry.data.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocate_is_create_once() {
        let ledger = MemoryLedger::new();
        let slot = Pubkey::new_unique();
        let funder = Pubkey::new_unique();
        ledger.allocate_slot(slot, 64, funder).unwrap();
        assert_eq!(ledger.funder_of(slot), Some(funder));
        assert!(matches!(
            ledger.allocate_slot(slot, 64, funder),
            Err(LedgerError::AlreadyAllocated(s)) if s == slot
        ));
    }

    #[test]
    fn write_is_write_once_and_keeps_slot_size() {
        let ledger = MemoryLedger::new();
        let slot = Pubkey::new_unique();
        ledger.allocate_slot(slot, 16, Pubkey::new_unique()).unwrap();
        ledger.write_slot(slot, &[7u8; 4]).unwrap();

        let data = ledger.read_slot(slot).unwrap();
        assert_eq!(data.len(), 16);
        assert_eq!(&data[..4], &[7u8; 4]);
        assert_eq!(&data[4..], &[0u8; 12]);

        assert!(matches!(
            ledger.write_slot(slot, &[9u8; 4]),
            Err(LedgerError::AlreadyWritten(_))
        ));
    }

    #[test]
    fn scan_filters_by_exact_size() {
        let ledger = MemoryLedger::new();
        let funder = Pubkey::new_unique();
        ledger.allocate_slot(Pubkey::new_unique(), 8, funder).unwrap();
        ledger.allocate_slot(Pubkey::new_unique(), 8, funder).unwrap();
        ledger.allocate_slot(Pubkey::new_unique(), 32, funder).unwrap();

        assert_eq!(ledger.scan_slots(Some(8)).len(), 2);
        assert_eq!(ledger.scan_slots(Some(32)).len(), 1);
        assert_eq!(ledger.scan_slots(None).len(), 3);
    }
}
