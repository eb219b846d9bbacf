//! Id-keyed collection operations shared by the slice reducers
//!
//! Missing ids are a no-op for both remove and replace; the return value
//! tells the caller whether anything changed. A record without a usable id
//! never matches.

use crate::domain_models::{Record, RecordId};

pub fn append<T: Record>(records: &mut Vec<T>, record: T) {
    records.push(record);
}

/// Remove the first record with `id`
pub fn remove_by_id<T: Record>(records: &mut Vec<T>, id: &RecordId) -> bool {
    match records.iter().position(|r| r.id().as_ref() == Some(id)) {
        Some(index) => {
            records.remove(index);
            true
        }
        None => false,
    }
}

/// Replace the first record whose id matches `record`'s
pub fn replace_by_id<T: Record>(records: &mut [T], record: T) -> bool {
    let Some(id) = record.id() else {
        return false;
    };

    match records.iter_mut().find(|r| r.id().as_ref() == Some(&id)) {
        Some(slot) => {
            *slot = record;
            true
        }
        None => false,
    }
}
