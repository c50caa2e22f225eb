#![forbid(unsafe_code)]

use super::super::super::super::StoreError;
use super::super::sql;
use rusqlite::Transaction;

// v1: the pre-garden table set. Kept verbatim so fresh databases and adopted
// legacy databases share one lineage.
pub(super) fn apply(tx: &Transaction<'_>) -> Result<(), StoreError> {
    tx.execute_batch(sql::legacy::SQL)?;
    Ok(())
}
