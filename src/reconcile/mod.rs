//! Record reconciliation.
//!
//! Computes the minimal set of delete and create calls that makes the
//! provider's prefix-scoped records match the discovered candidate set,
//! then applies the plan best-effort: deletes first, then creates, and a
//! failed call never aborts the rest of the batch.

pub mod functions;
pub mod types;
