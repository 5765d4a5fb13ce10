//! Accessor for the memory-protection override register a fault handler may
//! leave behind in battery-backed early storage. The `latch` module owns the
//! one-byte wire protocol (validity marker plus toggle bit) and the read and
//! clear operations layered on it; the `store` module provides the
//! byte-addressed early-store capability those operations run against, along
//! with an in-memory bank for tests and hosted callers.

pub mod latch;
pub mod store;

pub use latch::{LatchError, LatchResult, OverrideLatch, RawLatch, SettingToken};
pub use store::{CmosBank, EarlyStore};
