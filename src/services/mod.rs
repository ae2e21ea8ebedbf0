//! Rules core. Each function takes an explicit pool handle and runs as a
//! request-scoped operation; check-then-write sequences are wrapped in a
//! single transaction.

pub mod events;
pub mod guests;
pub mod hidden;
pub mod visibility;
