//! Readiness gating.
//!
//! One reusable primitive, used twice with different resolved values:
//! - `Latch<()>` — channel readiness (resolved by the configuration binder);
//! - `Latch<ProviderRef>` — provider readiness (resolved by the acquirer).

mod latch;

pub use latch::Latch;
