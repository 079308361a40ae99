//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration — the guard mirror, API
//! calls, local reducers — and delegates rendering details to `components`.

pub mod dashboard;
pub mod fna;
pub mod login;
pub mod prospect;
