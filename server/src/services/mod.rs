//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the cookie/session plumbing so route handlers can
//! stay focused on protocol translation.

pub mod session;
