//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client talks to the server over a small JSON auth API; everything
//! else the pages need comes from local state and the session cookie.

pub mod api;
