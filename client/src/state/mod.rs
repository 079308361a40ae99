//! Client-side state modules.
//!
//! DESIGN
//! ======
//! Form-page state lives in an explicit reducer with named transitions
//! instead of ad-hoc component flags, so the allowed state changes are
//! enumerable and testable without a DOM.

pub mod fna;
