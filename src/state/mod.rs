//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `toast`) so individual components can
//! depend on small focused models. Authorization is derived from `auth` on
//! every check rather than cached anywhere.

pub mod auth;
pub mod toast;
