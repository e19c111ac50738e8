//! Ticket domain
//!
//! The taxonomy, the validated ticket draft that goes upstream, and the
//! suggestion record that comes back.

pub mod category;
pub mod draft;
pub mod suggestion;
