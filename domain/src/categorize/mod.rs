//! Category normalization
//!
//! Maps arbitrary model output onto the closed taxonomy. The mapping is
//! total: every input, including none at all, yields a [`Category`].
//!
//! Resolution order:
//!
//! 1. Blank or missing text → [`Category::GeneralFeedback`]
//! 2. Exact label match (trimmed, case-insensitive)
//! 3. First matching entry of [`COERCION_RULES`]
//! 4. [`Category::GeneralFeedback`]
//!
//! [`Category`]: crate::Category
//! [`Category::GeneralFeedback`]: crate::Category::GeneralFeedback

mod normalizer;
mod rule;

pub use normalizer::{Normalized, normalize};
pub use rule::{COERCION_RULES, CoercionRule};
