//! Bhasha Policy and Fact Checking
//!
//! Two classifiers over user content:
//!
//! - [`PolicyChecker`]: reviews text or images against platform community
//!   guidelines. A report either carries findings or an all-clear message,
//!   never both; the checker enforces that locally instead of trusting the
//!   model to.
//! - [`FactChecker`]: researches a statement through a [`NewsSearch`]
//!   provider (regional and English locales for non-English statements),
//!   then asks for a verdict grounded only in the found coverage. No
//!   coverage means unverifiable, decided locally.

#![warn(missing_docs)]

mod config;
mod error;
mod fact;
mod policy;
mod prompt;
mod report;
mod search;

pub use config::PolicyConfig;
pub use error::PolicyError;
pub use fact::FactChecker;
pub use policy::PolicyChecker;
pub use report::{
    Confidence, FactCheckReport, NewsArticle, PolicyReport, PolicyViolation, Verdict,
};
pub use search::{NewsSearch, SerpApiClient};
