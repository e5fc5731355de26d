//! Bhasha Bulk Checker
//!
//! Runs the correction engine over a batch of URLs at once. Each URL's
//! content is fetched through a [`ContentSource`](bhasha_extract::ContentSource)
//! (video titles, post captions), checked in the requested language plus an
//! English spelling pass for mixed-script content, and reported as one
//! independent [`BulkCheckResult`](bhasha_domain::BulkCheckResult). One bad
//! URL never takes down the batch.
//!
//! The [`UrlChecker`] covers the single-article case: it verifies the
//! caller's language choice against the detector before correcting, and
//! reports the primary and English results separately.

#![warn(missing_docs)]

mod checker;
mod error;
mod url_check;

pub use checker::BulkChecker;
pub use error::BulkError;
pub use url_check::{UrlCheckReport, UrlChecker};
