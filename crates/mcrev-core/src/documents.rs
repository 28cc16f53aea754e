//! Submission documents and their category tags.

use serde::{Deserialize, Serialize};

/// What a document pertains to. A supporting document must carry at least
/// one category before the submission can lock; contract-only submissions
/// restrict supporting documents to contract-related categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentCategory {
  Contract,
  Rates,
  ContractRelated,
  RatesRelated,
}

/// A document attached to a submission. Only metadata lives here; the bytes
/// stay in external storage behind the locator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
  pub name:        String,
  /// Opaque storage locator (e.g. an S3 URL); never dereferenced by this
  /// crate.
  pub storage_url: String,
  pub categories:  Vec<DocumentCategory>,
}
