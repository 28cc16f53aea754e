//! Rate certification blocks.
//!
//! A contract-and-rates submission carries one block per rate certification.
//! Contract-only submissions carry none; that absence is itself the valid
//! state (see [`crate::validate::has_valid_rates`]).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::documents::Document;

/// Whether the certification is new or amends a previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RateType {
  New,
  Amendment,
}

/// How the certified rates are expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RateCapitationType {
  RateCell,
  RateRange,
}

/// The period a rate amendment takes effect over.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RateAmendmentInfo {
  pub effective_date_start: Option<NaiveDate>,
  pub effective_date_end:   Option<NaiveDate>,
}

/// One rate certification within a submission.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RateInfo {
  pub rate_type:               Option<RateType>,
  pub rate_capitation_type:    Option<RateCapitationType>,
  pub rate_date_start:         Option<NaiveDate>,
  pub rate_date_end:           Option<NaiveDate>,
  pub rate_date_certified:     Option<NaiveDate>,
  pub rate_amendment_info:     Option<RateAmendmentInfo>,
  pub rate_documents:          Vec<Document>,
  /// Programs this certification covers. Empty means "the submission's
  /// programs".
  pub rate_program_ids:        Vec<String>,
  /// Display name, recomputed by the codec on every encode. Values supplied
  /// by callers are overwritten.
  pub rate_certification_name: Option<String>,
}
