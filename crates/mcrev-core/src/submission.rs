//! The form-data aggregate — one revision of a state's managed-care plan
//! submission.
//!
//! A revision is either a draft ("unlocked": edited field-by-field) or
//! submitted ("locked": an immutable snapshot; later edits create a new
//! revision). The lifecycle is a tagged union so the submission timestamp
//! exists exactly when the status says it must.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{
  contacts::{ActuaryCommunication, ActuaryContact, StateContact},
  contract::ContractInfo,
  documents::Document,
  rates::RateInfo,
};

// ─── Submission-level enums ──────────────────────────────────────────────────

/// Whether the submission covers a contract action alone or a contract
/// action together with rate certifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionType {
  ContractOnly,
  ContractAndRates,
}

/// The population the contracted program covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PopulationCovered {
  Medicaid,
  Chip,
  MedicaidAndChip,
}

// ─── FormData ────────────────────────────────────────────────────────────────

/// The fields shared by draft and submitted revisions.
///
/// Everything past the identity block is optional until submission; the
/// predicates in [`crate::validate`] decide when a draft is complete enough
/// to lock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormData {
  /// Opaque identifier assigned by the caller.
  pub id:           String,
  /// Two-letter state code, e.g. `"MN"`.
  pub state_code:   String,
  /// Positive per-state submission sequence number.
  pub state_number: u32,
  /// Ordered program references, resolved against the program catalog.
  pub program_ids:  Vec<String>,

  pub submission_type:        SubmissionType,
  pub submission_description: Option<String>,
  pub population_covered:     Option<PopulationCovered>,
  pub risk_based_contract:    Option<bool>,

  pub contract_info: Option<ContractInfo>,
  pub rate_infos:    Vec<RateInfo>,

  /// Supporting documents; each needs at least one category tag before the
  /// submission can lock.
  pub documents:          Vec<Document>,
  pub contract_documents: Vec<Document>,

  pub state_contacts:                   Vec<StateContact>,
  pub actuary_contacts:                 Vec<ActuaryContact>,
  pub actuary_communication_preference: Option<ActuaryCommunication>,

  /// Date-only precision by contract with the storage layer.
  pub created_at: NaiveDate,
  pub updated_at: DateTime<Utc>,
}

// ─── Lifecycle union ─────────────────────────────────────────────────────────

/// One revision of a submission, tagged by lifecycle state.
///
/// A draft never carries a submission timestamp; a submitted revision always
/// does. Both halves of that invariant are structural here rather than
/// checked at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HealthPlanFormData {
  /// Unlocked: editable field-by-field.
  Draft { form: FormData },
  /// Locked: immutable, stamped at the moment of submission.
  Submitted {
    form:         FormData,
    submitted_at: DateTime<Utc>,
  },
}

impl HealthPlanFormData {
  /// The shared form fields, whichever lifecycle state the revision is in.
  pub fn form(&self) -> &FormData {
    match self {
      Self::Draft { form } | Self::Submitted { form, .. } => form,
    }
  }

  pub fn submitted_at(&self) -> Option<DateTime<Utc>> {
    match self {
      Self::Draft { .. } => None,
      Self::Submitted { submitted_at, .. } => Some(*submitted_at),
    }
  }

  /// Lock a draft, stamping the submission timestamp. Submitting an
  /// already-submitted revision is a no-op that keeps the original stamp.
  pub fn submit(self, at: DateTime<Utc>) -> Self {
    match self {
      Self::Draft { form } => Self::Submitted { form, submitted_at: at },
      locked @ Self::Submitted { .. } => locked,
    }
  }
}
