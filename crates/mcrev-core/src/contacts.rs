//! Contact records attached to a submission.

use serde::{Deserialize, Serialize};

/// A state employee responsible for the submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateContact {
  pub name:       String,
  pub title_role: String,
  pub email:      String,
}

/// The actuarial firm an actuary contact is affiliated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActuarialFirm {
  Mercer,
  Milliman,
  Optumas,
  Guidehouse,
  Deloitte,
  StateInHouse,
  Other,
}

/// How the federal Office of the Actuary should route questions about the
/// rate certifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActuaryCommunication {
  OactToActuary,
  OactToState,
}

/// An actuary certifying the submission's rates; carries firm affiliation
/// on top of the plain contact fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActuaryContact {
  pub name:                 String,
  pub title_role:           String,
  pub email:                String,
  pub actuarial_firm:       Option<ActuarialFirm>,
  /// Free-text firm name when `actuarial_firm` is [`ActuarialFirm::Other`].
  pub actuarial_firm_other: Option<String>,
}
