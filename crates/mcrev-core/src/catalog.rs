//! The program catalog — static reference data resolving program IDs to
//! display names.
//!
//! Loaded once from configuration JSON at process start and injected into
//! the codec; never mutated afterwards. Lookups that miss are not errors at
//! this level — the codec treats them fail-soft — but
//! [`ProgramCatalog::require_state`] exists for callers that want to reject
//! a bad configuration up front.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One program a state operates, e.g. a specific managed-care product line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
  pub id:        String,
  /// Short display name used in generated certification names.
  pub name:      String,
  pub full_name: String,
}

/// A state's entry in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatePrograms {
  /// Two-letter state code.
  pub code:     String,
  pub name:     String,
  pub programs: Vec<Program>,
}

/// The full catalog, covering every state that can submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramCatalog {
  pub states: Vec<StatePrograms>,
}

impl ProgramCatalog {
  /// Deserialize a catalog from its configuration JSON.
  pub fn from_json(json: &str) -> Result<Self> {
    Ok(serde_json::from_str(json)?)
  }

  /// All programs for `state_code`, or an empty slice for unknown states.
  /// Codes compare case-insensitively.
  pub fn state_programs(&self, state_code: &str) -> &[Program] {
    self
      .states
      .iter()
      .find(|s| s.code.eq_ignore_ascii_case(state_code))
      .map(|s| s.programs.as_slice())
      .unwrap_or(&[])
  }

  /// The catalog entry for `state_code`, or [`Error::UnknownState`].
  pub fn require_state(&self, state_code: &str) -> Result<&StatePrograms> {
    self
      .states
      .iter()
      .find(|s| s.code.eq_ignore_ascii_case(state_code))
      .ok_or_else(|| Error::UnknownState(state_code.to_string()))
  }

  /// Resolve one program by state and ID.
  pub fn find_program(
    &self,
    state_code: &str,
    program_id: &str,
  ) -> Option<&Program> {
    self
      .state_programs(state_code)
      .iter()
      .find(|p| p.id == program_id)
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
