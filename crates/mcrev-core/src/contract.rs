//! The contract-action block of a submission.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ─── Enums ───────────────────────────────────────────────────────────────────

/// Whether the action is a new base contract or an amendment to one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContractType {
  Base,
  Amendment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContractExecutionStatus {
  Executed,
  Unexecuted,
}

/// Entity kinds a managed-care contract may cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ManagedCareEntity {
  Mco,
  Pihp,
  Pahp,
  Pccm,
}

/// Federal authorities under which the state operates its program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FederalAuthority {
  StatePlan,
  #[serde(rename = "WAIVER_1915B")]
  Waiver1915b,
  #[serde(rename = "WAIVER_1115")]
  Waiver1115,
  Voluntary,
  Benchmark,
  TitleXxi,
}

/// A provision category touched by a contract amendment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AmendedItem {
  BenefitsProvided,
  CapitationRates,
  EncounterData,
  EnrollmentProcess,
  FinancialIncentives,
  GeoAreaServed,
  GrievancesAndAppeals,
  LengthOfContract,
  NonRiskPayment,
  ProgramIntegrity,
  QualityStandards,
  RiskSharingMechanism,
  Other,
}

// ─── Blocks ──────────────────────────────────────────────────────────────────

/// What a contract amendment changes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContractAmendmentInfo {
  pub items_being_amended:    Vec<AmendedItem>,
  /// Free text describing an [`AmendedItem::Other`] entry.
  pub other_item_description: Option<String>,
}

/// The contract-action block. Every field is optional while the submission
/// is a draft; [`crate::validate::has_valid_contract`] decides completeness.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContractInfo {
  pub contract_type:         Option<ContractType>,
  pub execution_status:      Option<ContractExecutionStatus>,
  pub date_start:            Option<NaiveDate>,
  pub date_end:              Option<NaiveDate>,
  pub managed_care_entities: Vec<ManagedCareEntity>,
  pub federal_authorities:   Vec<FederalAuthority>,
  pub amendment_info:        Option<ContractAmendmentInfo>,
}
