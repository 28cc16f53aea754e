//! Wire-format message and enum definitions.
//!
//! These structs ARE the binary schema: field numbers are the compatibility
//! contract and must never be renumbered or reused. Evolution is additive
//! only — new optional fields, new enum values. Anything else is a breaking
//! change that bumps [`PROTO_VERSION`] and adds a decoder in
//! `decode::DECODERS`.
//!
//! Every enum reserves `0` for an `*_UNSPECIFIED` value, so an absent or
//! unknown field decodes to something distinguishable from real data. Wire
//! enum names are the `{PREFIX}_{VALUE}` form, where `{PREFIX}` is the
//! zero-value name minus its `_UNSPECIFIED` suffix; see
//! [`SubmissionType::as_str_name`] and friends.

use prost::{Enumeration, Message};

/// Message-family tag stamped into every envelope.
pub const PROTO_NAME: &str = "STATE_SUBMISSION";
/// Wire-schema version written by the encoder.
pub const PROTO_VERSION: u32 = 1;

// ─── Scalar sub-messages ─────────────────────────────────────────────────────

/// A calendar date with a zero-indexed month.
///
/// The zero-indexed month is a compatibility constraint from
/// historically-encoded buffers; the codec converts to one-indexed
/// [`chrono::NaiveDate`] at the boundary.
#[derive(Clone, PartialEq, Message)]
pub struct Date {
  #[prost(int32, tag = "1")]
  pub year:  i32,
  #[prost(uint32, tag = "2")]
  pub month: u32,
  #[prost(uint32, tag = "3")]
  pub day:   u32,
}

/// An instant as seconds + nanoseconds since the Unix epoch, UTC.
/// Millisecond inputs round-trip exactly.
#[derive(Clone, PartialEq, Message)]
pub struct Timestamp {
  #[prost(int64, tag = "1")]
  pub seconds: i64,
  #[prost(int32, tag = "2")]
  pub nanos:   i32,
}

// ─── Nested sub-messages ─────────────────────────────────────────────────────

#[derive(Clone, PartialEq, Message)]
pub struct Document {
  #[prost(string, tag = "1")]
  pub name:        String,
  #[prost(string, tag = "2")]
  pub storage_url: String,
  #[prost(enumeration = "DocumentCategory", repeated, tag = "3")]
  pub categories:  Vec<i32>,
}

#[derive(Clone, PartialEq, Message)]
pub struct StateContact {
  #[prost(string, tag = "1")]
  pub name:       String,
  #[prost(string, tag = "2")]
  pub title_role: String,
  #[prost(string, tag = "3")]
  pub email:      String,
}

#[derive(Clone, PartialEq, Message)]
pub struct ActuaryContact {
  #[prost(string, tag = "1")]
  pub name:                 String,
  #[prost(string, tag = "2")]
  pub title_role:           String,
  #[prost(string, tag = "3")]
  pub email:                String,
  #[prost(enumeration = "ActuarialFirm", optional, tag = "4")]
  pub actuarial_firm:       Option<i32>,
  #[prost(string, optional, tag = "5")]
  pub actuarial_firm_other: Option<String>,
}

#[derive(Clone, PartialEq, Message)]
pub struct ContractAmendmentInfo {
  #[prost(enumeration = "AmendedItem", repeated, tag = "1")]
  pub items_being_amended:    Vec<i32>,
  #[prost(string, optional, tag = "2")]
  pub other_item_description: Option<String>,
}

#[derive(Clone, PartialEq, Message)]
pub struct ContractInfo {
  #[prost(enumeration = "ContractType", optional, tag = "1")]
  pub contract_type:         Option<i32>,
  #[prost(enumeration = "ContractExecutionStatus", optional, tag = "2")]
  pub execution_status:      Option<i32>,
  #[prost(message, optional, tag = "3")]
  pub date_start:            Option<Date>,
  #[prost(message, optional, tag = "4")]
  pub date_end:              Option<Date>,
  #[prost(enumeration = "ManagedCareEntity", repeated, tag = "5")]
  pub managed_care_entities: Vec<i32>,
  #[prost(enumeration = "FederalAuthority", repeated, tag = "6")]
  pub federal_authorities:   Vec<i32>,
  #[prost(message, optional, tag = "7")]
  pub amendment_info:        Option<ContractAmendmentInfo>,
}

#[derive(Clone, PartialEq, Message)]
pub struct RateAmendmentInfo {
  #[prost(message, optional, tag = "1")]
  pub effective_date_start: Option<Date>,
  #[prost(message, optional, tag = "2")]
  pub effective_date_end:   Option<Date>,
}

#[derive(Clone, PartialEq, Message)]
pub struct RateInfo {
  #[prost(enumeration = "RateType", optional, tag = "1")]
  pub rate_type:               Option<i32>,
  #[prost(enumeration = "RateCapitationType", optional, tag = "2")]
  pub rate_capitation_type:    Option<i32>,
  #[prost(message, optional, tag = "3")]
  pub rate_date_start:         Option<Date>,
  #[prost(message, optional, tag = "4")]
  pub rate_date_end:           Option<Date>,
  #[prost(message, optional, tag = "5")]
  pub rate_date_certified:     Option<Date>,
  #[prost(message, optional, tag = "6")]
  pub rate_amendment_info:     Option<RateAmendmentInfo>,
  #[prost(message, repeated, tag = "7")]
  pub rate_documents:          Vec<Document>,
  #[prost(string, repeated, tag = "8")]
  pub rate_program_ids:        Vec<String>,
  #[prost(string, optional, tag = "9")]
  pub rate_certification_name: Option<String>,
}

// ─── Envelope ────────────────────────────────────────────────────────────────

/// The versioned envelope for one form-data revision.
#[derive(Clone, PartialEq, Message)]
pub struct FormDataProto {
  #[prost(string, tag = "1")]
  pub proto_name:    String,
  #[prost(uint32, tag = "2")]
  pub proto_version: u32,

  #[prost(string, tag = "3")]
  pub id:           String,
  #[prost(enumeration = "SubmissionStatus", tag = "4")]
  pub status:       i32,
  #[prost(string, tag = "5")]
  pub state_code:   String,
  #[prost(uint32, tag = "6")]
  pub state_number: u32,
  #[prost(string, repeated, tag = "7")]
  pub program_ids:  Vec<String>,

  #[prost(enumeration = "SubmissionType", optional, tag = "8")]
  pub submission_type:        Option<i32>,
  #[prost(string, optional, tag = "9")]
  pub submission_description: Option<String>,
  #[prost(enumeration = "PopulationCovered", optional, tag = "10")]
  pub population_covered:     Option<i32>,
  #[prost(bool, optional, tag = "11")]
  pub risk_based_contract:    Option<bool>,

  #[prost(message, optional, tag = "12")]
  pub created_at:   Option<Date>,
  #[prost(message, optional, tag = "13")]
  pub updated_at:   Option<Timestamp>,
  #[prost(message, optional, tag = "14")]
  pub submitted_at: Option<Timestamp>,

  #[prost(message, optional, tag = "15")]
  pub contract_info: Option<ContractInfo>,
  #[prost(message, repeated, tag = "16")]
  pub rate_infos:    Vec<RateInfo>,

  #[prost(message, repeated, tag = "17")]
  pub documents:          Vec<Document>,
  #[prost(message, repeated, tag = "18")]
  pub contract_documents: Vec<Document>,

  #[prost(message, repeated, tag = "19")]
  pub state_contacts:   Vec<StateContact>,
  #[prost(message, repeated, tag = "20")]
  pub actuary_contacts: Vec<ActuaryContact>,
  #[prost(enumeration = "ActuaryCommunication", optional, tag = "21")]
  pub actuary_communication_preference: Option<i32>,
}

// ─── Wire enums ──────────────────────────────────────────────────────────────

#[derive(
  Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Enumeration,
)]
#[repr(i32)]
pub enum SubmissionStatus {
  Unspecified = 0,
  Draft       = 1,
  Submitted   = 2,
}

impl SubmissionStatus {
  pub fn as_str_name(self) -> &'static str {
    match self {
      Self::Unspecified => "SUBMISSION_STATUS_UNSPECIFIED",
      Self::Draft => "SUBMISSION_STATUS_DRAFT",
      Self::Submitted => "SUBMISSION_STATUS_SUBMITTED",
    }
  }

  pub fn from_str_name(value: &str) -> Option<Self> {
    match value {
      "SUBMISSION_STATUS_UNSPECIFIED" => Some(Self::Unspecified),
      "SUBMISSION_STATUS_DRAFT" => Some(Self::Draft),
      "SUBMISSION_STATUS_SUBMITTED" => Some(Self::Submitted),
      _ => None,
    }
  }
}

#[derive(
  Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Enumeration,
)]
#[repr(i32)]
pub enum SubmissionType {
  Unspecified      = 0,
  ContractOnly     = 1,
  ContractAndRates = 2,
}

impl SubmissionType {
  pub fn as_str_name(self) -> &'static str {
    match self {
      Self::Unspecified => "SUBMISSION_TYPE_UNSPECIFIED",
      Self::ContractOnly => "SUBMISSION_TYPE_CONTRACT_ONLY",
      Self::ContractAndRates => "SUBMISSION_TYPE_CONTRACT_AND_RATES",
    }
  }

  pub fn from_str_name(value: &str) -> Option<Self> {
    match value {
      "SUBMISSION_TYPE_UNSPECIFIED" => Some(Self::Unspecified),
      "SUBMISSION_TYPE_CONTRACT_ONLY" => Some(Self::ContractOnly),
      "SUBMISSION_TYPE_CONTRACT_AND_RATES" => Some(Self::ContractAndRates),
      _ => None,
    }
  }
}

#[derive(
  Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Enumeration,
)]
#[repr(i32)]
pub enum PopulationCovered {
  Unspecified     = 0,
  Medicaid        = 1,
  Chip            = 2,
  MedicaidAndChip = 3,
}

impl PopulationCovered {
  pub fn as_str_name(self) -> &'static str {
    match self {
      Self::Unspecified => "POPULATION_COVERED_UNSPECIFIED",
      Self::Medicaid => "POPULATION_COVERED_MEDICAID",
      Self::Chip => "POPULATION_COVERED_CHIP",
      Self::MedicaidAndChip => "POPULATION_COVERED_MEDICAID_AND_CHIP",
    }
  }

  pub fn from_str_name(value: &str) -> Option<Self> {
    match value {
      "POPULATION_COVERED_UNSPECIFIED" => Some(Self::Unspecified),
      "POPULATION_COVERED_MEDICAID" => Some(Self::Medicaid),
      "POPULATION_COVERED_CHIP" => Some(Self::Chip),
      "POPULATION_COVERED_MEDICAID_AND_CHIP" => Some(Self::MedicaidAndChip),
      _ => None,
    }
  }
}

#[derive(
  Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Enumeration,
)]
#[repr(i32)]
pub enum ContractType {
  Unspecified = 0,
  Base        = 1,
  Amendment   = 2,
}

impl ContractType {
  pub fn as_str_name(self) -> &'static str {
    match self {
      Self::Unspecified => "CONTRACT_TYPE_UNSPECIFIED",
      Self::Base => "CONTRACT_TYPE_BASE",
      Self::Amendment => "CONTRACT_TYPE_AMENDMENT",
    }
  }

  pub fn from_str_name(value: &str) -> Option<Self> {
    match value {
      "CONTRACT_TYPE_UNSPECIFIED" => Some(Self::Unspecified),
      "CONTRACT_TYPE_BASE" => Some(Self::Base),
      "CONTRACT_TYPE_AMENDMENT" => Some(Self::Amendment),
      _ => None,
    }
  }
}

#[derive(
  Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Enumeration,
)]
#[repr(i32)]
pub enum ContractExecutionStatus {
  Unspecified = 0,
  Executed    = 1,
  Unexecuted  = 2,
}

impl ContractExecutionStatus {
  pub fn as_str_name(self) -> &'static str {
    match self {
      Self::Unspecified => "CONTRACT_EXECUTION_STATUS_UNSPECIFIED",
      Self::Executed => "CONTRACT_EXECUTION_STATUS_EXECUTED",
      Self::Unexecuted => "CONTRACT_EXECUTION_STATUS_UNEXECUTED",
    }
  }

  pub fn from_str_name(value: &str) -> Option<Self> {
    match value {
      "CONTRACT_EXECUTION_STATUS_UNSPECIFIED" => Some(Self::Unspecified),
      "CONTRACT_EXECUTION_STATUS_EXECUTED" => Some(Self::Executed),
      "CONTRACT_EXECUTION_STATUS_UNEXECUTED" => Some(Self::Unexecuted),
      _ => None,
    }
  }
}

#[derive(
  Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Enumeration,
)]
#[repr(i32)]
pub enum ManagedCareEntity {
  Unspecified = 0,
  Mco         = 1,
  Pihp        = 2,
  Pahp        = 3,
  Pccm        = 4,
}

impl ManagedCareEntity {
  pub fn as_str_name(self) -> &'static str {
    match self {
      Self::Unspecified => "MANAGED_CARE_ENTITY_UNSPECIFIED",
      Self::Mco => "MANAGED_CARE_ENTITY_MCO",
      Self::Pihp => "MANAGED_CARE_ENTITY_PIHP",
      Self::Pahp => "MANAGED_CARE_ENTITY_PAHP",
      Self::Pccm => "MANAGED_CARE_ENTITY_PCCM",
    }
  }

  pub fn from_str_name(value: &str) -> Option<Self> {
    match value {
      "MANAGED_CARE_ENTITY_UNSPECIFIED" => Some(Self::Unspecified),
      "MANAGED_CARE_ENTITY_MCO" => Some(Self::Mco),
      "MANAGED_CARE_ENTITY_PIHP" => Some(Self::Pihp),
      "MANAGED_CARE_ENTITY_PAHP" => Some(Self::Pahp),
      "MANAGED_CARE_ENTITY_PCCM" => Some(Self::Pccm),
      _ => None,
    }
  }
}

#[derive(
  Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Enumeration,
)]
#[repr(i32)]
pub enum FederalAuthority {
  Unspecified = 0,
  StatePlan   = 1,
  Waiver1915b = 2,
  Waiver1115  = 3,
  Voluntary   = 4,
  Benchmark   = 5,
  TitleXxi    = 6,
}

impl FederalAuthority {
  pub fn as_str_name(self) -> &'static str {
    match self {
      Self::Unspecified => "FEDERAL_AUTHORITY_UNSPECIFIED",
      Self::StatePlan => "FEDERAL_AUTHORITY_STATE_PLAN",
      Self::Waiver1915b => "FEDERAL_AUTHORITY_WAIVER_1915B",
      Self::Waiver1115 => "FEDERAL_AUTHORITY_WAIVER_1115",
      Self::Voluntary => "FEDERAL_AUTHORITY_VOLUNTARY",
      Self::Benchmark => "FEDERAL_AUTHORITY_BENCHMARK",
      Self::TitleXxi => "FEDERAL_AUTHORITY_TITLE_XXI",
    }
  }

  pub fn from_str_name(value: &str) -> Option<Self> {
    match value {
      "FEDERAL_AUTHORITY_UNSPECIFIED" => Some(Self::Unspecified),
      "FEDERAL_AUTHORITY_STATE_PLAN" => Some(Self::StatePlan),
      "FEDERAL_AUTHORITY_WAIVER_1915B" => Some(Self::Waiver1915b),
      "FEDERAL_AUTHORITY_WAIVER_1115" => Some(Self::Waiver1115),
      "FEDERAL_AUTHORITY_VOLUNTARY" => Some(Self::Voluntary),
      "FEDERAL_AUTHORITY_BENCHMARK" => Some(Self::Benchmark),
      "FEDERAL_AUTHORITY_TITLE_XXI" => Some(Self::TitleXxi),
      _ => None,
    }
  }
}

#[derive(
  Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Enumeration,
)]
#[repr(i32)]
pub enum AmendedItem {
  Unspecified          = 0,
  BenefitsProvided     = 1,
  CapitationRates      = 2,
  EncounterData        = 3,
  EnrollmentProcess    = 4,
  FinancialIncentives  = 5,
  GeoAreaServed        = 6,
  GrievancesAndAppeals = 7,
  LengthOfContract     = 8,
  NonRiskPayment       = 9,
  ProgramIntegrity     = 10,
  QualityStandards     = 11,
  RiskSharingMechanism = 12,
  Other                = 13,
}

impl AmendedItem {
  pub fn as_str_name(self) -> &'static str {
    match self {
      Self::Unspecified => "AMENDED_ITEM_UNSPECIFIED",
      Self::BenefitsProvided => "AMENDED_ITEM_BENEFITS_PROVIDED",
      Self::CapitationRates => "AMENDED_ITEM_CAPITATION_RATES",
      Self::EncounterData => "AMENDED_ITEM_ENCOUNTER_DATA",
      Self::EnrollmentProcess => "AMENDED_ITEM_ENROLLMENT_PROCESS",
      Self::FinancialIncentives => "AMENDED_ITEM_FINANCIAL_INCENTIVES",
      Self::GeoAreaServed => "AMENDED_ITEM_GEO_AREA_SERVED",
      Self::GrievancesAndAppeals => "AMENDED_ITEM_GRIEVANCES_AND_APPEALS",
      Self::LengthOfContract => "AMENDED_ITEM_LENGTH_OF_CONTRACT",
      Self::NonRiskPayment => "AMENDED_ITEM_NON_RISK_PAYMENT",
      Self::ProgramIntegrity => "AMENDED_ITEM_PROGRAM_INTEGRITY",
      Self::QualityStandards => "AMENDED_ITEM_QUALITY_STANDARDS",
      Self::RiskSharingMechanism => "AMENDED_ITEM_RISK_SHARING_MECHANISM",
      Self::Other => "AMENDED_ITEM_OTHER",
    }
  }

  pub fn from_str_name(value: &str) -> Option<Self> {
    match value {
      "AMENDED_ITEM_UNSPECIFIED" => Some(Self::Unspecified),
      "AMENDED_ITEM_BENEFITS_PROVIDED" => Some(Self::BenefitsProvided),
      "AMENDED_ITEM_CAPITATION_RATES" => Some(Self::CapitationRates),
      "AMENDED_ITEM_ENCOUNTER_DATA" => Some(Self::EncounterData),
      "AMENDED_ITEM_ENROLLMENT_PROCESS" => Some(Self::EnrollmentProcess),
      "AMENDED_ITEM_FINANCIAL_INCENTIVES" => Some(Self::FinancialIncentives),
      "AMENDED_ITEM_GEO_AREA_SERVED" => Some(Self::GeoAreaServed),
      "AMENDED_ITEM_GRIEVANCES_AND_APPEALS" => Some(Self::GrievancesAndAppeals),
      "AMENDED_ITEM_LENGTH_OF_CONTRACT" => Some(Self::LengthOfContract),
      "AMENDED_ITEM_NON_RISK_PAYMENT" => Some(Self::NonRiskPayment),
      "AMENDED_ITEM_PROGRAM_INTEGRITY" => Some(Self::ProgramIntegrity),
      "AMENDED_ITEM_QUALITY_STANDARDS" => Some(Self::QualityStandards),
      "AMENDED_ITEM_RISK_SHARING_MECHANISM" => Some(Self::RiskSharingMechanism),
      "AMENDED_ITEM_OTHER" => Some(Self::Other),
      _ => None,
    }
  }
}

#[derive(
  Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Enumeration,
)]
#[repr(i32)]
pub enum RateType {
  Unspecified = 0,
  New         = 1,
  Amendment   = 2,
}

impl RateType {
  pub fn as_str_name(self) -> &'static str {
    match self {
      Self::Unspecified => "RATE_TYPE_UNSPECIFIED",
      Self::New => "RATE_TYPE_NEW",
      Self::Amendment => "RATE_TYPE_AMENDMENT",
    }
  }

  pub fn from_str_name(value: &str) -> Option<Self> {
    match value {
      "RATE_TYPE_UNSPECIFIED" => Some(Self::Unspecified),
      "RATE_TYPE_NEW" => Some(Self::New),
      "RATE_TYPE_AMENDMENT" => Some(Self::Amendment),
      _ => None,
    }
  }
}

#[derive(
  Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Enumeration,
)]
#[repr(i32)]
pub enum RateCapitationType {
  Unspecified = 0,
  RateCell    = 1,
  RateRange   = 2,
}

impl RateCapitationType {
  pub fn as_str_name(self) -> &'static str {
    match self {
      Self::Unspecified => "RATE_CAPITATION_TYPE_UNSPECIFIED",
      Self::RateCell => "RATE_CAPITATION_TYPE_RATE_CELL",
      Self::RateRange => "RATE_CAPITATION_TYPE_RATE_RANGE",
    }
  }

  pub fn from_str_name(value: &str) -> Option<Self> {
    match value {
      "RATE_CAPITATION_TYPE_UNSPECIFIED" => Some(Self::Unspecified),
      "RATE_CAPITATION_TYPE_RATE_CELL" => Some(Self::RateCell),
      "RATE_CAPITATION_TYPE_RATE_RANGE" => Some(Self::RateRange),
      _ => None,
    }
  }
}

#[derive(
  Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Enumeration,
)]
#[repr(i32)]
pub enum DocumentCategory {
  Unspecified     = 0,
  Contract        = 1,
  Rates           = 2,
  ContractRelated = 3,
  RatesRelated    = 4,
}

impl DocumentCategory {
  pub fn as_str_name(self) -> &'static str {
    match self {
      Self::Unspecified => "DOCUMENT_CATEGORY_UNSPECIFIED",
      Self::Contract => "DOCUMENT_CATEGORY_CONTRACT",
      Self::Rates => "DOCUMENT_CATEGORY_RATES",
      Self::ContractRelated => "DOCUMENT_CATEGORY_CONTRACT_RELATED",
      Self::RatesRelated => "DOCUMENT_CATEGORY_RATES_RELATED",
    }
  }

  pub fn from_str_name(value: &str) -> Option<Self> {
    match value {
      "DOCUMENT_CATEGORY_UNSPECIFIED" => Some(Self::Unspecified),
      "DOCUMENT_CATEGORY_CONTRACT" => Some(Self::Contract),
      "DOCUMENT_CATEGORY_RATES" => Some(Self::Rates),
      "DOCUMENT_CATEGORY_CONTRACT_RELATED" => Some(Self::ContractRelated),
      "DOCUMENT_CATEGORY_RATES_RELATED" => Some(Self::RatesRelated),
      _ => None,
    }
  }
}

#[derive(
  Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Enumeration,
)]
#[repr(i32)]
pub enum ActuarialFirm {
  Unspecified  = 0,
  Mercer       = 1,
  Milliman     = 2,
  Optumas      = 3,
  Guidehouse   = 4,
  Deloitte     = 5,
  StateInHouse = 6,
  Other        = 7,
}

impl ActuarialFirm {
  pub fn as_str_name(self) -> &'static str {
    match self {
      Self::Unspecified => "ACTUARIAL_FIRM_UNSPECIFIED",
      Self::Mercer => "ACTUARIAL_FIRM_MERCER",
      Self::Milliman => "ACTUARIAL_FIRM_MILLIMAN",
      Self::Optumas => "ACTUARIAL_FIRM_OPTUMAS",
      Self::Guidehouse => "ACTUARIAL_FIRM_GUIDEHOUSE",
      Self::Deloitte => "ACTUARIAL_FIRM_DELOITTE",
      Self::StateInHouse => "ACTUARIAL_FIRM_STATE_IN_HOUSE",
      Self::Other => "ACTUARIAL_FIRM_OTHER",
    }
  }

  pub fn from_str_name(value: &str) -> Option<Self> {
    match value {
      "ACTUARIAL_FIRM_UNSPECIFIED" => Some(Self::Unspecified),
      "ACTUARIAL_FIRM_MERCER" => Some(Self::Mercer),
      "ACTUARIAL_FIRM_MILLIMAN" => Some(Self::Milliman),
      "ACTUARIAL_FIRM_OPTUMAS" => Some(Self::Optumas),
      "ACTUARIAL_FIRM_GUIDEHOUSE" => Some(Self::Guidehouse),
      "ACTUARIAL_FIRM_DELOITTE" => Some(Self::Deloitte),
      "ACTUARIAL_FIRM_STATE_IN_HOUSE" => Some(Self::StateInHouse),
      "ACTUARIAL_FIRM_OTHER" => Some(Self::Other),
      _ => None,
    }
  }
}

#[derive(
  Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Enumeration,
)]
#[repr(i32)]
pub enum ActuaryCommunication {
  Unspecified   = 0,
  OactToActuary = 1,
  OactToState   = 2,
}

impl ActuaryCommunication {
  pub fn as_str_name(self) -> &'static str {
    match self {
      Self::Unspecified => "ACTUARY_COMMUNICATION_UNSPECIFIED",
      Self::OactToActuary => "ACTUARY_COMMUNICATION_OACT_TO_ACTUARY",
      Self::OactToState => "ACTUARY_COMMUNICATION_OACT_TO_STATE",
    }
  }

  pub fn from_str_name(value: &str) -> Option<Self> {
    match value {
      "ACTUARY_COMMUNICATION_UNSPECIFIED" => Some(Self::Unspecified),
      "ACTUARY_COMMUNICATION_OACT_TO_ACTUARY" => Some(Self::OactToActuary),
      "ACTUARY_COMMUNICATION_OACT_TO_STATE" => Some(Self::OactToState),
      _ => None,
    }
  }
}
