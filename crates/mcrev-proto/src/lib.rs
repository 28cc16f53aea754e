//! Protobuf codec for managed-care plan submission form data.
//!
//! Converts between [`mcrev_core::submission::HealthPlanFormData`] and a
//! versioned binary wire format. Pure synchronous; no I/O and no shared
//! mutable state, so one [`Codec`] can serve any number of threads.
//!
//! # Quick start
//!
//! ```no_run
//! use mcrev_core::{catalog::ProgramCatalog, submission::HealthPlanFormData};
//! use mcrev_proto::Codec;
//!
//! let json    = std::fs::read_to_string("programs.json")?;
//! let codec   = Codec::new(ProgramCatalog::from_json(&json)?);
//! let bytes   = std::fs::read("revision.bin")?;
//! let revision: HealthPlanFormData = codec.decode(&bytes)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod wire;

mod dates;
mod decode;
mod encode;
mod enum_map;
mod rate_name;

pub use dates::utc_calendar_date;
pub use error::{Error, Result};
use mcrev_core::{catalog::ProgramCatalog, submission::HealthPlanFormData};
pub use rate_name::{NO_PROGRAMS_FOUND, generate_rate_name, rate_program_names};

// ─── Public API ──────────────────────────────────────────────────────────────

/// The codec, holding the immutable program catalog injected at
/// construction.
#[derive(Debug, Clone)]
pub struct Codec {
  catalog: ProgramCatalog,
}

impl Codec {
  /// Build a codec over `catalog`. The catalog is loaded once at process
  /// start and never mutated afterwards.
  pub fn new(catalog: ProgramCatalog) -> Self {
    Self { catalog }
  }

  /// Encode one revision to its wire bytes.
  ///
  /// Never fails: optional data that is absent encodes as absent, and
  /// per-rate certification names are recomputed against the catalog as
  /// part of encoding.
  pub fn encode(&self, data: &HealthPlanFormData) -> Vec<u8> {
    encode::encode(&self.catalog, data)
  }

  /// Decode wire bytes back to a revision.
  ///
  /// Fails closed: corrupt buffers, foreign message families, and
  /// unsupported schema versions are errors, never partial aggregates. The
  /// result is not re-validated — apply [`mcrev_core::validate`] as needed.
  pub fn decode(&self, bytes: &[u8]) -> Result<HealthPlanFormData> {
    decode::decode(bytes)
  }

  pub fn catalog(&self) -> &ProgramCatalog {
    &self.catalog
  }
}

// ─── Round-trip tests ────────────────────────────────────────────────────────


// ─── Shared test helpers ─────────────────────────────────────────────────────

#[cfg(test)]
pub(crate) mod test_helpers {
  use chrono::{NaiveDate, TimeZone, Utc};
  use mcrev_core::{
    catalog::{Program, ProgramCatalog, StatePrograms},
    contacts::{
      ActuarialFirm, ActuaryCommunication, ActuaryContact, StateContact,
    },
    contract::{
      AmendedItem, ContractAmendmentInfo, ContractExecutionStatus,
      ContractInfo, ContractType, FederalAuthority, ManagedCareEntity,
    },
    documents::{Document, DocumentCategory},
    rates::{RateCapitationType, RateInfo, RateType},
    submission::{FormData, PopulationCovered, SubmissionType},
  };

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  pub(crate) fn test_catalog() -> ProgramCatalog {
    let program = |id: &str, name: &str, full_name: &str| Program {
      id:        id.to_string(),
      name:      name.to_string(),
      full_name: full_name.to_string(),
    };
    ProgramCatalog {
      states: vec![StatePrograms {
        code:     "MN".to_string(),
        name:     "Minnesota".to_string(),
        programs: vec![
          program("pmap", "PMAP", "Prepaid Medical Assistance Program"),
          program("snbc", "SNBC", "Special Needs Basic Care"),
          program("msho", "MSHO", "Minnesota Senior Health Options"),
        ],
      }],
    }
  }

  /// A contract-and-rates draft with one complete rate block.
  pub(crate) fn draft_form() -> FormData {
    FormData {
      id: "rev-1".to_string(),
      state_code: "MN".to_string(),
      state_number: 5,
      program_ids: vec!["pmap".to_string()],
      submission_type: SubmissionType::ContractAndRates,
      submission_description: None,
      population_covered: None,
      risk_based_contract: None,
      contract_info: None,
      rate_infos: vec![RateInfo {
        rate_type:               Some(RateType::New),
        rate_capitation_type:    Some(RateCapitationType::RateCell),
        rate_date_start:         Some(date(2024, 7, 1)),
        rate_date_end:           Some(date(2025, 6, 30)),
        rate_date_certified:     Some(date(2024, 6, 15)),
        rate_amendment_info:     None,
        rate_documents:          vec![],
        rate_program_ids:        vec![],
        rate_certification_name: None,
      }],
      documents: vec![],
      contract_documents: vec![],
      state_contacts: vec![],
      actuary_contacts: vec![],
      actuary_communication_preference: None,
      created_at: date(2024, 5, 1),
      updated_at: Utc.timestamp_millis_opt(1_717_243_200_000).unwrap(),
    }
  }

  /// A draft with every optional field populated, for round-trip checks.
  pub(crate) fn full_form() -> FormData {
    let mut form = draft_form();
    form.submission_description = Some("Annual contract and rates".to_string());
    form.population_covered = Some(PopulationCovered::MedicaidAndChip);
    form.risk_based_contract = Some(true);
    form.contract_info = Some(ContractInfo {
      contract_type:         Some(ContractType::Amendment),
      execution_status:      Some(ContractExecutionStatus::Executed),
      date_start:            Some(date(2024, 7, 1)),
      date_end:              Some(date(2025, 6, 30)),
      managed_care_entities: vec![
        ManagedCareEntity::Mco,
        ManagedCareEntity::Pihp,
      ],
      federal_authorities:   vec![
        FederalAuthority::StatePlan,
        FederalAuthority::Waiver1915b,
      ],
      amendment_info:        Some(ContractAmendmentInfo {
        items_being_amended:    vec![
          AmendedItem::CapitationRates,
          AmendedItem::Other,
        ],
        other_item_description: Some("Telehealth coverage".to_string()),
      }),
    });
    form.rate_infos[0].rate_documents = vec![Document {
      name:        "rate-cert.pdf".to_string(),
      storage_url: "s3://mcrev/rate-cert.pdf".to_string(),
      categories:  vec![DocumentCategory::Rates],
    }];
    form.rate_infos[0].rate_program_ids = vec!["snbc".to_string()];
    form.documents = vec![Document {
      name:        "appendix.pdf".to_string(),
      storage_url: "s3://mcrev/appendix.pdf".to_string(),
      categories:  vec![
        DocumentCategory::ContractRelated,
        DocumentCategory::RatesRelated,
      ],
    }];
    form.contract_documents = vec![Document {
      name:        "contract.pdf".to_string(),
      storage_url: "s3://mcrev/contract.pdf".to_string(),
      categories:  vec![DocumentCategory::Contract],
    }];
    form.state_contacts = vec![StateContact {
      name:       "Jordan Lee".to_string(),
      title_role: "Program Manager".to_string(),
      email:      "jordan.lee@state.mn.us".to_string(),
    }];
    form.actuary_contacts = vec![ActuaryContact {
      name:                 "Sam Rivera".to_string(),
      title_role:           "Consulting Actuary".to_string(),
      email:                "sam.rivera@example.com".to_string(),
      actuarial_firm:       Some(ActuarialFirm::Other),
      actuarial_firm_other: Some("Rivera Analytics".to_string()),
    }];
    form.actuary_communication_preference =
      Some(ActuaryCommunication::OactToActuary);
    form
  }
}
