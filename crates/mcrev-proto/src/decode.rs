//! Wire → domain reconstruction with schema-version dispatch.
//!
//! Decoding fails closed: corrupt buffers, wrong message families, missing
//! required fields, and unsupported schema versions are all errors. Unknown
//! enum values in optional positions are the one fail-soft path — they
//! decode to absent, with a warning, so buffers written by newer schemas
//! stay readable.

use mcrev_core::{
  contacts::{ActuaryContact, StateContact},
  contract::{ContractAmendmentInfo, ContractInfo},
  documents::Document,
  rates::{RateAmendmentInfo, RateInfo},
  submission::{FormData, HealthPlanFormData},
};
use prost::Message;

use crate::{
  dates, enum_map,
  error::{Error, Result},
  wire,
};

// ─── Version dispatch ────────────────────────────────────────────────────────

type VersionDecoder = fn(wire::FormDataProto) -> Result<HealthPlanFormData>;

/// Closed table of versioned decoders; `proto_version` selects the entry.
/// A schema break adds a row here rather than branching inline.
const DECODERS: &[(u32, VersionDecoder)] = &[(1, decode_v1)];

pub(crate) fn decode(bytes: &[u8]) -> Result<HealthPlanFormData> {
  let message = wire::FormDataProto::decode(bytes)?;
  if message.proto_name != wire::PROTO_NAME {
    return Err(Error::WrongMessageType { found: message.proto_name });
  }
  let decoder = DECODERS
    .iter()
    .find(|(version, _)| *version == message.proto_version)
    .map(|(_, decoder)| *decoder)
    .ok_or(Error::UnsupportedVersion { found: message.proto_version })?;
  decoder(message)
}

// ─── Enum helpers ────────────────────────────────────────────────────────────

/// Fail-soft wire-enum read: an out-of-range value decodes to `None` with a
/// warning instead of failing the buffer.
fn wire_enum<W>(raw: i32, field: &'static str) -> Option<W>
where
  W: TryFrom<i32>,
{
  match W::try_from(raw) {
    Ok(value) => Some(value),
    Err(_) => {
      tracing::warn!(field, value = raw, "unknown wire enum value dropped");
      None
    }
  }
}

fn optional_enum<W, D>(
  raw: Option<i32>,
  field: &'static str,
  map: fn(W) -> Option<D>,
) -> Option<D>
where
  W: TryFrom<i32>,
{
  raw.and_then(|value| wire_enum(value, field)).and_then(map)
}

fn repeated_enum<W, D>(
  raw: &[i32],
  field: &'static str,
  map: fn(W) -> Option<D>,
) -> Vec<D>
where
  W: TryFrom<i32>,
{
  raw
    .iter()
    .filter_map(|value| wire_enum(*value, field).and_then(map))
    .collect()
}

// ─── Version 1 ───────────────────────────────────────────────────────────────

fn decode_v1(message: wire::FormDataProto) -> Result<HealthPlanFormData> {
  let submission_type = optional_enum(
    message.submission_type,
    "submission_type",
    enum_map::submission_type_from_wire,
  )
  .ok_or(Error::MissingField("submission_type"))?;

  let created_at = message
    .created_at
    .as_ref()
    .map(dates::date_from_wire)
    .transpose()?
    .ok_or(Error::MissingField("created_at"))?;
  let updated_at = message
    .updated_at
    .as_ref()
    .map(dates::timestamp_from_wire)
    .transpose()?
    .ok_or(Error::MissingField("updated_at"))?;
  let submitted_at = message
    .submitted_at
    .as_ref()
    .map(dates::timestamp_from_wire)
    .transpose()?;

  let form = FormData {
    id: message.id,
    state_code: message.state_code,
    state_number: message.state_number,
    program_ids: message.program_ids,
    submission_type,
    submission_description: message.submission_description,
    population_covered: optional_enum(
      message.population_covered,
      "population_covered",
      enum_map::population_covered_from_wire,
    ),
    risk_based_contract: message.risk_based_contract,
    contract_info: message
      .contract_info
      .map(contract_info_from_wire)
      .transpose()?,
    rate_infos: message
      .rate_infos
      .into_iter()
      .map(rate_info_from_wire)
      .collect::<Result<_>>()?,
    documents: message.documents.into_iter().map(document_from_wire).collect(),
    contract_documents: message
      .contract_documents
      .into_iter()
      .map(document_from_wire)
      .collect(),
    state_contacts: message
      .state_contacts
      .into_iter()
      .map(state_contact_from_wire)
      .collect(),
    actuary_contacts: message
      .actuary_contacts
      .into_iter()
      .map(actuary_contact_from_wire)
      .collect(),
    actuary_communication_preference: optional_enum(
      message.actuary_communication_preference,
      "actuary_communication_preference",
      enum_map::actuary_communication_from_wire,
    ),
    created_at,
    updated_at,
  };

  match wire::SubmissionStatus::try_from(message.status).ok() {
    Some(wire::SubmissionStatus::Draft) => {
      if submitted_at.is_some() {
        // A draft cannot carry a submission stamp; drop it rather than
        // reject a buffer that is otherwise intact.
        tracing::warn!(id = %form.id, "draft buffer carried submitted_at; ignored");
      }
      Ok(HealthPlanFormData::Draft { form })
    }
    Some(wire::SubmissionStatus::Submitted) => {
      let submitted_at =
        submitted_at.ok_or(Error::MissingField("submitted_at"))?;
      Ok(HealthPlanFormData::Submitted { form, submitted_at })
    }
    Some(wire::SubmissionStatus::Unspecified) | None => {
      Err(Error::MissingField("status"))
    }
  }
}

// ─── Sub-message readers ─────────────────────────────────────────────────────

fn contract_info_from_wire(info: wire::ContractInfo) -> Result<ContractInfo> {
  Ok(ContractInfo {
    contract_type:         optional_enum(
      info.contract_type,
      "contract_type",
      enum_map::contract_type_from_wire,
    ),
    execution_status:      optional_enum(
      info.execution_status,
      "execution_status",
      enum_map::execution_status_from_wire,
    ),
    date_start:            info
      .date_start
      .as_ref()
      .map(dates::date_from_wire)
      .transpose()?,
    date_end:              info
      .date_end
      .as_ref()
      .map(dates::date_from_wire)
      .transpose()?,
    managed_care_entities: repeated_enum(
      &info.managed_care_entities,
      "managed_care_entities",
      enum_map::managed_care_entity_from_wire,
    ),
    federal_authorities:   repeated_enum(
      &info.federal_authorities,
      "federal_authorities",
      enum_map::federal_authority_from_wire,
    ),
    amendment_info:        info.amendment_info.map(|a| ContractAmendmentInfo {
      items_being_amended:    repeated_enum(
        &a.items_being_amended,
        "items_being_amended",
        enum_map::amended_item_from_wire,
      ),
      other_item_description: a.other_item_description,
    }),
  })
}

fn rate_info_from_wire(rate: wire::RateInfo) -> Result<RateInfo> {
  let rate_amendment_info = match rate.rate_amendment_info {
    Some(info) => Some(RateAmendmentInfo {
      effective_date_start: info
        .effective_date_start
        .as_ref()
        .map(dates::date_from_wire)
        .transpose()?,
      effective_date_end:   info
        .effective_date_end
        .as_ref()
        .map(dates::date_from_wire)
        .transpose()?,
    }),
    None => None,
  };

  Ok(RateInfo {
    rate_type: optional_enum(
      rate.rate_type,
      "rate_type",
      enum_map::rate_type_from_wire,
    ),
    rate_capitation_type: optional_enum(
      rate.rate_capitation_type,
      "rate_capitation_type",
      enum_map::rate_capitation_type_from_wire,
    ),
    rate_date_start: rate
      .rate_date_start
      .as_ref()
      .map(dates::date_from_wire)
      .transpose()?,
    rate_date_end: rate
      .rate_date_end
      .as_ref()
      .map(dates::date_from_wire)
      .transpose()?,
    rate_date_certified: rate
      .rate_date_certified
      .as_ref()
      .map(dates::date_from_wire)
      .transpose()?,
    rate_amendment_info,
    rate_documents: rate
      .rate_documents
      .into_iter()
      .map(document_from_wire)
      .collect(),
    rate_program_ids: rate.rate_program_ids,
    rate_certification_name: rate.rate_certification_name,
  })
}

fn document_from_wire(doc: wire::Document) -> Document {
  Document {
    name:        doc.name,
    storage_url: doc.storage_url,
    categories:  repeated_enum(
      &doc.categories,
      "categories",
      enum_map::document_category_from_wire,
    ),
  }
}

fn state_contact_from_wire(contact: wire::StateContact) -> StateContact {
  StateContact {
    name:       contact.name,
    title_role: contact.title_role,
    email:      contact.email,
  }
}

fn actuary_contact_from_wire(contact: wire::ActuaryContact) -> ActuaryContact {
  ActuaryContact {
    name:                 contact.name,
    title_role:           contact.title_role,
    email:                contact.email,
    actuarial_firm:       optional_enum(
      contact.actuarial_firm,
      "actuarial_firm",
      enum_map::actuarial_firm_from_wire,
    ),
    actuarial_firm_other: contact.actuarial_firm_other,
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  /// A minimal valid version-1 wire message.
  fn base_message() -> wire::FormDataProto {
    wire::FormDataProto {
      proto_name: wire::PROTO_NAME.to_string(),
      proto_version: wire::PROTO_VERSION,
      id: "rev-1".to_string(),
      status: wire::SubmissionStatus::Draft as i32,
      state_code: "MN".to_string(),
      state_number: 5,
      program_ids: vec!["pmap".to_string()],
      submission_type: Some(wire::SubmissionType::ContractOnly as i32),
      created_at: Some(wire::Date { year: 2024, month: 4, day: 1 }),
      updated_at: Some(wire::Timestamp { seconds: 1_717_243_200, nanos: 0 }),
      ..Default::default()
    }
  }

  #[test]
  fn corrupt_buffer_is_an_error() {
    // Field 1, length-delimited, with a truncated length varint.
    let err = decode(&[0x0a, 0xff]).unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
  }

  #[test]
  fn foreign_message_family_is_rejected() {
    let mut message = base_message();
    message.proto_name = "RATE_SUBMISSION".to_string();
    let err = decode(&message.encode_to_vec()).unwrap_err();
    assert!(
      matches!(err, Error::WrongMessageType { found } if found == "RATE_SUBMISSION")
    );
  }

  #[test]
  fn unknown_version_is_rejected_not_guessed() {
    let mut message = base_message();
    message.proto_version = 99;
    let err = decode(&message.encode_to_vec()).unwrap_err();
    assert!(matches!(err, Error::UnsupportedVersion { found: 99 }));
  }

  #[test]
  fn missing_submission_type_fails_closed() {
    let mut message = base_message();
    message.submission_type = None;
    let err = decode(&message.encode_to_vec()).unwrap_err();
    assert!(matches!(err, Error::MissingField("submission_type")));
  }

  #[test]
  fn submitted_without_timestamp_is_malformed() {
    let mut message = base_message();
    message.status = wire::SubmissionStatus::Submitted as i32;
    let err = decode(&message.encode_to_vec()).unwrap_err();
    assert!(matches!(err, Error::MissingField("submitted_at")));
  }

  #[test]
  fn unspecified_status_is_malformed() {
    let mut message = base_message();
    message.status = wire::SubmissionStatus::Unspecified as i32;
    let err = decode(&message.encode_to_vec()).unwrap_err();
    assert!(matches!(err, Error::MissingField("status")));
  }

  #[test]
  fn draft_with_stray_submitted_at_decodes_without_it() {
    let mut message = base_message();
    message.submitted_at =
      Some(wire::Timestamp { seconds: 1_717_243_200, nanos: 0 });
    let decoded = decode(&message.encode_to_vec()).unwrap();
    assert!(decoded.submitted_at().is_none());
  }

  #[test]
  fn unknown_optional_enum_value_drops_to_absent() {
    let mut message = base_message();
    message.population_covered = Some(99);
    let decoded = decode(&message.encode_to_vec()).unwrap();
    assert_eq!(decoded.form().population_covered, None);
  }

  #[test]
  fn unknown_repeated_enum_values_are_skipped() {
    let mut message = base_message();
    message.documents.push(wire::Document {
      name:        "notes.pdf".to_string(),
      storage_url: "s3://bucket/notes.pdf".to_string(),
      categories:  vec![wire::DocumentCategory::ContractRelated as i32, 42],
    });
    let decoded = decode(&message.encode_to_vec()).unwrap();
    assert_eq!(
      decoded.form().documents[0].categories,
      vec![mcrev_core::documents::DocumentCategory::ContractRelated]
    );
  }

  #[test]
  fn out_of_range_wire_date_fails_the_buffer() {
    let mut message = base_message();
    message.created_at = Some(wire::Date { year: 2024, month: 1, day: 0 });
    let err = decode(&message.encode_to_vec()).unwrap_err();
    assert!(matches!(err, Error::InvalidDate { .. }));
  }
}
