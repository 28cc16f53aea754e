//! Domain → wire construction.
//!
//! Encoding never fails: absent optional data encodes as an absent wire
//! field, and every domain enum has a wire counterpart in the static
//! tables. The only computed output is the per-rate certification name,
//! which is rebuilt here on every call.

use mcrev_core::{
  catalog::ProgramCatalog,
  contacts::{ActuaryContact, StateContact},
  contract::{ContractAmendmentInfo, ContractInfo},
  documents::Document,
  rates::{RateAmendmentInfo, RateInfo},
  submission::{FormData, HealthPlanFormData},
};
use prost::Message;

use crate::{dates, enum_map, rate_name, wire};

pub(crate) fn encode(
  catalog: &ProgramCatalog,
  data: &HealthPlanFormData,
) -> Vec<u8> {
  let form = data.form();
  let status = match data {
    HealthPlanFormData::Draft { .. } => wire::SubmissionStatus::Draft,
    HealthPlanFormData::Submitted { .. } => wire::SubmissionStatus::Submitted,
  };

  let message = wire::FormDataProto {
    proto_name:    wire::PROTO_NAME.to_string(),
    proto_version: wire::PROTO_VERSION,

    id:           form.id.clone(),
    status:       status as i32,
    state_code:   form.state_code.clone(),
    state_number: form.state_number,
    program_ids:  form.program_ids.clone(),

    submission_type:        Some(
      enum_map::submission_type_to_wire(form.submission_type) as i32,
    ),
    submission_description: form.submission_description.clone(),
    population_covered:     form
      .population_covered
      .map(|p| enum_map::population_covered_to_wire(p) as i32),
    risk_based_contract:    form.risk_based_contract,

    created_at:   Some(dates::date_to_wire(form.created_at)),
    updated_at:   Some(dates::timestamp_to_wire(form.updated_at)),
    submitted_at: data.submitted_at().map(dates::timestamp_to_wire),

    contract_info: form.contract_info.as_ref().map(contract_info_to_wire),
    rate_infos:    form
      .rate_infos
      .iter()
      .map(|rate| rate_info_to_wire(catalog, form, rate))
      .collect(),

    documents:          form.documents.iter().map(document_to_wire).collect(),
    contract_documents: form
      .contract_documents
      .iter()
      .map(document_to_wire)
      .collect(),

    state_contacts:   form
      .state_contacts
      .iter()
      .map(state_contact_to_wire)
      .collect(),
    actuary_contacts: form
      .actuary_contacts
      .iter()
      .map(actuary_contact_to_wire)
      .collect(),
    actuary_communication_preference: form
      .actuary_communication_preference
      .map(|c| enum_map::actuary_communication_to_wire(c) as i32),
  };

  message.encode_to_vec()
}

// ─── Sub-message builders ────────────────────────────────────────────────────

fn contract_info_to_wire(info: &ContractInfo) -> wire::ContractInfo {
  wire::ContractInfo {
    contract_type:         info
      .contract_type
      .map(|t| enum_map::contract_type_to_wire(t) as i32),
    execution_status:      info
      .execution_status
      .map(|s| enum_map::execution_status_to_wire(s) as i32),
    date_start:            info.date_start.map(dates::date_to_wire),
    date_end:              info.date_end.map(dates::date_to_wire),
    managed_care_entities: info
      .managed_care_entities
      .iter()
      .map(|e| enum_map::managed_care_entity_to_wire(*e) as i32)
      .collect(),
    federal_authorities:   info
      .federal_authorities
      .iter()
      .map(|a| enum_map::federal_authority_to_wire(*a) as i32)
      .collect(),
    amendment_info:        info.amendment_info.as_ref().map(amendment_info_to_wire),
  }
}

fn amendment_info_to_wire(
  info: &ContractAmendmentInfo,
) -> wire::ContractAmendmentInfo {
  wire::ContractAmendmentInfo {
    items_being_amended:    info
      .items_being_amended
      .iter()
      .map(|i| enum_map::amended_item_to_wire(*i) as i32)
      .collect(),
    other_item_description: info.other_item_description.clone(),
  }
}

fn rate_info_to_wire(
  catalog: &ProgramCatalog,
  form: &FormData,
  rate: &RateInfo,
) -> wire::RateInfo {
  wire::RateInfo {
    rate_type:               rate
      .rate_type
      .map(|t| enum_map::rate_type_to_wire(t) as i32),
    rate_capitation_type:    rate
      .rate_capitation_type
      .map(|c| enum_map::rate_capitation_type_to_wire(c) as i32),
    rate_date_start:         rate.rate_date_start.map(dates::date_to_wire),
    rate_date_end:           rate.rate_date_end.map(dates::date_to_wire),
    rate_date_certified:     rate.rate_date_certified.map(dates::date_to_wire),
    rate_amendment_info:     rate
      .rate_amendment_info
      .as_ref()
      .map(rate_amendment_info_to_wire),
    rate_documents:          rate
      .rate_documents
      .iter()
      .map(document_to_wire)
      .collect(),
    rate_program_ids:        rate.rate_program_ids.clone(),
    // Recomputed here; the caller-supplied value is not trusted.
    rate_certification_name: Some(rate_name::generate_rate_name(
      catalog, form, rate,
    )),
  }
}

fn rate_amendment_info_to_wire(
  info: &RateAmendmentInfo,
) -> wire::RateAmendmentInfo {
  wire::RateAmendmentInfo {
    effective_date_start: info.effective_date_start.map(dates::date_to_wire),
    effective_date_end:   info.effective_date_end.map(dates::date_to_wire),
  }
}

fn document_to_wire(doc: &Document) -> wire::Document {
  wire::Document {
    name:        doc.name.clone(),
    storage_url: doc.storage_url.clone(),
    categories:  doc
      .categories
      .iter()
      .map(|c| enum_map::document_category_to_wire(*c) as i32)
      .collect(),
  }
}

fn state_contact_to_wire(contact: &StateContact) -> wire::StateContact {
  wire::StateContact {
    name:       contact.name.clone(),
    title_role: contact.title_role.clone(),
    email:      contact.email.clone(),
  }
}

fn actuary_contact_to_wire(contact: &ActuaryContact) -> wire::ActuaryContact {
  wire::ActuaryContact {
    name:                 contact.name.clone(),
    title_role:           contact.title_role.clone(),
    email:                contact.email.clone(),
    actuarial_firm:       contact
      .actuarial_firm
      .map(|f| enum_map::actuarial_firm_to_wire(f) as i32),
    actuarial_firm_other: contact.actuarial_firm_other.clone(),
  }
}
