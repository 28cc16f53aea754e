//! Pure predicates classifying a form-data aggregate.
//!
//! Every function here is total: a missing or malformed shape yields
//! `false`, never a panic or an error. The codec and the submission flow
//! both use these to decide which optional fields must be populated.

use crate::{
  documents::DocumentCategory,
  rates::{RateInfo, RateType},
  submission::{FormData, HealthPlanFormData, SubmissionType},
};

// ─── Shape classification ────────────────────────────────────────────────────

pub fn is_contract_only(form: &FormData) -> bool {
  form.submission_type == SubmissionType::ContractOnly
}

pub fn is_contract_and_rates(form: &FormData) -> bool {
  form.submission_type == SubmissionType::ContractAndRates
}

/// True iff the block amends a previous certification.
pub fn is_rate_amendment(rate: &RateInfo) -> bool {
  rate.rate_type == Some(RateType::Amendment)
}

// ─── Completeness checks ─────────────────────────────────────────────────────

/// Contract type, execution status, and both dates present; managed-care
/// entities and federal authorities non-empty.
pub fn has_valid_contract(form: &FormData) -> bool {
  let Some(info) = &form.contract_info else {
    return false;
  };
  info.contract_type.is_some()
    && info.execution_status.is_some()
    && info.date_start.is_some()
    && info.date_end.is_some()
    && !info.managed_care_entities.is_empty()
    && !info.federal_authorities.is_empty()
}

fn base_rate_fields_present(rate: &RateInfo) -> bool {
  rate.rate_type.is_some()
    && rate.rate_capitation_type.is_some()
    && rate.rate_date_start.is_some()
    && rate.rate_date_end.is_some()
    && rate.rate_date_certified.is_some()
}

fn amendment_dates_present(rate: &RateInfo) -> bool {
  match &rate.rate_amendment_info {
    Some(a) => a.effective_date_start.is_some() && a.effective_date_end.is_some(),
    None => false,
  }
}

/// For a contract-only submission the absence of rate data is the correct
/// state. For contract-and-rates every block must carry its base fields,
/// and amendment blocks their effective dates as well.
pub fn has_valid_rates(form: &FormData) -> bool {
  match form.submission_type {
    SubmissionType::ContractOnly => form.rate_infos.is_empty(),
    SubmissionType::ContractAndRates => {
      !form.rate_infos.is_empty()
        && form.rate_infos.iter().all(|rate| {
          base_rate_fields_present(rate)
            && (!is_rate_amendment(rate) || amendment_dates_present(rate))
        })
    }
  }
}

/// Contract documents are always required; rate documents only when the
/// submission certifies rates.
pub fn has_valid_documents(form: &FormData) -> bool {
  if form.contract_documents.is_empty() {
    return false;
  }
  match form.submission_type {
    SubmissionType::ContractOnly => true,
    SubmissionType::ContractAndRates => form
      .rate_infos
      .iter()
      .all(|rate| !rate.rate_documents.is_empty()),
  }
}

/// Every supporting document needs at least one category; contract-only
/// submissions additionally restrict them to contract-related.
pub fn has_valid_supporting_document_categories(form: &FormData) -> bool {
  form.documents.iter().all(|doc| {
    !doc.categories.is_empty()
      && (!is_contract_only(form)
        || doc.categories.contains(&DocumentCategory::ContractRelated))
  })
}

// ─── Lifecycle predicates ────────────────────────────────────────────────────

/// True iff the revision is locked and complete: submitted, with a valid
/// contract, valid rates, and valid documents.
pub fn is_locked_form_data(data: &HealthPlanFormData) -> bool {
  match data {
    HealthPlanFormData::Draft { .. } => false,
    HealthPlanFormData::Submitted { form, .. } => {
      has_valid_contract(form) && has_valid_rates(form) && has_valid_documents(form)
    }
  }
}

/// True iff the revision is an editable draft. The absence of a submission
/// timestamp is structural: the `Draft` variant cannot carry one.
pub fn is_unlocked_form_data(data: &HealthPlanFormData) -> bool {
  matches!(data, HealthPlanFormData::Draft { .. })
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use chrono::{NaiveDate, TimeZone, Utc};

  use super::*;
  use crate::{
    contract::{
      ContractExecutionStatus, ContractInfo, ContractType, FederalAuthority,
      ManagedCareEntity,
    },
    documents::Document,
    rates::{RateAmendmentInfo, RateCapitationType},
  };

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  fn contract_doc() -> Document {
    Document {
      name:        "contract.pdf".to_string(),
      storage_url: "s3://bucket/contract.pdf".to_string(),
      categories:  vec![DocumentCategory::Contract],
    }
  }

  fn rate_doc() -> Document {
    Document {
      name:        "rates.pdf".to_string(),
      storage_url: "s3://bucket/rates.pdf".to_string(),
      categories:  vec![DocumentCategory::Rates],
    }
  }

  fn complete_contract_info() -> ContractInfo {
    ContractInfo {
      contract_type:         Some(ContractType::Base),
      execution_status:      Some(ContractExecutionStatus::Executed),
      date_start:            Some(date(2024, 7, 1)),
      date_end:              Some(date(2025, 6, 30)),
      managed_care_entities: vec![ManagedCareEntity::Mco],
      federal_authorities:   vec![FederalAuthority::StatePlan],
      amendment_info:        None,
    }
  }

  fn complete_rate_info() -> RateInfo {
    RateInfo {
      rate_type:               Some(RateType::New),
      rate_capitation_type:    Some(RateCapitationType::RateCell),
      rate_date_start:         Some(date(2024, 7, 1)),
      rate_date_end:           Some(date(2025, 6, 30)),
      rate_date_certified:     Some(date(2024, 6, 15)),
      rate_amendment_info:     None,
      rate_documents:          vec![rate_doc()],
      rate_program_ids:        vec![],
      rate_certification_name: None,
    }
  }

  fn complete_form(submission_type: SubmissionType) -> FormData {
    let rate_infos = match submission_type {
      SubmissionType::ContractOnly => vec![],
      SubmissionType::ContractAndRates => vec![complete_rate_info()],
    };
    FormData {
      id: "rev-1".to_string(),
      state_code: "MN".to_string(),
      state_number: 5,
      program_ids: vec!["pmap".to_string()],
      submission_type,
      submission_description: Some("Annual renewal".to_string()),
      population_covered: None,
      risk_based_contract: Some(true),
      contract_info: Some(complete_contract_info()),
      rate_infos,
      documents: vec![],
      contract_documents: vec![contract_doc()],
      state_contacts: vec![],
      actuary_contacts: vec![],
      actuary_communication_preference: None,
      created_at: date(2024, 5, 1),
      updated_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
    }
  }

  fn submitted(form: FormData) -> HealthPlanFormData {
    HealthPlanFormData::Submitted {
      form,
      submitted_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
    }
  }

  // ── Contract ────────────────────────────────────────────────────────────

  #[test]
  fn complete_contract_is_valid() {
    assert!(has_valid_contract(&complete_form(
      SubmissionType::ContractAndRates
    )));
  }

  #[test]
  fn missing_contract_block_is_invalid() {
    let mut form = complete_form(SubmissionType::ContractOnly);
    form.contract_info = None;
    assert!(!has_valid_contract(&form));
  }

  #[test]
  fn empty_entities_invalidate_contract() {
    let mut form = complete_form(SubmissionType::ContractOnly);
    form.contract_info.as_mut().unwrap().managed_care_entities.clear();
    assert!(!has_valid_contract(&form));
  }

  // ── Rates ───────────────────────────────────────────────────────────────

  #[test]
  fn contract_only_requires_rate_absence() {
    let mut form = complete_form(SubmissionType::ContractOnly);
    assert!(has_valid_rates(&form));
    form.rate_infos.push(complete_rate_info());
    assert!(!has_valid_rates(&form));
  }

  #[test]
  fn contract_and_rates_requires_a_rate_block() {
    let mut form = complete_form(SubmissionType::ContractAndRates);
    assert!(has_valid_rates(&form));
    form.rate_infos.clear();
    assert!(!has_valid_rates(&form));
  }

  #[test]
  fn missing_base_rate_field_is_invalid() {
    let mut form = complete_form(SubmissionType::ContractAndRates);
    form.rate_infos[0].rate_date_certified = None;
    assert!(!has_valid_rates(&form));
  }

  #[test]
  fn rate_amendment_needs_effective_dates() {
    let mut form = complete_form(SubmissionType::ContractAndRates);
    form.rate_infos[0].rate_type = Some(RateType::Amendment);
    assert!(!has_valid_rates(&form));

    form.rate_infos[0].rate_amendment_info = Some(RateAmendmentInfo {
      effective_date_start: Some(date(2024, 9, 1)),
      effective_date_end:   Some(date(2025, 8, 31)),
    });
    assert!(has_valid_rates(&form));
  }

  // ── Documents ───────────────────────────────────────────────────────────

  #[test]
  fn contract_documents_always_required() {
    let mut form = complete_form(SubmissionType::ContractOnly);
    form.contract_documents.clear();
    assert!(!has_valid_documents(&form));
  }

  #[test]
  fn rate_documents_required_only_with_rates() {
    let mut form = complete_form(SubmissionType::ContractAndRates);
    form.rate_infos[0].rate_documents.clear();
    assert!(!has_valid_documents(&form));

    let mut form = complete_form(SubmissionType::ContractOnly);
    form.rate_infos.clear();
    assert!(has_valid_documents(&form));
  }

  #[test]
  fn supporting_documents_need_categories() {
    let mut form = complete_form(SubmissionType::ContractAndRates);
    form.documents.push(Document {
      name:        "notes.pdf".to_string(),
      storage_url: "s3://bucket/notes.pdf".to_string(),
      categories:  vec![],
    });
    assert!(!has_valid_supporting_document_categories(&form));
  }

  #[test]
  fn contract_only_restricts_supporting_categories() {
    let mut form = complete_form(SubmissionType::ContractOnly);
    form.documents.push(Document {
      name:        "notes.pdf".to_string(),
      storage_url: "s3://bucket/notes.pdf".to_string(),
      categories:  vec![DocumentCategory::RatesRelated],
    });
    assert!(!has_valid_supporting_document_categories(&form));

    form.documents[0].categories.push(DocumentCategory::ContractRelated);
    assert!(has_valid_supporting_document_categories(&form));
  }

  // ── Lifecycle ───────────────────────────────────────────────────────────

  #[test]
  fn draft_is_never_locked() {
    let data = HealthPlanFormData::Draft {
      form: complete_form(SubmissionType::ContractAndRates),
    };
    assert!(!is_locked_form_data(&data));
    assert!(is_unlocked_form_data(&data));
  }

  #[test]
  fn submitted_with_complete_form_is_locked() {
    let data = submitted(complete_form(SubmissionType::ContractAndRates));
    assert!(is_locked_form_data(&data));
    assert!(!is_unlocked_form_data(&data));
  }

  #[test]
  fn any_failed_check_unlocks_nothing() {
    let mut form = complete_form(SubmissionType::ContractAndRates);
    form.contract_documents.clear();
    assert!(!is_locked_form_data(&submitted(form)));

    let mut form = complete_form(SubmissionType::ContractAndRates);
    form.contract_info = None;
    assert!(!is_locked_form_data(&submitted(form)));

    let mut form = complete_form(SubmissionType::ContractAndRates);
    form.rate_infos[0].rate_type = None;
    assert!(!is_locked_form_data(&submitted(form)));
  }

  #[test]
  fn submit_stamps_a_draft_once() {
    let draft = HealthPlanFormData::Draft {
      form: complete_form(SubmissionType::ContractOnly),
    };
    let at     = Utc.with_ymd_and_hms(2024, 8, 1, 9, 30, 0).unwrap();
    let locked = draft.submit(at);
    assert_eq!(locked.submitted_at(), Some(at));

    let later = Utc.with_ymd_and_hms(2024, 9, 1, 0, 0, 0).unwrap();
    assert_eq!(locked.submit(later).submitted_at(), Some(at));
  }
}
