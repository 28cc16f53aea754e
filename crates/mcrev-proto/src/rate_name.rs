//! Rate certification display names.
//!
//! The name is recomputed on every encode from the submission identity, the
//! rate block, and the program catalog; whatever a caller put in
//! `rate_certification_name` is overwritten. Generation is a pure function
//! of its inputs, so repeated calls agree.

use std::{cmp::Ordering, iter::Peekable, str::Chars};

use mcrev_core::{
  catalog::ProgramCatalog, rates::RateInfo, submission::FormData, validate,
};

/// Placeholder substituted when program resolution misses.
pub const NO_PROGRAMS_FOUND: &str = "no programs found";

const DATE_SEGMENT: &str = "%Y%m%d";

// ─── Program resolution ──────────────────────────────────────────────────────

/// Resolve the display names for a rate block's programs.
///
/// Prefers the block's own program IDs, falling back to the submission's
/// when the block has none. If nothing resolves, or any requested ID is
/// missing from the catalog, the whole block resolves to the single
/// sentinel [`NO_PROGRAMS_FOUND`] — generation continues rather than
/// failing. Resolved names come back in natural order.
pub fn rate_program_names(
  catalog: &ProgramCatalog,
  form: &FormData,
  rate: &RateInfo,
) -> Vec<String> {
  let ids = if rate.rate_program_ids.is_empty() {
    &form.program_ids
  } else {
    &rate.rate_program_ids
  };
  let programs = catalog.state_programs(&form.state_code);
  let mut resolved: Vec<String> = ids
    .iter()
    .filter_map(|id| {
      programs.iter().find(|p| &p.id == id).map(|p| p.name.clone())
    })
    .collect();

  if resolved.is_empty() || resolved.len() != ids.len() {
    tracing::warn!(
      state = %form.state_code,
      requested = ids.len(),
      resolved = resolved.len(),
      "program lookup missed; substituting sentinel"
    );
    return vec![NO_PROGRAMS_FOUND.to_string()];
  }

  resolved.sort_by(|a, b| natural_cmp(a, b));
  resolved
}

// ─── Name generation ─────────────────────────────────────────────────────────

/// Build the deterministic display name for one rate block.
///
/// Shape: `MCR-{STATE}-{NNNN}-{programs}-RATE-{start}-{end}-{kind}-{certified}`,
/// where amendments use their effective dates and the `AMENDMENT` marker,
/// and absent optional parts drop out of the name entirely.
pub fn generate_rate_name(
  catalog: &ProgramCatalog,
  form: &FormData,
  rate: &RateInfo,
) -> String {
  let mut pieces: Vec<String> = vec![
    "MCR".to_string(),
    form.state_code.to_ascii_uppercase(),
    format!("{:04}", form.state_number),
  ];
  pieces.extend(rate_program_names(catalog, form, rate));
  pieces.push("RATE".to_string());

  let amendment = validate::is_rate_amendment(rate);
  let (start, end) = if amendment {
    let info = rate.rate_amendment_info.as_ref();
    (
      info.and_then(|a| a.effective_date_start),
      info.and_then(|a| a.effective_date_end),
    )
  } else {
    (rate.rate_date_start, rate.rate_date_end)
  };
  if let Some(date) = start {
    pieces.push(date.format(DATE_SEGMENT).to_string());
  }
  if let Some(date) = end {
    pieces.push(date.format(DATE_SEGMENT).to_string());
  }

  pieces.push(if amendment { "AMENDMENT" } else { "CERTIFICATION" }.to_string());
  if let Some(date) = rate.rate_date_certified {
    pieces.push(date.format(DATE_SEGMENT).to_string());
  }

  pieces.join("-")
}

// ─── Natural ordering ────────────────────────────────────────────────────────

/// Case-insensitive comparison with numeric digit runs, so `"PMAP 9"` sorts
/// before `"PMAP 10"`.
pub(crate) fn natural_cmp(a: &str, b: &str) -> Ordering {
  let mut left = a.chars().peekable();
  let mut right = b.chars().peekable();
  loop {
    match (left.peek().copied(), right.peek().copied()) {
      (None, None) => return Ordering::Equal,
      (None, Some(_)) => return Ordering::Less,
      (Some(_), None) => return Ordering::Greater,
      (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
        let nx = take_digit_run(&mut left);
        let ny = take_digit_run(&mut right);
        match nx.cmp(&ny) {
          Ordering::Equal => {}
          unequal => return unequal,
        }
      }
      (Some(x), Some(y)) => {
        match x.to_ascii_lowercase().cmp(&y.to_ascii_lowercase()) {
          Ordering::Equal => {
            left.next();
            right.next();
          }
          unequal => return unequal,
        }
      }
    }
  }
}

fn take_digit_run(chars: &mut Peekable<Chars>) -> u64 {
  let mut value = 0u64;
  while let Some(c) = chars.peek().copied()
    && c.is_ascii_digit()
  {
    value = value
      .saturating_mul(10)
      .saturating_add(u64::from(c) - u64::from('0'));
    chars.next();
  }
  value
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;
  use mcrev_core::rates::{RateAmendmentInfo, RateType};

  use super::*;
  use crate::test_helpers::{draft_form, test_catalog};

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  // ── Ordering ────────────────────────────────────────────────────────────

  #[test]
  fn digit_runs_compare_numerically() {
    assert_eq!(natural_cmp("PMAP 9", "PMAP 10"), Ordering::Less);
    assert_eq!(natural_cmp("PMAP 10", "PMAP 10"), Ordering::Equal);
    assert_eq!(natural_cmp("waiver2", "Waiver10"), Ordering::Less);
  }

  #[test]
  fn comparison_ignores_ascii_case() {
    assert_eq!(natural_cmp("pmap", "PMAP"), Ordering::Equal);
    assert_eq!(natural_cmp("abc", "ABD"), Ordering::Less);
  }

  // ── Program resolution ──────────────────────────────────────────────────

  #[test]
  fn rate_ids_take_precedence_over_submission_ids() {
    let catalog = test_catalog();
    let form = draft_form();
    let mut rate = form.rate_infos[0].clone();
    rate.rate_program_ids = vec!["snbc".to_string()];
    assert_eq!(rate_program_names(&catalog, &form, &rate), vec!["SNBC"]);
  }

  #[test]
  fn empty_rate_ids_fall_back_to_submission_ids_sorted() {
    let catalog = test_catalog();
    let mut form = draft_form();
    form.program_ids = vec!["snbc".to_string(), "pmap".to_string()];
    let mut rate = form.rate_infos[0].clone();
    rate.rate_program_ids.clear();
    // Both resolve; output is natural-ordered, not input-ordered.
    assert_eq!(
      rate_program_names(&catalog, &form, &rate),
      vec!["PMAP", "SNBC"]
    );
  }

  #[test]
  fn any_unresolved_id_substitutes_the_sentinel() {
    let catalog = test_catalog();
    let form = draft_form();
    let mut rate = form.rate_infos[0].clone();
    rate.rate_program_ids = vec!["pmap".to_string(), "missing".to_string()];
    assert_eq!(
      rate_program_names(&catalog, &form, &rate),
      vec![NO_PROGRAMS_FOUND]
    );
  }

  #[test]
  fn no_ids_anywhere_substitutes_the_sentinel() {
    let catalog = test_catalog();
    let mut form = draft_form();
    form.program_ids.clear();
    let mut rate = form.rate_infos[0].clone();
    rate.rate_program_ids.clear();
    assert_eq!(
      rate_program_names(&catalog, &form, &rate),
      vec![NO_PROGRAMS_FOUND]
    );
  }

  // ── Name assembly ───────────────────────────────────────────────────────

  #[test]
  fn certification_name_uses_rate_dates() {
    let catalog = test_catalog();
    let form = draft_form();
    let name = generate_rate_name(&catalog, &form, &form.rate_infos[0]);
    assert_eq!(
      name,
      "MCR-MN-0005-PMAP-RATE-20240701-20250630-CERTIFICATION-20240615"
    );
  }

  #[test]
  fn amendment_name_uses_effective_dates() {
    let catalog = test_catalog();
    let mut form = draft_form();
    form.rate_infos[0].rate_type = Some(RateType::Amendment);
    form.rate_infos[0].rate_amendment_info = Some(RateAmendmentInfo {
      effective_date_start: Some(date(2024, 9, 1)),
      effective_date_end:   Some(date(2025, 8, 31)),
    });
    let name = generate_rate_name(&catalog, &form, &form.rate_infos[0]);
    assert_eq!(
      name,
      "MCR-MN-0005-PMAP-RATE-20240901-20250831-AMENDMENT-20240615"
    );
  }

  #[test]
  fn absent_dates_drop_out_of_the_name() {
    let catalog = test_catalog();
    let mut form = draft_form();
    form.rate_infos[0].rate_date_start = None;
    form.rate_infos[0].rate_date_end = None;
    form.rate_infos[0].rate_date_certified = None;
    let name = generate_rate_name(&catalog, &form, &form.rate_infos[0]);
    assert_eq!(name, "MCR-MN-0005-PMAP-RATE-CERTIFICATION");
  }

  #[test]
  fn generation_is_idempotent() {
    let catalog = test_catalog();
    let form = draft_form();
    let first = generate_rate_name(&catalog, &form, &form.rate_infos[0]);
    let second = generate_rate_name(&catalog, &form, &form.rate_infos[0]);
    assert_eq!(first, second);
  }
}
