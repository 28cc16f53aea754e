//! Static mapping tables between domain enums and their wire counterparts.
//!
//! Each pair of functions is an exhaustive match, so the compiler keeps the
//! tables total when either side grows a value. Domain → wire never fails;
//! wire → domain returns `None` for `*_UNSPECIFIED` and the caller decides
//! whether absence is acceptable there.

use mcrev_core::{
  contacts::{ActuarialFirm, ActuaryCommunication},
  contract::{
    AmendedItem, ContractExecutionStatus, ContractType, FederalAuthority,
    ManagedCareEntity,
  },
  documents::DocumentCategory,
  rates::{RateCapitationType, RateType},
  submission::{PopulationCovered, SubmissionType},
};

use crate::wire;

// ─── Submission level ────────────────────────────────────────────────────────

pub(crate) fn submission_type_to_wire(
  value: SubmissionType,
) -> wire::SubmissionType {
  match value {
    SubmissionType::ContractOnly => wire::SubmissionType::ContractOnly,
    SubmissionType::ContractAndRates => wire::SubmissionType::ContractAndRates,
  }
}

pub(crate) fn submission_type_from_wire(
  value: wire::SubmissionType,
) -> Option<SubmissionType> {
  match value {
    wire::SubmissionType::Unspecified => None,
    wire::SubmissionType::ContractOnly => Some(SubmissionType::ContractOnly),
    wire::SubmissionType::ContractAndRates => {
      Some(SubmissionType::ContractAndRates)
    }
  }
}

pub(crate) fn population_covered_to_wire(
  value: PopulationCovered,
) -> wire::PopulationCovered {
  match value {
    PopulationCovered::Medicaid => wire::PopulationCovered::Medicaid,
    PopulationCovered::Chip => wire::PopulationCovered::Chip,
    PopulationCovered::MedicaidAndChip => {
      wire::PopulationCovered::MedicaidAndChip
    }
  }
}

pub(crate) fn population_covered_from_wire(
  value: wire::PopulationCovered,
) -> Option<PopulationCovered> {
  match value {
    wire::PopulationCovered::Unspecified => None,
    wire::PopulationCovered::Medicaid => Some(PopulationCovered::Medicaid),
    wire::PopulationCovered::Chip => Some(PopulationCovered::Chip),
    wire::PopulationCovered::MedicaidAndChip => {
      Some(PopulationCovered::MedicaidAndChip)
    }
  }
}

// ─── Contract ────────────────────────────────────────────────────────────────

pub(crate) fn contract_type_to_wire(value: ContractType) -> wire::ContractType {
  match value {
    ContractType::Base => wire::ContractType::Base,
    ContractType::Amendment => wire::ContractType::Amendment,
  }
}

pub(crate) fn contract_type_from_wire(
  value: wire::ContractType,
) -> Option<ContractType> {
  match value {
    wire::ContractType::Unspecified => None,
    wire::ContractType::Base => Some(ContractType::Base),
    wire::ContractType::Amendment => Some(ContractType::Amendment),
  }
}

pub(crate) fn execution_status_to_wire(
  value: ContractExecutionStatus,
) -> wire::ContractExecutionStatus {
  match value {
    ContractExecutionStatus::Executed => {
      wire::ContractExecutionStatus::Executed
    }
    ContractExecutionStatus::Unexecuted => {
      wire::ContractExecutionStatus::Unexecuted
    }
  }
}

pub(crate) fn execution_status_from_wire(
  value: wire::ContractExecutionStatus,
) -> Option<ContractExecutionStatus> {
  match value {
    wire::ContractExecutionStatus::Unspecified => None,
    wire::ContractExecutionStatus::Executed => {
      Some(ContractExecutionStatus::Executed)
    }
    wire::ContractExecutionStatus::Unexecuted => {
      Some(ContractExecutionStatus::Unexecuted)
    }
  }
}

pub(crate) fn managed_care_entity_to_wire(
  value: ManagedCareEntity,
) -> wire::ManagedCareEntity {
  match value {
    ManagedCareEntity::Mco => wire::ManagedCareEntity::Mco,
    ManagedCareEntity::Pihp => wire::ManagedCareEntity::Pihp,
    ManagedCareEntity::Pahp => wire::ManagedCareEntity::Pahp,
    ManagedCareEntity::Pccm => wire::ManagedCareEntity::Pccm,
  }
}

pub(crate) fn managed_care_entity_from_wire(
  value: wire::ManagedCareEntity,
) -> Option<ManagedCareEntity> {
  match value {
    wire::ManagedCareEntity::Unspecified => None,
    wire::ManagedCareEntity::Mco => Some(ManagedCareEntity::Mco),
    wire::ManagedCareEntity::Pihp => Some(ManagedCareEntity::Pihp),
    wire::ManagedCareEntity::Pahp => Some(ManagedCareEntity::Pahp),
    wire::ManagedCareEntity::Pccm => Some(ManagedCareEntity::Pccm),
  }
}

pub(crate) fn federal_authority_to_wire(
  value: FederalAuthority,
) -> wire::FederalAuthority {
  match value {
    FederalAuthority::StatePlan => wire::FederalAuthority::StatePlan,
    FederalAuthority::Waiver1915b => wire::FederalAuthority::Waiver1915b,
    FederalAuthority::Waiver1115 => wire::FederalAuthority::Waiver1115,
    FederalAuthority::Voluntary => wire::FederalAuthority::Voluntary,
    FederalAuthority::Benchmark => wire::FederalAuthority::Benchmark,
    FederalAuthority::TitleXxi => wire::FederalAuthority::TitleXxi,
  }
}

pub(crate) fn federal_authority_from_wire(
  value: wire::FederalAuthority,
) -> Option<FederalAuthority> {
  match value {
    wire::FederalAuthority::Unspecified => None,
    wire::FederalAuthority::StatePlan => Some(FederalAuthority::StatePlan),
    wire::FederalAuthority::Waiver1915b => Some(FederalAuthority::Waiver1915b),
    wire::FederalAuthority::Waiver1115 => Some(FederalAuthority::Waiver1115),
    wire::FederalAuthority::Voluntary => Some(FederalAuthority::Voluntary),
    wire::FederalAuthority::Benchmark => Some(FederalAuthority::Benchmark),
    wire::FederalAuthority::TitleXxi => Some(FederalAuthority::TitleXxi),
  }
}

pub(crate) fn amended_item_to_wire(value: AmendedItem) -> wire::AmendedItem {
  match value {
    AmendedItem::BenefitsProvided => wire::AmendedItem::BenefitsProvided,
    AmendedItem::CapitationRates => wire::AmendedItem::CapitationRates,
    AmendedItem::EncounterData => wire::AmendedItem::EncounterData,
    AmendedItem::EnrollmentProcess => wire::AmendedItem::EnrollmentProcess,
    AmendedItem::FinancialIncentives => wire::AmendedItem::FinancialIncentives,
    AmendedItem::GeoAreaServed => wire::AmendedItem::GeoAreaServed,
    AmendedItem::GrievancesAndAppeals => {
      wire::AmendedItem::GrievancesAndAppeals
    }
    AmendedItem::LengthOfContract => wire::AmendedItem::LengthOfContract,
    AmendedItem::NonRiskPayment => wire::AmendedItem::NonRiskPayment,
    AmendedItem::ProgramIntegrity => wire::AmendedItem::ProgramIntegrity,
    AmendedItem::QualityStandards => wire::AmendedItem::QualityStandards,
    AmendedItem::RiskSharingMechanism => {
      wire::AmendedItem::RiskSharingMechanism
    }
    AmendedItem::Other => wire::AmendedItem::Other,
  }
}

pub(crate) fn amended_item_from_wire(
  value: wire::AmendedItem,
) -> Option<AmendedItem> {
  match value {
    wire::AmendedItem::Unspecified => None,
    wire::AmendedItem::BenefitsProvided => Some(AmendedItem::BenefitsProvided),
    wire::AmendedItem::CapitationRates => Some(AmendedItem::CapitationRates),
    wire::AmendedItem::EncounterData => Some(AmendedItem::EncounterData),
    wire::AmendedItem::EnrollmentProcess => {
      Some(AmendedItem::EnrollmentProcess)
    }
    wire::AmendedItem::FinancialIncentives => {
      Some(AmendedItem::FinancialIncentives)
    }
    wire::AmendedItem::GeoAreaServed => Some(AmendedItem::GeoAreaServed),
    wire::AmendedItem::GrievancesAndAppeals => {
      Some(AmendedItem::GrievancesAndAppeals)
    }
    wire::AmendedItem::LengthOfContract => Some(AmendedItem::LengthOfContract),
    wire::AmendedItem::NonRiskPayment => Some(AmendedItem::NonRiskPayment),
    wire::AmendedItem::ProgramIntegrity => Some(AmendedItem::ProgramIntegrity),
    wire::AmendedItem::QualityStandards => Some(AmendedItem::QualityStandards),
    wire::AmendedItem::RiskSharingMechanism => {
      Some(AmendedItem::RiskSharingMechanism)
    }
    wire::AmendedItem::Other => Some(AmendedItem::Other),
  }
}

// ─── Rates ───────────────────────────────────────────────────────────────────

pub(crate) fn rate_type_to_wire(value: RateType) -> wire::RateType {
  match value {
    RateType::New => wire::RateType::New,
    RateType::Amendment => wire::RateType::Amendment,
  }
}

pub(crate) fn rate_type_from_wire(value: wire::RateType) -> Option<RateType> {
  match value {
    wire::RateType::Unspecified => None,
    wire::RateType::New => Some(RateType::New),
    wire::RateType::Amendment => Some(RateType::Amendment),
  }
}

pub(crate) fn rate_capitation_type_to_wire(
  value: RateCapitationType,
) -> wire::RateCapitationType {
  match value {
    RateCapitationType::RateCell => wire::RateCapitationType::RateCell,
    RateCapitationType::RateRange => wire::RateCapitationType::RateRange,
  }
}

pub(crate) fn rate_capitation_type_from_wire(
  value: wire::RateCapitationType,
) -> Option<RateCapitationType> {
  match value {
    wire::RateCapitationType::Unspecified => None,
    wire::RateCapitationType::RateCell => Some(RateCapitationType::RateCell),
    wire::RateCapitationType::RateRange => Some(RateCapitationType::RateRange),
  }
}

// ─── Documents ───────────────────────────────────────────────────────────────

pub(crate) fn document_category_to_wire(
  value: DocumentCategory,
) -> wire::DocumentCategory {
  match value {
    DocumentCategory::Contract => wire::DocumentCategory::Contract,
    DocumentCategory::Rates => wire::DocumentCategory::Rates,
    DocumentCategory::ContractRelated => {
      wire::DocumentCategory::ContractRelated
    }
    DocumentCategory::RatesRelated => wire::DocumentCategory::RatesRelated,
  }
}

pub(crate) fn document_category_from_wire(
  value: wire::DocumentCategory,
) -> Option<DocumentCategory> {
  match value {
    wire::DocumentCategory::Unspecified => None,
    wire::DocumentCategory::Contract => Some(DocumentCategory::Contract),
    wire::DocumentCategory::Rates => Some(DocumentCategory::Rates),
    wire::DocumentCategory::ContractRelated => {
      Some(DocumentCategory::ContractRelated)
    }
    wire::DocumentCategory::RatesRelated => {
      Some(DocumentCategory::RatesRelated)
    }
  }
}

// ─── Contacts ────────────────────────────────────────────────────────────────

pub(crate) fn actuarial_firm_to_wire(
  value: ActuarialFirm,
) -> wire::ActuarialFirm {
  match value {
    ActuarialFirm::Mercer => wire::ActuarialFirm::Mercer,
    ActuarialFirm::Milliman => wire::ActuarialFirm::Milliman,
    ActuarialFirm::Optumas => wire::ActuarialFirm::Optumas,
    ActuarialFirm::Guidehouse => wire::ActuarialFirm::Guidehouse,
    ActuarialFirm::Deloitte => wire::ActuarialFirm::Deloitte,
    ActuarialFirm::StateInHouse => wire::ActuarialFirm::StateInHouse,
    ActuarialFirm::Other => wire::ActuarialFirm::Other,
  }
}

pub(crate) fn actuarial_firm_from_wire(
  value: wire::ActuarialFirm,
) -> Option<ActuarialFirm> {
  match value {
    wire::ActuarialFirm::Unspecified => None,
    wire::ActuarialFirm::Mercer => Some(ActuarialFirm::Mercer),
    wire::ActuarialFirm::Milliman => Some(ActuarialFirm::Milliman),
    wire::ActuarialFirm::Optumas => Some(ActuarialFirm::Optumas),
    wire::ActuarialFirm::Guidehouse => Some(ActuarialFirm::Guidehouse),
    wire::ActuarialFirm::Deloitte => Some(ActuarialFirm::Deloitte),
    wire::ActuarialFirm::StateInHouse => Some(ActuarialFirm::StateInHouse),
    wire::ActuarialFirm::Other => Some(ActuarialFirm::Other),
  }
}

pub(crate) fn actuary_communication_to_wire(
  value: ActuaryCommunication,
) -> wire::ActuaryCommunication {
  match value {
    ActuaryCommunication::OactToActuary => {
      wire::ActuaryCommunication::OactToActuary
    }
    ActuaryCommunication::OactToState => {
      wire::ActuaryCommunication::OactToState
    }
  }
}

pub(crate) fn actuary_communication_from_wire(
  value: wire::ActuaryCommunication,
) -> Option<ActuaryCommunication> {
  match value {
    wire::ActuaryCommunication::Unspecified => None,
    wire::ActuaryCommunication::OactToActuary => {
      Some(ActuaryCommunication::OactToActuary)
    }
    wire::ActuaryCommunication::OactToState => {
      Some(ActuaryCommunication::OactToState)
    }
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
