//! Integration tests for the request domain

use core_kernel::{ClientRequestId, Currency, Money, SubmissionAttemptId};
use proptest::prelude::*;
use rust_decimal_macros::dec;

use domain_request::{
    client_page_path, ApplicantType, Carryover, RequestDraft, RequestReceipt, RequestValidator,
    SubmissionStatus, POSITION_TITLES,
};

fn carryover() -> Carryover {
    Carryover::new(Money::new(dec!(150000), Currency::CZK), 24)
}

fn filled_draft(applicant_type: ApplicantType) -> RequestDraft {
    let mut draft = RequestDraft::new(carryover());
    draft.change_applicant_type(applicant_type);
    draft.name = "Jana".to_string();
    draft.surname = "Dvořáková".to_string();
    draft.nationality = "CZ".to_string();
    draft.email = "jana.dvorakova@example.com".to_string();
    draft.phone = "601234567".to_string();
    draft.address.street = "Lidická".to_string();
    draft.address.desc_number = "7".to_string();
    draft.address.indicative_number = "12".to_string();
    draft.address.city = "Brno".to_string();
    draft.address.postal_code = "60200".to_string();
    match applicant_type {
        ApplicantType::Individual => draft.birth_num = "905230/5678".to_string(),
        ApplicantType::Osvc => draft.ic = "87654321".to_string(),
        ApplicantType::LegalEntity => {
            draft.company_name = "Moravské úvěry s.r.o.".to_string();
            draft.ic = "87654321".to_string();
            draft.position = "jednatelka".to_string();
        }
    }
    draft
}

fn any_applicant_type() -> impl Strategy<Value = ApplicantType> {
    prop_oneof![
        Just(ApplicantType::Individual),
        Just(ApplicantType::Osvc),
        Just(ApplicantType::LegalEntity),
    ]
}

#[test]
fn every_applicant_type_has_a_valid_draft() {
    for applicant_type in [
        ApplicantType::Individual,
        ApplicantType::Osvc,
        ApplicantType::LegalEntity,
    ] {
        let report = RequestValidator::validate(&filled_draft(applicant_type));
        assert!(
            report.is_valid,
            "{applicant_type:?} issues: {:?}",
            report.issues
        );
    }
}

#[test]
fn type_specific_fields_do_not_leak_across_types() {
    // An individual draft carries no IČO requirement and vice versa.
    let mut individual = filled_draft(ApplicantType::Individual);
    individual.ic = String::new();
    assert!(RequestValidator::validate(&individual).is_valid);

    let mut osvc = filled_draft(ApplicantType::Osvc);
    osvc.birth_num = String::new();
    assert!(RequestValidator::validate(&osvc).is_valid);
}

#[test]
fn all_position_titles_validate() {
    for title in POSITION_TITLES {
        let mut draft = filled_draft(ApplicantType::LegalEntity);
        draft.position = title.to_string();
        let report = RequestValidator::validate(&draft);
        assert!(report.is_valid, "title {title:?} rejected: {:?}", report.issues);
    }
}

#[test]
fn navigation_path_embeds_backend_id() {
    let id = ClientRequestId::new("abc123").unwrap();
    assert_eq!(client_page_path(&id), "/clientPage/abc123");
}

#[test]
fn settled_status_serializes_with_state_tag() {
    let mut status = SubmissionStatus::Inactive;
    status.begin(SubmissionAttemptId::new()).unwrap();
    status
        .reject(400, serde_json::json!({ "error": "bad request" }))
        .unwrap();

    let json = serde_json::to_value(&status).unwrap();
    assert_eq!(json["state"], "rejected");
    assert_eq!(json["status"], 400);
}

#[test]
fn receipt_roundtrips_through_json() {
    let receipt = RequestReceipt {
        id: ClientRequestId::new("abc123").unwrap(),
        body: serde_json::json!({ "id": "abc123", "queue": 5 }),
    };
    let json = serde_json::to_string(&receipt).unwrap();
    let back: RequestReceipt = serde_json::from_str(&json).unwrap();
    assert_eq!(receipt, back);
}

proptest! {
    /// Changing the applicant type resets every field except the type and
    /// the calculator carryover, no matter what was entered before.
    #[test]
    fn change_type_resets_everything_else(
        from in any_applicant_type(),
        to in any_applicant_type(),
        name in ".{0,20}",
        email in ".{0,20}",
        postal in ".{0,10}",
    ) {
        let mut draft = filled_draft(from);
        draft.name = name;
        draft.email = email;
        draft.address.postal_code = postal;

        draft.change_applicant_type(to);

        let expected = {
            let mut fresh = RequestDraft::new(carryover());
            fresh.applicant_type = Some(to);
            fresh
        };
        prop_assert_eq!(draft, expected);
    }

    /// Eight-digit strings always satisfy the IČO rule; anything else fails.
    #[test]
    fn ic_rule_accepts_exactly_eight_digits(ic in "[0-9]{1,12}") {
        let mut draft = filled_draft(ApplicantType::Osvc);
        draft.ic = ic.clone();

        let report = RequestValidator::validate(&draft);
        prop_assert_eq!(report.is_valid, ic.len() == 8);
    }

    /// Unparseable postal codes are flagged but never panic.
    #[test]
    fn postal_code_validation_never_panics(postal in ".{0,12}") {
        let mut draft = filled_draft(ApplicantType::Individual);
        draft.address.postal_code = postal.clone();

        let report = RequestValidator::validate(&draft);
        let parses = postal.trim().parse::<u32>().is_ok();
        prop_assert_eq!(!report.has_issue("address.postalCode"), parses);
    }
}
