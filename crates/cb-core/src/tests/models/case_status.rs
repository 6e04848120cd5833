use crate::CaseStatus;

use std::str::FromStr;

#[test]
fn test_case_status_as_str() {
    assert_eq!(CaseStatus::Quotation.as_str(), "quotation");
    assert_eq!(CaseStatus::Approved.as_str(), "approved");
    assert_eq!(CaseStatus::Invoicing.as_str(), "invoicing");
    assert_eq!(CaseStatus::Delivery.as_str(), "delivery");
    assert_eq!(CaseStatus::Completed.as_str(), "completed");
    assert_eq!(CaseStatus::Deleted.as_str(), "deleted");
}

#[test]
fn test_case_status_from_str() {
    assert_eq!(
        CaseStatus::from_str("quotation").unwrap(),
        CaseStatus::Quotation
    );
    assert_eq!(
        CaseStatus::from_str("delivery").unwrap(),
        CaseStatus::Delivery
    );
    assert!(CaseStatus::from_str("invalid").is_err());
    assert!(CaseStatus::from_str("").is_err());
}

#[test]
fn test_case_status_terminal() {
    assert!(CaseStatus::Completed.is_terminal());
    assert!(CaseStatus::Deleted.is_terminal());
    assert!(!CaseStatus::Quotation.is_terminal());
    assert!(!CaseStatus::Delivery.is_terminal());
}

#[test]
fn test_case_status_default() {
    assert_eq!(CaseStatus::default(), CaseStatus::Quotation);
}

#[test]
fn test_case_status_serde_snake_case() {
    let json = serde_json::to_string(&CaseStatus::Invoicing).unwrap();
    assert_eq!(json, "\"invoicing\"");

    let status: CaseStatus = serde_json::from_str("\"approved\"").unwrap();
    assert_eq!(status, CaseStatus::Approved);
}
