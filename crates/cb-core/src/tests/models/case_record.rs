use crate::{CaseRecord, CaseStatus, CreatedBy};

use rust_decimal::Decimal;

fn record(id: &str, status: CaseStatus) -> CaseRecord {
    CaseRecord::new(id, status, CreatedBy::Legacy("bob@example.com".to_string()))
}

#[test]
fn test_with_status_returns_new_record() {
    let original = record("C1", CaseStatus::Quotation);
    let updated = original.with_status(CaseStatus::Approved);

    assert_eq!(original.status, CaseStatus::Quotation);
    assert_eq!(updated.status, CaseStatus::Approved);
    assert_eq!(updated.id, original.id);
    assert_eq!(updated.created_by, original.created_by);
}

#[test]
fn test_deserializes_with_missing_optional_fields() {
    let json = r#"{
        "id": "C42",
        "status": "invoicing",
        "created_by": "legacy@example.com"
    }"#;

    let record: CaseRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.id, "C42");
    assert_eq!(record.status, CaseStatus::Invoicing);
    assert_eq!(record.client_name, None);
    assert_eq!(record.grand_total, Decimal::ZERO);
    assert_eq!(record.item_count, 0);
}

#[test]
fn test_deserializes_full_record() {
    let json = r#"{
        "id": "C7",
        "status": "delivery",
        "client_name": "Maria",
        "business_name": "Acme Ltda",
        "grand_total": "1250.50",
        "item_count": 3,
        "created_by": {"email": "ana@example.com", "first_name": "Ana"},
        "lead_time": "2026-09-15"
    }"#;

    let record: CaseRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.status, CaseStatus::Delivery);
    assert_eq!(record.business_name.as_deref(), Some("Acme Ltda"));
    assert_eq!(record.grand_total, Decimal::new(125050, 2));
    assert_eq!(record.item_count, 3);
    assert_eq!(record.lead_time.as_deref(), Some("2026-09-15"));
}
