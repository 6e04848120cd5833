use crate::{Actor, CreatedBy, UserProfile};

#[test]
fn test_created_by_deserializes_legacy_string() {
    let created_by: CreatedBy = serde_json::from_str("\"bob@example.com\"").unwrap();
    assert_eq!(created_by, CreatedBy::Legacy("bob@example.com".to_string()));
    assert_eq!(created_by.email(), "bob@example.com");
    assert_eq!(created_by.display_name(), "bob@example.com");
}

#[test]
fn test_created_by_deserializes_structured_profile() {
    let json = r#"{
        "email": "ana@example.com",
        "first_name": "Ana",
        "last_name": "Silva",
        "avatar_url": null,
        "metadata": {"team": "sales"}
    }"#;

    let created_by: CreatedBy = serde_json::from_str(json).unwrap();
    assert_eq!(created_by.email(), "ana@example.com");
    assert_eq!(created_by.display_name(), "Ana");
}

#[test]
fn test_created_by_display_name_falls_back_to_email() {
    let created_by = CreatedBy::User(UserProfile {
        email: "ana@example.com".to_string(),
        first_name: None,
        last_name: None,
        avatar_url: None,
        metadata: None,
    });
    assert_eq!(created_by.display_name(), "ana@example.com");
}

#[test]
fn test_actor_from_created_by() {
    let legacy = CreatedBy::Legacy("bob@example.com".to_string());
    let actor = Actor::from(&legacy);
    assert_eq!(actor.email, "bob@example.com");
    assert_eq!(actor.first_name, None);

    let user = CreatedBy::User(UserProfile {
        email: "ana@example.com".to_string(),
        first_name: Some("Ana".to_string()),
        last_name: Some("Silva".to_string()),
        avatar_url: Some("https://cdn.example.com/a.png".to_string()),
        metadata: None,
    });
    let actor = Actor::from(&user);
    assert_eq!(actor.email, "ana@example.com");
    assert_eq!(actor.first_name.as_deref(), Some("Ana"));
    assert_eq!(
        actor.avatar_url.as_deref(),
        Some("https://cdn.example.com/a.png")
    );
}
