use crate::{CoreError, User, UserPatch};

#[test]
fn test_empty_patch_changes_nothing() {
    let original = User::new("ann@example.com", Some("Ann".to_string()));
    let mut user = original.clone();

    let patch = UserPatch::default();
    assert!(patch.is_empty());

    patch.apply(&mut user);
    assert_eq!(user, original);
}

#[test]
fn test_present_fields_overwrite_absent_fields_survive() {
    let mut user = User::new("ann@example.com", Some("Ann".to_string()));

    let patch = UserPatch {
        phone: Some("555-1111".to_string()),
        ..Default::default()
    };
    patch.apply(&mut user);

    assert_eq!(user.phone.as_deref(), Some("555-1111"));
    assert_eq!(user.name.as_deref(), Some("Ann"));
    assert_eq!(user.email, "ann@example.com");
}

#[test]
fn test_patch_never_touches_id() {
    let mut user = User::new("ann@example.com", None);
    let id = user.id.clone();

    let patch = UserPatch {
        email: Some("new@example.com".to_string()),
        name: Some("New Name".to_string()),
        ..Default::default()
    };
    patch.apply(&mut user);

    assert_eq!(user.id, id);
    assert_eq!(user.email, "new@example.com");
}

#[test]
fn test_with_date_of_birth_str_parses_iso_date() {
    let patch = UserPatch::default()
        .with_date_of_birth_str("1990-04-12")
        .unwrap();

    assert_eq!(
        patch.date_of_birth,
        chrono::NaiveDate::from_ymd_opt(1990, 4, 12)
    );
    assert!(!patch.is_empty());
}

#[test]
fn test_with_date_of_birth_str_rejects_garbage() {
    let result = UserPatch::default().with_date_of_birth_str("not-a-date");

    assert!(matches!(result, Err(CoreError::InvalidDate { .. })));
}

#[test]
fn test_patch_serialization_skips_absent_fields() {
    let patch = UserPatch {
        notifications_enabled: Some(false),
        ..Default::default()
    };

    let json = serde_json::to_value(&patch).unwrap();
    let object = json.as_object().unwrap();

    assert_eq!(object.len(), 1);
    assert_eq!(json["notifications_enabled"], false);
}
