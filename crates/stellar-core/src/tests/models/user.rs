use crate::{DEFAULT_PHOTO, PROVIDER_ID_PREFIX, User};

#[test]
fn test_user_new() {
    let user = User::new("ann@example.com", Some("Ann".to_string()));

    assert_eq!(user.email, "ann@example.com");
    assert_eq!(user.name.as_deref(), Some("Ann"));
    assert_eq!(user.photo.as_deref(), Some(DEFAULT_PHOTO));
    assert_eq!(user.notifications_enabled, Some(true));
    assert!(user.phone.is_none());
    assert!(user.date_of_birth.is_none());
    assert!(!user.is_provider_account());
}

#[test]
fn test_user_new_generates_unique_ids() {
    let a = User::new("a@example.com", None);
    let b = User::new("a@example.com", None);

    assert_ne!(a.id, b.id);
}

#[test]
fn test_user_provider_id_is_namespaced() {
    let user = User::provider("user@gmail.com", Some("Google User".to_string()));

    assert!(user.id.starts_with(PROVIDER_ID_PREFIX));
    assert!(user.is_provider_account());
}

#[test]
fn test_direct_id_never_carries_provider_prefix() {
    let user = User::new("ann@example.com", None);

    assert!(!user.id.starts_with(PROVIDER_ID_PREFIX));
}

#[test]
fn test_notifications_on_defaults_to_true_when_unset() {
    let mut user = User::new("ann@example.com", None);

    assert!(user.notifications_on());

    user.notifications_enabled = None;
    assert!(user.notifications_on());

    user.notifications_enabled = Some(false);
    assert!(!user.notifications_on());
}

#[test]
fn test_user_serialization_round_trip() {
    let user = User::new("ann@example.com", Some("Ann".to_string()));

    let json = serde_json::to_string(&user).unwrap();
    let restored: User = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, user);
}

#[test]
fn test_user_date_of_birth_serializes_as_iso_string() {
    let mut user = User::new("ann@example.com", None);
    user.date_of_birth = chrono::NaiveDate::from_ymd_opt(1990, 4, 12);

    let json = serde_json::to_value(&user).unwrap();

    assert_eq!(json["date_of_birth"], "1990-04-12");
}
