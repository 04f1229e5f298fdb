use stellar_core::User;

/// A fully populated user record for round-trip tests
pub fn sample_user() -> User {
    let mut user = User::new("ann@example.com", Some("Ann".to_string()));
    user.phone = Some("555-1111".to_string());
    user.date_of_birth = chrono::NaiveDate::from_ymd_opt(1990, 4, 12);
    user
}
