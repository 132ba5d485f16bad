use carepath_core::error::CoreError;
use carepath_core::store_keys;
use uuid::Uuid;

#[test]
fn symptom_check_key_is_scoped_by_user() {
    let id = Uuid::nil();
    let key = store_keys::symptom_check("user_2abc", id).unwrap();
    assert_eq!(
        key,
        "symptom-checks/user_2abc/00000000-0000-0000-0000-000000000000.json"
    );
    assert!(key.starts_with(&store_keys::symptom_checks_prefix("user_2abc").unwrap()));
}

#[test]
fn handles_that_escape_the_prefix_are_rejected() {
    for handle in ["", "a/b", "..", "."] {
        let err = store_keys::symptom_checks_prefix(handle).unwrap_err();
        assert!(matches!(err, CoreError::InvalidUserHandle(_)), "{handle}");
    }
}

#[test]
fn appointment_key_is_scoped_by_user() {
    let id = Uuid::nil();
    let key = store_keys::appointment("user_2abc", id).unwrap();
    assert_eq!(
        key,
        "appointments/user_2abc/00000000-0000-0000-0000-000000000000.json"
    );
    assert!(key.starts_with(&store_keys::appointments_prefix("user_2abc").unwrap()));
    assert!(store_keys::appointment("../x", id).is_err());
}

#[test]
fn facility_and_profile_keys() {
    let id = Uuid::nil();
    assert_eq!(
        store_keys::facility(id),
        "facilities/00000000-0000-0000-0000-000000000000.json"
    );
    assert!(store_keys::facility(id).starts_with(store_keys::FACILITIES_PREFIX));
    assert_eq!(store_keys::profile("user_2abc").unwrap(), "profiles/user_2abc.json");
    assert!(matches!(
        store_keys::profile("a/b"),
        Err(CoreError::InvalidUserHandle(_))
    ));
}
