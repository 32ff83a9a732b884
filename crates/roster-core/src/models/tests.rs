use super::*;
use serde_json::json;

#[test]
fn user_decodes_wire_names() {
    let user: User = serde_json::from_value(json!({
        "id": 5,
        "login": "bob",
        "email": "bob@example.com",
        "freeText": "Bob",
        "locked": true,
        "expirationDate": "2030-01-01T00:00:00Z",
        "roles": [1, 3],
        "certificateThumbprint": "abc"
    }))
    .expect("decode user");

    assert_eq!(user.id, Some(UserId(5)));
    assert_eq!(user.login, "bob");
    assert_eq!(user.free_text.as_deref(), Some("Bob"));
    assert!(user.locked);
    assert_eq!(user.roles, vec![RoleId(1), RoleId(3)]);
    assert_eq!(user.extra.get("certificateThumbprint"), Some(&json!("abc")));
}

#[test]
fn new_user_payload_has_no_id() {
    let mut user = User::new("alice");
    user.password = Some("secret".to_string());
    let value = serde_json::to_value(&user).expect("encode user");

    assert!(value.get("id").is_none());
    assert_eq!(value["login"], json!("alice"));
    assert_eq!(value["password"], json!("secret"));
    assert_eq!(value["roles"], json!([]));
}

#[test]
fn unknown_fields_survive_update_payload() {
    let user: User = serde_json::from_value(json!({
        "id": 9,
        "login": "carol",
        "internal": true,
        "customFlag": 42
    }))
    .expect("decode user");
    let value = serde_json::to_value(&user).expect("encode user");

    assert_eq!(value["id"], json!(9));
    assert_eq!(value["internal"], json!(true));
    assert_eq!(value["customFlag"], json!(42));
}

#[test]
fn role_decodes_with_optional_fields() {
    let role: Role = serde_json::from_value(json!({ "id": 2, "name": "administrator" }))
        .expect("decode role");

    assert_eq!(role.id, RoleId(2));
    assert_eq!(role.name, "administrator");
    assert!(role.description.is_none());
    assert!(role.permissions.is_empty());
}

#[test]
fn ids_parse_and_display() {
    assert_eq!("42".parse::<UserId>().expect("parse id"), UserId(42));
    assert_eq!(UserId(7).to_string(), "7");
    assert!("x".parse::<UserId>().is_err());
}
