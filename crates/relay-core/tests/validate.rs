use relay_core::validate::require_message;
use relay_core::{ConversationHistory, CoreError, Turn, TurnInput};

fn input(role: Option<&str>, content: Option<&str>) -> TurnInput {
    TurnInput {
        role: role.map(str::to_string),
        content: content.map(str::to_string),
    }
}

#[test]
fn well_formed_inputs_are_accepted_in_order() {
    let history = ConversationHistory::from_inputs(vec![
        input(Some("user"), Some("Hi")),
        input(Some("assistant"), Some("Hello!")),
    ])
    .unwrap();

    assert_eq!(
        history.turns(),
        &[Turn::user("Hi"), Turn::assistant("Hello!")]
    );
}

#[test]
fn system_role_is_rejected_not_coerced() {
    let err = ConversationHistory::from_inputs(vec![
        input(Some("user"), Some("Hi")),
        input(Some("system"), Some("Be terse.")),
    ])
    .unwrap_err();

    assert_eq!(
        err,
        CoreError::MalformedTurn {
            index: 1,
            reason: "unknown role \"system\"".to_string(),
        }
    );
}

#[test]
fn role_matching_is_case_sensitive() {
    let err = ConversationHistory::from_inputs(vec![input(Some("User"), Some("Hi"))]).unwrap_err();
    assert!(matches!(err, CoreError::MalformedTurn { index: 0, .. }));
}

#[test]
fn missing_role_is_malformed() {
    let err = ConversationHistory::from_inputs(vec![input(None, Some("Hi"))]).unwrap_err();
    assert_eq!(
        err,
        CoreError::MalformedTurn {
            index: 0,
            reason: "missing role".to_string(),
        }
    );
}

#[test]
fn missing_content_is_malformed() {
    let err = ConversationHistory::from_inputs(vec![
        input(Some("user"), Some("Hi")),
        input(Some("assistant"), Some("Hello!")),
        input(Some("user"), None),
    ])
    .unwrap_err();

    assert_eq!(
        err,
        CoreError::MalformedTurn {
            index: 2,
            reason: "missing content".to_string(),
        }
    );
}

#[test]
fn empty_content_is_allowed() {
    let history = ConversationHistory::from_inputs(vec![input(Some("user"), Some(""))]).unwrap();
    assert_eq!(history.turns(), &[Turn::user("")]);
}

#[test]
fn null_fields_decode_as_missing() {
    let inputs: Vec<TurnInput> =
        serde_json::from_str(r#"[{"role": "user", "content": null}]"#).unwrap();
    let err = ConversationHistory::from_inputs(inputs).unwrap_err();
    assert!(matches!(err, CoreError::MalformedTurn { index: 0, .. }));
}

#[test]
fn absent_message_fails_fast() {
    assert_eq!(require_message(None), Err(CoreError::MissingMessage));
}

#[test]
fn empty_message_is_present() {
    assert_eq!(require_message(Some(String::new())), Ok(String::new()));
}
