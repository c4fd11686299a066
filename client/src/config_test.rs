use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |name: &str| map.get(name).cloned()
}

#[test]
fn reads_all_settings() {
    let config = PageConfig::from_lookup(lookup(&[
        ("expenses-user-id", " 42 "),
        ("expenses-api-base", "https://api.example.test/"),
        ("expenses-api-token", "tok"),
    ]));
    assert_eq!(config.user_id.as_deref(), Some("42"));

    let session = config.expense_session().unwrap();
    assert_eq!(session.user_id(), "42");
    assert_eq!(session.base_url(), "https://api.example.test");
    assert_eq!(session.authorization().as_deref(), Some("Token tok"));
}

#[test]
fn defaults_to_same_origin_without_token() {
    let config = PageConfig::from_lookup(lookup(&[("expenses-user-id", "7")]));
    let session = config.expense_session().unwrap();
    assert_eq!(session.url("/incomes/"), "/incomes/");
    assert!(session.token().is_none());
}

#[test]
fn missing_user_id_is_an_error_for_expenses_only() {
    let config = PageConfig::from_lookup(lookup(&[("expenses-user-id", "   "), ("expenses-api-token", "tok")]));
    assert_eq!(config.expense_session(), Err(ConfigError::Missing("expenses-user-id")));
    assert_eq!(config.income_session().token(), Some("tok"));
}

#[test]
fn error_message_names_setting() {
    assert_eq!(ConfigError::Missing("expenses-user-id").to_string(), "missing page setting `expenses-user-id`");
}
