/// Unit tests for environment configuration resolution
use std::collections::HashMap;

use habitica_mcp::{Config, ConfigError, ErrorDetail, Language, ToolName, HABITICA_API_BASE};

fn resolve(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::resolve(|key| map.get(key).cloned())
}

#[test]
fn missing_user_id_is_a_credentials_error() {
    let err = resolve(&[("HABITICA_API_TOKEN", "token")]).unwrap_err();
    assert!(matches!(err, ConfigError::MissingCredentials));
}

#[test]
fn missing_token_is_a_credentials_error() {
    let err = resolve(&[("HABITICA_USER_ID", "user")]).unwrap_err();
    assert!(matches!(err, ConfigError::MissingCredentials));
}

#[test]
fn empty_credentials_count_as_missing() {
    let err = resolve(&[("HABITICA_USER_ID", ""), ("HABITICA_API_TOKEN", "token")]).unwrap_err();
    assert!(matches!(err, ConfigError::MissingCredentials));
}

#[test]
fn defaults_apply_when_only_credentials_are_set() {
    let config = resolve(&[
        ("HABITICA_USER_ID", "user"),
        ("HABITICA_API_TOKEN", "token"),
    ])
    .unwrap();

    assert_eq!(config.user_id, "user");
    assert_eq!(config.api_token, "token");
    assert_eq!(config.api_base, HABITICA_API_BASE);
    assert_eq!(config.language, Language::English);
    assert_eq!(config.error_detail, ErrorDetail::Detailed);
    assert!(!config.startup_probe);
    assert!(config.tools.enabled(ToolName::GetTasks));
    assert!(!config.tools.enabled(ToolName::GetStats));
}

#[test]
fn mcp_lang_zh_cn_selects_chinese() {
    let config = resolve(&[
        ("HABITICA_USER_ID", "user"),
        ("HABITICA_API_TOKEN", "token"),
        ("MCP_LANG", "zh-CN"),
    ])
    .unwrap();
    assert_eq!(config.language, Language::Chinese);
}

#[test]
fn lang_variable_is_a_fallback_only() {
    let config = resolve(&[
        ("HABITICA_USER_ID", "user"),
        ("HABITICA_API_TOKEN", "token"),
        ("LANG", "zh_CN.UTF-8"),
    ])
    .unwrap();
    assert_eq!(config.language, Language::Chinese);

    let config = resolve(&[
        ("HABITICA_USER_ID", "user"),
        ("HABITICA_API_TOKEN", "token"),
        ("MCP_LANG", "en"),
        ("LANG", "zh_CN.UTF-8"),
    ])
    .unwrap();
    assert_eq!(config.language, Language::English);
}

#[test]
fn error_detail_can_be_set_to_generic() {
    let config = resolve(&[
        ("HABITICA_USER_ID", "user"),
        ("HABITICA_API_TOKEN", "token"),
        ("HABITICA_ERROR_DETAIL", "generic"),
    ])
    .unwrap();
    assert_eq!(config.error_detail, ErrorDetail::Generic);
}

#[test]
fn unknown_error_detail_is_rejected() {
    let err = resolve(&[
        ("HABITICA_USER_ID", "user"),
        ("HABITICA_API_TOKEN", "token"),
        ("HABITICA_ERROR_DETAIL", "chatty"),
    ])
    .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidErrorDetail(value) if value == "chatty"));
}

#[test]
fn habitica_tools_overrides_the_enablement_set() {
    let config = resolve(&[
        ("HABITICA_USER_ID", "user"),
        ("HABITICA_API_TOKEN", "token"),
        ("HABITICA_TOOLS", "get_stats, get_user_profile"),
    ])
    .unwrap();

    assert!(config.tools.enabled(ToolName::GetStats));
    assert!(config.tools.enabled(ToolName::GetUserProfile));
    assert!(!config.tools.enabled(ToolName::GetTasks));
}

#[test]
fn unknown_tool_in_the_list_is_rejected() {
    let err = resolve(&[
        ("HABITICA_USER_ID", "user"),
        ("HABITICA_API_TOKEN", "token"),
        ("HABITICA_TOOLS", "get_tasks,launch_quest"),
    ])
    .unwrap_err();
    assert!(matches!(err, ConfigError::UnknownTool(name) if name == "launch_quest"));
}

#[test]
fn startup_probe_accepts_truthy_values() {
    for value in ["1", "true", "yes", "TRUE"] {
        let config = resolve(&[
            ("HABITICA_USER_ID", "user"),
            ("HABITICA_API_TOKEN", "token"),
            ("HABITICA_STARTUP_PROBE", value),
        ])
        .unwrap();
        assert!(config.startup_probe, "value: {value}");
    }

    let config = resolve(&[
        ("HABITICA_USER_ID", "user"),
        ("HABITICA_API_TOKEN", "token"),
        ("HABITICA_STARTUP_PROBE", "0"),
    ])
    .unwrap();
    assert!(!config.startup_probe);
}
