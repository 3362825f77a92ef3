/// End-to-end dispatch tests through the protocol layer
use habitica_mcp::mcp::protocol::error_codes;
use habitica_mcp::{ErrorDetail, Language, ToolSet};
use mockito::Matcher;
use serde_json::json;

use super::{call_tool, result_text, send_request, test_server, test_server_with};

// A base URL no test ever connects to, for tests that must not hit the wire.
const UNREACHABLE: &str = "http://127.0.0.1:9";

#[tokio::test]
async fn tools_list_returns_enabled_tools_in_catalog_order() {
    let mut server = test_server_with(UNREACHABLE, |c| c.tools = ToolSet::standard());
    let response = send_request(&mut server, "tools/list", None).await;

    let result = response.result.expect("tools/list result");
    let names: Vec<&str> = result["tools"]
        .as_array()
        .expect("tools array")
        .iter()
        .map(|tool| tool["name"].as_str().unwrap())
        .collect();

    assert_eq!(
        names,
        vec![
            "get_tasks",
            "create_task",
            "score_task",
            "update_task",
            "delete_task",
            "get_tags",
            "create_tag",
            "add_checklist_item",
            "update_checklist_item",
            "delete_checklist_item",
            "get_task_checklist",
            "score_checklist_item",
        ]
    );
}

#[tokio::test]
async fn tools_list_advertises_the_whole_catalog_when_everything_is_enabled() {
    let mut server = test_server(UNREACHABLE);
    let response = send_request(&mut server, "tools/list", None).await;
    let result = response.result.expect("tools/list result");
    assert_eq!(result["tools"].as_array().unwrap().len(), 26);
}

#[tokio::test]
async fn disabled_tools_are_method_not_found() {
    let mut server = test_server_with(UNREACHABLE, |c| c.tools = ToolSet::standard());
    let response = call_tool(&mut server, "get_stats", json!({})).await;

    let error = response.error.expect("expected an error");
    assert_eq!(error.code, error_codes::METHOD_NOT_FOUND);
    assert!(error.message.contains("disabled"));
}

#[tokio::test]
async fn unknown_tools_are_method_not_found() {
    let mut server = test_server(UNREACHABLE);
    let response = call_tool(&mut server, "summon_dragon", json!({})).await;

    let error = response.error.expect("expected an error");
    assert_eq!(error.code, error_codes::METHOD_NOT_FOUND);
    assert!(error.message.contains("summon_dragon"));
}

#[tokio::test]
async fn undecodable_arguments_are_invalid_params() {
    let mut server = test_server(UNREACHABLE);
    let response = call_tool(&mut server, "score_task", json!({})).await;

    let error = response.error.expect("expected an error");
    assert_eq!(error.code, error_codes::INVALID_PARAMS);
    assert!(error.message.contains("taskId"));
}

#[tokio::test]
async fn get_tasks_without_filter_hits_the_bare_collection() {
    let mut habitica = mockito::Server::new_async().await;
    let mock = habitica
        .mock("GET", "/tasks/user")
        .match_query(Matcher::Exact(String::new()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "success": true, "data": [] }).to_string())
        .create_async()
        .await;

    let mut server = test_server(&habitica.url());
    let response = call_tool(&mut server, "get_tasks", json!({})).await;

    assert!(response.error.is_none());
    mock.assert_async().await;
}

#[tokio::test]
async fn get_tasks_with_a_type_sends_the_query_parameter() {
    let mut habitica = mockito::Server::new_async().await;
    let mock = habitica
        .mock("GET", "/tasks/user")
        .match_query(Matcher::UrlEncoded("type".into(), "habits".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "success": true, "data": [] }).to_string())
        .create_async()
        .await;

    let mut server = test_server(&habitica.url());
    let response = call_tool(&mut server, "get_tasks", json!({ "type": "habits" })).await;

    assert!(response.error.is_none());
    mock.assert_async().await;
}

#[tokio::test]
async fn create_task_reports_the_new_task_id() {
    let mut habitica = mockito::Server::new_async().await;
    let mock = habitica
        .mock("POST", "/tasks/user")
        .match_body(Matcher::PartialJson(json!({
            "type": "todo",
            "text": "Read a book"
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "success": true,
                "data": { "id": "task-42", "text": "Read a book", "type": "todo" }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let mut server = test_server(&habitica.url());
    let response = call_tool(
        &mut server,
        "create_task",
        json!({ "type": "todo", "text": "Read a book" }),
    )
    .await;

    let text = result_text(&response);
    assert!(text.contains("Read a book"));
    assert!(text.contains("task-42"));
    mock.assert_async().await;
}

#[tokio::test]
async fn score_task_defaults_to_up_and_summarizes_rewards() {
    let mut habitica = mockito::Server::new_async().await;
    let mock = habitica
        .mock("POST", "/tasks/task-1/score/up")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "success": true,
                "data": { "exp": 12.5, "gp": 3.5, "lvl": 0 }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let mut server = test_server(&habitica.url());
    let response = call_tool(&mut server, "score_task", json!({ "taskId": "task-1" })).await;

    let text = result_text(&response);
    assert!(text.contains("12.5"));
    assert!(text.contains("3.5"));
    assert!(!text.contains("Level up"));
    mock.assert_async().await;
}

#[tokio::test]
async fn task_not_found_is_an_actionable_invalid_params_error() {
    let mut habitica = mockito::Server::new_async().await;
    let _mock = habitica
        .mock("POST", "/tasks/missing-task/score/up")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "success": false,
                "error": "TaskNotFound",
                "message": "Task not found."
            })
            .to_string(),
        )
        .create_async()
        .await;

    let mut server = test_server(&habitica.url());
    let response = call_tool(&mut server, "score_task", json!({ "taskId": "missing-task" })).await;

    let error = response.error.expect("expected an error");
    assert_eq!(error.code, error_codes::INVALID_PARAMS);
    assert!(error.message.contains("missing-task"));
    assert!(error.message.contains("get_tasks"));
}

#[tokio::test]
async fn not_enough_gold_is_an_invalid_request_error() {
    let mut habitica = mockito::Server::new_async().await;
    let _mock = habitica
        .mock("POST", "/user/buy/armor")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "success": false,
                "error": "messageNotEnoughGold",
                "message": "Not enough gold."
            })
            .to_string(),
        )
        .create_async()
        .await;

    let mut server = test_server(&habitica.url());
    let response = call_tool(&mut server, "buy_reward", json!({ "key": "armor" })).await;

    let error = response.error.expect("expected an error");
    assert_eq!(error.code, error_codes::INVALID_REQUEST);
    assert!(error.message.contains("gold"));
}

#[tokio::test]
async fn generic_detail_collapses_vendor_errors() {
    let mut habitica = mockito::Server::new_async().await;
    let _mock = habitica
        .mock("POST", "/user/buy/armor")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "success": false,
                "error": "messageNotEnoughGold",
                "message": "Not enough gold."
            })
            .to_string(),
        )
        .create_async()
        .await;

    let mut server =
        test_server_with(&habitica.url(), |c| c.error_detail = ErrorDetail::Generic);
    let response = call_tool(&mut server, "buy_reward", json!({ "key": "armor" })).await;

    let error = response.error.expect("expected an error");
    assert_eq!(error.code, error_codes::INTERNAL_ERROR);
    assert!(error.message.contains("Habitica API error"));
    assert!(error.message.contains("Not enough gold."));
}

#[tokio::test]
async fn buy_item_defaults_to_one_and_reports_remaining_gold() {
    let mut habitica = mockito::Server::new_async().await;
    let mock = habitica
        .mock("POST", "/user/buy/potion")
        .match_body(Matcher::PartialJson(json!({ "quantity": 1 })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "success": true, "data": { "gp": 10.0 } }).to_string())
        .create_async()
        .await;

    let mut server = test_server(&habitica.url());
    let response = call_tool(&mut server, "buy_item", json!({ "itemKey": "potion" })).await;

    let text = result_text(&response);
    assert!(text.contains("potion x1"));
    assert!(text.contains("10.0"));
    mock.assert_async().await;
}

#[tokio::test]
async fn checklist_item_round_trips_through_add_and_list() {
    let mut habitica = mockito::Server::new_async().await;
    let task = json!({
        "success": true,
        "data": {
            "id": "task-1",
            "text": "Groceries",
            "checklist": [
                { "id": "item-9", "text": "Buy milk", "completed": false }
            ]
        }
    });
    let add = habitica
        .mock("POST", "/tasks/task-1/checklist")
        .match_body(Matcher::PartialJson(json!({ "text": "Buy milk" })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(task.to_string())
        .create_async()
        .await;
    let get = habitica
        .mock("GET", "/tasks/task-1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(task.to_string())
        .create_async()
        .await;

    let mut server = test_server(&habitica.url());

    let response = call_tool(
        &mut server,
        "add_checklist_item",
        json!({ "taskId": "task-1", "text": "Buy milk" }),
    )
    .await;
    let text = result_text(&response);
    assert!(text.contains("Buy milk"));
    assert!(text.contains("item-9"));

    let response = call_tool(
        &mut server,
        "get_task_checklist",
        json!({ "taskId": "task-1" }),
    )
    .await;
    let text = result_text(&response);
    assert!(text.contains("Task: Groceries"));
    assert!(text.contains("○ Buy milk (ID: item-9)"));

    add.assert_async().await;
    get.assert_async().await;
}

#[tokio::test]
async fn connection_failures_are_internal_errors() {
    // Nothing listens on the base URL, so the request fails at connect time.
    let mut server = test_server("http://127.0.0.1:1");
    let response = call_tool(&mut server, "get_tags", json!({})).await;

    let error = response.error.expect("expected an error");
    assert_eq!(error.code, error_codes::INTERNAL_ERROR);
    assert!(error.message.contains("get_tags"));
}

#[tokio::test]
async fn chinese_language_selects_translated_messages() {
    let mut server = test_server_with(UNREACHABLE, |c| {
        c.language = Language::Chinese;
        c.tools = ToolSet::standard();
    });
    let response = call_tool(&mut server, "get_stats", json!({})).await;

    let error = response.error.expect("expected an error");
    assert_eq!(error.code, error_codes::METHOD_NOT_FOUND);
    assert!(error.message.contains("禁用"));
}
