use redis_reservation::commands::CommandError;

use crate::test_utils::{TestEnv, TestUtils};

#[tokio::test]
async fn test_handle_type_command_string() {
    let env = TestEnv::new();

    env.exec_command_ok(
        TestUtils::set_command("grape", "mango"),
        &TestUtils::expected_simple_string("OK"),
    )
    .await;

    env.exec_command_ok(
        TestUtils::type_command("grape"),
        &TestUtils::expected_simple_string("string"),
    )
    .await;
}

#[tokio::test]
async fn test_handle_type_command_hash() {
    let env = TestEnv::new();

    env.exec_command_ok(
        TestUtils::hset_command("fruits", "mango", "yellow"),
        &TestUtils::expected_integer(1),
    )
    .await;

    env.exec_command_ok(
        TestUtils::type_command("fruits"),
        &TestUtils::expected_simple_string("hash"),
    )
    .await;
}

#[tokio::test]
async fn test_handle_type_command_list() {
    let env = TestEnv::new();

    env.exec_command_ok(
        TestUtils::rpush_command("grape", &["mango", "raspberry", "apple"]),
        &TestUtils::expected_integer(3),
    )
    .await;

    env.exec_command_ok(
        TestUtils::type_command("grape"),
        &TestUtils::expected_simple_string("list"),
    )
    .await;
}

#[tokio::test]
async fn test_handle_type_command_missing_key() {
    let env = TestEnv::new();

    env.exec_command_ok(
        TestUtils::type_command("grape"),
        &TestUtils::expected_simple_string("none"),
    )
    .await;
}

#[tokio::test]
async fn test_handle_type_command_invalid() {
    let env = TestEnv::new();

    env.exec_command_err(
        TestUtils::command(&["TYPE"]),
        CommandError::InvalidTypeCommand,
    )
    .await;
}
