use redis_reservation::commands::CommandError;

use crate::test_utils::{TestEnv, TestUtils};

#[tokio::test]
async fn test_handle_hget_command() {
    let env = TestEnv::new();

    env.exec_command_ok(
        TestUtils::hset_command("fruits", "mango", "yellow"),
        &TestUtils::expected_integer(1),
    )
    .await;

    env.exec_command_ok(
        TestUtils::hget_command("fruits", "mango"),
        &TestUtils::expected_bulk_string("yellow"),
    )
    .await;
}

#[tokio::test]
async fn test_handle_hget_command_missing_key_or_field() {
    let env = TestEnv::new();

    env.exec_command_ok(
        TestUtils::hget_command("fruits", "mango"),
        &TestUtils::expected_null(),
    )
    .await;

    env.exec_command_ok(
        TestUtils::hset_command("fruits", "mango", "yellow"),
        &TestUtils::expected_integer(1),
    )
    .await;

    env.exec_command_ok(
        TestUtils::hget_command("fruits", "apple"),
        &TestUtils::expected_null(),
    )
    .await;
}

#[tokio::test]
async fn test_handle_hget_command_wrong_data_type() {
    let env = TestEnv::new();

    env.exec_command_ok(
        TestUtils::rpush_command("fruits", &["mango"]),
        &TestUtils::expected_integer(1),
    )
    .await;

    env.exec_command_err(
        TestUtils::hget_command("fruits", "mango"),
        CommandError::WrongType,
    )
    .await;
}

#[tokio::test]
async fn test_handle_hget_command_invalid() {
    let env = TestEnv::new();

    env.exec_command_err(
        TestUtils::command(&["HGET", "fruits"]),
        CommandError::InvalidHGetCommand,
    )
    .await;
}
