use redis_reservation::commands::CommandError;

use crate::test_utils::{TestEnv, TestUtils};

#[tokio::test]
async fn test_handle_get_command_missing_key() {
    let env = TestEnv::new();

    env.exec_command_ok(TestUtils::get_command("grape"), &TestUtils::expected_null())
        .await;
}

#[tokio::test]
async fn test_handle_get_command_wrong_data_type() {
    let env = TestEnv::new();

    env.exec_command_ok(
        TestUtils::rpush_command("grape", &["mango"]),
        &TestUtils::expected_integer(1),
    )
    .await;

    env.exec_command_ok(
        TestUtils::hset_command("fruits", "mango", "yellow"),
        &TestUtils::expected_integer(1),
    )
    .await;

    env.exec_command_err(TestUtils::get_command("grape"), CommandError::WrongType)
        .await;
    env.exec_command_err(TestUtils::get_command("fruits"), CommandError::WrongType)
        .await;
}

#[tokio::test]
async fn test_handle_get_command_invalid() {
    let env = TestEnv::new();

    let test_cases = vec![
        TestUtils::command(&["GET"]),
        TestUtils::command(&["GET", "grape", "mango"]),
    ];

    for command in test_cases {
        env.exec_command_err(command, CommandError::InvalidGetCommand)
            .await;
    }
}
