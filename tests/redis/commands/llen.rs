use redis_reservation::commands::CommandError;

use crate::test_utils::{TestEnv, TestUtils};

#[tokio::test]
async fn test_handle_llen_command() {
    let env = TestEnv::new();

    env.exec_command_ok(
        TestUtils::rpush_command("grape", &["mango", "raspberry", "apple"]),
        &TestUtils::expected_integer(3),
    )
    .await;

    env.exec_command_ok(TestUtils::llen_command("grape"), &TestUtils::expected_integer(3))
        .await;
}

#[tokio::test]
async fn test_handle_llen_command_not_found() {
    let env = TestEnv::new();

    env.exec_command_ok(TestUtils::llen_command("grape"), &TestUtils::expected_integer(0))
        .await;
}

#[tokio::test]
async fn test_handle_llen_command_wrong_data_type() {
    let env = TestEnv::new();

    env.exec_command_ok(
        TestUtils::set_command("grape", "mango"),
        &TestUtils::expected_simple_string("OK"),
    )
    .await;

    env.exec_command_err(TestUtils::llen_command("grape"), CommandError::WrongType)
        .await;
}

#[tokio::test]
async fn test_handle_llen_command_invalid() {
    let env = TestEnv::new();

    let test_cases = vec![
        TestUtils::command(&["LLEN"]),
        TestUtils::command(&["LLEN", "grape", "mango"]),
    ];

    for command in test_cases {
        env.exec_command_err(command, CommandError::InvalidLLenCommand)
            .await;
    }
}
