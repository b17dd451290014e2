use redis_reservation::commands::CommandError;

use crate::test_utils::{TestEnv, TestUtils};

#[tokio::test]
async fn test_handle_rpush_command() {
    let env = TestEnv::new();

    let test_cases = vec![
        (TestUtils::rpush_command("grape", &["mango"]), 1),
        (TestUtils::rpush_command("grape", &["raspberry", "apple"]), 3),
        (TestUtils::rpush_command("grape", &["pear"]), 4),
    ];

    for (command, expected_length) in test_cases {
        env.exec_command_ok(command, &TestUtils::expected_integer(expected_length))
            .await;
    }
}

#[tokio::test]
async fn test_handle_rpush_command_wrong_data_type() {
    let env = TestEnv::new();

    env.exec_command_ok(
        TestUtils::hset_command("grape", "mango", "yellow"),
        &TestUtils::expected_integer(1),
    )
    .await;

    env.exec_command_err(
        TestUtils::rpush_command("grape", &["apple"]),
        CommandError::WrongType,
    )
    .await;
}

#[tokio::test]
async fn test_handle_rpush_command_invalid() {
    let env = TestEnv::new();

    let test_cases = vec![
        TestUtils::command(&["RPUSH"]),
        TestUtils::command(&["RPUSH", "grape"]),
    ];

    for command in test_cases {
        env.exec_command_err(command, CommandError::InvalidRPushCommand)
            .await;
    }
}
