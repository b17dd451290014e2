use redis_reservation::{commands::CommandError, reply::Reply};

use crate::test_utils::{TestEnv, TestUtils};

#[tokio::test]
async fn test_handle_hgetall_command() {
    let env = TestEnv::new();

    for (field, value) in [("mango", "yellow"), ("apple", "red")] {
        env.exec_command_ok(
            TestUtils::hset_command("fruits", field, value),
            &TestUtils::expected_integer(1),
        )
        .await;
    }

    let reply = env
        .exec_command(TestUtils::hgetall_command("fruits"))
        .await
        .unwrap();

    let Reply::Array(elements) = reply else {
        panic!("Expected array reply, got {:?}", reply);
    };

    // field order is unspecified, so compare as pairs
    let mut pairs: Vec<(Reply, Reply)> = elements
        .chunks(2)
        .map(|pair| (pair[0].clone(), pair[1].clone()))
        .collect();
    pairs.sort_by_key(|(field, _)| field.render());

    assert_eq!(
        pairs,
        vec![
            (
                TestUtils::expected_bulk_string("apple"),
                TestUtils::expected_bulk_string("red")
            ),
            (
                TestUtils::expected_bulk_string("mango"),
                TestUtils::expected_bulk_string("yellow")
            ),
        ]
    );
}

#[tokio::test]
async fn test_handle_hgetall_command_missing_key() {
    let env = TestEnv::new();

    env.exec_command_ok(
        TestUtils::hgetall_command("fruits"),
        &TestUtils::expected_bulk_string_array(&[]),
    )
    .await;
}

#[tokio::test]
async fn test_handle_hgetall_command_wrong_data_type() {
    let env = TestEnv::new();

    env.exec_command_ok(
        TestUtils::set_command("fruits", "mango"),
        &TestUtils::expected_simple_string("OK"),
    )
    .await;

    env.exec_command_err(TestUtils::hgetall_command("fruits"), CommandError::WrongType)
        .await;
}

#[tokio::test]
async fn test_handle_hgetall_command_invalid() {
    let env = TestEnv::new();

    env.exec_command_err(
        TestUtils::command(&["HGETALL"]),
        CommandError::InvalidHGetAllCommand,
    )
    .await;
}
