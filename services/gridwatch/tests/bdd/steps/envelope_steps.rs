//! BDD step definitions for the response envelope feature

use cucumber::{given, then, when};
use serde_json::Value;

use crate::world::{GridwatchWorld, Scripted};

#[given(expr = "the server answers {word} with status {int} and body {string}")]
async fn server_answers(world: &mut GridwatchWorld, path: String, status: u16, body: String) {
    world
        .http
        .script(&path, Scripted::Respond { status, body })
        .await;
}

#[given(expr = "the server is unreachable at {word}")]
async fn server_unreachable(world: &mut GridwatchWorld, path: String) {
    world.http.script(&path, Scripted::Unreachable).await;
}

#[when(expr = "the client requests {word}")]
async fn client_requests(world: &mut GridwatchWorld, path: String) {
    world.last_result = Some(world.client().get(&path).await);
}

#[then(expr = "the request should resolve with {string}")]
fn resolves_with(world: &mut GridwatchWorld, expected: String) {
    let expected: Value = serde_json::from_str(&expected).unwrap();
    let result = world.last_result.as_ref().expect("no request made");
    assert_eq!(result.as_ref().unwrap(), &Some(expected));
}

#[then("the request should resolve with no data")]
fn resolves_with_nothing(world: &mut GridwatchWorld) {
    let result = world.last_result.as_ref().expect("no request made");
    assert_eq!(result.as_ref().unwrap(), &None);
}

#[then(expr = "the request should fail with application error {string}")]
fn fails_with_application_error(world: &mut GridwatchWorld, expected: String) {
    let result = world.last_result.as_ref().expect("no request made");
    let err = result.as_ref().unwrap_err();
    assert!(err.is_application(), "expected application error, got {err:?}");
    assert_eq!(err.to_string(), expected);
}

#[then("the request should fail with a transport error")]
fn fails_with_transport_error(world: &mut GridwatchWorld) {
    let result = world.last_result.as_ref().expect("no request made");
    let err = result.as_ref().unwrap_err();
    assert!(err.is_transport(), "expected transport error, got {err:?}");
}
