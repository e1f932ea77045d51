//! BDD step definitions for the session token feature

use cucumber::{given, then, when};

use gridwatch::console::SessionState;
use gridwatch::session::TokenStore;

use crate::world::{GridwatchWorld, Scripted};

#[given("no session token is stored")]
async fn no_token(world: &mut GridwatchWorld) {
    world.tokens.clear_token().await.unwrap();
}

#[given(expr = "the session token {string} is stored")]
async fn token_stored(world: &mut GridwatchWorld, token: String) {
    world.tokens.set_token(&token).await.unwrap();
}

#[when(expr = "the session token is set to {string}")]
async fn token_set(world: &mut GridwatchWorld, token: String) {
    world.tokens.set_token(&token).await.unwrap();
}

#[when("the session token is cleared")]
async fn token_cleared(world: &mut GridwatchWorld) {
    world.tokens.clear_token().await.unwrap();
}

#[when("the user logs out")]
async fn user_logs_out(world: &mut GridwatchWorld) {
    world.console().logout().await.unwrap();
}

#[when(expr = "the user logs in as {string} with password {string}")]
async fn user_logs_in(world: &mut GridwatchWorld, username: String, password: String) {
    world.login_result = Some(world.console().login(&username, &password).await);
}

#[given(expr = "the server accepts the token {string} for user {string}")]
async fn server_accepts_token(world: &mut GridwatchWorld, _token: String, username: String) {
    let body = serde_json::json!({"success": true, "data": {"username": username}});
    world
        .http
        .script(
            "/api/auth/me",
            Scripted::Respond {
                status: 200,
                body: body.to_string(),
            },
        )
        .await;
}

#[given("the server rejects the stored token")]
async fn server_rejects_token(world: &mut GridwatchWorld) {
    world
        .http
        .script(
            "/api/auth/me",
            Scripted::Respond {
                status: 401,
                body: r#"{"success": false, "message": "Token invalid"}"#.to_string(),
            },
        )
        .await;
}

#[when("the session is restored")]
async fn session_restored(world: &mut GridwatchWorld) {
    world.session_state = Some(world.console().restore_session().await.unwrap());
}

#[then(expr = "the stored session token should be {string}")]
async fn token_should_be(world: &mut GridwatchWorld, expected: String) {
    let token = world.tokens.get_token().await.unwrap();
    assert_eq!(token.as_deref(), Some(expected.as_str()));
}

#[then("no session token should be stored")]
async fn token_should_be_absent(world: &mut GridwatchWorld) {
    assert_eq!(world.tokens.get_token().await.unwrap(), None);
}

#[then("the session should be signed out")]
fn session_signed_out(world: &mut GridwatchWorld) {
    assert_eq!(world.session_state, Some(SessionState::SignedOut));
}

#[then(expr = "the session should be signed in as {string}")]
fn session_signed_in(world: &mut GridwatchWorld, username: String) {
    match world.session_state.as_ref().expect("session not restored") {
        SessionState::SignedIn { user: Some(user) } => assert_eq!(user.username, username),
        other => panic!("expected signed in as {}, got {:?}", username, other),
    }
}

#[then(expr = "the login should resolve with {string}")]
fn login_resolves_with(world: &mut GridwatchWorld, expected: String) {
    let expected: serde_json::Value = serde_json::from_str(&expected).unwrap();
    let result = world.login_result.as_ref().expect("no login attempted");
    assert_eq!(result.as_ref().unwrap(), &expected);
}

#[then(expr = "the login should fail with {string}")]
fn login_fails_with(world: &mut GridwatchWorld, expected: String) {
    let result = world.login_result.as_ref().expect("no login attempted");
    let err = result.as_ref().unwrap_err();
    assert_eq!(err.to_string(), expected);
}
