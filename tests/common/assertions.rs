//! Domain-specific assertion macros for the retina harnesses.
//!
//! These wrap the error matching boilerplate and print the actual value on
//! failure, so it is clear which error class a call produced instead.

use retina::{ApiRequest, Client};

use super::recording_transport::RecordingTransport;

/// Assert that a result is an `Error::Argument`.
///
/// ```rust
/// assert_argument_error!(client.fingerprints_for_expressions(&[] as &[Model]));
/// ```
#[macro_export]
macro_rules! assert_argument_error {
    ($result:expr) => {{
        match $result {
            Err(retina::Error::Argument(_)) => {}
            Err(other) => panic!("assert_argument_error! failed: got a different error: {other:?}"),
            Ok(_) => panic!("assert_argument_error! failed: call succeeded"),
        }
    }};
}

/// Assert that a result is an `Error::Configuration`.
#[macro_export]
macro_rules! assert_configuration_error {
    ($result:expr) => {{
        match $result {
            Err(retina::Error::Configuration(_)) => {}
            Err(other) => {
                panic!("assert_configuration_error! failed: got a different error: {other:?}")
            }
            Ok(_) => panic!("assert_configuration_error! failed: construction succeeded"),
        }
    }};
}

/// Assert that a result is `Error::Remote` wrapping exactly `$expected`.
#[macro_export]
macro_rules! assert_remote_error {
    ($result:expr, $expected:expr) => {{
        let expected: retina::RemoteError = $expected;
        match $result {
            Err(retina::Error::Remote(actual)) => pretty_assertions::assert_eq!(actual, expected),
            Err(other) => panic!("assert_remote_error! failed: got a different error: {other:?}"),
            Ok(_) => panic!("assert_remote_error! failed: call succeeded"),
        }
    }};
}

/// Assert that the client never reached its transport.
pub fn assert_no_calls(client: &Client<RecordingTransport>) {
    let calls = client.transport().calls();
    assert_eq!(calls, 0, "expected no transport calls, saw {calls}");
}

/// Assert that a request's body is exactly `expected`.
pub fn assert_body(request: &ApiRequest, expected: &str) {
    pretty_assertions::assert_eq!(request.body.as_deref(), Some(expected));
}
