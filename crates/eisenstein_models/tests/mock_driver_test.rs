// Tests using MockDriver.
//
// These tests validate driver-facing behavior without making real API
// calls, using a scripted mock for fast, deterministic testing.

mod test_utils;

use eisenstein_error::GeminiErrorKind;
use eisenstein_interface::EisensteinDriver;
use test_utils::{MockDriver, MockResponse, create_test_request};

#[tokio::test]
async fn test_mock_basic_generate() -> anyhow::Result<()> {
    let mock = MockDriver::new_success("Hello from mock!");

    let request = create_test_request("Say hello", None, Some(10));
    let response = mock.generate(&request).await?;

    assert_eq!(response.text(), "Hello from mock!");
    assert_eq!(mock.call_count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_mock_multiple_requests() -> anyhow::Result<()> {
    let mock = MockDriver::new_success("Response");

    let request = create_test_request("Test", None, Some(10));

    let _response1 = mock.generate(&request).await?;
    assert_eq!(mock.call_count(), 1);

    let _response2 = mock.generate(&request).await?;
    assert_eq!(mock.call_count(), 2);

    let _response3 = mock.generate(&request).await?;
    assert_eq!(mock.call_count(), 3);
    Ok(())
}

#[tokio::test]
async fn test_mock_error_503() -> anyhow::Result<()> {
    let mock = MockDriver::new_error(GeminiErrorKind::HttpError {
        status_code: 503,
        message: "Model is overloaded".to_string(),
    });

    let request = create_test_request("Test", None, Some(10));
    let result = mock.generate(&request).await;

    assert!(result.is_err());
    assert_eq!(mock.call_count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_mock_fail_then_succeed() -> anyhow::Result<()> {
    let mock = MockDriver::new_fail_then_succeed(
        2,
        GeminiErrorKind::HttpError {
            status_code: 503,
            message: "Service unavailable".to_string(),
        },
        "Success after failures",
    );

    let request = create_test_request("Test", None, Some(10));

    // First two calls fail; the pipeline does not retry, so each failure
    // is a separate user action here.
    assert!(mock.generate(&request).await.is_err());
    assert!(mock.generate(&request).await.is_err());

    let response = mock.generate(&request).await?;
    assert_eq!(response.text(), "Success after failures");
    assert_eq!(mock.call_count(), 3);
    Ok(())
}

#[tokio::test]
async fn test_mock_sequence_mixed_responses() -> anyhow::Result<()> {
    let mock = MockDriver::new_sequence(vec![
        MockResponse::Success("First response".to_string()),
        MockResponse::Error(GeminiErrorKind::EmptyResponse),
        MockResponse::Success("Third response".to_string()),
    ]);

    let request = create_test_request("Test", None, Some(10));

    let response1 = mock.generate(&request).await?;
    assert_eq!(response1.text(), "First response");

    assert!(mock.generate(&request).await.is_err());

    let response3 = mock.generate(&request).await?;
    assert_eq!(response3.text(), "Third response");

    assert_eq!(mock.call_count(), 3);
    Ok(())
}

#[tokio::test]
async fn test_mock_timeout_error() -> anyhow::Result<()> {
    let mock = MockDriver::new_error(GeminiErrorKind::Timeout(120));

    let request = create_test_request("Test", None, Some(10));
    let result = mock.generate(&request).await;

    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(format!("{}", err).contains("timed out"));
    Ok(())
}

#[tokio::test]
async fn test_mock_provider_name() {
    let mock = MockDriver::new_success("test");
    assert_eq!(mock.provider_name(), "mock-gemini");
}

#[tokio::test]
async fn test_mock_model_name() {
    let mock = MockDriver::new_success("test");
    assert_eq!(mock.model_name(), "mock-gemini");
}
