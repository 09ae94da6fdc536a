/*!
 * Integration tests for the OpenAI client against a loopback HTTP stub
 *
 * Each stub accepts a single connection, reads one request and answers with
 * a canned response (or never answers, to force a client timeout).
 */

use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use quotescope::app_config::ExplanationConfig;
use quotescope::errors::ProviderError;
use quotescope::explanation::{API_ERROR_FALLBACK, ExplanationOutcome, ExplanationRequester, TIMEOUT_FALLBACK};
use quotescope::providers::Provider;
use quotescope::providers::openai::{OpenAI, OpenAIRequest};
use quotescope::quote::Quote;

const SUCCESS_BODY: &str = r#"{"choices":[{"index":0,"message":{"role":"assistant","content":"  Douglass means that literacy is the path to freedom.  "},"finish_reason":"stop"}],"usage":{"prompt_tokens":42,"completion_tokens":11,"total_tokens":53}}"#;

const UNAUTHORIZED_BODY: &str = r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error","code":"invalid_api_key"}}"#;

/// Read one HTTP request (headers plus Content-Length body) from the socket
async fn read_request(socket: &mut TcpStream) -> Vec<u8> {
    let mut request = Vec::new();
    let mut buffer = [0u8; 4096];

    loop {
        let read = match socket.read(&mut buffer).await {
            Ok(0) | Err(_) => return request,
            Ok(n) => n,
        };
        request.extend_from_slice(&buffer[..read]);

        let Some(header_end) = request.windows(4).position(|w| w == b"\r\n\r\n") else {
            continue;
        };
        let headers = String::from_utf8_lossy(&request[..header_end]).to_lowercase();
        let content_length = headers
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|value| value.trim().parse::<usize>().ok())
            .unwrap_or(0);

        if request.len() >= header_end + 4 + content_length {
            return request;
        }
    }
}

/// Serve one request with the given status line and JSON body; returns the base URL
async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();

    tokio::spawn(async move {
        if let Ok((mut socket, _)) = listener.accept().await {
            read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    format!("http://{}/v1", address)
}

/// Accept one request and never answer it
async fn serve_silently() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();

    tokio::spawn(async move {
        if let Ok((mut socket, _)) = listener.accept().await {
            read_request(&mut socket).await;
            tokio::time::sleep(Duration::from_secs(10)).await;
        }
    });

    format!("http://{}/v1", address)
}

fn sample_request() -> OpenAIRequest {
    OpenAIRequest::new("gpt-3.5-turbo")
        .add_message("system", "You are a helpful literature assistant.")
        .add_message("user", "Explain: \"Knowledge is the pathway from slavery to freedom.\"")
        .temperature(0.7)
        .max_tokens(300)
}

fn requester_for(endpoint: String, timeout_secs: u64) -> ExplanationRequester<OpenAI> {
    let mut settings = ExplanationConfig::default();
    settings.endpoint = endpoint.clone();
    settings.timeout_secs = timeout_secs;
    ExplanationRequester::new(OpenAI::new("sk-test", endpoint, timeout_secs), settings)
}

#[tokio::test]
async fn test_complete_withSuccessResponse_shouldParseChoices() {
    let endpoint = serve_once("200 OK", SUCCESS_BODY).await;
    let client = OpenAI::new("sk-test", endpoint, 5);

    let response = client.complete(sample_request()).await.unwrap();

    assert_eq!(response.choices.len(), 1);
    assert!(OpenAI::extract_text(&response).contains("literacy is the path to freedom"));
}

#[tokio::test]
async fn test_complete_with401_shouldReturnAuthenticationError() {
    let endpoint = serve_once("401 Unauthorized", UNAUTHORIZED_BODY).await;
    let client = OpenAI::new("sk-wrong", endpoint, 5);

    let error = client.complete(sample_request()).await.unwrap_err();

    match error {
        ProviderError::AuthenticationError { status_code, message } => {
            assert_eq!(status_code, 401);
            assert!(message.contains("Incorrect API key provided"));
        }
        other => panic!("expected AuthenticationError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_complete_with500_shouldReturnApiError() {
    let endpoint = serve_once("500 Internal Server Error", r#"{"error":{"message":"boom"}}"#).await;
    let client = OpenAI::new("sk-test", endpoint, 5);

    let error = client.complete(sample_request()).await.unwrap_err();

    assert!(matches!(error, ProviderError::ApiError { status_code: 500, .. }));
}

#[tokio::test]
async fn test_complete_withNoChoices_shouldReturnParseError() {
    let endpoint = serve_once("200 OK", r#"{"choices":[]}"#).await;
    let client = OpenAI::new("sk-test", endpoint, 5);

    let error = client.complete(sample_request()).await.unwrap_err();

    assert!(matches!(error, ProviderError::ParseError(_)));
}

#[tokio::test]
async fn test_complete_withSilentServer_shouldReturnTimeout() {
    let endpoint = serve_silently().await;
    let client = OpenAI::new("sk-test", endpoint, 1);

    let error = client.complete(sample_request()).await.unwrap_err();

    assert!(matches!(error, ProviderError::Timeout(_)), "got {:?}", error);
}

#[tokio::test]
async fn test_explain_overHttpSuccess_shouldReturnTrimmedText() {
    let requester = requester_for(serve_once("200 OK", SUCCESS_BODY).await, 5);
    let quote = Quote::new("Knowledge is the pathway from slavery to freedom.").unwrap();

    let outcome = requester.explain(&quote).await;

    assert_eq!(
        outcome,
        ExplanationOutcome::Explained("Douglass means that literacy is the path to freedom.".to_string())
    );
}

#[tokio::test]
async fn test_explain_overHttp401_shouldReturnApiErrorFallback() {
    let requester = requester_for(serve_once("401 Unauthorized", UNAUTHORIZED_BODY).await, 5);
    let quote = Quote::new("Knowledge is the pathway from slavery to freedom.").unwrap();

    let outcome = requester.explain(&quote).await;

    assert_eq!(outcome.text(), API_ERROR_FALLBACK);
    assert!(outcome.diagnostics().iter().any(|line| line.contains("Authentication Error")));
}

#[tokio::test]
async fn test_explain_overHttpTimeout_shouldReturnTimeoutFallback() {
    let requester = requester_for(serve_silently().await, 1);
    let quote = Quote::new("Knowledge is the pathway from slavery to freedom.").unwrap();

    let outcome = requester.explain(&quote).await;

    assert_eq!(outcome.text(), TIMEOUT_FALLBACK);
}
