use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use jasmin_http::{
    Content, Credentials, Destination, HttpStatusError, JasminClient, JasminError, SendOptions,
    SmsRequest,
};

/// Serve one canned HTTP response on a random local port and hand back the request line.
fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let endpoint = format!("http://{}/send", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
        }
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();

        let head = String::from_utf8_lossy(&head).into_owned();
        head.lines().next().unwrap_or_default().to_owned()
    });

    (endpoint, handle)
}

fn client(endpoint: &str, timeout: Duration) -> JasminClient {
    JasminClient::builder(Credentials::new("foo", "bar").unwrap())
        .endpoint(endpoint)
        .timeout(timeout)
        .build()
        .unwrap()
}

fn hello(to: &str) -> SmsRequest {
    SmsRequest::new(
        Destination::new(to).unwrap(),
        Content::new("Hi").unwrap(),
        SendOptions::default(),
    )
}

#[test]
fn ok_response_returns_exact_body() {
    let body = "Success \"07033084-5cfd-4812-90a4-e4d24ffb6e3d\"";
    let (endpoint, server) = serve_once("200 OK", body);

    let response = client(&endpoint, Duration::from_secs(5))
        .send(hello("+123"))
        .unwrap();
    assert_eq!(response, body);

    let request_line = server.join().unwrap();
    assert!(request_line.starts_with("GET /send?"), "{request_line}");
    assert!(
        request_line.contains("to=%2B123&content=Hi"),
        "{request_line}"
    );
    assert!(request_line.contains("username=foo&password=bar"));
}

#[test]
fn server_error_is_request_failed() {
    let (endpoint, server) = serve_once("500 Internal Server Error", "Error \"boom\"");

    let err = client(&endpoint, Duration::from_secs(5))
        .send(hello("123"))
        .unwrap_err();
    server.join().unwrap();

    match &err {
        JasminError::RequestFailed(source) => {
            let status = source.downcast_ref::<HttpStatusError>().unwrap();
            assert_eq!(status.status, 500);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("500"));
}

#[test]
fn unreachable_endpoint_is_request_failed() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let endpoint = format!("http://127.0.0.1:{port}/send");

    let err = client(&endpoint, Duration::from_secs(2))
        .send(hello("123"))
        .unwrap_err();
    assert!(matches!(err, JasminError::RequestFailed(_)));
}

#[test]
fn silent_gateway_fails_within_timeout() {
    // Connections queue in the backlog but are never answered.
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let endpoint = format!("http://{}/send", listener.local_addr().unwrap());
    let timeout = Duration::from_secs(1);

    let started = Instant::now();
    let err = client(&endpoint, timeout).send(hello("123")).unwrap_err();
    let elapsed = started.elapsed();

    assert!(matches!(err, JasminError::RequestFailed(_)));
    assert!(elapsed < timeout + Duration::from_secs(2), "{elapsed:?}");
    drop(listener);
}

#[test]
fn error_message_does_not_expose_credentials() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let endpoint = format!("http://{}/send", listener.local_addr().unwrap());

    let err = client(&endpoint, Duration::from_millis(300))
        .send(hello("123"))
        .unwrap_err();
    assert!(!err.to_string().contains("password=bar"));
    drop(listener);
}
