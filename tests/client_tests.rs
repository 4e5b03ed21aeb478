//! SaveDocument client and full pipeline against a local one-shot HTTP server.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use fattura24::api::*;
use fattura24::core::*;
use fattura24::import::{ImportSummary, Importer};

// ---------------------------------------------------------------------------
// Test server
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct CapturedRequest {
    request_line: String,
    headers: Vec<(String, String)>,
    body: String,
}

impl CapturedRequest {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Decoded `application/x-www-form-urlencoded` fields.
    fn form(&self) -> Vec<(String, String)> {
        self.body
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .map(|(k, v)| (url_decode(k), url_decode(v)))
            .collect()
    }
}

fn url_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => out.push(b' '),
            b'%' => {
                let hex = std::str::from_utf8(&bytes[i + 1..i + 3]).unwrap();
                out.push(u8::from_str_radix(hex, 16).unwrap());
                i += 2;
            }
            b => out.push(b),
        }
        i += 1;
    }
    String::from_utf8(out).unwrap()
}

/// Serve `responses.len()` requests on an ephemeral port, one response each.
fn serve(responses: Vec<(u16, &'static str)>) -> (String, JoinHandle<Vec<CapturedRequest>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/api/v0.3/SaveDocument", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let mut captured = Vec::new();
        for (status, body) in responses {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream);

            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();

            let mut headers = Vec::new();
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                let line = line.trim_end();
                if line.is_empty() {
                    break;
                }
                let (k, v) = line.split_once(':').unwrap();
                headers.push((k.trim().to_string(), v.trim().to_string()));
            }

            let length: usize = headers
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
                .map(|(_, v)| v.parse().unwrap())
                .unwrap_or(0);
            let mut buf = vec![0u8; length];
            reader.read_exact(&mut buf).unwrap();

            let response = format!(
                "HTTP/1.1 {status} OK\r\nContent-Type: text/xml\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let mut stream = reader.into_inner();
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();

            captured.push(CapturedRequest {
                request_line: request_line.trim_end().to_string(),
                headers,
                body: String::from_utf8(buf).unwrap(),
            });
        }
        captured
    });

    (url, handle)
}

const OK_BODY: &str = "<root><returnCode>0</returnCode><description>Operazione completata</description></root>";
const ERR_BODY: &str = "<root><returnCode>-1</returnCode><description>error: apiKey non valida</description></root>";

fn client(url: &str) -> SaveDocumentClient {
    SaveDocumentClient::new(
        ClientConfig::new("secret-key")
            .with_endpoint(url)
            .with_timeout(Duration::from_secs(5)),
    )
    .unwrap()
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

#[test]
fn posts_form_encoded_api_key_and_xml() {
    let (url, server) = serve(vec![(200, OK_BODY)]);
    let xml = "<Fattura24>\n    <Document>A & B</Document>\n</Fattura24>";

    let response = client(&url).submit(xml).unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(response.body, OK_BODY);

    let requests = server.join().unwrap();
    let req = &requests[0];
    assert_eq!(req.request_line, "POST /api/v0.3/SaveDocument HTTP/1.1");
    assert_eq!(
        req.header("content-type"),
        Some("application/x-www-form-urlencoded")
    );
    assert_eq!(
        req.form(),
        [
            ("apiKey".to_string(), "secret-key".to_string()),
            ("xml".to_string(), xml.to_string()),
        ]
    );
}

#[test]
fn error_body_is_returned_not_classified() {
    let (url, server) = serve(vec![(200, ERR_BODY)]);
    let response = client(&url).submit("<Fattura24/>").unwrap();
    server.join().unwrap();

    let result = classify_response(response);
    assert!(!result.is_accepted());
    assert!(matches!(
        result.into_result(),
        Err(ImportError::Rejected { status: 200, .. })
    ));
}

#[test]
fn connection_refused_is_http_error() {
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let err = client(&format!("http://127.0.0.1:{port}/"))
        .submit("<Fattura24/>")
        .unwrap_err();
    assert!(matches!(err, ImportError::Http(_)));
}

#[test]
fn slow_server_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/", listener.local_addr().unwrap());
    let hold = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        thread::sleep(Duration::from_secs(3));
        drop(stream);
    });

    let mut client = SaveDocumentClient::new(
        ClientConfig::new("k")
            .with_endpoint(url)
            .with_timeout(Duration::from_secs(1)),
    )
    .unwrap();
    let err = client.submit("<Fattura24/>").unwrap_err();
    assert!(matches!(err, ImportError::Http(_)));
    hold.join().unwrap();
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

#[test]
fn imports_fixture_file() {
    let (url, server) = serve(vec![(200, OK_BODY), (200, OK_BODY), (201, OK_BODY)]);
    let mut importer = Importer::new(client(&url), ImportConfig::default());

    let summary = importer
        .import_files(&["tests/fixtures/invoices.csv"])
        .unwrap();
    assert_eq!(
        summary,
        ImportSummary {
            files: 1,
            documents: 3
        }
    );

    let requests = server.join().unwrap();
    assert_eq!(requests.len(), 3);
    let xml: Vec<String> = requests
        .iter()
        .map(|r| r.form().into_iter().find(|(k, _)| k == "xml").unwrap().1)
        .collect();
    assert!(xml[0].contains("<VatAmount>22.00</VatAmount>"));
    assert!(xml[1].contains("<CustomerName>Bianchi &amp; Figli, S.r.l.</CustomerName>"));
    assert!(xml[1].contains("<Total>1525.61</Total>"));
    assert!(xml[2].contains("<Price>19.99</Price>"));
}

#[test]
fn rejection_stops_the_run() {
    // Only one response is served: a second request would hang the test.
    let (url, server) = serve(vec![(200, ERR_BODY)]);
    let mut importer = Importer::new(client(&url), ImportConfig::default());

    let err = importer
        .import_files(&["tests/fixtures/invoices.csv", "tests/fixtures/full_amounts.csv"])
        .unwrap_err();
    assert!(err.to_string().starts_with("unexpected response with code 200: "));
    assert_eq!(server.join().unwrap().len(), 1);
}

#[test]
fn empty_file_makes_no_requests() {
    // Nothing listens here; any request would fail.
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let mut importer = Importer::new(
        client(&format!("http://127.0.0.1:{port}/")),
        ImportConfig::default(),
    );
    let summary = importer.import_files(&["tests/fixtures/empty.csv"]).unwrap();
    assert_eq!(summary.documents, 0);
    assert_eq!(summary.files, 1);
}
