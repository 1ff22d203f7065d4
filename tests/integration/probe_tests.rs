//! Integration tests for the probe pipeline
//!
//! These tests use wiremock to create mock HTTP servers and run the full
//! fetch, extract and probe cycle end-to-end over real HTTP.

use robots_probe::prober::ReqwestTransport;
use robots_probe::{normalize_target, run, ConsoleReporter, ProbeConfig, RunSummary};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Runs the pipeline against the mock server and returns the report
async fn probe(mock_server: &MockServer, config: ProbeConfig) -> (RunSummary, String) {
    let origin = normalize_target(&mock_server.uri()).expect("Failed to parse mock server URL");
    let transport = ReqwestTransport::from_config(&config).expect("Failed to build client");
    let mut reporter = ConsoleReporter::new(Vec::new());

    let summary = run(&transport, &origin, &config, &mut reporter)
        .await
        .expect("Run failed");

    let output = String::from_utf8(reporter.into_inner()).expect("Report is not UTF-8");
    (summary, output)
}

#[tokio::test]
async fn test_full_probe_cycle() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "User-agent: *\nDisallow: /admin\nDisallow: /private\n\nUser-agent: BadBot\nDisallow: /raw\n",
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/admin"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><head><title> Secret Page </title></head></html>")
                .insert_header("content-type", "text/html"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/private"))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_string("<html><head><title>Forbidden</title></head></html>"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/raw"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body>raw</body></html>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (summary, output) = probe(&mock_server, ProbeConfig::default()).await;

    assert_eq!(
        summary,
        RunSummary {
            robots_fetched: true,
            paths_found: 3,
            probed: 3,
            failed: 0,
        }
    );

    let expected = format!(
        "[INFO] Successfully fetched robots.txt from {base}/robots.txt\n\
         [INFO] Found 3 disallowed paths.\n\
         [200] {base}/admin - Title: Secret Page\n\
         [403] {base}/private - Title: N/A\n\
         [200] {base}/raw - Title: No Title\n",
        base = base_url
    );
    assert_eq!(output, expected);
}

#[tokio::test]
async fn test_missing_robots_probes_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Disallow: /admin"))
        .expect(1)
        .mount(&mock_server)
        .await;

    // Nothing but robots.txt may be requested
    Mock::given(method("GET"))
        .and(path("/admin"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let (summary, output) = probe(&mock_server, ProbeConfig::default()).await;

    assert_eq!(summary, RunSummary::default());
    assert_eq!(output, "[ERROR] Failed to fetch robots.txt. HTTP Status: 404\n");
}

#[tokio::test]
async fn test_duplicate_paths_are_probed_twice() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("Disallow: /tmp/\nDisallow: /tmp/"),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/tmp/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<title>Temp</title>"))
        .expect(2)
        .mount(&mock_server)
        .await;

    let (summary, _) = probe(&mock_server, ProbeConfig::default()).await;

    assert_eq!(summary.paths_found, 2);
    assert_eq!(summary.probed, 2);
}

#[tokio::test]
async fn test_timeout_skips_path_and_continues() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Disallow: /slow\nDisallow: /fast"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<title>Slow</title>")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/fast"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<title>Fast</title>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = ProbeConfig {
        timeout: Duration::from_millis(500),
        ..ProbeConfig::default()
    };
    let (summary, output) = probe(&mock_server, config).await;

    assert_eq!(summary.probed, 1);
    assert_eq!(summary.failed, 1);

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[2].starts_with(&format!("[ERROR] Failed to fetch {}/slow: ", base_url)));
    assert_eq!(lines[3], format!("[200] {}/fast - Title: Fast", base_url));
}

#[tokio::test]
async fn test_unreachable_robots() {
    let config = ProbeConfig {
        timeout: Duration::from_secs(2),
        ..ProbeConfig::default()
    };
    // Nothing is expected to listen on the discard port
    let origin = normalize_target("127.0.0.1:9").expect("Failed to parse URL");
    let transport = ReqwestTransport::from_config(&config).expect("Failed to build client");
    let mut reporter = ConsoleReporter::new(Vec::new());

    let summary = run(&transport, &origin, &config, &mut reporter)
        .await
        .expect("Run failed");

    let output = String::from_utf8(reporter.into_inner()).expect("Report is not UTF-8");
    assert!(!summary.robots_fetched);
    assert_eq!(summary.probed, 0);
    assert!(output.starts_with("[ERROR] "));
    assert_eq!(output.lines().count(), 1);
}

/// Runs the built binary with `-u <target>` and returns (success, stdout)
async fn run_cli(target: &str) -> (bool, String) {
    let output = tokio::process::Command::new(env!("CARGO_BIN_EXE_robots-probe"))
        .arg("-u")
        .arg(target)
        .output()
        .await
        .expect("Failed to run robots-probe");

    let stdout = String::from_utf8(output.stdout).expect("Report is not UTF-8");
    (output.status.success(), stdout)
}

#[tokio::test]
async fn test_cli_reports_unusable_targets_and_exits_zero() {
    for target in ["httpbin.org", "exa mple.com", ""] {
        let (success, stdout) = run_cli(target).await;

        assert!(success, "non-zero exit for {:?}", target);
        assert!(
            stdout.starts_with("[ERROR] Error fetching robots.txt: "),
            "unexpected report for {:?}: {}",
            target,
            stdout
        );
        assert_eq!(stdout.lines().count(), 1, "report for {:?}: {}", target, stdout);
    }
}

#[tokio::test]
async fn test_cli_full_run() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Disallow: /admin"))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/admin"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<title>Admin</title>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    // Scheme is stripped to exercise the http:// default
    let target = base_url.trim_start_matches("http://");
    let (success, stdout) = run_cli(target).await;

    assert!(success);
    assert_eq!(
        stdout,
        format!(
            "[INFO] Successfully fetched robots.txt from {base}/robots.txt\n\
             [INFO] Found 1 disallowed paths.\n\
             [200] {base}/admin - Title: Admin\n",
            base = base_url
        )
    );
}
