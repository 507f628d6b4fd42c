use std::process::{Command, Output};

fn query_string(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_query-string"))
        .args(args)
        .output()
        .expect("failed to run query-string")
}

fn resource_dump(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_resource-dump"))
        .args(args)
        .output()
        .expect("failed to run resource-dump")
}

fn stdout_text(out: &Output) -> String {
    String::from_utf8(out.stdout.clone()).expect("stdout is not UTF-8")
}

fn stderr_text(out: &Output) -> String {
    String::from_utf8(out.stderr.clone()).expect("stderr is not UTF-8")
}

#[test]
fn query_without_argument_prints_usage_on_stdout_and_exits_1() {
    let out = query_string(&[]);

    assert_eq!(out.status.code(), Some(1));
    assert_eq!(
        stdout_text(&out),
        "Usage: 'query-string <queryString>'. \
         For example 'query-string status=302&location=http://example.com'\n"
    );
}

#[test]
fn query_prints_the_status_parameter_value() {
    let out = query_string(&["status=302&location=http://example.com"]);

    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout_text(&out), "302\n");
}

#[test]
fn query_prints_null_when_status_is_absent() {
    let out = query_string(&["a=1&b=2"]);

    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout_text(&out), "null\n");
}

#[test]
fn query_prints_empty_line_for_empty_status_value() {
    let out = query_string(&["status="]);

    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout_text(&out), "\n");
}

#[test]
fn malformed_query_reports_on_stderr_and_exits_2() {
    let out = query_string(&["status=302&broken"]);

    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());

    let stderr = stderr_text(&out);
    assert!(stderr.contains("error[query.malformed_segment]"));
    assert!(stderr.contains("broken"));
    assert!(stderr.contains("\"segmentIndex\":1"));
}

#[test]
fn dump_without_argument_prints_usage_on_stdout_and_exits_1() {
    let out = resource_dump(&[]);

    assert_eq!(out.status.code(), Some(1));
    assert_eq!(
        stdout_text(&out),
        "Usage: 'resource-dump <resourcePath>'. For example 'resource-dump /index.html'\n"
    );
}

#[test]
fn dump_emits_exact_header_and_payload() {
    let out = resource_dump(&["hello.txt"]);

    assert_eq!(out.status.code(), Some(0));
    assert_eq!(out.stdout, b"Content-Length: 5\nhello");
    assert!(out.stderr.is_empty());
}

#[test]
fn dump_resolves_absolute_style_paths() {
    let out = resource_dump(&["/hello.txt"]);

    assert_eq!(out.status.code(), Some(0));
    assert_eq!(out.stdout, b"Content-Length: 5\nhello");
}

#[test]
fn dump_unknown_resource_exits_4_with_untouched_stdout() {
    let out = resource_dump(&["missing.txt"]);

    assert_eq!(out.status.code(), Some(4));
    assert!(out.stdout.is_empty());

    let stderr = stderr_text(&out);
    assert!(stderr.contains("error[resource.not_found]"));
    assert!(stderr.contains("missing.txt"));
    assert!(stderr.contains("hint: Bundled resources: hello.txt, index.html"));
}
