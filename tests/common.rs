#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::collections::HashMap;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

pub fn attendash() -> Command {
    let mut cmd = cargo_bin_cmd!("attendash");
    // keep the user's real config out of the tests
    cmd.env("HOME", std::env::temp_dir());
    // the stub server is local; never route it through a proxy
    for var in ["HTTP_PROXY", "HTTPS_PROXY", "ALL_PROXY", "http_proxy", "https_proxy", "all_proxy"] {
        cmd.env_remove(var);
    }
    cmd
}

pub type Routes = HashMap<&'static str, (u16, String)>;

/// Minimal HTTP/1.1 server on a random local port. Unknown paths get 404.
/// Returns the base URL to pass via `--api-url`.
pub fn serve(routes: Routes) -> String {
    serve_with_delays(routes, HashMap::new())
}

/// Like [`serve`], but the listed paths wait before answering.
pub fn serve_with_delays(routes: Routes, delays: HashMap<&'static str, Duration>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
    let addr = listener.local_addr().expect("local addr");

    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = routes.clone();
            let delays = delays.clone();
            thread::spawn(move || handle(stream, &routes, &delays));
        }
    });

    format!("http://{addr}")
}

fn handle(mut stream: TcpStream, routes: &Routes, delays: &HashMap<&'static str, Duration>) {
    let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));

    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }
    // drain headers
    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) if line == "\r\n" || line == "\n" => break,
            Ok(_) => {}
        }
    }

    let path = request_line.split_whitespace().nth(1).unwrap_or("/");
    if let Some(delay) = delays.get(path) {
        thread::sleep(*delay);
    }
    let (code, body) = routes
        .get(path)
        .cloned()
        .unwrap_or((404, r#"{"detail":"Not Found"}"#.to_string()));

    let reason = match code {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    };
    let response = format!(
        "HTTP/1.1 {code} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

/// A free local port with nothing listening on it.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

fn ok(body: &str) -> (u16, String) {
    (200, body.to_string())
}

/// Every dashboard endpoint answering with a small, consistent data set.
pub fn sample_routes() -> Routes {
    let mut r = Routes::new();
    r.insert(
        "/api/attendance/today",
        ok(r#"{"data":[
            {"name":"Ana Cruz","date":"2026-10-19","time_in":"2026-10-19T09:12:00","status":"clocked_in","hours_worked":3.25,"late":true,"undertime":false},
            {"name":"Ben Ramos","date":"2026-10-19","time_in":"2026-10-19T08:55:00","break_start":"2026-10-19T12:00:00","status":"on_break","hours_worked":3.0,"late":false},
            {"name":"Cara Lim","date":"2026-10-19","time_in":"2026-10-19T07:00:00","time_out":"2026-10-19T13:30:00","status":"complete","hours_worked":6.5,"late":false,"undertime":true}
        ]}"#),
    );
    r.insert(
        "/api/attendance/count",
        ok(r#"{"date":"2026-10-19","total_staff":4,"present_count":3,"absent_count":1,
            "present":[{"name":"Ana Cruz","role":"Engineer"},{"name":"Ben Ramos","role":null},{"name":"Cara Lim","role":"Analyst"}],
            "absent":[{"name":"Dan Uy","role":"Designer","consecutive_absences":2}]}"#),
    );
    r.insert(
        "/api/attendance/summary/weekly",
        ok(r#"{"data":[{"week":"2026-W42","week_start":"2026-10-12","week_end":"2026-10-18","unique_staff":4,"days_worked":18,"total_hours":140.5,"avg_hours_per_day":7.8}]}"#),
    );
    r.insert(
        "/api/attendance/summary/monthly",
        ok(r#"{"data":[{"month":"2026-10","month_name":"October 2026","unique_staff":4,"days_worked":52,"total_hours":410.0,"avg_hours_per_day":7.9,"total_break_hours":26.0,"absent_days":3}]}"#),
    );
    r.insert(
        "/api/attendance/summary/daily",
        ok(r#"{"data":[{"date":"2026-10-19","staff_count":3,"total_hours":12.75,"completed":1,"still_working":2}]}"#),
    );
    r.insert(
        "/api/attendance/week",
        ok(r#"{"data":[{"name":"Ana Cruz","total_hours":35.5,"days_worked":5}]}"#),
    );
    r.insert(
        "/api/tasks/today",
        ok(r#"{"data":[{"name":"Ana Cruz","task":"Payroll review","url":null,"created_at":"2026-10-19T10:15:00"}]}"#),
    );
    r.insert(
        "/api/stats",
        ok(r#"{"total_attendance":120,"total_tasks":45,"total_hours":900.5,"week_hours":140.5,"currently_working":1,"on_break":1}"#),
    );
    r
}
