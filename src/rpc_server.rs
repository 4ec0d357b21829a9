//! Cheatsheets RPC Server — JSON-RPC over stdin/stdout for the site front-end.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"bookmark.add", "params":{"cheatSheetId":"...","sectionId":"...","exampleTitle":"..."}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}
//!
//! Logs go to stderr; stdout carries only protocol messages.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use cheatsheets::app::App;
use cheatsheets::config::AppConfig;
use cheatsheets::rpc_handler::handle_method;

use serde_json::{json, Value};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .init();
}

fn respond(out: &mut impl Write, message: &Value) -> io::Result<()> {
    writeln!(out, "{}", message)?;
    out.flush()
}

fn run(app: &mut App) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    respond(&mut out, &json!({"event": "ready", "version": env!("CARGO_PKG_VERSION")}))?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let req: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                respond(&mut out, &json!({"id": null, "error": format!("parse error: {}", e)}))?;
                continue;
            }
        };

        let id = req.get("id").cloned().unwrap_or(Value::Null);
        let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
        let params = req.get("params").cloned().unwrap_or(json!({}));
        debug!(%method, "rpc request");

        let response = match handle_method(app, method, &params) {
            Ok(val) => json!({"id": id, "result": val}),
            Err(err) => json!({"id": id, "error": err}),
        };
        respond(&mut out, &response)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("cheatsheets-rpc: {}", e);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config.log_filter);

    let mut app = match App::new(&config) {
        Ok(app) => app,
        Err(e) => {
            error!(error = %e, "failed to initialize");
            return ExitCode::FAILURE;
        }
    };
    app.startup();
    info!(data_dir = %config.data_dir.display(), "cheatsheets-rpc ready");

    match run(&mut app) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "stdio failure");
            ExitCode::FAILURE
        }
    }
}
