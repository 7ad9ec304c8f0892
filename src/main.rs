use std::process::ExitCode;

use clap::Parser;
use serde_json::json;

use muxcoder_agent_bus::{
    self as bus, color_enabled_stderr, log_error_stderr, log_info_stderr, log_warn_stderr,
    BusConfig, MuxQuery, Resolver, TmuxQuery,
};

mod cli;

use cli::{Cli, Cmd};

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(s) => {
            println!("{s}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log_error_stderr(
                color_enabled_stderr(),
                &format!("muxcoder-bus: failed to encode JSON: {e}"),
            );
            ExitCode::from(1)
        }
    }
}

type ProcessResolver = Resolver<bus::ProcessEnv, TmuxQuery>;

/// KEY=value pairs exported to shell scripts, in a stable order.
fn env_pairs(config: &BusConfig, resolver: &ProcessResolver) -> Vec<(&'static str, String)> {
    let session = resolver.session();
    let role = resolver.role();
    let p = resolver.paths(Some(&session), Some(&role));
    vec![
        ("BUS_SESSION", session.clone()),
        ("AGENT_ROLE", role.clone()),
        ("BUS_KNOWN_ROLE", config.is_known_role(&role).to_string()),
        ("BUS_DIR", p.bus_dir.display().to_string()),
        ("BUS_INBOX", p.inbox.display().to_string()),
        ("BUS_LOCK", p.lock.display().to_string()),
        ("BUS_LOG", p.log.display().to_string()),
        ("BUS_TRIGGER", p.trigger.display().to_string()),
        ("BUS_MEMORY_DIR", resolver.memory_dir().display().to_string()),
        ("BUS_MEMORY", p.memory.display().to_string()),
        ("BUS_PANE_TARGET", bus::pane_target(&session, &role)),
    ]
}

fn run_doctor(config: &BusConfig, resolver: &ProcessResolver) -> ExitCode {
    let use_err = color_enabled_stderr();
    eprintln!("muxcoder-bus doctor");
    eprintln!("  version: v{}", env!("CARGO_PKG_VERSION"));
    eprintln!(
        "  build: {} ({} / {}) {}",
        env!("MUXCODER_BUILD_DATE"),
        env!("MUXCODER_BUILD_TARGET"),
        env!("MUXCODER_BUILD_PROFILE"),
        env!("MUXCODER_BUILD_RUSTC")
    );

    match which::which("tmux") {
        Ok(p) => eprintln!("  tmux: {}", p.display()),
        Err(_) => log_warn_stderr(
            use_err,
            "  tmux: not found (identity falls back to env/defaults)",
        ),
    }
    match std::env::var(bus::env::ENV_TMUX_PANE) {
        Ok(p) if !p.is_empty() => eprintln!("  tmux pane: {p}"),
        _ => eprintln!("  tmux pane: (not inside tmux)"),
    }

    let s = resolver.resolve_session();
    let r = resolver.resolve_role();
    eprintln!("  session: {} [{}]", s.value, s.source);
    eprintln!("  role: {} [{}]", r.value, r.source);
    if !config.is_known_role(&r.value) {
        log_warn_stderr(
            use_err,
            &format!("  role '{}' is not a known role", r.value),
        );
    }
    eprintln!(
        "  roles: {}",
        config.roles().iter().collect::<Vec<_>>().join(", ")
    );
    eprintln!(
        "  split-left windows: {}",
        config.split_left().windows().collect::<Vec<_>>().join(" ")
    );
    eprintln!("  memory dir: {}", resolver.memory_dir().display());

    log_info_stderr(use_err, "doctor: completed diagnostics.");
    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Some(mode) = cli.color {
        bus::set_color_mode(mode);
    }
    bus::telemetry_init();

    // Read MUXCODER_ROLES / MUXCODER_SPLIT_LEFT exactly once.
    let config = BusConfig::from_env();
    let resolver = Resolver::from_process();

    match cli.command {
        Cmd::Whoami { json } => {
            let s = resolver.resolve_session();
            let r = resolver.resolve_role();
            if json {
                return print_json(&json!({ "session": s, "role": r }));
            }
            println!("{} {}", s.value, r.value);
            ExitCode::SUCCESS
        }
        Cmd::Paths { session, role, json } => {
            let p = resolver.paths(session.as_deref(), role.as_deref());
            if json {
                return print_json(&p);
            }
            println!("session: {}", p.session);
            println!("role: {}", p.role);
            println!("bus_dir: {}", p.bus_dir.display());
            println!("inbox: {}", p.inbox.display());
            println!("lock: {}", p.lock.display());
            println!("log: {}", p.log.display());
            println!("trigger: {}", p.trigger.display());
            println!("memory: {}", p.memory.display());
            println!("shared_memory: {}", p.shared_memory.display());
            ExitCode::SUCCESS
        }
        Cmd::PaneTarget { window, session } => {
            let session = session.unwrap_or_else(|| resolver.session());
            println!("{}", bus::pane_target(&session, &window));
            ExitCode::SUCCESS
        }
        Cmd::Roles { json } => {
            if json {
                return print_json(config.roles());
            }
            for r in config.roles().iter() {
                println!("{r}");
            }
            ExitCode::SUCCESS
        }
        Cmd::IsRole { role } => {
            if config.is_known_role(&role) {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Cmd::SplitLeft { window } => {
            println!("{}", config.is_split_left(&window));
            ExitCode::SUCCESS
        }
        Cmd::MemoryPath { role } => {
            println!("{}", resolver.memory_path(&role).display());
            ExitCode::SUCCESS
        }
        Cmd::Env { shell } => {
            for (k, v) in env_pairs(&config, &resolver) {
                if shell {
                    println!("{}", bus::shell_export(k, &v));
                } else {
                    println!("{k}={v}");
                }
            }
            ExitCode::SUCCESS
        }
        Cmd::Query { format } => {
            let q = TmuxQuery::from_env(resolver.env());
            match q.display_message(&format) {
                Ok(v) => {
                    println!("{v}");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    log_error_stderr(color_enabled_stderr(), &format!("muxcoder-bus: {e}"));
                    ExitCode::from(bus::exit_code_for_tmux_error(&e))
                }
            }
        }
        Cmd::Doctor => run_doctor(&config, &resolver),
    }
}
