use std::process::Command;

fn bus_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_muxcoder-bus"));
    for k in [
        "BUS_SESSION",
        "SESSION",
        "AGENT_ROLE",
        "BUS_ROLE",
        "BUS_MEMORY_DIR",
        "MUXCODER_ROLES",
        "MUXCODER_SPLIT_LEFT",
        "TMUX_PANE",
    ] {
        cmd.env_remove(k);
    }
    cmd.env("NO_COLOR", "1");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let out = cmd.output().expect("failed to run muxcoder-bus");
    assert!(
        out.status.success(),
        "muxcoder-bus exited non-zero: {:?}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn test_cli_whoami_prefers_env() {
    let out = stdout_of(
        bus_cmd()
            .env("BUS_SESSION", "s1")
            .env("AGENT_ROLE", "edit")
            .arg("whoami"),
    );
    assert_eq!(out.trim(), "s1 edit");
}

#[test]
fn test_cli_whoami_json_reports_sources() {
    let out = stdout_of(
        bus_cmd()
            .env("SESSION", "s2")
            .env("BUS_ROLE", "build")
            .args(["whoami", "--json"]),
    );
    let v: serde_json::Value = serde_json::from_str(&out).expect("json");
    assert_eq!(v["session"]["value"], "s2");
    assert_eq!(v["session"]["source"]["kind"], "env");
    assert_eq!(v["session"]["source"]["name"], "SESSION");
    assert_eq!(v["role"]["value"], "build");
}

#[test]
fn test_cli_paths_and_memory_path() {
    let out = stdout_of(bus_cmd().args(["paths", "--session", "s1", "--role", "edit", "--json"]));
    let v: serde_json::Value = serde_json::from_str(&out).expect("json");
    assert_eq!(v["inbox"], "/tmp/muxcoder-bus-s1/inbox/edit.jsonl");
    assert_eq!(v["lock"], "/tmp/muxcoder-bus-s1/lock/edit.lock");

    let out = stdout_of(
        bus_cmd()
            .env("BUS_MEMORY_DIR", "/srv/mem")
            .args(["memory-path", "shared"]),
    );
    assert_eq!(out.trim(), "/srv/mem/shared.md");
}

#[test]
fn test_cli_is_role_and_split_left() {
    let st = bus_cmd().args(["is-role", "edit"]).status().expect("run");
    assert!(st.success());
    let st = bus_cmd().args(["is-role", "docs"]).status().expect("run");
    assert_eq!(st.code(), Some(1));
    let st = bus_cmd()
        .env("MUXCODER_ROLES", "docs")
        .args(["is-role", "docs"])
        .status()
        .expect("run");
    assert!(st.success());

    assert_eq!(stdout_of(bus_cmd().args(["split-left", "edit"])).trim(), "true");
    assert_eq!(
        stdout_of(
            bus_cmd()
                .env("MUXCODER_SPLIT_LEFT", "review")
                .args(["split-left", "edit"])
        )
        .trim(),
        "false"
    );
}

#[test]
fn test_cli_pane_target_and_env_shell() {
    assert_eq!(
        stdout_of(bus_cmd().args(["pane-target", "build", "--session", "dev"])).trim(),
        "dev:build.1"
    );

    let out = stdout_of(
        bus_cmd()
            .env("BUS_SESSION", "my session")
            .env("AGENT_ROLE", "test")
            .args(["env", "--shell"]),
    );
    assert!(out.contains("export BUS_SESSION='my session'"), "{out}");
    assert!(out.contains("export AGENT_ROLE=test"), "{out}");
    assert!(out.contains("export BUS_PANE_TARGET='my session:test.1'"), "{out}");
}

#[test]
fn test_cli_doctor_exits_zero() {
    let out = bus_cmd()
        .env("BUS_SESSION", "s1")
        .env("AGENT_ROLE", "edit")
        .arg("doctor")
        .output()
        .expect("failed to run muxcoder-bus doctor");
    assert!(out.status.success());
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("session: s1 [env:BUS_SESSION]"), "{err}");
}

#[cfg(unix)]
#[test]
fn test_cli_paths_json_reports_unencodable_memory_dir() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    let out = bus_cmd()
        .env("BUS_MEMORY_DIR", OsString::from_vec(b"/srv/m\xffem".to_vec()))
        .args(["paths", "--session", "s1", "--role", "edit", "--json"])
        .output()
        .expect("failed to run muxcoder-bus paths");
    assert_eq!(out.status.code(), Some(1));
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("failed to encode JSON"), "{err}");

    // Plain output still shows the path (lossily).
    let out = stdout_of(
        bus_cmd()
            .env("BUS_MEMORY_DIR", OsString::from_vec(b"/srv/m\xffem".to_vec()))
            .args(["memory-path", "edit"]),
    );
    assert_eq!(out.trim(), "/srv/m\u{FFFD}em/edit.md");
}
