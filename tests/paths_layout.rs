use std::path::{Path, PathBuf};

use muxcoder_agent_bus::paths::memory_path_in;
use muxcoder_agent_bus::{
    bus_dir, inbox_path, lock_path, log_path, trigger_file, BusPaths, MapEnv, Resolver,
};

mod common;

#[test]
fn test_bus_paths_are_rooted_at_literal_tmp() {
    assert_eq!(bus_dir("s1"), PathBuf::from("/tmp/muxcoder-bus-s1"));
    assert_eq!(
        inbox_path("s1", "edit"),
        PathBuf::from("/tmp/muxcoder-bus-s1/inbox/edit.jsonl")
    );
    assert_eq!(
        lock_path("s1", "edit"),
        PathBuf::from("/tmp/muxcoder-bus-s1/lock/edit.lock")
    );
    assert_eq!(log_path("s1"), PathBuf::from("/tmp/muxcoder-bus-s1/log.jsonl"));
    assert_eq!(
        trigger_file("s1"),
        PathBuf::from("/tmp/muxcoder-analyze-s1.trigger")
    );
}

#[test]
fn test_memory_paths_default_and_override() {
    let r = Resolver::new(MapEnv::new(), common::FakeMux::failing());
    assert_eq!(
        r.memory_path("shared"),
        PathBuf::from(".muxcoder/memory/shared.md")
    );
    assert_eq!(r.memory_path("edit"), PathBuf::from(".muxcoder/memory/edit.md"));

    let r = Resolver::new(
        MapEnv::new().with("BUS_MEMORY_DIR", "/var/lib/mux"),
        common::FakeMux::failing(),
    );
    assert_eq!(r.memory_path("shared"), PathBuf::from("/var/lib/mux/shared.md"));
    assert_eq!(
        memory_path_in(Path::new("/x"), "shared"),
        memory_path_in(Path::new("/x"), "shared")
    );
}

#[test]
fn test_bus_paths_json_shape() {
    let p = BusPaths::new("s1", "edit", Path::new(".muxcoder/memory"));
    let v = serde_json::to_value(&p).expect("serialize");
    assert_eq!(v["inbox"], "/tmp/muxcoder-bus-s1/inbox/edit.jsonl");
    assert_eq!(v["shared_memory"], ".muxcoder/memory/shared.md");
    assert_eq!(v["trigger"], "/tmp/muxcoder-analyze-s1.trigger");
}
