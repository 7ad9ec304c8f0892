#![cfg(unix)]

mod common;

use std::ffi::OsString;
use std::os::unix::ffi::OsStringExt;
use std::path::PathBuf;

use common::FakeMux;
use muxcoder_agent_bus::{memory_dir, ProcessEnv, Resolver, Source};

// Single test per file: mutates the process environment.
#[test]
fn test_non_unicode_env_values_still_win() {
    let mem = OsString::from_vec(b"/srv/m\xffem".to_vec());
    std::env::set_var("BUS_MEMORY_DIR", &mem);
    std::env::set_var("BUS_SESSION", OsString::from_vec(b"s\xff1".to_vec()));
    std::env::set_var("AGENT_ROLE", OsString::from_vec(b"ed\xffit".to_vec()));

    assert_eq!(memory_dir(), PathBuf::from(mem.clone()));

    let mux = FakeMux::answering("from-tmux", "from-tmux");
    let r = Resolver::new(ProcessEnv, &mux);
    let s = r.resolve_session();
    assert_eq!(s.value, "s\u{FFFD}1");
    assert_eq!(s.source, Source::Env("BUS_SESSION"));
    assert_eq!(r.role(), "ed\u{FFFD}it");
    assert_eq!(mux.call_count(), 0, "tmux must not be consulted");
    assert_eq!(r.memory_path("shared"), PathBuf::from(mem).join("shared.md"));

    std::env::remove_var("BUS_MEMORY_DIR");
    std::env::remove_var("BUS_SESSION");
    std::env::remove_var("AGENT_ROLE");
}
