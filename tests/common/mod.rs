#![allow(dead_code)]

use std::cell::RefCell;

use muxcoder_agent_bus::{MuxQuery, TmuxError};

/// Fake tmux that answers `#S`/`#W` from fixed values and records formats asked.
#[derive(Default)]
pub struct FakeMux {
    pub session: String,
    pub window: String,
    pub fail: bool,
    pub calls: RefCell<Vec<String>>,
}

impl FakeMux {
    pub fn answering(session: &str, window: &str) -> Self {
        Self {
            session: session.to_string(),
            window: window.to_string(),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl MuxQuery for FakeMux {
    fn display_message(&self, format: &str) -> Result<String, TmuxError> {
        self.calls.borrow_mut().push(format.to_string());
        if self.fail {
            return Err(TmuxError::NotFound);
        }
        Ok(match format {
            "#S" => self.session.clone(),
            "#W" => self.window.clone(),
            _ => String::new(),
        })
    }
}

/// Write an executable fake `tmux` script into `dir` that prints `stdout`
/// and exits with `code`. Also dumps its argv into `<dir>/argv`.
#[cfg(unix)]
pub fn fake_tmux(dir: &std::path::Path, stdout: &str, code: i32) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("tmux");
    let argv = dir.join("argv");
    let script = format!(
        "#!/bin/sh\nprintf '%s\\n' \"$@\" > '{}'\nprintf '%s' '{}'\nexit {}\n",
        argv.display(),
        stdout,
        code
    );
    std::fs::write(&path, script).expect("write fake tmux");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .expect("chmod fake tmux");
    path
}
