use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tempfile::TempDir;

/// Scripts are written then executed; a fork from a parallel test while the
/// write handle is open makes exec fail with ETXTBSY.
static SCRIPT_LOCK: Mutex<()> = Mutex::new(());

pub fn exclusive() -> MutexGuard<'static, ()> {
    SCRIPT_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

const DISPATCH: &str = r#"
echo "$*" >> "$FIXTURES/calls.log"
if [ "$1" = "axfr" ]; then
    server="${3#@}"
    if [ -f "$FIXTURES/err/$server" ]; then
        cat "$FIXTURES/err/$server" >&2
        exit 9
    fi
    if [ -f "$FIXTURES/axfr/$server" ]; then
        cat "$FIXTURES/axfr/$server"
    else
        echo "; Transfer failed."
    fi
elif [ "$1" = "+short" ]; then
    if [ -f "$FIXTURES/ns/$3" ]; then
        cat "$FIXTURES/ns/$3"
    fi
fi
"#;

/// A stand-in `dig` that serves canned transfers and NS answers from files.
///
/// Transfers are keyed by name server, lookups by domain. Every invocation
/// is appended to `calls.log` as its argument list.
pub struct FakeDig {
    dir: TempDir,
    script: PathBuf,
}

impl FakeDig {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        for sub in ["axfr", "ns", "err"] {
            fs::create_dir_all(dir.path().join(sub)).unwrap();
        }

        let body = format!(
            "#!/bin/sh\nFIXTURES='{}'\n{}",
            dir.path().display(),
            DISPATCH
        );
        let script = write_script(dir.path(), "dig", &body);

        Self { dir, script }
    }

    /// A program that sleeps instead of answering.
    pub fn sleeping(seconds: u32) -> Self {
        let dir = TempDir::new().unwrap();
        let body = format!("#!/bin/sh\nsleep {}\n", seconds);
        let script = write_script(dir.path(), "dig", &body);
        Self { dir, script }
    }

    /// A program that echoes its arguments one per line.
    pub fn echoing() -> Self {
        let dir = TempDir::new().unwrap();
        let body = "#!/bin/sh\nfor arg in \"$@\"; do echo \"$arg\"; done\n";
        let script = write_script(dir.path(), "dig", body);
        Self { dir, script }
    }

    pub fn program(&self) -> String {
        self.script.display().to_string()
    }

    pub fn with_zone(self, name_server: &str, zone: &str) -> Self {
        fs::write(self.dir.path().join("axfr").join(name_server), zone).unwrap();
        self
    }

    pub fn with_name_servers(self, domain: &str, name_servers: &[&str]) -> Self {
        let mut body = name_servers.join("\n");
        body.push('\n');
        fs::write(self.dir.path().join("ns").join(domain), body).unwrap();
        self
    }

    pub fn with_stderr(self, name_server: &str, message: &str) -> Self {
        fs::write(self.dir.path().join("err").join(name_server), message).unwrap();
        self
    }

    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.dir.path().join("calls.log"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
    path
}
