use std::ffi::OsStr;
use std::fs;
use std::path::PathBuf;
use std::process::ExitStatus;

use assert_cmd::Command;
use tempfile::TempDir;

use super::{ISSUES, TRANSLATIONS};

/// Temporary working directory seeded with data files.
pub struct UmbraWorkspace {
    _dir: TempDir,
    pub root: PathBuf,
    pub issues_path: PathBuf,
    pub translations_path: PathBuf,
}

impl UmbraWorkspace {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let root = dir.path().to_path_buf();
        let data = root.join("data");
        fs::create_dir_all(&data).expect("create data dir");

        let issues_path = data.join("git_issues.json");
        let translations_path = data.join("translations.json");
        fs::write(&issues_path, ISSUES).expect("write issues");
        fs::write(&translations_path, TRANSLATIONS).expect("write translations");

        Self {
            _dir: dir,
            root,
            issues_path,
            translations_path,
        }
    }

    pub fn read_issues(&self) -> String {
        fs::read_to_string(&self.issues_path).expect("read issues")
    }
}

pub struct RunOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Variables `umbra` reads; cleared so the caller's shell cannot leak in.
const UMBRA_ENV: &[&str] = &[
    "PORT",
    "UMBRA_ISSUES",
    "UMBRA_TRANSLATIONS",
    "UMBRA_HOST",
    "UMBRA_DEBUG",
    "FLASK_DEBUG",
    "RUST_LOG",
];

/// Run `umbra` inside the workspace. The default `data/` paths resolve
/// relative to the workspace root.
pub fn run_umbra<I, S>(workspace: &UmbraWorkspace, args: I, label: &str) -> RunOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    run_umbra_with_env(workspace, args, [], label)
}

/// Like [`run_umbra`], with `env` set on top of a cleared environment.
pub fn run_umbra_with_env<I, S, const N: usize>(
    workspace: &UmbraWorkspace,
    args: I,
    env: [(&str, &str); N],
    label: &str,
) -> RunOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut cmd = Command::cargo_bin("umbra").expect("umbra binary");
    cmd.current_dir(&workspace.root);
    for key in UMBRA_ENV {
        cmd.env_remove(key);
    }
    cmd.envs(env);

    let output = cmd
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("{label}: failed to run umbra: {e}"));

    RunOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}
