use std::path::{Path, PathBuf};

/// Platform-specific strategy for locating ssh-keygen when it is not on
/// PATH. `lookup` resolves other executables from PATH so strategies can be
/// exercised in tests without touching the real environment.
pub trait KeygenFallback {
    fn locate(&self, lookup: &dyn Fn(&str) -> Option<PathBuf>) -> Option<PathBuf>;
}

/// Select the fallback strategy for a platform identifier
/// (as in `std::env::consts::OS`).
pub fn fallback_for(os: &str) -> Option<Box<dyn KeygenFallback>> {
    match os {
        "windows" => Some(Box::new(GitForWindows)),
        _ => None,
    }
}

/// Git for Windows ships a POSIX toolchain that includes ssh-keygen; derive
/// its location from the git executable.
#[derive(Debug, Clone, Copy)]
pub struct GitForWindows;

impl KeygenFallback for GitForWindows {
    fn locate(&self, lookup: &dyn Fn(&str) -> Option<PathBuf>) -> Option<PathBuf> {
        let git_exe = lookup("git.exe").or_else(|| lookup("git"))?;
        let candidate = bundled_keygen_path(&git_exe);
        candidate.is_file().then_some(candidate)
    }
}

/// `<dir(git)>/../usr/bin/ssh-keygen.exe`
fn bundled_keygen_path(git_exe: &Path) -> PathBuf {
    git_exe
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join("..")
        .join("usr")
        .join("bin")
        .join("ssh-keygen.exe")
}
