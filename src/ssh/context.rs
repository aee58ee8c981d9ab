use std::path::{Path, PathBuf};

use directories::UserDirs;
use log::debug;

use crate::ssh::fallback::fallback_for;
use crate::{KeyupError, Result};

/// Resolves and caches the paths key provisioning depends on.
///
/// Both fields are populated lazily on first successful lookup and never
/// invalidated; the environment is assumed stable for one command run.
/// Scope one context per command execution.
#[derive(Debug, Default)]
pub struct SshContext {
    pub(crate) config_dir: Option<PathBuf>,
    pub(crate) keygen_exe: Option<PathBuf>,
}

impl SshContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context with a pre-resolved SSH directory instead of `~/.ssh`.
    pub fn with_config_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: Some(dir.into()),
            keygen_exe: None,
        }
    }

    /// The user's SSH configuration directory (`~/.ssh`).
    ///
    /// Does not create the directory.
    pub fn ssh_dir(&mut self) -> Result<PathBuf> {
        if let Some(dir) = &self.config_dir {
            return Ok(dir.clone());
        }

        let dirs = UserDirs::new().ok_or(KeyupError::HomeDir)?;
        let dir = dirs.home_dir().join(".ssh");
        debug!("resolved ssh dir: {}", dir.display());
        self.config_dir = Some(dir.clone());
        Ok(dir)
    }

    /// Locate the ssh-keygen executable.
    ///
    /// Searches PATH first; if that fails, tries the platform fallback
    /// strategy (on Windows, the copy bundled with Git for Windows).
    pub fn find_keygen(&mut self) -> Result<PathBuf> {
        if let Some(exe) = &self.keygen_exe {
            return Ok(exe.clone());
        }

        let found = find_in_path(keygen_binary_name()).or_else(|| {
            fallback_for(std::env::consts::OS)
                .and_then(|strategy| strategy.locate(&|name| find_in_path(name)))
        });

        match found {
            Some(exe) => {
                debug!("found ssh-keygen at {}", exe.display());
                self.keygen_exe = Some(exe.clone());
                Ok(exe)
            }
            None => Err(KeyupError::KeygenNotFound),
        }
    }

    /// Public key files (`*.pub`) in the SSH directory, in filesystem
    /// enumeration order. Missing directory yields an empty list.
    pub fn local_public_keys(&mut self) -> Result<Vec<PathBuf>> {
        let ssh_dir = self.ssh_dir()?;

        let entries = match std::fs::read_dir(&ssh_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut keys = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "pub") && path.is_file() {
                keys.push(path);
            }
        }
        Ok(keys)
    }
}

fn keygen_binary_name() -> &'static str {
    if cfg!(windows) {
        "ssh-keygen.exe"
    } else {
        "ssh-keygen"
    }
}

/// Search the execution PATH for a file named `program`.
fn find_in_path(program: &str) -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    std::env::split_paths(&path_var)
        .map(|dir| dir.join(program))
        .find(|candidate| is_executable_file(candidate))
}

#[cfg(unix)]
fn is_executable_file(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable_file(path: &Path) -> bool {
    path.is_file()
}
