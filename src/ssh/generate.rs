use std::path::{Path, PathBuf};

use log::debug;

use crate::exec::{CommandRunner, CommandSpec};
use crate::prompt::Prompter;
use crate::ssh::context::SshContext;
use crate::{KeyupError, Result};

/// Key filename used when the caller does not pick one.
pub const DEFAULT_KEY_NAME: &str = "id_ed25519";

const CONFIRM_MESSAGE: &str = "Generate a new SSH key to add to your GitHub account?";
const PASSPHRASE_MESSAGE: &str = "Enter a passphrase for your new SSH key (Optional)";

impl SshContext {
    /// Ensure an SSH key pair named `key_name` exists under the SSH
    /// directory, generating it with ssh-keygen after user confirmation.
    ///
    /// Returns the public key path, or `None` when the feature degrades
    /// gracefully: ssh-keygen is not installed, or the user declined.
    ///
    /// When the private key file already exists, `error_on_existing`
    /// decides between failing and returning the matching `.pub` path as
    /// already provisioned. The confirmation prompt deliberately fires
    /// before the existence check; callers rely on it always appearing
    /// once this path is entered.
    pub fn generate_key(
        &mut self,
        prompter: &dyn Prompter,
        runner: &dyn CommandRunner,
        key_name: &str,
        error_on_existing: bool,
    ) -> Result<Option<PathBuf>> {
        let keygen_exe = match self.find_keygen() {
            Ok(exe) => exe,
            Err(_) => {
                // Not fatal: the surrounding flow simply skips key setup.
                debug!("ssh-keygen unavailable, skipping key generation");
                return Ok(None);
            }
        };

        if !prompter.confirm(CONFIRM_MESSAGE, true)? {
            return Ok(None);
        }

        let ssh_dir = self.ssh_dir()?;
        let key_file = ssh_dir.join(key_name);
        if key_file.exists() {
            if error_on_existing {
                return Err(KeyupError::KeyAlreadyExists(key_file));
            }
            return Ok(Some(public_key_path(&key_file)));
        }

        if let Some(parent) = key_file.parent() {
            create_private_dir(parent)?;
        }

        let passphrase = prompter.password(PASSPHRASE_MESSAGE)?;

        let spec = CommandSpec::new(keygen_exe)
            .arg("-t")
            .arg("ed25519")
            .arg("-C")
            .arg("")
            .arg("-N")
            .arg(passphrase)
            .arg("-f")
            .arg(key_file.display().to_string());

        let output = runner
            .run(&spec)
            .map_err(|e| KeyupError::KeyGeneration(e.to_string()))?;
        if !output.success {
            return Err(KeyupError::KeyGeneration(output.stderr.trim().to_string()));
        }

        Ok(Some(public_key_path(&key_file)))
    }
}

/// The public half always lives at the private key path plus `.pub`.
pub fn public_key_path(key_file: &Path) -> PathBuf {
    let mut path = key_file.as_os_str().to_os_string();
    path.push(".pub");
    PathBuf::from(path)
}

/// Create `dir` and any missing parents with owner-only access.
#[cfg(unix)]
fn create_private_dir(dir: &Path) -> Result<()> {
    use std::os::unix::fs::DirBuilderExt;

    std::fs::DirBuilder::new()
        .recursive(true)
        .mode(0o700)
        .create(dir)?;
    Ok(())
}

#[cfg(not(unix))]
fn create_private_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)?;
    Ok(())
}
