use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::{KeyupError, Result};

/// External collaborator that registers a public key against a remote
/// account. See [`crate::github::GitHubClient`] for the real one.
pub trait KeyUploader {
    fn upload(&self, hostname: &str, key: &mut dyn Read, title: &str) -> Result<()>;
}

/// Open the public key at `key_file` and hand it to the uploader.
///
/// The collaborator's result is returned unwrapped; the file handle is
/// released on every exit path.
pub fn upload_key(
    uploader: &dyn KeyUploader,
    hostname: &str,
    key_file: &Path,
    title: &str,
) -> Result<()> {
    let mut file = File::open(key_file).map_err(|source| KeyupError::KeyFileAccess {
        path: key_file.to_path_buf(),
        source,
    })?;

    uploader.upload(hostname, &mut file, title)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    struct RecordingUploader {
        calls: RefCell<Vec<(String, String, String)>>,
        fail: bool,
    }

    impl RecordingUploader {
        fn succeeding() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                fail: false,
            }
        }
    }

    impl KeyUploader for RecordingUploader {
        fn upload(&self, hostname: &str, key: &mut dyn Read, title: &str) -> Result<()> {
            let mut contents = String::new();
            key.read_to_string(&mut contents).unwrap();
            self.calls
                .borrow_mut()
                .push((hostname.to_string(), contents, title.to_string()));
            if self.fail {
                Err(KeyupError::Api("boom".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn delegates_opened_stream_to_uploader() {
        let dir = tempfile::tempdir().unwrap();
        let key_file = dir.path().join("id_ed25519.pub");
        std::fs::write(&key_file, "ssh-ed25519 AAAA user@host\n").unwrap();

        let uploader = RecordingUploader::succeeding();
        upload_key(&uploader, "github.com", &key_file, "my key").unwrap();

        let calls = uploader.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "github.com");
        assert_eq!(calls[0].1, "ssh-ed25519 AAAA user@host\n");
        assert_eq!(calls[0].2, "my key");
    }

    #[test]
    fn uploader_errors_pass_through_unwrapped() {
        let dir = tempfile::tempdir().unwrap();
        let key_file = dir.path().join("id_ed25519.pub");
        std::fs::write(&key_file, "ssh-ed25519 AAAA\n").unwrap();

        let uploader = RecordingUploader {
            calls: RefCell::new(Vec::new()),
            fail: true,
        };
        let err = upload_key(&uploader, "github.com", &key_file, "t").unwrap_err();
        assert!(matches!(err, KeyupError::Api(msg) if msg == "boom"));
        assert_eq!(uploader.calls.borrow().len(), 1);
    }

    #[test]
    fn unreadable_file_is_a_file_access_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.pub");

        let uploader = RecordingUploader::succeeding();
        let err = upload_key(&uploader, "github.com", &missing, "t").unwrap_err();

        assert!(matches!(err, KeyupError::KeyFileAccess { path, .. } if path == missing));
        assert!(uploader.calls.borrow().is_empty());
    }
}
