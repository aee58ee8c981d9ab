use std::path::Path;

use crate::ssh::SshContext;
use crate::Result;

pub fn execute() -> Result<()> {
    let mut ctx = SshContext::new();
    let keys = ctx.local_public_keys()?;

    if keys.is_empty() {
        println!("No public keys found in {}.", ctx.ssh_dir()?.display());
        println!();
        println!("Use 'keyup generate' to create one.");
        return Ok(());
    }

    println!("{:<20} {:<20} PATH", "NAME", "TYPE");
    println!("{}", "-".repeat(70));

    for key in &keys {
        let name = key
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "-".to_string());
        println!("{:<20} {:<20} {}", name, key_type(key), key.display());
    }

    println!();
    println!("Total: {} key(s)", keys.len());

    Ok(())
}

/// First whitespace-separated token of the key file, e.g. "ssh-ed25519".
fn key_type(path: &Path) -> String {
    std::fs::read_to_string(path)
        .ok()
        .and_then(|contents| contents.split_whitespace().next().map(String::from))
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_type_reads_leading_token() {
        let dir = tempfile::tempdir().unwrap();
        let key = dir.path().join("id_ed25519.pub");
        std::fs::write(&key, "ssh-ed25519 AAAA user@host\n").unwrap();

        assert_eq!(key_type(&key), "ssh-ed25519");
    }

    #[test]
    fn key_type_tolerates_unreadable_files() {
        assert_eq!(key_type(Path::new("/no/such/file.pub")), "-");
    }
}
