use std::path::PathBuf;

use crate::github::GitHubClient;
use crate::ssh::upload_key;
use crate::ui::create_spinner;
use crate::Result;

pub fn execute(
    key_file: PathBuf,
    hostname: String,
    title: Option<String>,
    token: String,
) -> Result<()> {
    let title = title.unwrap_or_else(default_title);
    let uploader = GitHubClient::new(token);

    let spinner = create_spinner(format!("Uploading {} to {}...", key_file.display(), hostname));
    let result = upload_key(&uploader, &hostname, &key_file, &title);
    match &result {
        Ok(()) => spinner.finish_with_message(format!("Key '{}' added to {}", title, hostname)),
        Err(_) => spinner.finish_and_clear(),
    }

    result
}

/// Title shown on the remote account when none was given.
fn default_title() -> String {
    hostname::get()
        .ok()
        .map(|h| format!("keyup ({})", h.to_string_lossy()))
        .unwrap_or_else(|| "keyup".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_title_names_the_tool() {
        assert!(default_title().starts_with("keyup"));
    }
}
