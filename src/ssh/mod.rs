mod context;
mod fallback;
mod generate;
mod upload;

pub use context::SshContext;
pub use generate::{public_key_path, DEFAULT_KEY_NAME};
pub use upload::{upload_key, KeyUploader};
