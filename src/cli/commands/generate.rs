use crate::exec::SystemRunner;
use crate::prompt::TerminalPrompter;
use crate::ssh::SshContext;
use crate::Result;

pub fn execute(name: String, allow_existing: bool) -> Result<()> {
    let mut ctx = SshContext::new();

    let result = ctx.generate_key(
        &TerminalPrompter,
        &SystemRunner,
        &name,
        !allow_existing,
    )?;

    match result {
        Some(public_key) => {
            println!("Public key: {}", public_key.display());
            println!();
            println!("Use 'keyup upload {}' to add it to your GitHub account.", public_key.display());
        }
        None => {
            println!("Skipped SSH key generation.");
        }
    }

    Ok(())
}
