//! `passvault show` — display a single credential.

use console::style;

use crate::cli::{resolve_credential_id, unlock_session, Cli};
use crate::errors::Result;

/// Execute the `show` command.
pub fn execute(cli: &Cli, name: &str, reveal: bool) -> Result<()> {
    let session = unlock_session(cli)?;
    let id = resolve_credential_id(&session, name)?;
    let cred = session.store()?.get(&id)?;

    println!("{}   {}", style("Name:").bold(), cred.name);
    println!("{}     {}", style("Id:").bold(), cred.id);
    println!("{} {}", style("Username:").bold(), cred.username);
    if reveal {
        println!("{} {}", style("Password:").bold(), cred.password);
    } else {
        println!(
            "{} {}  {}",
            style("Password:").bold(),
            "********",
            style("(use --reveal to show)").dim()
        );
    }
    if !cred.notes.is_empty() {
        println!("{}    {}", style("Notes:").bold(), cred.notes);
    }
    println!(
        "{}  {}",
        style("Created:").bold(),
        cred.created_at.format("%Y-%m-%d %H:%M:%S")
    );
    println!(
        "{}  {}",
        style("Updated:").bold(),
        cred.updated_at.format("%Y-%m-%d %H:%M:%S")
    );

    Ok(())
}
