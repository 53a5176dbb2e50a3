use dialoguer::Confirm;

use crate::error::Result;

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Ask before replacing reports from an earlier run on the same date.
pub fn confirm_overwrite(path: &std::path::Path) -> Result<bool> {
    prompt_yes_no(
        &format!("Report {} already exists. Overwrite?", path.display()),
        false,
    )
}
