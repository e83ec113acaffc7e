//! Handler for the `repovet templates` command.

use anyhow::Result;

pub(crate) fn handle() -> Result<i32> {
    for name in repovet_fix::template_names() {
        println!("{name}");
    }
    Ok(crate::EXIT_OK)
}
