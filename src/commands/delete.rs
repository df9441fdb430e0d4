//! Delete command implementation

use super::with_manager;
use crate::cli::DeleteArgs;
use crate::config::Settings;
use crate::error::{MartyError, Result};

/// Run delete command
pub fn run(settings: &Settings, args: &DeleteArgs) -> Result<()> {
    let Some(name) = args.name.get() else {
        return Err(MartyError::WorkflowNameRequired);
    };

    with_manager(settings, |manager| {
        manager.delete(name)?;
        println!("Deleted workflow: {name}");
        Ok(())
    })
}
