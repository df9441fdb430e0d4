//! Version command implementation

use crate::error::Result;

/// Print the version and the profile the binary was built with
pub fn run() -> Result<()> {
    let profile = if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    };
    println!("marty {} ({profile} build)", env!("CARGO_PKG_VERSION"));
    Ok(())
}
