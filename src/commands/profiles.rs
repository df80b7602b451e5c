//! Profiles command implementation

use crate::error::Result;
use crate::profiles::hidden_profiles;

/// Run profiles command
pub fn run() -> Result<()> {
    for profile in hidden_profiles() {
        println!("{profile}");
    }
    Ok(())
}
