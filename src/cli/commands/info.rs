//! Checker identity commands
//!
//! The host registers adapters by identifier and schedules them by
//! priority; these commands expose both without running anything.

use vetshim::adapters::govet;

/// Print the identifier this checker registers under
pub fn type_name() -> anyhow::Result<()> {
    println!("{}", govet::TYPE_NAME);
    Ok(())
}

/// Print the scheduling priority of this checker
pub fn priority() -> anyhow::Result<()> {
    println!("{}", govet::PRIORITY);
    Ok(())
}
