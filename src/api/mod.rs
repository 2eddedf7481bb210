pub mod blizzard;
pub mod riot;
