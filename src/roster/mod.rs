//! Roster building for the reconciliation engine.
//!
//! This module infers employees from each source's rows, unifies them into
//! a single first-wins deduplicated roster, and generates the sample roster
//! used when no source yields anyone.

mod builder;
mod dedup;
mod fallback;

pub use builder::{build_roster, extract_employees};
pub use dedup::deduplicate;
pub use fallback::{
    SAMPLE_FIRST_NAMES, SAMPLE_LAST_NAMES, SAMPLE_SALARY_MAX, SAMPLE_SALARY_MIN, sample_roster,
};
