//! Data integrity errors
//!
//! The source tables are trusted to reference each other consistently. A
//! dangling reference means the mirror is broken, so it stops the run.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DataError {
    #[error("Skill \"{0}\" is missing from both building tables")]
    MissingSkill(String),

    #[error("Operator \"{0}\" has no base skills entry")]
    MissingBaseSkills(String),

    #[error("Facility \"{0}\" has no known color")]
    MissingFacilityColor(String),
}
