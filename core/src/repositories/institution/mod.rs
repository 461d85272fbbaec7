//! University directory module.

mod r#trait;
pub use r#trait::InstitutionDirectory;

mod mock;
pub use mock::MockInstitutionDirectory;
