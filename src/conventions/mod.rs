//! Static branch-naming convention tables.
//!
//! Every table is a closed set of named constants with a forward value
//! (`as_str`) and a reverse lookup by name or value. The classifier never
//! compares raw strings against ad-hoc literals; it goes through these types.
//!
//! - [`prefixes`] - Branch-name prefixes with special meaning
//! - [`legacy`] - Old-style uppercase branch aliases
//! - [`release_type`] - Classification outcomes
//! - [`environments`] - Deployment environments and their external ids

pub mod environments;
pub mod legacy;
pub mod prefixes;
pub mod release_type;

pub use environments::{env_key, Environment, INVALID_ENVIRONMENT_ID};
pub use legacy::LegacyBranch;
pub use prefixes::BranchPrefix;
pub use release_type::ReleaseType;
