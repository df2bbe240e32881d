pub mod alias;

pub use alias::{resolve, validate_request, ResolvedVersion, ALIAS_DIST, ALIAS_STABLE};
