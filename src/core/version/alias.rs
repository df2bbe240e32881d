use serde::Serialize;

use crate::core::catalog::{self, STABLE_VERSION};
use crate::core::error::{SetupError, SetupResult};
use crate::core::platform::Platform;

/// Installs the latest cataloged release.
pub const ALIAS_STABLE: &str = "stable";
/// Installs from the OS package repository where one exists, otherwise "stable".
pub const ALIAS_DIST: &str = "dist";

/// A request after alias expansion and catalog validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedVersion {
    /// Concrete catalog version. For "dist" this is only the fallback.
    pub version: &'static str,
    /// The request was the "dist" alias.
    pub is_alias_dist: bool,
}

/// Reject requests that no platform's catalog knows, before the runner
/// platform is detected.
pub fn validate_request(requested: &str) -> SetupResult<()> {
    let known = matches!(requested, ALIAS_STABLE | ALIAS_DIST)
        || Platform::ALL.iter().any(|p| catalog::contains(*p, requested));
    if known {
        Ok(())
    } else {
        Err(SetupError::UnknownVersion(requested.to_string()))
    }
}

/// Expand aliases and validate `requested` against the catalog for `platform`.
pub fn resolve(requested: &str, platform: Platform) -> SetupResult<ResolvedVersion> {
    match requested {
        ALIAS_STABLE => Ok(ResolvedVersion {
            version: STABLE_VERSION,
            is_alias_dist: false,
        }),
        ALIAS_DIST => Ok(ResolvedVersion {
            version: STABLE_VERSION,
            is_alias_dist: true,
        }),
        other => catalog::find_version(platform, other)
            .map(|version| ResolvedVersion {
                version,
                is_alias_dist: false,
            })
            .ok_or_else(|| SetupError::UnknownVersion(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cataloged_versions_resolve_to_themselves() {
        for platform in Platform::ALL {
            for version in catalog::versions(platform) {
                let resolved = resolve(version, platform).unwrap();
                assert_eq!(resolved.version, version);
                assert!(!resolved.is_alias_dist);
            }
        }
    }

    #[test]
    fn stable_alias() {
        for platform in Platform::ALL {
            let resolved = resolve("stable", platform).unwrap();
            assert_eq!(
                resolved,
                ResolvedVersion {
                    version: STABLE_VERSION,
                    is_alias_dist: false
                }
            );
        }
    }

    #[test]
    fn dist_alias_falls_back_to_stable() {
        for platform in Platform::ALL {
            let resolved = resolve("dist", platform).unwrap();
            assert_eq!(resolved.version, STABLE_VERSION);
            assert!(resolved.is_alias_dist);
        }
    }

    #[test]
    fn request_validation_is_platform_independent() {
        for ok in ["stable", "dist", "2.0.6", "1.0.12"] {
            validate_request(ok).unwrap();
        }
        for bad in ["not-a-real-version", "Stable", "2.0.8", ""] {
            let err = validate_request(bad).unwrap_err();
            assert!(matches!(err, SetupError::UnknownVersion(ref v) if v == bad));
            assert!(err.is_configuration_error());
        }
    }

    #[test]
    fn unknown_versions_are_rejected() {
        for platform in Platform::ALL {
            for bad in ["not-a-real-version", "Stable", "DIST", "2.0.8", ""] {
                let err = resolve(bad, platform).unwrap_err();
                assert!(matches!(err, SetupError::UnknownVersion(ref v) if v == bad));
            }
        }
    }
}
