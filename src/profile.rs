//! Profile artifact naming
//!
//! Per-package CPU profiles live in the workspace root, so package path
//! separators are flattened into a `__` delimiter to get one flat filename
//! per package.

/// Prefix shared by every profile artifact
pub const PROFILE_PREFIX: &str = "cpuprofile-";

/// Merge output before it is copied into place
pub const MERGED_PROFILE: &str = "cpuprofile-merged.pprof";

/// Final merged profile consumed by `go build -pgo`
pub const FINAL_PROFILE: &str = "cpuprofile.pprof";

/// Rendered visualization of the final profile
pub const FINAL_SVG: &str = "cpuprofile.svg";

/// Glob matching every profile artifact, intermediate or final
pub const PROFILE_GLOB: &str = "cpuprofile*.pprof";

/// Glob matching compiled test binaries left behind by `go test`
pub const TEST_BINARY_GLOB: &str = "*.test";

/// Derive the per-package profile filename for a package path.
///
/// Both `/` and `\` collapse to `__`, so `cmd/server` maps to
/// `cpuprofile-cmd__server.pprof`. Purely deterministic; the input is
/// expected to have passed [`crate::package::validate_package_path`]
/// already and is not re-validated here.
pub fn profile_filename(package: &str) -> String {
    let suffix = package.replace('/', "__").replace('\\', "__");
    format!("{PROFILE_PREFIX}{suffix}.pprof")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_package() {
        assert_eq!(profile_filename("cmd/server"), "cpuprofile-cmd__server.pprof");
    }

    #[test]
    fn test_nested_package() {
        assert_eq!(
            profile_filename("internal/adapters/inbound"),
            "cpuprofile-internal__adapters__inbound.pprof"
        );
    }

    #[test]
    fn test_single_segment_package() {
        assert_eq!(profile_filename("pkg"), "cpuprofile-pkg.pprof");
    }

    #[test]
    fn test_backslash_separated_input() {
        assert_eq!(
            profile_filename("internal\\adapters\\outbound"),
            "cpuprofile-internal__adapters__outbound.pprof"
        );
    }

    #[test]
    fn test_derivation_is_deterministic() {
        assert_eq!(
            profile_filename("cmd/server"),
            profile_filename("cmd/server")
        );
    }

    #[test]
    fn test_derived_names_match_profile_glob() {
        // Cleanup relies on every derived name matching PROFILE_GLOB
        for pkg in ["cmd/server", "internal/adapters/inbound", "pkg"] {
            let name = profile_filename(pkg);
            assert!(name.starts_with("cpuprofile"));
            assert!(name.ends_with(".pprof"));
            assert!(!name.contains('/'));
            assert!(!name.contains('\\'));
        }
    }
}
