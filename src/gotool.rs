//! Go toolchain command lines
//!
//! Every invocation is built as a vector of discrete arguments and handed to
//! [`crate::runner`] verbatim. No string is ever assembled for a shell.

use crate::profile;

/// Benchmark one package, writing its CPU profile to `output_file`.
///
/// `-run=^$` skips unit tests (the anchor pair matches only the empty
/// string), `-bench=.` runs every benchmark, and `-pgo=off` keeps a
/// previously generated profile from skewing the new one.
pub fn benchmark_args(package: &str, benchtime: &str, output_file: &str) -> Vec<String> {
    vec![
        "test".to_string(),
        format!("./{package}/..."),
        "-run=^$".to_string(),
        "-bench=.".to_string(),
        format!("-benchtime={benchtime}"),
        format!("-cpuprofile={output_file}"),
        "-pgo=off".to_string(),
    ]
}

/// Merge the given profiles into a single proto-format profile on stdout.
pub fn merge_args<I, S>(profile_files: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = vec![
        "tool".to_string(),
        "pprof".to_string(),
        "-proto".to_string(),
    ];
    args.extend(profile_files.into_iter().map(Into::into));
    args
}

/// Render the final merged profile as SVG on stdout.
pub fn svg_args() -> Vec<String> {
    vec![
        "tool".to_string(),
        "pprof".to_string(),
        "-svg".to_string(),
        profile::FINAL_PROFILE.to_string(),
    ]
}
