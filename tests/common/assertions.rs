//! Custom assertion macros for contract and scenario tests.
//!
//! These macros provide descriptive failure messages to aid debugging.

/// Assert that stdout or stderr contains a string.
///
/// # Example
/// ```ignore
/// assert_output_contains!(result, "default: Valid");
/// ```
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $needle:expr) => {
        let combined = $result.combined_output();
        assert!(
            combined.contains($needle),
            "Expected output to contain '{}'.\nstdout:\n{}\nstderr:\n{}",
            $needle,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert that a file exists relative to the project root.
#[macro_export]
macro_rules! assert_file_exists {
    ($env:expr, $path:expr) => {
        let full_path = $env.project_path($path);
        assert!(
            full_path.exists(),
            "Expected file at '{}', but it doesn't exist.\nProject root: {:?}",
            $path,
            $env.project_root.path()
        );
    };
}

/// Assert that a command failed with exit code 1 and printed nothing on stdout.
#[macro_export]
macro_rules! assert_failed_cleanly {
    ($result:expr) => {
        assert!(
            !$result.success,
            "Expected failure, got success.\nstdout:\n{}",
            $result.stdout
        );
        assert_eq!($result.exit_code, 1, "stderr:\n{}", $result.stderr);
        assert!(
            !$result.stderr.contains("panicked"),
            "Command panicked:\n{}",
            $result.stderr
        );
    };
}
