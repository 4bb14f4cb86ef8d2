//! Exit code handling for the dupescan binary.

/// Exit codes for the dupescan application.
///
/// - 0: Success (scan and report completed normally)
/// - 1: General error (scan path missing, file unreadable mid-comparison, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success: scan and report completed normally.
    Success = 0,
    /// General error: an unexpected error occurred and aborted the run.
    GeneralError = 1,
}

impl ExitCode {
    /// Get the numeric exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get the machine-readable code prefix.
    #[must_use]
    pub fn code_prefix(self) -> &'static str {
        match self {
            Self::Success => "DS000",
            Self::GeneralError => "DS001",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
    }

    #[test]
    fn test_code_prefixes() {
        assert_eq!(ExitCode::Success.code_prefix(), "DS000");
        assert_eq!(ExitCode::GeneralError.code_prefix(), "DS001");
    }
}
