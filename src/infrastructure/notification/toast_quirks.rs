//! Known false failures of the Windows toast binding
//!
//! The Windows toast call can raise a window-procedure type conversion error
//! after the toast has already been shown. Errors mentioning any of the
//! markers below are treated as a successful delivery. Nothing else is
//! suppressed; every other error stays a genuine failure.
//!
//! Revisit this list whenever the notification backend is upgraded.

/// Substrings identifying the false failure
pub const BENIGN_TOAST_ERROR_MARKERS: &[&str] = &["WPARAM", "LRESULT", "WNDPROC"];

/// Whether a toast error is the known false failure
pub fn is_benign_toast_error(error_text: &str) -> bool {
    BENIGN_TOAST_ERROR_MARKERS
        .iter()
        .any(|marker| error_text.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_marker_is_benign() {
        assert!(is_benign_toast_error("argument 3: <class 'TypeError'>: wrong type WPARAM"));
        assert!(is_benign_toast_error("LRESULT conversion failed"));
        assert!(is_benign_toast_error("WNDPROC return value cannot be converted to LRESULT"));
    }

    #[test]
    fn other_errors_are_genuine() {
        assert!(!is_benign_toast_error("Access is denied. (0x80070005)"));
        assert!(!is_benign_toast_error(""));
    }

    #[test]
    fn markers_are_case_sensitive() {
        assert!(!is_benign_toast_error("wparam"));
    }
}
