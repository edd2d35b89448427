// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reporting for DOM calls whose failure should not stop navigation.

#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "only the DOM surface and listeners report failures")
)]

use core::fmt::Debug;

/// Logs a failed `action` at `warn` level and discards the error.
pub(crate) fn warn_on_err<T, E: Debug>(result: Result<T, E>, action: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("{action} failed: {err:?}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::warn_on_err;

    #[test]
    fn passes_values_and_drops_errors() {
        assert_eq!(warn_on_err::<_, &str>(Ok(3), "count"), Some(3));
        assert_eq!(warn_on_err::<u8, _>(Err("detached"), "set viewBox"), None);
    }
}
