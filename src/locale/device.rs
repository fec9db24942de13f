// SPDX-License-Identifier: PMPL-1.0-or-later

//! Runtime locale detection.

use crate::error::LocalizationError;
use crate::locale::Locale;
use tracing::debug;

/// Current locale reported by the operating system.
///
/// Fails with `UnresolvedLocale` when the OS reports nothing and with
/// `InvalidLocale`, naming the reported string, when it is not a language
/// tag (e.g. the POSIX `C` locale).
pub fn device_locale() -> Result<Locale, LocalizationError> {
    from_reported(sys_locale::get_locale())
}

fn from_reported(reported: Option<String>) -> Result<Locale, LocalizationError> {
    let reported = reported.ok_or_else(|| LocalizationError::UnresolvedLocale {
        locale: "<device>".to_string(),
    })?;
    debug!(%reported, "device locale");
    Locale::parse(&reported)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reported_posix_name_is_parsed() {
        let locale = from_reported(Some("ko_KR.UTF-8".to_string())).unwrap();
        assert_eq!(locale.to_string(), "ko-KR");
    }

    #[test]
    fn unparseable_report_is_named() {
        assert_eq!(
            from_reported(Some("C".to_string())),
            Err(LocalizationError::InvalidLocale("C".to_string()))
        );
    }

    #[test]
    fn missing_report() {
        assert!(matches!(
            from_reported(None),
            Err(LocalizationError::UnresolvedLocale { .. })
        ));
    }
}
