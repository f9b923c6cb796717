//! Property-test run profile read from the environment.
//!
//! Every proptest suite in the workspace derives its case count and forking
//! behaviour from here so CI can scale them with two variables.

use std::env;

/// Environment variable controlling proptest case counts.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable controlling proptest process forking.
pub const PRIMPATH_PBT_FORK_ENV_KEY: &str = "PRIMPATH_PBT_FORK";

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Loads a profile, falling back to the given defaults for unset or
    /// unparsable variables.
    ///
    /// # Examples
    ///
    /// ```
    /// use primpath_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: override_or(PROGTEST_CASES_ENV_KEY, default_cases, parse_cases),
            fork: override_or(PRIMPATH_PBT_FORK_ENV_KEY, default_fork, parse_switch),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether each case runs in a forked subprocess.
    #[must_use]
    pub const fn fork(&self) -> bool {
        self.fork
    }
}

fn override_or<T: Copy>(
    key: &'static str,
    default: T,
    parse: fn(&str) -> Result<T, &'static str>,
) -> T {
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parse(raw.trim()).unwrap_or_else(|reason| {
        tracing::warn!(
            env = key,
            raw = %raw,
            reason,
            "ignoring invalid property-test override",
        );
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, &'static str> {
    match raw.parse::<u32>() {
        Ok(0) => Err("case count must be positive"),
        Ok(cases) => Ok(cases),
        Err(_) => Err("case count must be an unsigned integer"),
    }
}

fn parse_switch(raw: &str) -> Result<bool, &'static str> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err("expected one of true/false/1/0/yes/no/on/off"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::{Mutex, MutexGuard};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Sets or clears one variable and restores it on drop.
    struct ScopedVar {
        key: &'static str,
        original: Option<String>,
    }

    impl ScopedVar {
        fn new(key: &'static str, value: Option<&str>) -> Self {
            let original = env::var(key).ok();
            apply(key, value);
            Self { key, original }
        }
    }

    impl Drop for ScopedVar {
        fn drop(&mut self) {
            apply(self.key, self.original.as_deref());
        }
    }

    fn apply(key: &str, value: Option<&str>) {
        match value {
            // SAFETY: tests serialise environment access with ENV_LOCK.
            Some(value) => unsafe { env::set_var(key, value) },
            // SAFETY: tests serialise environment access with ENV_LOCK.
            None => unsafe { env::remove_var(key) },
        }
    }

    /// Holds the lock until both variables are restored; tuple fields drop
    /// in order.
    fn with_env(
        cases: Option<&str>,
        fork: Option<&str>,
    ) -> ([ScopedVar; 2], MutexGuard<'static, ()>) {
        let guard = ENV_LOCK
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let vars = [
            ScopedVar::new(PROGTEST_CASES_ENV_KEY, cases),
            ScopedVar::new(PRIMPATH_PBT_FORK_ENV_KEY, fork),
        ];
        (vars, guard)
    }

    #[test]
    fn falls_back_to_defaults_without_overrides() {
        let _env = with_env(None, None);
        let profile = ProptestRunProfile::load(64, false);
        assert_eq!(profile.cases(), 64);
        assert!(!profile.fork());
    }

    #[rstest]
    #[case::one("1", 1)]
    #[case::padded(" 250 ", 250)]
    #[case::large("25000", 25_000)]
    fn accepts_case_overrides(#[case] raw: &str, #[case] expected: u32) {
        let _env = with_env(Some(raw), None);
        assert_eq!(ProptestRunProfile::load(64, false).cases(), expected);
    }

    #[rstest]
    #[case::zero("0")]
    #[case::negative("-1")]
    #[case::word("many")]
    fn ignores_invalid_case_overrides(#[case] raw: &str) {
        let _env = with_env(Some(raw), None);
        assert_eq!(ProptestRunProfile::load(64, false).cases(), 64);
    }

    #[rstest]
    #[case::true_word("true", true)]
    #[case::upper("TRUE", true)]
    #[case::one("1", true)]
    #[case::yes("yes", true)]
    #[case::on("on", true)]
    #[case::false_word("false", false)]
    #[case::zero("0", false)]
    #[case::no("no", false)]
    #[case::off("off", false)]
    fn accepts_fork_overrides(#[case] raw: &str, #[case] expected: bool) {
        let _env = with_env(None, Some(raw));
        assert_eq!(ProptestRunProfile::load(64, !expected).fork(), expected);
    }

    #[rstest]
    #[case::empty("")]
    #[case::maybe("maybe")]
    #[case::two("2")]
    fn ignores_invalid_fork_overrides(#[case] raw: &str) {
        let _env = with_env(None, Some(raw));
        assert!(ProptestRunProfile::load(64, true).fork());
    }
}
