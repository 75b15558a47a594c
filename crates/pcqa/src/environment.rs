/// Environment variable naming the pkg-config implementation, honored by
/// most build systems.
const PKG_CONFIG_ENV: &str = "PKG_CONFIG";

const DEFAULT_PROGRAM: &str = "pkg-config";

/// Resolves which pkg-config executable to query with: the command-line
/// flag wins, then the profile, then `$PKG_CONFIG`, then the
/// conventional name.
pub(crate) fn pkg_config_program(flag: Option<String>, profile: Option<String>) -> String {
    flag.or(profile)
        .or_else(|| std::env::var(PKG_CONFIG_ENV).ok().filter(|value| !value.is_empty()))
        .unwrap_or_else(|| DEFAULT_PROGRAM.to_string())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    /// Serializes tests that touch the process environment.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn with_env<F: FnOnce()>(value: Option<&str>, test: F) {
        let _guard = ENV_MUTEX.lock().expect("lock poisoned");
        match value {
            // SAFETY: Test code runs sequentially with ENV_MUTEX held.
            Some(value) => unsafe { std::env::set_var(PKG_CONFIG_ENV, value) },
            // SAFETY: Test code runs sequentially with ENV_MUTEX held.
            None => unsafe { std::env::remove_var(PKG_CONFIG_ENV) },
        }
        test();
        // SAFETY: Test code runs sequentially with ENV_MUTEX held.
        unsafe { std::env::remove_var(PKG_CONFIG_ENV) };
    }

    #[test]
    fn the_flag_wins_over_everything() {
        with_env(Some("env-pkg-config"), || {
            let program = pkg_config_program(
                Some("flag-pkg-config".to_string()),
                Some("profile-pkg-config".to_string()),
            );

            assert_eq!(program, "flag-pkg-config");
        });
    }

    #[test]
    fn the_profile_wins_over_the_environment() {
        with_env(Some("env-pkg-config"), || {
            let program = pkg_config_program(None, Some("profile-pkg-config".to_string()));

            assert_eq!(program, "profile-pkg-config");
        });
    }

    #[test]
    fn the_environment_wins_over_the_default() {
        with_env(Some("pkgconf"), || {
            let program = pkg_config_program(None, None);

            assert_eq!(program, "pkgconf");
        });
    }

    #[test]
    fn an_empty_environment_value_is_ignored() {
        with_env(Some(""), || {
            let program = pkg_config_program(None, None);

            assert_eq!(program, "pkg-config");
        });
    }

    #[test]
    fn everything_unset_falls_back_to_the_conventional_name() {
        with_env(None, || {
            let program = pkg_config_program(None, None);

            assert_eq!(program, "pkg-config");
        });
    }
}
