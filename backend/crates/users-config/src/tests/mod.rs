
use std::env;

use tempfile::TempDir;

/// Variables read by `Config::load`; cleared for every test so the host
/// environment cannot leak in.
const CONFIG_ENV_VARS: [&str; 9] = [
    "PORT",
    "MONGO_URI",
    "USERS_SERVER_HOST",
    "USERS_SERVER_PORT",
    "USERS_DATABASE_URI",
    "USERS_LOG_LEVEL",
    "USERS_LOG_COLORED",
    "USERS_LOG_FILE",
    "USERS_LOG_DIR",
];

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Temp config directory with a clean environment
pub(crate) struct TestConfigDir {
    pub(crate) dir: TempDir,
    _guards: Vec<EnvGuard>,
}

impl TestConfigDir {
    pub(crate) fn write_toml(&self, contents: &str) {
        std::fs::write(self.dir.path().join(crate::CONFIG_FILE_NAME), contents).unwrap();
    }
}

/// Create a temp config directory and point USERS_CONFIG_DIR at it
pub(crate) fn setup_config_dir() -> TestConfigDir {
    let dir = TempDir::new().unwrap();

    let mut guards: Vec<EnvGuard> = CONFIG_ENV_VARS.into_iter().map(EnvGuard::remove).collect();
    guards.push(EnvGuard::set(
        crate::CONFIG_DIR_ENV,
        dir.path().to_str().unwrap(),
    ));

    TestConfigDir {
        dir,
        _guards: guards,
    }
}
