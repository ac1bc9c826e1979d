use std::fmt;
use std::str::FromStr;

pub const ENVIRONMENT_VAR: &str = "APP_ENVIRONMENT";

/// Selects the optional `appsettings.{name}` overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Local,
    Test,
    Prod,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Test => "test",
            Environment::Prod => "prod",
        }
    }

    /// Reads `APP_ENVIRONMENT`; unset means `local`.
    pub fn from_env() -> Result<Self, String> {
        match std::env::var(ENVIRONMENT_VAR) {
            Ok(value) => value.parse(),
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn config_file_stem(&self) -> String {
        format!("appsettings.{}", self.as_str())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "local" | "dev" | "development" => Ok(Self::Local),
            "test" => Ok(Self::Test),
            "prod" | "production" => Ok(Self::Prod),
            _ => Err(format!(
                "unknown {} '{}', expected local, test or prod",
                ENVIRONMENT_VAR, normalized
            )),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
