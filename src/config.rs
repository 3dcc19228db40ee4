use std::env;

const DEFAULT_SMTP_HOST: &str = "localhost";
const DEFAULT_SMTP_PORT: u16 = 1025;

/// Outgoing mail transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SmtpSettings {
    /// Unauthenticated local catcher such as Mailpit.
    Local { host: String, port: u16 },
    Relay {
        server: String,
        username: String,
        password: String,
    },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub rust_env: String,
    pub database_url: String,
    pub redis_url: String,
    pub host: String,
    pub port: String,
    /// Base URL used in verification links.
    pub app_url: String,
    pub email_from: String,
    pub smtp: SmtpSettings,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the process environment.
    ///
    /// Panics on missing values; only called during startup.
    pub fn from_env() -> Self {
        let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        if dotenvy::from_filename(format!(".env.{rust_env}")).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|key| env::var(key).ok()).unwrap_or_else(|missing| panic!("{missing}"))
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| lookup(key).ok_or_else(|| format!("{key} is not set"));

        let rust_env = lookup("RUST_ENV").unwrap_or_else(|| "development".to_string());
        let host = required("HOST")?;
        let port = required("PORT")?;

        let smtp = if rust_env == "test" {
            let port = match lookup("SMTP_PORT") {
                Some(raw) => raw
                    .parse()
                    .map_err(|_| format!("Invalid SMTP_PORT: {raw}"))?,
                None => DEFAULT_SMTP_PORT,
            };
            SmtpSettings::Local {
                host: lookup("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
                port,
            }
        } else {
            SmtpSettings::Relay {
                server: required("SMTP_SERVER")?,
                username: required("SMTP_USERNAME")?,
                password: required("SMTP_PASSWORD")?,
            }
        };

        let app_url = lookup("APP_URL").unwrap_or_else(|| format!("http://{host}:{port}"));

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            redis_url: required("REDIS_URL")?,
            email_from: required("EMAIL_FROM")?,
            rust_env,
            host,
            port,
            app_url,
            smtp,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
