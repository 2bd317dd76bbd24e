//! Runtime configuration for the RuneHelp server.

use once_cell::sync::Lazy;
use std::env;

#[derive(Debug)]
pub struct Settings {
    /// Base URL of the OSRS hiscores endpoint.
    pub hiscores_url: String,
    /// Seconds before an in-flight hiscores request is abandoned.
    pub upstream_timeout: u64,
}

impl Settings {
    fn from_env() -> Self {
        let hiscores_url = env::var("HISCORES_URL").unwrap_or_else(|_| {
            "https://secure.runescape.com/m=hiscore_oldschool/index_lite.ws".into()
        });

        let upstream_timeout = env::var("UPSTREAM_TIMEOUT")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(10);

        Settings {
            hiscores_url,
            upstream_timeout,
        }
    }
}

static SETTINGS: Lazy<Settings> = Lazy::new(Settings::from_env);

pub fn settings() -> &'static Settings {
    &SETTINGS
}
