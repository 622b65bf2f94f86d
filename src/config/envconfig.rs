use std::path::Path;

use ::config as config_rs;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

pub trait EnvConfig: Sized + DeserializeOwned {
    /// Keys whose values are split on `LIST_SEPARATOR` into a list.
    const LIST_KEYS: &'static [&'static str] = &[];
    const LIST_SEPARATOR: &'static str = ",";

    fn load_dotenv() {
        // Load .env from crate root (falls back to current dir if missing)
        let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
        let _ = dotenvy::from_filename(manifest_dir.join(".env")).or_else(|_| dotenvy::dotenv());
    }

    fn environment() -> config_rs::Environment {
        let mut source = config_rs::Environment::default().try_parsing(true);
        if !Self::LIST_KEYS.is_empty() {
            source = source.list_separator(Self::LIST_SEPARATOR);
            for key in Self::LIST_KEYS {
                source = source.with_list_parse_key(key);
            }
        }
        source
    }

    fn validate(&self) -> Result<()> {
        Ok(())
    }

    fn from_env() -> Result<Self> {
        Self::load_dotenv();

        let settings = config_rs::Config::builder()
            .add_source(Self::environment())
            .build()
            .context("failed to read environment variables for config")?;

        let cfg = settings
            .try_deserialize::<Self>()
            .context("failed to deserialize environment into config")?;

        cfg.validate()?;
        Ok(cfg)
    }
}
