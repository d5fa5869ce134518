pub mod aws_client_config;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum::{Display, EnumIter};

#[derive(Default, Serialize, Deserialize, Clone, Eq, PartialEq, EnumIter, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Environment {
    Local,
    #[default]
    Development,
    QA,
    Staging,
    Production,
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads the configuration used by the deployed lambdas.
    ///
    /// This will load the following files, in order:
    /// - OS environment variables
    /// - `.env.development` then `.env.development.local`
    /// - `.env.qa` then `.env.qa.local`
    /// - `.env.staging` then `.env.staging.local`
    /// - `.env.production` then `.env.production.local`
    /// - `.env.local`
    /// - `.env`
    ///
    /// Variables are not overriden, the first source to define a variable wins.
    /// If a variable is set in the OS environment, it will not be overriden by
    /// any file.
    pub fn load_default<TConfig>() -> Result<TConfig, envy::Error>
    where
        TConfig: DeserializeOwned,
    {
        for environment in Environment::iter() {
            if environment != Environment::Local {
                dotenv::from_filename(format!(".env.{}.local", environment)).ok();
                dotenv::from_filename(format!(".env.{}", environment)).ok();
            }
        }

        ConfigLoader::load::<TConfig>()
    }

    fn load<TConfig>() -> Result<TConfig, envy::Error>
    where
        TConfig: DeserializeOwned,
    {
        dotenv::from_filename(".env.local").ok();
        dotenv::from_filename(".env").ok();

        envy::from_env::<TConfig>()
    }
}
