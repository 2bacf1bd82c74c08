use std::path::PathBuf;
use serde::Deserialize;

pub fn get_config<T: for<'de> Deserialize<'de>>(config_path: PathBuf) -> Result<T, config::ConfigError> {
    let f = config::File::from(config_path);
    let config = config::Config::builder()
        .add_source(f)
        .build()?;
    config.try_deserialize::<T>()
}

#[derive(Debug, Default, Deserialize)]
pub struct ConsoleConfiguration {
    #[serde(default)]
    pub bench: BenchConfiguration,
    #[serde(default)]
    pub display: DisplayConfiguration,
}

#[derive(Debug, Deserialize)]
pub struct BenchConfiguration {
    #[serde(default = "default_iterations")]
    pub iterations: u64,
}

impl Default for BenchConfiguration {
    fn default() -> Self {
        Self {
            iterations: default_iterations(),
        }
    }
}

fn default_iterations() -> u64 {
    1_000_000
}

#[derive(Debug, Deserialize)]
pub struct DisplayConfiguration {
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for DisplayConfiguration {
    fn default() -> Self {
        Self {
            color: default_color(),
        }
    }
}

fn default_color() -> bool {
    true
}
