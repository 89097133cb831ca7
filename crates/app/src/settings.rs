use config::{Config, ConfigError, Environment, File, Source};
use pulse_core::config::AppConfig;

/// 可选配置文件名（不含扩展名）
pub const CONFIG_FILE: &str = "pulse";
/// 环境变量前缀，形如 `PULSE__FEED__SEED`
pub const ENV_PREFIX: &str = "PULSE";

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}

/// # Summary
/// 按层叠顺序合并配置：结构体默认值 < 配置文件 < 环境变量。
///
/// # Arguments
/// * `file`: 配置文件来源。
/// * `env`: 环境变量来源。
fn layered<F>(file: F, env: Environment) -> Result<AppConfig, ConfigError>
where
    F: Source + Send + Sync + 'static,
{
    Config::builder()
        .add_source(Config::try_from(&AppConfig::default())?)
        .add_source(file)
        .add_source(env)
        .build()?
        .try_deserialize()
}

/// # Summary
/// 从工作目录下可选的 `pulse.{toml,yaml,json}` 与 `PULSE__*` 环境变量加载配置。
pub fn load() -> Result<AppConfig, ConfigError> {
    layered(File::with_name(CONFIG_FILE).required(false), environment())
}
