use std::collections::HashMap;
use std::str::FromStr;

use custom_error::custom_error;

custom_error! {pub ConfigError
    UnexpectedArgument {argument: String} = "Unexpected argument: {argument}. Options are passed as --key=value",
    InvalidValue {key: String, description: String} = "Invalid value for --{key}: {description}",
}

const DEFAULT_WIDTH: usize = 640;
const DEFAULT_HEIGHT: usize = 480;
const DEFAULT_THREADS: usize = 1;
const DEFAULT_OUTPUT: &str = "result.bmp";

#[derive(Clone, Debug, PartialEq)]
pub struct RenderSettings {
    pub width: usize,
    pub height: usize,
    /// 1 renders on the calling thread, anything above uses a thread pool of that size.
    pub threads: usize,
    pub output: String,
    pub show_progress: bool,
}

impl Default for RenderSettings {

    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            threads: DEFAULT_THREADS,
            output: DEFAULT_OUTPUT.to_string(),
            show_progress: true,
        }
    }
}

impl RenderSettings {

    pub fn from_options(options: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            width: positive(options, "width", defaults.width)?,
            height: positive(options, "height", defaults.height)?,
            threads: positive(options, "threads", defaults.threads)?,
            output: options.get("output").cloned().unwrap_or(defaults.output),
            show_progress: option_value(options, "progress", defaults.show_progress)?,
        })
    }
}

/// Collects `--key=value` arguments. A bare `--flag` is stored as `true`.
pub fn parse_args(args: &[String]) -> Result<HashMap<String, String>, ConfigError> {
    let mut options = HashMap::new();

    for arg in args {
        let option = match arg.strip_prefix("--") {
            Some(v) if !v.is_empty() => v,
            _ => return Err(ConfigError::UnexpectedArgument { argument: arg.clone() }),
        };

        let (key, value) = match option.find('=') {
            Some(index) => (&option[..index], &option[index + 1..]),
            None => (option, "true"),
        };

        options.insert(key.to_string(), value.to_string());
    }

    Ok(options)
}

fn option_value<T>(options: &HashMap<String, String>, key: &str, default: T) -> Result<T, ConfigError>
    where T: FromStr, T::Err: ToString {
    match options.get(key) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|err: T::Err| ConfigError::InvalidValue {
            key: key.to_string(),
            description: err.to_string(),
        }),
    }
}

fn positive(options: &HashMap<String, String>, key: &str, default: usize) -> Result<usize, ConfigError> {
    match option_value(options, key, default)? {
        0 => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            description: "expected a value greater than zero".to_string(),
        }),
        v => Ok(v),
    }
}
