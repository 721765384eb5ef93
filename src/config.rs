use std::env;

use error::ConfigError;

pub const DEBUG_VAR: &'static str = "CONFINE_LAUNCHER_DEBUG";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    pub debug: bool,
}

impl Config {
    pub fn from_env() -> Result<Config, ConfigError> {
        Config::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
        where F: Fn(&str) -> Option<String>
    {
        let debug = match lookup(DEBUG_VAR) {
            Some(value) => parse_bool(DEBUG_VAR, &value)?,
            None => false,
        };
        Ok(Config { debug: debug })
    }
}

fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value {
        "yes" | "1" | "true" => Ok(true),
        "no" | "0" | "false" | "" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var: var.to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
fn lookup_debug(value: Option<&'static str>)
                -> impl Fn(&str) -> Option<String> {
    move |name| {
        assert_eq!(DEBUG_VAR, name);
        value.map(|v| v.to_string())
    }
}

#[test]
fn test_unset() {
    assert_eq!(Ok(Config { debug: false }), Config::from_lookup(lookup_debug(None)));
}

#[test]
fn test_bool_spellings() {
    for v in &["yes", "1", "true"] {
        assert_eq!(Ok(Config { debug: true }),
                   Config::from_lookup(lookup_debug(Some(*v))));
    }
    for v in &["no", "0", "false", ""] {
        assert_eq!(Ok(Config { debug: false }),
                   Config::from_lookup(lookup_debug(Some(*v))));
    }
}

#[test]
fn test_invalid_bool() {
    let err = Config::from_lookup(lookup_debug(Some("maybe"))).unwrap_err();
    assert_eq!(ConfigError::InvalidBool {
        var: DEBUG_VAR.to_string(),
        value: "maybe".to_string(),
    }, err);
}
