use std::{env, fs, path::Path};

use crate::{
    errors::Error,
    ports::{DiagnosticSink, SilentDiagnostics, TracingDiagnostics},
    Result,
};

/// Typed configuration for processes that marshal peer lists through the codec.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Route decode diagnostics to `tracing` (true) or drop them.
    pub diagnostics_enabled: bool,
    pub pretty_json: bool,
    /// Emit `inputDialogPeer` envelopes instead of bare peers by default.
    pub envelopes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            diagnostics_enabled: true,
            pretty_json: false,
            envelopes: false,
        }
    }
}

impl Config {
    /// Load from the process environment, after an optional `.env` in the
    /// working directory.
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));
        Self::from_lookup(env_str)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let diagnostics_enabled =
            parse_bool(&lookup, "PEERREF_DIAGNOSTICS")?.unwrap_or(defaults.diagnostics_enabled);
        let pretty_json =
            parse_bool(&lookup, "PEERREF_PRETTY_JSON")?.unwrap_or(defaults.pretty_json);
        let envelopes = parse_bool(&lookup, "PEERREF_ENVELOPES")?.unwrap_or(defaults.envelopes);

        Ok(Self {
            diagnostics_enabled,
            pretty_json,
            envelopes,
        })
    }

    pub fn diagnostics(&self) -> Box<dyn DiagnosticSink> {
        if self.diagnostics_enabled {
            Box::new(TracingDiagnostics)
        } else {
            Box::new(SilentDiagnostics)
        }
    }
}

fn parse_bool(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<bool>> {
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    match raw.trim().to_lowercase().as_str() {
        "" => Ok(None),
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" => Ok(Some(false)),
        other => Err(Error::Config(format!(
            "{key} must be a boolean, got {other:?}"
        ))),
    }
}

fn env_str(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };

    for (key, val) in parse_dotenv(&contents) {
        if env::var_os(&key).is_some() {
            continue; // do not override existing env
        }
        env::set_var(key, val);
    }
}

fn parse_dotenv(contents: &str) -> Vec<(String, String)> {
    let mut out = Vec::new();
    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }

        let mut val = v.trim().to_string();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = val[1..val.len() - 1].to_string();
        }

        out.push((key.to_string(), val));
    }
    out
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(cfg.diagnostics_enabled);
    }

    #[test]
    fn reads_flags() {
        let cfg = Config::from_lookup(lookup(&[
            ("PEERREF_DIAGNOSTICS", "off"),
            ("PEERREF_PRETTY_JSON", "YES"),
            ("PEERREF_ENVELOPES", " 1 "),
        ]))
        .unwrap();
        assert!(!cfg.diagnostics_enabled);
        assert!(cfg.pretty_json);
        assert!(cfg.envelopes);
    }

    #[test]
    fn rejects_garbage_bool() {
        let err = Config::from_lookup(lookup(&[("PEERREF_ENVELOPES", "maybe")])).unwrap_err();
        match err {
            Error::Config(msg) => assert!(msg.contains("PEERREF_ENVELOPES"), "{msg}"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn dotenv_parsing_strips_quotes_and_comments() {
        let parsed = parse_dotenv(
            "# comment\nPEERREF_PRETTY_JSON=\"true\"\n\nbroken line\n =x\nPEERREF_ENVELOPES='0'\n",
        );
        assert_eq!(
            parsed,
            vec![
                ("PEERREF_PRETTY_JSON".to_string(), "true".to_string()),
                ("PEERREF_ENVELOPES".to_string(), "0".to_string()),
            ]
        );
    }
}
