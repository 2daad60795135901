//! Declarative flag schema and a generic single-dash flag parser.
//!
//! A [`FlagSchema`] is a list of [`FlagSpec`]s (names, kind, default, usage
//! line). [`FlagSchema::parse`] walks the argument words the same way
//! conventional Unix single-dash parsers do:
//!
//! | Syntax | Meaning |
//! |--------|---------|
//! | `-name value`, `--name value` | flag with a separate value |
//! | `-name=value` | flag with an inline value |
//! | `--` | end of flags, the rest is positional |
//! | `-` or any word not starting with `-` | first positional word |
//! | `-h`, `-help` | request usage |
//!
//! Every failure is a [`ParseError`] whose message ends with the usage
//! synopsis, so it can be shown to the user as-is.

use super::error::ParseError;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write;

/// Value type of a flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKind {
    Text,
    Unsigned,
}

impl FlagKind {
    fn type_name(&self) -> &'static str {
        match self {
            FlagKind::Text => "string",
            FlagKind::Unsigned => "int",
        }
    }
}

/// A parsed or default flag value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    Text(String),
    Unsigned(u32),
}

impl FlagValue {
    fn kind(&self) -> FlagKind {
        match self {
            FlagValue::Text(_) => FlagKind::Text,
            FlagValue::Unsigned(_) => FlagKind::Unsigned,
        }
    }

    /// Zero values are not shown as defaults in usage output
    fn is_zero(&self) -> bool {
        match self {
            FlagValue::Text(s) => s.is_empty(),
            FlagValue::Unsigned(n) => *n == 0,
        }
    }
}

impl std::fmt::Display for FlagValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlagValue::Text(s) => write!(f, "{:?}", s),
            FlagValue::Unsigned(n) => write!(f, "{}", n),
        }
    }
}

/// Declaration of a single flag
#[derive(Debug, Clone)]
pub struct FlagSpec {
    /// Key used to read the value back from [`ParsedArguments`]
    pub key: &'static str,
    /// Accepted names without the leading dash; the first is the primary one
    pub names: &'static [&'static str],
    pub default: FlagValue,
    pub usage: &'static str,
}

impl FlagSpec {
    pub fn new(
        key: &'static str,
        names: &'static [&'static str],
        default: FlagValue,
        usage: &'static str,
    ) -> Self {
        Self {
            key,
            names,
            default,
            usage,
        }
    }

    fn kind(&self) -> FlagKind {
        self.default.kind()
    }

    fn matches(&self, name: &str) -> bool {
        self.names.contains(&name)
    }

    fn convert(&self, name: &str, raw: &str) -> Result<FlagValue, String> {
        match self.kind() {
            FlagKind::Text => Ok(FlagValue::Text(raw.to_string())),
            FlagKind::Unsigned => raw
                .parse::<u32>()
                .map(FlagValue::Unsigned)
                .map_err(|_| {
                    format!(
                        "invalid value {:?} for flag -{}: expected a whole number of 0 or more",
                        raw, name
                    )
                }),
        }
    }
}

/// Flag values plus the positional words after the last flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedArguments {
    values: BTreeMap<&'static str, FlagValue>,
    explicit: BTreeSet<&'static str>,
    positional: Vec<String>,
}

impl ParsedArguments {
    /// Text value for `key`; empty when the key is unknown or not text
    pub fn text(&self, key: &str) -> &str {
        match self.values.get(key) {
            Some(FlagValue::Text(s)) => s,
            _ => "",
        }
    }

    /// Unsigned value for `key`; zero when the key is unknown or not numeric
    pub fn unsigned(&self, key: &str) -> u32 {
        match self.values.get(key) {
            Some(FlagValue::Unsigned(n)) => *n,
            _ => 0,
        }
    }

    /// Whether the flag was given on the command line (as opposed to defaulted)
    pub fn is_explicit(&self, key: &str) -> bool {
        self.explicit.contains(key)
    }

    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    pub fn into_positional(self) -> Vec<String> {
        self.positional
    }
}

/// A command's full flag declaration
#[derive(Debug, Clone)]
pub struct FlagSchema {
    program: String,
    flags: Vec<FlagSpec>,
    trailing: Option<(&'static str, &'static str)>,
}

impl FlagSchema {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            flags: Vec::new(),
            trailing: None,
        }
    }

    pub fn flag(mut self, spec: FlagSpec) -> Self {
        self.flags.push(spec);
        self
    }

    /// Describe the positional words in the usage synopsis
    pub fn trailing(mut self, synopsis: &'static str, usage: &'static str) -> Self {
        self.trailing = Some((synopsis, usage));
        self
    }

    /// Usage synopsis, one entry per flag
    pub fn usage(&self) -> String {
        let mut out = format!("Usage of {}:\n", self.program);
        for spec in &self.flags {
            let names = spec
                .names
                .iter()
                .map(|n| format!("-{}", n))
                .collect::<Vec<_>>()
                .join(", ");
            let _ = write!(out, "  {} {}\n    \t{}", names, spec.kind().type_name(), spec.usage);
            if !spec.default.is_zero() {
                let _ = write!(out, " (default {})", spec.default);
            }
            out.push('\n');
        }
        if let Some((synopsis, usage)) = self.trailing {
            let _ = writeln!(out, "  {}\n    \t{}", synopsis, usage);
        }
        out
    }

    fn failure(&self, reason: impl AsRef<str>) -> ParseError {
        ParseError::new(format!("{}\n{}", reason.as_ref(), self.usage()))
    }

    fn lookup(&self, name: &str) -> Option<&FlagSpec> {
        self.flags.iter().find(|spec| spec.matches(name))
    }

    /// Parse argument words (command name already removed).
    pub fn parse(&self, args: &[String]) -> Result<ParsedArguments, ParseError> {
        let mut values: BTreeMap<&'static str, FlagValue> = self
            .flags
            .iter()
            .map(|spec| (spec.key, spec.default.clone()))
            .collect();
        let mut explicit = BTreeSet::new();
        let mut index = 0;

        while index < args.len() {
            let arg = &args[index];
            if arg.len() < 2 || !arg.starts_with('-') {
                break;
            }

            let mut body = &arg[1..];
            if let Some(rest) = body.strip_prefix('-') {
                if rest.is_empty() {
                    // "--" terminates flags
                    index += 1;
                    break;
                }
                body = rest;
            }
            if body.starts_with('-') || body.starts_with('=') {
                return Err(self.failure(format!("bad flag syntax: {}", arg)));
            }
            index += 1;

            let (name, inline) = match body.split_once('=') {
                Some((name, value)) => (name, Some(value)),
                None => (body, None),
            };

            if (name == "h" || name == "help") && self.lookup(name).is_none() {
                return Err(ParseError::new(self.usage()));
            }

            let spec = self
                .lookup(name)
                .ok_or_else(|| self.failure(format!("flag provided but not defined: -{}", name)))?;

            let raw = match inline {
                Some(value) => value.to_string(),
                None => {
                    let Some(next) = args.get(index) else {
                        return Err(self.failure(format!("flag needs an argument: -{}", name)));
                    };
                    index += 1;
                    next.clone()
                }
            };

            let value = spec.convert(name, &raw).map_err(|reason| self.failure(reason))?;
            values.insert(spec.key, value);
            explicit.insert(spec.key);
        }

        Ok(ParsedArguments {
            values,
            explicit,
            positional: args[index..].to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> FlagSchema {
        FlagSchema::new("demo")
            .flag(FlagSpec::new(
                "title",
                &["t", "title"],
                FlagValue::Text(String::new()),
                "The title",
            ))
            .flag(FlagSpec::new(
                "count",
                &["n"],
                FlagValue::Unsigned(0),
                "How many",
            ))
            .flag(FlagSpec::new(
                "kind",
                &["k"],
                FlagValue::Text("plain".to_string()),
                "The kind",
            ))
            .trailing("[words]...", "Extra words")
    }

    fn args(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_defaults_without_flags() {
        let parsed = schema().parse(&[]).unwrap();
        assert_eq!(parsed.text("title"), "");
        assert_eq!(parsed.unsigned("count"), 0);
        assert_eq!(parsed.text("kind"), "plain");
        assert!(!parsed.is_explicit("kind"));
        assert!(parsed.positional().is_empty());
    }

    #[test]
    fn test_separate_and_inline_values() {
        let parsed = schema()
            .parse(&args(&["-t", "Hello", "--n=3", "-k=fancy"]))
            .unwrap();
        assert_eq!(parsed.text("title"), "Hello");
        assert_eq!(parsed.unsigned("count"), 3);
        assert_eq!(parsed.text("kind"), "fancy");
        assert!(parsed.is_explicit("title"));
        assert!(parsed.is_explicit("count"));
    }

    #[test]
    fn test_alias_names() {
        let parsed = schema().parse(&args(&["-title", "Hi"])).unwrap();
        assert_eq!(parsed.text("title"), "Hi");
    }

    #[test]
    fn test_positional_stops_flag_parsing() {
        let parsed = schema()
            .parse(&args(&["-n", "2", "one", "-t", "two"]))
            .unwrap();
        assert_eq!(parsed.unsigned("count"), 2);
        assert_eq!(parsed.text("title"), "");
        assert_eq!(parsed.positional(), &args(&["one", "-t", "two"])[..]);
    }

    #[test]
    fn test_double_dash_and_single_dash() {
        let parsed = schema().parse(&args(&["--", "-t"])).unwrap();
        assert_eq!(parsed.positional(), &args(&["-t"])[..]);

        let parsed = schema().parse(&args(&["-", "x"])).unwrap();
        assert_eq!(parsed.positional(), &args(&["-", "x"])[..]);
    }

    #[test]
    fn test_unknown_flag_includes_usage() {
        let err = schema().parse(&args(&["-x", "1"])).unwrap_err();
        assert!(err.message.starts_with("flag provided but not defined: -x\n"));
        assert!(err.message.contains("Usage of demo:"));
        assert!(err.message.contains("-t, -title string"));
        assert!(err.message.contains("(default \"plain\")"));
        assert!(err.message.contains("[words]..."));
    }

    #[test]
    fn test_bad_unsigned_value() {
        let err = schema().parse(&args(&["-n", "three"])).unwrap_err();
        assert!(err.message.starts_with("invalid value \"three\" for flag -n"));

        let err = schema().parse(&args(&["-n", "-1"])).unwrap_err();
        assert!(err.message.starts_with("invalid value \"-1\" for flag -n"));
    }

    #[test]
    fn test_missing_value() {
        let err = schema().parse(&args(&["-t"])).unwrap_err();
        assert!(err.message.starts_with("flag needs an argument: -t"));
    }

    #[test]
    fn test_bad_syntax() {
        let err = schema().parse(&args(&["---t", "x"])).unwrap_err();
        assert!(err.message.starts_with("bad flag syntax: ---t"));
        let err = schema().parse(&args(&["-=x"])).unwrap_err();
        assert!(err.message.starts_with("bad flag syntax: -=x"));
    }

    #[test]
    fn test_help_returns_usage() {
        let err = schema().parse(&args(&["-h"])).unwrap_err();
        assert!(err.message.starts_with("Usage of demo:"));
    }

    #[test]
    fn test_zero_defaults_are_hidden() {
        let usage = schema().usage();
        assert!(!usage.contains("(default 0)"));
        assert!(!usage.contains("(default \"\")"));
    }
}
