use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Serialize;

use crate::{Error, Result};

/// Which search variants to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Lazy,
    Eager,
    Both,
}

impl Variant {
    pub fn runs_lazy(&self) -> bool {
        matches!(self, Variant::Lazy | Variant::Both)
    }

    pub fn runs_eager(&self) -> bool {
        matches!(self, Variant::Eager | Variant::Both)
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "lazy" => Ok(Variant::Lazy),
            "eager" | "indexed" => Ok(Variant::Eager),
            "both" => Ok(Variant::Both),
            other => Err(Error::InvalidArgument(format!("unknown variant `{}`", other))),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Variant::Lazy => "lazy",
            Variant::Eager => "eager",
            Variant::Both => "both",
        };
        f.write_str(name)
    }
}

/// How edge weights in the input file are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightKind {
    /// `i64`, fractional weights truncate
    Integer,
    /// `OrderedFloat<f64>`
    Float,
}

impl FromStr for WeightKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "int" | "integer" => Ok(WeightKind::Integer),
            "float" | "double" => Ok(WeightKind::Float),
            other => Err(Error::InvalidArgument(format!("unknown weight kind `{}`", other))),
        }
    }
}

/// Configuration for a checking run
#[derive(Debug, Clone)]
pub struct CheckConfig {
    pub graph_path: PathBuf,
    pub source: usize,
    pub variant: Variant,
    pub weights: WeightKind,
    pub json: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            graph_path: PathBuf::new(),
            source: 0,
            variant: Variant::Both,
            weights: WeightKind::Integer,
            json: false,
        }
    }
}

impl CheckConfig {
    pub const USAGE: &'static str = "usage: sssp_check <graph-file> [--source N] \
[--variant lazy|eager|both] [--weights int|float] [--json]";

    /// Parses command line arguments, program name excluded
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = CheckConfig::default();
        let mut path = None;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--source" | "-s" => {
                    let value = value_for(&arg, args.next())?;
                    config.source = value.parse().map_err(|_| {
                        Error::InvalidArgument(format!("source must be a vertex id, got `{}`", value))
                    })?;
                }
                "--variant" | "-v" => config.variant = value_for(&arg, args.next())?.parse()?,
                "--weights" | "-w" => config.weights = value_for(&arg, args.next())?.parse()?,
                "--json" => config.json = true,
                flag if flag.starts_with('-') => {
                    return Err(Error::InvalidArgument(format!("unknown flag `{}`", flag)))
                }
                _ if path.is_none() => path = Some(PathBuf::from(&arg)),
                _ => return Err(Error::InvalidArgument(format!("unexpected argument `{}`", arg))),
            }
        }

        config.graph_path =
            path.ok_or_else(|| Error::InvalidArgument("missing graph file".to_string()))?;
        Ok(config)
    }
}

fn value_for(flag: &str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| Error::InvalidArgument(format!("`{}` needs a value", flag)))
}
