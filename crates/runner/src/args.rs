//! Command line parsing for `fixlog-replay`

use crate::error::ReplayError;
use std::collections::HashMap;
use std::path::PathBuf;

pub const HELP: &str = r#"fixlog-replay - replay a FIX capture through a selective log filter

USAGE:
    fixlog-replay [OPTIONS]

OPTIONS:
    --config <PATH>          Load session settings from JSON file
    --session <ID>           Session to replay as, e.g. FIX.4.2:BANZAI->EXEC
                             (default: the only session in the settings file)
    --input <PATH>           Capture file with IN/OUT prefixed lines (default: stdin)
    --override <KEY=VALUE>   Runtime override, may be repeated
                             (e.g. LogMarketIncrementalRefresh=false)
    --help                   Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG                 Log level filter (default: info)

EXAMPLES:
    # Replay with settings-file toggles
    fixlog-replay --config settings.json --input capture.txt

    # Check the effect of suppressing incremental refreshes
    fixlog-replay --config settings.json --input capture.txt \
        --override LogMarketIncrementalRefresh=false
"#;

/// Parsed invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Replay(ReplayArgs),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplayArgs {
    pub config: Option<PathBuf>,
    pub session: Option<String>,
    pub input: Option<PathBuf>,
    pub overrides: HashMap<String, String>,
}

impl Command {
    /// Parse arguments, excluding the program name
    pub fn parse(args: &[String]) -> Result<Self, ReplayError> {
        let mut parsed = ReplayArgs::default();

        let mut i = 0;
        while i < args.len() {
            let arg = args[i].as_str();
            match arg {
                "--help" | "-h" => return Ok(Command::Help),
                "--config" | "-c" | "--session" | "-s" | "--input" | "-i" | "--override"
                | "-o" => {
                    i += 1;
                    let value = args
                        .get(i)
                        .ok_or_else(|| ReplayError::Usage(format!("{} requires a value", arg)))?;
                    match arg {
                        "--config" | "-c" => parsed.config = Some(PathBuf::from(value)),
                        "--session" | "-s" => parsed.session = Some(value.clone()),
                        "--input" | "-i" => parsed.input = Some(PathBuf::from(value)),
                        _ => {
                            let (key, val) = value.split_once('=').ok_or_else(|| {
                                ReplayError::Usage(format!(
                                    "override {:?} must be KEY=VALUE",
                                    value
                                ))
                            })?;
                            parsed.overrides.insert(key.to_string(), val.to_string());
                        }
                    }
                }
                other => {
                    return Err(ReplayError::Usage(format!("Unknown argument: {}", other)));
                }
            }
            i += 1;
        }

        Ok(Command::Replay(parsed))
    }
}
