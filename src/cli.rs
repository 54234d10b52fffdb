//! Command-line surface.
//!
//! clap rejects unknown options outright, so arguments go through
//! [`scan_args`] first: unknown options are reported and dropped, abbreviated
//! long options are expanded, and the run carries on with whatever is left.
//! Arguments stay `OsString` throughout so an action line containing bytes
//! that are not UTF-8 reaches the shell untouched.

use crate::core::netdev::NET_DEV_PATH;
use crate::core::quantity::parse_byte_quantity;
use crate::core::{Limits, ThrottleConfig};
use crate::error::Result;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::ffi::OsString;
use std::path::PathBuf;

const SHORT_FLAGS: &[char] = &['h', 'v'];
const SHORT_VALUES: &[char] = &['u', 'd', 't', 's'];
const LONG_FLAGS: &[&str] = &["--help", "--version"];
const LONG_VALUES: &[&str] = &["--max-up", "--max-down", "--max-total", "--source"];

const LIMITS_HELP: &str = "\
Limits are measured in bytes and may carry a suffix:
  k or K for kilobytes, m or M for megabytes, g or G for gigabytes, t or T for terabytes
  (binary units, 1K = 1024). Without a suffix plain bytes are assumed.

Example: throttler eth0 -u 10G -d 10G -t 15G 'echo Throttle'

Called without any limits it prints the number of bytes received and transmitted
on the interface. Counters are cumulative since the interface was last reset.";

/// Build the clap command
pub fn build_cli() -> Command {
    Command::new("throttler")
        .about("Perform an action once a network interface has used too much volume")
        .disable_version_flag(true)
        .args_override_self(true)
        .infer_long_args(true)
        .after_help(LIMITS_HELP)
        .arg(
            Arg::new("version")
                .short('v')
                .long("version")
                .help("Print version information")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("max-up")
                .short('u')
                .long("max-up")
                .value_name("LIMIT")
                .help("Upload (transmitted bytes) limit")
                .value_parser(value_parser!(OsString))
                .allow_hyphen_values(true),
        )
        .arg(
            Arg::new("max-down")
                .short('d')
                .long("max-down")
                .value_name("LIMIT")
                .help("Download (received bytes) limit")
                .value_parser(value_parser!(OsString))
                .allow_hyphen_values(true),
        )
        .arg(
            Arg::new("max-total")
                .short('t')
                .long("max-total")
                .value_name("LIMIT")
                .help("Limit of upload and download combined")
                .value_parser(value_parser!(OsString))
                .allow_hyphen_values(true),
        )
        .arg(
            Arg::new("source")
                .short('s')
                .long("source")
                .value_name("PATH")
                .help("Interface statistics table to read")
                .value_parser(value_parser!(PathBuf))
                .default_value(NET_DEV_PATH),
        )
        .arg(
            Arg::new("interface")
                .value_name("INTERFACE")
                .help("Network interface to watch, e.g. eth0")
                .value_parser(value_parser!(OsString))
                .index(1),
        )
        .arg(
            Arg::new("action")
                .value_name("ACTION")
                .help("Shell command run when a limit is exceeded")
                .value_parser(value_parser!(OsString))
                .index(2),
        )
        .arg(
            Arg::new("extra")
                .index(3)
                .num_args(1..)
                .value_parser(value_parser!(OsString))
                .hide(true),
        )
}

/// Arguments left after dropping unknown options, plus what was dropped
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ArgScan {
    pub args: Vec<OsString>,
    pub problems: Vec<String>,
}

/// Expand a long option name the way getopt_long does: an exact name wins,
/// otherwise the prefix must pick out exactly one option. On failure the
/// candidates are returned (none for unknown, several for ambiguous).
fn resolve_long(name: &str) -> std::result::Result<&'static str, Vec<&'static str>> {
    let all = LONG_VALUES.iter().chain(LONG_FLAGS.iter()).copied();

    if let Some(exact) = all.clone().find(|long| *long == name) {
        return Ok(exact);
    }

    let candidates: Vec<&'static str> = all.filter(|long| long.starts_with(name)).collect();
    match candidates.as_slice() {
        [single] => Ok(*single),
        _ => Err(candidates),
    }
}

/// Drop options clap would reject so the run can continue.
///
/// The first item is the program name and is kept as is. Everything after a
/// bare `--` is passed through untouched, as is every option value and
/// positional argument.
pub fn scan_args<I, S>(args: I) -> ArgScan
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut scan = ArgScan::default();
    let mut iter = args.into_iter().map(Into::into);

    if let Some(program) = iter.next() {
        scan.args.push(program);
    }

    let mut passthrough = false;
    // Index of an option still waiting for its value
    let mut pending: Option<usize> = None;

    for arg in iter {
        if passthrough || pending.is_some() {
            pending = None;
            scan.args.push(arg);
            continue;
        }

        let text = arg.to_string_lossy().into_owned();

        if text == "--" {
            passthrough = true;
            scan.args.push(arg);
        } else if text.starts_with("--") {
            let (name, value) = match text.split_once('=') {
                Some((name, value)) => (name, Some(value)),
                None => (text.as_str(), None),
            };

            match resolve_long(name) {
                Ok(long) => {
                    if LONG_VALUES.contains(&long) && value.is_none() {
                        pending = Some(scan.args.len());
                    }
                    if long == name {
                        scan.args.push(arg);
                    } else {
                        let expanded = match value {
                            Some(value) => format!("{}={}", long, value),
                            None => long.to_string(),
                        };
                        scan.args.push(expanded.into());
                    }
                }
                Err(candidates) if candidates.is_empty() => {
                    scan.problems.push(format!("Unrecognized option '{}'", name));
                }
                Err(candidates) => {
                    scan.problems.push(format!(
                        "Option '{}' is ambiguous; possibilities: {}",
                        name,
                        candidates.join(" ")
                    ));
                }
            }
        } else if text.len() > 1 && text.starts_with('-') {
            let mut kept = String::from("-");
            let mut dropped = false;
            let mut chars = text.chars().skip(1);
            while let Some(c) = chars.next() {
                if SHORT_FLAGS.contains(&c) {
                    kept.push(c);
                } else if SHORT_VALUES.contains(&c) {
                    kept.push(c);
                    let value: String = chars.by_ref().collect();
                    if value.is_empty() {
                        pending = Some(scan.args.len());
                    }
                    kept.push_str(&value);
                } else {
                    dropped = true;
                    scan.problems.push(format!("Unrecognized option '-{}'", c));
                }
            }
            if !dropped {
                scan.args.push(arg);
            } else if kept.len() > 1 {
                scan.args.push(kept.into());
            }
        } else {
            scan.args.push(arg);
        }
    }

    if let Some(idx) = pending {
        // A dangling option has no value, so the argument is plain ASCII
        let mut text = scan.args[idx].to_string_lossy().into_owned();
        let option = if text.starts_with("--") {
            scan.args.remove(idx);
            text
        } else {
            let c = text.pop().unwrap_or_default();
            if text.len() > 1 {
                scan.args[idx] = text.into();
            } else {
                scan.args.remove(idx);
            }
            format!("-{}", c)
        };
        scan.problems.push(format!("Option '{}' requires a value", option));
    }

    scan
}

fn read_limit(matches: &ArgMatches, id: &str, label: &str, problems: &mut Vec<String>) -> Option<u64> {
    let raw = matches.get_one::<OsString>(id)?;
    match parse_byte_quantity(&raw.to_string_lossy()) {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            log::debug!("Ignoring {} limit: {}", label, e);
            problems.push(format!("Invalid argument for {}", label));
            None
        }
    }
}

/// Read the three limits. Invalid values are reported and left unset.
pub fn limits_from_matches(matches: &ArgMatches) -> (Limits, Vec<String>) {
    let mut problems = Vec::new();
    let limits = Limits {
        max_upload: read_limit(matches, "max-up", "max upload", &mut problems),
        max_download: read_limit(matches, "max-down", "max download", &mut problems),
        max_total: read_limit(matches, "max-total", "max total", &mut problems),
    };
    (limits, problems)
}

/// Assemble the run configuration from parsed arguments and limits
pub fn config_from_matches(matches: &ArgMatches, limits: Limits) -> Result<ThrottleConfig> {
    if let Some(extra) = matches.get_many::<OsString>("extra") {
        let extra: Vec<String> = extra.map(|arg| arg.to_string_lossy().into_owned()).collect();
        log::warn!("Ignoring extra arguments: {}", extra.join(" "));
    }

    let interface = matches
        .get_one::<OsString>("interface")
        .map(|name| name.to_string_lossy().into_owned());

    let action = matches
        .get_one::<OsString>("action")
        .filter(|action| !action.to_string_lossy().trim().is_empty())
        .cloned();

    let mut config = ThrottleConfig::new(interface, limits)?.with_action(action);

    if let Some(source) = matches.get_one::<PathBuf>("source") {
        config = config.with_source(source);
    }

    Ok(config)
}
