use throttler::cli::{build_cli, config_from_matches, limits_from_matches, scan_args};
use throttler::commands::version::version_string;
use throttler::core::quantity::parse_byte_quantity;
use std::ffi::OsStr;

fn parse(args: &[&str]) -> throttler::Result<throttler::ThrottleConfig> {
    let scan = scan_args(std::iter::once("throttler").chain(args.iter().copied()));
    let matches = build_cli().try_get_matches_from(scan.args).unwrap();
    let (limits, _) = limits_from_matches(&matches);
    config_from_matches(&matches, limits)
}

#[test]
fn test_suffix_multipliers() {
    for (suffix, shift) in [("k", 10), ("M", 20), ("g", 30), ("T", 40)] {
        let input = format!("3{}", suffix);
        assert_eq!(parse_byte_quantity(&input).unwrap(), 3u64 << shift);
    }
    assert_eq!(parse_byte_quantity("1024").unwrap(), 1024);
    assert!(parse_byte_quantity("abc").is_err());
}

#[test]
fn test_example_from_help() {
    let config = parse(&["eth0", "-u", "10G", "-d", "10G", "-t", "15G", "echo Throttle"]).unwrap();
    assert_eq!(config.interface, "eth0");
    assert_eq!(config.limits.max_upload, Some(10 << 30));
    assert_eq!(config.limits.max_download, Some(10 << 30));
    assert_eq!(config.limits.max_total, Some(15 << 30));
    assert_eq!(config.action.as_deref(), Some(OsStr::new("echo Throttle")));
}

#[test]
fn test_long_options() {
    let config = parse(&["--max-up", "1k", "--max-down=2k", "--max-total", "3k", "wlan0"]).unwrap();
    assert_eq!(config.limits.max_upload, Some(1024));
    assert_eq!(config.limits.max_download, Some(2048));
    assert_eq!(config.limits.max_total, Some(3072));
    assert!(config.action.is_none());
}

#[test]
fn test_unknown_option_does_not_abort() {
    let config = parse(&["--frobnicate", "-u", "1K", "eth0"]).unwrap();
    assert_eq!(config.interface, "eth0");
    assert_eq!(config.limits.max_upload, Some(1024));
}

#[test]
fn test_version_string() {
    assert_eq!(
        version_string(),
        format!("Throttler {}", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn test_abbreviated_long_options() {
    let config = parse(&["--max-u", "1", "--max-d=2k", "--max-to", "3k", "eth0"]).unwrap();
    assert_eq!(config.limits.max_upload, Some(1));
    assert_eq!(config.limits.max_download, Some(2048));
    assert_eq!(config.limits.max_total, Some(3072));
    assert_eq!(config.interface, "eth0");
}
