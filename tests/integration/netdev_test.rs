use std::fs;
use std::io::Cursor;
use tempfile::TempDir;
use throttler::core::netdev::{find_counters, list_interfaces, read_counters, CounterSample};
use throttler::ThrottlerError;

// Captured from a Linux host, trimmed to a few interfaces
const PROC_NET_DEV: &str = "\
Inter-|   Receive                                                |  Transmit
 face |bytes    packets errs drop fifo frame compressed multicast|bytes    packets errs drop fifo colls carrier compressed
    lo: 2776770   11307    0    0    0     0          0         0  2776770   11307    0    0    0     0       0          0
docker0:       0       0    0    0    0     0          0         0      168       2    0    0    0     0       0          0
enp0s31f6:1874357398 1466331    0   13    0     0          0     30218 79534843  535781    0    0    0     0       0          0
 wlp2s0: 912873  8712    0    0    0     0          0         0   221390    1822    0    0    0     0       0          0
";

#[test]
fn test_read_real_world_layout() {
    let sample = find_counters(Cursor::new(PROC_NET_DEV), "enp0s31f6")
        .unwrap()
        .unwrap();
    assert_eq!(sample.bytes_received, 1_874_357_398);
    assert_eq!(sample.bytes_transmitted, 79_534_843);

    let docker = find_counters(Cursor::new(PROC_NET_DEV), "docker0")
        .unwrap()
        .unwrap();
    assert_eq!(docker, CounterSample::new(0, 168));
}

#[test]
fn test_no_prefix_collision() {
    let table = " eth01: 999 1 0 0 0 0 0 0 888 1 0 0 0 0 0 0\n";
    assert!(find_counters(Cursor::new(table), "eth0").unwrap().is_none());

    let table = " eth0: 100 0 0 0 0 0 0 0 200 0 0 0 0 0 0 0\n";
    assert!(find_counters(Cursor::new(table), "eth01").unwrap().is_none());
}

#[test]
fn test_list_interfaces_skips_headers() {
    let names = list_interfaces(Cursor::new(PROC_NET_DEV));
    assert_eq!(names, vec!["lo", "docker0", "enp0s31f6", "wlp2s0"]);
}

#[test]
fn test_read_counters_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("dev");
    fs::write(&path, PROC_NET_DEV).unwrap();

    let sample = read_counters(&path, "wlp2s0").unwrap();
    assert_eq!(sample, CounterSample::new(912_873, 221_390));

    let err = read_counters(&path, "wlan0").unwrap_err();
    assert!(matches!(err, ThrottlerError::InterfaceNotFound { .. }));
    assert!(err.to_string().contains("wlan0"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_read_counters_from_proc() {
    // Every Linux host has a loopback row
    let sample = read_counters(std::path::Path::new("/proc/net/dev"), "lo");
    assert!(sample.is_ok(), "Failed to read lo counters: {:?}", sample);
}
