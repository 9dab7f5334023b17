//! Add semantics: merge into existing entry, append otherwise, reject bad IPs.

mod common;

use roster::error::HostsError;
use roster::hosts::HostsFile;
use std::fs;

#[test]
fn add_merges_into_existing_entry_existing_first() {
    let (_dir, path) = common::temp_hosts("1.1.1.1 b\n");

    let mut store = HostsFile::load(&path).unwrap();
    store.add("1.1.1.1", &["a"]).unwrap();
    store.flush().unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "1.1.1.1 b a\n");
}

#[test]
fn add_appends_new_entry_for_unknown_ip() {
    let (_dir, path) = common::temp_hosts("127.0.0.1 localhost\n");

    let mut store = HostsFile::load(&path).unwrap();
    store.add("10.0.0.1", &["api.test", "db.test"]).unwrap();
    store.flush().unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "127.0.0.1 localhost\n10.0.0.1 api.test db.test\n"
    );
}

#[test]
fn add_skips_hostnames_already_present() {
    let (_dir, path) = common::temp_hosts("10.0.0.1 a\n");

    let mut store = HostsFile::load(&path).unwrap();
    store.add("10.0.0.1", &["a", "b", "b"]).unwrap();

    assert!(store.has("10.0.0.1", "a"));
    assert!(store.has("10.0.0.1", "b"));
    store.flush().unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "10.0.0.1 a b\n");
}

#[test]
fn add_matches_ip_by_parsed_value() {
    let (_dir, path) = common::temp_hosts("::1 localhost\n");

    let mut store = HostsFile::load(&path).unwrap();
    store.add("0:0:0:0:0:0:0:1", &["me.test"]).unwrap();
    store.flush().unwrap();

    // One line, canonical address, merged names.
    assert_eq!(fs::read_to_string(&path).unwrap(), "::1 localhost me.test\n");
}

#[test]
fn add_invalid_ip_leaves_model_unchanged() {
    let content = "127.0.0.1 localhost\n";
    let (_dir, path) = common::temp_hosts(content);

    let mut store = HostsFile::load(&path).unwrap();
    let err = store.add("999.0.0.1", &["x"]).unwrap_err();
    assert!(matches!(err, HostsError::InvalidIp(_)));

    store.flush().unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), content);
}

#[test]
fn add_requires_hostnames() {
    let (_dir, path) = common::temp_hosts("");

    let mut store = HostsFile::load(&path).unwrap();
    let err = store.add("10.0.0.1", &[] as &[&str]).unwrap_err();
    assert!(matches!(err, HostsError::NoHostnames));
}

#[test]
fn add_does_not_touch_the_file_until_flush() {
    let content = "127.0.0.1 localhost\n";
    let (_dir, path) = common::temp_hosts(content);

    let mut store = HostsFile::load(&path).unwrap();
    store.add("10.0.0.9", &["late.test"]).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), content);
}
