use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;
use std::process::Command;

fn launcher() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_confine-launcher"));
    cmd.env_remove("CONFINE_LAUNCHER_DEBUG");
    cmd
}

#[test]
fn test_version() {
    let out = launcher().arg("--version").output().unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(format!("confine-launcher {}\n", env!("CARGO_PKG_VERSION")), stdout);
}

#[test]
fn test_unknown_option() {
    let out = launcher().arg("--bogus").output().unwrap();
    assert_eq!(Some(1), out.status.code());
    let stderr = String::from_utf8(out.stderr).unwrap();
    let usage = stderr.find("[--classic] <security-tag> <executable>\n\n").unwrap();
    let msg = stderr.find("unrecognized command line option: --bogus").unwrap();
    assert!(usage < msg);
}

#[test]
fn test_missing_tag() {
    let out = launcher().output().unwrap();
    assert_eq!(Some(1), out.status.code());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("application or hook security tag was not provided"));
}

#[test]
fn test_missing_executable() {
    let out = launcher().args(&["--classic", "snap.app.cmd"]).output().unwrap();
    assert_eq!(Some(1), out.status.code());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("executable name was not provided"));
}

#[test]
fn test_forwards_remaining_arguments() {
    let out = launcher()
        .args(&["snap.app.cmd", "/bin/echo", "hello", "--world"])
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!("hello --world\n", String::from_utf8(out.stdout).unwrap());
}

#[test]
fn test_exec_failure() {
    let out = launcher()
        .args(&["snap.app.cmd", "/nonexistent/confine-launcher-test"])
        .output()
        .unwrap();
    assert_eq!(Some(1), out.status.code());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains(
        "cannot exec /nonexistent/confine-launcher-test: No such file or directory"));
}

#[test]
fn test_invalid_debug_value_warns() {
    let out = launcher()
        .env("CONFINE_LAUNCHER_DEBUG", "maybe")
        .arg("--version")
        .output()
        .unwrap();
    assert!(out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("CONFINE_LAUNCHER_DEBUG"));
}

#[test]
fn test_non_utf8_argument() {
    let out = launcher()
        .arg(OsStr::from_bytes(b"snap.\xffapp"))
        .arg("/bin/true")
        .output()
        .unwrap();
    assert_eq!(Some(1), out.status.code());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("argument is not valid UTF-8"));
}
