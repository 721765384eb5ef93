use libc;

use libc_utils::errno;

use std;
use std::ffi::CString;
use std::io;

// The executable takes the place of the launcher's own program name.
pub fn build_exec_argv(executable: &str, remaining: &[String]) -> Vec<String> {
    let mut argv = vec!(executable.to_string());
    if remaining.len() > 1 {
        argv.extend_from_slice(&remaining[1..]);
    }
    argv
}

fn to_cstrings(args: &[String]) -> io::Result<Vec<CString>> {
    args.iter()
        .map(|a| CString::new(a.as_str()).map_err(|_| io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("argument contains a NUL byte: {:?}", a))))
        .collect()
}

// Only returns on failure.
pub fn exec(executable: &str, argv: &[String]) -> io::Error {
    let path = match CString::new(executable) {
        Ok(path) => path,
        Err(_) => return io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("executable contains a NUL byte: {:?}", executable)),
    };
    let args = match to_cstrings(argv) {
        Ok(args) => args,
        Err(e) => return e,
    };

    let mut ptrs: Vec<*const libc::c_char> =
        args.iter().map(|a| a.as_ptr()).collect();
    ptrs.push(std::ptr::null());

    unsafe {
        libc::execv(path.as_ptr(), ptrs.as_ptr());
    }
    io::Error::from_raw_os_error(errno())
}

#[cfg(test)]
fn strings(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_build_exec_argv() {
    assert_eq!(strings(&["/bin/app", "-x", "y"]),
               build_exec_argv("/bin/app", &strings(&["confine", "-x", "y"])));
    assert_eq!(strings(&["/bin/app"]),
               build_exec_argv("/bin/app", &strings(&["confine"])));
    assert_eq!(strings(&["/bin/app"]), build_exec_argv("/bin/app", &[]));
}

#[test]
fn test_exec_rejects_nul() {
    let err = exec("/bin/a\0pp", &strings(&["app"]));
    assert_eq!(io::ErrorKind::InvalidInput, err.kind());
    assert_eq!(None, err.raw_os_error());
    assert!(err.to_string().contains("executable contains a NUL byte"));

    let err = exec("/bin/true", &strings(&["tr\0ue"]));
    assert_eq!(io::ErrorKind::InvalidInput, err.kind());
}

#[test]
fn test_exec_missing_file() {
    let err = exec("/nonexistent/confine-launcher-test",
                   &strings(&["/nonexistent/confine-launcher-test"]));
    assert_eq!(io::ErrorKind::NotFound, err.kind());
    assert_eq!(Some(libc::ENOENT), err.raw_os_error());
}
