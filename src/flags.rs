use error::Error;

// Called through this name, the first positional argument repeats the
// security tag and is dropped.
const LEGACY_NAME: &'static str = "ubuntu-core-launcher";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Args {
    // The security tag that the application is intended to run with.
    security_tag: Option<String>,
    // The executable that should be invoked.
    executable: Option<String>,
    is_version_query: bool,
    is_classic_confinement: bool,
    consumed: usize,
}

impl Args {
    pub fn is_version_query(&self) -> bool { self.is_version_query }
    pub fn is_classic_confinement(&self) -> bool { self.is_classic_confinement }

    pub fn security_tag(&self) -> Option<&str> {
        self.security_tag.as_ref().map(|s| s.as_str())
    }

    pub fn executable(&self) -> Option<&str> {
        self.executable.as_ref().map(|s| s.as_str())
    }

    pub fn consumed(&self) -> usize { self.consumed }

    pub fn remaining(&self, argv: &[String]) -> Vec<String> {
        let mut rest = Vec::with_capacity(argv.len().saturating_sub(self.consumed));
        if let Some(prog) = argv.first() {
            rest.push(prog.clone());
        }
        if self.consumed + 1 < argv.len() {
            rest.extend_from_slice(&argv[self.consumed + 1..]);
        }
        rest
    }
}

// Panics on an empty slot: the caller forgot to check the parse result.
pub fn expect_args<'a>(slot: Option<&'a Args>) -> &'a Args {
    match slot {
        Some(args) => args,
        None => panic!("cannot obtain values from NULL argument parser"),
    }
}

pub fn release(slot: &mut Option<Args>) {
    slot.take();
}

fn is_legacy_invocation(prog: &str) -> bool {
    let basename = match prog.rfind('/') {
        Some(pos) => &prog[pos + 1..],
        None => prog,
    };
    basename == LEGACY_NAME
}

fn usage(msg: String) -> Error {
    Error::Usage(msg)
}

pub fn parse(argv: &[String]) -> Result<Args, Error> {
    if argv.is_empty() {
        return Err(Error::InvalidInput(
            "cannot parse arguments, argc is zero".to_string()));
    }

    let mut args = Args::default();
    let mut ignore_first_tag = is_legacy_invocation(&argv[0]);

    let mut i = 1;
    while i < argv.len() {
        let arg = &argv[i];
        if arg.starts_with('-') {
            if arg == "--version" {
                args.is_version_query = true;
                break;
            } else if arg == "--classic" {
                args.is_classic_confinement = true;
            } else {
                return Err(usage(format!(
                    "unrecognized command line option: {}", arg)));
            }
        } else if args.security_tag.is_none() {
            if ignore_first_tag {
                ignore_first_tag = false;
            } else {
                args.security_tag = Some(arg.clone());
            }
        } else {
            args.executable = Some(arg.clone());
            break;
        }
        i += 1;
    }

    if !args.is_version_query {
        if args.security_tag.is_none() {
            return Err(usage(
                "application or hook security tag was not provided".to_string()));
        }
        if args.executable.is_none() {
            return Err(usage("executable name was not provided".to_string()));
        }
    }

    // A successful scan always stops on --version or on the executable.
    args.consumed = i;
    Ok(args)
}

// On success only the program name and the forwarded arguments remain.
pub fn parse_and_shift(argv: Option<&mut Vec<String>>) -> Result<Args, Error> {
    let argv = match argv {
        Some(argv) => argv,
        None => return Err(Error::InvalidInput(
            "cannot parse arguments, argc or argv are NULL".to_string())),
    };

    let args = parse(argv)?;
    argv.drain(1..args.consumed + 1);
    Ok(args)
}

#[cfg(test)]
fn argv(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_tag_and_executable() {
    let mut v = argv(&["/usr/lib/confine", "snap.app.cmd", "/bin/app"]);
    let args = parse_and_shift(Some(&mut v)).unwrap();
    assert_eq!(Some("snap.app.cmd"), args.security_tag());
    assert_eq!(Some("/bin/app"), args.executable());
    assert!(!args.is_version_query());
    assert!(!args.is_classic_confinement());
    assert_eq!(2, args.consumed());
    assert_eq!(argv(&["/usr/lib/confine"]), v);
}

#[test]
fn test_classic() {
    let mut v = argv(&["confine", "--classic", "snap.app.cmd", "/bin/app"]);
    let args = parse_and_shift(Some(&mut v)).unwrap();
    assert!(args.is_classic_confinement());
    assert_eq!(Some("snap.app.cmd"), args.security_tag());
    assert_eq!(Some("/bin/app"), args.executable());
    assert_eq!(argv(&["confine"]), v);
}

#[test]
fn test_classic_between_positionals() {
    let args = parse(&argv(&["confine", "snap.app.cmd", "--classic", "/bin/app"]))
        .unwrap();
    assert!(args.is_classic_confinement());
    assert_eq!(Some("/bin/app"), args.executable());
    assert_eq!(3, args.consumed());
}

#[test]
fn test_version() {
    let mut v = argv(&["confine", "--version"]);
    let args = parse_and_shift(Some(&mut v)).unwrap();
    assert!(args.is_version_query());
    assert_eq!(None, args.security_tag());
    assert_eq!(None, args.executable());
    assert_eq!(argv(&["confine"]), v);
}

#[test]
fn test_version_stops_scanning() {
    let mut v = argv(&["confine", "--classic", "--version", "--bogus", "tag", "exe"]);
    let args = parse_and_shift(Some(&mut v)).unwrap();
    assert!(args.is_version_query());
    assert!(args.is_classic_confinement());
    assert_eq!(None, args.security_tag());
    assert_eq!(argv(&["confine", "--bogus", "tag", "exe"]), v);
}

#[test]
fn test_version_leaves_trailing_tokens() {
    let mut v = argv(&["confine", "--version", "tag", "exe"]);
    let args = parse_and_shift(Some(&mut v)).unwrap();
    assert!(args.is_version_query());
    assert_eq!(None, args.executable());
    assert_eq!(argv(&["confine", "tag", "exe"]), v);
}

#[test]
fn test_legacy_invocation() {
    let mut v = argv(&["/usr/bin/ubuntu-core-launcher",
                       "snap.app.cmd", "snap.app.cmd", "/bin/app", "-x"]);
    let args = parse_and_shift(Some(&mut v)).unwrap();
    assert_eq!(Some("snap.app.cmd"), args.security_tag());
    assert_eq!(Some("/bin/app"), args.executable());
    assert_eq!(3, args.consumed());
    assert_eq!(argv(&["/usr/bin/ubuntu-core-launcher", "-x"]), v);
}

#[test]
fn test_legacy_invocation_without_dir() {
    let args = parse(&argv(&["ubuntu-core-launcher", "dup", "tag", "exe"])).unwrap();
    assert_eq!(Some("tag"), args.security_tag());
    assert_eq!(Some("exe"), args.executable());
}

#[test]
fn test_legacy_name_must_match_exactly() {
    let args = parse(&argv(&["/usr/bin/ubuntu-core-launcher2", "tag", "exe"])).unwrap();
    assert_eq!(Some("tag"), args.security_tag());

    let args = parse(&argv(&["ubuntu-core-launcher/confine", "tag", "exe"])).unwrap();
    assert_eq!(Some("tag"), args.security_tag());
}

#[test]
fn test_legacy_missing_executable() {
    let err = parse(&argv(&["ubuntu-core-launcher", "dup", "tag"])).unwrap_err();
    assert_eq!(Error::Usage("executable name was not provided".to_string()), err);
}

#[test]
fn test_unknown_option() {
    let mut v = argv(&["confine", "--bogus"]);
    let orig = v.clone();
    let err = parse_and_shift(Some(&mut v)).unwrap_err();
    assert_eq!(Error::Usage(
        "unrecognized command line option: --bogus".to_string()), err);
    assert_eq!(orig, v);
}

#[test]
fn test_single_dash_is_an_option() {
    let err = parse(&argv(&["confine", "tag", "-"])).unwrap_err();
    assert_eq!("unrecognized command line option: -", err.message());
}

#[test]
fn test_missing_tag() {
    let mut v = argv(&["confine"]);
    let err = parse_and_shift(Some(&mut v)).unwrap_err();
    assert!(err.is_usage());
    assert_eq!("application or hook security tag was not provided", err.message());
    assert_eq!(argv(&["confine"]), v);
}

#[test]
fn test_missing_executable() {
    let mut v = argv(&["confine", "--classic", "tag"]);
    let err = parse_and_shift(Some(&mut v)).unwrap_err();
    assert_eq!(Error::Usage("executable name was not provided".to_string()), err);
    assert_eq!(argv(&["confine", "--classic", "tag"]), v);
}

#[test]
fn test_invalid_input() {
    let err = parse(&[]).unwrap_err();
    assert_eq!(Error::InvalidInput(
        "cannot parse arguments, argc is zero".to_string()), err);

    let err = parse_and_shift(None).unwrap_err();
    assert_eq!(Error::InvalidInput(
        "cannot parse arguments, argc or argv are NULL".to_string()), err);
    assert_eq!(0, err.code());

    let mut v: Vec<String> = vec!();
    assert!(parse_and_shift(Some(&mut v)).is_err());
    assert!(v.is_empty());
}

#[test]
fn test_extra_positionals_are_forwarded() {
    let v = argv(&["confine", "tag", "exe", "extra1", "--extra2"]);
    let args = parse(&v).unwrap();
    assert_eq!(Some("exe"), args.executable());
    assert_eq!(argv(&["confine", "extra1", "--extra2"]), args.remaining(&v));

    let mut shifted = v.clone();
    parse_and_shift(Some(&mut shifted)).unwrap();
    assert_eq!(args.remaining(&v), shifted);
}

#[test]
fn test_empty_string_is_positional() {
    let args = parse(&argv(&["confine", "", "exe"])).unwrap();
    assert_eq!(Some(""), args.security_tag());
}

#[test]
fn test_release() {
    let mut slot = Some(parse(&argv(&["confine", "tag", "exe"])).unwrap());
    release(&mut slot);
    assert!(slot.is_none());
    release(&mut slot);
    assert!(slot.is_none());
}

#[test]
fn test_expect_args() {
    let args = parse(&argv(&["confine", "--version"])).unwrap();
    assert!(expect_args(Some(&args)).is_version_query());
}

#[test]
#[should_panic(expected = "NULL argument parser")]
fn test_expect_args_on_missing_result() {
    expect_args(None);
}
