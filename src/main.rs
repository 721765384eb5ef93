#[macro_use]
extern crate confine_launcher;

use confine_launcher::config::Config;
use confine_launcher::flags;
use confine_launcher::launcher;
use confine_launcher::libc_utils::die;
use confine_launcher::log;

fn collect_args() -> Vec<String> {
    let mut args = vec!();
    for arg in std::env::args_os() {
        match arg.into_string() {
            Ok(arg) => args.push(arg),
            Err(arg) => {
                log_error!("argument is not valid UTF-8: {:?}", arg);
                std::process::exit(1);
            }
        }
    }
    args
}

fn main() {
    match Config::from_env() {
        Ok(config) => log::set_debug(config.debug),
        Err(e) => log_warn!("{}, debug output stays disabled", e),
    }

    let mut argv = collect_args();
    let prog = argv.first().cloned().unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());

    let args = match flags::parse_and_shift(Some(&mut argv)) {
        Ok(args) => args,
        Err(e) => {
            if e.is_usage() {
                eprintln!("Usage: {} [--classic] <security-tag> <executable>\n", prog);
            }
            log_error!("{}", e);
            std::process::exit(1);
        }
    };

    if args.is_version_query() {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        return;
    }

    // Both are present whenever this is not a version query.
    let security_tag = args.security_tag().unwrap_or_default();
    let executable = args.executable().unwrap_or_default();

    log_debug!("security tag: {}", security_tag);
    log_debug!("executable: {}", executable);
    log_debug!("confinement: {}",
               if args.is_classic_confinement() { "classic" } else { "strict" });

    let exec_argv = launcher::build_exec_argv(executable, &argv);
    log_debug!("forwarded arguments: {:?}", &exec_argv[1..]);

    let err = launcher::exec(executable, &exec_argv);
    die(&format!("cannot exec {}: {}", executable, err));
}
