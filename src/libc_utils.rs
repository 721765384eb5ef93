use errno;

use std;

pub fn errno() -> i32 {
    errno::errno().0
}

pub fn die(msg: &str) -> ! {
    log_error!("{}", msg);
    std::process::exit(1);
}

#[test]
fn test_errno() {
    errno::set_errno(errno::Errno(13));
    assert_eq!(13, errno());
}
