//! Opens the running executable through an `FdHolder` and prints the fd.

#[cfg(unix)]
fn main() {
    use std::env;
    use std::ffi::CString;

    use grip::os::FdHolder;

    let exe = env::args()
        .next()
        .unwrap_or_else(|| String::from("/proc/self/exe"));
    let path = CString::new(exe.clone()).expect("executable path contains a NUL byte");

    let fd = FdHolder::new(unsafe { libc::open(path.as_ptr(), libc::O_RDONLY) });
    if fd.is_valid() {
        println!("I opened myself: '{exe}' (fd={})", fd.get());
    } else {
        eprintln!("Failed to open myself: '{exe}'");
    }
    // `fd` drops here; the descriptor is closed exactly once.
}

#[cfg(not(unix))]
fn main() {
    println!("This demo needs a Unix platform.");
}
