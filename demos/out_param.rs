//! Drives a C-style out-parameter API through the acceptor protocol.
//!
//! `acquire_devnull` stands in for the common C convention: the new handle
//! is written through a pointer and success is signalled separately. The
//! acceptor adopts whatever the call wrote, or preserves the wrapper's
//! previous handle when the call fails without writing.

#[cfg(unix)]
fn acquire_devnull(out_fd: *mut std::os::fd::RawFd) -> bool {
    let fd = unsafe { libc::open(b"/dev/null\0".as_ptr().cast(), libc::O_WRONLY) };
    if fd < 0 {
        return false;
    }
    unsafe { *out_fd = fd };
    true
}

#[cfg(unix)]
fn failing_acquire(_out_fd: *mut std::os::fd::RawFd) -> bool {
    // Fails before writing anything through the out-parameter.
    false
}

#[cfg(unix)]
fn main() {
    use grip::os::FdHolder;

    let mut holder = FdHolder::empty();
    println!("before: valid={}", holder.is_valid());

    if acquire_devnull(holder.acceptor().as_mut_ptr()) {
        println!("adopted: fd={} valid={}", holder.get(), holder.is_valid());
    }

    let kept = holder.get();
    if !failing_acquire(holder.acceptor().as_mut_ptr()) {
        println!(
            "failed call preserved the handle: fd={} (was {kept})",
            holder.get()
        );
    }

    // A successful second call replaces the first descriptor, closing it.
    if acquire_devnull(holder.acceptor().as_mut_ptr()) {
        println!("replaced: fd={} (old fd closed)", holder.get());
    }
}

#[cfg(not(unix))]
fn main() {
    println!("This demo needs a Unix platform.");
}
