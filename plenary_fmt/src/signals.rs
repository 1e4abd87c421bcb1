#[cfg(unix)]
extern "C" fn exit_on_interrupt(_signal: nix::libc::c_int) {
    // Whatever already reached stdout is complete lines; drop the rest.
    unsafe { nix::libc::_exit(0) }
}

/// Makes Ctrl-C end the process with status 0 instead of 130.
#[cfg(unix)]
pub fn exit_cleanly_on_interrupt() -> std::io::Result<()> {
    use nix::sys::signal::{SaFlags, SigAction, SigHandler, SigSet, Signal, sigaction};

    let action = SigAction::new(
        SigHandler::Handler(exit_on_interrupt),
        SaFlags::empty(),
        SigSet::empty(),
    );
    // SAFETY: the handler only calls `_exit`, which is async-signal-safe.
    unsafe { sigaction(Signal::SIGINT, &action) }
        .map(|_| ())
        .map_err(std::io::Error::from)
}

#[cfg(not(unix))]
pub fn exit_cleanly_on_interrupt() -> std::io::Result<()> {
    Ok(())
}
