use crate::descriptor::Descriptor;
use crate::host::Host;
use std::io::{self, Write};

/// What to do with a descriptor when starting, stopping or restarting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    Stop,
    Restart,
}

impl Action {
    /// Applies the action and reports the outcome. Failures are reported, not
    /// returned; the only error is failing to write the report.
    pub fn apply(self, host: &dyn Host, descriptor: &Descriptor, out: &mut impl Write) -> io::Result<()> {
        match self {
            Action::Start => {
                start(host, descriptor, out)?;
            }
            Action::Stop => {
                stop(host, descriptor, out)?;
            }
            Action::Restart => {
                // load is attempted even when unload fails
                if !stop(host, descriptor, out)? {
                    log::debug!("Loading {} after failed unload", descriptor.name);
                }
                start(host, descriptor, out)?;
            }
        }
        Ok(())
    }

    pub fn progress(self) -> &'static str {
        match self {
            Action::Start => "Starting",
            Action::Stop => "Stopping",
            Action::Restart => "Restarting",
        }
    }
}

/// Loads the descriptor. Returns whether launchctl accepted it.
pub fn start(host: &dyn Host, descriptor: &Descriptor, out: &mut impl Write) -> io::Result<bool> {
    match host.load(&descriptor.path) {
        Ok(()) => {
            writeln!(out, "started {}", descriptor.name)?;
            Ok(true)
        }
        Err(e) => {
            log::warn!("load {} failed: {}", descriptor.path.display(), e);
            writeln!(out, "failed to start {}", descriptor.name)?;
            Ok(false)
        }
    }
}

/// Unloads the descriptor. Returns whether launchctl accepted it.
pub fn stop(host: &dyn Host, descriptor: &Descriptor, out: &mut impl Write) -> io::Result<bool> {
    match host.unload(&descriptor.path) {
        Ok(()) => {
            writeln!(out, "stopped {}", descriptor.name)?;
            Ok(true)
        }
        Err(e) => {
            log::warn!("unload {} failed: {}", descriptor.path.display(), e);
            writeln!(out, "failed to stop {}", descriptor.name)?;
            Ok(false)
        }
    }
}
