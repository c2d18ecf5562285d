//! Local machine hostname lookup.

use std::ffi::OsString;
use std::io;

use tracing::warn;

/// Value reported when the OS hostname cannot be read.
pub const UNKNOWN_HOSTNAME: &str = "unknown";

/// Resolve the machine's network name. Not cached; every call hits the OS.
pub fn resolve_hostname() -> String {
    hostname_or_unknown(hostname::get())
}

fn hostname_or_unknown(lookup: io::Result<OsString>) -> String {
    match lookup {
        Ok(name) => match name.into_string() {
            Ok(name) => name,
            Err(raw) => {
                warn!(hostname = ?raw, "hostname is not valid UTF-8");
                UNKNOWN_HOSTNAME.to_string()
            }
        },
        Err(e) => {
            warn!(error = %e, "failed to resolve hostname");
            UNKNOWN_HOSTNAME.to_string()
        }
    }
}
