/// Command used to enumerate interfaces and their bound addresses.
pub const IP_COMMAND: &str = "ip";

/// Arguments producing machine-readable address listings.
pub const IP_COMMAND_ARGS: &[&str] = &["-json", "addr", "show"];
