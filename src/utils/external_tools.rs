use std::process::{Command, Stdio};

/// Whether `tool` can be spawned from the search path. `probe_arg` should be a
/// cheap flag such as `-h` or `--version`.
pub fn is_tool_available(tool: &str, probe_arg: &str) -> bool {
    Command::new(tool)
        .arg(probe_arg)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_tool_is_unavailable() {
        assert!(!is_tool_available("t3ss-no-such-tool-on-path", "-h"));
    }
}
