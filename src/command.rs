//! Command-string resolution.
//!
//! The daemon's command port speaks a line-oriented text protocol; the
//! forwarder's only job is to produce one such line from the positional
//! arguments.

/// Status query sent when no command was given on the command line.
pub const DEFAULT_COMMAND: &str = "autophone-status";

/// Join the positional arguments into the line sent to the daemon, falling
/// back to the status query when none were given.
pub fn resolve(args: &[String]) -> String {
    if args.is_empty() {
        DEFAULT_COMMAND.to_string()
    } else {
        args.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_no_args_yields_status_query() {
        assert_eq!(resolve(&[]), DEFAULT_COMMAND);
    }

    #[test]
    fn test_single_arg_passes_through() {
        assert_eq!(resolve(&args(&["restart"])), "restart");
    }

    #[test]
    fn test_args_joined_with_single_spaces_in_order() {
        assert_eq!(
            resolve(&args(&["run", "tests", "--device", "pixel-3"])),
            "run tests --device pixel-3"
        );
    }
}
