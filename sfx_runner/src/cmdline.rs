use std::path;

#[derive(Default, Debug, PartialEq)]
pub(super) struct Cmdline_Args {
    pub cfg_file: Option<Box<path::Path>>,
    pub list: bool,
    pub verbose: bool,
    pub sounds: Vec<String>,
}

macro_rules! opt_with_arg {
    ($opt: expr, $args: ident, $target: expr, $conv_fn: expr) => {{
        if let Some(opt) = $args.next() {
            $target = $conv_fn(opt);
            eprintln!("[ INFO ] Cmdline {}: {:?}", $opt, $target);
        } else {
            eprintln!("Expected an argument after {} flag.", $opt);
        }
    }};
}

pub(super) fn parse_cmdline_args<'a>(mut args: impl Iterator<Item = &'a String>) -> Cmdline_Args {
    // Consume program name
    args.next();

    let mut cmdline_args = Cmdline_Args::default();

    while let Some(arg) = args.next() {
        match arg as &str {
            "--cfg" => opt_with_arg!("--cfg", args, cmdline_args.cfg_file, |p: &String| {
                Some(path::PathBuf::from(p).into_boxed_path())
            }),
            "--list" => cmdline_args.list = true,
            "-v" | "--verbose" => cmdline_args.verbose = true,
            _ if arg.starts_with('-') => eprintln!("Unknown argument {}", arg),
            _ => cmdline_args.sounds.push(arg.clone()),
        }
    }

    cmdline_args
}

pub(super) fn print_usage() {
    eprintln!("Usage: sfx_runner [--cfg <file>] [--list] [--verbose] <sound name>...");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cmdline_Args {
        let args = args.iter().map(|s| String::from(*s)).collect::<Vec<_>>();
        parse_cmdline_args(args.iter())
    }

    #[test]
    fn sound_names_and_flags() {
        let args = parse(&["sfx_runner", "--verbose", "countdown", "tick", "--bogus"]);
        assert!(args.verbose);
        assert!(!args.list);
        assert_eq!(args.sounds, vec!["countdown", "tick"]);
        assert_eq!(args.cfg_file, None);
    }

    #[test]
    fn cfg_file_flag() {
        let args = parse(&["sfx_runner", "--cfg", "my/sounds.cfg", "--list"]);
        assert_eq!(
            args.cfg_file.as_deref(),
            Some(path::Path::new("my/sounds.cfg"))
        );
        assert!(args.list);
        assert!(args.sounds.is_empty());

        // Missing argument is ignored
        assert_eq!(parse(&["sfx_runner", "--cfg"]).cfg_file, None);
    }
}
