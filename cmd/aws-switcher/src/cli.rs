use clap::{CommandFactory, Parser};

use crate::{commands, print::Print, Root};

pub fn main() {
    let root = Root::try_parse().unwrap_or_else(|e| {
        let mut cmd = Root::command();
        e.format(&mut cmd).exit();
    });

    let printer = Print::new(root.global_args.quiet);

    // Set up the logger before anything touches the credentials file. Help and
    // version output must not depend on the log flags.
    if !root.prints_info() {
        if let Err(e) = root.global_args.init_logging() {
            printer.errorln(format!("error: {}", commands::Error::from(e)));
            std::process::exit(1);
        }
    }

    if let Err(e) = root.run() {
        printer.errorln(format!("error: {e}"));
        std::process::exit(1);
    }
}
