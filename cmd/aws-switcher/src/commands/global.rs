use clap::builder::styling::{AnsiColor, Effects, Styles};
use tracing_subscriber::{fmt, EnvFilter};

use super::HEADING_GLOBAL;

pub const USAGE_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
    .valid(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .invalid(AnsiColor::Yellow.on_default().effects(Effects::BOLD));

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{error}: {filter}")]
    LogFilter {
        filter: String,
        error: tracing_subscriber::filter::ParseError,
    },
    #[error(transparent)]
    Subscriber(#[from] tracing::subscriber::SetGlobalDefaultError),
}

#[derive(Debug, clap::Args, Clone, Default)]
#[group(skip)]
pub struct Args {
    /// Filter logs output. To turn on `aws_switcher::config=trace` or off `=off`. Can also use env var `RUST_LOG`.
    #[arg(long, short = 'f', help_heading = HEADING_GLOBAL)]
    pub filter_logs: Vec<String>,

    /// Do not write logs or status messages to stderr
    #[arg(long, short = 'q', help_heading = HEADING_GLOBAL)]
    pub quiet: bool,

    /// Log DEBUG events
    #[arg(long, short = 'v', help_heading = HEADING_GLOBAL)]
    pub verbose: bool,

    /// Log DEBUG and TRACE events
    #[arg(long, visible_alias = "vv", help_heading = HEADING_GLOBAL)]
    pub very_verbose: bool,
}

impl Args {
    pub fn log_level(&self) -> Option<tracing::Level> {
        if self.quiet {
            None
        } else if self.very_verbose {
            Some(tracing::Level::TRACE)
        } else if self.verbose {
            Some(tracing::Level::DEBUG)
        } else {
            Some(tracing::Level::INFO)
        }
    }

    /// Installs the stderr log subscriber. Does nothing with `--quiet`.
    pub fn init_logging(&self) -> Result<(), Error> {
        let Some(level) = self.log_level() else {
            return Ok(());
        };
        let mut e_filter = EnvFilter::from_default_env()
            .add_directive(parse_directive(&format!("aws_switcher={level}"))?);
        for filter in &self.filter_logs {
            e_filter = e_filter.add_directive(parse_directive(filter)?);
        }

        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(e_filter)
            .with_ansi(false)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        Ok(())
    }
}

fn parse_directive(filter: &str) -> Result<tracing_subscriber::filter::Directive, Error> {
    filter.parse().map_err(|error| Error::LogFilter {
        filter: filter.to_owned(),
        error,
    })
}
