use clap::{CommandFactory, Parser};

use crate::{
    config::{document, locator, Config, CredentialDocument},
    print::Print,
    profile::{self, Applied},
    select::{self, Prompt, Selector},
};

pub mod global;
pub mod version;

pub const HEADING_GLOBAL: &str = "Global Options";

pub const ABOUT: &str = "Interactive CLI tool to switch between AWS credential profiles.";

pub const LONG_ABOUT: &str = "

Updates the [default] profile in ~/.aws/credentials with credentials
from your selected profile.";

const EXAMPLES: &str = "\
Examples:
  aws-switcher              Run interactively
  aws-switcher --dry-run    Preview what would change
  aws-switcher --version    Show version";

#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "aws-switcher",
    about = ABOUT,
    long_about = ABOUT.to_string() + LONG_ABOUT,
    before_help = version::long(),
    after_help = EXAMPLES,
    disable_help_flag = true,
    disable_version_flag = true,
    styles = global::USAGE_STYLES,
)]
pub struct Root {
    /// Show this help message
    #[arg(long, short = 'h')]
    pub help: bool,

    /// Show version information
    #[arg(long, short = 'V')]
    pub version: bool,

    /// Preview changes without applying them
    #[arg(long)]
    pub dry_run: bool,

    /// Switch to this profile instead of prompting for one
    #[arg(long, value_name = "NAME")]
    pub profile: Option<String>,

    #[command(flatten)]
    pub global_args: global::Args,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Locator(#[from] locator::Error),
    #[error(transparent)]
    Document(#[from] document::Error),
    #[error(transparent)]
    Profile(#[from] profile::Error),
    #[error(transparent)]
    Select(#[from] select::Error),
    #[error(transparent)]
    Global(#[from] global::Error),
}

impl Root {
    pub fn config(&self) -> Result<Config, Error> {
        Ok(Config::new(self.dry_run, self.profile.clone())?)
    }

    /// `--help` or `--version`: output that never touches the credentials file.
    pub fn prints_info(&self) -> bool {
        self.help || self.version
    }

    pub fn run(&self) -> Result<(), Error> {
        if self.help {
            print!("{}", Self::command().render_long_help());
            return Ok(());
        }
        if self.version {
            println!("{}", version::long());
            return Ok(());
        }
        let config = self.config()?;
        switch(&config, &Prompt::default(), &Print::new(self.global_args.quiet))
    }
}

/// Loads the credentials file, asks which profile to activate and applies it.
pub fn switch(config: &Config, selector: &impl Selector, print: &Print) -> Result<(), Error> {
    let path = &config.credentials_file;
    let mut document = CredentialDocument::load(path)?;
    let profiles = profile::extract_profiles(&document)?;
    print.searchln(format!(
        "Found {} profile(s) in {}",
        profiles.len(),
        path.display()
    ));

    let chosen = match &config.profile {
        Some(name) if profiles.contains(name) => name.clone(),
        Some(name) => return Err(profile::Error::NotFound(name.clone()).into()),
        None => selector.choose(&profiles)?,
    };
    tracing::debug!("selected profile {chosen}");

    match profile::apply(&mut document, &chosen, config.dry_run, path)? {
        Applied::Preview(preview) => println!("\n{preview}"),
        Applied::Switched => println!("\n✓ Successfully switched to profile: {chosen}"),
    }
    Ok(())
}
