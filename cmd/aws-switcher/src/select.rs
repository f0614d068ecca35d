use dialoguer::{theme::ColorfulTheme, Select};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("profile selection failed: {0}")]
    Aborted(String),
}

/// Picks one profile out of a list.
pub trait Selector {
    fn choose(&self, profiles: &[String]) -> Result<String, Error>;
}

/// Blocking single-choice prompt on the controlling terminal.
#[derive(Debug, Clone)]
pub struct Prompt {
    pub label: String,
}

impl Default for Prompt {
    fn default() -> Self {
        Self {
            label: "Select Profile".to_owned(),
        }
    }
}

impl Selector for Prompt {
    fn choose(&self, profiles: &[String]) -> Result<String, Error> {
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(&self.label)
            .items(profiles)
            .default(0)
            .interact_opt()
            .map_err(|e| Error::Aborted(e.to_string()))?
            .ok_or_else(|| Error::Aborted("cancelled".to_owned()))?;
        Ok(profiles[selection].clone())
    }
}

/// Answers with a fixed name, or cancels when it has none.
#[derive(Debug, Clone, Default)]
pub struct Scripted(pub Option<String>);

impl Selector for Scripted {
    fn choose(&self, _profiles: &[String]) -> Result<String, Error> {
        self.0
            .clone()
            .ok_or_else(|| Error::Aborted("cancelled".to_owned()))
    }
}
