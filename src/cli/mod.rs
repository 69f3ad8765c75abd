//! CLI module for the sign-up form
//!
//! Provides subcommands that stand in for the form UI:
//! - `register`: fill the form, submit it and wait for the outcome
//! - `validate`: check the form locally without submitting

pub mod register;
pub mod validate;

use clap::{Args, Parser, Subcommand};

use crate::config::AppConfig;
use crate::domain::{FieldName, SubmissionController};
use crate::infrastructure::logging;

/// Sign-up form - validate and submit a user registration
#[derive(Parser)]
#[command(name = "signup-form")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Submit the form to the registration endpoint
    Register(register::RegisterArgs),

    /// Validate the form without submitting it
    Validate(validate::ValidateArgs),
}

/// Values typed into the four form fields. Omitted fields stay empty.
#[derive(Args, Clone, Debug, Default)]
pub struct FormArgs {
    #[arg(long, default_value = "")]
    pub username: String,

    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, default_value = "")]
    pub password: String,

    #[arg(long, default_value = "")]
    pub password_repeat: String,
}

impl FormArgs {
    pub fn values(&self) -> [(FieldName, &str); 4] {
        [
            (FieldName::Username, self.username.as_str()),
            (FieldName::Email, self.email.as_str()),
            (FieldName::Password, self.password.as_str()),
            (FieldName::PasswordRepeat, self.password_repeat.as_str()),
        ]
    }

    /// Type every value into the controller's form
    pub fn fill(&self, controller: &mut SubmissionController) {
        for (name, value) in self.values() {
            controller.set_field(name, value);
        }
    }
}

fn init_logging(config: &AppConfig) {
    logging::init_logging(&logging::LoggingConfig {
        level: config.logging.level.clone(),
        format: config.logging.format.clone(),
    });
}
