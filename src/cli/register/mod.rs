//! Register command - fills the form, submits it once and reports the outcome

use std::sync::Arc;

use anyhow::bail;
use clap::Args;
use tracing::info;

use super::FormArgs;
use crate::config::AppConfig;
use crate::domain::signup::ACTIVATION_MESSAGE;
use crate::domain::{
    DomainError, RegistrationService, SubmissionController, SubmissionState, SubmitOutcome,
};
use crate::infrastructure::http_client::HttpClient;
use crate::infrastructure::registration::{HttpRegistrationService, InMemoryRegistrationService};

/// Arguments for the register command
#[derive(Args, Clone, Debug)]
pub struct RegisterArgs {
    #[command(flatten)]
    pub form: FormArgs,

    /// API base URL (overrides config)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Accept the registration in memory instead of calling the API
    #[arg(long)]
    pub dry_run: bool,

    /// Print the final form view as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the register command
pub async fn run(args: RegisterArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    super::init_logging(&config);

    let service = create_service(&args, &config)?;
    let mut controller = SubmissionController::with_policy(service, (&config.submission).into());
    args.form.fill(&mut controller);

    match controller.submit() {
        SubmitOutcome::Started => {}
        SubmitOutcome::InvalidForm => {
            for (field, error) in controller.form().validation_errors() {
                eprintln!("{}: {}", field.label(), error);
            }
            bail!("Sign-up form is invalid");
        }
        other => bail!("Submit was not accepted: {:?}", other),
    }

    info!("Waiting for registration to complete");
    let state = controller.settle().await.clone();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&controller.view())?);
    }

    match state {
        SubmissionState::Succeeded => {
            if !args.json {
                println!("{}", ACTIVATION_MESSAGE);
            }
            Ok(())
        }
        other => match controller.failure_reason() {
            Some(reason) => bail!("Registration failed: {}", reason),
            None => bail!("Registration did not complete (state: {})", other),
        },
    }
}

fn create_service(
    args: &RegisterArgs,
    config: &AppConfig,
) -> Result<Arc<dyn RegistrationService>, DomainError> {
    if args.dry_run {
        info!("Dry run: registration handled in memory");
        return Ok(Arc::new(InMemoryRegistrationService::new()));
    }

    let base_url = args
        .api_url
        .clone()
        .unwrap_or_else(|| config.api.base_url.clone());

    reqwest::Url::parse(&base_url)
        .map_err(|e| DomainError::configuration(format!("Invalid API URL '{}': {}", base_url, e)))?;

    let client = match config.api.timeout() {
        Some(timeout) => HttpClient::with_timeout(timeout)?,
        None => HttpClient::new(),
    };

    info!(%base_url, "Registering against API");
    Ok(Arc::new(HttpRegistrationService::new(client, base_url)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(api_url: Option<&str>, dry_run: bool) -> RegisterArgs {
        RegisterArgs {
            form: FormArgs::default(),
            api_url: api_url.map(str::to_string),
            dry_run,
            json: false,
        }
    }

    #[test]
    fn test_invalid_api_url_is_configuration_error() {
        let result = create_service(&args(Some("not a url"), false), &AppConfig::default());

        assert!(matches!(result, Err(DomainError::Configuration { .. })));
    }

    #[test]
    fn test_dry_run_skips_url_check() {
        assert!(create_service(&args(Some("not a url"), true), &AppConfig::default()).is_ok());
    }

    #[tokio::test]
    async fn test_dry_run_registers_in_memory() {
        let mut controller = SubmissionController::new(
            create_service(&args(None, true), &AppConfig::default()).unwrap(),
        );
        FormArgs {
            username: "user1".to_string(),
            email: "faraz@gmail.com".to_string(),
            password: "P4ssword".to_string(),
            password_repeat: "P4ssword".to_string(),
        }
        .fill(&mut controller);

        assert_eq!(controller.submit(), SubmitOutcome::Started);
        assert_eq!(controller.settle().await, &SubmissionState::Succeeded);
    }
}
