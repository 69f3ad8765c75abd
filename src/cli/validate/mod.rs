//! Validate command - checks the form locally, never touches the network

use anyhow::bail;
use clap::Args;
use serde::Serialize;

use super::FormArgs;
use crate::config::AppConfig;
use crate::domain::{FieldName, FormModel};

/// Arguments for the validate command
#[derive(Args, Clone, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub form: FormArgs,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct FieldReport {
    field: FieldName,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct ValidationReport {
    valid: bool,
    fields: Vec<FieldReport>,
}

/// Run the validate command
pub async fn run(args: ValidateArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    super::init_logging(&config);

    let mut form = FormModel::new();
    for (name, value) in args.form.values() {
        form.set_field(name, value);
    }

    let report = build_report(&form);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for field in &report.fields {
            match &field.error {
                Some(error) => println!("{:<16} {}", field.field.label(), error),
                None => println!("{:<16} ok", field.field.label()),
            }
        }
    }

    if !report.valid {
        bail!("Sign-up form is invalid");
    }

    Ok(())
}

fn build_report(form: &FormModel) -> ValidationReport {
    let errors = form.validation_errors();

    let fields = FieldName::ALL
        .into_iter()
        .map(|name| {
            let error = errors
                .iter()
                .find(|(field, _)| *field == name)
                .map(|(_, e)| e.to_string());
            FieldReport {
                field: name,
                valid: error.is_none(),
                error,
            }
        })
        .collect();

    ValidationReport {
        valid: form.is_valid(),
        fields,
    }
}
