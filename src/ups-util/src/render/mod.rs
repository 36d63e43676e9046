//! Turns a [`Partition`] into provisioning statements.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use crate::partition::{EnvironmentMap, Partition};

/// Labels of the emitted services.
#[derive(Clone, Debug)]
pub struct ServiceNaming {
    pub shared: String,
    pub prefix: String,
}

impl ServiceNaming {
    pub fn for_app(&self, app: &str) -> String {
        format!("{}{}", self.prefix, app)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `cf create-user-provided-service` shell commands
    #[default]
    Cf,
    /// A single JSON document listing every service
    Json,
}

/// One user-provided service to create.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ServiceDefinition<'a> {
    pub name: String,
    pub credentials: &'a EnvironmentMap,
}

#[derive(Serialize)]
struct ServiceDocument<'a> {
    services: &'a [ServiceDefinition<'a>],
}

/// Services to create, shared first, then applications in ascending name order.
/// Empty maps produce no service.
pub fn service_definitions<'a>(
    partition: &'a Partition,
    naming: &ServiceNaming,
) -> Vec<ServiceDefinition<'a>> {
    let shared = Some(partition.shared())
        .filter(|env| !env.is_empty())
        .map(|env| ServiceDefinition {
            name: naming.shared.clone(),
            credentials: env,
        });

    let per_app = partition
        .residuals()
        .filter(|(_, env)| !env.is_empty())
        .map(|(app, env)| ServiceDefinition {
            name: naming.for_app(app),
            credentials: env,
        });

    shared.into_iter().chain(per_app).collect()
}

/// Renders every statement up front so nothing is printed if rendering fails.
pub fn render(services: &[ServiceDefinition<'_>], format: OutputFormat) -> Result<Vec<String>> {
    match format {
        OutputFormat::Cf => services.iter().map(cf_create_statement).collect(),
        OutputFormat::Json => {
            let document = serde_json::to_string_pretty(&ServiceDocument { services })
                .context("Failed to serialize services")?;
            Ok(vec![document])
        }
    }
}

fn cf_create_statement(service: &ServiceDefinition<'_>) -> Result<String> {
    let payload = indented_json(service.credentials)
        .with_context(|| format!("Failed to serialize parameters of {}", service.name))?;
    Ok(format!(
        "cf create-user-provided-service {} -p @<(cat <<EOF\n{}\nEOF\n)",
        service.name, payload
    ))
}

/// JSON with sorted keys and a four-space indent.
fn indented_json(env: &EnvironmentMap) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    env.serialize(&mut serializer)?;
    Ok(String::from_utf8(buf)?)
}
