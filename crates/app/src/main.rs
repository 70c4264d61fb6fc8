//! Snipflow - demo entry point
//!
//! Wires the expansion engine to a repository-backed resolver service and
//! runs one expansion cycle against an in-process field. With
//! `SNIPFLOW_DATA_DIR` set, templates are persisted under that directory;
//! otherwise an in-memory store seeded with demo templates is used.

use std::collections::HashMap;
use std::path::Path;

use snipflow_application::expansion::ExpansionEngine;
use snipflow_application::ports::{EditableField, TemplateRepository};
use snipflow_domain::{DomainResult, FieldId, FieldKind, Template};
use snipflow_infrastructure::{
    BufferField, ChannelTemplateResolver, FileTemplateRepository, InMemoryTemplateRepository,
    ResolverService,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const LOOKUP_QUEUE_CAPACITY: usize = 16;

fn demo_templates() -> DomainResult<Vec<Template>> {
    let followup = Template::new("Follow up", "followup", "Hi {name}, following up on {topic}.")?;

    let mut intro = Template::new(
        "Introduction",
        "intro",
        "Hello {name},\n\nI'm reaching out about {topic}.",
    )?;
    intro.set_subject(Some("Introduction: {topic}".to_string()));

    Ok(vec![followup, intro])
}

async fn file_backed_resolver(
    data_dir: &Path,
) -> Result<ChannelTemplateResolver, Box<dyn std::error::Error>> {
    let repository = FileTemplateRepository::new(data_dir);

    if repository.get_all().await?.is_empty() {
        for template in demo_templates()? {
            repository.add(template).await?;
        }
        tracing::info!(path = %data_dir.display(), "seeded template store");
    }

    let (service, resolver) = ResolverService::new(repository, LOOKUP_QUEUE_CAPACITY);
    tokio::spawn(service.run());
    Ok(resolver)
}

fn in_memory_resolver() -> Result<ChannelTemplateResolver, Box<dyn std::error::Error>> {
    let repository = InMemoryTemplateRepository::seeded(demo_templates()?)?;
    let (service, resolver) = ResolverService::new(repository, LOOKUP_QUEUE_CAPACITY);
    tokio::spawn(service.run());
    Ok(resolver)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("starting Snipflow v{}", env!("CARGO_PKG_VERSION"));

    let resolver = match std::env::var("SNIPFLOW_DATA_DIR") {
        Ok(dir) => file_backed_resolver(Path::new(&dir)).await?,
        Err(_) => in_memory_resolver()?,
    };

    let mut engine = ExpansionEngine::new(resolver);
    let mut field = BufferField::new(FieldId::new(1), FieldKind::ContentEditable);

    field.type_text("Hi /followup");
    let outcome = engine.handle_input(&mut field, &HashMap::new()).await;
    tracing::info!(?outcome, text = %field.text(), "expansion cycle finished");

    let mut values = HashMap::new();
    values.insert("name".to_string(), "Ada".to_string());
    values.insert("topic".to_string(), "the demo".to_string());

    let mut second = BufferField::new(FieldId::new(2), FieldKind::TextboxRole);
    second.type_text("/intro");
    let outcome = engine.handle_input(&mut second, &values).await;
    tracing::info!(?outcome, text = %second.text(), "expansion cycle finished");

    Ok(())
}
