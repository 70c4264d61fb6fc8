//! Integration tests for the shortcut expansion flow
//!
//! These tests run the full cycle: detector match, lookup through the
//! channel resolver service, re-validated application of the template to a
//! buffer field.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::collections::HashMap;

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use snipflow_application::expansion::{ExpansionEngine, ExpansionOutcome, ShortcutDetector, expand};
use snipflow_application::ports::{EditableField, TemplateRepository};
use snipflow_infrastructure::{
    BufferField, ChannelTemplateResolver, FileTemplateRepository, InMemoryTemplateRepository,
    ResolverService,
};
use snipflow_domain::{FieldId, FieldKind, Template};

fn followup_template() -> Template {
    Template::new("Follow up", "followup", "Hi {name}, following up.").unwrap()
}

fn spawn_resolver(repository: InMemoryTemplateRepository) -> ChannelTemplateResolver {
    let (service, resolver) = ResolverService::new(repository, 8);
    tokio::spawn(service.run());
    resolver
}

#[tokio::test]
async fn test_followup_scenario_inserts_body() {
    let repository = InMemoryTemplateRepository::seeded(vec![followup_template()]).unwrap();
    let mut engine = ExpansionEngine::new(spawn_resolver(repository));

    let mut field = BufferField::new(FieldId::new(1), FieldKind::ContentEditable);
    field.type_text("Hi /followup");

    let outcome = engine.handle_input(&mut field, &HashMap::new()).await;

    assert_eq!(outcome, ExpansionOutcome::Applied);
    assert_eq!(field.text(), "Hi Hi {name}, following up.");
    assert_eq!(field.caret(), field.text().len());
    assert_eq!(field.notifications(), 1);
}

#[tokio::test]
async fn test_unknown_shortcut_leaves_field_as_typed() {
    let repository = InMemoryTemplateRepository::seeded(vec![followup_template()]).unwrap();
    let mut engine = ExpansionEngine::new(spawn_resolver(repository));

    let mut field = BufferField::new(FieldId::new(1), FieldKind::MultilineText);
    field.type_text("try /doesnotexist");

    let outcome = engine.handle_input(&mut field, &HashMap::new()).await;

    assert_eq!(outcome, ExpansionOutcome::NotFound);
    assert_eq!(field.text(), "try /doesnotexist");
    assert_eq!(field.notifications(), 0);
}

#[tokio::test]
async fn test_race_with_continued_typing_drops_expansion() {
    // Detection happens, then the user types "2" before the lookup
    // response arrives; the stale span must not be rewritten.
    let repository = InMemoryTemplateRepository::seeded(vec![followup_template()]).unwrap();

    let mut detector = ShortcutDetector::new();
    let mut field = BufferField::new(FieldId::new(1), FieldKind::ContentEditable);
    field.type_text("Hi /followup");

    let matched = detector.on_input(&field).expect("token should match");
    field.type_text("2");

    let template = repository
        .find_by_shortcut(&matched.shortcut)
        .await
        .unwrap();
    let outcome = expand(&mut field, &matched, template.as_ref(), &HashMap::new());
    detector.complete(field.id());

    assert_eq!(outcome, ExpansionOutcome::Stale);
    assert_eq!(field.text(), "Hi /followup2");
    assert_eq!(field.notifications(), 0);
}

#[tokio::test]
async fn test_mid_document_caret_expands_and_preserves_tail() {
    // The user moved the caret back past existing text before typing the
    // shortcut; the tail after the caret survives the replacement.
    let repository = InMemoryTemplateRepository::seeded(vec![followup_template()]).unwrap();
    let mut engine = ExpansionEngine::new(spawn_resolver(repository));

    let mut field = BufferField::new(FieldId::new(1), FieldKind::ContentEditable);
    field.type_text("Hi  and more");
    field.set_text("Hi  and more".to_string(), 3);
    field.type_text("/followup");
    assert_eq!(field.caret(), 12);

    let outcome = engine.handle_input(&mut field, &HashMap::new()).await;

    assert_eq!(outcome, ExpansionOutcome::Applied);
    assert_eq!(field.text(), "Hi Hi {name}, following up. and more");
    assert_eq!(field.caret(), 3 + "Hi {name}, following up.".len());
    assert_eq!(field.notifications(), 1);
}

#[tokio::test]
async fn test_supplied_values_substituted_into_body() {
    let repository = InMemoryTemplateRepository::seeded(vec![followup_template()]).unwrap();
    let mut engine = ExpansionEngine::new(spawn_resolver(repository));

    let mut field = BufferField::new(FieldId::new(1), FieldKind::ContentEditable);
    field.type_text("/followup");

    let mut values = HashMap::new();
    values.insert("name".to_string(), "Ada".to_string());

    let outcome = engine.handle_input(&mut field, &values).await;

    assert_eq!(outcome, ExpansionOutcome::Applied);
    assert_eq!(field.text(), "Hi Ada, following up.");
}

#[tokio::test]
async fn test_ineligible_field_never_expands() {
    let repository = InMemoryTemplateRepository::seeded(vec![followup_template()]).unwrap();
    let mut engine = ExpansionEngine::new(spawn_resolver(repository));

    let mut field = BufferField::new(FieldId::new(1), FieldKind::Other);
    field.type_text("Hi /followup");

    let outcome = engine.handle_input(&mut field, &HashMap::new()).await;

    assert_eq!(outcome, ExpansionOutcome::NoMatch);
    assert_eq!(field.text(), "Hi /followup");
}

#[tokio::test]
async fn test_expansion_against_file_backed_store() {
    let dir = tempdir().expect("temp dir");
    let repository = FileTemplateRepository::new(dir.path());
    repository.add(followup_template()).await.unwrap();

    let (service, resolver) = ResolverService::new(repository, 8);
    tokio::spawn(service.run());

    let mut engine = ExpansionEngine::new(resolver);
    let mut field = BufferField::new(FieldId::new(1), FieldKind::TextboxRole);
    field.type_text("Hi /followup");

    let outcome = engine.handle_input(&mut field, &HashMap::new()).await;

    assert_eq!(outcome, ExpansionOutcome::Applied);
    assert_eq!(field.text(), "Hi Hi {name}, following up.");
}

#[tokio::test]
async fn test_independent_fields_expand_independently() {
    let repository = InMemoryTemplateRepository::seeded(vec![followup_template()]).unwrap();
    let mut engine = ExpansionEngine::new(spawn_resolver(repository));

    let mut first = BufferField::new(FieldId::new(1), FieldKind::ContentEditable);
    let mut second = BufferField::new(FieldId::new(2), FieldKind::ContentEditable);
    first.type_text("/followup");
    second.type_text("/followup");

    assert_eq!(
        engine.handle_input(&mut first, &HashMap::new()).await,
        ExpansionOutcome::Applied
    );
    assert_eq!(
        engine.handle_input(&mut second, &HashMap::new()).await,
        ExpansionOutcome::Applied
    );
}
