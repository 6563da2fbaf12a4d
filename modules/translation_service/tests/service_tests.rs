//! Domain service tests against in-memory upstream and repository

mod common;

use common::{fast_options, MockProvider, MockRepo};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;
use translation_service::contract::*;
use translation_service::domain::{Service, ServiceOptions};

fn command(text: &str, source: &str, target: &str) -> TranslateCommand {
    TranslateCommand {
        input_text: text.to_string(),
        source_language: source.to_string(),
        target_language: target.to_string(),
        ip_address: "203.0.113.7".to_string(),
    }
}

fn service_with(
    provider: MockProvider,
    options: ServiceOptions,
) -> (Service, Arc<MockProvider>, Arc<MockRepo>) {
    let provider = Arc::new(provider);
    let repo = Arc::new(MockRepo::new());
    let service = Service::new(provider.clone(), repo.clone(), options);
    (service, provider, repo)
}

#[tokio::test]
async fn translates_each_word_and_stores_the_result() {
    let (service, provider, repo) = service_with(MockProvider::new(), fast_options());

    let translated = service
        .translate(command("Hello world", "en", "ru"))
        .await
        .unwrap();

    assert_eq!(translated, "Привет мир");
    assert_eq!(provider.word_calls.read().len(), 2);

    let stored = repo.stored();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].ip_address, "203.0.113.7");
    assert_eq!(stored[0].input_text, "Hello world");
    assert_eq!(stored[0].translated_text, "Привет мир");
}

#[tokio::test]
async fn word_order_is_preserved_when_translations_finish_out_of_order() {
    let (service, _, _) = service_with(
        MockProvider::new().with_word_delay(Duration::from_millis(5)),
        fast_options(),
    );

    let translated = service
        .translate(command("Soy un programador principiante", "es", "en"))
        .await
        .unwrap();

    assert_eq!(translated, "Am a programmer beginner");
}

#[tokio::test]
async fn consecutive_spaces_are_kept_and_not_sent_upstream() {
    let (service, provider, _) = service_with(MockProvider::new(), fast_options());

    let translated = service
        .translate(command("Hello  world", "en", "ru"))
        .await
        .unwrap();

    assert_eq!(translated, "Привет  мир");
    assert_eq!(*provider.word_calls.read(), vec!["Hello", "world"]);
}

#[tokio::test]
async fn concurrency_is_bounded() {
    let options = ServiceOptions {
        max_concurrency: 3,
        ..fast_options()
    };
    let (service, provider, _) = service_with(
        MockProvider::new().with_word_delay(Duration::from_millis(10)),
        options,
    );

    let text = (0..12).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ");
    let translated = service.translate(command(&text, "en", "ru")).await.unwrap();

    assert_eq!(translated, text.to_uppercase());
    let max = provider.max_in_flight.load(Ordering::SeqCst);
    assert!(max <= 3, "max in flight was {max}");
    assert!(max >= 2, "words were not translated concurrently");
}

#[tokio::test]
async fn unknown_source_language_is_reported_before_target() {
    let (service, provider, repo) = service_with(MockProvider::new(), fast_options());

    let err = service
        .translate(command("Hello", "xx", "yy"))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        TranslationError::LanguageNotFound {
            role: LanguageRole::Source,
            code: "xx".into()
        }
    );
    assert!(provider.word_calls.read().is_empty());
    assert!(repo.stored().is_empty());
}

#[tokio::test]
async fn unknown_target_language_is_rejected_without_retry() {
    let (service, provider, _) = service_with(MockProvider::new(), fast_options());

    let err = service
        .translate(command("Hello", "en", "yy"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        TranslationError::LanguageNotFound { role: LanguageRole::Target, .. }
    ));
    assert_eq!(provider.languages_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn language_codes_are_case_sensitive() {
    let (service, _, _) = service_with(MockProvider::new(), fast_options());

    let err = service.translate(command("Hello", "EN", "ru")).await.unwrap_err();
    assert!(matches!(err, TranslationError::LanguageNotFound { .. }));
}

#[tokio::test]
async fn blank_input_never_reaches_the_upstream() {
    let (service, provider, _) = service_with(MockProvider::new(), fast_options());

    let err = service.translate(command("   ", "en", "ru")).await.unwrap_err();
    assert!(matches!(err, TranslationError::Validation { .. }));

    let err = service.translate(command("Hello", "", "ru")).await.unwrap_err();
    assert!(matches!(err, TranslationError::Validation { .. }));

    assert_eq!(provider.languages_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn oversized_input_is_rejected() {
    let options = ServiceOptions {
        max_input_length: 5,
        ..fast_options()
    };
    let (service, _, _) = service_with(MockProvider::new(), options);

    let err = service
        .translate(command("Hello world", "en", "ru"))
        .await
        .unwrap_err();
    assert!(matches!(err, TranslationError::Validation { .. }));
}

#[tokio::test]
async fn transient_upstream_failures_are_retried() {
    let (service, provider, repo) = service_with(
        MockProvider::new().with_languages_failures(2),
        fast_options(),
    );

    let translated = service
        .translate(command("Hello world", "en", "ru"))
        .await
        .unwrap();

    assert_eq!(translated, "Привет мир");
    assert_eq!(provider.languages_calls.load(Ordering::SeqCst), 3);
    assert_eq!(repo.stored().len(), 1);
}

#[tokio::test]
async fn retries_are_exhausted_after_max_attempts() {
    let (service, provider, repo) = service_with(
        MockProvider::new().with_languages_failures(10),
        fast_options(),
    );

    let err = service
        .translate(command("Hello", "en", "ru"))
        .await
        .unwrap_err();

    assert!(matches!(err, TranslationError::UpstreamAccess { .. }));
    assert_eq!(provider.languages_calls.load(Ordering::SeqCst), 3);
    assert!(repo.stored().is_empty());
}

#[tokio::test]
async fn failing_word_fails_the_whole_translation() {
    let (service, _, repo) = service_with(
        MockProvider::new().with_failing_word("world"),
        fast_options(),
    );

    let err = service
        .translate(command("Hello world", "en", "ru"))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        TranslationError::UpstreamStatus {
            status: 403,
            message: "not subscribed".into()
        }
    );
    assert!(repo.stored().is_empty());
}

#[tokio::test]
async fn storage_failure_is_internal_error() {
    let provider = Arc::new(MockProvider::new());
    let repo = Arc::new(MockRepo::failing());
    let service = Service::new(provider, repo, fast_options());

    let err = service
        .translate(command("Hello", "en", "ru"))
        .await
        .unwrap_err();
    assert!(matches!(err, TranslationError::Internal { .. }));
}

#[tokio::test]
async fn supported_languages_are_sorted_by_code() {
    let (service, _, _) = service_with(MockProvider::new(), fast_options());

    let codes: Vec<String> = service
        .supported_languages()
        .await
        .unwrap()
        .into_iter()
        .map(|l| l.code)
        .collect();

    assert_eq!(codes, vec!["en", "es", "ru"]);
}

#[tokio::test]
async fn history_is_listed_newest_first() {
    let (service, _, _) = service_with(MockProvider::new(), fast_options());

    service.translate(command("Hello", "en", "ru")).await.unwrap();
    service.translate(command("world", "en", "ru")).await.unwrap();

    let (items, total) = service.list_translations(Page::default()).await.unwrap();
    assert_eq!(total, 2);
    assert_eq!(items[0].input_text, "world");
    assert_eq!(items[1].input_text, "Hello");

    let found = service.get_translation(items[1].id).await.unwrap();
    assert_eq!(found.translated_text, "Привет");

    let err = service.get_translation(999).await.unwrap_err();
    assert_eq!(
        err,
        TranslationError::NotFound {
            resource: "translation".into(),
            id: "999".into()
        }
    );
}

#[tokio::test]
async fn translation_runs_on_a_spawned_task() {
    let (service, _provider, repo) = service_with(MockProvider::new(), fast_options());
    let service = Arc::new(service);

    let handle = tokio::spawn({
        let service = service.clone();
        async move { service.translate(command("Soy un  programador", "es", "en")).await }
    });
    let translated = handle.await.unwrap().unwrap();

    assert_eq!(translated, "Am a  programmer");
    assert_eq!(repo.stored().len(), 1);
}
