//! Draft lifecycle and publish transition tests
//!
//! Run with: cargo test -p integration-tests --test lifecycle_tests

use integration_tests::{fixtures::*, test_context};
use quill_core::{DomainError, Snowflake};
use quill_service::services::error::ServiceError;
use quill_service::{DraftService, PublishService};

fn sid(s: &str) -> Snowflake {
    s.parse().expect("valid snowflake string")
}

// ============================================================================
// Autosave Sequencing
// ============================================================================

#[tokio::test]
async fn test_autosave_version_advances_by_one_per_save() {
    let stack = test_context();
    let drafts = DraftService::new(&stack.ctx);
    let author = Snowflake::new(10);

    let draft = drafts
        .create_draft(author, draft_request("Hello", "first"))
        .await
        .unwrap();
    assert_eq!(draft.autosave_version, 1);

    let id = sid(&draft.id);
    for n in 2..=10 {
        let ack = drafts
            .autosave(id, author, draft_request("Hello", &format!("body v{n}")))
            .await
            .unwrap();
        assert_eq!(ack.autosave_version, n);
    }

    let stored = drafts.get_draft(id, author).await.unwrap();
    assert_eq!(stored.autosave_version, 10);
    assert_eq!(stored.content, "body v10");
}

#[tokio::test]
async fn test_autosave_replaces_full_field_set() {
    let stack = test_context();
    let drafts = DraftService::new(&stack.ctx);
    let author = Snowflake::new(10);

    let mut req = draft_request("Hello", "body");
    req.subtitle = Some("a subtitle".to_string());
    req.tags = vec!["rust".to_string()];
    let draft = drafts.create_draft(author, req).await.unwrap();
    let id = sid(&draft.id);

    // A later save without subtitle or tags clears them.
    drafts
        .autosave(id, author, draft_request("Hello", "body v2"))
        .await
        .unwrap();

    let stored = drafts.get_draft(id, author).await.unwrap();
    assert_eq!(stored.subtitle, None);
    assert!(stored.tags.is_empty());
    assert_eq!(stored.content, "body v2");
}

#[tokio::test]
async fn test_autosave_requires_ownership() {
    let stack = test_context();
    let drafts = DraftService::new(&stack.ctx);

    let draft = drafts
        .create_draft(Snowflake::new(10), draft_request("Hello", "body"))
        .await
        .unwrap();

    let err = drafts
        .autosave(sid(&draft.id), Snowflake::new(99), draft_request("Stolen", "body"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::NotArticleAuthor)
    ));
}

#[tokio::test]
async fn test_autosave_rejected_after_publish() {
    let stack = test_context();
    let drafts = DraftService::new(&stack.ctx);
    let publisher = PublishService::new(&stack.ctx);
    let author = Snowflake::new(10);

    let draft = drafts
        .create_draft(author, draft_request("Hello", "body"))
        .await
        .unwrap();
    let id = sid(&draft.id);

    publisher.publish(id, author).await.unwrap();

    let err = drafts
        .autosave(id, author, draft_request("Hello", "late save"))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Domain(DomainError::NotADraft)));

    // The published content is untouched.
    let stored = stack.store.article(id.into_inner()).unwrap();
    assert_eq!(stored.content, "body");
}

// ============================================================================
// Publish Transition
// ============================================================================

#[tokio::test]
async fn test_publish_assigns_slug_excerpt_and_reading_time() {
    let stack = test_context();
    let drafts = DraftService::new(&stack.ctx);
    let publisher = PublishService::new(&stack.ctx);
    let author = Snowflake::new(10);

    let draft = drafts
        .create_draft(author, draft_request("Hello World", &content_of_words(50)))
        .await
        .unwrap();

    let published = publisher.publish(sid(&draft.id), author).await.unwrap();

    assert_eq!(published.status, "published");
    assert_eq!(published.slug.as_deref(), Some("hello-world"));
    assert_eq!(published.reading_time_minutes, 1);
    assert!(published.excerpt.is_some());
    assert!(published.published_at.is_some());
}

#[tokio::test]
async fn test_publish_dedupes_slug_per_author() {
    let stack = test_context();
    let drafts = DraftService::new(&stack.ctx);
    let publisher = PublishService::new(&stack.ctx);
    let author = Snowflake::new(10);

    let first = drafts
        .create_draft(author, draft_request("Hello World", "body one"))
        .await
        .unwrap();
    publisher.publish(sid(&first.id), author).await.unwrap();

    let second = drafts
        .create_draft(author, draft_request("Hello World", "body two"))
        .await
        .unwrap();
    let published = publisher.publish(sid(&second.id), author).await.unwrap();

    assert_eq!(published.slug.as_deref(), Some("hello-world-2"));

    // A different author is free to use the plain slug.
    let other_author = Snowflake::new(11);
    let third = drafts
        .create_draft(other_author, draft_request("Hello World", "body three"))
        .await
        .unwrap();
    let published = publisher.publish(sid(&third.id), other_author).await.unwrap();
    assert_eq!(published.slug.as_deref(), Some("hello-world"));
}

#[tokio::test]
async fn test_publish_requires_title_and_content() {
    let stack = test_context();
    let drafts = DraftService::new(&stack.ctx);
    let publisher = PublishService::new(&stack.ctx);
    let author = Snowflake::new(10);

    let untitled = drafts
        .create_draft(author, draft_request("   ", "body"))
        .await
        .unwrap();
    let err = publisher.publish(sid(&untitled.id), author).await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::TitleRequired)
    ));

    let empty = drafts
        .create_draft(author, draft_request("Hello", "  "))
        .await
        .unwrap();
    let err = publisher.publish(sid(&empty.id), author).await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::ContentRequired)
    ));
}

#[tokio::test]
async fn test_second_publish_fails() {
    let stack = test_context();
    let drafts = DraftService::new(&stack.ctx);
    let publisher = PublishService::new(&stack.ctx);
    let author = Snowflake::new(10);

    let draft = drafts
        .create_draft(author, draft_request("Hello", "body"))
        .await
        .unwrap();
    let id = sid(&draft.id);

    publisher.publish(id, author).await.unwrap();
    let err = publisher.publish(id, author).await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::AlreadyPublished)
    ));
}

#[tokio::test]
async fn test_concurrent_publish_has_one_winner() {
    let stack = test_context();
    let drafts = DraftService::new(&stack.ctx);
    let author = Snowflake::new(10);

    let draft = drafts
        .create_draft(author, draft_request("Hello", "body"))
        .await
        .unwrap();
    let id = sid(&draft.id);

    let a = PublishService::new(&stack.ctx);
    let b = PublishService::new(&stack.ctx);
    let (ra, rb) = tokio::join!(a.publish(id, author), b.publish(id, author));

    let winners = [&ra, &rb].iter().filter(|r| r.is_ok()).count();
    assert_eq!(winners, 1);

    let stored = stack.store.article(id.into_inner()).unwrap();
    assert!(stored.slug.is_some());
}

#[tokio::test]
async fn test_racing_same_title_publishes_get_distinct_slugs() {
    let stack = test_context();
    let drafts = DraftService::new(&stack.ctx);
    let author = Snowflake::new(10);

    let first = drafts
        .create_draft(author, draft_request("Hello World", "body one"))
        .await
        .unwrap();
    let second = drafts
        .create_draft(author, draft_request("Hello World", "body two"))
        .await
        .unwrap();

    let a = PublishService::new(&stack.ctx);
    let b = PublishService::new(&stack.ctx);
    let (ra, rb) = tokio::join!(
        a.publish(sid(&first.id), author),
        b.publish(sid(&second.id), author)
    );

    // Both win; the slug collision is resolved by retrying with the next
    // suffix, never surfaced to the caller.
    let ra = ra.unwrap();
    let rb = rb.unwrap();
    let mut slugs = [ra.slug.unwrap(), rb.slug.unwrap()];
    slugs.sort();
    assert_eq!(slugs, ["hello-world".to_string(), "hello-world-2".to_string()]);
}

// ============================================================================
// Administrative Transitions
// ============================================================================

#[tokio::test]
async fn test_unlist_and_archive() {
    let stack = test_context();
    let drafts = DraftService::new(&stack.ctx);
    let publisher = PublishService::new(&stack.ctx);
    let author = Snowflake::new(10);

    let draft = drafts
        .create_draft(author, draft_request("Hello", "body"))
        .await
        .unwrap();
    let id = sid(&draft.id);
    publisher.publish(id, author).await.unwrap();

    let unlisted = publisher.unlist(id, author).await.unwrap();
    assert_eq!(unlisted.status, "unlisted");

    let archived = publisher.archive(id, author).await.unwrap();
    assert_eq!(archived.status, "archived");

    // Archived is terminal.
    let err = publisher.unlist(id, author).await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::InvalidTransition { .. })
    ));
}

#[tokio::test]
async fn test_draft_cannot_be_unlisted() {
    let stack = test_context();
    let drafts = DraftService::new(&stack.ctx);
    let publisher = PublishService::new(&stack.ctx);
    let author = Snowflake::new(10);

    let draft = drafts
        .create_draft(author, draft_request("Hello", "body"))
        .await
        .unwrap();

    let err = publisher.unlist(sid(&draft.id), author).await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::InvalidTransition { .. })
    ));
}
