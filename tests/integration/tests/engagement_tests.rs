//! Engagement counter tests - claps, comments, bookmarks, follows
//!
//! Run with: cargo test -p integration-tests --test engagement_tests

use integration_tests::{fixtures::*, test_context};
use quill_core::{DomainError, Snowflake};
use quill_service::services::error::ServiceError;
use quill_service::{EngagementService, SocialService, UserService};
use quill_testkit::{seed_published_article, seed_user};

fn sid(s: &str) -> Snowflake {
    s.parse().expect("valid snowflake string")
}

// ============================================================================
// Claps
// ============================================================================

#[tokio::test]
async fn test_clap_accumulates_and_caps_at_fifty() {
    let stack = test_context();
    let engagement = EngagementService::new(&stack.ctx);
    seed_user(&stack.store, 10, "author");
    seed_published_article(&stack.store, 1, 10, "Hello", "hello");

    let reader = Snowflake::new(20);
    let article = Snowflake::new(1);

    let first = engagement.clap(reader, article, clap(30)).await.unwrap();
    assert_eq!(first.user_claps, 30);
    assert_eq!(first.applied, 30);

    // 30 + 30 caps at 50: only 20 land.
    let second = engagement.clap(reader, article, clap(30)).await.unwrap();
    assert_eq!(second.user_claps, 50);
    assert_eq!(second.applied, 20);
    assert_eq!(second.total_claps, 50);

    // At the cap further claps are successful no-ops.
    let third = engagement.clap(reader, article, clap(1)).await.unwrap();
    assert_eq!(third.applied, 0);
    assert_eq!(third.user_claps, 50);
}

#[tokio::test]
async fn test_clap_counter_equals_ledger_sum_across_users() {
    let stack = test_context();
    let engagement = EngagementService::new(&stack.ctx);
    seed_user(&stack.store, 10, "author");
    seed_published_article(&stack.store, 1, 10, "Hello", "hello");

    for (user, count) in [(20, 50), (21, 12), (22, 30), (23, 50)] {
        engagement
            .clap(Snowflake::new(user), Snowflake::new(1), clap(count))
            .await
            .unwrap();
    }

    let article = stack.store.article(1).unwrap();
    assert_eq!(article.claps_count, stack.store.clap_ledger_sum(1));
    assert_eq!(article.claps_count, 142);
    assert_eq!(stack.store.user(10).unwrap().total_claps_received, 142);
}

#[tokio::test]
async fn test_oversized_clap_is_capped_not_rejected() {
    let stack = test_context();
    let engagement = EngagementService::new(&stack.ctx);
    seed_user(&stack.store, 10, "author");
    seed_published_article(&stack.store, 1, 10, "Hello", "hello");

    let resp = engagement
        .clap(Snowflake::new(20), Snowflake::new(1), clap(120))
        .await
        .unwrap();
    assert_eq!(resp.user_claps, 50);
    assert_eq!(resp.applied, 50);
    assert_eq!(resp.total_claps, 50);
}

#[tokio::test]
async fn test_clap_on_draft_reads_as_missing() {
    let stack = test_context();
    let engagement = EngagementService::new(&stack.ctx);
    let drafts = quill_service::DraftService::new(&stack.ctx);

    let draft = drafts
        .create_draft(Snowflake::new(10), draft_request("Hello", "body"))
        .await
        .unwrap();

    let err = engagement
        .clap(Snowflake::new(20), sid(&draft.id), clap(5))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { .. }));
}

#[tokio::test]
async fn test_clap_below_minimum_rejected() {
    let stack = test_context();
    let engagement = EngagementService::new(&stack.ctx);
    seed_published_article(&stack.store, 1, 10, "Hello", "hello");

    let err = engagement
        .clap(Snowflake::new(20), Snowflake::new(1), clap(0))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::InvalidClapDelta)
    ));
}

// ============================================================================
// Comments
// ============================================================================

#[tokio::test]
async fn test_comment_and_reply_counters() {
    let stack = test_context();
    let engagement = EngagementService::new(&stack.ctx);
    seed_published_article(&stack.store, 1, 10, "Hello", "hello");

    let article = Snowflake::new(1);
    let top = engagement
        .add_comment(Snowflake::new(20), article, comment("Nice read"))
        .await
        .unwrap();

    engagement
        .add_comment(Snowflake::new(21), article, reply("Agreed", &top.id))
        .await
        .unwrap();
    engagement
        .add_comment(Snowflake::new(22), article, reply("Same", &top.id))
        .await
        .unwrap();

    let stored = stack.store.article(1).unwrap();
    assert_eq!(stored.comments_count, 3);

    let parent = stack.ctx.engagement_repo().find_comment(sid(&top.id)).await.unwrap().unwrap();
    assert_eq!(parent.replies_count, 2);
}

#[tokio::test]
async fn test_author_reply_is_flagged() {
    let stack = test_context();
    let engagement = EngagementService::new(&stack.ctx);
    seed_published_article(&stack.store, 1, 10, "Hello", "hello");

    let top = engagement
        .add_comment(Snowflake::new(20), Snowflake::new(1), comment("Question?"))
        .await
        .unwrap();
    assert!(!top.is_author_reply);

    let author_reply = engagement
        .add_comment(Snowflake::new(10), Snowflake::new(1), reply("Answer", &top.id))
        .await
        .unwrap();
    assert!(author_reply.is_author_reply);
}

#[tokio::test]
async fn test_reply_depth_limited_to_one() {
    let stack = test_context();
    let engagement = EngagementService::new(&stack.ctx);
    seed_published_article(&stack.store, 1, 10, "Hello", "hello");

    let top = engagement
        .add_comment(Snowflake::new(20), Snowflake::new(1), comment("Top"))
        .await
        .unwrap();
    let first_reply = engagement
        .add_comment(Snowflake::new(21), Snowflake::new(1), reply("Reply", &top.id))
        .await
        .unwrap();

    let err = engagement
        .add_comment(
            Snowflake::new(22),
            Snowflake::new(1),
            reply("Too deep", &first_reply.id),
        )
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::ReplyDepthExceeded)
    ));
}

#[tokio::test]
async fn test_reply_parent_must_match_article() {
    let stack = test_context();
    let engagement = EngagementService::new(&stack.ctx);
    seed_published_article(&stack.store, 1, 10, "Hello", "hello");
    seed_published_article(&stack.store, 2, 10, "Other", "other");

    let top = engagement
        .add_comment(Snowflake::new(20), Snowflake::new(1), comment("Top"))
        .await
        .unwrap();

    let err = engagement
        .add_comment(Snowflake::new(21), Snowflake::new(2), reply("Wrong", &top.id))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::ParentCommentMismatch)
    ));
}

#[tokio::test]
async fn test_delete_comment_cascades_to_replies() {
    let stack = test_context();
    let engagement = EngagementService::new(&stack.ctx);
    seed_published_article(&stack.store, 1, 10, "Hello", "hello");

    let commenter = Snowflake::new(20);
    let top = engagement
        .add_comment(commenter, Snowflake::new(1), comment("Top"))
        .await
        .unwrap();
    engagement
        .add_comment(Snowflake::new(21), Snowflake::new(1), reply("One", &top.id))
        .await
        .unwrap();
    engagement
        .add_comment(Snowflake::new(22), Snowflake::new(1), reply("Two", &top.id))
        .await
        .unwrap();
    assert_eq!(stack.store.article(1).unwrap().comments_count, 3);

    let removed = engagement.delete_comment(commenter, sid(&top.id)).await.unwrap();
    assert_eq!(removed, 3);
    assert_eq!(stack.store.article(1).unwrap().comments_count, 0);
    assert_eq!(stack.store.comment_count(), 0);
}

#[tokio::test]
async fn test_only_authors_can_delete_comments() {
    let stack = test_context();
    let engagement = EngagementService::new(&stack.ctx);
    seed_published_article(&stack.store, 1, 10, "Hello", "hello");

    let top = engagement
        .add_comment(Snowflake::new(20), Snowflake::new(1), comment("Top"))
        .await
        .unwrap();

    // A stranger cannot delete.
    let err = engagement
        .delete_comment(Snowflake::new(99), sid(&top.id))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Domain(DomainError::NotCommentAuthor)
    ));

    // The article's author can moderate their own page.
    let removed = engagement
        .delete_comment(Snowflake::new(10), sid(&top.id))
        .await
        .unwrap();
    assert_eq!(removed, 1);
}

// ============================================================================
// Bookmarks
// ============================================================================

#[tokio::test]
async fn test_bookmark_toggle_is_idempotent() {
    let stack = test_context();
    let engagement = EngagementService::new(&stack.ctx);
    seed_published_article(&stack.store, 1, 10, "Hello", "hello");

    let reader = Snowflake::new(20);
    let article = Snowflake::new(1);

    let first = engagement.bookmark(reader, article).await.unwrap();
    assert!(first.changed);
    let repeat = engagement.bookmark(reader, article).await.unwrap();
    assert!(!repeat.changed);
    assert_eq!(stack.store.article(1).unwrap().bookmarks_count, 1);

    let removed = engagement.unbookmark(reader, article).await.unwrap();
    assert!(removed.changed);
    let repeat = engagement.unbookmark(reader, article).await.unwrap();
    assert!(!repeat.changed);
    assert_eq!(stack.store.article(1).unwrap().bookmarks_count, 0);
}

// ============================================================================
// Views and Reads
// ============================================================================

#[tokio::test]
async fn test_views_and_reads_accumulate() {
    let stack = test_context();
    let engagement = EngagementService::new(&stack.ctx);
    seed_published_article(&stack.store, 1, 10, "Hello", "hello");

    for _ in 0..5 {
        engagement.record_view(Snowflake::new(1)).await.unwrap();
    }
    engagement.record_read(Snowflake::new(1)).await.unwrap();

    let article = stack.store.article(1).unwrap();
    assert_eq!(article.views_count, 5);
    assert_eq!(article.reads_count, 1);
}

// ============================================================================
// Follows
// ============================================================================

#[tokio::test]
async fn test_follow_moves_both_counters() {
    let stack = test_context();
    let social = SocialService::new(&stack.ctx);
    seed_user(&stack.store, 10, "author");
    seed_user(&stack.store, 20, "reader");

    let resp = social.follow(Snowflake::new(20), Snowflake::new(10)).await.unwrap();
    assert!(resp.following);
    assert_eq!(resp.followers_count, 1);
    assert_eq!(stack.store.user(20).unwrap().following_count, 1);

    // Repeat follow changes nothing.
    let resp = social.follow(Snowflake::new(20), Snowflake::new(10)).await.unwrap();
    assert_eq!(resp.followers_count, 1);

    let resp = social.unfollow(Snowflake::new(20), Snowflake::new(10)).await.unwrap();
    assert!(!resp.following);
    assert_eq!(resp.followers_count, 0);
    assert_eq!(stack.store.user(20).unwrap().following_count, 0);
}

#[tokio::test]
async fn test_self_follow_rejected() {
    let stack = test_context();
    let social = SocialService::new(&stack.ctx);
    seed_user(&stack.store, 10, "author");

    let err = social
        .follow(Snowflake::new(10), Snowflake::new(10))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Domain(DomainError::SelfFollow)));
}

// ============================================================================
// Users
// ============================================================================

#[tokio::test]
async fn test_create_user_and_update_profile() {
    let stack = test_context();
    let users = UserService::new(&stack.ctx);

    let created = users
        .create_user(quill_service::dto::requests::CreateUserRequest {
            username: "ada".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(created.username, "ada");
    assert_eq!(created.followers_count, 0);

    let updated = users
        .update_profile(
            sid(&created.id),
            quill_service::dto::requests::UpdateProfileRequest {
                display_name: Some("Ada Lovelace".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.display_name.as_deref(), Some("Ada Lovelace"));
}
