use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use uuid::Uuid;

use crate::application::dtos::item_dto::CreateFolderDto;
use crate::application::dtos::share_dto::CreateShareDto;
use crate::application::ports::outbound::BlobStorage;
use crate::application::services::access_control::AccessControl;
use crate::application::services::activity_service::ActivityService;
use crate::application::services::attribute_service::AttributeService;
use crate::application::services::hierarchy_service::HierarchyService;
use crate::application::services::lifecycle_service::LifecycleService;
use crate::application::services::share_service::ShareService;
use crate::common::errors::{DomainError, ErrorKind, Result};
use crate::domain::entities::comment::Comment;
use crate::domain::entities::share::SharePermission;
use crate::domain::repositories::comment_repository::CommentRepository;
use crate::domain::repositories::item_repository::ItemRepository;
use crate::infrastructure::repositories::{
    MemoryActivityRepository, MemoryCommentRepository, MemoryItemRepository, MemoryShareRepository,
};
use crate::infrastructure::services::{DirectoryAccountResolver, MemoryBlobStore};

// A comment store whose purge cascade always fails, for exercising the
// partial-failure path of empty_trash
struct FailingCommentRepository;

#[async_trait]
impl CommentRepository for FailingCommentRepository {
    async fn append(&self, comment: Comment) -> Result<Comment> {
        Ok(comment)
    }

    async fn list_for_file(&self, _file_id: Uuid) -> Result<Vec<Comment>> {
        Ok(vec![])
    }

    async fn remove_for_file(&self, file_id: Uuid) -> Result<()> {
        Err(DomainError::internal_error(
            "Comment",
            format!("Comment store unavailable for {}", file_id),
        ))
    }
}

struct Fixture {
    items: Arc<MemoryItemRepository>,
    blobs: Arc<MemoryBlobStore>,
    directory: Arc<DirectoryAccountResolver>,
    hierarchy: HierarchyService,
    lifecycle: LifecycleService,
    attributes: AttributeService,
    sharing: ShareService,
}

impl Fixture {
    fn new() -> Self {
        Self::with_comments(Arc::new(MemoryCommentRepository::new()))
    }

    fn with_comments(comments: Arc<dyn CommentRepository>) -> Self {
        let items = Arc::new(MemoryItemRepository::new());
        let shares = Arc::new(MemoryShareRepository::new());
        let blobs = Arc::new(MemoryBlobStore::new());
        let directory = Arc::new(DirectoryAccountResolver::new());
        let access = Arc::new(AccessControl::new(shares.clone()));
        let activity = Arc::new(ActivityService::new(
            Arc::new(MemoryActivityRepository::new()),
            20,
        ));

        let hierarchy = HierarchyService::new(
            items.clone(),
            blobs.clone(),
            access.clone(),
            activity.clone(),
        );
        let lifecycle = LifecycleService::new(
            items.clone(),
            shares.clone(),
            comments,
            blobs.clone(),
            access.clone(),
            activity.clone(),
        );
        let attributes = AttributeService::new(items.clone(), access.clone(), activity.clone());
        let sharing = ShareService::new(
            items.clone(),
            shares,
            directory.clone(),
            access,
            activity,
        );

        Self {
            items,
            blobs,
            directory,
            hierarchy,
            lifecycle,
            attributes,
            sharing,
        }
    }

    async fn make_folder(&self, caller: Uuid, name: &str, parent: Option<Uuid>) -> Uuid {
        self.hierarchy
            .create_folder(
                caller,
                CreateFolderDto {
                    name: name.to_string(),
                    parent_id: parent,
                },
            )
            .await
            .unwrap()
            .id
    }

    async fn make_file(&self, caller: Uuid, name: &str, parent: Option<Uuid>) -> Uuid {
        self.hierarchy
            .upload_file(
                caller,
                name.to_string(),
                parent,
                None,
                Bytes::from_static(b"file content"),
            )
            .await
            .unwrap()
            .id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn trash_hides_and_restore_brings_back() {
        let fx = Fixture::new();
        let owner = Uuid::new_v4();

        let docs = fx.make_folder(owner, "Docs", None).await;
        let note = fx.make_file(owner, "note.txt", Some(docs)).await;
        fx.attributes.toggle_star(owner, note).await.unwrap();

        let trashed = fx.lifecycle.trash(owner, note).await.unwrap();
        assert!(trashed.trashed);

        // Gone from the folder listing, present in the trash
        let listing = fx.hierarchy.list_children(owner, Some(docs), false).await.unwrap();
        assert!(listing.is_empty());
        let in_trash = fx.items.list_trashed(owner).await.unwrap();
        assert_eq!(in_trash.len(), 1);

        // Restore preserves every attribute, including the star and parent
        let restored = fx.lifecycle.restore(owner, note).await.unwrap();
        assert!(!restored.trashed);
        assert!(restored.starred);
        assert_eq!(restored.name, "note.txt");
        assert_eq!(restored.parent_id, Some(docs));

        // Restoring an active item is an error, not a no-op
        let err = fx.lifecycle.restore(owner, note).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotTrashed);
    }

    #[tokio::test]
    async fn breadcrumb_resolves_through_nested_folders() {
        let fx = Fixture::new();
        let owner = Uuid::new_v4();

        let work = fx.make_folder(owner, "Work", None).await;
        let projects = fx.make_folder(owner, "Projects", Some(work)).await;
        let notes = fx.make_file(owner, "Notes.txt", Some(projects)).await;

        let path = fx.hierarchy.resolve_path(owner, notes).await.unwrap();
        let names: Vec<&str> = path.iter().map(|segment| segment.name.as_str()).collect();
        assert_eq!(names, vec!["Work", "Projects"]);
    }

    #[tokio::test]
    async fn purge_removes_record_and_blob_for_good() {
        let fx = Fixture::new();
        let owner = Uuid::new_v4();

        let report = fx.make_file(owner, "report.pdf", None).await;
        fx.lifecycle.trash(owner, report).await.unwrap();
        fx.lifecycle.purge(owner, report).await.unwrap();

        let err = fx.items.get(report).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        let err = fx.blobs.get(report).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);

        // Purging twice reports the missing record
        let err = fx.lifecycle.purge(owner, report).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn empty_trash_continues_past_a_failing_cascade() {
        let fx = Fixture::with_comments(Arc::new(FailingCommentRepository));
        let owner = Uuid::new_v4();

        let folder = fx.make_folder(owner, "Old", None).await;
        let file = fx.make_file(owner, "old.txt", None).await;
        fx.lifecycle.trash(owner, folder).await.unwrap();
        fx.lifecycle.trash(owner, file).await.unwrap();

        let report = fx.lifecycle.empty_trash(owner).await.unwrap();

        // The folder has no comment cascade and purges; the file's
        // cascade fails before its row is touched
        assert_eq!(report.purged, vec![folder]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].id, file);
        assert_eq!(report.failed[0].name, "old.txt");
        assert!(!report.is_clean());

        // The failed item stays in trash for a retry
        let remaining = fx.items.list_trashed(owner).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id(), file);

        // A later run with a healthy comment store would find it again;
        // here the empty trash of another account is simply a no-op
        let other = fx.lifecycle.empty_trash(Uuid::new_v4()).await.unwrap();
        assert!(other.purged.is_empty() && other.failed.is_empty());
    }

    #[tokio::test]
    async fn star_toggle_is_an_involution() {
        let fx = Fixture::new();
        let owner = Uuid::new_v4();

        let file = fx.make_file(owner, "pin.txt", None).await;
        let starred = fx.attributes.toggle_star(owner, file).await.unwrap();
        assert!(starred.starred);
        let unstarred = fx.attributes.toggle_star(owner, file).await.unwrap();
        assert!(!unstarred.starred);
    }

    #[tokio::test]
    async fn share_then_revoke_round_trip() {
        let fx = Fixture::new();
        let owner = Uuid::new_v4();
        let jane = fx
            .directory
            .register("jane@example.com".to_string(), "Jane".to_string())
            .await
            .unwrap();

        let budget = fx.make_file(owner, "Budget.xlsx", None).await;
        fx.sharing
            .share(
                owner,
                CreateShareDto {
                    item_id: budget,
                    email: "jane@example.com".to_string(),
                    permission: SharePermission::Viewer,
                },
            )
            .await
            .unwrap();

        let shared = fx.sharing.list_shared_with_me(jane.id).await.unwrap();
        assert_eq!(shared.len(), 1);
        assert_eq!(shared[0].name, "Budget.xlsx");

        // A viewer reads but cannot rename
        let err = fx
            .attributes
            .rename(jane.id, budget, "Mine.xlsx".to_string())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::AccessDenied);

        fx.sharing.revoke(owner, budget, jane.id).await.unwrap();
        let shared = fx.sharing.list_shared_with_me(jane.id).await.unwrap();
        assert!(shared.is_empty());
    }

    #[tokio::test]
    async fn editors_cannot_trash_or_share() {
        let fx = Fixture::new();
        let owner = Uuid::new_v4();
        let editor = fx
            .directory
            .register("ed@example.com".to_string(), "Ed".to_string())
            .await
            .unwrap();

        let plan = fx.make_file(owner, "plan.md", None).await;
        fx.sharing
            .share(
                owner,
                CreateShareDto {
                    item_id: plan,
                    email: "ed@example.com".to_string(),
                    permission: SharePermission::Editor,
                },
            )
            .await
            .unwrap();

        // Editing is allowed
        fx.attributes
            .rename(editor.id, plan, "plan-v2.md".to_string())
            .await
            .unwrap();

        // Lifecycle and sharing stay owner-only
        let err = fx.lifecycle.trash(editor.id, plan).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::AccessDenied);
        let err = fx
            .sharing
            .share(
                editor.id,
                CreateShareDto {
                    item_id: plan,
                    email: "ed@example.com".to_string(),
                    permission: SharePermission::Editor,
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::AccessDenied);
    }

    #[tokio::test]
    async fn sharing_with_an_unknown_email_is_rejected() {
        let fx = Fixture::new();
        let owner = Uuid::new_v4();

        let file = fx.make_file(owner, "doc.txt", None).await;
        let err = fx
            .sharing
            .share(
                owner,
                CreateShareDto {
                    item_id: file,
                    email: "nobody@example.com".to_string(),
                    permission: SharePermission::Viewer,
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnknownGrantee);
    }

    #[tokio::test]
    async fn download_stamps_last_opened() {
        let fx = Fixture::new();
        let owner = Uuid::new_v4();

        let file = fx.make_file(owner, "read-me.txt", None).await;
        let (dto, content) = fx.hierarchy.open_file(owner, file).await.unwrap();
        assert_eq!(content, Bytes::from_static(b"file content"));
        assert!(dto.last_opened.is_some());

        // Folders have no content
        let folder = fx.make_folder(owner, "Docs", None).await;
        let err = fx.hierarchy.open_file(owner, folder).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnsupportedTarget);
    }
}
