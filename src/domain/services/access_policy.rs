use uuid::Uuid;

use crate::domain::entities::item::Item;
use crate::domain::entities::share::{Share, SharePermission};

/// What a caller is allowed to do with one item, computed from ownership
/// and the item's share rows. Pure; callers fetch the inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessRole {
    Owner,
    Editor,
    Commenter,
    Viewer,
}

impl AccessRole {
    /// Read: listing, path resolution, download, comment listing
    pub fn allows_read(&self) -> bool {
        true
    }

    /// Comment on a file
    pub fn allows_comment(&self) -> bool {
        matches!(self, AccessRole::Owner | AccessRole::Editor | AccessRole::Commenter)
    }

    /// Rename, upload children into a shared folder
    pub fn allows_edit(&self) -> bool {
        matches!(self, AccessRole::Owner | AccessRole::Editor)
    }

    /// Trash, restore, purge, share, revoke, move, star
    pub fn allows_manage(&self) -> bool {
        matches!(self, AccessRole::Owner)
    }
}

/// Resolves the caller's role on an item. `shares` must be the share rows
/// of this item; rows for other items are ignored. Folder shares do not
/// cascade to descendants, so the caller passes exactly the rows of the
/// item being checked.
pub fn role_for(item: &Item, caller_id: Uuid, shares: &[Share]) -> Option<AccessRole> {
    if item.owner_id() == caller_id {
        return Some(AccessRole::Owner);
    }

    shares
        .iter()
        .filter(|share| share.item_id == item.id() && share.grantee_id == caller_id)
        .map(|share| match share.permission {
            SharePermission::Editor => AccessRole::Editor,
            SharePermission::Commenter => AccessRole::Commenter,
            SharePermission::Viewer => AccessRole::Viewer,
        })
        .next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::item::Item;
    use crate::domain::entities::share::Share;

    fn folder(owner: Uuid) -> Item {
        Item::new_folder("shared".to_string(), None, owner).unwrap()
    }

    #[test]
    fn owner_gets_full_role() {
        let owner = Uuid::new_v4();
        let item = folder(owner);
        let role = role_for(&item, owner, &[]).unwrap();
        assert!(role.allows_manage());
        assert!(role.allows_edit());
    }

    #[test]
    fn grantee_role_follows_permission() {
        let owner = Uuid::new_v4();
        let grantee = Uuid::new_v4();
        let item = folder(owner);
        let share = Share::new(item.id(), grantee, SharePermission::Commenter, owner);

        let role = role_for(&item, grantee, &[share]).unwrap();
        assert_eq!(role, AccessRole::Commenter);
        assert!(role.allows_comment());
        assert!(!role.allows_edit());
        assert!(!role.allows_manage());
    }

    #[test]
    fn stranger_has_no_role() {
        let item = folder(Uuid::new_v4());
        assert!(role_for(&item, Uuid::new_v4(), &[]).is_none());
    }

    #[test]
    fn shares_of_other_items_are_ignored() {
        let owner = Uuid::new_v4();
        let grantee = Uuid::new_v4();
        let item = folder(owner);
        let other = folder(owner);
        let share = Share::new(other.id(), grantee, SharePermission::Editor, owner);

        assert!(role_for(&item, grantee, &[share]).is_none());
    }
}
