//! The user management workflow: an ordered list of users, a live search
//! filter and a modal create/edit form.
//!
//! ```text
//! Closed --begin_create--> Open { editing: None }
//! Closed --begin_edit----> Open { editing: Some(id) }
//! Open   --submit|cancel--> Closed
//! ```

use crate::{Result, User, UserDraft, UserId, err, seed_users};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    Closed,
    Open {
        /// `None` while creating.
        editing: Option<UserId>,
        draft: UserDraft,
    },
}

/// What a successful [`UserDirectory::submit`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submitted {
    Created(UserId),
    Updated(UserId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDirectory {
    users: Vec<User>,
    search: String,
    modal: Modal,
    next_id: u32,
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::seeded()
    }
}

impl UserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        let next_id = users.iter().map(|u| u.id.0).max().unwrap_or(0) + 1;
        Self {
            users,
            search: String::new(),
            modal: Modal::Closed,
            next_id,
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed_users())
    }

    /// All rows in insertion order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn search_text(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Rows whose name or email contains the search text, ignoring case.
    pub fn visible(&self) -> Vec<&User> {
        let needle = self.search.to_lowercase();
        self.users.iter().filter(|u| u.matches(&needle)).collect()
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn is_modal_open(&self) -> bool {
        matches!(self.modal, Modal::Open { .. })
    }

    /// Row being edited, `None` when creating or when the modal is closed.
    pub fn editing(&self) -> Option<UserId> {
        match &self.modal {
            Modal::Open { editing, .. } => *editing,
            Modal::Closed => None,
        }
    }

    pub fn draft(&self) -> Option<&UserDraft> {
        match &self.modal {
            Modal::Open { draft, .. } => Some(draft),
            Modal::Closed => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut UserDraft> {
        match &mut self.modal {
            Modal::Open { draft, .. } => Some(draft),
            Modal::Closed => None,
        }
    }

    pub fn begin_create(&mut self) {
        self.modal = Modal::Open {
            editing: None,
            draft: UserDraft::default(),
        };
    }

    pub fn begin_edit(&mut self, id: UserId) -> Result<()> {
        let user = self.get(id).ok_or_else(|| err!("no user with id {id}"))?;
        self.modal = Modal::Open {
            editing: Some(id),
            draft: UserDraft::from(user),
        };
        Ok(())
    }

    /// Apply the open draft.
    ///
    /// An invalid draft leaves both the list and the modal untouched. Once
    /// validation passes the modal is always closed.
    pub fn submit(&mut self) -> Result<Submitted> {
        let Modal::Open { editing, draft } = std::mem::take(&mut self.modal) else {
            return Err(err!("no user form is open"));
        };
        if let Err(err) = draft.validate() {
            self.modal = Modal::Open { editing, draft };
            return Err(err);
        }

        match editing {
            Some(id) => {
                let row = self
                    .users
                    .iter_mut()
                    .find(|u| u.id == id)
                    .ok_or_else(|| err!("user {id} was removed while being edited"))?;
                *row = draft.into_user(id);
                Ok(Submitted::Updated(id))
            }
            None => {
                let id = UserId(self.next_id);
                self.next_id += 1;
                self.users.push(draft.into_user(id));
                Ok(Submitted::Created(id))
            }
        }
    }

    /// Remove the row with `id`, returning it when present.
    pub fn delete(&mut self, id: UserId) -> Option<User> {
        let index = self.users.iter().position(|u| u.id == id)?;
        Some(self.users.remove(index))
    }

    pub fn cancel(&mut self) {
        self.modal = Modal::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Role, Status};

    fn ana() -> UserDraft {
        UserDraft {
            name: "Ana".into(),
            email: "ana@x.com".into(),
            role: Role::User,
            status: Status::Active,
        }
    }

    fn ids(users: &[User]) -> Vec<u32> {
        users.iter().map(|u| u.id.0).collect()
    }

    fn visible_ids(dir: &UserDirectory) -> Vec<u32> {
        dir.visible().iter().map(|u| u.id.0).collect()
    }

    #[test]
    fn starts_closed_with_seed_rows() {
        let dir = UserDirectory::seeded();
        assert_eq!(ids(dir.users()), vec![1, 2, 3]);
        assert_eq!(dir.modal(), &Modal::Closed);
        assert_eq!(dir.search_text(), "");
    }

    #[test]
    fn empty_search_shows_everything_in_order() {
        let dir = UserDirectory::seeded();
        assert_eq!(visible_ids(&dir), vec![1, 2, 3]);
    }

    #[test]
    fn search_is_case_insensitive_over_name_and_email() {
        let mut dir = UserDirectory::seeded();

        dir.set_search("IRWAN");
        assert_eq!(visible_ids(&dir), vec![2]);

        dir.set_search("Example.COM");
        assert_eq!(visible_ids(&dir), vec![1, 2, 3]);

        // "john" only appears in row 1's email
        dir.set_search("john");
        assert_eq!(visible_ids(&dir), vec![1]);

        dir.set_search("Hamb");
        assert_eq!(visible_ids(&dir), vec![3]);

        dir.set_search("nobody");
        assert!(dir.visible().is_empty());
    }

    #[test]
    fn search_matches_manual_filter_for_many_needles() {
        let mut dir = UserDirectory::seeded();
        for needle in ["", "a", "M", "@", "mike@", "budi", "HAMB", "xyz", " "] {
            dir.set_search(needle);
            let lower = needle.to_lowercase();
            let expected: Vec<u32> = dir
                .users()
                .iter()
                .filter(|u| {
                    u.name.to_lowercase().contains(&lower) || u.email.to_lowercase().contains(&lower)
                })
                .map(|u| u.id.0)
                .collect();
            assert_eq!(visible_ids(&dir), expected, "needle {needle:?}");
        }
    }

    #[test]
    fn search_does_not_mutate_rows() {
        let mut dir = UserDirectory::seeded();
        dir.set_search("irwan");
        assert_eq!(dir.users(), seed_users().as_slice());
    }

    #[test]
    fn create_appends_with_next_id() {
        let mut dir = UserDirectory::seeded();
        dir.begin_create();
        *dir.draft_mut().unwrap() = ana();

        assert_eq!(dir.submit().unwrap(), Submitted::Created(UserId(4)));
        assert!(!dir.is_modal_open());

        let users = dir.users();
        assert_eq!(users.len(), 4);
        assert_eq!(&users[..3], seed_users().as_slice());
        assert_eq!(users[3], ana().into_user(UserId(4)));
    }

    #[test]
    fn begin_create_resets_draft_and_clears_editing() {
        let mut dir = UserDirectory::seeded();
        dir.begin_edit(UserId(1)).unwrap();
        assert_eq!(dir.editing(), Some(UserId(1)));

        dir.begin_create();
        assert_eq!(dir.editing(), None);
        assert_eq!(dir.draft(), Some(&UserDraft::default()));

        dir.draft_mut().unwrap().name = "half typed".into();
        dir.begin_create();
        assert_eq!(dir.draft(), Some(&UserDraft::default()));
    }

    #[test]
    fn begin_edit_seeds_draft_from_row() {
        let mut dir = UserDirectory::seeded();
        dir.begin_edit(UserId(3)).unwrap();
        assert_eq!(dir.editing(), Some(UserId(3)));
        assert_eq!(dir.draft(), Some(&UserDraft::from(&seed_users()[2])));
    }

    #[test]
    fn begin_edit_unknown_row_keeps_modal_closed() {
        let mut dir = UserDirectory::seeded();
        assert!(dir.begin_edit(UserId(42)).is_err());
        assert!(!dir.is_modal_open());
    }

    #[test]
    fn edit_replaces_only_the_target_row() {
        let mut dir = UserDirectory::seeded();
        dir.begin_edit(UserId(2)).unwrap();
        dir.draft_mut().unwrap().status = Status::Inactive;

        assert_eq!(dir.submit().unwrap(), Submitted::Updated(UserId(2)));

        let seed = seed_users();
        let users = dir.users();
        assert_eq!(users[0], seed[0]);
        assert_eq!(users[2], seed[2]);
        assert_eq!(users[1].id, UserId(2));
        assert_eq!(users[1].status, Status::Inactive);
        assert_eq!(users[1].name, seed[1].name);
        assert!(!dir.is_modal_open());
    }

    #[test]
    fn delete_removes_row_and_keeps_order() {
        let mut dir = UserDirectory::seeded();
        let removed = dir.delete(UserId(2)).unwrap();
        assert_eq!(removed.name, "Irwan Budi");
        assert_eq!(ids(dir.users()), vec![1, 3]);
        assert!(dir.delete(UserId(2)).is_none());
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut dir = UserDirectory::seeded();
        dir.delete(UserId(1));
        dir.begin_create();
        *dir.draft_mut().unwrap() = ana();
        assert_eq!(dir.submit().unwrap(), Submitted::Created(UserId(4)));
        assert_eq!(ids(dir.users()), vec![2, 3, 4]);

        dir.begin_create();
        *dir.draft_mut().unwrap() = ana();
        assert_eq!(dir.submit().unwrap(), Submitted::Created(UserId(5)));
    }

    #[test]
    fn cancel_discards_draft() {
        let mut dir = UserDirectory::seeded();
        dir.begin_create();
        *dir.draft_mut().unwrap() = ana();
        dir.cancel();

        assert!(!dir.is_modal_open());
        assert_eq!(dir.draft(), None);
        assert_eq!(dir.users(), seed_users().as_slice());

        // Reopening starts from a blank draft, not the discarded one
        dir.begin_create();
        assert_eq!(dir.draft(), Some(&UserDraft::default()));
    }

    #[test]
    fn cancel_edit_leaves_row_untouched() {
        let mut dir = UserDirectory::seeded();
        dir.begin_edit(UserId(1)).unwrap();
        dir.draft_mut().unwrap().name = "Changed".into();
        dir.cancel();
        assert_eq!(dir.users(), seed_users().as_slice());
    }

    #[test]
    fn blank_required_field_blocks_submit() {
        let mut dir = UserDirectory::seeded();
        dir.begin_create();
        dir.draft_mut().unwrap().email = "ana@x.com".into();

        assert!(dir.submit().is_err());
        assert!(dir.is_modal_open());
        assert_eq!(dir.users(), seed_users().as_slice());

        dir.draft_mut().unwrap().name = "Ana".into();
        assert!(dir.submit().is_ok());
        assert_eq!(dir.users().len(), 4);
    }

    #[test]
    fn whitespace_only_name_is_still_appended() {
        let mut dir = UserDirectory::seeded();
        dir.begin_create();
        let draft = dir.draft_mut().unwrap();
        draft.name = "   ".into();
        draft.email = "ana@x.com".into();

        assert_eq!(dir.submit().unwrap(), Submitted::Created(UserId(4)));
        assert!(!dir.is_modal_open());
        assert_eq!(dir.users().len(), 4);
        assert_eq!(dir.get(UserId(4)).unwrap().name, "   ");
    }

    #[test]
    fn submit_without_open_form_fails() {
        let mut dir = UserDirectory::seeded();
        assert!(dir.submit().is_err());
        assert_eq!(dir.users(), seed_users().as_slice());
    }

    #[test]
    fn editing_a_row_deleted_underneath_fails_and_closes() {
        let mut dir = UserDirectory::seeded();
        dir.begin_edit(UserId(2)).unwrap();
        dir.delete(UserId(2));

        assert!(dir.submit().is_err());
        assert!(!dir.is_modal_open());
        assert_eq!(ids(dir.users()), vec![1, 3]);
    }

    #[test]
    fn empty_directory_starts_ids_at_one() {
        let mut dir = UserDirectory::new(Vec::new());
        dir.begin_create();
        *dir.draft_mut().unwrap() = ana();
        assert_eq!(dir.submit().unwrap(), Submitted::Created(UserId(1)));
    }
}
