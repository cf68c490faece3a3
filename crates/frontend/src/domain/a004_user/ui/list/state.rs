use crate::shared::list_state::ListState;
use crate::shared::list_utils::{ListRecord, Searchable, SortValue, Sortable};
use contracts::domain::a004_user::aggregate::User;
use leptos::prelude::*;

pub const PAGE_SIZE: usize = 20;

/// Roles offered by the user form
pub const ROLES: [&str; 3] = ["Admin", "User", "Editor"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Id,
    Name,
    Email,
    Role,
}

impl Searchable for User {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.email.clone(),
            self.role.clone(),
        ]
    }
}

impl Sortable for User {
    type Field = UserField;

    fn sort_value(&self, field: UserField) -> SortValue<'_> {
        match field {
            UserField::Id => SortValue::Number(self.id),
            UserField::Name => SortValue::Text(&self.name),
            UserField::Email => SortValue::Text(&self.email),
            UserField::Role => SortValue::Text(&self.role),
        }
    }
}

impl ListRecord for User {
    fn id(&self) -> i64 {
        self.id
    }
}

pub fn create_state() -> RwSignal<ListState<User>> {
    RwSignal::new(ListState::new(PAGE_SIZE))
}
