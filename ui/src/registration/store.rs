//! Form data store: one mutable draft shared by every wizard step.

use super::types::{DraftUpdate, RegistrationDraft};

#[derive(Clone, PartialEq, Debug, Default)]
pub struct FormDataStore {
    draft: RegistrationDraft,
}

impl FormDataStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> &RegistrationDraft {
        &self.draft
    }

    /// Shallow merge; fields absent from `update` keep their current value
    pub fn set(&mut self, update: impl Into<DraftUpdate>) {
        for field in update.into().fields {
            self.draft.apply(field);
        }
    }

    pub fn reset(&mut self) {
        self.draft = RegistrationDraft::default();
    }
}
