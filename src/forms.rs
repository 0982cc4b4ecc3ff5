//! Form State
//!
//! Pure state for the account forms and the system info editor. The
//! components own one of these in a signal and render from it.

use crate::error::ValidationError;

pub const CHANGES_SAVED_MESSAGE: &str = "Changes saved";
pub const PASSWORD_CHANGED_MESSAGE: &str = "Password changed";

// ========================
// Field
// ========================

/// Visual validation state of one input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldStatus {
    #[default]
    Neutral,
    Success,
    Error,
}

impl FieldStatus {
    /// Bootstrap contextual class for the form group
    pub fn class(&self) -> &'static str {
        match self {
            FieldStatus::Neutral => "form-group",
            FieldStatus::Success => "form-group has-success",
            FieldStatus::Error => "form-group has-error",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    changed: bool,
    bad: bool,
}

impl FieldState {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }

    /// User typed into the field; clears any error mark
    pub fn edit(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.changed = true;
        self.bad = false;
    }

    pub fn mark_bad(&mut self) {
        self.changed = true;
        self.bad = true;
    }

    pub fn mark_good(&mut self) {
        self.changed = true;
        self.bad = false;
    }

    /// Back to neutral, optionally replacing the value
    pub fn reset(&mut self, value: Option<String>) {
        if let Some(value) = value {
            self.value = value;
        }
        self.changed = false;
        self.bad = false;
    }

    pub fn status(&self) -> FieldStatus {
        if self.bad {
            FieldStatus::Error
        } else if self.changed && !self.value.is_empty() {
            FieldStatus::Success
        } else {
            FieldStatus::Neutral
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

// ========================
// Submission
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Saving,
}

impl SubmitPhase {
    /// Enter `Saving`. `false` when a submission is already in flight.
    pub fn begin(&mut self) -> bool {
        match self {
            SubmitPhase::Saving => false,
            SubmitPhase::Idle => {
                *self = SubmitPhase::Saving;
                true
            }
        }
    }

    pub fn finish(&mut self) {
        *self = SubmitPhase::Idle;
    }

    pub fn is_saving(&self) -> bool {
        *self == SubmitPhase::Saving
    }

    pub fn button_label(&self, idle: &'static str, busy: &'static str) -> &'static str {
        match self {
            SubmitPhase::Idle => idle,
            SubmitPhase::Saving => busy,
        }
    }
}

// ========================
// Profile
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    FirstName,
    LastName,
    Email,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub first_name: FieldState,
    pub last_name: FieldState,
    pub email: FieldState,
    pub has_changes: bool,
    pub phase: SubmitPhase,
}

impl ProfileForm {
    pub fn from_profile(profile: &crate::models::Profile) -> Self {
        Self {
            first_name: FieldState::new(&profile.first_name),
            last_name: FieldState::new(&profile.last_name),
            email: FieldState::new(&profile.email),
            ..Self::default()
        }
    }

    pub fn to_profile(&self) -> crate::models::Profile {
        crate::models::Profile {
            first_name: self.first_name.value.clone(),
            last_name: self.last_name.value.clone(),
            email: self.email.value.clone(),
        }
    }

    pub fn field(&self, which: ProfileField) -> &FieldState {
        match which {
            ProfileField::FirstName => &self.first_name,
            ProfileField::LastName => &self.last_name,
            ProfileField::Email => &self.email,
        }
    }

    /// Keystroke in one of the inputs
    pub fn edit(&mut self, which: ProfileField, value: String) {
        let field = match which {
            ProfileField::FirstName => &mut self.first_name,
            ProfileField::LastName => &mut self.last_name,
            ProfileField::Email => &mut self.email,
        };
        field.edit(value);
        self.has_changes = true;
    }

    /// The save was rejected. Changes stay consumed until the next edit.
    pub fn failed(&mut self, mark_email: bool) {
        if mark_email {
            self.email.mark_bad();
        }
        self.phase.finish();
    }

    pub fn can_save(&self) -> bool {
        self.has_changes && !self.phase.is_saving()
    }

    /// Start a save if allowed. Pending changes are consumed.
    pub fn begin_save(&mut self) -> bool {
        if !self.can_save() || !self.phase.begin() {
            return false;
        }
        self.has_changes = false;
        true
    }

    pub fn saved(&mut self) {
        self.first_name.reset(None);
        self.last_name.reset(None);
        self.email.reset(None);
        self.phase.finish();
    }
}

// ========================
// Passwords
// ========================

/// Change-password form, or the reset variant without a current password
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordForm {
    pub new_password: FieldState,
    pub confirmation: FieldState,
    /// `None` for the reset form
    pub current_password: Option<FieldState>,
    pub phase: SubmitPhase,
}

impl PasswordForm {
    pub fn change() -> Self {
        Self {
            new_password: FieldState::default(),
            confirmation: FieldState::default(),
            current_password: Some(FieldState::default()),
            phase: SubmitPhase::Idle,
        }
    }

    pub fn reset() -> Self {
        Self {
            current_password: None,
            ..Self::change()
        }
    }

    pub fn is_reset(&self) -> bool {
        self.current_password.is_none()
    }

    /// Re-check the confirmation after any keystroke. Only the confirmation
    /// field is marked.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        if self.confirmation.is_empty() {
            return Ok(());
        }
        if self.confirmation.value != self.new_password.value {
            self.confirmation.mark_bad();
            return Err(ValidationError::PasswordMismatch);
        }
        self.confirmation.mark_good();
        Ok(())
    }

    fn filled(&self) -> bool {
        !self.new_password.is_empty()
            && !self.confirmation.is_empty()
            && self.current_password.as_ref().map_or(true, |f| !f.is_empty())
    }

    pub fn can_save(&self) -> bool {
        !self.phase.is_saving()
            && self.filled()
            && self.confirmation.value == self.new_password.value
    }

    pub fn begin_save(&mut self) -> bool {
        self.can_save() && self.phase.begin()
    }

    /// Clear every field after the server accepted the new password
    pub fn saved(&mut self) {
        let empty = Some(String::new());
        self.new_password.reset(empty.clone());
        self.confirmation.reset(empty.clone());
        if let Some(current) = &mut self.current_password {
            current.reset(empty);
        }
        self.phase.finish();
    }
}

// ========================
// System Comment
// ========================

/// Viewing/Editing state of the user-editable system fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditMode {
    Viewing,
    Editing { draft: String, dirty: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentEditor {
    saved: String,
    pub mode: EditMode,
    pub phase: SubmitPhase,
}

impl CommentEditor {
    pub fn new(comment: impl Into<String>) -> Self {
        Self {
            saved: comment.into(),
            mode: EditMode::Viewing,
            phase: SubmitPhase::Idle,
        }
    }

    pub fn comment(&self) -> &str {
        &self.saved
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditMode::Editing { .. })
    }

    pub fn edit(&mut self) {
        if !self.is_editing() {
            self.mode = EditMode::Editing {
                draft: self.saved.clone(),
                dirty: false,
            };
        }
    }

    pub fn update_draft(&mut self, value: impl Into<String>) {
        if let EditMode::Editing { draft, dirty } = &mut self.mode {
            *draft = value.into();
            *dirty = true;
        }
    }

    /// Drop the draft
    pub fn cancel(&mut self) {
        self.mode = EditMode::Viewing;
    }

    pub fn can_save(&self) -> bool {
        matches!(self.mode, EditMode::Editing { dirty: true, .. }) && !self.phase.is_saving()
    }

    /// Start saving; returns the draft to post
    pub fn begin_save(&mut self) -> Option<String> {
        if !self.can_save() || !self.phase.begin() {
            return None;
        }
        match &mut self.mode {
            EditMode::Editing { draft, dirty } => {
                *dirty = false;
                Some(draft.clone())
            }
            EditMode::Viewing => None,
        }
    }

    /// The server stored `comment`
    pub fn save(&mut self, comment: String) {
        self.saved = comment;
        self.mode = EditMode::Viewing;
        self.phase.finish();
    }

    /// The post failed; stay in Editing with the draft marked dirty again
    pub fn save_failed(&mut self) {
        if let EditMode::Editing { dirty, .. } = &mut self.mode {
            *dirty = true;
        }
        self.phase.finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Profile;

    #[test]
    fn test_field_status() {
        let mut field = FieldState::new("ada@example.com");
        assert_eq!(field.status(), FieldStatus::Neutral);

        field.edit("");
        assert_eq!(field.status(), FieldStatus::Neutral);
        field.edit("bob@example.com");
        assert_eq!(field.status(), FieldStatus::Success);

        field.mark_bad();
        assert_eq!(field.status(), FieldStatus::Error);
        field.edit("bob2@example.com");
        assert_eq!(field.status(), FieldStatus::Success);

        field.reset(None);
        assert_eq!(field.status(), FieldStatus::Neutral);
        assert_eq!(field.value, "bob2@example.com");
    }

    #[test]
    fn test_single_submit_guard() {
        let mut phase = SubmitPhase::Idle;
        assert!(phase.begin());
        assert!(!phase.begin());
        assert_eq!(phase.button_label("Save", "Saving..."), "Saving...");
        phase.finish();
        assert!(phase.begin());
    }

    #[test]
    fn test_profile_save_needs_changes() {
        let mut form = ProfileForm::from_profile(&Profile {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
        });
        assert!(!form.can_save());
        assert!(!form.begin_save());

        form.edit(ProfileField::LastName, "King".into());
        assert!(form.begin_save());
        assert!(!form.can_save());
        assert!(!form.begin_save());
        assert_eq!(form.to_profile().last_name, "King");

        form.saved();
        assert_eq!(form.field(ProfileField::LastName).status(), FieldStatus::Neutral);
        assert!(!form.phase.is_saving());
    }

    #[test]
    fn test_profile_duplicate_email() {
        let mut form = ProfileForm::default();
        form.edit(ProfileField::Email, "taken@example.com".into());
        assert!(form.begin_save());
        form.failed(true);
        assert_eq!(form.email.status(), FieldStatus::Error);
        assert!(!form.can_save());

        form.edit(ProfileField::Email, "free@example.com".into());
        assert_eq!(form.email.status(), FieldStatus::Success);
        assert!(form.can_save());
    }

    #[test]
    fn test_password_mismatch_marks_confirmation_only() {
        let mut form = PasswordForm::change();
        form.new_password.edit("hunter22");
        form.confirmation.edit("hunter2");
        form.current_password.as_mut().unwrap().edit("old");

        assert_eq!(form.validate(), Err(ValidationError::PasswordMismatch));
        assert_eq!(form.confirmation.status(), FieldStatus::Error);
        assert_eq!(form.new_password.status(), FieldStatus::Success);
        assert!(!form.can_save());

        form.confirmation.edit("hunter22");
        assert_eq!(form.validate(), Ok(()));
        assert!(form.can_save());
    }

    #[test]
    fn test_change_requires_current_password() {
        let mut form = PasswordForm::change();
        form.new_password.edit("pw");
        form.confirmation.edit("pw");
        assert!(!form.can_save());

        let mut reset = PasswordForm::reset();
        reset.new_password.edit("pw");
        reset.confirmation.edit("pw");
        assert!(reset.is_reset());
        assert!(reset.begin_save());
        reset.saved();
        assert!(reset.new_password.is_empty());
        assert!(reset.confirmation.is_empty());
    }

    #[test]
    fn test_comment_edit_cancel() {
        let mut editor = CommentEditor::new("lab box");
        editor.edit();
        assert!(!editor.can_save());
        editor.update_draft("front desk");
        assert!(editor.can_save());
        editor.cancel();
        assert_eq!(editor.mode, EditMode::Viewing);
        assert_eq!(editor.comment(), "lab box");
    }

    #[test]
    fn test_comment_save_returns_to_viewing() {
        let mut editor = CommentEditor::new("");
        editor.update_draft("ignored while viewing");
        assert_eq!(editor.mode, EditMode::Viewing);

        editor.edit();
        editor.update_draft("front desk");
        let draft = editor.begin_save().unwrap();
        assert_eq!(draft, "front desk");
        assert_eq!(editor.begin_save(), None);

        editor.save(draft);
        assert_eq!(editor.mode, EditMode::Viewing);
        assert_eq!(editor.comment(), "front desk");
    }

    #[test]
    fn test_comment_save_failure_keeps_draft() {
        let mut editor = CommentEditor::new("a");
        editor.edit();
        editor.update_draft("b");
        editor.begin_save();
        editor.save_failed();
        assert_eq!(
            editor.mode,
            EditMode::Editing {
                draft: "b".into(),
                dirty: true
            }
        );
        assert!(editor.can_save());
    }
}
