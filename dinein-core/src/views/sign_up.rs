//! Sign-up screen state
//!
//! The form is validated locally; there is no account backend.

use chrono::NaiveDate;
use shared::models::SignUpForm;
use validator::{Validate, ValidationErrors};

/// ISO `YYYY-MM-DD`, as shown in the birth-date field
const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone)]
pub struct SignUpView {
    form: SignUpForm,
    password_visible: bool,
    repeat_password_visible: bool,
    date_picker_open: bool,
    /// Date the picker opens on when nothing has been chosen yet
    picker_date: NaiveDate,
}

impl SignUpView {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            form: SignUpForm::default(),
            password_visible: false,
            repeat_password_visible: false,
            date_picker_open: false,
            picker_date: today,
        }
    }

    pub fn form(&self) -> &SignUpForm {
        &self.form
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.form.name = value.into();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.form.email = value.into();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.form.password = value.into();
    }

    pub fn set_repeat_password(&mut self, value: impl Into<String>) {
        self.form.repeat_password = value.into();
    }

    pub fn toggle_password_visibility(&mut self) {
        self.password_visible = !self.password_visible;
    }

    pub fn toggle_repeat_password_visibility(&mut self) {
        self.repeat_password_visible = !self.repeat_password_visible;
    }

    pub fn is_password_visible(&self) -> bool {
        self.password_visible
    }

    pub fn is_repeat_password_visible(&self) -> bool {
        self.repeat_password_visible
    }

    pub fn open_date_picker(&mut self) {
        self.date_picker_open = true;
    }

    pub fn is_date_picker_open(&self) -> bool {
        self.date_picker_open
    }

    /// Close the picker; `None` means it was dismissed without a choice
    pub fn pick_birth_date(&mut self, picked: Option<NaiveDate>) {
        self.date_picker_open = false;
        if let Some(date) = picked {
            self.picker_date = date;
            self.form.birth_date = Some(date);
        }
    }

    pub fn picker_date(&self) -> NaiveDate {
        self.picker_date
    }

    /// Birth date text; empty until a date is picked
    pub fn birth_date_display(&self) -> String {
        self.form
            .birth_date
            .map(|d| d.format(BIRTH_DATE_FORMAT).to_string())
            .unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        self.form.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    #[test]
    fn test_birth_date_picker() {
        let mut view = SignUpView::new(today());
        assert_eq!(view.birth_date_display(), "");

        view.open_date_picker();
        assert!(view.is_date_picker_open());
        view.pick_birth_date(None);
        assert!(!view.is_date_picker_open());
        assert_eq!(view.birth_date_display(), "");
        assert_eq!(view.picker_date(), today());

        view.open_date_picker();
        view.pick_birth_date(NaiveDate::from_ymd_opt(1994, 9, 5));
        assert_eq!(view.birth_date_display(), "1994-09-05");
    }

    #[test]
    fn test_independent_visibility_toggles() {
        let mut view = SignUpView::new(today());
        view.toggle_password_visibility();
        assert!(view.is_password_visible());
        assert!(!view.is_repeat_password_visible());
    }

    #[test]
    fn test_validate_passwords_match() {
        let mut view = SignUpView::new(today());
        view.set_name("Ana");
        view.set_email("ana@example.com");
        view.set_password("secret");
        view.set_repeat_password("secreT");
        let errors = view.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("repeat_password"));

        view.set_repeat_password("secret");
        assert!(view.validate().is_ok());
    }
}
