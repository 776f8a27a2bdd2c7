//! Form state for the admin login dialog and the shift edit dialog.
//!
//! Both dialogs keep their logic here so the Yew components stay thin and
//! the transitions can be tested without a browser.

use crate::Shift;

pub const EMPTY_PASSWORD_MESSAGE: &str = "비밀번호를 입력해주세요.";
pub const MISSING_CREDENTIAL_MESSAGE: &str = "로그인 처리 중 오류가 발생했습니다.";
pub const LOGIN_FAILED_MESSAGE: &str = "비밀번호가 잘못되었습니다.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginPhase {
    /// Idle or collecting input
    Collecting,
    Submitting,
    Errored,
}

/// Why a login request did not produce a response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginFailure {
    Rejected,
    Network(String),
}

/// State machine behind the login dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginForm {
    pub password: String,
    pub phase: LoginPhase,
    /// Validation or error message shown under the input
    pub message: Option<String>,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            password: String::new(),
            phase: LoginPhase::Collecting,
            message: None,
        }
    }
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.phase == LoginPhase::Submitting
    }

    /// Typing clears any previous message.
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
        self.message = None;
        if self.phase == LoginPhase::Errored {
            self.phase = LoginPhase::Collecting;
        }
    }

    /// Start a submission.
    ///
    /// Returns the password to send, or `None` when nothing must be sent:
    /// a blank password (a validation message is shown instead) or a request
    /// already in flight.
    pub fn begin_submit(&mut self) -> Option<String> {
        if self.is_busy() {
            return None;
        }
        if self.password.trim().is_empty() {
            self.phase = LoginPhase::Collecting;
            self.message = Some(EMPTY_PASSWORD_MESSAGE.to_string());
            return None;
        }
        self.phase = LoginPhase::Submitting;
        self.message = None;
        Some(self.password.clone())
    }

    /// Apply the outcome of the login request.
    ///
    /// `Ok(Some(credential))` is a success and returns the credential for the
    /// caller to store. A success without a credential is an error.
    pub fn finish(&mut self, outcome: Result<Option<String>, LoginFailure>) -> Option<String> {
        match outcome {
            Ok(Some(credential)) => {
                *self = Self::default();
                Some(credential)
            }
            Ok(None) => {
                self.phase = LoginPhase::Errored;
                self.message = Some(MISSING_CREDENTIAL_MESSAGE.to_string());
                None
            }
            Err(_) => {
                self.phase = LoginPhase::Errored;
                self.message = Some(LOGIN_FAILED_MESSAGE.to_string());
                None
            }
        }
    }

    /// Explicit close: drop input and messages, leave credentials alone.
    ///
    /// Refused while a request is in flight, since its outcome would still
    /// store a credential; returns whether the dialog may close.
    pub fn cancel(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }
        *self = Self::default();
        true
    }
}

/// Selection state of the shift edit dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftEditForm {
    pub date: String,
    pub work_type: String,
    pub changed_work_type: Option<String>,
    pub selected: Option<String>,
}

impl ShiftEditForm {
    /// Open the dialog for a shift, pre-selecting its effective type
    pub fn open_for(shift: &Shift) -> Self {
        Self {
            date: shift.date.clone(),
            work_type: shift.work_type.clone(),
            changed_work_type: shift.changed_work_type.clone(),
            selected: Some(shift.effective_work_type().to_string()),
        }
    }

    pub fn effective_work_type(&self) -> &str {
        match self.changed_work_type.as_deref() {
            Some(changed) if !changed.is_empty() => changed,
            _ => &self.work_type,
        }
    }

    pub fn is_changed(&self) -> bool {
        matches!(&self.changed_work_type, Some(changed) if changed != &self.work_type)
    }

    pub fn select(&mut self, work_type: impl Into<String>) {
        self.selected = Some(work_type.into());
    }

    /// Submission is only allowed for a real change.
    pub fn can_submit(&self) -> bool {
        match self.selected.as_deref() {
            None | Some("") => false,
            Some(selected) => selected != self.effective_work_type(),
        }
    }

    /// Consume the selection, yielding `(work_type, date)` for the edit callback
    pub fn submit(&mut self) -> Option<(String, String)> {
        if !self.can_submit() {
            return None;
        }
        let selected = self.selected.take()?;
        Some((selected, self.date.clone()))
    }
}
