//! # Form state and local validation
//!
//! Every form on every page follows the same protocol, captured by
//! [`FormState`]:
//!
//! 1. [`FormState::begin`] clears the previous notice and disables submit.
//!    It refuses to start while a submission is already in flight, so a
//!    rapid double-submit sends one request.
//! 2. Inputs are validated locally with one of the `validate_*` functions
//!    below; a failure is reported with [`FormState::fail`] and no request is
//!    sent.
//! 3. Exactly one request is issued.
//! 4. [`FormState::succeed`] or [`FormState::fail`] re-enables the form,
//!    unless the success locks it (a new application, a new review).

use crate::error::{ApiError, Result};
use crate::models::{
    ApplicationCreate, ApplicationUpdate, ProfileUpdate, ProjectCreate, ProjectStatus,
    RegisterRequest, ReviewCreate, Role,
};

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MAX_TITLE_LEN: usize = 255;
pub const MAX_COMMENT_LEN: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

/// A message shown next to a form or section.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

impl From<&ApiError> for Notice {
    fn from(err: &ApiError) -> Self {
        Notice::error(err.to_string())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Editing,
    Submitting,
    /// Submitted for good; inputs stay disabled.
    Locked,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub phase: Phase,
    pub notice: Option<Notice>,
}

impl FormState {
    /// A form that starts disabled, e.g. because a probe failed.
    pub fn locked(notice: Option<Notice>) -> Self {
        Self {
            phase: Phase::Locked,
            notice,
        }
    }

    /// Start a submission. Returns `false` when one is already running or
    /// the form is locked; the caller must then do nothing.
    pub fn begin(&mut self) -> bool {
        if self.phase != Phase::Editing {
            return false;
        }
        self.notice = None;
        self.phase = Phase::Submitting;
        true
    }

    pub fn fail(&mut self, err: &ApiError) {
        self.phase = Phase::Editing;
        self.notice = Some(Notice::from(err));
    }

    pub fn succeed(&mut self, message: impl Into<String>, lock: bool) {
        self.phase = if lock { Phase::Locked } else { Phase::Editing };
        self.notice = Some(Notice::success(message));
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// Inputs and the submit button are disabled while submitting or locked.
    pub fn inputs_disabled(&self) -> bool {
        self.phase != Phase::Editing
    }
}

/// Validated login credentials.
#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

pub fn validate_login(email: &str, password: &str) -> Result<Credentials> {
    let email = email.trim();
    let password = password.trim();
    if email.is_empty() || password.is_empty() {
        return Err(ApiError::invalid("Please enter your email and password."));
    }
    Ok(Credentials {
        email: email.to_string(),
        password: password.to_string(),
    })
}

pub fn validate_registration(email: &str, password: &str, role: &str) -> Result<RegisterRequest> {
    let email = email.trim();
    let password = password.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(ApiError::invalid("Please enter a valid email."));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ApiError::invalid(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters."
        )));
    }
    let role = match Role::parse(role) {
        Some(role @ (Role::Employer | Role::Freelancer)) => role,
        _ => return Err(ApiError::invalid("Please choose a role.")),
    };
    Ok(RegisterRequest {
        email: email.to_string(),
        password: password.to_string(),
        role,
    })
}

/// Parse a strictly positive, finite amount of money.
pub fn parse_amount(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

/// New projects are always created open.
pub fn validate_project(title: &str, description: &str, budget: &str) -> Result<ProjectCreate> {
    let title = title.trim();
    if title.is_empty() || title.chars().count() > MAX_TITLE_LEN {
        return Err(ApiError::invalid("Please enter a valid title and budget."));
    }
    let Some(budget) = parse_amount(budget) else {
        return Err(ApiError::invalid("Please enter a valid title and budget."));
    };
    Ok(ProjectCreate {
        title: title.to_string(),
        description: description.trim().to_string(),
        budget,
        status: ProjectStatus::Open,
    })
}

/// Validated application fields, before the create/update decision.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationDraft {
    pub proposal_text: String,
    pub proposed_price: f64,
}

impl ApplicationDraft {
    /// Body for a new application, status forced to pending.
    pub fn into_create(self) -> ApplicationCreate {
        ApplicationCreate::pending(self.proposal_text, self.proposed_price)
    }

    pub fn into_update(self) -> ApplicationUpdate {
        ApplicationUpdate {
            proposal_text: self.proposal_text,
            proposed_price: self.proposed_price,
        }
    }
}

pub fn validate_application(proposal_text: &str, proposed_price: &str) -> Result<ApplicationDraft> {
    let proposal_text = proposal_text.trim();
    if proposal_text.is_empty() || proposed_price.trim().is_empty() {
        return Err(ApiError::invalid("Please fill in all fields."));
    }
    let Some(proposed_price) = parse_amount(proposed_price) else {
        return Err(ApiError::invalid("The proposed price must be a number greater than 0."));
    };
    Ok(ApplicationDraft {
        proposal_text: proposal_text.to_string(),
        proposed_price,
    })
}

/// Rating must be an integer from 1 to 5; a blank comment is sent as `null`.
pub fn validate_review(rating: &str, comment: &str) -> Result<ReviewCreate> {
    let rating = match rating.trim().parse::<u8>() {
        Ok(r @ 1..=5) => r,
        _ => return Err(ApiError::invalid("Please choose a rating from 1 to 5.")),
    };
    let comment = comment.trim();
    if comment.chars().count() > MAX_COMMENT_LEN {
        return Err(ApiError::invalid(format!(
            "Comments are limited to {MAX_COMMENT_LEN} characters."
        )));
    }
    Ok(ReviewCreate {
        rating,
        comment: (!comment.is_empty()).then(|| comment.to_string()),
    })
}

/// Split `"Rust, Axum,,"` into `["Rust", "Axum"]`.
pub fn parse_tags(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn profile_update(about: &str, tags: &str) -> ProfileUpdate {
    ProfileUpdate {
        about: about.trim().to_string(),
        tags: parse_tags(tags),
    }
}
