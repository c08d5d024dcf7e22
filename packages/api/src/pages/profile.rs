//! # Profile and reviews
//!
//! Public page. The review form is decided in two stages: the pure
//! [`review_gate`] first, then a probe of `GET /api/users/{id}/reviews/me`
//! when the gate allows it.

use tracing::{info, warn};

use crate::client::ApiClient;
use crate::error::Result;
use crate::format;
use crate::forms::{profile_update, validate_review};
use crate::gate::{can_edit_profile, review_gate, ReviewGate};
use crate::models::{CurrentUser, Review, UserId};

pub const NOT_FOUND_TEXT: &str = "User not found.";
pub const SIGN_IN_TEXT: &str = "Sign in to leave a review.";
pub const NO_REVIEWS_TEXT: &str = "No reviews yet.";
pub const REVIEW_SENT: &str = "Review submitted!";
pub const PROFILE_SAVED: &str = "Profile updated!";

#[derive(Debug, Clone, PartialEq)]
pub enum ReviewForm {
    SignInRequired,
    Hidden,
    AlreadyReviewed { rating: u8 },
    Open,
    /// The probe failed; the form stays hidden and this message is shown.
    Unavailable(String),
}

impl ReviewForm {
    pub fn notice_text(&self) -> Option<String> {
        match self {
            ReviewForm::SignInRequired => Some(SIGN_IN_TEXT.to_string()),
            ReviewForm::AlreadyReviewed { rating } => {
                Some(format!("You have already reviewed this user (rating {rating})."))
            }
            ReviewForm::Unavailable(message) => Some(message.clone()),
            ReviewForm::Hidden | ReviewForm::Open => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewEntry {
    pub review: Review,
    pub created_display: String,
}

impl ReviewEntry {
    fn new(review: Review) -> Self {
        Self {
            created_display: format::timestamp(&review.created_at),
            review,
        }
    }

    /// `★★★★☆` for a rating of 4.
    pub fn stars(&self) -> String {
        let filled = usize::from(self.review.rating.min(5));
        format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReviewsLoad {
    Loaded(Vec<ReviewEntry>),
    Failed(String),
}

impl ReviewsLoad {
    pub fn empty_text(&self) -> Option<&'static str> {
        match self {
            ReviewsLoad::Loaded(entries) if entries.is_empty() => Some(NO_REVIEWS_TEXT),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedProfile {
    pub user: CurrentUser,
    pub can_edit: bool,
    pub reviews: ReviewsLoad,
    pub review_form: ReviewForm,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProfilePage {
    Loaded(LoadedProfile),
    NotFound,
    Failed(String),
}

/// Load the profile, its reviews and the review form.
///
/// Only [`crate::ApiError::Unauthenticated`] from the review probe is
/// returned as an error; everything else is part of the page.
pub async fn load_profile(
    client: &ApiClient,
    viewer: Option<&CurrentUser>,
    user_id: UserId,
) -> Result<ProfilePage> {
    let user = match client.user(user_id).await {
        Ok(user) => user,
        Err(e) if e.is_not_found() => return Ok(ProfilePage::NotFound),
        Err(e) => {
            warn!(user_id, error = %e, "Failed to load profile");
            return Ok(ProfilePage::Failed(e.to_string()));
        }
    };

    let reviews = load_reviews(client, user_id).await;
    let review_form = load_review_form(client, viewer, &user).await?;

    Ok(ProfilePage::Loaded(LoadedProfile {
        can_edit: can_edit_profile(viewer, user.id),
        user,
        reviews,
        review_form,
    }))
}

pub async fn load_reviews(client: &ApiClient, user_id: UserId) -> ReviewsLoad {
    match client.user_reviews(user_id).await {
        Ok(reviews) => ReviewsLoad::Loaded(reviews.into_iter().map(ReviewEntry::new).collect()),
        Err(e) => {
            warn!(user_id, error = %e, "Failed to load reviews");
            ReviewsLoad::Failed(e.to_string())
        }
    }
}

pub async fn load_review_form(
    client: &ApiClient,
    viewer: Option<&CurrentUser>,
    target: &CurrentUser,
) -> Result<ReviewForm> {
    let form = match review_gate(viewer, target) {
        ReviewGate::SignInRequired => ReviewForm::SignInRequired,
        ReviewGate::Hidden => ReviewForm::Hidden,
        ReviewGate::Probe => match client.my_review_of(target.id).await {
            Ok(Some(review)) => ReviewForm::AlreadyReviewed {
                rating: review.rating,
            },
            Ok(None) => ReviewForm::Open,
            Err(e) if e.requires_sign_in() => return Err(e),
            Err(e) => {
                warn!(target_id = target.id, error = %e, "Review probe failed");
                ReviewForm::Unavailable(e.to_string())
            }
        },
    };
    Ok(form)
}

/// Save the viewer's own profile and return the stored version.
pub async fn update_profile(
    client: &ApiClient,
    user_id: UserId,
    about: &str,
    tags: &str,
) -> Result<CurrentUser> {
    let user = client
        .update_user(user_id, &profile_update(about, tags))
        .await?;
    info!(user_id, "Profile updated");
    Ok(user)
}

/// Validate and post a review. A rating outside 1..=5 fails without a
/// request. On success the page locks the form and reloads the list.
pub async fn submit_review(
    client: &ApiClient,
    target_id: UserId,
    rating: &str,
    comment: &str,
) -> Result<Review> {
    let body = validate_review(rating, comment)?;
    let review = client.create_review(target_id, &body).await?;
    info!(target_id, rating = review.rating, "Review submitted");
    Ok(review)
}
