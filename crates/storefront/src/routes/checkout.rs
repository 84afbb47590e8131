//! Checkout route handlers.
//!
//! The card fields are validated by `greenshelf_core::card` and exist only
//! for the duration of the request; nothing card-related is stored or
//! logged.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    response::{IntoResponse, Redirect, Response},
};
use tracing::instrument;

use greenshelf_core::{CardFields, CardOutcome, validate};

use crate::filters;

/// Checkout form template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/form.html")]
pub struct CheckoutTemplate {
    /// Single error indicator; no field-level detail is surfaced.
    pub error: bool,
}

/// Terminal confirmation page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/success.html")]
pub struct SuccessTemplate;

/// Display the checkout form.
pub async fn form() -> CheckoutTemplate {
    CheckoutTemplate { error: false }
}

/// Handle a checkout submission.
///
/// An accepted submission redirects to the terminal success page. A
/// rejected one re-renders the form with the error flag set. A blank
/// submission skips validation and re-renders without error.
#[instrument(skip_all)]
pub async fn submit(Form(form): Form<CardFields>) -> Response {
    match validate(&form) {
        CardOutcome::Accepted { .. } => {
            tracing::info!("checkout accepted");
            Redirect::to("/success").into_response()
        }
        CardOutcome::Rejected => {
            tracing::debug!("checkout rejected");
            CheckoutTemplate { error: true }.into_response()
        }
        CardOutcome::NotSubmitted => CheckoutTemplate { error: false }.into_response(),
    }
}

/// Display the terminal confirmation page.
pub async fn success() -> SuccessTemplate {
    SuccessTemplate
}
