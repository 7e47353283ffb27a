//! Error page rendered by the router fallback and error boundaries.
//!
//! On the server the first [`AppError`] also decides the response status.

use http::status::StatusCode;
use leptos::{
    html::{a, div, h1, p},
    prelude::*,
};
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Page Not Found")]
    NotFound,
}

impl AppError {
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// Collects the [`AppError`]s out of `errors`, ignoring other error types.
fn app_errors(errors: Errors) -> Vec<AppError> {
    errors
        .into_iter()
        .filter_map(|(_key, error)| error.downcast_ref::<AppError>().cloned())
        .collect()
}

/// Renders the errors passed from outside (SSR fallback) or held reactively
/// by an error boundary.
pub fn component(
    outside_errors: Option<Errors>,
    errors: Option<RwSignal<Errors>>,
) -> impl IntoView {
    let errors = match (outside_errors, errors) {
        (Some(outside), _) => app_errors(outside),
        (None, Some(errors)) => app_errors(errors.get_untracked()),
        (None, None) => Vec::new(),
    };

    #[cfg(feature = "ssr")]
    {
        use leptos_axum::ResponseOptions;
        if let (Some(response), Some(first)) = (use_context::<ResponseOptions>(), errors.first()) {
            response.set_status(first.status_code());
        }
    }

    div().class("error-page").child((
        h1().class("error-page__title")
            .child(if errors.len() > 1 { "Errors" } else { "Error" }),
        errors
            .into_iter()
            .map(|error| {
                p().class("error-page__message")
                    .child(format!("{}| {error}", error.status_code().as_u16()))
            })
            .collect_view(),
        a().href("/").class("error-page__home").child("Go back home"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(AppError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::NotFound.to_string(), "Page Not Found");
    }

    #[test]
    fn app_errors_skips_foreign_errors() {
        let mut errors = Errors::default();
        errors.insert_with_default_key(AppError::NotFound);
        assert_eq!(app_errors(errors), vec![AppError::NotFound]);
        assert!(app_errors(Errors::default()).is_empty());
    }
}
