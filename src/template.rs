use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::CookieJar;
use std::convert::Infallible;

use crate::flash::{Flash, Notice};

pub const SERVER_ERROR_MESSAGE: &str = "Something went wrong, please retry later";

pub(crate) mod filters {
    #[askama::filter_fn]
    pub fn days(value: &i64, _values: &dyn askama::Values) -> askama::Result<String> {
        Ok(super::days_phrase(*value))
    }
}

/// Human phrasing of a `days_remaining` value.
pub fn days_phrase(days: i64) -> String {
    match days {
        d if d < -1 => format!("expired {} days ago", -d),
        -1 => "expired yesterday".to_owned(),
        0 => "expires today".to_owned(),
        1 => "expires tomorrow".to_owned(),
        d => format!("expires in {d} days"),
    }
}

/// Page renderer. Consumes the pending notice so it shows exactly once.
pub struct Template {
    jar: CookieJar,
    pub notice: Option<Notice>,
}

impl Template {
    pub fn render<T: askama::Template>(self, template: T) -> Response {
        match template.render() {
            Ok(html) => (self.jar, Html(html)).into_response(),
            Err(err) => render_failure(err),
        }
    }

    pub fn server_error<T: askama::Template>(template: T) -> Response {
        with_status(StatusCode::INTERNAL_SERVER_ERROR, template)
    }

    pub fn not_found<T: askama::Template>(template: T) -> Response {
        with_status(StatusCode::NOT_FOUND, template)
    }
}

fn with_status<T: askama::Template>(status: StatusCode, template: T) -> Response {
    match template.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(err) => render_failure(err),
    }
}

fn render_failure(err: askama::Error) -> Response {
    tracing::error!("Failed to render template: {err}");

    (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_MESSAGE).into_response()
}

impl<S: Send + Sync> FromRequestParts<S> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let (jar, notice) = Flash::from_request_parts(parts, state).await?.take();

        Ok(Template { jar, notice })
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;

#[derive(askama::Template)]
#[template(path = "500.html")]
pub struct ServerTemplate;

#[macro_export]
macro_rules! try_page_response {
    ($result:expr) => {
        match $result.await {
            Ok(r) => r,
            Err(err) => {
                tracing::error!("{err}");

                return $crate::template::Template::server_error($crate::template::ServerTemplate);
            }
        }
    };
}
