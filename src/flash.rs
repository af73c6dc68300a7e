use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};
use std::{convert::Infallible, str::FromStr};

use crate::template::{ServerTemplate, Template};

pub const FLASH_COOKIE_NAME: &str = "flash";

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum NoticeLevel {
    Ok,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Ok,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    /// Cookie value: `<level>:<message>`. The jar percent-encodes it on the wire.
    pub fn encode(&self) -> String {
        format!("{}:{}", self.level, self.message)
    }

    pub fn decode(value: &str) -> Option<Self> {
        let (level, message) = value.split_once(':')?;

        Some(Self {
            level: NoticeLevel::from_str(level).ok()?,
            message: message.to_owned(),
        })
    }

    fn cookie(&self) -> Cookie<'static> {
        Cookie::build((FLASH_COOKIE_NAME, self.encode()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .max_age(time::Duration::minutes(1))
            .build()
    }
}

/// Notice left by the previous request. Taking it clears the cookie.
pub struct Flash(pub CookieJar);

impl Flash {
    pub fn take(self) -> (CookieJar, Option<Notice>) {
        let Some(cookie) = self.0.get(FLASH_COOKIE_NAME) else {
            return (self.0, None);
        };

        let notice = Notice::decode(cookie.value());
        if notice.is_none() {
            tracing::debug!(value = cookie.value(), "discarding malformed flash cookie");
        }

        let jar = self.0.remove(Cookie::build(FLASH_COOKIE_NAME).path("/"));

        (jar, notice)
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Flash {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_request_parts(parts, state).await?;

        Ok(Self(jar))
    }
}

/// Redirects after a form action, carrying the outcome as a notice.
///
/// User-facing errors become an error notice. Anything else is logged and
/// answered with the 500 page.
pub fn redirect(jar: CookieJar, to: &str, result: pantryplan_shared::Result<&str>) -> Response {
    let notice = match result {
        Ok(message) => Notice::ok(message),
        Err(err) => match err.user_message() {
            Some(message) => Notice::error(message),
            None => {
                tracing::error!("{err}");

                return Template::server_error(ServerTemplate);
            }
        },
    };

    (jar.add(notice.cookie()), Redirect::to(to)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{StatusCode, header};

    #[test]
    fn test_notice_round_trips_through_cookie_value() {
        let notice = Notice::error("Title, ingredients, instructions are required.");

        assert_eq!(
            notice.encode(),
            "error:Title, ingredients, instructions are required."
        );
        assert_eq!(Notice::decode(&notice.encode()), Some(notice));
    }

    #[test]
    fn test_decode_rejects_unknown_level() {
        assert_eq!(Notice::decode("warn:hello"), None);
        assert_eq!(Notice::decode("no-separator"), None);
    }

    #[test]
    fn test_take_clears_cookie() {
        let jar = CookieJar::new().add(Cookie::new(
            FLASH_COOKIE_NAME,
            Notice::ok("Item added.").encode(),
        ));
        let (jar, notice) = Flash(jar).take();

        assert_eq!(notice, Some(Notice::ok("Item added.")));
        assert!(jar.get(FLASH_COOKIE_NAME).is_none());
    }

    #[test]
    fn test_redirect_sets_error_notice() {
        let result = Err(pantryplan_shared::Error::User(
            "Quantity must be a number.".to_owned(),
        ));
        let response = redirect(CookieJar::new(), "/", result);

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert!(cookie.starts_with("flash=error%3AQuantity%20must%20be%20a%20number."));
    }

    #[test]
    fn test_redirect_encodes_notice_once() {
        let response = redirect(CookieJar::new(), "/recipes", Ok("Recipe added."));

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert!(cookie.starts_with("flash=ok%3ARecipe%20added.;"));
        assert!(!cookie.contains("%25"));
    }

    #[test]
    fn test_redirect_hides_server_errors() {
        let result = Err(pantryplan_shared::Error::Unknown(anyhow::anyhow!("disk full")));
        let response = redirect(CookieJar::new(), "/", result);

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
    }
}
