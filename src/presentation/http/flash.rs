// src/presentation/http/flash.rs
use axum::{
    extract::FromRequestParts,
    http::{
        HeaderValue, StatusCode,
        header::{LOCATION, SET_COOKIE},
        request::Parts,
    },
    response::{IntoResponse, Response},
};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use headers::{Cookie, HeaderMapExt};
use serde::Serialize;
use std::convert::Infallible;

pub const FLASH_COOKIE: &str = "flash";

/// One-shot message carried across a redirect in a cookie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlashMessage {
    pub level: String,
    pub message: String,
}

impl FlashMessage {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: "success".into(),
            message: message.into(),
        }
    }

    pub fn encode(&self) -> String {
        URL_SAFE_NO_PAD.encode(format!("{}:{}", self.level, self.message))
    }

    pub fn decode(raw: &str) -> Option<Self> {
        let bytes = URL_SAFE_NO_PAD.decode(raw.trim()).ok()?;
        let text = String::from_utf8(bytes).ok()?;
        let (level, message) = text.split_once(':')?;
        if level.is_empty() || !level.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        Some(Self {
            level: level.to_string(),
            message: message.to_string(),
        })
    }
}

/// Flash read from the request, if any. Pages that display it must clear it.
#[derive(Debug, Clone, Default)]
pub struct IncomingFlash(pub Option<FlashMessage>);

impl<S> FromRequestParts<S> for IncomingFlash
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let flash = parts
            .headers
            .typed_get::<Cookie>()
            .and_then(|cookie| cookie.get(FLASH_COOKIE).and_then(FlashMessage::decode));
        Ok(Self(flash))
    }
}

fn set_cookie(flash: &FlashMessage) -> HeaderValue {
    let value = format!(
        "{FLASH_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax",
        flash.encode()
    );
    // base64url output is always a valid header value
    HeaderValue::from_str(&value).unwrap_or_else(|_| clear_cookie())
}

fn clear_cookie() -> HeaderValue {
    HeaderValue::from_static("flash=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

/// `303 See Other` to `location`, leaving `flash` for the next page.
pub fn redirect_with_flash(location: &str, flash: FlashMessage) -> Response {
    let mut response = StatusCode::SEE_OTHER.into_response();
    let headers = response.headers_mut();
    match HeaderValue::from_str(location) {
        Ok(value) => {
            headers.insert(LOCATION, value);
        }
        Err(_) => {
            headers.insert(LOCATION, HeaderValue::from_static("/article"));
        }
    }
    headers.append(SET_COOKIE, set_cookie(&flash));
    response
}

/// Wraps a rendered page, expiring the flash cookie when one was shown.
pub fn consume_flash(page: impl IntoResponse, flash: &IncomingFlash) -> Response {
    let mut response = page.into_response();
    if flash.0.is_some() {
        response.headers_mut().append(SET_COOKIE, clear_cookie());
    }
    response
}
