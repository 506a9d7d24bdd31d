//! The two cookies the checkout reads and writes: the opaque checkout
//! session and the remembered customer data.

use std::string::FromUtf8Error;

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use thiserror::Error;
use time::Duration;
use tracing::warn;

use crate::domain::CustomerInfo;

pub const SESSION_COOKIE: &str = "checkout_session";
pub const USER_DATA_COOKIE: &str = "user_data";

/// Two years.
const REMEMBER_FOR: Duration = Duration::days(730);

#[derive(Debug, Error)]
pub enum CookieError {
    #[error("not percent-encoded UTF-8: {0}")]
    Encoding(#[from] FromUtf8Error),
    #[error("not customer JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn session_id(jar: &CookieJar) -> Option<String> {
    jar.get(SESSION_COOKIE).map(|cookie| cookie.value().to_string())
}

pub fn session_cookie(id: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, id))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

pub fn forget_session() -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE).path("/").build()
}

/// Customer data saved by an earlier order, or empty fields.
pub fn remembered_customer(jar: &CookieJar) -> CustomerInfo {
    let Some(cookie) = jar.get(USER_DATA_COOKIE) else {
        return CustomerInfo::default();
    };
    decode_customer(cookie.value()).unwrap_or_else(|e| {
        warn!(error = %e, "Ignoring unreadable remembered customer data");
        CustomerInfo::default()
    })
}

pub fn remember_customer(customer: &CustomerInfo) -> Result<Cookie<'static>, serde_json::Error> {
    Ok(Cookie::build((USER_DATA_COOKIE, encode_customer(customer)?))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(REMEMBER_FOR)
        .build())
}

pub fn forget_customer() -> Cookie<'static> {
    Cookie::build(USER_DATA_COOKIE).path("/").build()
}

fn encode_customer(customer: &CustomerInfo) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(customer)?;
    Ok(urlencoding::encode(&json).into_owned())
}

fn decode_customer(value: &str) -> Result<CustomerInfo, CookieError> {
    let json = urlencoding::decode(value)?;
    Ok(serde_json::from_str(&json)?)
}
