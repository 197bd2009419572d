//! HMAC request signing for the PTX/TDX open-data gateway.
//!
//! The gateway authenticates a request by re-computing an HMAC-SHA1 over the
//! literal string `x-date: <date>` with the caller's application key and
//! comparing it against the `signature` field of the `Authorization` header.
//! The signature proves possession of the key without transmitting it.

use base64::{Engine, prelude::BASE64_STANDARD};
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::config::Credentials;

type HmacSha1 = Hmac<Sha1>;

/// GMT date shape the gateway expects, e.g. `Tue, 17 Jan 2023 08:15:00 GMT`.
const X_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// The two headers that authenticate a gateway request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthHeader {
    pub authorization: String,
    pub x_date: String,
}

/// Sign `now` with the application key. Pure function of its inputs; key
/// validity is enforced upstream by [`Credentials`].
pub fn auth_header(credentials: &Credentials, now: DateTime<Utc>) -> AuthHeader {
    let x_date = now.format(X_DATE_FORMAT).to_string();

    let mut mac = HmacSha1::new_from_slice(credentials.app_key.as_bytes())
        .expect("HMAC-SHA1 accepts keys of any length");
    mac.update(format!("x-date: {x_date}").as_bytes());
    let signature = BASE64_STANDARD.encode(mac.finalize().into_bytes());

    let authorization = format!(
        "hmac username=\"{}\", algorithm=\"hmac-sha1\", headers=\"x-date\", signature=\"{signature}\"",
        credentials.app_id,
    );

    AuthHeader { authorization, x_date }
}
