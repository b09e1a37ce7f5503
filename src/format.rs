//! Named string formats. Unknown names are accepted silently so that schema
//! authors can use formats this engine does not know about.
use chrono::{DateTime, NaiveDate};
use regex::Regex;
use std::net::IpAddr;
use std::str::FromStr;
use url::Url;

lazy_static! {
    static ref JSON_POINTER_RE: Regex = Regex::new(r"^(/(([^/~])|(~[01]))*)*\z").unwrap();
    static ref RELATIVE_JSON_POINTER_RE: Regex =
        Regex::new(r"^(?:0|[1-9][0-9]*)(?:#|(?:/(?:[^~/]|~0|~1)*)*)\z").unwrap();
    static ref TIME_RE: Regex =
        Regex::new(
        r"^([01][0-9]|2[0-3]):([0-5][0-9]):([0-5][0-9])(\.[0-9]{6})?(([Zz])|([+|\-]([01][0-9]|2[0-3]):[0-5][0-9]))\z",
    ).unwrap();
    static ref URI_REFERENCE_RE: Regex =
        Regex::new(r"^(\w+:(/?/?))?[^#\\\s]*(#[^\\\s]*)?\z").unwrap();
    static ref UUID_RE: Regex = Regex::new(
        r"^(?i)[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}\z"
    )
    .unwrap();
}

/// Look up `format` in the table and test `instance` against it.
/// `None` means the format name is not in the table.
pub(crate) fn check(format: &str, instance: &str) -> Option<bool> {
    let matched = match format {
        "date" => date(instance),
        "date-time" => datetime(instance),
        "time" => time(instance),
        "email" => email(instance),
        "hostname" => hostname(instance),
        "ipv4" => ipv4(instance),
        "ipv6" => ipv6(instance),
        "uri" | "url" => uri(instance),
        "uri-reference" => uri_reference(instance),
        "uuid" => uuid(instance),
        "json-pointer" => json_pointer(instance),
        "relative-json-pointer" => relative_json_pointer(instance),
        _ => return None,
    };
    Some(matched)
}

fn date(instance: &str) -> bool {
    NaiveDate::parse_from_str(instance, "%Y-%m-%d").is_ok()
}

fn datetime(instance: &str) -> bool {
    DateTime::parse_from_rfc3339(instance).is_ok()
}

fn time(instance: &str) -> bool {
    TIME_RE.is_match(instance)
}

fn email(instance: &str) -> bool {
    instance.contains('@')
}

fn hostname(instance: &str) -> bool {
    !(instance.ends_with('-')
        || instance.starts_with('-')
        || instance.is_empty()
        || instance.chars().count() > 255
        || instance
            .chars()
            .any(|c| !(c.is_alphanumeric() || c == '-' || c == '.'))
        || instance.split('.').any(|part| part.chars().count() > 63))
}

fn ipv4(instance: &str) -> bool {
    match IpAddr::from_str(instance) {
        Ok(IpAddr::V4(_)) => true,
        _ => false,
    }
}

fn ipv6(instance: &str) -> bool {
    match IpAddr::from_str(instance) {
        Ok(IpAddr::V6(_)) => true,
        _ => false,
    }
}

fn uri(instance: &str) -> bool {
    Url::from_str(instance).is_ok()
}

fn uri_reference(instance: &str) -> bool {
    URI_REFERENCE_RE.is_match(instance)
}

fn uuid(instance: &str) -> bool {
    UUID_RE.is_match(instance)
}

fn json_pointer(instance: &str) -> bool {
    JSON_POINTER_RE.is_match(instance)
}

fn relative_json_pointer(instance: &str) -> bool {
    RELATIVE_JSON_POINTER_RE.is_match(instance)
}
