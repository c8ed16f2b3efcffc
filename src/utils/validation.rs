use crate::error::{AppError, Result};
use crate::models::bookmark::{CreateBookmarkRequest, NewBookmark, UpdateBookmarkRequest};
use serde_json::Value;
use tracing::error;
use url::Url;

pub const RATING_REQUIRED: &str = "rating is required";
pub const RATING_OUT_OF_RANGE: &str = "rating must be a number between 0 and 5";
pub const TITLE_REQUIRED: &str = "title is required";
pub const URL_INVALID: &str = "url must be a valid url";
pub const DESCRIPTION_REQUIRED: &str = "description is required";

/// Ratings are integers in `[MIN_RATING, MAX_RATING)`.
pub const MIN_RATING: i64 = 0;
pub const MAX_RATING: i64 = 5;

/// 校验并规范化新书签；按固定顺序检查，第一个失败的字段决定错误信息
pub fn validate_new_bookmark(request: CreateBookmarkRequest) -> Result<NewBookmark> {
    let rating = validate_rating(request.rating.as_ref())?;

    let title = match non_empty_string(request.title.as_ref()) {
        Some(title) => title,
        None => {
            error!("Title {} is not valid", describe_value(request.title.as_ref()));
            return Err(AppError::validation(TITLE_REQUIRED));
        }
    };

    let url = match request.url.as_ref().and_then(Value::as_str) {
        Some(url) if is_web_uri(url) => url.to_string(),
        _ => {
            error!("Invalid url {} supplied", describe_value(request.url.as_ref()));
            return Err(AppError::validation(URL_INVALID));
        }
    };

    let description = validate_description(request.description.as_ref())?;

    Ok(NewBookmark {
        title,
        url,
        description,
        rating,
    })
}

/// 校验 PATCH 请求，只读取 description
pub fn validate_update(request: UpdateBookmarkRequest) -> Result<String> {
    validate_description(request.description.as_ref())
}

fn validate_rating(value: Option<&Value>) -> Result<i32> {
    if is_absent(value) {
        error!("Rating is required");
        return Err(AppError::validation(RATING_REQUIRED));
    }

    match value.and_then(coerce_integer) {
        Some(rating) if (MIN_RATING..MAX_RATING).contains(&rating) => Ok(rating as i32),
        _ => {
            error!("Rating {} supplied is invalid", describe_value(value));
            Err(AppError::validation(RATING_OUT_OF_RANGE))
        }
    }
}

fn validate_description(value: Option<&Value>) -> Result<String> {
    non_empty_string(value).ok_or_else(|| {
        error!("Description {} is not valid", describe_value(value));
        AppError::validation(DESCRIPTION_REQUIRED)
    })
}

/// A rating is absent when missing, `null`, or an empty string. Zero is present.
fn is_absent(value: Option<&Value>) -> bool {
    match value {
        None => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

/// Integer coercion: integral JSON numbers (`3`, `3.0`, `1e0`) and strings
/// holding a base-10 integer.
fn coerce_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn non_empty_string(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// http/https URI with a host.
pub fn is_web_uri(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => {
            matches!(url.scheme(), "http" | "https")
                && url.host_str().map_or(false, |host| !host.is_empty())
        }
        Err(_) => false,
    }
}

fn describe_value(value: Option<&Value>) -> String {
    value.map_or_else(|| "undefined".to_string(), Value::to_string)
}
