//! Parse HTTP response header lines into ResponseHead.

use super::ResponseHead;

/// Parse the header lines of the final response block into a ResponseHead.
pub(crate) fn parse_head(lines: &[String]) -> ResponseHead {
    let mut status_code = 0;
    let mut reason = String::new();
    let mut content_length = None;
    let mut content_type = None;

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            let mut parts = line.splitn(3, ' ');
            let _version = parts.next();
            status_code = parts
                .next()
                .and_then(|c| c.trim().parse::<u32>().ok())
                .unwrap_or(0);
            reason = parts.next().unwrap_or("").trim().to_string();
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim();
            let value = value.trim();
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.parse::<u64>().ok();
            }
            if name.eq_ignore_ascii_case("content-type") {
                content_type = Some(value.to_string());
            }
        }
    }

    // HTTP/2 status lines carry no reason phrase.
    if reason.is_empty() {
        reason = canonical_reason(status_code).to_string();
    }

    ResponseHead {
        status_code,
        reason,
        content_length,
        content_type,
    }
}

fn canonical_reason(code: u32) -> &'static str {
    match code {
        200 => "OK",
        201 => "Created",
        204 => "No Content",
        206 => "Partial Content",
        301 => "Moved Permanently",
        302 => "Found",
        304 => "Not Modified",
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        _ => "",
    }
}
