//! Conversion of ISO-8601 timestamps into HTTP-date header values.

use chrono::NaiveDateTime;

use super::error::GithubError;

const ISO_8601_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Converts `YYYY-MM-DDTHH:MM:SSZ` to the RFC-1123 form used by
/// `If-Modified-Since`.
///
/// # Errors
///
/// Returns [`GithubError::InvalidDateTimeFormat`] carrying the input when it
/// does not match the expected layout or names an impossible date.
///
/// # Example
///
/// ```
/// use githon::github::to_http_date;
///
/// let header = to_http_date("2017-10-13T03:03:57Z").expect("valid timestamp");
/// assert_eq!(header, "Fri, 13 Oct 2017 03:03:57 GMT");
/// ```
pub fn to_http_date(iso8601: &str) -> Result<String, GithubError> {
    let parsed = NaiveDateTime::parse_from_str(iso8601, ISO_8601_FORMAT).map_err(|_| {
        GithubError::InvalidDateTimeFormat {
            value: iso8601.to_owned(),
        }
    })?;

    Ok(parsed.and_utc().format(HTTP_DATE_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, NaiveDateTime};
    use rstest::rstest;

    use super::to_http_date;
    use crate::github::error::GithubError;

    #[rstest]
    #[case("2017-10-13T03:03:57Z", "Fri, 13 Oct 2017 03:03:57 GMT")]
    #[case("2000-01-01T00:00:00Z", "Sat, 01 Jan 2000 00:00:00 GMT")]
    #[case("2024-02-29T23:59:59Z", "Thu, 29 Feb 2024 23:59:59 GMT")]
    fn converts_iso_timestamps(#[case] input: &str, #[case] expected: &str) {
        let converted = to_http_date(input).expect("timestamp should convert");
        assert_eq!(converted, expected);
    }

    #[rstest]
    #[case::empty("")]
    #[case::date_only("2017-10-13")]
    #[case::missing_zone("2017-10-13T03:03:57")]
    #[case::offset_instead_of_z("2017-10-13T03:03:57+02:00")]
    #[case::impossible_day("2017-02-30T03:03:57Z")]
    #[case::garbage("yesterday")]
    fn rejects_malformed_input(#[case] input: &str) {
        let result = to_http_date(input);
        assert_eq!(
            result,
            Err(GithubError::InvalidDateTimeFormat {
                value: input.to_owned()
            }),
            "expected InvalidDateTimeFormat for {input:?}"
        );
    }

    #[rstest]
    #[case("2017-10-13T03:03:57Z")]
    #[case("1999-12-31T23:59:59Z")]
    #[case("2038-01-19T03:14:08Z")]
    fn output_parses_back_to_same_instant(#[case] input: &str) {
        let header = to_http_date(input).expect("timestamp should convert");
        let reparsed =
            DateTime::parse_from_rfc2822(&header).expect("header should be a valid HTTP date");
        let original = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%SZ")
            .expect("input should parse")
            .and_utc();

        assert_eq!(reparsed, original);
        assert_eq!(to_http_date(input).ok(), Some(header), "must be deterministic");
    }
}
