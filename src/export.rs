//! Plain-text export of a record
//!
//! Requests export as a five-section report. The layout is fixed: every
//! section header is written even when its body is empty, so the shared text
//! always has the same shape. Actions export as their uppercased type followed
//! by the indented payload.

use crate::record::LogRecord;
use crate::sections::{SectionFormatter, SectionKind};

/// Sections of a request report, in output order
pub const REPORT_SECTIONS: [SectionKind; 5] = [
    SectionKind::General,
    SectionKind::RequestHeaders,
    SectionKind::RequestData,
    SectionKind::ResponseHeaders,
    SectionKind::ResponseBody,
];

/// Assemble the shareable report for a request
///
/// Attribute arguments are already-formatted export blocks (see
/// [`SectionFormatter::export_rows`]); bodies are raw text.
pub fn compose_report(
    general: &str,
    request_headers: &str,
    request_body: &str,
    response_headers: &str,
    response_body: &str,
) -> String {
    let bodies = [
        general,
        request_headers,
        request_body,
        response_headers,
        response_body,
    ];

    let mut report = String::new();
    for (index, (kind, body)) in REPORT_SECTIONS.iter().zip(bodies).enumerate() {
        if index > 0 {
            report.push('\n');
        }
        report.push_str(kind.title());
        report.push('\n');
        report.push_str(body);
    }
    report
}

/// Assemble the shareable text for an action: `<TYPE>\n<payload>`
pub fn compose_action_report(action_type: &str, payload: &str) -> String {
    format!("{}\n{}", action_type, payload)
}

/// Full export text for any record; `Unknown` exports nothing
pub fn export_record(formatter: &SectionFormatter, record: &LogRecord) -> String {
    match record {
        LogRecord::NetworkRequest(request) | LogRecord::BridgeNetworkRequest(request) => {
            compose_report(
                &formatter.export_rows(&request.attributes),
                &formatter.export_rows(&request.request_headers),
                &request.data_sent,
                &formatter.export_rows(&request.response_headers),
                &request.response,
            )
        }
        LogRecord::ReduxAction(action) => {
            compose_action_report(&action.type_upper(), &action.payload_pretty())
        }
        LogRecord::Unknown => String::new(),
    }
}

/// Single field a copy action can target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyField {
    /// The request URL row
    Url,
    /// Response body for requests, payload for actions
    Body,
    /// The whole export report
    Report,
}

/// Raw text a copy action would place on the clipboard
///
/// `None` when the record has nothing for that field (unknown record, empty
/// body, non-text url).
pub fn copy_text(
    formatter: &SectionFormatter,
    record: &LogRecord,
    field: CopyField,
) -> Option<String> {
    match (field, record) {
        (CopyField::Report, LogRecord::Unknown) => None,
        (CopyField::Report, _) => Some(export_record(formatter, record)),
        (CopyField::Url, _) => formatter
            .sections(record)
            .iter()
            .filter(|section| section.kind == SectionKind::General)
            .flat_map(|section| section.copy_targets())
            .find_map(|value| value.as_str().map(str::to_string)),
        (CopyField::Body, LogRecord::ReduxAction(action)) => Some(action.payload_pretty()),
        (CopyField::Body, _) => record
            .as_request()
            .filter(|request| request.has_response_body())
            .map(|request| request.response.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn split_sections(report: &str) -> Vec<(String, String)> {
        let titles: Vec<&str> = REPORT_SECTIONS.iter().map(|k| k.title()).collect();
        let mut sections: Vec<(String, String)> = Vec::new();
        for line in report.split('\n') {
            if titles.contains(&line) {
                sections.push((line.to_string(), String::new()));
            } else if let Some((_, body)) = sections.last_mut() {
                body.push_str(line);
                body.push('\n');
            }
        }
        sections
    }

    #[test]
    fn test_compose_report_exact_layout() {
        let report = compose_report("url: u\n", "Accept: */*\n", "a=1", "Server: x\n", "ok");
        assert_eq!(
            report,
            "GENERAL\nurl: u\n\nREQUEST HEADERS\nAccept: */*\n\nREQUEST DATA\na=1\n\
             RESPONSE HEADERS\nServer: x\n\nRESPONSE BODY\nok"
        );
    }

    #[test]
    fn test_compose_report_keeps_all_headers_when_empty() {
        let report = compose_report("", "", "", "", "");
        assert_eq!(
            report,
            "GENERAL\n\nREQUEST HEADERS\n\nREQUEST DATA\n\nRESPONSE HEADERS\n\nRESPONSE BODY\n"
        );

        let titles: Vec<String> = split_sections(&report).into_iter().map(|(t, _)| t).collect();
        assert_eq!(
            titles,
            vec![
                "GENERAL",
                "REQUEST HEADERS",
                "REQUEST DATA",
                "RESPONSE HEADERS",
                "RESPONSE BODY"
            ]
        );
    }

    #[test]
    fn test_report_sections_round_trip() {
        let report = compose_report("a: 1\n", "b: 2\n", "c=3", "d: 4\n", "e");
        let sections = split_sections(&report);
        assert_eq!(sections.len(), 5);
        assert!(sections[0].1.starts_with("a: 1"));
        assert!(sections[1].1.starts_with("b: 2"));
        assert!(sections[2].1.starts_with("c=3"));
        assert!(sections[3].1.starts_with("d: 4"));
        assert!(sections[4].1.starts_with('e'));
    }

    #[test]
    fn test_compose_action_report() {
        let payload = serde_json::to_string_pretty(&json!({ "id": 1 })).unwrap();
        assert_eq!(
            compose_action_report("GET_USER", &payload),
            "GET_USER\n{\n  \"id\": 1\n}"
        );
    }

    #[test]
    fn test_export_request_record() {
        let record = LogRecord::classify(&json!({
            "_id": 1,
            "method": "GET",
            "url": "https://example.com",
            "status": 200,
            "dataSent": "",
            "response": "pong",
            "requestHeaders": { "Accept": "*/*", "method": "GET" },
            "responseHeaders": {}
        }));
        let text = export_record(&SectionFormatter::default(), &record);
        assert_eq!(
            text,
            "GENERAL\nurl: https://example.com\n\nREQUEST HEADERS\nAccept: */*\n\n\
             REQUEST DATA\n\nRESPONSE HEADERS\n\nRESPONSE BODY\npong"
        );
    }

    #[test]
    fn test_export_action_record() {
        let record = LogRecord::classify(&json!({
            "action": { "type": "get_user", "payload": { "id": 1 } }
        }));
        assert_eq!(
            export_record(&SectionFormatter::default(), &record),
            "GET_USER\n{\n  \"id\": 1\n}"
        );
    }

    #[test]
    fn test_export_unknown_is_empty() {
        assert_eq!(
            export_record(&SectionFormatter::default(), &LogRecord::Unknown),
            ""
        );
    }

    #[test]
    fn test_copy_url_is_raw_value() {
        let url = "https://example.com/search?q=a b&x=%20";
        let record = LogRecord::classify(&json!({ "method": "GET", "url": url }));
        let formatter = SectionFormatter::default();
        assert_eq!(
            copy_text(&formatter, &record, CopyField::Url).as_deref(),
            Some(url)
        );
    }

    #[test]
    fn test_copy_body() {
        let formatter = SectionFormatter::default();
        let request = LogRecord::classify(&json!({ "method": "GET", "url": "u", "response": "" }));
        assert_eq!(copy_text(&formatter, &request, CopyField::Body), None);

        let action = LogRecord::classify(&json!({ "action": { "type": "X", "payload": [1] } }));
        assert_eq!(
            copy_text(&formatter, &action, CopyField::Body).as_deref(),
            Some("[\n  1\n]")
        );
    }

    #[test]
    fn test_copy_on_unknown_is_none() {
        let formatter = SectionFormatter::default();
        for field in [CopyField::Url, CopyField::Body, CopyField::Report] {
            assert_eq!(copy_text(&formatter, &LogRecord::Unknown, field), None);
        }
    }
}
