//! The boundary to the `mail-parser` collaborator: parse a raw message and
//! enumerate its attachments.
//!
//! MIME decoding itself (multipart descent, base64/quoted-printable,
//! charsets) is entirely `mail-parser`'s job; this module only maps its
//! output onto [`AttachmentRecord`]s.

use mail_parser::{Message, MessageParser, MimeHeaders};

use crate::model::attachment::AttachmentRecord;

/// Parse a raw EML message.
///
/// Returns `None` when `mail-parser` cannot make sense of the bytes; the
/// caller turns that into a recoverable per-file parse error.
pub fn parse(raw: &[u8]) -> Option<Message<'_>> {
    MessageParser::default().parse(raw)
}

/// Enumerate the attachments of a parsed message, lazily.
///
/// The sequence is finite and single-pass: each message is enumerated
/// exactly once per run. Attachments that are themselves email messages
/// (`message/rfc822`) are flagged but not descended into.
pub fn enumerate_attachments<'a>(
    msg: &'a Message<'a>,
) -> impl Iterator<Item = AttachmentRecord> + 'a {
    msg.attachments().enumerate().map(|(idx, part)| {
        let filename = part
            .attachment_name()
            .map(String::from)
            .unwrap_or_else(|| format!("attachment_{idx}"));

        let content_type = part
            .content_type()
            .map(|ct: &mail_parser::ContentType| {
                let main = ct.ctype();
                match ct.subtype() {
                    Some(sub) => format!("{main}/{sub}"),
                    None => main.to_string(),
                }
            })
            .unwrap_or_else(|| "application/octet-stream".to_string());

        AttachmentRecord {
            payload: part.contents().to_vec(),
            filename,
            content_type,
            is_nested_message: part.is_message(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MULTIPART: &str = "From: alice@example.com\r\n\
To: bob@example.com\r\n\
Subject: quarterly numbers\r\n\
MIME-Version: 1.0\r\n\
Content-Type: multipart/mixed; boundary=\"sep\"\r\n\
\r\n\
--sep\r\n\
Content-Type: text/plain; charset=utf-8\r\n\
\r\n\
See attached.\r\n\
--sep\r\n\
Content-Type: text/csv; name=\"data.csv\"\r\n\
Content-Disposition: attachment; filename=\"data.csv\"\r\n\
Content-Transfer-Encoding: base64\r\n\
\r\n\
YSxiLGMKMSwyLDMK\r\n\
--sep--\r\n";

    const NESTED: &str = "From: carol@example.com\r\n\
To: dave@example.com\r\n\
Subject: Fwd: see below\r\n\
MIME-Version: 1.0\r\n\
Content-Type: multipart/mixed; boundary=\"outer\"\r\n\
\r\n\
--outer\r\n\
Content-Type: text/plain\r\n\
\r\n\
Forwarding.\r\n\
--outer\r\n\
Content-Type: message/rfc822\r\n\
Content-Disposition: attachment; filename=\"forwarded.eml\"\r\n\
\r\n\
From: erin@example.com\r\n\
Subject: Original\r\n\
\r\n\
Original body.\r\n\
--outer--\r\n";

    #[test]
    fn test_parse_and_enumerate_single_attachment() {
        let msg = parse(MULTIPART.as_bytes()).expect("parse");
        let records: Vec<AttachmentRecord> = enumerate_attachments(&msg).collect();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].filename, "data.csv");
        assert_eq!(records[0].content_type, "text/csv");
        assert_eq!(records[0].payload, b"a,b,c\n1,2,3\n");
        assert!(!records[0].is_nested_message);
    }

    #[test]
    fn test_message_without_attachments_enumerates_empty() {
        let msg = parse(b"From: a@b.com\r\nSubject: hi\r\n\r\nJust text.\r\n").expect("parse");
        assert_eq!(enumerate_attachments(&msg).count(), 0);
    }

    #[test]
    fn test_nested_message_is_flagged_not_recursed() {
        let msg = parse(NESTED.as_bytes()).expect("parse");
        let records: Vec<AttachmentRecord> = enumerate_attachments(&msg).collect();
        assert_eq!(records.len(), 1, "only the rfc822 part, nothing from inside it");
        assert_eq!(records[0].filename, "forwarded.eml");
        assert!(records[0].is_nested_message);
        let text = String::from_utf8_lossy(&records[0].payload);
        assert!(text.contains("Subject: Original"));
    }

    #[test]
    fn test_unnamed_attachment_gets_generated_filename() {
        let raw = "From: a@b.com\r\n\
MIME-Version: 1.0\r\n\
Content-Type: multipart/mixed; boundary=\"x\"\r\n\
\r\n\
--x\r\n\
Content-Type: application/octet-stream\r\n\
Content-Disposition: attachment\r\n\
Content-Transfer-Encoding: base64\r\n\
\r\n\
Zmlyc3QgdmVyc2lvbgo=\r\n\
--x--\r\n";
        let msg = parse(raw.as_bytes()).expect("parse");
        let records: Vec<AttachmentRecord> = enumerate_attachments(&msg).collect();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].filename, "attachment_0");
    }
}
