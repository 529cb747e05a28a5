//! Attachment records produced by the MIME enumeration.

/// One attachment found in a parsed EML message.
///
/// The payload is already decoded by `mail-parser` (base64 and
/// quoted-printable transfer encodings resolved); the bytes here are what
/// gets written to disk verbatim.
#[derive(Debug, Clone)]
pub struct AttachmentRecord {
    /// Decoded payload bytes.
    pub payload: Vec<u8>,

    /// Filename of the attachment. Generated if missing from the headers.
    pub filename: String,

    /// MIME content type (e.g. `"image/jpeg"`, `"application/pdf"`).
    pub content_type: String,

    /// `true` if the attachment is itself an email message
    /// (`message/rfc822`). Reported to the operator but never recursed into.
    pub is_nested_message: bool,
}
