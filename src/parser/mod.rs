//! MIME parsing: the `mail-parser` collaborator boundary.

pub mod mime;
