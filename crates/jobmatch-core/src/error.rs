//! Error types for the jobmatch-core library.
//!
//! Profile extraction and match scoring are total and never produce these
//! errors. Only the edges that touch bytes or files do.

use thiserror::Error;

/// Main error type for the jobmatch library.
#[derive(Error, Debug)]
pub enum JobmatchError {
    /// Document decoding error.
    #[error("document error: {0}")]
    Document(#[from] DocumentError),

    /// Posting source error.
    #[error("posting error: {0}")]
    Posting(#[from] PostingError),

    /// Draft generation or export error.
    #[error("outreach error: {0}")]
    Outreach(#[from] OutreachError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to turning document bytes into text.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// File extension is not a supported document type.
    #[error("unsupported document format: {0}")]
    UnsupportedFormat(String),
}

/// Errors related to loading job postings.
#[derive(Error, Debug)]
pub enum PostingError {
    /// The postings file could not be read.
    #[error("failed to read postings from {path}: {reason}")]
    Read { path: String, reason: String },

    /// The postings file is not a JSON array of postings.
    #[error("invalid postings data: {0}")]
    Invalid(String),
}

/// Errors related to drafting and exporting outreach emails.
#[derive(Error, Debug)]
pub enum OutreachError {
    /// A draft could not be produced for a posting.
    #[error("failed to draft email for {company}: {reason}")]
    Draft { company: String, reason: String },

    /// Drafts could not be written.
    #[error("failed to export drafts: {0}")]
    Export(String),
}

/// Result type for the jobmatch library.
pub type Result<T> = std::result::Result<T, JobmatchError>;
