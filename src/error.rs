use std::path::PathBuf;
use thiserror::Error;

use crate::ir::ImageId;

/// The main error type for vocstudio operations.
#[derive(Debug, Error)]
pub enum VocStudioError {
    #[error("Failed to list input directory {path}: {source}")]
    InputDirectory {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// The file is missing, unreadable, or not well-formed XML.
    #[error("Failed to parse VOC XML from {path}: {message}")]
    VocXmlParse { path: PathBuf, message: String },

    /// A node every VOC annotation must carry is absent.
    #[error("Missing <{node}> in {context} of {path}")]
    VocMissingNode {
        path: PathBuf,
        node: String,
        context: String,
    },

    #[error("Invalid <{node}> value '{value}' in {path}; expected {expected}")]
    VocInvalidValue {
        path: PathBuf,
        node: String,
        value: String,
        expected: &'static str,
    },

    #[error("Image '{file_name}' (image id {image_id}) has zero width/height; cannot convert boxes to percentages")]
    ZeroImageSize { image_id: ImageId, file_name: String },

    #[error("Failed to write Label Studio JSON to {path}: {source}")]
    LabelStudioJsonWrite {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write Label Studio JSON to {path}: {source}")]
    LabelStudioJsonIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write label config to {path}: {source}")]
    LabelConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
