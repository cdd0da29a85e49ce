//! SVG output.

use std::{fs::File, io::Write, path::Path};

use log::{error, info};
use svg::Document;

use crate::error::MemvizError;

/// Serializes a document to SVG text.
pub fn document_to_string(document: &Document) -> String {
    document.to_string()
}

/// Writes a document to the given path.
pub fn write_document(document: &Document, path: impl AsRef<Path>) -> Result<(), MemvizError> {
    let path = path.as_ref();
    info!(path = path.display().to_string(); "Writing SVG file");

    let file = match File::create(path) {
        Ok(file) => file,
        Err(err) => {
            error!(path = path.display().to_string(), err:err; "Failed to create SVG file");
            return Err(MemvizError::Io(err));
        }
    };

    if let Err(err) = write!(&file, "{document}") {
        error!(path = path.display().to_string(), err:err; "Failed to write SVG content");
        return Err(MemvizError::Io(err));
    }

    Ok(())
}
