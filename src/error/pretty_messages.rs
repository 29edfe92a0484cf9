//! Handles the display of pretty messages for errors.

use super::LoadError;

use serde_json::error::Category;

/* Public */

pub fn pretty_error_message(err: &LoadError) -> String {
    match err {
        LoadError::Io { source, .. } => {
            format!("Error occurred while reading input:\n    {}: {source}", err.origin())
        }
        LoadError::Json(json_err) => pretty_json_error_message(json_err),
        LoadError::Encode(json_err) => format!("Error occurred while writing tree:\n    {json_err}"),
    }
}

/* Private Helpers */

fn pretty_json_error_message(err: &serde_json::Error) -> String {
    let problem = match err.classify() {
        Category::Syntax => "Input is not valid JSON",
        Category::Data => "Input is JSON but does not describe a tree",
        Category::Eof => "Ran out of input, expected more",
        Category::Io => "Input could not be read",
    };

    format!(
        "Error occurred while loading tree:\
        \n    {problem} (line {}, column {}).\
        \n    {err}",
        err.line(),
        err.column(),
    )
}
