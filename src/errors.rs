use std::path::Path;

/// Map catalogue loading errors to user-friendly messages
/// Returns (title, details)
pub fn map_catalogue_load_error(error: &dyn std::error::Error, path: &Path) -> (String, String) {
    let error_string = error.to_string();

    if error_string.contains("Schema validation failed") {
        (
            "Schema Error".to_string(),
            format!(
                "The catalogue file does not match the expected document shape.\n{}",
                error_string
            ),
        )
    } else if error_string.contains("Validation failed") {
        (
            "Validation Error".to_string(),
            format!("The catalogue file has validation errors.\n{}", error_string),
        )
    } else if error_string.contains("No such file") {
        (
            "File Not Found".to_string(),
            format!(
                "The file could not be found.\nPath: {}\n\nPlease verify the file exists and you have permission to read it.",
                path.display()
            ),
        )
    } else if error_string.contains("Permission denied") {
        (
            "Permission Denied".to_string(),
            format!(
                "You don't have permission to read this file:\n{}",
                path.display()
            ),
        )
    } else {
        ("Error Loading Catalogue".to_string(), error_string)
    }
}
