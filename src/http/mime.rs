/// Maps a file name to a Content-Type based on its extension.
///
/// Matching is case-insensitive. Unknown extensions fall back to text/plain.
pub fn content_type_for(file_name: &str) -> &'static str {
    let lower = file_name.to_lowercase();

    if lower.ends_with(".css") {
        "text/css"
    } else if lower.ends_with(".js") {
        "application/javascript"
    } else if lower.ends_with(".html") || lower.ends_with(".htm") {
        "text/html"
    } else if lower.ends_with(".json") {
        "application/json"
    } else if lower.ends_with(".png") {
        "image/png"
    } else if lower.ends_with(".jpg") || lower.ends_with(".jpeg") {
        "image/jpeg"
    } else {
        "text/plain"
    }
}
