//! Source directory discovery rules
//!
//! Operates on plain file names so the rules stay independent of the file
//! system. Every selection is made in sorted filename order; that order is
//! what the screenshot sequence numbers follow.

/// Image extensions accepted by default (lowercase, no dot)
pub const DEFAULT_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "tga", "bmp"];

/// Text file that is never treated as the map description
const README: &str = "readme.txt";

fn extension_lower(file_name: &str) -> Option<String> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

fn sorted<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    let mut names: Vec<&str> = names.into_iter().collect();
    names.sort_unstable();
    names
}

/// Image files, sorted by name. `extensions` are compared case-insensitively.
pub fn select_images<'a, S: AsRef<str>>(file_names: &[&'a str], extensions: &[S]) -> Vec<&'a str> {
    sorted(file_names.iter().copied().filter(|name| {
        extension_lower(name).is_some_and(|ext| {
            extensions
                .iter()
                .any(|allowed| allowed.as_ref().eq_ignore_ascii_case(&ext))
        })
    }))
}

/// First `.svg` file by name
pub fn select_icon<'a>(file_names: &[&'a str]) -> Option<&'a str> {
    sorted(
        file_names
            .iter()
            .copied()
            .filter(|name| extension_lower(name).as_deref() == Some("svg")),
    )
    .into_iter()
    .next()
}

/// First `.txt` file by name, skipping `readme.txt`
pub fn select_map_info<'a>(file_names: &[&'a str]) -> Option<&'a str> {
    sorted(file_names.iter().copied().filter(|name| {
        extension_lower(name).as_deref() == Some("txt") && !name.eq_ignore_ascii_case(README)
    }))
    .into_iter()
    .next()
}
