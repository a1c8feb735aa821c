//! Shared key generation for storage backends.
//!
//! Key format: `uploads/{user_id}/{unix_millis}_{sanitized_filename}`. The owner id
//! namespaces every object, and the millisecond timestamp keeps keys unique per user.

use chrono::Utc;
use uuid::Uuid;

/// Build the storage key for a new upload owned by `user_id`.
pub fn build_storage_key(user_id: Uuid, file_name: &str) -> String {
    format!(
        "uploads/{}/{}_{}",
        user_id,
        Utc::now().timestamp_millis(),
        sanitize_file_name(file_name)
    )
}

/// Normalize a client-supplied filename for use inside a storage key.
///
/// Whitespace runs collapse to `_` and path separators are stripped. Dot runs
/// collapse to a single `.` so the result can never contain `..`, which every
/// backend rejects as traversal.
pub fn sanitize_file_name(file_name: &str) -> String {
    let cleaned: String = file_name
        .chars()
        .map(|c| {
            if c.is_whitespace() || c == '/' || c == '\\' {
                '_'
            } else {
                c
            }
        })
        .collect();

    let mut deduped = String::with_capacity(cleaned.len());
    let mut prev_dot = false;
    for c in cleaned.chars() {
        if c == '.' {
            if prev_dot {
                continue;
            }
            prev_dot = true;
        } else {
            prev_dot = false;
        }
        deduped.push(c);
    }

    let collapsed = deduped
        .split('_')
        .filter(|part| !part.is_empty() && *part != "." && *part != "..")
        .collect::<Vec<_>>()
        .join("_");

    if collapsed.is_empty() {
        "file".to_string()
    } else {
        collapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_collapses_whitespace() {
        assert_eq!(sanitize_file_name("my   report.pdf"), "my_report.pdf");
        assert_eq!(sanitize_file_name("notes\t2024 final.txt"), "notes_2024_final.txt");
    }

    #[test]
    fn test_sanitize_strips_path_separators() {
        assert_eq!(sanitize_file_name("a/b/c.txt"), "a_b_c.txt");
        assert_eq!(sanitize_file_name("..\\evil.sh"), "evil.sh");
        assert_eq!(sanitize_file_name("../../etc/passwd"), "etc_passwd");
    }

    #[test]
    fn test_sanitize_collapses_interior_dot_runs() {
        assert_eq!(sanitize_file_name("report..pdf"), "report.pdf");
        assert_eq!(sanitize_file_name("archive...tar.gz"), "archive.tar.gz");

        let key = build_storage_key(Uuid::new_v4(), "report..pdf");
        assert!(!key.contains(".."));
        assert!(key.ends_with("_report.pdf"));
    }

    #[test]
    fn test_sanitize_never_returns_empty() {
        assert_eq!(sanitize_file_name("   "), "file");
        assert_eq!(sanitize_file_name("//"), "file");
    }

    #[test]
    fn test_build_storage_key_shape() {
        let user_id = Uuid::new_v4();
        let key = build_storage_key(user_id, "report final.pdf");
        let prefix = format!("uploads/{}/", user_id);
        assert!(key.starts_with(&prefix));
        assert!(key.ends_with("_report_final.pdf"));
        assert!(!key.contains(".."));

        let millis: &str = key[prefix.len()..]
            .split('_')
            .next()
            .expect("timestamp segment");
        assert!(millis.parse::<i64>().is_ok());
    }
}
