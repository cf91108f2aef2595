//! Tests for output writers (delimited, JSONL)

use chatlog_csv::ChatlogError;
use chatlog_csv::Record;
use chatlog_csv::config::{CollisionPolicy, OutputConfig};
use chatlog_csv::core::output::{to_delimited, write_delimited};
use std::fs;
use tempfile::tempdir;

fn sample_records() -> Vec<Record> {
    vec![
        Record::new("Alice", "15-Jan-24 10:00 AM", "Hello  Bob !").with_line(12),
        Record::new("Alice", "15-Jan-24 10:00 AM", "$IMAGE$").with_line(20),
        Record::new("Bob", "15-Jan-24 10:05 AM", "$LINK$").with_line(31),
        Record::new("Bob", "15-Jan-24 10:06 AM", "I'm  $EMOJI$ ").with_line(40),
    ]
}

// ============================================================================
// Delimited Writer Tests
// ============================================================================

mod delimited_writer_tests {
    use super::*;

    #[test]
    fn test_write_delimited_basic() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chat.csv");

        write_delimited(&sample_records(), &path, &OutputConfig::new()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "Alice|_|15-Jan-24 10:00 AM|_|Hello  Bob !\n\
             Alice|_|15-Jan-24 10:00 AM|_|$IMAGE$\n\
             Bob|_|15-Jan-24 10:05 AM|_|$LINK$\n\
             Bob|_|15-Jan-24 10:06 AM|_|I'm  $EMOJI$ \n"
        );
    }

    #[test]
    fn test_no_header_row() {
        let text = to_delimited(&sample_records(), &OutputConfig::new()).unwrap();
        assert!(text.starts_with("Alice|_|"));
        assert!(!text.to_lowercase().contains("author|_|timestamp"));
    }

    #[test]
    fn test_trailing_whitespace_preserved() {
        let text = to_delimited(&sample_records(), &OutputConfig::new()).unwrap();
        assert!(text.lines().last().unwrap().ends_with("$EMOJI$ "));
    }

    #[test]
    fn test_write_delimited_empty_records() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chat.csv");

        write_delimited(&[], &path, &OutputConfig::new()).unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_write_delimited_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chat.csv");
        fs::write(&path, "old|_|old|_|old\nmore|_|old|_|rows\n").unwrap();

        let records = vec![Record::new("Alice", "10:00 AM", "new")];
        write_delimited(&records, &path, &OutputConfig::new()).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Alice|_|10:00 AM|_|new\n"
        );
    }

    #[test]
    fn test_write_delimited_no_temp_files_left() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chat.csv");

        write_delimited(&sample_records(), &path, &OutputConfig::new()).unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_write_delimited_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("chat.csv");

        let err = write_delimited(&sample_records(), &path, &OutputConfig::new()).unwrap_err();

        assert!(err.is_io());
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_write_delimited_unicode() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chat.csv");
        let records = vec![
            Record::new("Иван", "10:00", "Привет мир! 🎉"),
            Record::new("田中", "10:01", "こんにちは"),
        ];

        write_delimited(&records, &path, &OutputConfig::new()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("Иван|_|10:00|_|Привет мир! 🎉"));
        assert!(content.contains("田中|_|10:01|_|こんにちは"));
    }

    #[test]
    fn test_custom_delimiter() {
        let config = OutputConfig::new().with_delimiter("\t");
        let records = vec![Record::new("Alice", "10:00 AM", "Hi")];
        assert_eq!(
            to_delimited(&records, &config).unwrap(),
            "Alice\t10:00 AM\tHi\n"
        );
    }

    #[test]
    fn test_field_count_constant() {
        let text = to_delimited(&sample_records(), &OutputConfig::new()).unwrap();
        for line in text.lines() {
            assert_eq!(line.split("|_|").count(), 3, "bad row: {line}");
        }
    }
}

// ============================================================================
// Delimiter Collision Tests
// ============================================================================

mod collision_tests {
    use super::*;

    fn colliding() -> Vec<Record> {
        vec![Record::new("Alice", "10:00 AM", "pipes |_| inside").with_line(7)]
    }

    #[test]
    fn test_escape_is_default() {
        let text = to_delimited(&colliding(), &OutputConfig::new()).unwrap();
        assert_eq!(text, "Alice|_|10:00 AM|_|pipes |\\_| inside\n");
        assert_eq!(text.trim_end().split("|_|").count(), 3);
    }

    #[test]
    fn test_escape_in_author() {
        let records = vec![Record::new("a|_|b", "t", "m")];
        let text = to_delimited(&records, &OutputConfig::new()).unwrap();
        assert_eq!(text, "a|\\_|b|_|t|_|m\n");
    }

    #[test]
    fn test_escape_single_char_delimiter() {
        let config = OutputConfig::new().with_delimiter(";");
        let records = vec![Record::new("Alice", "10:00", "a;b")];
        assert_eq!(
            to_delimited(&records, &config).unwrap(),
            "Alice;10:00;a\\u{3b}b\n"
        );
    }

    #[test]
    fn test_reject_policy() {
        let config = OutputConfig::new().with_collision(CollisionPolicy::Reject);
        let err = to_delimited(&colliding(), &config).unwrap_err();

        match err {
            ChatlogError::DelimiterCollision {
                line, delimiter, ..
            } => {
                assert_eq!(line, 7);
                assert_eq!(delimiter, "|_|");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_reject_leaves_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chat.csv");
        fs::write(&path, "previous\n").unwrap();

        let config = OutputConfig::new().with_collision(CollisionPolicy::Reject);
        assert!(write_delimited(&colliding(), &path, &config).is_err());

        assert_eq!(fs::read_to_string(&path).unwrap(), "previous\n");
    }

    #[test]
    fn test_ignore_policy_writes_verbatim() {
        let config = OutputConfig::new().with_collision(CollisionPolicy::Ignore);
        let text = to_delimited(&colliding(), &config).unwrap();
        assert_eq!(text, "Alice|_|10:00 AM|_|pipes |_| inside\n");
    }

    #[test]
    fn test_no_collision_untouched() {
        let config = OutputConfig::new().with_collision(CollisionPolicy::Reject);
        let records = vec![Record::new("Alice", "10:00 AM", "pipe | and _ apart")];
        assert_eq!(
            to_delimited(&records, &config).unwrap(),
            "Alice|_|10:00 AM|_|pipe | and _ apart\n"
        );
    }
}

// ============================================================================
// JSONL Writer Tests
// ============================================================================

#[cfg(feature = "json-output")]
mod jsonl_writer_tests {
    use super::*;
    use chatlog_csv::core::output::{to_jsonl, write_jsonl};

    #[test]
    fn test_write_jsonl_basic() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chat.jsonl");

        write_jsonl(&sample_records(), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 4);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["author"], "Alice");
        assert_eq!(first["timestamp"], "15-Jan-24 10:00 AM");
        assert_eq!(first["body"], "Hello  Bob !");
        assert_eq!(first["kind"], "text");
        assert_eq!(first["line"], 12);
    }

    #[test]
    fn test_jsonl_kinds() {
        let jsonl = to_jsonl(&sample_records()).unwrap();
        let kinds: Vec<String> = jsonl
            .lines()
            .map(|line| {
                let value: serde_json::Value = serde_json::from_str(line).unwrap();
                value["kind"].as_str().unwrap().to_string()
            })
            .collect();
        assert_eq!(kinds, vec!["text", "image", "link", "text"]);
    }

    #[test]
    fn test_jsonl_keeps_delimiter_verbatim() {
        let records = vec![Record::new("Alice", "10:00 AM", "pipes |_| inside")];
        let jsonl = to_jsonl(&records).unwrap();
        let value: serde_json::Value = serde_json::from_str(jsonl.trim()).unwrap();
        assert_eq!(value["body"], "pipes |_| inside");
    }

    #[test]
    fn test_write_jsonl_empty_records() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("chat.jsonl");

        write_jsonl(&[], &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_jsonl_special_characters() {
        let records = vec![Record::new("Alice", "10:00", "quote \" backslash \\ tab\t")];
        let jsonl = to_jsonl(&records).unwrap();
        let value: serde_json::Value = serde_json::from_str(jsonl.trim()).unwrap();
        assert_eq!(value["body"], "quote \" backslash \\ tab\t");
    }
}
