//! Property-based tests for token ordering and line buffering.

use linescan::{Reader, ReaderOptions, Separator, TypeRequest, Value};
use proptest::prelude::*;

fn word() -> impl Strategy<Value = String> {
    "[a-z0-9]{1,8}"
}

fn mixed_case(word: &str, mask: &[bool]) -> String {
    word.chars()
        .zip(mask.iter().cycle())
        .map(|(c, &upper)| if upper { c.to_ascii_uppercase() } else { c })
        .collect()
}

proptest! {
    #[test]
    fn prop_integers_read_in_order(values in prop::collection::vec(any::<i64>(), 1..30)) {
        let line = values.iter().map(i64::to_string).collect::<Vec<_>>().join(" ");
        let mut reader = Reader::new(line.as_bytes());
        let read: Vec<i64> = reader.scan_list(values.len()).unwrap();
        prop_assert_eq!(read, values);
    }

    #[test]
    fn prop_tokens_span_lines(lines in prop::collection::vec(prop::collection::vec(word(), 1..6), 1..6)) {
        let input = lines.iter().map(|l| l.join(" ")).collect::<Vec<_>>().join("\n");
        let flat: Vec<String> = lines.concat();
        let mut reader = Reader::new(input.as_bytes());
        let read: Vec<String> = reader.scan_list(flat.len()).unwrap();
        prop_assert_eq!(read, flat);
    }

    #[test]
    fn prop_readline_returns_unread_rest(tokens in prop::collection::vec(word(), 1..10), k in 0usize..10) {
        let k = k.min(tokens.len());
        let input = format!("{}\n", tokens.join("   "));
        let mut reader = Reader::new(input.as_bytes());
        for expected in &tokens[..k] {
            let got: String = reader.scan().unwrap();
            prop_assert_eq!(&got, expected);
        }
        // the rest keeps its inner spacing
        prop_assert_eq!(reader.readline().unwrap(), tokens[k..].join("   "));
    }

    #[test]
    fn prop_clear_buffer_starts_next_line(first in prop::collection::vec(word(), 2..8), second in word()) {
        let input = format!("{}\n{}\n", first.join(" "), second);
        let mut reader = Reader::new(input.as_bytes());
        let _: String = reader.scan().unwrap();
        reader.clear_buffer();
        let got: String = reader.scan().unwrap();
        prop_assert_eq!(got, second);
    }

    #[test]
    fn prop_bool_ignores_case(value in any::<bool>(), mask in prop::collection::vec(any::<bool>(), 1..5)) {
        let token = mixed_case(if value { "true" } else { "false" }, &mask);
        let mut reader = Reader::new(token.as_bytes());
        prop_assert_eq!(reader.read(&[TypeRequest::Boolean]).unwrap(), Value::Bool(value));
    }

    #[test]
    fn prop_literal_separator(tokens in prop::collection::vec(word(), 1..10)) {
        let input = tokens.join(",");
        let options = ReaderOptions::new().with_separator(Separator::comma());
        let mut reader = Reader::with_options(input.as_bytes(), options);
        let read: Vec<String> = reader.scan_list(tokens.len()).unwrap();
        prop_assert_eq!(read, tokens);
    }

    #[test]
    fn prop_integers_never_overflow(n in any::<i128>()) {
        let input = n.to_string();
        let mut reader = Reader::new(input.as_bytes());
        let value = reader.read(&[TypeRequest::Integer]).unwrap();
        prop_assert_eq!(value.is_bigint(), i64::try_from(n).is_err());
        prop_assert_eq!(value.to_string(), input);
    }

    #[test]
    fn prop_float_text_reparses(f in prop::num::f64::NORMAL) {
        let input = f.to_string();
        let mut reader = Reader::new(input.as_bytes());
        let read: f64 = reader.scan().unwrap();
        prop_assert_eq!(read, f);
    }
}
