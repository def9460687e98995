use std::cmp::Ordering;
use symgather_api::Record;

/// Compares records by the start of their navigation range.
pub fn by_start(a: &Record, b: &Record) -> Ordering {
    let a = a.range().start;
    let b = b.range().start;
    a.line.cmp(&b.line).then(a.character.cmp(&b.character))
}

/// Stable sort, so records sharing a start keep traversal order.
pub fn sort_records(records: &mut [Record]) {
    records.sort_by(by_start);
}

#[cfg(test)]
mod tests {
    use super::*;
    use lsp_types::{Location, Position, Range, Uri};
    use std::path::PathBuf;
    use symgather_api::{ActionData, Client, ItemContext, Method, RecordData, Target};

    fn record(word: &str, line: u32, character: u32) -> Record {
        let range = Range::new(
            Position::new(line, character),
            Position::new(line, character + 1),
        );
        let uri: Uri = "file:///work/lib.rs".parse().unwrap();
        Record {
            word: word.to_string(),
            level: 0,
            tree_path: Vec::new(),
            is_tree: false,
            is_expanded: false,
            action: ActionData {
                target: Target::File {
                    path: PathBuf::from("/work/lib.rs"),
                    range,
                },
                context: ItemContext {
                    client: Client::new(1, "rls", Default::default()),
                    bufnr: 1,
                    method: Method::References,
                },
            },
            line_text: None,
            data: RecordData::Location(Location::new(uri, range)),
        }
    }

    fn words(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.word.as_str()).collect()
    }

    #[test]
    fn equal_starts_keep_input_order() {
        let mut records: Vec<_> = (0..40)
            .rev()
            .map(|i| record(&format!("r{i}"), 7, 2))
            .collect();
        let before: Vec<String> = records.iter().map(|r| r.word.clone()).collect();

        sort_records(&mut records);

        assert_eq!(words(&records), before);
    }

    #[test]
    fn orders_by_line_then_column() {
        let mut records = vec![
            record("late", 4, 9),
            record("tie-a", 2, 3),
            record("early", 4, 1),
            record("first", 0, 20),
            record("tie-b", 2, 3),
        ];

        sort_records(&mut records);

        assert_eq!(
            words(&records),
            vec!["first", "tie-a", "tie-b", "early", "late"]
        );
    }
}
