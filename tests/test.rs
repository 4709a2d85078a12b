mod example_document;

use std::{collections::BTreeSet, fs, path::Path};

use example_document::ExampleDocument;
use partial_reformat::{
    DiffChunk, Newline, TextDocument, diff_chunks, edited_line_numbers, reconcile_chunks,
    reformat_changed_lines,
};
use pretty_assertions::assert_eq;
use serde::Deserialize;

#[test]
fn test_examples() {
    for doc in &get_all_documents() {
        doc.assert_eq(&doc.reformat());
    }
}

#[test]
fn test_examples_reformatting_everything() {
    for doc in &get_all_documents() {
        let edited = doc.edited();
        let everything = (1..=edited.len()).collect::<BTreeSet<_>>();

        let result = reconcile_chunks(&diff_chunks(&edited, &doc.formatted()), &everything);

        assert_eq!(result, doc.formatted(), "'{}'", doc.name());
    }
}

#[test]
fn test_examples_reformatting_nothing() {
    for doc in &get_all_documents() {
        let edited = doc.edited();

        let result = reconcile_chunks(&diff_chunks(&edited, &doc.formatted()), &BTreeSet::new());

        assert_eq!(result, edited, "'{}'", doc.name());
    }
}

#[test]
fn test_untouched_lines_are_kept() {
    for doc in &get_all_documents() {
        let edited = doc.edited();
        let chunks = diff_chunks(&edited, &doc.formatted());
        let accepted_lines = edited_line_numbers(&doc.reference(), &edited, 0);

        let kept: Vec<&DiffChunk> = chunks
            .iter()
            .filter(|chunk| {
                !chunk
                    .original_line_range()
                    .any(|line| accepted_lines.contains(&line))
            })
            .collect();
        let result = reformat_changed_lines(&doc.reference(), &edited, &doc.formatted());

        for chunk in kept {
            for line in &chunk.original_lines {
                assert!(
                    result.lines().contains(line),
                    "'{}' lost the untouched line {line:?}",
                    doc.name()
                );
            }
        }
    }
}

#[test]
fn test_files_keep_their_line_endings() {
    let directory = tempfile::tempdir().unwrap();
    let write = |name: &str, content: &[u8]| {
        let path = directory.path().join(name);
        fs::write(&path, content).unwrap();
        path
    };
    let reference = write("reference.py", b"a=1\r\npass\r\nb=2\r\npass\r\nc=3\r\n");
    let edited = write("edited.py", b"a=1\r\npass\r\nb=5\r\npass\r\nc=3\r\n");
    let formatted = write("formatted.py", b"a = 1\npass\nb = 5\npass\nc = 3\n");

    let edited_document = TextDocument::from_file(&edited).unwrap();
    let result = reformat_changed_lines(
        &TextDocument::from_file(&reference).unwrap(),
        &edited_document,
        &TextDocument::from_file(&formatted).unwrap(),
    );
    result.write_file(&edited).unwrap();

    assert_eq!(result.newline(), Newline::CrLf);
    assert_eq!(result.mtime(), edited_document.mtime());
    assert_eq!(fs::read(&edited).unwrap(), b"a=1\r\npass\r\nb = 5\r\npass\r\nc=3\r\n");
}

#[test]
fn test_files_keep_a_missing_final_newline() {
    let directory = tempfile::tempdir().unwrap();
    let path = directory.path().join("edited.py");
    fs::write(&path, b"a=1\npass\nb=2").unwrap();

    let edited = TextDocument::from_file(&path).unwrap();
    let result = reformat_changed_lines(
        &TextDocument::from_str("a=1\npass\nb=1"),
        &edited,
        &TextDocument::from_str("a = 1\npass\nb = 2\n"),
    );
    result.write_file(&path).unwrap();

    assert_eq!(fs::read(&path).unwrap(), b"a=1\npass\nb = 2");
}

fn get_all_documents() -> Vec<ExampleDocument> {
    let examples_dir = Path::new("tests/resources");
    let entries = fs::read_dir(examples_dir)
        .expect("Failed to read examples directory")
        .collect::<Vec<_>>();

    let mut documents = Vec::new();

    for entry in entries {
        let entry = entry.expect("Failed to read directory entry");
        let path = entry.path();

        if path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some("yml") {
            let file = fs::File::open(&path).expect("Failed to open example file");
            for document in serde_yaml::Deserializer::from_reader(file) {
                let doc =
                    ExampleDocument::deserialize(document).expect("Failed to deserialize document");
                documents.push(doc);
            }
        }
    }

    assert!(!documents.is_empty(), "No example documents found");
    documents
}
