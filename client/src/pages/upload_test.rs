use super::*;

#[test]
fn csv_extension_is_accepted_case_insensitively() {
    assert!(is_csv_file("october.csv", ""));
    assert!(is_csv_file("EXPORT.CSV", "application/octet-stream"));
}

#[test]
fn csv_mime_is_accepted_without_extension() {
    assert!(is_csv_file("statement", "text/csv"));
}

#[test]
fn other_files_are_rejected() {
    assert!(!is_csv_file("receipt.pdf", "application/pdf"));
    assert!(!is_csv_file("csv", ""));
    assert!(!is_csv_file(".csv", ""));
    assert!(!is_csv_file("notes.csv.txt", "text/plain"));
}
