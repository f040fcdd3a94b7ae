// tests/integration/end_to_end.rs
use predicates::prelude::*;

use crate::common::{Tree, locations};

fn pair(dir: &str, name: &str) -> (String, String) {
    (dir.to_string(), name.to_string())
}

#[test]
fn collects_only_matching_extensions_across_subdirectories() {
    let tree = Tree::new().sized("docs/a.py", 50).sized("docs/b.txt", 30).sized("docs/sub/c.py", 20);

    tree.command()
        .args(["--extensions", "py", "--max-size", "1000", "--max-total-size", "1000", "docs", "out.json"])
        .assert()
        .success();

    let doc = tree.read_output();
    assert_eq!(doc["file_count"], 2);
    assert_eq!(doc["total_size"], 70);
    assert_eq!(locations(&doc), vec![pair("docs", "a.py"), pair("docs/sub", "c.py")]);
}

#[test]
fn duplicate_directories_are_scanned_once() {
    let tree = Tree::new().sized("a/x.py", 10);

    tree.command().args(["a,./a,a/", "out.json"]).assert().success().stderr(predicate::str::contains("[1/1]"));

    let doc = tree.read_output();
    assert_eq!(doc["file_count"], 1);
    assert_eq!(locations(&doc), vec![pair("a", "x.py")]);
}

#[test]
fn ignored_substrings_never_reach_the_output() {
    let tree = Tree::new()
        .sized("web/node_modules/pkg/index.js", 10)
        .sized("web/src/app.js", 10)
        .sized("web/src2/util.js", 10);

    tree.command().args(["--extensions", ".js", "--ignore-dirs", "node_modules,src2", "web", "out.json"]).assert().success();

    let doc = tree.read_output();
    assert_eq!(locations(&doc), vec![pair("web/src", "app.js")]);
}

#[test]
fn ignore_is_plain_substring_containment() {
    let tree = Tree::new().sized("proj/src/a.py", 5).sized("proj/src2/b.py", 5).sized("proj/lib/c.py", 5);

    tree.command().args(["--ignore-dirs", "src", "proj", "out.json"]).assert().success();

    assert_eq!(locations(&tree.read_output()), vec![pair("proj/lib", "c.py")]);
}

#[test]
fn size_bounds_exclude_empty_and_oversized_files() {
    let tree = Tree::new().sized("src/empty.py", 0).sized("src/edge.py", 100).sized("src/big.py", 101);

    tree.command().args(["--max-size", "100", "src", "out.json"]).assert().success();

    let doc = tree.read_output();
    assert_eq!(locations(&doc), vec![pair("src", "edge.py")]);
    assert_eq!(doc["total_size"], 100);
}

#[test]
fn cutoff_keeps_crossing_file_and_skips_later_directories() {
    let tree = Tree::new()
        .sized("first/a.py", 60)
        .sized("first/b.py", 60)
        .sized("first/c.py", 10)
        .sized("second/d.py", 10);

    tree.command()
        .args(["--max-total-size", "100", "first,second", "out.json"])
        .assert()
        .success()
        .stderr(predicate::str::contains("[1/2] Scraping directory: first"))
        .stderr(predicate::str::contains("second").not());

    let doc = tree.read_output();
    assert_eq!(locations(&doc), vec![pair("first", "a.py"), pair("first", "b.py")]);
    assert_eq!(doc["total_size"], 120);
    // the file that crossed the cap is listed but not counted
    assert_eq!(doc["file_count"], 1);
}

#[test]
fn content_is_byte_identical_and_binary_files_are_skipped() {
    let tree = Tree::new()
        .file("src/crlf.py", "a = 1\r\nb = 'ünï'\r\n")
        .bytes("src/blob.py", &[0xff, 0xfe, 0x00, 0x01, 0x80]);

    tree.command().args(["src", "out.json"]).assert().success();

    let doc = tree.read_output();
    assert_eq!(doc["file_count"], 1);
    let file = &doc["files"][0];
    assert_eq!(file["name"], "crlf.py");
    assert_eq!(file["content"], "a = 1\r\nb = 'ünï'\r\n");
    assert_eq!(file["size"], "a = 1\r\nb = 'ünï'\r\n".len());
}

#[test]
fn missing_directory_is_logged_and_others_still_scanned() {
    let tree = Tree::new().sized("real/a.py", 5);

    tree.command().args(["absent,real", "out.json"]).assert().success();

    assert_eq!(locations(&tree.read_output()), vec![pair("real", "a.py")]);
}

#[test]
fn totals_match_records() {
    let tree = Tree::new()
        .sized("x/a.py", 7)
        .sized("x/b/c.py", 11)
        .sized("y/d.py", 13)
        .sized("y/e.rs", 17);

    tree.command().args(["--extensions", "py,rs", "x,y", "out.json"]).assert().success();

    let doc = tree.read_output();
    let files = doc["files"].as_array().expect("files");
    let sum: u64 = files.iter().map(|f| f["size"].as_u64().expect("size")).sum();
    assert_eq!(doc["total_size"].as_u64(), Some(sum));
    assert!(doc["file_count"].as_u64().expect("count") <= files.len() as u64);
    assert_eq!(sum, 48);
}

#[test]
fn file_given_as_directory_contributes_nothing() {
    let tree = Tree::new().sized("lone.py", 5).sized("real/a.py", 5);

    tree.command().args(["lone.py", "out.json"]).assert().success();
    let doc = tree.read_output();
    assert_eq!(doc["file_count"], 0);
    assert_eq!(doc["total_size"], 0);
    assert_eq!(doc["files"].as_array().map(Vec::len), Some(0));

    tree.command().args(["lone.py,real", "out.json"]).assert().success();
    assert_eq!(locations(&tree.read_output()), vec![pair("real", "a.py")]);
}
