use std::io::Write;
use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tempfile::{NamedTempFile, TempDir};

use spmat::{
    render, run, Error, ErrorCategory, HashMatrix, Matrix, OutputFormat, ParseConfig, RunRequest,
    SpmatError,
};

fn write_matrix(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn random_matrix(rng: &mut StdRng, nrows: usize, ncols: usize, nnz: usize) -> Matrix {
    let mut matrix = HashMatrix::new(nrows, ncols);
    for _ in 0..nnz {
        let row = rng.gen_range(0..nrows);
        let col = rng.gen_range(0..ncols);
        matrix.set_element(row, col, rng.gen_range(-9..=9));
    }
    matrix
}

fn to_text(matrix: &Matrix) -> String {
    let mut text = format!("rows={}\ncols={}\n", matrix.nrows(), matrix.ncols());
    for entry in matrix.entries() {
        text.push_str(&format!("({},{},{})\n", entry.row, entry.col, entry.value));
    }
    text
}

fn dense_product(a: &Matrix, b: &Matrix) -> Matrix {
    let mut result = HashMatrix::new(a.nrows(), b.ncols());
    for i in 0..a.nrows() {
        for j in 0..b.ncols() {
            let sum = (0..a.ncols())
                .map(|k| a.get_element(i, k) * b.get_element(k, j))
                .sum();
            result.set_element(i, j, sum);
        }
    }
    result
}

#[test]
fn test_identity_times_matrix() {
    let dir = tempfile::tempdir().unwrap();
    let identity = write_matrix(&dir, "identity.txt", "rows=2\ncols=2\n(0,0,1)\n(1,1,1)\n");
    let m = write_matrix(
        &dir,
        "m.txt",
        "rows=2\ncols=2\n(0,0,2)\n(0,1,3)\n(1,0,4)\n(1,1,5)\n",
    );

    let product = run(&RunRequest::new(&identity, &m, "multiply")).unwrap();
    assert_eq!(
        product,
        HashMatrix::from_triples(2, 2, [(0, 0, 2), (0, 1, 3), (1, 0, 4), (1, 1, 5)])
    );
    assert_eq!(
        render(&product, OutputFormat::Text).unwrap(),
        "SparseMatrix(2x2) with elements: {(0, 0): 2, (0, 1): 3, (1, 0): 4, (1, 1): 5}"
    );
}

#[test]
fn test_shape_rules() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_matrix(&dir, "a.txt", "rows=2\ncols=3\n(0,2,1)\n(1,0,2)\n");
    let b = write_matrix(&dir, "b.txt", "rows=3\ncols=2\n(2,1,3)\n(0,0,4)\n");

    let err = run(&RunRequest::new(&a, &b, "add")).unwrap_err();
    assert_eq!(err.category(), Some(ErrorCategory::Dimension));
    assert!(err.to_string().contains("addition"));

    let err = run(&RunRequest::new(&a, &b, "subtract")).unwrap_err();
    assert_eq!(err.category(), Some(ErrorCategory::Dimension));

    let product = run(&RunRequest::new(&a, &b, "multiply")).unwrap();
    assert_eq!(product.dimensions(), (2, 2));
    assert_eq!(
        product,
        HashMatrix::from_triples(2, 2, [(0, 1, 3), (1, 0, 8)])
    );
}

#[test]
fn test_add_and_subtract_files() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_matrix(&dir, "a.txt", "rows=2\ncols=2\n(0,0,1)\n\n(1,1,4)\n");
    let b = write_matrix(&dir, "b.txt", "rows=2\ncols=2\n(0,0,-1)\n(0,1,2)\n");

    let sum = run(&RunRequest::new(&a, &b, "add")).unwrap();
    assert_eq!(sum, HashMatrix::from_triples(2, 2, [(0, 1, 2), (1, 1, 4)]));
    assert!(!sum.contains(0, 0));

    let difference = run(&RunRequest::new(&a, &b, "subtract")).unwrap();
    assert_eq!(
        difference,
        HashMatrix::from_triples(2, 2, [(0, 0, 2), (0, 1, -2), (1, 1, 4)])
    );
}

#[test]
fn test_malformed_entry_aborts_load() {
    let dir = tempfile::tempdir().unwrap();
    let good = write_matrix(&dir, "good.txt", "rows=2\ncols=2\n(0,0,1)\n");
    let bad = write_matrix(&dir, "bad.txt", "rows=2\ncols=2\n5,6,7\n");

    match run(&RunRequest::new(&good, &bad, "add")) {
        Err(Error::Load { path, source }) => {
            assert_eq!(path, bad);
            assert_eq!(source, SpmatError::UnparenthesizedEntry { line: 3 });
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_missing_header() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "(0,0,1)\n").unwrap();

    let err = run(&RunRequest::new(file.path(), file.path(), "add")).unwrap_err();
    assert_eq!(err.category(), Some(ErrorCategory::Format));
}

#[test]
fn test_strict_parsing() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_matrix(&dir, "a.txt", "rows=2\ncols=2\n(3,3,1)\n");

    // Permissive by default
    assert!(run(&RunRequest::new(&a, &a, "add")).is_ok());

    let strict = RunRequest::new(&a, &a, "add").with_parse_config(ParseConfig::strict());
    let err = run(&strict).unwrap_err();
    assert!(matches!(
        err,
        Error::Load {
            source: SpmatError::EntryOutOfBounds { line: 3, row: 3, col: 3 },
            ..
        }
    ));
}

#[test]
fn test_unknown_operation() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_matrix(&dir, "a.txt", "rows=1\ncols=1\n");

    let err = run(&RunRequest::new(&a, &a, "transpose")).unwrap_err();
    assert!(matches!(err, Error::UnknownOperation(ref name) if name == "transpose"));
    assert_eq!(err.category(), Some(ErrorCategory::Operation));
}

#[test]
fn test_random_files_agree_with_dense_reference() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let dir = tempfile::tempdir().unwrap();

    for round in 0..20 {
        let (n, k, m) = (rng.gen_range(1..8), rng.gen_range(1..8), rng.gen_range(1..8));
        let a = random_matrix(&mut rng, n, k, n * k / 2);
        let b = random_matrix(&mut rng, k, m, k * m / 2);
        let c = random_matrix(&mut rng, n, k, n * k / 3);

        let a_path = write_matrix(&dir, &format!("a{round}.txt"), &to_text(&a));
        let b_path = write_matrix(&dir, &format!("b{round}.txt"), &to_text(&b));
        let c_path = write_matrix(&dir, &format!("c{round}.txt"), &to_text(&c));

        let product = run(&RunRequest::new(&a_path, &b_path, "multiply")).unwrap();
        assert_eq!(product, dense_product(&a, &b));

        let sum = run(&RunRequest::new(&a_path, &c_path, "add")).unwrap();
        assert_eq!(sum, c.add(&a).unwrap());

        let difference = run(&RunRequest::new(&a_path, &c_path, "subtract")).unwrap();
        assert_eq!(difference, a.add(&c.scale(-1).unwrap()).unwrap());
    }
}
