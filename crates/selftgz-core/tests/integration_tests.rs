//! Integration tests for selftgz-core.
//!
//! These tests drive the public API end to end with archives built in
//! memory: tar, then gzip, then base64.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use selftgz_core::ErrorKind;
use selftgz_core::ExtractOptions;
use selftgz_core::ExtractionError;
use selftgz_core::ExtractionRequest;
use selftgz_core::NoopDiagnostics;
use selftgz_core::extract_file;
use selftgz_core::extract_file_with_diagnostics;
use selftgz_core::list_entries;
use selftgz_core::test_utils::RecordedDiagnostic;
use selftgz_core::test_utils::RecordingDiagnostics;
use selftgz_core::test_utils::TarTestBuilder;
use selftgz_core::test_utils::encode_base64;
use selftgz_core::test_utils::encode_tgz;
use selftgz_core::test_utils::gzip_bytes;

/// Deterministic, poorly compressible bytes.
fn noise(len: usize, seed: u32) -> Vec<u8> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (state >> 24) as u8
        })
        .collect()
}

fn extract(data: &str, path: &str) -> selftgz_core::Result<Vec<u8>> {
    extract_file(data, "test-archive", path, &ExtractOptions::default())
}

#[test]
fn test_round_trip_single_entry() {
    let payload = b"#!/bin/sh\necho installed\n";
    let archive = encode_tgz(&[("scripts/install.sh", &payload[..])]);

    assert_eq!(extract(&archive, "scripts/install.sh").unwrap(), payload);
}

#[test]
fn test_round_trip_among_many() {
    let archive = TarTestBuilder::new()
        .add_directory("templates/")
        .add_file("templates/base.html", b"<base>")
        .add_file("templates/page.html", b"<page>")
        .add_symlink("templates/latest.html", "page.html")
        .add_file("README", b"readme")
        .build_encoded();

    assert_eq!(extract(&archive, "templates/page.html").unwrap(), b"<page>");
    assert_eq!(extract(&archive, "README").unwrap(), b"readme");
}

#[test]
fn test_empty_entry() {
    let archive = encode_tgz(&[("empty.txt", &b""[..])]);
    assert_eq!(extract(&archive, "empty.txt").unwrap(), b"");
}

#[test]
fn test_directory_entry_matches_by_name() {
    let archive = TarTestBuilder::new().add_directory("assets/").build_encoded();
    assert_eq!(extract(&archive, "assets/").unwrap(), b"");
    assert!(extract(&archive, "assets").unwrap_err().is_not_found());
}

#[test]
fn test_not_found_is_distinct_from_malformed() {
    let archive = encode_tgz(&[("a.txt", &b"alpha"[..])]);

    let err = extract(&archive, "b.txt").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EntryNotFound);
    assert!(!err.is_unreadable());
    assert!(matches!(
        err,
        ExtractionError::EntryNotFound { ref label, ref path }
            if label == "test-archive" && path == "b.txt"
    ));
}

#[test]
fn test_match_is_exact_and_case_sensitive() {
    let archive = encode_tgz(&[("Dir/File.txt", &b"x"[..])]);

    for miss in ["dir/file.txt", "Dir/File", "File.txt", "/Dir/File.txt", "Dir/File.txt/"] {
        let err = extract(&archive, miss).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EntryNotFound, "{miss} must not match");
    }
    assert_eq!(extract(&archive, "Dir/File.txt").unwrap(), b"x");
}

#[test]
fn test_first_match_wins() {
    let archive = TarTestBuilder::new()
        .add_file("config.json", b"{\"v\":1}")
        .add_file("other.json", b"{}")
        .add_file("config.json", b"{\"v\":2}")
        .build_encoded();

    assert_eq!(extract(&archive, "config.json").unwrap(), b"{\"v\":1}");
}

#[test]
fn test_empty_archive_not_found() {
    let archive = TarTestBuilder::new().build_encoded();
    let mut sink = RecordingDiagnostics::new();

    let err = extract_file_with_diagnostics(
        &archive,
        "empty",
        "anything",
        &ExtractOptions::default(),
        &mut sink,
    )
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::EntryNotFound);
    assert_eq!(sink.events.len(), 1);
}

#[test]
fn test_zero_length_tar_not_found() {
    let archive = encode_base64(&gzip_bytes(b""));
    assert_eq!(
        extract(&archive, "anything").unwrap_err().kind(),
        ErrorKind::EntryNotFound
    );
}

#[test]
fn test_large_entry_byte_exact() {
    let payload = noise(5 * 1024 * 1024 + 123, 42);
    let archive = TarTestBuilder::new()
        .add_file("small.txt", b"before")
        .add_file("blob.bin", &payload)
        .add_file("after.txt", b"after")
        .build_encoded();

    let extracted = extract(&archive, "blob.bin").unwrap();
    assert_eq!(extracted.len(), payload.len());
    assert!(extracted == payload);
}

#[test]
fn test_entry_over_limit() {
    let archive = encode_tgz(&[("blob.bin", &noise(4096, 7)[..])]);
    let options = ExtractOptions::default().with_max_entry_size(4095);

    let err = extract_file(&archive, "limits", "blob.bin", &options).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EntryTooLarge);

    let options = ExtractOptions::default().with_max_entry_size(4096);
    assert_eq!(
        extract_file(&archive, "limits", "blob.bin", &options)
            .unwrap()
            .len(),
        4096
    );
}

#[test]
fn test_argument_validation_before_decode() {
    let mut sink = RecordingDiagnostics::new();
    let args = ["only-one-argument"];

    let err = ExtractionRequest::from_args(&args)
        .and_then(|request| request.extract_with(&mut sink))
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidArguments);
    assert!(sink.is_empty(), "no diagnostics may fire on argument errors");
}

#[test]
fn test_from_args_full_flow() {
    let archive = encode_tgz(&[("a.txt", &b"alpha"[..])]);
    let args = [archive.as_str(), "label", "missing", "[custom-prefix]"];
    let mut sink = RecordingDiagnostics::new();

    let err = ExtractionRequest::from_args(&args)
        .unwrap()
        .extract_with(&mut sink)
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(
        sink.events,
        vec![RecordedDiagnostic::EndOfArchive {
            prefix: "[custom-prefix]".into(),
            label: "label".into(),
            target: "missing".into(),
        }]
    );
}

#[test]
fn test_invalid_base64_is_hard_error() {
    let archive = encode_tgz(&[("a.txt", &b"alpha"[..])]);
    // Damage the text in the middle; a lenient decoder would keep a prefix
    let mut damaged = archive.clone();
    damaged.insert(archive.len() / 2, '#');

    let err = extract(&damaged, "a.txt").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DecodeFailure);
}

#[test]
fn test_wrapped_base64_lines() {
    let archive = encode_tgz(&[("a.txt", &b"alpha"[..])]);
    let wrapped: String = archive
        .as_bytes()
        .chunks(76)
        .map(|chunk| format!("{}\r\n", std::str::from_utf8(chunk).unwrap()))
        .collect();

    assert_eq!(extract(&wrapped, "a.txt").unwrap(), b"alpha");
}

#[test]
fn test_non_gzip_payload() {
    let raw_tar = TarTestBuilder::new().add_file("a.txt", b"alpha").build();
    let archive = encode_base64(&raw_tar);

    let err = extract(&archive, "a.txt").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DecompressFailure);
}

#[test]
fn test_truncated_gzip_stream() {
    let gz = TarTestBuilder::new()
        .add_file("one.bin", &noise(64 * 1024, 1))
        .add_file("two.bin", &noise(64 * 1024, 2))
        .add_file("three.bin", &noise(64 * 1024, 3))
        .build_gzipped();
    let cut = &gz[..gz.len() * 6 / 10];
    let mut sink = RecordingDiagnostics::new();

    let err = extract_file_with_diagnostics(
        &encode_base64(cut),
        "cut",
        "absent.bin",
        &ExtractOptions::default(),
        &mut sink,
    )
    .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::DecompressFailure);
    assert!(matches!(
        sink.events.as_slice(),
        [RecordedDiagnostic::Unreadable {
            kind: ErrorKind::DecompressFailure,
            ..
        }]
    ));
}

#[test]
fn test_trailing_bytes_after_gzip_member_are_ignored() {
    let mut gz = TarTestBuilder::new()
        .add_file("a.txt", b"alpha")
        .build_gzipped();
    gz.extend_from_slice(b"garbage!");
    let archive = encode_base64(&gz);

    assert_eq!(extract(&archive, "a.txt").unwrap(), b"alpha");
    assert_eq!(
        extract(&archive, "missing.txt").unwrap_err().kind(),
        ErrorKind::EntryNotFound
    );
}

#[test]
fn test_corrupt_tar_header() {
    let mut tar = TarTestBuilder::new()
        .add_file("a.txt", b"alpha")
        .add_file("b.txt", b"beta")
        .build();
    // Second header starts after the first header and its padded body
    tar[512 + 512 + 10] ^= 0xff;
    let archive = encode_base64(&gzip_bytes(&tar));

    assert_eq!(extract(&archive, "a.txt").unwrap(), b"alpha");
    assert_eq!(
        extract(&archive, "b.txt").unwrap_err().kind(),
        ErrorKind::MalformedArchive
    );
}

#[test]
fn test_listing_matches_archive_order() {
    let archive = TarTestBuilder::new()
        .add_file("z.txt", b"1")
        .add_file("a.txt", b"22")
        .add_file("z.txt", b"333")
        .build_encoded();

    let entries = list_entries(&archive, "order", &ExtractOptions::default()).unwrap();
    let listed: Vec<_> = entries
        .iter()
        .map(|entry| (entry.name.as_str(), entry.size))
        .collect();
    assert_eq!(listed, vec![("z.txt", 1), ("a.txt", 2), ("z.txt", 3)]);
}

#[test]
fn test_concurrent_extractions_share_input() {
    let names: Vec<String> = (0..8).map(|i| format!("file{i}.txt")).collect();
    let builder = names.iter().fold(TarTestBuilder::new(), |builder, name| {
        builder.add_file(name, name.as_bytes())
    });
    let archive = builder.build_encoded();

    std::thread::scope(|scope| {
        for name in &names {
            let archive = archive.as_str();
            scope.spawn(move || {
                let mut sink = NoopDiagnostics;
                let body = extract_file_with_diagnostics(
                    archive,
                    "shared",
                    name,
                    &ExtractOptions::default(),
                    &mut sink,
                )
                .expect("extraction failed");
                assert_eq!(body, name.as_bytes());
            });
        }
    });
}
