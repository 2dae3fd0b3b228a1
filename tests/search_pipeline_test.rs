//! Integration tests for the corpus-to-results search pipeline.

use std::io::Write;

use apothecary::corpus::{extract_alternative_names, load_corpus, truncate, DocKind, Document};
use apothecary::error::Result;
use apothecary::search::{QueryEngine, QueryOutcome, MAX_RESULTS};

fn write_corpus(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{json}").unwrap();
    file
}

#[test]
fn test_end_to_end_from_serialized_corpus() -> Result<()> {
    let file = write_corpus(
        r#"[
            {"id": "mdma", "kind": "substance", "title": "MDMA",
             "category": "Empathogens", "url": "/substances/mdma",
             "alternativeNames": ["Molly", "Ecstasy", "Mandy"],
             "content": "MDMA is a synthetic empathogen."},
            {"id": "post-9", "kind": "post", "title": "Festival report",
             "author": "anon", "archiveLink": "https://archive.example/9",
             "description": "Notes from a long weekend.",
             "content": "someone offered me mdma at the gate"}
        ]"#,
    );

    let engine = QueryEngine::new(load_corpus(file.path())?)?;

    // The substance outranks the post that mentions mdma once in its
    // body: title boost 10 beats content baseline 1.
    match engine.execute("MDMA")? {
        QueryOutcome::Success(results) => {
            assert_eq!(results.substances.len(), 1);
            assert_eq!(results.posts.len(), 1);
            assert_eq!(results.substances[0].legal_status, "Unknown legal status");
            assert_eq!(results.substances[0].url, "/substances/mdma");
        }
        other => panic!("expected Success, got {other:?}"),
    }

    // Prefix fallback: "moll" is not an indexed term but "molly" is.
    match engine.execute("moll")? {
        QueryOutcome::Success(results) => {
            assert_eq!(results.substances.len(), 1);
            assert!(results.posts.is_empty());
        }
        other => panic!("expected fallback Success, got {other:?}"),
    }

    assert_eq!(engine.execute("zzyzx")?, QueryOutcome::Empty);
    assert_eq!(engine.execute(" m ")?, QueryOutcome::Idle);

    Ok(())
}

#[test]
fn test_rebuilding_yields_identical_results() -> Result<()> {
    let corpus: Vec<Document> = (0..40)
        .map(|i| {
            Document::builder(
                format!("doc-{i}"),
                if i % 2 == 0 {
                    DocKind::Substance
                } else {
                    DocKind::Post
                },
            )
            .title(format!("profile {}", i % 7))
            .content("shared corpus vocabulary for ranking ties")
            .build()
        })
        .collect();

    let first = QueryEngine::new(corpus.clone())?;
    let second = QueryEngine::new(corpus)?;

    for query in ["profile", "vocabulary", "shared corpus", "prof"] {
        assert_eq!(first.execute(query)?, second.execute(query)?);
    }

    Ok(())
}

#[test]
fn test_cap_and_truncation_flag() -> Result<()> {
    let corpus: Vec<Document> = (0..30)
        .map(|i| {
            Document::builder(format!("post-{i}"), DocKind::Post)
                .title("harm reduction notes")
                .build()
        })
        .collect();

    let engine = QueryEngine::new(corpus)?;
    match engine.execute("reduction")? {
        QueryOutcome::Success(results) => {
            assert_eq!(results.posts.len(), MAX_RESULTS);
            assert!(results.truncated);
            assert_eq!(results.total_hits, 30);
        }
        other => panic!("expected capped Success, got {other:?}"),
    }

    Ok(())
}

#[test]
fn test_site_build_normalization_roundtrip() -> Result<()> {
    // The site build extracts names from rendered markup, truncates the
    // content, and serializes; the search feature consumes the result.
    let rendered = r#"
        <h1>🧪 MDMA</h1>
        <div class="alternative-names"><ul>
            <li>Molly</li><li>—</li><li>Ecstasy</li>
        </ul></div>
    "#;

    let names = extract_alternative_names(rendered);
    assert_eq!(names, vec!["Molly", "Ecstasy"]);

    let body = "dosage guidance ".repeat(500);
    let document = Document::builder("mdma", DocKind::Substance)
        .title("MDMA")
        .alternative_names(names)
        .content(truncate(&body, 5000))
        .build();

    assert!(document.content.chars().count() <= 5001);

    let engine = QueryEngine::new(vec![document])?;
    match engine.execute("ecstasy")? {
        QueryOutcome::Success(results) => {
            assert_eq!(results.substances[0].also_known_as, vec!["<mark>Ecstasy</mark>"]);
        }
        other => panic!("expected Success via alternative name, got {other:?}"),
    }

    Ok(())
}
