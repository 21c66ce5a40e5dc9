//! End-to-end integration tests for the extractor pipeline.
//!
//! Tests the complete pipeline from raw page text to YAML generation
//! using an excerpt of Lei nº 10.826/2003 (Estatuto do Desarmamento).

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;

use legisbr_extractor::normalize::normalize;
use legisbr_extractor::yaml::generate_yaml;
use legisbr_extractor::{
    extract_structure, normalize_dates, structure_document, Level, LawType, LegalDocument,
    ParseIssue,
};

/// Load fixture file content.
fn load_fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("lei_10826")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to load {}: {}", path.display(), e))
}

/// Run the whole pipeline on the fixture text.
fn run_pipeline() -> LegalDocument {
    structure_document(&load_fixture("texto.txt"))
}

/// Locator of a fragment as a tuple of its five levels.
fn levels(doc: &LegalDocument, index: usize) -> [Option<&str>; 5] {
    let locator = &doc.fragments[index].locator;
    Level::ALL.map(|level| locator.get(level))
}

/// Assert that non-citation fragments never skip an enclosing level.
fn assert_strict_nesting(doc: &LegalDocument) {
    for fragment in doc.fragments.iter().filter(|f| !f.is_citation) {
        let locator = &fragment.locator;
        if locator.roman_item.is_some() {
            assert!(locator.paragraph.is_some(), "line {}: inciso without paragraph", fragment.line);
        }
        if locator.letter_item.is_some() {
            assert!(locator.roman_item.is_some(), "line {}: alínea without inciso", fragment.line);
        }
        if locator.number_item.is_some() {
            assert!(locator.letter_item.is_some(), "line {}: item without alínea", fragment.line);
        }
    }
}

/// Assert that every citation after the first fragment repeats its predecessor's locator.
fn assert_citations_inherit(doc: &LegalDocument) {
    for (i, fragment) in doc.fragments.iter().enumerate().skip(1) {
        if fragment.is_citation {
            assert_eq!(fragment.locator, doc.fragments[i - 1].locator, "line {}", fragment.line);
        }
    }
}

const SCENARIO: &str = "LEI Nº 10.826, DE 22 DE DEZEMBRO DE 2003.
Art. 1º Esta Lei dispõe sobre registro de armas.
§ 1º Compete à União.
I - fabricação;
a) fuzil;
1º item de teste
\"Texto citado (NR)\"";

#[test]
fn test_scenario_metadata() {
    let doc = extract_structure(SCENARIO);

    assert_eq!(doc.metadata.nickname.as_deref(), Some("LEI 10826/2003"));
    assert_eq!(doc.metadata.law_type, Some(LawType::Law));
    assert_eq!(doc.metadata.number.as_deref(), Some("10826"));
    assert_eq!(doc.metadata.year.as_deref(), Some("2003"));
    assert!(!doc.metadata.revoked);
}

#[test]
fn test_scenario_fragments() {
    let doc = extract_structure(SCENARIO);

    assert_eq!(doc.fragments.len(), 6);
    assert!(doc.issues.is_empty(), "unexpected issues: {:?}", doc.issues);

    let citation = &doc.fragments[5];
    assert!(citation.is_citation);
    assert_eq!(citation.text, "\"Texto citado (NR)\"");
    assert_eq!(
        levels(&doc, 5),
        [Some("Art. 1º"), Some("§ 1º"), Some("I"), Some("a)"), Some("1º")]
    );
    assert_eq!(levels(&doc, 5), levels(&doc, 4));
    assert!(doc.fragments[..5].iter().all(|f| !f.is_citation));
}

#[test]
fn test_scenario_survives_full_pipeline() {
    let direct = extract_structure(SCENARIO);
    let piped = structure_document(SCENARIO);

    assert_eq!(piped.metadata, direct.metadata);
    assert_eq!(piped.fragments, direct.fragments);
}

#[test]
fn test_join_heuristic_boundary() {
    assert_eq!(
        normalize("o disposto no art. 5º,\ninciso II, da Constituição"),
        vec!["o disposto no art. 5º, inciso II, da Constituição"]
    );
    assert_eq!(
        normalize("Art. 1º Esta lei dispõe.\nArt. 2º Revoga-se."),
        vec!["Art. 1º Esta lei dispõe.", "Art. 2º Revoga-se."]
    );
}

#[test]
fn test_date_round_trip() {
    assert_eq!(normalize_dates("7 de setembro de 1988"), "7 de setembro de 1988");
    assert_eq!(normalize_dates("7 de setembro de 1 988"), "7 de setembro de 1988");
    assert_eq!(normalize_dates("07.09.1988"), "07.09.1988");
    assert_eq!(normalize_dates("07-09-1988"), "07.09.1988");
}

#[test]
fn test_roman_numeral_bounds() {
    let doc = extract_structure(
        "Art. 1º Texto.\nMMMI - fora do limite;\nMIX de produtos\nIV - quarto inciso;",
    );

    let romans: Vec<&str> = doc
        .fragments
        .iter()
        .filter_map(|f| f.locator.roman_item.as_deref())
        .collect();
    assert_eq!(romans, vec!["IV"]);
}

#[test]
fn test_pipeline_normalized_lines() {
    let lines = normalize(&load_fixture("texto.txt"));

    assert_eq!(lines.len(), 21);
    assert_eq!(lines[0], "LEI Nº 10.826, DE 22 DE DEZEMBRO DE 2003.");
    assert_eq!(
        lines[1],
        "Dispõe sobre registro, posse e comercialização de armas de fogo e munição, sobre o Sistema Nacional de Armas – Sinarm, define crimes e dá outras providências."
    );
    assert_eq!(
        lines[5],
        "Art. 1º O Sistema Nacional de Armas – Sinarm, instituído no Ministério da Justiça, no âmbito da Polícia Federal, tem circunscrição em todo o território nacional."
    );
    assert_eq!(
        lines[12],
        "§ 2º Os requisitos de que trata o art. 4º desta Lei deverão ser comprovados periodicamente."
    );
    assert_eq!(lines[16], "Art. 5º Esta Lei entra em vigor na data de sua publicação.");
    assert!(!lines.iter().any(|l| l == "Texto compilado"));
}

#[test]
fn test_pipeline_normalization_is_idempotent() {
    let once = normalize(&load_fixture("texto.txt"));
    let twice = normalize(&once.join("\n"));
    assert_eq!(twice, once);
}

#[test]
fn test_pipeline_metadata() {
    let doc = run_pipeline();
    let metadata = &doc.metadata;

    assert_eq!(metadata.nickname.as_deref(), Some("LEI 10826/2003"));
    assert_eq!(
        metadata.full_name.as_deref(),
        Some("LEI Nº 10.826, DE 22 DE DEZEMBRO DE 2003")
    );
    assert_eq!(metadata.law_type, Some(LawType::Law));
    assert!(!metadata.revoked);
    assert_eq!(metadata.enactment_place.as_deref(), Some("Brasília"));
    assert_eq!(metadata.enactment_date_text.as_deref(), Some("22 de dezembro de 2003"));
    assert_eq!(metadata.enactment_date_iso, NaiveDate::from_ymd_opt(2003, 12, 22));

    let publication = metadata.publication.as_ref().expect("publication notice");
    assert_eq!(publication.clbr_date, None);
    assert_eq!(publication.dou_date, NaiveDate::from_ymd_opt(2003, 12, 23));
}

#[test]
fn test_pipeline_fragment_locators() {
    let doc = run_pipeline();

    let rendered: Vec<String> = doc
        .fragments
        .iter()
        .map(|f| format!("{}: {}", f.line, f.locator))
        .collect();
    assert_eq!(
        rendered,
        vec![
            "6: Art. 1º",
            "7: Art. 2º",
            "8: Art. 2º, caput, I",
            "9: Art. 2º, caput, II",
            "10: Art. 2º, Parágrafo único",
            "11: Art. 3º",
            "12: Art. 3º, § 1º",
            "13: Art. 3º, § 2º",
            "14: Art. 3º, § 2º, ?, a)",
            "15: Art. 4º",
            "16: Art. 4º",
            "17: Art. 5º",
        ]
    );
    assert_eq!(doc.articles(), vec!["Art. 1º", "Art. 2º", "Art. 3º", "Art. 4º", "Art. 5º"]);
}

#[test]
fn test_pipeline_fragment_texts() {
    let doc = run_pipeline();

    assert_eq!(
        doc.fragments[2].text,
        "identificar as características e a propriedade de armas de fogo, mediante cadastro;"
    );
    assert_eq!(
        doc.fragments[4].text,
        "As disposições deste artigo não alcançam as armas de fogo das Forças Armadas."
    );
    assert!(doc.fragments[9].text.contains("de 20 de fevereiro de 1997,"));
}

#[test]
fn test_pipeline_citation() {
    let doc = run_pipeline();

    assert_eq!(doc.citation_count(), 1);
    let citation = &doc.fragments[10];
    assert!(citation.is_citation);
    assert!(citation.text.starts_with("\"Art. 6º O porte"));
    assert_citations_inherit(&doc);
}

#[test]
fn test_pipeline_issues() {
    let doc = run_pipeline();

    assert_eq!(
        doc.issues,
        vec![ParseIssue::HierarchyGap {
            line: 14,
            level: Level::RomanItem
        }]
    );
}

#[test]
fn test_pipeline_strict_nesting() {
    assert_strict_nesting(&run_pipeline());
    assert_strict_nesting(&extract_structure(SCENARIO));
    assert_strict_nesting(&extract_structure(
        "§ 1º Sem artigo.\nArt. 2º Texto.\nb) alínea solta;\n3. item solto",
    ));
}

#[test]
fn test_pipeline_to_yaml() {
    let yaml = generate_yaml(&run_pipeline()).expect("Failed to generate YAML");

    assert!(yaml.starts_with("---\n"));
    assert!(yaml.contains("$id: lei_10826_2003"));
    assert!(yaml.contains("fragments:\n  - article: Art. 1º"));
    assert!(yaml.contains("paragraph: caput"));
    assert!(yaml.contains("citation: true"));
    assert!(yaml.contains("issues:\n  - Line 14 skips the enclosing inciso level"));
}
