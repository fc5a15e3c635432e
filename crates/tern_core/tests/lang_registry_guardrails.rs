use std::collections::HashMap;

use tern_core::lang::keywords;
use tern_core::lang::operators;
use tern_core::lang::punctuation;
use tern_core::lang::types;

#[test]
fn keywords_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, keywords::KeywordId> = HashMap::new();

    for info in keywords::KEYWORDS {
        assert_eq!(
            keywords::from_str(info.canonical),
            Some(info.id),
            "keyword canonical spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            keywords::as_str(info.id),
            info.canonical,
            "keyword as_str mismatch for {:?}",
            info.id
        );

        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate keyword spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn operators_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, operators::OperatorId> = HashMap::new();

    for info in operators::OPERATORS {
        assert_eq!(
            operators::from_str(info.spelling),
            Some(info.id),
            "operator spelling not resolvable: {}",
            info.spelling
        );
        if let Some(prev) = seen.insert(info.spelling, info.id) {
            panic!("duplicate operator spelling {:?}: {:?} and {:?}", info.spelling, prev, info.id);
        }
    }
}

#[test]
fn punctuation_spellings_unique_and_resolvable() {
    for info in punctuation::PUNCTUATION {
        assert_eq!(punctuation::from_str(info.canonical), Some(info.id));
        assert_eq!(punctuation::as_str(info.id), info.canonical);
    }
}

#[test]
fn type_names_resolvable() {
    for info in types::DATA_TYPES {
        assert_eq!(types::from_str(info.canonical), Some(info.id));
        assert_eq!(types::as_str(info.id), info.canonical);
    }
}

/// Words must resolve to at most one vocabulary class, otherwise the lexer would be ambiguous.
#[test]
fn no_spelling_shared_across_registries() {
    let mut owners: HashMap<&'static str, &'static str> = HashMap::new();

    let words = keywords::KEYWORDS
        .iter()
        .map(|k| (k.canonical, "keyword"))
        .chain(types::DATA_TYPES.iter().map(|t| (t.canonical, "type")))
        .chain(operators::OPERATORS.iter().map(|o| (o.spelling, "operator")))
        .chain(punctuation::PUNCTUATION.iter().map(|p| (p.canonical, "punctuation")));

    for (spelling, owner) in words {
        if let Some(prev) = owners.insert(spelling, owner) {
            panic!("spelling {spelling:?} registered as both {prev} and {owner}");
        }
    }
}
