//! WordNet-style morphological reduction.
//!
//! A form is first looked up in the irregular exception table. Otherwise the
//! detachment rules for its part of speech are applied once and every result
//! (plus the form itself) found in the lemma index is returned; if none is,
//! rules keep being applied to the previous round's output until something
//! matches or nothing is left.

use crate::store::LexiconStore;
use deptree_api::PartOfSpeech;
use indexmap::IndexSet;

const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJECTIVE_RULES: &[(&str, &str)] = &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

pub fn rules(pos: PartOfSpeech) -> &'static [(&'static str, &'static str)] {
    match pos {
        PartOfSpeech::Noun => NOUN_RULES,
        PartOfSpeech::Verb => VERB_RULES,
        PartOfSpeech::Adjective => ADJECTIVE_RULES,
        PartOfSpeech::Adverb => &[],
    }
}

/// Every base form of `form` known to `store`, in discovery order.
pub fn morphy(store: &LexiconStore, form: &str, pos: PartOfSpeech) -> Vec<String> {
    let known = |candidates: &[String]| -> Vec<String> {
        candidates
            .iter()
            .filter(|c| store.contains(c, pos))
            .cloned()
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    };

    if let Some(bases) = store.exception_bases(form, pos) {
        let mut candidates = vec![form.to_string()];
        candidates.extend(bases.iter().cloned());
        return known(&candidates);
    }

    let rules = rules(pos);
    let mut forms = apply_rules(&[form.to_string()], rules);

    let mut first = vec![form.to_string()];
    first.extend(forms.iter().cloned());
    let found = known(&first);
    if !found.is_empty() {
        return found;
    }

    // Every rule shortens the form or cannot re-apply, so this terminates
    while !forms.is_empty() {
        forms = apply_rules(&forms, rules);
        let found = known(&forms);
        if !found.is_empty() {
            return found;
        }
    }
    Vec::new()
}

fn apply_rules(forms: &[String], rules: &[(&str, &str)]) -> Vec<String> {
    let mut out = IndexSet::new();
    for form in forms {
        for (old, new) in rules {
            if let Some(stem) = form.strip_suffix(old) {
                out.insert(format!("{stem}{new}"));
            }
        }
    }
    out.into_iter().collect()
}
