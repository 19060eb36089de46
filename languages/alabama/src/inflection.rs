//! Forms and labels derived from an entry's class and principal parts.

use akz_core::dictionary::DictionaryEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Person {
    FirstSingular,
    SecondSingular,
    FirstPlural,
    SecondPlural,
    ThirdPlural,
}

impl Person {
    pub fn as_str(&self) -> &'static str {
        match self {
            Person::FirstSingular => "first person singular",
            Person::SecondSingular => "second person singular",
            Person::FirstPlural => "first person plural",
            Person::SecondPlural => "second person plural",
            Person::ThirdPlural => "third person plural",
        }
    }
}

/// Persons the listed principal parts stand for, in dataset order
const PRINCIPAL_PERSONS: [Person; 3] = [
    Person::SecondSingular,
    Person::FirstPlural,
    Person::SecondPlural,
];

/// Class marker of verbs inflected with the -li suffix
const LI_CLASS: &str = "-LI";

const NEGATIVE_PREFIX: &str = "Negative form of ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InflectedForm {
    pub form: String,
    pub person: Person,
}

impl InflectedForm {
    fn new(form: impl Into<String>, person: Person) -> Self {
        Self {
            form: form.into(),
            person,
        }
    }
}

/// Definition split into its numbered senses
pub fn senses(entry: &DictionaryEntry) -> Vec<&str> {
    entry
        .definition
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// "`{class}` Verb" for verbal senses of entries with a single class
pub fn verb_class_label(entry: &DictionaryEntry, sense: &str) -> Option<String> {
    let class = entry.word_class.as_deref()?;
    if sense.trim_start().starts_with("to ") && !class.contains(';') {
        Some(format!("{class} Verb"))
    } else {
        None
    }
}

/// Principal parts paired with the person each one expresses
pub fn principal_parts(entry: &DictionaryEntry) -> Vec<InflectedForm> {
    let Some(parts) = entry.principal_part.as_deref() else {
        return Vec::new();
    };

    parts
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .zip(PRINCIPAL_PERSONS)
        .map(|(part, person)| InflectedForm::new(part, person))
        .collect()
}

/// Full stem paradigm of a -LI verb, `None` for anything else
pub fn inflectional_stems(entry: &DictionaryEntry) -> Option<Vec<InflectedForm>> {
    let class = entry.word_class.as_deref()?;
    if entry.principal_part.is_none() || !class.contains(LI_CLASS) {
        return None;
    }

    let mut stems = Vec::with_capacity(PRINCIPAL_PERSONS.len() + 2);
    stems.push(InflectedForm::new(
        format!("{}li", entry.lemma),
        Person::FirstSingular,
    ));
    stems.extend(principal_parts(entry));
    stems.push(InflectedForm::new(
        format!("ho{}", entry.lemma),
        Person::ThirdPlural,
    ));
    Some(stems)
}

/// Entry that records the negative stem of `lemma`
pub fn negative_stem<'a>(entries: &'a [DictionaryEntry], lemma: &str) -> Option<&'a DictionaryEntry> {
    entries.iter().find(|e| {
        e.definition
            .strip_prefix(NEGATIVE_PREFIX)
            .is_some_and(|rest| rest == lemma)
    })
}
