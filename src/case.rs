// SPDX-FileCopyrightText: 2026 Sébastien Helleu <flashcode@flashtux.org>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Case conversion of identifiers (keys and file names).
//!
//! An identifier is split into words, then the words are joined again using
//! the target case. Word boundaries are:
//! - the separators `_`, `-` and whitespace,
//! - a lowercase letter or a digit followed by an uppercase letter (`aceTrainer`),
//! - the last uppercase letter of an acronym followed by a lowercase letter
//!   (`HTMLParser` is split into `HTML` and `Parser`).

use std::str::FromStr;

/// Target case of an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Case {
    /// `camelCase`
    Camel,

    /// `kebab-case`
    Kebab,

    /// `PascalCase`
    Pascal,

    /// `snake_case`
    Snake,

    /// `UPPER_SNAKE_CASE`
    UpperSnake,

    /// `Pascal_Snake_Case`
    PascalSnake,
}

pub const CASE_NAMES: [&str; 6] = [
    "camel",
    "kebab",
    "pascal",
    "snake",
    "upper-snake",
    "pascal-snake",
];

impl std::fmt::Display for Case {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self {
            Case::Camel => "camel",
            Case::Kebab => "kebab",
            Case::Pascal => "pascal",
            Case::Snake => "snake",
            Case::UpperSnake => "upper-snake",
            Case::PascalSnake => "pascal-snake",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Case {
    type Err = Box<dyn std::error::Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "camel" | "camelCase" => Ok(Case::Camel),
            "kebab" | "kebab-case" => Ok(Case::Kebab),
            "pascal" | "PascalCase" => Ok(Case::Pascal),
            "snake" | "snake_case" => Ok(Case::Snake),
            "upper-snake" | "UPPER_SNAKE_CASE" => Ok(Case::UpperSnake),
            "pascal-snake" | "Pascal_Snake_Case" => Ok(Case::PascalSnake),
            _ => Err(format!(
                "unknown case format: '{s}' (expected one of: {})",
                CASE_NAMES.join(", ")
            )
            .into()),
        }
    }
}

impl Case {
    /// Convert the identifier to this case.
    ///
    /// Acronyms of a mixed case identifier (`userID`, `maxHP`) are kept in upper case
    /// with camel and pascal cases, so that converting a result again gives the same
    /// result.
    pub fn convert(self, s: &str) -> String {
        let words = split_words(s);
        match self {
            Case::Camel => {
                let mut result = String::with_capacity(s.len());
                for (idx, word) in words.iter().enumerate() {
                    if idx == 0 {
                        result.push_str(&word.text.to_lowercase());
                    } else {
                        result.push_str(&word.capitalize());
                    }
                }
                result
            }
            Case::Kebab => join_words(&words, "-", |w| w.text.to_lowercase()),
            Case::Pascal => join_words(&words, "", Word::capitalize),
            Case::Snake => join_words(&words, "_", |w| w.text.to_lowercase()),
            Case::UpperSnake => join_words(&words, "_", |w| w.text.to_uppercase()),
            Case::PascalSnake => join_words(&words, "_", |w| capitalize(w.text)),
        }
    }
}

/// A word of an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word<'a> {
    pub text: &'a str,
    /// Upper case word (acronym) kept as-is in camel and pascal cases.
    pub acronym: bool,
}

impl<'a> Word<'a> {
    fn new(text: &'a str, mixed: bool) -> Self {
        let acronym = mixed
            && text.chars().any(char::is_uppercase)
            && !text.chars().any(char::is_lowercase);
        Self { text, acronym }
    }

    /// Capitalize the word, an acronym is kept in upper case.
    fn capitalize(&self) -> String {
        if self.acronym {
            self.text.to_string()
        } else {
            capitalize(self.text)
        }
    }
}

/// Split an identifier into words.
///
/// An upper case word is an acronym if it comes from a mixed case part (`ID` in `userID`)
/// or if the identifier has no separator (`AB`).
pub fn split_words(s: &str) -> Vec<Word<'_>> {
    let parts: Vec<&str> = s
        .split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();
    let single_part = parts.len() == 1;
    let mut words = Vec::new();
    for part in parts {
        let mixed = single_part || part.chars().any(char::is_lowercase);
        let chars: Vec<(usize, char)> = part.char_indices().collect();
        let mut start = 0;
        for (pos, &(idx, c)) in chars.iter().enumerate().skip(1) {
            if !c.is_uppercase() {
                continue;
            }
            let prev = chars[pos - 1].1;
            let next_is_lower = chars.get(pos + 1).is_some_and(|(_, n)| n.is_lowercase());
            if prev.is_lowercase() || prev.is_numeric() || (prev.is_uppercase() && next_is_lower)
            {
                words.push(Word::new(&part[start..idx], mixed));
                start = idx;
            }
        }
        words.push(Word::new(&part[start..], mixed));
    }
    words
}

/// Uppercase the first char of a word and lowercase the others.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn join_words<'a, F>(words: &[Word<'a>], separator: &str, transform: F) -> String
where
    F: Fn(&Word<'a>) -> String,
{
    words
        .iter()
        .map(transform)
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_CASES: [Case; 6] = [
        Case::Camel,
        Case::Kebab,
        Case::Pascal,
        Case::Snake,
        Case::UpperSnake,
        Case::PascalSnake,
    ];

    fn texts(s: &str) -> Vec<&str> {
        split_words(s).iter().map(|w| w.text).collect()
    }

    #[test]
    fn test_split_words() {
        assert!(split_words("").is_empty());
        assert!(split_words("__--").is_empty());
        assert_eq!(texts("trainer"), vec!["trainer"]);
        assert_eq!(texts("aceTrainer"), vec!["ace", "Trainer"]);
        assert_eq!(texts("AceTrainer"), vec!["Ace", "Trainer"]);
        assert_eq!(texts("ace_trainer"), vec!["ace", "trainer"]);
        assert_eq!(texts("ace-trainer"), vec!["ace", "trainer"]);
        assert_eq!(texts("ace trainer"), vec!["ace", "trainer"]);
        assert_eq!(texts("HTMLParser"), vec!["HTML", "Parser"]);
        assert_eq!(texts("level2Up"), vec!["level2", "Up"]);
        assert_eq!(texts("ACE_TRAINER"), vec!["ACE", "TRAINER"]);
        assert_eq!(texts("écoleÉté"), vec!["école", "Été"]);
    }

    #[test]
    fn test_split_words_acronyms() {
        let words = split_words("userID");
        assert_eq!(
            words,
            vec![
                Word { text: "user", acronym: false },
                Word { text: "ID", acronym: true },
            ]
        );
        assert!(split_words("AB")[0].acronym);
        assert!(split_words("xYZ")[1].acronym);
        assert!(split_words("ACE_TRAINER").iter().all(|w| !w.acronym));
        assert!(!split_words("level2")[0].acronym);
    }

    #[test]
    fn test_camel() {
        assert_eq!(Case::Camel.convert("Ace_Trainer"), "aceTrainer");
        assert_eq!(Case::Camel.convert("ace-trainer"), "aceTrainer");
        assert_eq!(Case::Camel.convert("ACE_TRAINER"), "aceTrainer");
        assert_eq!(Case::Camel.convert("AceTrainer"), "aceTrainer");
        assert_eq!(Case::Camel.convert("HTMLParser"), "htmlParser");
        assert_eq!(Case::Camel.convert("userID"), "userID");
        assert_eq!(Case::Camel.convert("maxHP"), "maxHP");
        assert_eq!(Case::Camel.convert("x_y_z"), "xYZ");
        assert_eq!(Case::Camel.convert("xYZ"), "xYZ");
        assert_eq!(Case::Camel.convert("IDCard"), "idCard");
        assert_eq!(Case::Camel.convert(""), "");
    }

    #[test]
    fn test_kebab() {
        assert_eq!(Case::Kebab.convert("My_Weird_File"), "my-weird-file");
        assert_eq!(Case::Kebab.convert("myWeirdFile"), "my-weird-file");
        assert_eq!(Case::Kebab.convert("my weird  file"), "my-weird-file");
        assert_eq!(Case::Kebab.convert("menu-ui-handler"), "menu-ui-handler");
    }

    #[test]
    fn test_pascal() {
        assert_eq!(Case::Pascal.convert("ace_trainer"), "AceTrainer");
        assert_eq!(Case::Pascal.convert("aceTrainer"), "AceTrainer");
        assert_eq!(Case::Pascal.convert("male"), "Male");
        assert_eq!(Case::Pascal.convert("a_b"), "AB");
        assert_eq!(Case::Pascal.convert("AB"), "AB");
        assert_eq!(Case::Pascal.convert("userID"), "UserID");
    }

    #[test]
    fn test_snake() {
        assert_eq!(Case::Snake.convert("aceTrainer"), "ace_trainer");
        assert_eq!(Case::Snake.convert("Ace-Trainer"), "ace_trainer");
    }

    #[test]
    fn test_upper_snake() {
        assert_eq!(Case::UpperSnake.convert("aceTrainer"), "ACE_TRAINER");
        assert_eq!(Case::UpperSnake.convert("ace-trainer"), "ACE_TRAINER");
    }

    #[test]
    fn test_pascal_snake() {
        assert_eq!(Case::PascalSnake.convert("aceTrainer"), "Ace_Trainer");
        assert_eq!(Case::PascalSnake.convert("ACE_TRAINER"), "Ace_Trainer");
        assert_eq!(Case::PascalSnake.convert("userID"), "User_Id");
    }

    #[test]
    fn test_idempotence() {
        let identifiers = [
            "aceTrainer",
            "Ace_Trainer_male",
            "my-weird-file",
            "HTMLParser",
            "level2Up",
            "pokemon info container",
            "ABILITY_NAME",
            "x_y_z",
            "xYZ",
            "a_b",
            "AB",
            "userID",
            "maxHP",
            "IDCard",
        ];
        for case in ALL_CASES {
            for identifier in identifiers {
                let converted = case.convert(identifier);
                assert_eq!(
                    case.convert(&converted),
                    converted,
                    "case {case}, identifier {identifier}"
                );
            }
        }
    }

    #[test]
    fn test_from_str() {
        for name in CASE_NAMES {
            let case = Case::from_str(name).unwrap();
            assert_eq!(case.to_string(), name);
        }
        assert_eq!(Case::from_str("camelCase").unwrap(), Case::Camel);
        assert_eq!(Case::from_str("kebab-case").unwrap(), Case::Kebab);
        assert_eq!(Case::from_str("PascalCase").unwrap(), Case::Pascal);
        assert_eq!(Case::from_str("snake_case").unwrap(), Case::Snake);
        assert_eq!(Case::from_str("UPPER_SNAKE_CASE").unwrap(), Case::UpperSnake);
        assert_eq!(
            Case::from_str("Pascal_Snake_Case").unwrap(),
            Case::PascalSnake
        );
        let err = Case::from_str("title").unwrap_err();
        assert!(err.to_string().starts_with("unknown case format: 'title'"));
    }
}
