//! Punctuation normalization
//!
//! The rule's substitutions are applied one entry at a time, in declared
//! order. Each entry replaces every non-overlapping occurrence of its key in
//! the text no earlier entry has replaced. Replacement text is never scanned
//! again, so a table like `? -> ;` and `; -> ·` cannot cascade.

use std::borrow::Cow;

use crate::language::LocaleRule;

/// Part of the text being normalized
#[derive(Debug, Clone, Copy)]
struct Piece<'t> {
    text: &'t str,
    /// Produced by a substitution and closed to later entries
    replaced: bool,
}

impl<'t> Piece<'t> {
    fn original(text: &'t str) -> Self {
        Self {
            text,
            replaced: false,
        }
    }
}

/// Applies a locale's punctuation substitutions
#[derive(Debug, Clone, Copy, Default)]
pub struct PunctuationNormalizer;

impl PunctuationNormalizer {
    /// Substitute punctuation according to `rule`
    ///
    /// The input is borrowed back unchanged when nothing matched.
    pub fn normalize<'a>(rule: &LocaleRule, text: &'a str) -> Cow<'a, str> {
        let mut pieces = vec![Piece::original(text)];
        let mut changed = false;

        for entry in rule.punctuation_map().entries() {
            let key = entry.from.as_str();
            if !pieces.iter().any(|p| !p.replaced && p.text.contains(key)) {
                continue;
            }
            changed = true;

            let mut next = Vec::with_capacity(pieces.len() + 2);
            for piece in pieces {
                if piece.replaced {
                    next.push(piece);
                    continue;
                }

                let mut copied = 0;
                for (at, _) in piece.text.match_indices(key) {
                    if at > copied {
                        next.push(Piece::original(&piece.text[copied..at]));
                    }
                    next.push(Piece {
                        text: entry.to.as_str(),
                        replaced: true,
                    });
                    copied = at + key.len();
                }
                if copied < piece.text.len() {
                    next.push(Piece::original(&piece.text[copied..]));
                }
            }
            pieces = next;
        }

        if changed {
            Cow::Owned(pieces.iter().map(|piece| piece.text).collect())
        } else {
            Cow::Borrowed(text)
        }
    }

    /// Normalize, then convert a final punctuation mark that has no space after it
    ///
    /// Substitutions keyed on "mark + space" cannot fire at the very end of
    /// a message. If the text ends with such a mark it is replaced by that
    /// entry's target with trailing whitespace removed, unless the mark is
    /// repeated (`...`).
    pub fn translate(rule: &LocaleRule, text: &str) -> String {
        let mut out = Self::normalize(rule, text).into_owned();

        let (last, prev) = {
            let mut rev = out.chars().rev();
            (rev.next(), rev.next())
        };
        let Some(last) = last else {
            return out;
        };
        if prev == Some(last) {
            return out;
        }

        if let Some(target) = rule.punctuation_map().get(&format!("{last} ")) {
            out.truncate(out.len() - last.len_utf8());
            out.push_str(target.trim_end());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::{LocaleOverrides, LocaleRule};

    fn ja() -> LocaleRule {
        LocaleRule::standalone(
            "ja",
            &LocaleOverrides::new()
                .sentence_enders(['。'])
                .punctuation(". ", "。")
                .punctuation(", ", "、")
                .punctuation(".\n", "。\n"),
        )
        .unwrap()
    }

    fn el() -> LocaleRule {
        LocaleRule::standalone(
            "el",
            &LocaleOverrides::new().punctuation("?", ";").punctuation(";", "·"),
        )
        .unwrap()
    }

    #[test]
    fn test_key_requires_trailing_space() {
        assert_eq!(PunctuationNormalizer::normalize(&ja(), "Hello. World."), "Hello。World.");
    }

    #[test]
    fn test_multiple_entries() {
        assert_eq!(
            PunctuationNormalizer::normalize(&ja(), "A, B. C.\nD"),
            "A、B。C。\nD"
        );
    }

    #[test]
    fn test_replacements_do_not_cascade() {
        assert_eq!(PunctuationNormalizer::normalize(&el(), "a?b;"), "a;b·");
    }

    #[test]
    fn test_earlier_entry_claims_overlapping_text() {
        let rule = LocaleRule::standalone(
            "fr",
            &LocaleOverrides::new()
                .punctuation(" !", "!")
                .punctuation("? ", "？"),
        )
        .unwrap();

        // " !" runs first and takes the space "? " would need
        assert_eq!(PunctuationNormalizer::normalize(&rule, "Quoi? !"), "Quoi?!");
        assert_eq!(PunctuationNormalizer::normalize(&rule, "Quoi? Oui !"), "Quoi？Oui!");
    }

    #[test]
    fn test_later_entry_skips_replaced_text() {
        let rule = LocaleRule::standalone(
            "xx",
            &LocaleOverrides::new().punctuation("ab", "X").punctuation("Xb", "Y"),
        )
        .unwrap();

        assert_eq!(PunctuationNormalizer::normalize(&rule, "abb Xb"), "Xb Y");
    }

    #[test]
    fn test_unchanged_text_is_borrowed() {
        let text = "nothing to do";
        assert!(matches!(
            PunctuationNormalizer::normalize(&ja(), text),
            Cow::Borrowed(_)
        ));

        let empty = LocaleRule::standalone("xx", &LocaleOverrides::new()).unwrap();
        assert!(matches!(
            PunctuationNormalizer::normalize(&empty, "A. B."),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn test_multibyte_text_around_matches() {
        assert_eq!(
            PunctuationNormalizer::normalize(&ja(), "日本. 語, です"),
            "日本。語、です"
        );
    }

    #[test]
    fn test_idempotent_when_targets_are_not_keys() {
        let rule = ja();
        let once = PunctuationNormalizer::normalize(&rule, "One. Two, three. ").into_owned();
        let twice = PunctuationNormalizer::normalize(&rule, &once).into_owned();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_input_is_left_alone() {
        let text = String::from("Hello. World.");
        let normalized = PunctuationNormalizer::normalize(&ja(), &text).into_owned();
        assert_eq!(text, "Hello. World.");
        assert_ne!(normalized, text);
    }

    #[test]
    fn test_translate_converts_final_mark() {
        assert_eq!(PunctuationNormalizer::translate(&ja(), "Hello. World."), "Hello。World。");
        assert_eq!(PunctuationNormalizer::translate(&ja(), "A, B,"), "A、B、");
    }

    #[test]
    fn test_translate_leaves_repeated_marks() {
        assert_eq!(PunctuationNormalizer::translate(&ja(), "Wait..."), "Wait...");
    }

    #[test]
    fn test_translate_edge_cases() {
        assert_eq!(PunctuationNormalizer::translate(&ja(), ""), "");
        assert_eq!(PunctuationNormalizer::translate(&ja(), "."), "。");
        assert_eq!(PunctuationNormalizer::translate(&ja(), "no mark"), "no mark");
    }
}
