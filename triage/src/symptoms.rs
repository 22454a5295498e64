//! Free-text symptom matching.

use serde::Serialize;

use crate::knowledge::{self, SYMPTOM_RULES};

/// Outcome of matching one symptom description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assessment {
    pub condition: String,
    pub prevention: String,
    pub tests: String,
}

/// Matches a symptom description against the rule table.
///
/// The input is lowercased and trimmed, then scanned against
/// [`SYMPTOM_RULES`] in table order; the first phrase contained in the input
/// wins. A miss yields the unidentified sentinel, and either lookup missing
/// its condition record degrades to the generic advice strings.
pub fn evaluate(input: &str) -> Assessment {
    let normalized = input.to_lowercase();
    let normalized = normalized.trim();

    match SYMPTOM_RULES
        .iter()
        .find(|(phrase, _)| normalized.contains(phrase))
    {
        Some((_, condition)) => {
            let info = knowledge::condition_info(condition);

            Assessment {
                condition: (*condition).to_string(),
                prevention: info
                    .map_or(knowledge::DEFAULT_PREVENTION, |i| i.prevention)
                    .to_string(),
                tests: info
                    .map_or(knowledge::DEFAULT_TESTS, |i| i.tests)
                    .to_string(),
            }
        }
        None => Assessment {
            condition: knowledge::UNIDENTIFIED.to_string(),
            prevention: knowledge::DEFAULT_PREVENTION.to_string(),
            tests: knowledge::DEFAULT_TESTS.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::{DEFAULT_PREVENTION, DEFAULT_TESTS, UNIDENTIFIED};

    #[test]
    fn every_phrase_matches_its_condition() {
        for (phrase, condition) in SYMPTOM_RULES {
            let input = format!("patient reports {phrase} since last week");
            assert_eq!(evaluate(&input).condition, *condition);
        }
    }

    #[test]
    fn matching_is_case_insensitive() {
        let result = evaluate("FEVER COUGH");
        assert_eq!(result.condition, "Flu or Chest Infection");
        assert_eq!(
            result.prevention,
            "Get vaccinated, avoid contact with sick individuals, wash hands regularly."
        );
        assert_eq!(
            result.tests,
            "Rapid Influenza Diagnostic Test (RIDT), Chest X-ray, Sputum Culture"
        );
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(evaluate("   fever cough   ").condition, "Flu or Chest Infection");
    }

    #[test]
    fn table_order_breaks_ties() {
        // Contains both the Flu phrase (rule 1) and the Rheumatoid Arthritis
        // phrase (rule 11); the earlier rule wins.
        let input = "fever cough along with joint pain swelling";
        assert_eq!(evaluate(input).condition, "Flu or Chest Infection");

        // Same two phrases in the opposite textual order; still rule 1.
        let input = "joint pain swelling along with fever cough";
        assert_eq!(evaluate(input).condition, "Flu or Chest Infection");
    }

    #[test]
    fn unmatched_input_yields_sentinel_and_defaults() {
        for input in ["just a papercut", "", "   "] {
            let result = evaluate(input);
            assert_eq!(result.condition, UNIDENTIFIED);
            assert_eq!(result.prevention, DEFAULT_PREVENTION);
            assert_eq!(result.tests, DEFAULT_TESTS);
        }
    }

    #[test]
    fn evaluation_is_idempotent() {
        let input = "severe headache stiff neck for two days";
        assert_eq!(evaluate(input), evaluate(input));
    }
}
