//! Health quiz test recommendation.

use serde::{Deserialize, Deserializer, Serialize};

pub const CARDIAC_PANEL: &str =
    "Electrocardiogram (ECG), Coronary Angiogram, Blood Tests (Cholesterol, Lipids)";
pub const NEURO_PANEL: &str = "MRI, CT scan, Blood Pressure Monitoring";
pub const DIABETES_PANEL: &str =
    "Fasting Blood Sugar Test, HbA1c Test, Oral Glucose Tolerance Test";
pub const RESPIRATORY_PANEL: &str =
    "Chest X-ray, Spirometry, Blood tests (for Carbon Monoxide levels)";
pub const DIGESTIVE_PANEL: &str = "Stool Culture, Endoscopy, Liver Function Tests";
pub const GENERAL_PANEL: &str =
    "Complete Blood Count (CBC), Liver Function Test, Kidney Function Test";

/// One explicit quiz answer.
///
/// Unanswered questions are `None` on [`QuizAnswers`]. The distinction
/// matters only for the exercise rule, which fires on an explicit "No";
/// everywhere else unanswered behaves exactly like "No".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Answer {
    Yes,
    No,
}

fn lenient_answer<'de, D>(deserializer: D) -> Result<Option<Answer>, D::Error>
where
    D: Deserializer<'de>,
{
    // Anything other than a literal "Yes"/"No" counts as unanswered.
    let raw = Option::<String>::deserialize(deserializer)?;

    Ok(match raw.as_deref() {
        Some("Yes") => Some(Answer::Yes),
        Some("No") => Some(Answer::No),
        _ => None,
    })
}

/// A quiz submission. Missing fields deserialize as unanswered.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizAnswers {
    #[serde(deserialize_with = "lenient_answer")]
    pub headache: Option<Answer>,
    #[serde(deserialize_with = "lenient_answer")]
    pub heart_disease: Option<Answer>,
    #[serde(deserialize_with = "lenient_answer")]
    pub exercise: Option<Answer>,
    #[serde(deserialize_with = "lenient_answer")]
    pub smoker: Option<Answer>,
    #[serde(deserialize_with = "lenient_answer")]
    pub breathing: Option<Answer>,
    #[serde(deserialize_with = "lenient_answer")]
    pub family_diabetes: Option<Answer>,
    #[serde(deserialize_with = "lenient_answer")]
    pub digestive_issues: Option<Answer>,
}

/// One quiz prompt as served to the client.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub question: &'static str,
    pub options: [&'static str; 2],
}

pub const QUESTIONS: &[Question] = &[
    Question {
        id: "headache",
        question: "Do you experience frequent headaches?",
        options: ["Yes", "No"],
    },
    Question {
        id: "heart_disease",
        question: "Do you have a history of heart disease?",
        options: ["Yes", "No"],
    },
    Question {
        id: "exercise",
        question: "Do you exercise regularly?",
        options: ["Yes", "No"],
    },
    Question {
        id: "smoker",
        question: "Are you a smoker?",
        options: ["Yes", "No"],
    },
    Question {
        id: "breathing",
        question: "Do you experience shortness of breath?",
        options: ["Yes", "No"],
    },
    Question {
        id: "family_diabetes",
        question: "Do you have any family history of diabetes?",
        options: ["Yes", "No"],
    },
    Question {
        id: "digestive_issues",
        question: "Do you have any digestive issues (e.g., bloating, pain)?",
        options: ["Yes", "No"],
    },
];

/// Maps a quiz submission to an ordered list of recommended test panels.
///
/// The five rules are independent and evaluated in a fixed order; each one
/// that holds appends its panel. When none hold, the result is exactly one
/// general check-up panel.
pub fn recommend(answers: &QuizAnswers) -> Vec<String> {
    let mut tests = Vec::new();

    if answers.heart_disease == Some(Answer::Yes) && answers.breathing == Some(Answer::Yes) {
        tests.push(CARDIAC_PANEL.to_string());
    }

    if answers.headache == Some(Answer::Yes) {
        tests.push(NEURO_PANEL.to_string());
    }

    if answers.family_diabetes == Some(Answer::Yes) || answers.exercise == Some(Answer::No) {
        tests.push(DIABETES_PANEL.to_string());
    }

    if answers.smoker == Some(Answer::Yes) {
        tests.push(RESPIRATORY_PANEL.to_string());
    }

    if answers.digestive_issues == Some(Answer::Yes) {
        tests.push(DIGESTIVE_PANEL.to_string());
    }

    if tests.is_empty() {
        tests.push(GENERAL_PANEL.to_string());
    }

    tests
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardiac_history_with_breathlessness_gets_cardiac_panel_only() {
        let answers = QuizAnswers {
            heart_disease: Some(Answer::Yes),
            breathing: Some(Answer::Yes),
            headache: Some(Answer::No),
            exercise: Some(Answer::Yes),
            smoker: Some(Answer::No),
            family_diabetes: Some(Answer::No),
            digestive_issues: Some(Answer::No),
        };

        assert_eq!(recommend(&answers), vec![CARDIAC_PANEL.to_string()]);
    }

    #[test]
    fn empty_submission_gets_general_checkup() {
        assert_eq!(
            recommend(&QuizAnswers::default()),
            vec![GENERAL_PANEL.to_string()]
        );
    }

    #[test]
    fn smoker_with_digestive_issues_gets_two_panels_in_rule_order() {
        let answers = QuizAnswers {
            smoker: Some(Answer::Yes),
            digestive_issues: Some(Answer::Yes),
            ..QuizAnswers::default()
        };

        assert_eq!(
            recommend(&answers),
            vec![RESPIRATORY_PANEL.to_string(), DIGESTIVE_PANEL.to_string()]
        );
    }

    #[test]
    fn heart_disease_alone_is_not_enough_for_the_cardiac_panel() {
        let answers = QuizAnswers {
            heart_disease: Some(Answer::Yes),
            ..QuizAnswers::default()
        };

        assert_eq!(recommend(&answers), vec![GENERAL_PANEL.to_string()]);
    }

    #[test]
    fn explicit_no_to_exercise_triggers_the_diabetes_panel() {
        let answers = QuizAnswers {
            exercise: Some(Answer::No),
            ..QuizAnswers::default()
        };

        assert_eq!(recommend(&answers), vec![DIABETES_PANEL.to_string()]);

        // Unanswered is not an explicit "No".
        let unanswered = QuizAnswers::default();
        assert_eq!(recommend(&unanswered), vec![GENERAL_PANEL.to_string()]);
    }

    #[test]
    fn all_rules_firing_keeps_rule_order() {
        let answers = QuizAnswers {
            headache: Some(Answer::Yes),
            heart_disease: Some(Answer::Yes),
            exercise: Some(Answer::No),
            smoker: Some(Answer::Yes),
            breathing: Some(Answer::Yes),
            family_diabetes: Some(Answer::Yes),
            digestive_issues: Some(Answer::Yes),
        };

        assert_eq!(
            recommend(&answers),
            vec![
                CARDIAC_PANEL.to_string(),
                NEURO_PANEL.to_string(),
                DIABETES_PANEL.to_string(),
                RESPIRATORY_PANEL.to_string(),
                DIGESTIVE_PANEL.to_string(),
            ]
        );
    }

    #[test]
    fn recommendation_is_idempotent() {
        let answers = QuizAnswers {
            smoker: Some(Answer::Yes),
            ..QuizAnswers::default()
        };

        assert_eq!(recommend(&answers), recommend(&answers));
    }

    #[test]
    fn missing_fields_deserialize_as_unanswered() {
        let answers: QuizAnswers = serde_json::from_str(r#"{"smoker": "Yes"}"#).unwrap();

        assert_eq!(answers.smoker, Some(Answer::Yes));
        assert_eq!(answers.exercise, None);
        assert_eq!(answers.headache, None);
    }

    #[test]
    fn unrecognized_values_deserialize_as_unanswered() {
        let answers: QuizAnswers =
            serde_json::from_str(r#"{"smoker": "maybe", "headache": null, "exercise": "no"}"#)
                .unwrap();

        assert_eq!(answers.smoker, None);
        assert_eq!(answers.headache, None);
        // Case matters: only a literal "No" is an explicit no.
        assert_eq!(answers.exercise, None);
    }
}
