//! Static clinical lookup tables.
//!
//! One record per condition. Prevention advice and recommended tests live on
//! the same record so the two can never drift apart under different key sets.

/// Everything we know about one condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionInfo {
    pub name: &'static str,
    pub prevention: &'static str,
    pub tests: &'static str,
}

/// Returned when no symptom rule matches.
pub const UNIDENTIFIED: &str = "Disease not identified. Please consult a doctor.";

/// Prevention fallback for conditions without a record.
pub const DEFAULT_PREVENTION: &str =
    "Consult a healthcare professional for prevention tips.";

/// Test fallback for conditions without a record.
pub const DEFAULT_TESTS: &str =
    "Consult a healthcare professional for the necessary test.";

/// Ordered (keyword phrase, condition name) pairs.
///
/// Matching scans top to bottom and stops at the first phrase found in the
/// input, so the order here is observable behavior. Hepatitis appears twice
/// on purpose: two distinct phrasings point at the same condition.
pub const SYMPTOM_RULES: &[(&str, &str)] = &[
    ("fever cough", "Flu or Chest Infection"),
    ("headache nausea", "Migraine"),
    ("chest pain shortness of breath", "Heart Attack"),
    ("stomach pain nausea", "Food Poisoning"),
    ("fatigue weakness", "Anemia"),
    ("rash joint pain", "Lupus"),
    ("difficulty breathing wheezing", "Asthma"),
    ("painful urination blood in urine", "Urinary Tract Infection"),
    ("fever chills headache", "Malaria"),
    ("abdominal pain yellow skin", "Hepatitis"),
    ("joint pain swelling", "Rheumatoid Arthritis"),
    ("nausea dizziness", "Vertigo"),
    ("persistent cough weight loss", "Tuberculosis"),
    ("bloody stool diarrhea", "Colorectal Cancer"),
    ("blurry vision headaches", "Diabetes"),
    ("swollen lymph nodes fever", "Lymphoma"),
    ("severe headache stiff neck", "Meningitis"),
    ("swelling in legs high blood pressure", "Kidney Disease"),
    ("night sweats cough", "Pneumonia"),
    ("yellowing of eyes dark urine", "Hepatitis"),
    ("chronic back pain tingling", "Sciatica"),
    ("sore throat swollen glands", "Strep Throat"),
];

pub const CONDITIONS: &[ConditionInfo] = &[
    ConditionInfo {
        name: "Flu or Chest Infection",
        prevention: "Get vaccinated, avoid contact with sick individuals, wash hands regularly.",
        tests: "Rapid Influenza Diagnostic Test (RIDT), Chest X-ray, Sputum Culture",
    },
    ConditionInfo {
        name: "Migraine",
        prevention: "Maintain a regular sleep schedule, reduce stress, avoid known triggers.",
        tests: "MRI, CT scan, Blood tests",
    },
    ConditionInfo {
        name: "Heart Attack",
        prevention: "Exercise regularly, eat a heart-healthy diet, avoid smoking.",
        tests: "Electrocardiogram (ECG), Blood tests (Troponin levels), Coronary Angiogram",
    },
    ConditionInfo {
        name: "Food Poisoning",
        prevention: "Wash hands before eating, avoid undercooked food, drink clean water.",
        tests: "Stool Culture, Blood tests",
    },
    ConditionInfo {
        name: "Anemia",
        prevention: "Eat iron-rich foods, avoid caffeine with meals, take iron supplements if prescribed.",
        tests: "Complete Blood Count (CBC), Iron studies",
    },
    ConditionInfo {
        name: "Lupus",
        prevention: "Manage stress, avoid sun exposure, take prescribed medications.",
        tests: "Antinuclear Antibody (ANA) test, Blood tests",
    },
    ConditionInfo {
        name: "Asthma",
        prevention: "Avoid triggers, use prescribed inhalers, keep the airways open.",
        tests: "Spirometry, Peak Flow Measurement, Blood tests",
    },
    ConditionInfo {
        name: "Urinary Tract Infection",
        prevention: "Drink plenty of water, practice good hygiene, urinate after interlab.",
        tests: "Urine Culture, Urinalysis",
    },
    ConditionInfo {
        name: "Malaria",
        prevention: "Use insect repellent, sleep under mosquito nets, take anti-malarial medications.",
        tests: "Blood Smear, Rapid Diagnostic Test (RDT)",
    },
    ConditionInfo {
        name: "Hepatitis",
        prevention: "Get vaccinated, avoid sharing needles, avoid alcohol.",
        tests: "Hepatitis B Surface Antigen (HBsAg), Hepatitis C Antibody Test",
    },
    ConditionInfo {
        name: "Rheumatoid Arthritis",
        prevention: "Take prescribed medications, exercise regularly, maintain a healthy weight.",
        tests: "Rheumatoid Factor (RF), Anti-CCP Antibody Test, X-rays",
    },
    ConditionInfo {
        name: "Vertigo",
        prevention: "Avoid sudden head movements, stay hydrated, manage stress.",
        tests: "MRI, CT scan, Vestibular Testing",
    },
    ConditionInfo {
        name: "Tuberculosis",
        prevention: "Follow prescribed medication regimen, avoid contact with infected individuals, wear a mask.",
        tests: "Tuberculin Skin Test (TST), Chest X-ray, Sputum Culture",
    },
    ConditionInfo {
        name: "Colorectal Cancer",
        prevention: "Get screened regularly, eat a high-fiber diet, exercise regularly.",
        tests: "Colonoscopy, Fecal Occult Blood Test (FOBT), Biopsy",
    },
    ConditionInfo {
        name: "Diabetes",
        prevention: "Maintain a healthy weight, exercise regularly, monitor blood sugar levels.",
        tests: "Fasting Blood Sugar Test, HbA1c Test, Oral Glucose Tolerance Test",
    },
    ConditionInfo {
        name: "Lymphoma",
        prevention: "Consult a doctor for early detection, manage stress, avoid smoking.",
        tests: "Biopsy, Blood tests, PET scan, CT scan",
    },
    ConditionInfo {
        name: "Meningitis",
        prevention: "Get vaccinated, avoid close contact with infected individuals, practice good hygiene.",
        tests: "Lumbar Puncture (Spinal Tap), Blood Culture, CT scan",
    },
    ConditionInfo {
        name: "Kidney Disease",
        prevention: "Monitor blood pressure, stay hydrated, avoid excessive salt intake.",
        tests: "Urinalysis, Kidney Function Tests (Creatinine, GFR), Ultrasound",
    },
    ConditionInfo {
        name: "Pneumonia",
        prevention: "Get vaccinated, avoid smoking, practice good hygiene, stay away from infected individuals.",
        tests: "Chest X-ray, Sputum Culture, Blood tests",
    },
    ConditionInfo {
        name: "Sciatica",
        prevention: "Exercise regularly, maintain good posture, avoid heavy lifting.",
        tests: "MRI, CT scan, X-ray",
    },
    ConditionInfo {
        name: "Strep Throat",
        prevention: "Wash hands regularly, avoid close contact with infected individuals, finish prescribed antibiotics.",
        tests: "Rapid Antigen Test, Throat Culture",
    },
];

pub fn condition_info(name: &str) -> Option<&'static ConditionInfo> {
    CONDITIONS.iter().find(|c| c.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_rule_resolves_to_a_condition() {
        for (phrase, condition) in SYMPTOM_RULES {
            assert!(
                condition_info(condition).is_some(),
                "rule '{phrase}' names unknown condition '{condition}'"
            );
        }
    }

    #[test]
    fn condition_names_are_unique() {
        for (i, a) in CONDITIONS.iter().enumerate() {
            for b in &CONDITIONS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn lookup_miss_is_none() {
        assert!(condition_info("Common Cold").is_none());
        assert!(condition_info("").is_none());
    }
}
