//! Diagnostic test catalog.
//!
//! Static reference data behind the test-details pages. Lookup is by exact
//! display name, the same key the client gets from the listing.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TestInfo {
    pub name: &'static str,
    pub purpose: &'static str,
    pub category: &'static str,
    pub procedure: &'static str,
    pub preparation: &'static str,
    pub cost: &'static str,
    pub duration: &'static str,
}

pub const TESTS: &[TestInfo] = &[
    TestInfo {
        name: "Blood Test",
        purpose: "Check general health and detect diseases.",
        category: "Pathology",
        procedure: "Blood is drawn from a vein.",
        preparation: "Fast for 8-12 hours if required.",
        cost: "$50",
        duration: "10 minutes",
    },
    TestInfo {
        name: "X-Ray",
        purpose: "Diagnose fractures and injuries.",
        category: "Radiology",
        procedure: "Images are taken using X-ray machines.",
        preparation: "Wear comfortable clothes. Remove metal objects.",
        cost: "$100",
        duration: "20 minutes",
    },
    TestInfo {
        name: "MRI Scan",
        purpose: "Detailed images of organs and tissues.",
        category: "Radiology",
        procedure: "Lie still in a scanner for imaging.",
        preparation: "Avoid eating for 4 hours if required.",
        cost: "$500",
        duration: "45 minutes",
    },
    TestInfo {
        name: "CT Scan",
        purpose: "Generate detailed cross-sectional images of the body.",
        category: "Radiology",
        procedure: "Lie on a table that slides into a CT scanner.",
        preparation: "May require fasting for a few hours.",
        cost: "$400",
        duration: "30 minutes",
    },
    TestInfo {
        name: "Urine Test",
        purpose: "Detect infections, diseases, or other medical conditions.",
        category: "Pathology",
        procedure: "Provide a urine sample in a sterile container.",
        preparation: "Cleanse the area before providing the sample.",
        cost: "$20",
        duration: "5 minutes",
    },
    TestInfo {
        name: "Ultrasound",
        purpose: "Visualize internal organs and structures.",
        category: "Radiology",
        procedure: "A gel is applied, and a probe is moved over the area.",
        preparation: "May need to drink water or fast beforehand.",
        cost: "$150",
        duration: "30 minutes",
    },
    TestInfo {
        name: "ECG (Electrocardiogram)",
        purpose: "Measure the electrical activity of the heart.",
        category: "Cardiology",
        procedure: "Electrodes are attached to the skin to record activity.",
        preparation: "Avoid caffeine before the test.",
        cost: "$75",
        duration: "15 minutes",
    },
    TestInfo {
        name: "Allergy Test",
        purpose: "Identify specific allergens causing reactions.",
        category: "Immunology",
        procedure: "Skin pricking or blood test is conducted.",
        preparation: "Avoid antihistamines for a few days prior.",
        cost: "$200",
        duration: "30 minutes",
    },
    TestInfo {
        name: "Liver Function Test",
        purpose: "Assess the health and functionality of the liver.",
        category: "Pathology",
        procedure: "Blood sample is taken for analysis.",
        preparation: "Avoid eating or drinking for 8-10 hours.",
        cost: "$60",
        duration: "10 minutes",
    },
    TestInfo {
        name: "Thyroid Test",
        purpose: "Check thyroid hormone levels.",
        category: "Endocrinology",
        procedure: "Blood sample is collected for testing.",
        preparation: "No specific preparation needed.",
        cost: "$40",
        duration: "10 minutes",
    },
];

pub fn find(name: &str) -> Option<&'static TestInfo> {
    TESTS.iter().find(|t| t.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_known_test() {
        let test = find("Thyroid Test").unwrap();
        assert_eq!(test.category, "Endocrinology");
        assert_eq!(test.cost, "$40");
    }

    #[test]
    fn find_is_exact_on_name() {
        assert!(find("thyroid test").is_none());
        assert!(find("Thyroid").is_none());
        assert!(find("").is_none());
    }

    #[test]
    fn catalog_names_are_unique() {
        for (i, a) in TESTS.iter().enumerate() {
            for b in &TESTS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
