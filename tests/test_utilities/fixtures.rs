use reputation_recon::prelude::*;
use serde_json::{json, Value};

/// The 7zip scenario: every score lands in the good tier
pub fn seven_zip_json() -> Value {
    json!({
        "entity": {"product_name": "7-Zip", "vendor": "Igor Pavlov", "confidence": 0.9},
        "taxonomy": "utility",
        "trust_score": {
            "value": 85,
            "confidence": "HIGH",
            "rationale": "Mature open-source archiver with a prompt patch history",
            "breakdown": [
                {"component": "Vendor", "score": 90, "weight": 0.5}
            ]
        },
        "brief": {
            "description": "Open-source file archiver",
            "vendorReputation": {"summary": "Single maintainer", "psirtMaturity": "MEDIUM"}
        },
        "cve_data": [
            {
                "id": "CVE-2024-11477",
                "severity": "HIGH",
                "score": 7.8,
                "description": "Zstandard decompression integer underflow",
                "published": "2024-11-22",
                "url": "https://nvd.nist.gov/vuln/detail/CVE-2024-11477"
            }
        ],
        "timestamp": "2024-06-15T10:30:00Z"
    })
}

pub fn seven_zip() -> AssessmentResult {
    serde_json::from_value(seven_zip_json()).unwrap()
}

/// A minimal assessment with the given name and score
pub fn named(name: &str, score: u32) -> AssessmentResult {
    serde_json::from_value(json!({
        "entity": {"product_name": name, "vendor": "Example Corp", "confidence": 0.8},
        "taxonomy": "Utility",
        "trust_score": {"value": score, "confidence": "medium"}
    }))
    .unwrap()
}
