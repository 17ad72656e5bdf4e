//! Static first-aid guide catalog with search, category filtering, and the
//! text handed to speech synthesis for the per-guide "listen" button.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideSeverity {
    Emergency,
    Urgent,
    Moderate,
}

impl GuideSeverity {
    pub fn label(self) -> &'static str {
        match self {
            Self::Emergency => "emergency",
            Self::Urgent => "urgent",
            Self::Moderate => "moderate",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Emergency => "badge bg-red-100 text-red-800 border-red-200",
            Self::Urgent => "badge bg-orange-100 text-orange-800 border-orange-200",
            Self::Moderate => "badge bg-yellow-100 text-yellow-800 border-yellow-200",
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct FirstAidGuide {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub severity: GuideSeverity,
    pub symptoms: &'static [&'static str],
    pub steps: &'static [&'static str],
    pub warnings: &'static [&'static str],
    pub call_emergency: bool,
}

impl FirstAidGuide {
    /// The sentence read aloud when the user asks for spoken instructions.
    pub fn spoken_instructions(&self) -> String {
        format!("First aid for {}. Steps: {}", self.title, self.steps.join(". "))
    }
}

pub const GUIDES: &[FirstAidGuide] = &[
    FirstAidGuide {
        id: 1,
        title: "Choking",
        category: "Respiratory Emergency",
        severity: GuideSeverity::Emergency,
        symptoms: &["Unable to speak or breathe", "Clutching throat", "Blue lips or face"],
        steps: &[
            "Encourage coughing if person can cough",
            "Give 5 back blows between shoulder blades",
            "Give 5 abdominal thrusts (Heimlich maneuver)",
            "Alternate between back blows and abdominal thrusts",
            "Continue until object is expelled or person becomes unconscious",
        ],
        warnings: &[
            "Do not put fingers in mouth to remove object",
            "Call emergency services if unsuccessful",
        ],
        call_emergency: true,
    },
    FirstAidGuide {
        id: 2,
        title: "Heart Attack",
        category: "Cardiac Emergency",
        severity: GuideSeverity::Emergency,
        symptoms: &["Chest pain or pressure", "Shortness of breath", "Nausea", "Sweating"],
        steps: &[
            "Call emergency services immediately",
            "Help person sit down and rest",
            "Loosen any tight clothing",
            "Give aspirin if not allergic (chew, don't swallow whole)",
            "Be prepared to perform CPR if person becomes unconscious",
        ],
        warnings: &["Do not leave person alone", "Do not drive to hospital yourself"],
        call_emergency: true,
    },
    FirstAidGuide {
        id: 3,
        title: "Severe Bleeding",
        category: "Trauma",
        severity: GuideSeverity::Emergency,
        symptoms: &["Heavy bleeding", "Blood soaking through bandages", "Signs of shock"],
        steps: &[
            "Apply direct pressure with clean cloth",
            "Elevate injured area above heart level",
            "Apply pressure bandage over wound",
            "Do not remove embedded objects",
            "Monitor for signs of shock",
        ],
        warnings: &["Do not remove bandages once applied", "Seek immediate medical attention"],
        call_emergency: true,
    },
    FirstAidGuide {
        id: 4,
        title: "Burns",
        category: "Trauma",
        severity: GuideSeverity::Urgent,
        symptoms: &["Red, swollen skin", "Blisters", "Pain", "Possible charring"],
        steps: &[
            "Remove from heat source",
            "Cool burn with running water for 10-15 minutes",
            "Remove jewelry or tight clothing",
            "Cover with sterile, non-adherent bandage",
            "Do not apply ice, butter, or ointments",
        ],
        warnings: &[
            "Seek medical attention for large or severe burns",
            "Watch for signs of infection",
        ],
        call_emergency: false,
    },
    FirstAidGuide {
        id: 5,
        title: "Allergic Reaction",
        category: "Allergy",
        severity: GuideSeverity::Urgent,
        symptoms: &["Hives or rash", "Swelling", "Difficulty breathing", "Rapid pulse"],
        steps: &[
            "Remove or avoid allergen if known",
            "Use epinephrine auto-injector if available",
            "Take antihistamine if conscious and able to swallow",
            "Monitor breathing and pulse",
            "Position person comfortably",
        ],
        warnings: &[
            "Severe reactions can be life-threatening",
            "Be prepared for anaphylaxis",
        ],
        call_emergency: true,
    },
    FirstAidGuide {
        id: 6,
        title: "Fractures",
        category: "Trauma",
        severity: GuideSeverity::Moderate,
        symptoms: &["Pain and swelling", "Visible deformity", "Unable to move affected area"],
        steps: &[
            "Do not move the injured person unless necessary",
            "Immobilize the injured area",
            "Apply ice wrapped in cloth",
            "Support the injured area with splint or sling",
            "Monitor for circulation below injury",
        ],
        warnings: &["Do not try to realign broken bones", "Seek medical attention promptly"],
        call_emergency: false,
    },
];

/// Distinct guide categories in order of first appearance.
pub fn categories() -> Vec<&'static str> {
    let mut out = Vec::new();
    for guide in GUIDES {
        if !out.contains(&guide.category) {
            out.push(guide.category);
        }
    }
    out
}

/// Guides whose title or any listed symptom contains `term`
/// (case-insensitively), restricted to `category` when one is given.
pub fn filter(term: &str, category: Option<&str>) -> Vec<&'static FirstAidGuide> {
    let term = term.to_lowercase();
    GUIDES
        .iter()
        .filter(|g| {
            let matches_search = g.title.to_lowercase().contains(&term)
                || g.symptoms.iter().any(|s| s.to_lowercase().contains(&term));
            let matches_category = category.map_or(true, |c| g.category == c);
            matches_search && matches_category
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_are_distinct_and_ordered() {
        assert_eq!(
            categories(),
            vec!["Respiratory Emergency", "Cardiac Emergency", "Trauma", "Allergy"]
        );
    }

    #[test]
    fn filter_matches_title_substring() {
        let titles: Vec<_> = filter("heart", None).iter().map(|g| g.title).collect();
        assert_eq!(titles, vec!["Heart Attack"]);
    }

    #[test]
    fn filter_matches_symptom_text() {
        // "Shortness of breath" is listed under Heart Attack, not in its title.
        let titles: Vec<_> = filter("shortness", None).iter().map(|g| g.title).collect();
        assert_eq!(titles, vec!["Heart Attack"]);
    }

    #[test]
    fn filter_restricts_by_category() {
        let titles: Vec<_> = filter("", Some("Trauma")).iter().map(|g| g.title).collect();
        assert_eq!(titles, vec!["Severe Bleeding", "Burns", "Fractures"]);

        assert!(filter("choking", Some("Trauma")).is_empty());
    }

    #[test]
    fn spoken_instructions_name_the_guide_and_join_the_steps() {
        let guide = &GUIDES[0];
        let spoken = guide.spoken_instructions();
        assert!(spoken.starts_with("First aid for Choking. Steps: "));
        assert!(spoken.contains("Give 5 back blows between shoulder blades. "));
    }
}
