//! The static symptom catalog and the pure selection logic around it:
//! free-text search, click toggling, and transcript-driven matching.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    General,
    Neurological,
    Respiratory,
    Cardiovascular,
    Gastrointestinal,
    Musculoskeletal,
    Dermatological,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Neurological => "Neurological",
            Self::Respiratory => "Respiratory",
            Self::Cardiovascular => "Cardiovascular",
            Self::Gastrointestinal => "Gastrointestinal",
            Self::Musculoskeletal => "Musculoskeletal",
            Self::Dermatological => "Dermatological",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::General => "badge bg-blue-100 text-blue-800",
            Self::Neurological => "badge bg-purple-100 text-purple-800",
            Self::Respiratory => "badge bg-cyan-100 text-cyan-800",
            Self::Cardiovascular => "badge bg-red-100 text-red-800",
            Self::Gastrointestinal => "badge bg-orange-100 text-orange-800",
            Self::Musculoskeletal => "badge bg-indigo-100 text-indigo-800",
            Self::Dermatological => "badge bg-pink-100 text-pink-800",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Low => "badge bg-green-100 text-green-800",
            Self::Medium => "badge bg-yellow-100 text-yellow-800",
            Self::High => "badge bg-red-100 text-red-800",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyPart {
    Head,
    Chest,
    Abdomen,
    Back,
    Skin,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

#[derive(Debug, PartialEq)]
pub struct Symptom {
    pub id: u32,
    pub name: &'static str,
    pub category: Category,
    pub severity: Severity,
    pub body_part: Option<BodyPart>,
}

pub const CATALOG: &[Symptom] = &[
    Symptom { id: 1, name: "Fever", category: Category::General, severity: Severity::Medium, body_part: None },
    Symptom { id: 2, name: "Headache", category: Category::Neurological, severity: Severity::Low, body_part: Some(BodyPart::Head) },
    Symptom { id: 3, name: "Cough", category: Category::Respiratory, severity: Severity::Low, body_part: None },
    Symptom { id: 4, name: "Chest Pain", category: Category::Cardiovascular, severity: Severity::High, body_part: Some(BodyPart::Chest) },
    Symptom { id: 5, name: "Abdominal Pain", category: Category::Gastrointestinal, severity: Severity::Medium, body_part: Some(BodyPart::Abdomen) },
    Symptom { id: 6, name: "Nausea", category: Category::Gastrointestinal, severity: Severity::Low, body_part: None },
    Symptom { id: 7, name: "Dizziness", category: Category::Neurological, severity: Severity::Medium, body_part: None },
    Symptom { id: 8, name: "Shortness of Breath", category: Category::Respiratory, severity: Severity::High, body_part: None },
    Symptom { id: 9, name: "Joint Pain", category: Category::Musculoskeletal, severity: Severity::Medium, body_part: None },
    Symptom { id: 10, name: "Skin Rash", category: Category::Dermatological, severity: Severity::Low, body_part: Some(BodyPart::Skin) },
    Symptom { id: 11, name: "Back Pain", category: Category::Musculoskeletal, severity: Severity::Medium, body_part: Some(BodyPart::Back) },
    Symptom { id: 12, name: "Fatigue", category: Category::General, severity: Severity::Low, body_part: None },
];

/// Catalog entries whose name or category contains `term`, case-insensitively.
/// An empty term matches everything.
pub fn search(term: &str) -> Vec<&'static Symptom> {
    let term = term.to_lowercase();
    CATALOG
        .iter()
        .filter(|s| {
            s.name.to_lowercase().contains(&term)
                || s.category.label().to_lowercase().contains(&term)
        })
        .collect()
}

/// Click semantics: add the symptom if absent, remove it if present.
pub fn toggle(selected: &mut Vec<&'static Symptom>, symptom: &'static Symptom) {
    if let Some(pos) = selected.iter().position(|s| s.id == symptom.id) {
        selected.remove(pos);
    } else {
        selected.push(symptom);
    }
}

pub fn remove(selected: &mut Vec<&'static Symptom>, id: u32) {
    selected.retain(|s| s.id != id);
}

/// Adds every catalog symptom whose name appears in the transcript as a
/// case-insensitive substring. Transcript changes never remove a selection.
pub fn extend_from_transcript(selected: &mut Vec<&'static Symptom>, transcript: &str) {
    let transcript = transcript.to_lowercase();
    for symptom in CATALOG {
        if transcript.contains(&symptom.name.to_lowercase())
            && !selected.iter().any(|s| s.id == symptom.id)
        {
            selected.push(symptom);
        }
    }
}

/// A marker position on the body-map figure, in percent of the panel.
pub struct BodyMarker {
    pub part: BodyPart,
    pub label: &'static str,
    pub x: u8,
    pub y: u8,
}

pub const BODY_MARKERS: &[BodyMarker] = &[
    BodyMarker { part: BodyPart::Head, label: "Head", x: 50, y: 15 },
    BodyMarker { part: BodyPart::Chest, label: "Chest", x: 50, y: 35 },
    BodyMarker { part: BodyPart::Abdomen, label: "Abdomen", x: 50, y: 50 },
    BodyMarker { part: BodyPart::Back, label: "Back", x: 50, y: 35 },
    BodyMarker { part: BodyPart::LeftArm, label: "Left Arm", x: 25, y: 40 },
    BodyMarker { part: BodyPart::RightArm, label: "Right Arm", x: 75, y: 40 },
    BodyMarker { part: BodyPart::LeftLeg, label: "Left Leg", x: 40, y: 75 },
    BodyMarker { part: BodyPart::RightLeg, label: "Right Leg", x: 60, y: 75 },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn by_name(name: &str) -> &'static Symptom {
        CATALOG.iter().find(|s| s.name == name).unwrap()
    }

    #[test]
    fn catalog_ids_are_unique() {
        for symptom in CATALOG {
            assert_eq!(
                CATALOG.iter().filter(|s| s.id == symptom.id).count(),
                1,
                "duplicate id {}",
                symptom.id
            );
        }
    }

    #[test]
    fn search_matches_name_and_category_case_insensitively() {
        let by_name: Vec<_> = search("CHEST").iter().map(|s| s.name).collect();
        assert_eq!(by_name, vec!["Chest Pain"]);

        let by_category: Vec<_> = search("respiratory").iter().map(|s| s.name).collect();
        assert_eq!(by_category, vec!["Cough", "Shortness of Breath"]);
    }

    #[test]
    fn empty_search_returns_the_whole_catalog() {
        assert_eq!(search("").len(), CATALOG.len());
    }

    #[test]
    fn unmatched_search_returns_nothing() {
        assert!(search("xyzzy").is_empty());
    }

    #[test]
    fn toggle_twice_restores_the_original_selection() {
        let mut selected = vec![by_name("Fever")];
        let headache = by_name("Headache");

        toggle(&mut selected, headache);
        assert_eq!(selected.len(), 2);
        toggle(&mut selected, headache);
        assert_eq!(selected, vec![by_name("Fever")]);
    }

    #[test]
    fn transcript_match_adds_exactly_the_named_symptoms() {
        let mut selected = Vec::new();
        extend_from_transcript(&mut selected, "I have a headache and cough");

        let names: Vec<_> = selected.iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Headache", "Cough"]);
    }

    #[test]
    fn transcript_match_never_removes_or_duplicates() {
        let mut selected = vec![by_name("Fever"), by_name("Cough")];
        extend_from_transcript(&mut selected, "just a cough today");
        extend_from_transcript(&mut selected, "nothing else");

        let names: Vec<_> = selected.iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Fever", "Cough"]);
    }

    #[test]
    fn remove_unknown_id_is_a_no_op() {
        let mut selected = vec![by_name("Fever")];
        remove(&mut selected, 999);
        assert_eq!(selected.len(), 1);
        remove(&mut selected, 1);
        assert!(selected.is_empty());
    }
}
