// Status classification: free-text `situacao` -> fixed display category.

/// Display category for a bidding's status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCategory {
    Urgent,
    Normal,
    Open,
    InProgress,
    Expired,
    Unknown,
}

impl StatusCategory {
    /// Fixed iteration order for summary output.
    pub const ALL: [StatusCategory; 6] = [
        StatusCategory::Urgent,
        StatusCategory::Normal,
        StatusCategory::Open,
        StatusCategory::InProgress,
        StatusCategory::Expired,
        StatusCategory::Unknown,
    ];

    /// Canonical label for summaries. Per-record badges may carry free text
    /// instead (see `classify`), so Unknown gets a generic bucket name here.
    pub fn display_name(self) -> &'static str {
        match self {
            StatusCategory::Urgent => "Urgente",
            StatusCategory::Normal => "Normal",
            StatusCategory::Open => "Aberta",
            StatusCategory::InProgress => "Em andamento",
            StatusCategory::Expired => "Vencida",
            StatusCategory::Unknown => "Outras",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusBadge {
    pub category: StatusCategory,
    pub label: String,
}

impl StatusBadge {
    fn new(category: StatusCategory, label: &str) -> Self {
        Self {
            category,
            label: label.to_string(),
        }
    }
}

/// Maps a free-text status to a badge. Rules are substring matches over the
/// lower-cased, trimmed input, checked in order; the first hit wins, so a
/// string containing both "urgente" and "normal" is Urgent. Text matching no
/// rule keeps its original wording as the label.
pub fn classify(status: Option<&str>) -> StatusBadge {
    let raw = status.unwrap_or("");
    let s = raw.trim().to_lowercase();

    if s.contains("urgente") || s.contains("consulta") || s.contains("erro") {
        return StatusBadge::new(StatusCategory::Urgent, "Urgente");
    }
    if s.contains("normal") {
        return StatusBadge::new(StatusCategory::Normal, "Normal");
    }
    if s.contains("aberta") {
        return StatusBadge::new(StatusCategory::Open, "Aberta");
    }
    if s.contains("andamento") {
        return StatusBadge::new(StatusCategory::InProgress, "Em andamento");
    }
    if s.contains("vencida") {
        return StatusBadge::new(StatusCategory::Expired, "Vencida");
    }

    if raw.is_empty() {
        StatusBadge::new(StatusCategory::Normal, "Normal")
    } else {
        StatusBadge::new(StatusCategory::Unknown, raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_matching_rule_wins() {
        let badge = classify(Some("Urgente - Normal"));
        assert_eq!(badge.category, StatusCategory::Urgent);
        assert_eq!(badge.label, "Urgente");
    }

    #[test]
    fn empty_and_absent_default_to_normal() {
        for input in [None, Some("")] {
            let badge = classify(input);
            assert_eq!(badge.category, StatusCategory::Normal);
            assert_eq!(badge.label, "Normal");
        }
    }

    #[test]
    fn unmatched_text_keeps_original_label() {
        let badge = classify(Some("xyz-custom"));
        assert_eq!(badge.category, StatusCategory::Unknown);
        assert_eq!(badge.label, "xyz-custom");
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        assert_eq!(
            classify(Some("  EM CONSULTA ")).category,
            StatusCategory::Urgent
        );
        assert_eq!(classify(Some("Erro de envio")).category, StatusCategory::Urgent);
        assert_eq!(classify(Some("ABERTA ontem")).category, StatusCategory::Open);
        assert_eq!(
            classify(Some("em Andamento")).category,
            StatusCategory::InProgress
        );
        assert_eq!(classify(Some("Vencida")).category, StatusCategory::Expired);
    }

    #[test]
    fn classification_is_deterministic() {
        assert_eq!(classify(Some("aberta")), classify(Some("aberta")));
    }
}
