use crate::model::{BiddingRecord, RawRow};

pub const DEFAULT_EDITAL: &str = "Edital não informado";
pub const DEFAULT_DESCRIPTION: &str = "Sem descrição disponível.";

pub fn normalize_all(rows: Vec<RawRow>) -> Vec<BiddingRecord> {
    rows.into_iter().map(normalize_row).collect()
}

/// Turns one raw row into a record. Total: every input produces a record.
/// `edital` and `descricao` get placeholder defaults; the remaining optional
/// fields stay absent when blank, so the presentation layer decides whether
/// to render a placeholder or omit the element (e.g. `prazo` is omitted).
pub fn normalize_row(row: RawRow) -> BiddingRecord {
    BiddingRecord {
        bidding_id: row.bidding_id.map(|s| s.trim().to_string()).unwrap_or_default(),
        edital: non_blank(row.edital).unwrap_or_else(|| DEFAULT_EDITAL.to_string()),
        city: non_blank(row.cidade),
        state: non_blank(row.estado),
        opening_date: non_blank(row.data_abertura),
        deadline: non_blank(row.prazo),
        estimated_value: non_blank(row.valor_estimado),
        description: non_blank(row.descricao).unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
        bulletin_id: non_blank(row.boletim_id),
        status: non_blank(row.situacao),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_to_edital_and_description() {
        let record = normalize_row(RawRow {
            bidding_id: Some("123".into()),
            edital: Some("".into()),
            descricao: None,
            ..RawRow::default()
        });
        assert_eq!(record.edital, DEFAULT_EDITAL);
        assert_eq!(record.description, DEFAULT_DESCRIPTION);
    }

    #[test]
    fn blank_deadline_stays_absent() {
        let record = normalize_row(RawRow {
            bidding_id: Some("123".into()),
            prazo: Some("   ".into()),
            ..RawRow::default()
        });
        assert_eq!(record.deadline, None);
    }

    #[test]
    fn populated_fields_are_copied_and_trimmed() {
        let record = normalize_row(RawRow {
            bidding_id: Some(" 42 ".into()),
            edital: Some("Pregão Eletrônico 01/2026".into()),
            cidade: Some("Campinas".into()),
            estado: Some("SP".into()),
            data_abertura: Some("10/09/2026".into()),
            prazo: Some("15 dias".into()),
            valor_estimado: Some("R$ 1.234,56".into()),
            descricao: Some("Aquisição de material de escritório".into()),
            boletim_id: Some("B-77".into()),
            situacao: Some("Aberta".into()),
        });
        assert_eq!(record.bidding_id, "42");
        assert_eq!(record.edital, "Pregão Eletrônico 01/2026");
        assert_eq!(record.city.as_deref(), Some("Campinas"));
        assert_eq!(record.state.as_deref(), Some("SP"));
        assert_eq!(record.opening_date.as_deref(), Some("10/09/2026"));
        assert_eq!(record.deadline.as_deref(), Some("15 dias"));
        assert_eq!(record.estimated_value.as_deref(), Some("R$ 1.234,56"));
        assert_eq!(record.bulletin_id.as_deref(), Some("B-77"));
        assert_eq!(record.status.as_deref(), Some("Aberta"));
    }
}
