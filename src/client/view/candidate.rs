use crate::{client::view::format::format_departure, model::flight::TransferCandidateDto};

pub const NO_CANDIDATES_TEXT: &str = "No flights available for the transfer";

#[derive(Clone, Debug, PartialEq)]
pub struct CandidateOptionView {
    pub id: String,
    pub label: String,
}

impl From<&TransferCandidateDto> for CandidateOptionView {
    fn from(candidate: &TransferCandidateDto) -> Self {
        Self {
            id: candidate.id.clone(),
            label: format!(
                "{} - {} ({} free)",
                format_departure(&candidate.departure_datetime),
                candidate.airplane_name,
                candidate.available_seats
            ),
        }
    }
}

/// Destination choices of the transfer section.
#[derive(Clone, Debug, PartialEq)]
pub enum CandidateListView {
    /// No eligible destination; submission must be disabled
    Empty { text: &'static str },
    Options(Vec<CandidateOptionView>),
}

impl CandidateListView {
    pub fn build(candidates: &[TransferCandidateDto]) -> Self {
        if candidates.is_empty() {
            return CandidateListView::Empty {
                text: NO_CANDIDATES_TEXT,
            };
        }

        CandidateListView::Options(candidates.iter().map(CandidateOptionView::from).collect())
    }
}
