use crate::{
    client::view::format::{seats_label, short_id},
    model::airplane::AirplaneDto,
};

pub const EMPTY_AIRPLANES_TEXT: &str = "No airplanes";

#[derive(Clone, Debug, PartialEq)]
pub struct AirplaneRowView {
    pub short_id: String,
    pub name: String,
    pub capacity_label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum AirplaneTableView {
    Empty { text: &'static str },
    Rows(Vec<AirplaneRowView>),
}

impl AirplaneTableView {
    pub fn build(airplanes: &[AirplaneDto]) -> Self {
        if airplanes.is_empty() {
            return AirplaneTableView::Empty {
                text: EMPTY_AIRPLANES_TEXT,
            };
        }

        AirplaneTableView::Rows(
            airplanes
                .iter()
                .map(|a| AirplaneRowView {
                    short_id: short_id(&a.id),
                    name: a.name.clone(),
                    capacity_label: seats_label(a.capacity as i64),
                })
                .collect(),
        )
    }
}
