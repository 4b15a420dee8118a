use crate::{client::view::format::short_id, model::booking::BookingDto};

pub const EMPTY_BOOKINGS_TEXT: &str = "No bookings";

#[derive(Clone, Debug, PartialEq)]
pub struct BookingRowView {
    pub id: String,
    pub short_id: String,
    pub passenger_name: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum BookingTableView {
    Empty { text: &'static str },
    Rows(Vec<BookingRowView>),
}

impl BookingTableView {
    pub fn build(bookings: &[BookingDto]) -> Self {
        if bookings.is_empty() {
            return BookingTableView::Empty {
                text: EMPTY_BOOKINGS_TEXT,
            };
        }

        BookingTableView::Rows(
            bookings
                .iter()
                .map(|b| BookingRowView {
                    id: b.id.clone(),
                    short_id: short_id(&b.id),
                    passenger_name: b.passenger_name.clone(),
                })
                .collect(),
        )
    }
}
