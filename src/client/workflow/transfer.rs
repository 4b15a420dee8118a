use std::mem;

use crate::{
    client::error::TransferError,
    model::{booking::BookingDto, flight::TransferCandidateDto},
};

/// The flight whose bookings are shown.
#[derive(Clone, Debug, PartialEq)]
pub struct OpenFlight {
    pub flight_id: String,
    pub destination: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BookingPanel {
    pub flight: OpenFlight,
    pub bookings: Vec<BookingDto>,
}

/// A booking picked for transfer together with its loaded destinations.
#[derive(Clone, Debug, PartialEq)]
pub struct DestinationChoice {
    pub panel: BookingPanel,
    pub booking: BookingDto,
    pub candidates: Vec<TransferCandidateDto>,
    pub selection: Option<String>,
}

impl DestinationChoice {
    pub fn has_candidates(&self) -> bool {
        !self.candidates.is_empty()
    }

    pub fn can_submit(&self) -> bool {
        self.has_candidates() && self.selection.is_some()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum TransferState {
    #[default]
    Idle,
    SelectingBooking(BookingPanel),
    ChoosingDestination(DestinationChoice),
    Submitting(DestinationChoice),
}

/// Whether a completion changed the workflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Applied {
    Applied,
    /// The ticket was issued before the workflow moved on; nothing changed
    Stale,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BookingsTicket {
    generation: u64,
    pub flight: OpenFlight,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CandidatesTicket {
    generation: u64,
    /// Flight the candidates must be computed against; always the open flight
    pub source_flight_id: String,
    pub booking: BookingDto,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SubmitTicket {
    generation: u64,
    pub booking_id: String,
    pub source_flight_id: String,
    pub destination_id: String,
}

/// State machine of the booking list and transfer section.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransferWorkflow {
    state: TransferState,
    generation: u64,
}

impl TransferWorkflow {
    pub fn state(&self) -> &TransferState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Booking panel of the open flight, in every state but `Idle`.
    pub fn panel(&self) -> Option<&BookingPanel> {
        match &self.state {
            TransferState::Idle => None,
            TransferState::SelectingBooking(panel) => Some(panel),
            TransferState::ChoosingDestination(choice) | TransferState::Submitting(choice) => {
                Some(&choice.panel)
            }
        }
    }

    /// The transfer section's data while it is visible.
    pub fn choice(&self) -> Option<&DestinationChoice> {
        match &self.state {
            TransferState::ChoosingDestination(choice) | TransferState::Submitting(choice) => {
                Some(choice)
            }
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, TransferState::Submitting(_))
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Starts loading the bookings of `flight`, superseding any earlier pending step.
    pub fn open_flight(&mut self, flight: OpenFlight) -> BookingsTicket {
        self.generation += 1;

        BookingsTicket {
            generation: self.generation,
            flight,
        }
    }

    /// Re-reads the open flight's bookings without superseding pending steps.
    pub fn reload_bookings(&self) -> Option<BookingsTicket> {
        self.panel().map(|panel| BookingsTicket {
            generation: self.generation,
            flight: panel.flight.clone(),
        })
    }

    /// Applies a fetched booking list.
    ///
    /// For the flight already open the list is swapped in place and the transfer section
    /// stays visible unless its booking disappeared. Otherwise the panel is (re)opened.
    pub fn complete_bookings(
        &mut self,
        ticket: BookingsTicket,
        bookings: Vec<BookingDto>,
    ) -> Applied {
        if !self.is_current(ticket.generation) {
            return Applied::Stale;
        }

        let same_flight = self
            .panel()
            .is_some_and(|panel| panel.flight.flight_id == ticket.flight.flight_id);

        if !same_flight {
            self.state = TransferState::SelectingBooking(BookingPanel {
                flight: ticket.flight,
                bookings,
            });
            return Applied::Applied;
        }

        self.state = match mem::take(&mut self.state) {
            TransferState::SelectingBooking(mut panel) => {
                panel.bookings = bookings;
                TransferState::SelectingBooking(panel)
            }
            TransferState::ChoosingDestination(mut choice) => {
                choice.panel.bookings = bookings;
                if choice.panel.bookings.iter().any(|b| b.id == choice.booking.id) {
                    TransferState::ChoosingDestination(choice)
                } else {
                    TransferState::SelectingBooking(choice.panel)
                }
            }
            TransferState::Submitting(mut choice) => {
                choice.panel.bookings = bookings;
                TransferState::Submitting(choice)
            }
            TransferState::Idle => TransferState::Idle,
        };

        Applied::Applied
    }

    /// Picks a booking of the open flight for transfer.
    ///
    /// The booking must be listed on the open flight, since destinations are computed
    /// relative to that flight. A transfer section already shown stays until the new
    /// destinations arrive, so a failed fetch leaves it as it was.
    pub fn choose_booking(&mut self, booking_id: &str) -> Result<CandidatesTicket, TransferError> {
        if self.is_submitting() {
            return Err(TransferError::SubmitInProgress);
        }

        let panel = self.panel().ok_or(TransferError::NoOpenFlight)?;

        let booking = panel
            .bookings
            .iter()
            .find(|b| b.id == booking_id)
            .cloned()
            .ok_or_else(|| TransferError::UnknownBooking(booking_id.to_string()))?;

        if let Some(actual) = &booking.flight_id {
            if actual != &panel.flight.flight_id {
                return Err(TransferError::FlightMismatch {
                    booking_id: booking.id.clone(),
                    open: panel.flight.flight_id.clone(),
                    actual: actual.clone(),
                });
            }
        }

        let source_flight_id = panel.flight.flight_id.clone();

        self.generation += 1;

        Ok(CandidatesTicket {
            generation: self.generation,
            source_flight_id,
            booking,
        })
    }

    /// Shows the transfer section with the fetched destinations, even when there are none.
    ///
    /// Replaces any section already shown for another booking.
    pub fn complete_candidates(
        &mut self,
        ticket: CandidatesTicket,
        candidates: Vec<TransferCandidateDto>,
    ) -> Applied {
        if !self.is_current(ticket.generation) {
            return Applied::Stale;
        }

        let panel = match mem::take(&mut self.state) {
            TransferState::SelectingBooking(panel) => panel,
            TransferState::ChoosingDestination(choice) => choice.panel,
            other => {
                self.state = other;
                return Applied::Stale;
            }
        };

        let still_listed = panel.bookings.iter().any(|b| b.id == ticket.booking.id);
        if panel.flight.flight_id != ticket.source_flight_id || !still_listed {
            self.state = TransferState::SelectingBooking(panel);
            return Applied::Stale;
        }

        self.state = TransferState::ChoosingDestination(DestinationChoice {
            panel,
            booking: ticket.booking,
            candidates,
            selection: None,
        });
        Applied::Applied
    }

    /// Sets the destination selection; `None` clears it.
    pub fn select_destination(&mut self, flight_id: Option<String>) -> Result<(), TransferError> {
        let TransferState::ChoosingDestination(choice) = &mut self.state else {
            return Err(TransferError::NotChoosing);
        };

        if let Some(id) = &flight_id {
            if !choice.candidates.iter().any(|c| &c.id == id) {
                return Err(TransferError::UnknownDestination(id.clone()));
            }
        }

        choice.selection = flight_id;
        Ok(())
    }

    /// Moves to `Submitting` if a destination is selected; otherwise nothing changes.
    pub fn begin_submit(&mut self) -> Result<SubmitTicket, TransferError> {
        let TransferState::ChoosingDestination(choice) = &self.state else {
            return Err(TransferError::NotChoosing);
        };

        if !choice.has_candidates() {
            return Err(TransferError::NoCandidates);
        }

        let Some(destination_id) = choice.selection.clone() else {
            return Err(TransferError::NoDestination);
        };

        let ticket = SubmitTicket {
            generation: self.generation,
            booking_id: choice.booking.id.clone(),
            source_flight_id: choice.panel.flight.flight_id.clone(),
            destination_id,
        };

        if let TransferState::ChoosingDestination(choice) = mem::take(&mut self.state) {
            self.state = TransferState::Submitting(choice);
        }

        Ok(ticket)
    }

    /// Leaves `Submitting`: back to the booking list on success, back to the unchanged
    /// destination choice on failure.
    pub fn complete_submit(&mut self, ticket: SubmitTicket, succeeded: bool) -> Applied {
        if !self.is_current(ticket.generation) {
            return Applied::Stale;
        }

        match mem::take(&mut self.state) {
            TransferState::Submitting(choice) => {
                self.state = if succeeded {
                    TransferState::SelectingBooking(choice.panel)
                } else {
                    TransferState::ChoosingDestination(choice)
                };
                Applied::Applied
            }
            other => {
                self.state = other;
                Applied::Stale
            }
        }
    }

    /// Hides the transfer section, dropping its candidates and selection.
    pub fn cancel(&mut self) -> bool {
        match mem::take(&mut self.state) {
            TransferState::ChoosingDestination(choice) => {
                self.state = TransferState::SelectingBooking(choice.panel);
                self.generation += 1;
                true
            }
            other => {
                self.state = other;
                false
            }
        }
    }

    /// Closes the booking list from any state.
    pub fn close(&mut self) {
        self.state = TransferState::Idle;
        self.generation += 1;
    }
}
