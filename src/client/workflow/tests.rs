use crate::client::{
    error::TransferError,
    util::test::factory::{mock_booking, mock_candidate},
    workflow::{Applied, OpenFlight, TransferState, TransferWorkflow},
};

fn paris() -> OpenFlight {
    OpenFlight {
        flight_id: "f1".to_string(),
        destination: "Paris".to_string(),
    }
}

fn rome() -> OpenFlight {
    OpenFlight {
        flight_id: "f2".to_string(),
        destination: "Rome".to_string(),
    }
}

/// Workflow with Paris open and two bookings listed
fn selecting() -> TransferWorkflow {
    let mut workflow = TransferWorkflow::default();
    let ticket = workflow.open_flight(paris());
    workflow.complete_bookings(
        ticket,
        vec![
            mock_booking("b1", "Anna Ivanova", "f1"),
            mock_booking("b2", "Oleg Smirnov", "f1"),
        ],
    );
    workflow
}

/// Workflow choosing a destination for b1 among two candidates
fn choosing() -> TransferWorkflow {
    let mut workflow = selecting();
    let ticket = workflow.choose_booking("b1").unwrap();
    workflow.complete_candidates(
        ticket,
        vec![
            mock_candidate("f3", "Airbus A320", 4),
            mock_candidate("f4", "Boeing 737", 1),
        ],
    );
    workflow
}

mod open_flight {
    use super::*;

    /// Expect the booking list to appear only once bookings are loaded
    #[test]
    fn enters_selecting_booking_on_completion() {
        let mut workflow = TransferWorkflow::default();

        let ticket = workflow.open_flight(paris());
        assert_eq!(workflow.state(), &TransferState::Idle);

        let applied = workflow.complete_bookings(ticket, vec![mock_booking("b1", "Anna", "f1")]);

        assert_eq!(applied, Applied::Applied);
        let panel = workflow.panel().unwrap();
        assert_eq!(panel.flight, paris());
        assert_eq!(panel.bookings.len(), 1);
        assert!(workflow.choice().is_none());
    }

    /// Expect the response for a flight the user navigated away from to be dropped
    #[test]
    fn discards_response_for_superseded_flight() {
        let mut workflow = TransferWorkflow::default();
        let first = workflow.open_flight(paris());
        let second = workflow.open_flight(rome());

        assert_eq!(
            workflow.complete_bookings(first, vec![mock_booking("b1", "Anna", "f1")]),
            Applied::Stale
        );
        assert_eq!(workflow.state(), &TransferState::Idle);

        assert_eq!(
            workflow.complete_bookings(second, vec![]),
            Applied::Applied
        );
        assert_eq!(workflow.panel().unwrap().flight, rome());
    }

    /// Expect a late response to be dropped once the list was closed
    #[test]
    fn discards_response_after_close() {
        let mut workflow = TransferWorkflow::default();
        let ticket = workflow.open_flight(paris());
        workflow.close();

        assert_eq!(workflow.complete_bookings(ticket, vec![]), Applied::Stale);
        assert_eq!(workflow.state(), &TransferState::Idle);
    }
}

mod reload_bookings {
    use super::*;

    /// Expect a reload to keep the transfer section while its booking still exists
    #[test]
    fn keeps_choice_when_booking_remains() {
        let mut workflow = choosing();

        let ticket = workflow.reload_bookings().unwrap();
        workflow.complete_bookings(ticket, vec![mock_booking("b1", "Anna Ivanova", "f1")]);

        let choice = workflow.choice().unwrap();
        assert_eq!(choice.panel.bookings.len(), 1);
        assert_eq!(choice.candidates.len(), 2);
    }

    /// Expect the transfer section to close when its booking vanished from the list
    #[test]
    fn drops_choice_when_booking_removed() {
        let mut workflow = choosing();

        let ticket = workflow.reload_bookings().unwrap();
        workflow.complete_bookings(ticket, vec![mock_booking("b2", "Oleg Smirnov", "f1")]);

        assert!(matches!(
            workflow.state(),
            TransferState::SelectingBooking(panel) if panel.bookings.len() == 1
        ));
    }

    #[test]
    fn nothing_to_reload_when_idle() {
        assert!(TransferWorkflow::default().reload_bookings().is_none());
    }
}

mod choose_booking {
    use super::*;

    /// Expect candidates to be requested for the open flight
    #[test]
    fn ticket_targets_open_flight() {
        let mut workflow = selecting();

        let ticket = workflow.choose_booking("b2").unwrap();

        assert_eq!(ticket.source_flight_id, "f1");
        assert_eq!(ticket.booking.id, "b2");
    }

    #[test]
    fn rejects_without_open_flight() {
        let mut workflow = TransferWorkflow::default();

        assert_eq!(
            workflow.choose_booking("b1"),
            Err(TransferError::NoOpenFlight)
        );
    }

    #[test]
    fn rejects_booking_not_on_open_flight() {
        let mut workflow = selecting();

        assert_eq!(
            workflow.choose_booking("b9"),
            Err(TransferError::UnknownBooking("b9".to_string()))
        );
    }

    /// Expect a booking reporting another flight to be refused rather than computing
    /// candidates against the wrong flight
    #[test]
    fn rejects_booking_owned_by_other_flight() {
        let mut workflow = TransferWorkflow::default();
        let ticket = workflow.open_flight(paris());
        workflow.complete_bookings(ticket, vec![mock_booking("b1", "Anna", "f2")]);
        let generation = workflow.generation();

        let result = workflow.choose_booking("b1");

        assert!(matches!(result, Err(TransferError::FlightMismatch { .. })));
        assert_eq!(workflow.generation(), generation);
    }

    /// Expect the shown transfer section to stay until the other booking's destinations arrive
    #[test]
    fn rechoosing_replaces_previous_choice_on_completion() {
        let mut workflow = choosing();
        workflow.select_destination(Some("f3".to_string())).unwrap();
        let before = workflow.choice().cloned();

        let ticket = workflow.choose_booking("b2").unwrap();

        assert_eq!(workflow.choice().cloned(), before);
        assert_eq!(
            workflow.complete_candidates(ticket, vec![mock_candidate("f3", "Airbus A320", 4)]),
            Applied::Applied
        );
        let choice = workflow.choice().unwrap();
        assert_eq!(choice.booking.id, "b2");
        assert_eq!(choice.candidates.len(), 1);
        assert_eq!(choice.selection, None);
    }

    /// Expect destinations for a booking removed meanwhile to be ignored
    #[test]
    fn candidates_for_removed_booking_are_dropped() {
        let mut workflow = selecting();
        let ticket = workflow.choose_booking("b2").unwrap();
        let reload = workflow.reload_bookings().unwrap();
        workflow.complete_bookings(reload, vec![mock_booking("b1", "Anna Ivanova", "f1")]);

        assert_eq!(
            workflow.complete_candidates(ticket, vec![mock_candidate("f3", "A320", 4)]),
            Applied::Stale
        );
        assert!(matches!(workflow.state(), TransferState::SelectingBooking(_)));
    }

    /// Expect candidates for an earlier booking pick to be ignored
    #[test]
    fn stale_candidates_are_dropped() {
        let mut workflow = selecting();
        let first = workflow.choose_booking("b1").unwrap();
        let second = workflow.choose_booking("b2").unwrap();

        assert_eq!(
            workflow.complete_candidates(first, vec![mock_candidate("f3", "A320", 4)]),
            Applied::Stale
        );
        assert_eq!(
            workflow.complete_candidates(second, vec![mock_candidate("f4", "737", 2)]),
            Applied::Applied
        );
        assert_eq!(workflow.choice().unwrap().booking.id, "b2");
    }
}

mod complete_candidates {
    use super::*;

    #[test]
    fn enters_choosing_with_no_selection() {
        let workflow = choosing();

        let choice = workflow.choice().unwrap();
        assert!(matches!(workflow.state(), TransferState::ChoosingDestination(_)));
        assert_eq!(choice.selection, None);
        assert!(choice.has_candidates());
        assert!(!choice.can_submit());
    }

    /// Expect an empty candidate list to still show the section, with submit disabled
    #[test]
    fn empty_candidates_disable_submission() {
        let mut workflow = selecting();
        let ticket = workflow.choose_booking("b1").unwrap();

        workflow.complete_candidates(ticket, vec![]);

        let choice = workflow.choice().unwrap();
        assert!(matches!(workflow.state(), TransferState::ChoosingDestination(_)));
        assert!(!choice.has_candidates());
        assert!(!choice.can_submit());
        assert_eq!(workflow.begin_submit(), Err(TransferError::NoCandidates));
    }
}

mod submit {
    use super::*;

    /// Expect submit without a destination to be refused without leaving the choice
    #[test]
    fn requires_destination() {
        let mut workflow = choosing();
        let before = workflow.clone();

        assert_eq!(workflow.begin_submit(), Err(TransferError::NoDestination));
        assert_eq!(workflow, before);
    }

    #[test]
    fn rejects_unknown_destination() {
        let mut workflow = choosing();

        assert_eq!(
            workflow.select_destination(Some("f1".to_string())),
            Err(TransferError::UnknownDestination("f1".to_string()))
        );
        assert_eq!(workflow.choice().unwrap().selection, None);
    }

    #[test]
    fn success_returns_to_booking_list() {
        let mut workflow = choosing();
        workflow.select_destination(Some("f4".to_string())).unwrap();

        let ticket = workflow.begin_submit().unwrap();
        assert!(workflow.is_submitting());
        assert_eq!(ticket.booking_id, "b1");
        assert_eq!(ticket.destination_id, "f4");

        assert_eq!(workflow.complete_submit(ticket, true), Applied::Applied);
        assert!(matches!(workflow.state(), TransferState::SelectingBooking(_)));
        assert!(workflow.choice().is_none());
    }

    /// Expect a failed transfer to restore the same candidates and selection
    #[test]
    fn failure_restores_choice() {
        let mut workflow = choosing();
        workflow.select_destination(Some("f3".to_string())).unwrap();
        let before = workflow.choice().cloned();

        let ticket = workflow.begin_submit().unwrap();
        workflow.complete_submit(ticket, false);

        assert!(matches!(workflow.state(), TransferState::ChoosingDestination(_)));
        assert_eq!(workflow.choice().cloned(), before);
    }

    #[test]
    fn cannot_rechoose_while_submitting() {
        let mut workflow = choosing();
        workflow.select_destination(Some("f3".to_string())).unwrap();
        workflow.begin_submit().unwrap();

        assert_eq!(
            workflow.choose_booking("b2"),
            Err(TransferError::SubmitInProgress)
        );
        assert!(!workflow.cancel());
    }

    /// Expect a submit completing after the list was closed to leave it closed
    #[test]
    fn completion_after_close_is_stale() {
        let mut workflow = choosing();
        workflow.select_destination(Some("f3".to_string())).unwrap();
        let ticket = workflow.begin_submit().unwrap();

        workflow.close();

        assert_eq!(workflow.complete_submit(ticket, true), Applied::Stale);
        assert_eq!(workflow.state(), &TransferState::Idle);
    }
}

mod cancel {
    use super::*;

    #[test]
    fn discards_candidates_and_selection() {
        let mut workflow = choosing();
        workflow.select_destination(Some("f3".to_string())).unwrap();

        assert!(workflow.cancel());

        assert!(matches!(
            workflow.state(),
            TransferState::SelectingBooking(panel) if panel.bookings.len() == 2
        ));
        assert!(workflow.choice().is_none());
    }

    #[test]
    fn noop_outside_choosing() {
        let mut workflow = selecting();
        let before = workflow.clone();

        assert!(!workflow.cancel());
        assert_eq!(workflow, before);
    }
}
