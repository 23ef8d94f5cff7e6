// SPDX-FileCopyrightText: 2026 Slotbook contributors
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end booking lifecycle workflow tests: offering, booking,
//! rescheduling, and cancelling slots.

use jiff::civil::{date, time};
use slotbook_core::{AppointmentConditions, Error, Slotbook};

use crate::common::{draft, setup_temp_state, slot_labels, test_config};

#[tokio::test]
async fn booking_removes_the_slot_and_cancelling_restores_it() {
    // Arrange
    let temp = setup_temp_state().await.unwrap();
    let book = Slotbook::new(test_config(&temp.state_dir)).await.unwrap();
    let day = date(2026, 1, 3);
    book.set_window(day, time(9, 0, 0, 0), time(10, 0, 0, 0))
        .await
        .unwrap();
    assert_eq!(
        slot_labels(&book.open_slots(day).await.unwrap()),
        ["09:00", "09:15", "09:30", "09:45"]
    );

    // Act
    let appointment = book
        .book(draft("Jamie Doe", day, time(9, 15, 0, 0)))
        .await
        .unwrap();

    // Assert
    assert_eq!(
        slot_labels(&book.open_slots(day).await.unwrap()),
        ["09:00", "09:30", "09:45"]
    );

    // Act - the freed slot is offered again after cancelling
    book.cancel_appointment(appointment.id).await.unwrap();

    // Assert
    assert_eq!(
        slot_labels(&book.open_slots(day).await.unwrap()),
        ["09:00", "09:15", "09:30", "09:45"]
    );
}

#[tokio::test]
async fn double_booking_a_slot_fails() {
    // Arrange
    let temp = setup_temp_state().await.unwrap();
    let book = Slotbook::new(test_config(&temp.state_dir)).await.unwrap();
    let day = date(2026, 1, 3);
    book.set_window(day, time(9, 0, 0, 0), time(10, 0, 0, 0))
        .await
        .unwrap();
    book.book(draft("Jamie Doe", day, time(9, 15, 0, 0)))
        .await
        .unwrap();

    // Act
    let err = book
        .book(draft("Robin Low", day, time(9, 15, 0, 0)))
        .await
        .unwrap_err();

    // Assert
    assert!(matches!(err, Error::SlotTaken { .. }));
    let listed = book
        .appointments(&AppointmentConditions { date: Some(day) })
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Jamie Doe");
}

#[tokio::test]
async fn booking_requires_a_name() {
    let temp = setup_temp_state().await.unwrap();
    let book = Slotbook::new(test_config(&temp.state_dir)).await.unwrap();
    let day = date(2026, 1, 3);

    let err = book.book(draft("", day, time(9, 0, 0, 0))).await.unwrap_err();
    assert!(matches!(err, Error::BlankName));

    let err = book
        .book(draft("   ", day, time(9, 0, 0, 0)))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::BlankName));
}

#[tokio::test]
async fn create_then_list_round_trips_with_fresh_id() {
    // Arrange
    let temp = setup_temp_state().await.unwrap();
    let book = Slotbook::new(test_config(&temp.state_dir)).await.unwrap();
    let day = date(2026, 1, 3);

    // Act
    let appointment = book
        .book(draft("Jamie Doe", day, time(9, 15, 0, 0)))
        .await
        .unwrap();

    // Assert
    assert!(appointment.id > 0);
    let listed = book
        .appointments(&AppointmentConditions { date: Some(day) })
        .await
        .unwrap();
    assert_eq!(listed, vec![appointment]);
}

#[tokio::test]
async fn editing_fully_replaces_and_respects_occupied_slots() {
    // Arrange
    let temp = setup_temp_state().await.unwrap();
    let book = Slotbook::new(test_config(&temp.state_dir)).await.unwrap();
    let day = date(2026, 1, 3);
    book.set_window(day, time(9, 0, 0, 0), time(10, 0, 0, 0))
        .await
        .unwrap();
    let first = book
        .book(draft("Jamie Doe", day, time(9, 0, 0, 0)))
        .await
        .unwrap();
    let second = book
        .book(draft("Robin Low", day, time(9, 15, 0, 0)))
        .await
        .unwrap();

    // Act - move the first appointment to a free slot, renaming it
    let updated = book
        .update_appointment(first.id, draft("Jamie D.", day, time(9, 30, 0, 0)))
        .await
        .unwrap();

    // Assert
    assert_eq!(updated.id, first.id);
    assert_eq!(updated.name, "Jamie D.");
    assert_eq!(
        slot_labels(&book.open_slots(day).await.unwrap()),
        ["09:00", "09:45"]
    );

    // Act - moving onto an occupied slot is rejected
    let err = book
        .update_appointment(first.id, draft("Jamie D.", day, time(9, 15, 0, 0)))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::SlotTaken { .. }));

    // Act - the occupant is untouched
    let robin = book.appointment(second.id).await.unwrap();
    assert_eq!(robin.time, time(9, 15, 0, 0));
}

#[tokio::test]
async fn editing_or_cancelling_a_missing_appointment_fails() {
    let temp = setup_temp_state().await.unwrap();
    let book = Slotbook::new(test_config(&temp.state_dir)).await.unwrap();
    let day = date(2026, 1, 3);

    let err = book
        .update_appointment(42, draft("Nobody", day, time(9, 0, 0, 0)))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::AppointmentNotFound(42)));

    let err = book.cancel_appointment(42).await.unwrap_err();
    assert!(matches!(err, Error::AppointmentNotFound(42)));
}

#[tokio::test]
async fn listing_without_filter_is_chronological() {
    // Arrange
    let temp = setup_temp_state().await.unwrap();
    let book = Slotbook::new(test_config(&temp.state_dir)).await.unwrap();
    book.book(draft("new year", date(2026, 1, 1), time(9, 0, 0, 0)))
        .await
        .unwrap();
    book.book(draft("new year's eve", date(2025, 12, 31), time(16, 0, 0, 0)))
        .await
        .unwrap();
    book.book(draft("earlier that day", date(2025, 12, 31), time(8, 0, 0, 0)))
        .await
        .unwrap();

    // Act
    let listed = book
        .appointments(&AppointmentConditions::default())
        .await
        .unwrap();

    // Assert
    let names: Vec<&str> = listed.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["earlier that day", "new year's eve", "new year"]);
}

#[tokio::test]
async fn bookings_survive_reopening_the_database() {
    // Arrange
    let temp = setup_temp_state().await.unwrap();
    let day = date(2026, 1, 3);
    {
        let book = Slotbook::new(test_config(&temp.state_dir)).await.unwrap();
        book.set_window(day, time(9, 0, 0, 0), time(10, 0, 0, 0))
            .await
            .unwrap();
        book.book(draft("Jamie Doe", day, time(9, 15, 0, 0)))
            .await
            .unwrap();
        book.close().await.unwrap();
    }

    // Act
    let reopened = Slotbook::new(test_config(&temp.state_dir)).await.unwrap();

    // Assert
    let listed = reopened
        .appointments(&AppointmentConditions { date: Some(day) })
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Jamie Doe");
    assert_eq!(
        slot_labels(&reopened.open_slots(day).await.unwrap()),
        ["09:00", "09:30", "09:45"]
    );
}
