// SPDX-FileCopyrightText: 2026 Slotbook contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Availability window workflow tests: overwriting, validation, and the
//! interaction between windows and existing bookings.

use jiff::civil::{date, time};
use slotbook_core::{AppointmentConditions, Error, Slotbook};

use crate::common::{draft, setup_temp_state, slot_labels, test_config};

#[tokio::test]
async fn no_window_means_no_slots_regardless_of_appointments() {
    // Arrange - an appointment exists but no window was ever configured
    let temp = setup_temp_state().await.unwrap();
    let book = Slotbook::new(test_config(&temp.state_dir)).await.unwrap();
    let day = date(2026, 1, 3);
    book.book(draft("walk-in", day, time(9, 15, 0, 0)))
        .await
        .unwrap();

    // Act & Assert
    assert!(book.window(day).await.unwrap().is_none());
    assert!(book.open_slots(day).await.unwrap().is_empty());
}

#[tokio::test]
async fn setting_a_window_twice_keeps_the_second() {
    // Arrange
    let temp = setup_temp_state().await.unwrap();
    let book = Slotbook::new(test_config(&temp.state_dir)).await.unwrap();
    let day = date(2026, 1, 3);
    book.set_window(day, time(9, 0, 0, 0), time(17, 0, 0, 0))
        .await
        .unwrap();

    // Act
    book.set_window(day, time(10, 0, 0, 0), time(11, 0, 0, 0))
        .await
        .unwrap();

    // Assert
    let window = book.window(day).await.unwrap().unwrap();
    assert_eq!(window.start, time(10, 0, 0, 0));
    assert_eq!(window.end, time(11, 0, 0, 0));
    assert_eq!(
        slot_labels(&book.open_slots(day).await.unwrap()),
        ["10:00", "10:15", "10:30", "10:45"]
    );
}

#[tokio::test]
async fn inverted_or_empty_windows_are_rejected() {
    let temp = setup_temp_state().await.unwrap();
    let book = Slotbook::new(test_config(&temp.state_dir)).await.unwrap();
    let day = date(2026, 1, 3);

    let err = book
        .set_window(day, time(17, 0, 0, 0), time(9, 0, 0, 0))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidWindow { .. }));

    let err = book
        .set_window(day, time(9, 0, 0, 0), time(9, 0, 0, 0))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidWindow { .. }));

    assert!(book.window(day).await.unwrap().is_none());
}

#[tokio::test]
async fn slots_stop_before_an_uneven_window_end() {
    let temp = setup_temp_state().await.unwrap();
    let book = Slotbook::new(test_config(&temp.state_dir)).await.unwrap();
    let day = date(2026, 1, 3);
    book.set_window(day, time(9, 0, 0, 0), time(9, 40, 0, 0))
        .await
        .unwrap();

    assert_eq!(
        slot_labels(&book.open_slots(day).await.unwrap()),
        ["09:00", "09:15", "09:30"]
    );
}

#[tokio::test]
async fn shrinking_a_window_keeps_orphaned_appointments() {
    // Arrange
    let temp = setup_temp_state().await.unwrap();
    let book = Slotbook::new(test_config(&temp.state_dir)).await.unwrap();
    let day = date(2026, 1, 3);
    book.set_window(day, time(9, 0, 0, 0), time(17, 0, 0, 0))
        .await
        .unwrap();
    let appointment = book
        .book(draft("late afternoon", day, time(16, 0, 0, 0)))
        .await
        .unwrap();

    // Act - the new window no longer covers the booked time
    book.set_window(day, time(9, 0, 0, 0), time(12, 0, 0, 0))
        .await
        .unwrap();

    // Assert - the orphan stays listed and editable
    let listed = book
        .appointments(&AppointmentConditions { date: Some(day) })
        .await
        .unwrap();
    assert_eq!(listed, vec![appointment.clone()]);

    let moved = book
        .update_appointment(appointment.id, draft("late afternoon", day, time(10, 0, 0, 0)))
        .await
        .unwrap();
    assert_eq!(moved.time, time(10, 0, 0, 0));
}

#[tokio::test]
async fn reads_are_idempotent_without_mutations() {
    // Arrange
    let temp = setup_temp_state().await.unwrap();
    let book = Slotbook::new(test_config(&temp.state_dir)).await.unwrap();
    let day = date(2026, 1, 3);
    book.set_window(day, time(9, 0, 0, 0), time(10, 0, 0, 0))
        .await
        .unwrap();
    book.book(draft("Jamie Doe", day, time(9, 0, 0, 0)))
        .await
        .unwrap();

    // Act & Assert
    assert_eq!(
        book.window(day).await.unwrap(),
        book.window(day).await.unwrap()
    );
    assert_eq!(
        book.open_slots(day).await.unwrap(),
        book.open_slots(day).await.unwrap()
    );
    let conds = AppointmentConditions { date: Some(day) };
    assert_eq!(
        book.appointments(&conds).await.unwrap(),
        book.appointments(&conds).await.unwrap()
    );
}
