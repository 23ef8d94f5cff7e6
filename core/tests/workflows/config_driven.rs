// SPDX-FileCopyrightText: 2026 Slotbook contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Workflows driven by configuration: slot interval overrides.

use jiff::civil::{date, time};
use slotbook_core::{Config, Slotbook};

use crate::common::{draft, setup_temp_state, slot_labels};

#[tokio::test]
async fn interval_from_toml_config_shapes_the_slot_grid() {
    // Arrange
    let temp = setup_temp_state().await.unwrap();
    let mut config: Config = toml::from_str("slot_interval_minutes = 30").unwrap();
    config.state_dir = Some(temp.state_dir.clone());
    let book = Slotbook::new(config).await.unwrap();
    let day = date(2026, 1, 3);
    book.set_window(day, time(9, 0, 0, 0), time(11, 0, 0, 0))
        .await
        .unwrap();

    // Act & Assert
    assert_eq!(book.slot_interval_minutes(), 30);
    assert_eq!(
        slot_labels(&book.open_slots(day).await.unwrap()),
        ["09:00", "09:30", "10:00", "10:30"]
    );
}

#[tokio::test]
async fn zero_interval_offers_no_slots_but_admin_booking_still_works() {
    // Arrange
    let temp = setup_temp_state().await.unwrap();
    let config = Config {
        state_dir: Some(temp.state_dir.clone()),
        slot_interval_minutes: 0,
    };
    let book = Slotbook::new(config).await.unwrap();
    let day = date(2026, 1, 3);
    book.set_window(day, time(9, 0, 0, 0), time(17, 0, 0, 0))
        .await
        .unwrap();

    // Act & Assert - nothing is offered, but direct booking is untouched
    assert!(book.open_slots(day).await.unwrap().is_empty());
    let appointment = book
        .book(draft("walk-in", day, time(9, 10, 0, 0)))
        .await
        .unwrap();
    assert!(appointment.id > 0);
}
