// SPDX-FileCopyrightText: 2026 Slotbook contributors
//
// SPDX-License-Identifier: Apache-2.0

mod booking_lifecycle;
mod config_driven;
mod window_management;
