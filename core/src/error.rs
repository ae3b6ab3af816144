// SPDX-FileCopyrightText: 2026 roteiro contributors
//
// SPDX-License-Identifier: Apache-2.0

/// Errors surfaced by the core and its collaborator seams.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Hour text that is not a whole number after stripping `.` and `,`.
    /// Screens validate the field first; this is the contract surfacing.
    #[error("invalid hour text: {0:?}")]
    InvalidHour(String),

    /// The device-storage collaborator failed.
    #[error("storage error: {0}")]
    Store(String),

    /// The network collaborator failed.
    #[error("service error: {0}")]
    Service(String),
}
