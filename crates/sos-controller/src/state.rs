//! Controller phases and the observable snapshot.

/// Why a dispatch attempt failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    /// No location snapshot was available; nothing was sent.
    LocationUnavailable,
    /// The request never reached the relay endpoint.
    Network,
    /// The relay endpoint rejected the request or returned garbage.
    Server,
}

impl FailureReason {
    /// User-facing message for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            FailureReason::LocationUnavailable => "Location not available. Cannot send SOS.",
            FailureReason::Network | FailureReason::Server => {
                "Failed to send emergency message. Please try again or call emergency services directly."
            }
        }
    }
}

/// The controller's phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SosPhase {
    /// Waiting for a press.
    Idle,
    /// Counting down; `remaining` seconds until dispatch.
    Arming { remaining: u8 },
    /// The dispatch request is in flight.
    Dispatching,
    /// The relay accepted the dispatch.
    Sent,
    /// The dispatch failed; a fresh press cycle is allowed.
    Failed { reason: FailureReason },
}

/// Observable controller state for a UI layer.
///
/// Published over a watch channel on every transition.
#[derive(Debug, Clone, PartialEq)]
pub struct SosSnapshot {
    /// Current phase.
    pub phase: SosPhase,
    /// Whether the button pulse animation should run.
    pub pulsing: bool,
    /// Header text: place name, "Locating...", or a failure text.
    pub location_text: String,
}

impl SosSnapshot {
    /// The snapshot before activation.
    pub fn initial() -> Self {
        Self {
            phase: SosPhase::Idle,
            pulsing: false,
            location_text: "Locating...".to_string(),
        }
    }

    /// Seconds remaining in the countdown, if arming.
    pub fn countdown_remaining(&self) -> Option<u8> {
        match self.phase {
            SosPhase::Arming { remaining } => Some(remaining),
            _ => None,
        }
    }

    /// Whether a dispatch request is in flight.
    pub fn is_sending(&self) -> bool {
        self.phase == SosPhase::Dispatching
    }

    /// Whether the dispatch was accepted.
    pub fn was_sent(&self) -> bool {
        self.phase == SosPhase::Sent
    }

    /// Card text below the SOS button.
    pub fn status_text(&self) -> &'static str {
        match &self.phase {
            SosPhase::Dispatching => "Sending emergency alert with your location...",
            SosPhase::Sent => {
                "Emergency message sent successfully with your location. Help is on the way."
            }
            SosPhase::Failed { reason } => reason.user_message(),
            SosPhase::Idle | SosPhase::Arming { .. } => {
                "SOS will be sent to your emergency contact with your precise location."
            }
        }
    }
}
