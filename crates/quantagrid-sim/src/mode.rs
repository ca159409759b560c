//! Normal / emergency mode state machine.
//!
//! The only transition is [`ModeController::toggle`]. There is no timeout,
//! cooldown or confirmation; toggling twice restores the original state.

use quantagrid_topology::Palette;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Operational mode of the mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Infrastructure available, metrics frozen
    #[default]
    Normal,
    /// Emergency declared, mesh runs peer-to-peer and metrics converge
    Emergency,
}

impl Mode {
    pub fn is_emergency(self) -> bool {
        matches!(self, Mode::Emergency)
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Mode::Normal => Mode::Emergency,
            Mode::Emergency => Mode::Normal,
        }
    }

    /// Network status implied by this mode.
    pub fn network_status(self) -> NetworkStatus {
        match self {
            Mode::Normal => NetworkStatus::Online,
            Mode::Emergency => NetworkStatus::OfflineMesh,
        }
    }

    /// Styling hint for the mesh renderer.
    pub fn palette(self) -> Palette {
        Palette::for_emergency(self.is_emergency())
    }

    /// Banner shown on the emergency response panel.
    pub fn response_banner(self) -> &'static str {
        match self {
            Mode::Normal => "SYSTEM READY",
            Mode::Emergency => "MESH NETWORK ACTIVE",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Normal => write!(f, "normal"),
            Mode::Emergency => write!(f, "emergency"),
        }
    }
}

/// Network status indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NetworkStatus {
    #[serde(rename = "online")]
    Online,
    #[serde(rename = "offline-mesh")]
    OfflineMesh,
}

impl NetworkStatus {
    /// Machine label: `online` or `offline-mesh`.
    pub fn label(self) -> &'static str {
        match self {
            NetworkStatus::Online => "online",
            NetworkStatus::OfflineMesh => "offline-mesh",
        }
    }

    /// Human-readable indicator text.
    pub fn display_text(self) -> &'static str {
        match self {
            NetworkStatus::Online => "Online",
            NetworkStatus::OfflineMesh => "Offline Mesh Active",
        }
    }
}

impl std::fmt::Display for NetworkStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Holds the current mode and its network status label.
#[derive(Debug, Clone)]
pub struct ModeController {
    mode: Mode,
    status: NetworkStatus,
}

impl ModeController {
    /// Start in [`Mode::Normal`] with status `online`.
    pub fn new() -> Self {
        Self::with_mode(Mode::Normal)
    }

    pub fn with_mode(mode: Mode) -> Self {
        Self {
            mode,
            status: mode.network_status(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn network_status(&self) -> NetworkStatus {
        self.status
    }

    /// Flip the mode and its status label together.
    pub fn toggle(&mut self) -> Mode {
        self.mode = self.mode.toggled();
        self.status = self.mode.network_status();
        info!(mode = %self.mode, status = %self.status, "Mode toggled");
        self.mode
    }
}

impl Default for ModeController {
    fn default() -> Self {
        Self::new()
    }
}
