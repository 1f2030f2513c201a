//! Playback state machine for the embedded game frame.
//!
//! Before a game can be started the hosting UI probes the player source for
//! existence. The machine below tracks that probe and the start / load /
//! reload cycle. It performs no I/O itself: the host runs the probe and feeds
//! the outcome back as an event tagged with the probe generation it was
//! started for, so results from an abandoned probe are ignored.

use serde::{Deserialize, Serialize};

/// Outcome of the existence probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeStatus {
  /// The probe has not answered yet.
  Pending,
  /// The player source exists.
  Available,
  /// The player source is missing or the probe failed.
  Unavailable,
}

/// Where the player is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerState {
  /// Waiting for the existence probe.
  Checking,
  /// The source exists; the start splash is shown.
  Ready,
  /// Started; the frame is loading.
  Loading,
  /// The source does not exist.
  Missing,
  /// The frame finished loading.
  Playing,
}

/// Inputs to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlayerEvent {
  /// A probe answered.
  ProbeResolved { generation: u64, status: ProbeStatus },
  /// The user pressed play.
  Start,
  /// The frame fired its load event.
  FrameLoaded,
  /// The user asked for a reload.
  Reload,
  /// The player was pointed at a different source.
  TargetChanged,
}

/// The player state machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
  state: PlayerState,
  generation: u64,
}

impl Default for Player {
  fn default() -> Self {
    Self::new()
  }
}

impl Player {
  /// A new player, already waiting on its first probe (generation 0).
  pub fn new() -> Self {
    Self {
      state: PlayerState::Checking,
      generation: 0,
    }
  }

  pub fn state(&self) -> PlayerState {
    self.state
  }

  /// The generation the host must attach to the current probe's result.
  pub fn generation(&self) -> u64 {
    self.generation
  }

  /// The probe status as seen by the UI.
  pub fn probe_status(&self) -> ProbeStatus {
    match self.state {
      PlayerState::Checking => ProbeStatus::Pending,
      PlayerState::Missing => ProbeStatus::Unavailable,
      PlayerState::Ready | PlayerState::Loading | PlayerState::Playing => ProbeStatus::Available,
    }
  }

  /// Whether the embedded frame should exist.
  pub fn frame_mounted(&self) -> bool {
    matches!(self.state, PlayerState::Loading | PlayerState::Playing)
  }

  /// Apply an event and return the new state.
  ///
  /// Events that make no sense in the current state are ignored.
  pub fn handle(&mut self, event: PlayerEvent) -> PlayerState {
    let next = match (self.state, event) {
      (_, PlayerEvent::Reload) | (_, PlayerEvent::TargetChanged) => {
        self.generation += 1;
        PlayerState::Checking
      }
      (PlayerState::Checking, PlayerEvent::ProbeResolved { generation, status })
        if generation == self.generation =>
      {
        match status {
          ProbeStatus::Available => PlayerState::Ready,
          ProbeStatus::Unavailable => PlayerState::Missing,
          ProbeStatus::Pending => PlayerState::Checking,
        }
      }
      (PlayerState::Ready, PlayerEvent::Start) => PlayerState::Loading,
      (PlayerState::Loading, PlayerEvent::FrameLoaded) => PlayerState::Playing,
      (state, _) => state,
    };

    if next != self.state {
      log::debug!("player {:?} -> {:?} on {:?}", self.state, next, event);
    }
    self.state = next;
    next
  }
}
