use crate::chat::ChatChannel;
use crate::hud::HudRoot;
use crate::locale::Bundle;
use crate::marker::MarkerProbe;
use crate::settings::{SettingsPanel, SettingsStore};
use crate::world::WorldView;

/// Borrowed host capabilities for one tick.
///
/// The host builds this from its own subsystems each time it calls into the
/// overlay, so the overlay never holds on to host state between ticks.
pub struct HostContext<'a> {
    pub world: &'a dyn WorldView,
    pub settings: &'a mut dyn SettingsStore,
    pub bundle: &'a dyn Bundle,
    pub chat: &'a mut dyn ChatChannel,
    /// `None` until the host UI exists.
    pub hud: Option<&'a mut dyn HudRoot>,
    pub markers: &'a mut dyn MarkerProbe,
    /// Host settings dialog, when it can take new categories.
    pub panel: Option<&'a mut dyn SettingsPanel>,
}

/// Host events the overlay subscribes to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HostEvent {
    /// Client finished loading. Fired once.
    ClientLoad,
    WorldLoad,
    BlockBuildEnd,
    BlockDestroy,
    BuildRotate,
    BuildTeamChange,
    Config,
    /// The player committed a change in the settings dialog.
    SettingsChanged,
}

impl HostEvent {
    /// Whether the event changes which buildings exist, where, or for whom.
    pub fn is_structural(self) -> bool {
        matches!(
            self,
            HostEvent::BlockBuildEnd
                | HostEvent::BlockDestroy
                | HostEvent::BuildRotate
                | HostEvent::BuildTeamChange
                | HostEvent::Config
        )
    }
}
