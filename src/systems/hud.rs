use bevy_ecs::event::EventReader;
use bevy_ecs::resource::Resource;
use bevy_ecs::system::ResMut;

use crate::constants::feedback::BANNER_TICKS;
use crate::events::FeedbackEvent;

/// The transient callout line ("KICKFLIP +25", "50-50 GRIND") shown above the
/// skater. Written here, drawn by the render pass.
#[derive(Debug, Default, Resource)]
pub struct Banner {
    pub line: String,
    pub ticks: u32,
}

impl Banner {
    pub fn show(&mut self, line: String) {
        self.line = line;
        self.ticks = BANNER_TICKS;
    }

    pub fn visible(&self) -> bool {
        self.ticks > 0
    }
}

pub fn hud_system(mut banner: ResMut<Banner>, mut feedback: EventReader<FeedbackEvent>) {
    banner.ticks = banner.ticks.saturating_sub(1);

    for event in feedback.read() {
        match event {
            FeedbackEvent::TrickLanded { trick, reward } => {
                banner.show(format!("{} +{}", trick.label(), reward));
            }
            FeedbackEvent::GrindStart => banner.show("50-50 GRIND".to_owned()),
            _ => {}
        }
    }
}
