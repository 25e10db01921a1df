mod config;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod enemies;
mod maps;
mod player;
mod skills;
mod ui;
mod victory;
mod wormholes;

use avian3d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Planeshift".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((
        core::CorePlugin,
        config::ConfigPlugin,
        maps::MapsPlugin,
        enemies::EnemiesPlugin,
        victory::VictoryPlugin,
        player::PlayerPlugin,
        skills::SkillsPlugin,
        wormholes::WormholesPlugin,
        ui::UiPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
