use bevy::prelude::*;
use std::collections::HashMap;

use crate::board::MatchSession;

/// Image handles keyed by the icon path stored on items and placements.
#[derive(Resource, Default)]
pub struct IconCache {
    handles: HashMap<String, Handle<Image>>,
}

impl IconCache {
    pub fn get_or_load(&mut self, asset_server: &AssetServer, path: &str) -> Handle<Image> {
        self.handles
            .entry(path.to_string())
            .or_insert_with(|| asset_server.load(path.to_string()))
            .clone()
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

pub fn icon_node(image: Handle<Image>, size: f32) -> (ImageNode, Node) {
    (
        ImageNode::new(image),
        Node {
            width: Val::Px(size),
            height: Val::Px(size),
            ..default()
        },
    )
}

fn preload_icons(
    session: Res<MatchSession>,
    asset_server: Res<AssetServer>,
    mut icons: ResMut<IconCache>,
) {
    for item in session.catalog().iter() {
        icons.get_or_load(&asset_server, &item.icon);
    }
    debug!("Preloaded {} icon(s)", icons.len());
}

pub struct IconPlugin;

impl Plugin for IconPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<IconCache>().add_systems(
            PostStartup,
            preload_icons.run_if(resource_exists::<MatchSession>),
        );
    }
}
