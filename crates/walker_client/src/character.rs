//! Character loading: mannequin scene + looped walking clip
//!
//! Ассеты грузятся асинхронно. До `SceneInstanceReady` у персонажа нет
//! integrator'а, и KeyTransition'ы просто никому не достаются.

use bevy::asset::{LoadState, UntypedAssetId};
use bevy::prelude::*;
use bevy::scene::SceneInstanceReady;
use walker_simulation::{
    log, log_error, log_warning, CharacterControlParams, LoopingClip, MotionIntegrator, SimulationConfig,
};

use crate::camera::MainCamera;

const CHARACTER_MODEL: &str = "models/mannequin.glb";
const WALKING_CLIP: &str = "models/walking.glb";
const CHARACTER_SCALE: f32 = 0.1;

pub struct CharacterPlugin;

impl Plugin for CharacterPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, report_asset_failures);
    }
}

/// Marker: root entity mannequin scene
#[derive(Component)]
pub struct Character;

/// Handles ассетов персонажа (для load state проверок)
#[derive(Resource)]
pub struct CharacterAssets {
    pub scene: Handle<Scene>,
    pub walking: Handle<AnimationClip>,
    pub graph: Handle<AnimationGraph>,
    pub walk_node: AnimationNodeIndex,
}

/// Связь AnimationPlayer'а с walking clip'ом
#[derive(Component, Debug, Clone)]
pub struct WalkCycle {
    pub node: AnimationNodeIndex,
    pub clip: Handle<AnimationClip>,
}

/// Startup: запускает загрузку mannequin + walking clip
pub fn load_character(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut graphs: ResMut<Assets<AnimationGraph>>,
) {
    let scene = asset_server.load(GltfAssetLabel::Scene(0).from_asset(CHARACTER_MODEL));
    let walking = asset_server.load(GltfAssetLabel::Animation(0).from_asset(WALKING_CLIP));
    let (graph, walk_node) = AnimationGraph::from_clip(walking.clone());
    let graph = graphs.add(graph);

    commands.insert_resource(CharacterAssets {
        scene: scene.clone(),
        walking,
        graph,
        walk_node,
    });

    commands
        .spawn((
            SceneRoot(scene),
            Transform::from_scale(Vec3::splat(CHARACTER_SCALE)),
            Character,
        ))
        .observe(on_character_ready);

    log(&format!("Loading character: {} + {}#Animation0", CHARACTER_MODEL, WALKING_CLIP));
}

/// Scene instance готов: integrator на root + walking clip на каждый player
fn on_character_ready(
    trigger: Trigger<SceneInstanceReady>,
    mut commands: Commands,
    assets: Res<CharacterAssets>,
    config: Res<SimulationConfig>,
    camera_query: Query<Entity, With<MainCamera>>,
    children: Query<&Children>,
    mut players: Query<&mut AnimationPlayer>,
) {
    let root = trigger.target();

    commands.entity(root).insert(MotionIntegrator::new(
        CharacterControlParams {
            target: Some(root),
            camera: camera_query.single().ok(),
        },
        config.motion,
    ));

    let mut attached = 0;
    for entity in children.iter_descendants(root) {
        let Ok(mut player) = players.get_mut(entity) else {
            continue;
        };

        // Playhead двигает LoopingClip (FrameDriver), player только сэмплирует позу
        player.play(assets.walk_node).repeat().set_speed(0.0);

        commands.entity(entity).insert((
            AnimationGraphHandle(assets.graph.clone()),
            LoopingClip::default(),
            WalkCycle {
                node: assets.walk_node,
                clip: assets.walking.clone(),
            },
        ));
        attached += 1;
    }

    if attached == 0 {
        log_warning(&format!("Character {:?}: no AnimationPlayer in scene, walk cycle disabled", root));
    } else {
        log(&format!("Character {:?} ready: integrator attached, {} animation player(s)", root, attached));
    }
}

/// Ошибки загрузки логируем один раз на ассет
fn report_asset_failures(
    asset_server: Res<AssetServer>,
    assets: Option<Res<CharacterAssets>>,
    mut reported: Local<Vec<UntypedAssetId>>,
) {
    let Some(assets) = assets else {
        return;
    };

    let tracked = [
        (assets.scene.id().untyped(), CHARACTER_MODEL),
        (assets.walking.id().untyped(), WALKING_CLIP),
    ];

    for (id, path) in tracked {
        if reported.contains(&id) {
            continue;
        }
        if let Some(LoadState::Failed(err)) = asset_server.get_load_state(id) {
            log_error(&format!("Failed to load {}: {}", path, err));
            reported.push(id);
        }
    }
}
