mod material;
mod primitives;

use std::{fs, path::Path};

use serde::{de::DeserializeOwned, Deserialize, Serialize};

pub use material::*;
pub use primitives::*;

use crate::{
    camera::OrthographicCamera,
    error::Error,
    geometry::HitRule,
    math::{Color, Point3, Vec3},
    scene::{Background, PointLamp, Scene},
};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CameraData {
    pub center: [f32; 3],
    pub facing: [f32; 3],
    pub width: f32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LampData {
    pub color: [u8; 3],
    pub intensity: f32,
    pub position: [f32; 3],
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BackgroundData {
    pub low: [u8; 3],
    pub high: [u8; 3],
}

/// On-disk scene description. Any section left out keeps the default scene's value.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SceneData {
    pub camera: Option<CameraData>,
    pub lamp: Option<LampData>,
    pub background: Option<BackgroundData>,
    #[serde(default)]
    pub hit_rule: HitRule,
    pub primitives: Option<Vec<PrimitiveData>>,
}

impl TryFrom<SceneData> for Scene {
    type Error = Error;
    fn try_from(data: SceneData) -> Result<Self, Self::Error> {
        let mut scene = Scene::default();
        if let Some(camera) = data.camera {
            scene.camera = OrthographicCamera::new(
                Point3::from(camera.center),
                Vec3::from(camera.facing),
                camera.width,
            )?;
        }
        if let Some(lamp) = data.lamp {
            scene.lamp = PointLamp::new(
                Color::from(lamp.color),
                lamp.intensity,
                Point3::from(lamp.position),
            );
        }
        if let Some(background) = data.background {
            scene.background = Background {
                low: Color::from(background.low),
                high: Color::from(background.high),
            };
        }
        scene.hit_rule = data.hit_rule;
        if let Some(primitives) = data.primitives {
            scene.primitives = primitives
                .into_iter()
                .map(PrimitiveData::transform)
                .collect::<Result<Vec<_>, _>>()?;
        }
        Ok(scene)
    }
}

pub fn load_json<T>(path: &Path) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    let input = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let data: T = serde_json::from_str(&input)?;
    Ok(data)
}

pub fn parse_scene(input: &str) -> Result<Scene, Error> {
    let data: SceneData = serde_json::from_str(input)?;
    Scene::try_from(data)
}

pub fn load_scene(path: &Path) -> Result<Scene, Error> {
    let scene = Scene::try_from(load_json::<SceneData>(path)?)?;
    tracing::info!(
        "loaded scene {} with {} primitives",
        path.display(),
        scene.primitives.len()
    );
    Ok(scene)
}
