use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_net::http::Request;
use log::{info, warn};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Debug, Error, PartialEq)]
pub enum AssetError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("asset host answered with status {0}")]
    Status(u16),
    #[error("not a lottie document: {0}")]
    Parse(String),
}

#[derive(Deserialize)]
struct LottieHeader {
    #[serde(rename = "fr")]
    frame_rate: f64,
    #[serde(rename = "ip")]
    in_point: f64,
    #[serde(rename = "op")]
    out_point: f64,
    #[serde(rename = "w")]
    width: f64,
    #[serde(rename = "h")]
    height: f64,
}

/// A fetched Lottie document. Only the header is interpreted, the rest is
/// passed through untouched to the player.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationAsset {
    pub frame_rate: f64,
    pub in_point: f64,
    pub out_point: f64,
    pub width: f64,
    pub height: f64,
    pub document: Value,
}

impl AnimationAsset {
    pub fn from_document(document: Value) -> Result<Self, AssetError> {
        let header = LottieHeader::deserialize(&document)
            .map_err(|e| AssetError::Parse(e.to_string()))?;
        if header.frame_rate <= 0.0 {
            return Err(AssetError::Parse(format!("frame rate {}", header.frame_rate)));
        }

        Ok(Self {
            frame_rate: header.frame_rate,
            in_point: header.in_point,
            out_point: header.out_point,
            width: header.width,
            height: header.height,
            document,
        })
    }

    pub fn duration_secs(&self) -> f64 {
        ((self.out_point - self.in_point) / self.frame_rate).max(0.0)
    }

    pub fn aspect_ratio(&self) -> Option<f64> {
        (self.height > 0.0).then(|| self.width / self.height)
    }
}

thread_local! {
    static LOADED: RefCell<HashMap<String, Rc<AnimationAsset>>> = RefCell::new(HashMap::new());
}

fn cached(url: &str) -> Option<Rc<AnimationAsset>> {
    LOADED.with(|loaded| loaded.borrow().get(url).cloned())
}

fn remember(url: &str, asset: AnimationAsset) -> Rc<AnimationAsset> {
    let asset = Rc::new(asset);
    LOADED.with(|loaded| loaded.borrow_mut().insert(url.to_string(), asset.clone()));
    asset
}

pub async fn fetch_animation(url: &str) -> Result<AnimationAsset, AssetError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| AssetError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(AssetError::Status(response.status()));
    }

    let document = response
        .json::<Value>()
        .await
        .map_err(|e| AssetError::Parse(e.to_string()))?;
    AnimationAsset::from_document(document)
}

/// `None` until the asset arrives. A failed fetch is logged and the view
/// simply never gets its decoration.
#[hook]
pub fn use_animation_asset(url: &'static str) -> Option<Rc<AnimationAsset>> {
    let asset = use_state(|| cached(url));

    {
        let asset = asset.clone();
        use_effect_with_deps(
            move |url| {
                let url = *url;
                if let Some(hit) = cached(url) {
                    asset.set(Some(hit));
                } else {
                    spawn_local(async move {
                        match fetch_animation(url).await {
                            Ok(loaded) => {
                                info!("Loaded animation {} ({:.1}s)", url, loaded.duration_secs());
                                asset.set(Some(remember(url, loaded)));
                            }
                            Err(e) => warn!("Skipping decorative animation {}: {}", url, e),
                        }
                    });
                }
                || ()
            },
            url,
        );
    }

    (*asset).clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document() -> Value {
        json!({
            "v": "5.7.4",
            "fr": 30,
            "ip": 0,
            "op": 90,
            "w": 500,
            "h": 250,
            "layers": []
        })
    }

    #[test]
    fn header_drives_duration_and_ratio() {
        let asset = AnimationAsset::from_document(document()).unwrap();

        assert_eq!(asset.duration_secs(), 3.0);
        assert_eq!(asset.aspect_ratio(), Some(2.0));
        assert_eq!(asset.document["layers"], json!([]));
    }

    #[test]
    fn missing_header_is_a_parse_error() {
        let result = AnimationAsset::from_document(json!({ "layers": [] }));
        assert!(matches!(result, Err(AssetError::Parse(_))));
    }

    #[test]
    fn zero_frame_rate_is_rejected() {
        let mut doc = document();
        doc["fr"] = json!(0);
        assert!(matches!(
            AnimationAsset::from_document(doc),
            Err(AssetError::Parse(_))
        ));
    }

    #[test]
    fn remembered_assets_are_served_from_cache() {
        let url = "https://example.test/loop.json";
        assert!(cached(url).is_none());

        let stored = remember(url, AnimationAsset::from_document(document()).unwrap());
        let hit = cached(url).unwrap();

        assert!(Rc::ptr_eq(&stored, &hit));
        assert!(cached("https://example.test/other.json").is_none());
    }
}
