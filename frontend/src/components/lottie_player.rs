use std::rc::Rc;

use log::warn;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::js_sys::Reflect;
use yew::prelude::*;

use crate::animation::AnimationAsset;

#[wasm_bindgen]
extern "C" {
    type LottieAnimation;

    #[wasm_bindgen(catch, js_namespace = lottie, js_name = loadAnimation)]
    fn load_animation(params: &JsValue) -> Result<LottieAnimation, JsValue>;

    #[wasm_bindgen(method)]
    fn destroy(this: &LottieAnimation);
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LoadParams<'a> {
    renderer: &'static str,
    #[serde(rename = "loop")]
    looping: bool,
    autoplay: bool,
    animation_data: &'a serde_json::Value,
}

fn mount(container: &web_sys::Element, asset: &AnimationAsset, looping: bool) -> Result<LottieAnimation, JsValue> {
    let params = LoadParams {
        renderer: "svg",
        looping,
        autoplay: true,
        animation_data: &asset.document,
    }
    .serialize(&serde_wasm_bindgen::Serializer::json_compatible())?;
    Reflect::set(&params, &JsValue::from_str("container"), container)?;
    load_animation(&params)
}

#[derive(Properties, PartialEq)]
pub struct LottiePlayerProps {
    pub asset: Rc<AnimationAsset>,
    #[prop_or(true)]
    pub looping: bool,
}

/// Hands the document to the page's lottie-web runtime and tears the
/// animation down again when the asset changes or the view goes away.
#[function_component(LottiePlayer)]
pub fn lottie_player(props: &LottiePlayerProps) -> Html {
    let container = use_node_ref();

    {
        let container = container.clone();
        use_effect_with_deps(
            move |(asset, looping)| {
                let animation = container
                    .cast::<web_sys::Element>()
                    .and_then(|element| match mount(&element, asset, *looping) {
                        Ok(animation) => Some(animation),
                        Err(e) => {
                            warn!("lottie player unavailable: {:?}", e);
                            None
                        }
                    });
                move || {
                    if let Some(animation) = animation {
                        animation.destroy();
                    }
                }
            },
            (props.asset.clone(), props.looping),
        );
    }

    let style = props
        .asset
        .aspect_ratio()
        .map(|ratio| format!("width: 100%; aspect-ratio: {};", ratio))
        .unwrap_or_else(|| "width: 100%;".to_string());

    html! {
        <div ref={container} {style}></div>
    }
}
