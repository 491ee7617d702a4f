use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div style="min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; background: #0B0F2F; color: white; gap: 1rem;">
            <h1>{"Page not found"}</h1>
            <Link<Route> to={Route::Home}>
                <span style="color: #6C63FF;">{"← Back to homepage"}</span>
            </Link<Route>>
        </div>
    }
}
