use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod animation;
mod waitlist {
    pub mod entry;
    pub mod state;
    pub mod submit;
}
mod effects {
    pub mod confetti;
}
mod components {
    pub mod confirmation;
    pub mod lottie_player;
}
mod pages {
    pub mod landing;
    pub mod waitlist;
    pub mod not_found;
}

use pages::{
    landing::Landing,
    waitlist::Waitlist,
    not_found::NotFound,
};


#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/waitlist")]
    Waitlist,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::Waitlist => {
            info!("Rendering Waitlist page");
            html! { <Waitlist /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_map_to_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Waitlist.to_path(), "/waitlist");
        assert_eq!(Route::recognize("/waitlist"), Some(Route::Waitlist));
    }
}
