use yew::prelude::*;
use yew_router::prelude::*;

mod styles;
mod config;
mod api_settings;
mod picture_form;
mod picture_view;

use crate::{
    api_settings::ApiSettings,
    picture_form::PictureForm,
    picture_view::PictureView,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")] Home,
    #[at("/settings")] Settings,
    #[at("/view/:picture_type/:date/:filename")] View { picture_type: String, date: String, filename: String },
}

const NAV_LINK: &str = "text-base md:text-lg font-medium px-4 py-2 rounded-md transition-colors duration-200 ease-in-out \
    text-gray-200 border border-transparent hover:border-blue-400 hover:text-blue-400";
const NAV_LINK_ACTIVE: &str = "text-blue-400 border-blue-400 ring-2 ring-blue-500 ring-offset-1 ring-offset-gray-900";

fn nav_classes(active: bool) -> Classes {
    classes!(NAV_LINK, active.then_some(NAV_LINK_ACTIVE))
}

#[function_component(Navigation)]
fn navigation() -> Html {
    let current_route = use_route::<Route>();

    html! {
        <nav class="bg-gray-900 shadow-lg fixed top-0 w-full z-50">
            <div class="container mx-auto px-6 py-4 flex justify-center space-x-8">
                <Link<Route> to={Route::Home} classes={nav_classes(current_route == Some(Route::Home))}>
                    {"Pictures"}
                </Link<Route>>
                <Link<Route> to={Route::Settings} classes={nav_classes(current_route == Some(Route::Settings))}>
                    {"API Settings"}
                </Link<Route>>
            </div>
        </nav>
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen bg-gray-900">
                <Navigation />
                <div class="pt-16">
                    <Switch<Route> render={switch} />
                </div>
            </div>
        </BrowserRouter>
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <PictureForm /> },
        Route::Settings => html! { <ApiSettings /> },
        Route::View { picture_type, date, filename } => html! { <PictureView {picture_type} {date} {filename} /> },
    }
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
