use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod contact;
mod content;
mod icons;
mod state;
mod components {
    pub mod booking_modal;
    pub mod contact_form;
    pub mod content_tile;
}
mod pages {
    pub mod marketing;
}

use components::content_tile::{DETAILS_HEADING, LANDING_DETAILS_HEADING};
use content::SectionKey;
use pages::marketing::MarketingShell;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/about")]
    About,
    #[at("/case-studies")]
    CaseStudies,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Content section a route shows. The landing page and unknown paths
    /// fall back to services.
    pub fn section(&self) -> SectionKey {
        match self {
            Route::About => SectionKey::About,
            Route::CaseStudies => SectionKey::CaseStudies,
            Route::Home | Route::Services | Route::NotFound => SectionKey::Services,
        }
    }

    pub fn details_heading(&self) -> &'static str {
        match self {
            Route::Home => LANDING_DETAILS_HEADING,
            _ => DETAILS_HEADING,
        }
    }
}

fn switch(route: Route) -> Html {
    info!("Rendering {:?} page", route);
    html! {
        <MarketingShell section={route.section()} details_heading={route.details_heading()} />
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <main class="site-main">
                <Switch<Route> render={switch} />
            </main>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_map_to_sections() {
        assert_eq!(Route::Home.section(), SectionKey::Services);
        assert_eq!(Route::Services.section(), SectionKey::Services);
        assert_eq!(Route::About.section(), SectionKey::About);
        assert_eq!(Route::CaseStudies.section(), SectionKey::CaseStudies);
        assert_eq!(Route::NotFound.section(), SectionKey::Services);
    }

    #[test]
    fn landing_page_keeps_its_own_detail_heading() {
        assert_eq!(Route::Home.details_heading(), "What I Offer:");
        assert_eq!(Route::Services.details_heading(), "Highlights:");
        assert_eq!(Route::About.details_heading(), "Highlights:");
    }

    #[test]
    fn paths_parse_to_routes() {
        assert_eq!(Route::recognize("/about"), Some(Route::About));
        assert_eq!(Route::recognize("/case-studies"), Some(Route::CaseStudies));
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
        assert_eq!(Route::CaseStudies.to_path(), "/case-studies");
    }
}
