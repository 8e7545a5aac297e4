pub mod ftm;
pub mod not_found;

use dioxus::prelude::*;
use shared_types::UserProfile;

use crate::i18n::use_localizer;
use not_found::NotFoundPage;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    FtmList {},
    #[route("/ftm-details")]
    FtmDetail {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Main layout: top bar with the signed-in partner, content below.
///
/// The `dir` attribute follows the active language so Arabic renders
/// right-to-left throughout.
#[component]
fn AppLayout() -> Element {
    let i18n = use_localizer();
    let profile: UserProfile = use_context();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "app-shell", dir: i18n.direction().as_attr(),
            header { class: "app-topbar",
                span { class: "app-topbar-title", {i18n.t("header.title")} }
                div { class: "app-topbar-user",
                    span { class: "app-topbar-user-name", "{profile.user_name}" }
                    span { class: "app-topbar-user-org", "{profile.org_name}" }
                }
            }
            main { class: "app-content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn FtmList() -> Element {
    ftm::list::FtmListPage()
}

#[component]
fn FtmDetail() -> Element {
    ftm::detail::FtmDetailPage()
}

#[component]
fn NotFound(route: Vec<String>) -> Element {
    rsx! { NotFoundPage { route: route } }
}
