use dioxus::prelude::*;
use shared_types::UserProfile;

mod components;
mod format_helpers;
mod i18n;
mod routes;
mod session;

use i18n::Localizer;
use routes::Route;
use session::FtmSession;

const THEME: Asset = asset!("/assets/theme.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        server::config::load_env();
        tracing::info!(
            upstream = %server::config::pms_base_url(),
            "Starting partner console"
        );

        let router = dioxus::server::router(App)
            .layer(axum::extract::DefaultBodyLimit::max(
                server::config::max_upload_bytes(),
            ))
            .layer(tower_http::trace::TraceLayer::new_for_http())
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Fetch the user's profile once; language and organization drive the
    // rest of the UI. Anonymous defaults keep the console usable when the
    // profile service is unreachable.
    let profile_resource =
        use_server_future(move || async move { server::api::get_user_profile().await })?;

    let profile = profile_resource
        .read()
        .as_ref()
        .cloned()
        .unwrap_or(Ok(UserProfile::anonymous()))
        .unwrap_or_else(|_| UserProfile::anonymous());

    let localizer = Localizer::new(&profile.lang_code);
    let loading = localizer.t("common.loading");
    use_context_provider(|| profile);
    use_context_provider(|| localizer);
    use_context_provider(FtmSession::new);
    shared_ui::provide_open_regions();

    rsx! {
        document::Link { rel: "stylesheet", href: THEME }
        shared_ui::ToastProvider {
            SuspenseBoundary {
                fallback: move |_| rsx! {
                    div { class: "app-loading",
                        p { "{loading}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
