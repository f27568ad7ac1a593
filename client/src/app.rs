//! Root application component and SSR shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::chat_widget::ChatWidget;
use crate::config::{BACKEND_URL_META, WidgetConfig};

/// HTML shell rendered on the server for SSR + hydration.
///
/// `widget` is published as a `<meta>` tag so the hydrated widget talks to
/// the same backend the host was configured with.
pub fn shell(options: LeptosOptions, widget: WidgetConfig) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <BackendUrlMeta config=widget/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// `<meta>` tag publishing the widget's backend URL to the browser.
#[component]
pub fn BackendUrlMeta(config: WidgetConfig) -> impl IntoView {
    view! { <meta name=BACKEND_URL_META content=config.backend_url/> }
}

/// Root application component.
///
/// The page itself is blank; the widget floats over it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/chat-widget.css"/>
        <Title text="Pinnacle Sync"/>

        <main class="page">
            <ChatWidget/>
        </main>
    }
}
