//! App-wide context: backend services, configuration and query invalidation.

use api::Services;
use dioxus::prelude::*;
use store::{LmsConfig, QueryClient};

use crate::auth::AuthProvider;
use crate::toast::ToastProvider;
use crate::views::VIEWS_CSS;

/// Root provider. Wrap the router with it.
#[component]
pub fn AppProvider(config: LmsConfig, children: Element) -> Element {
    use_context_provider(|| Signal::new(Services::new(&config.api)));
    use_context_provider(|| config.clone());
    use_context_provider(|| Signal::new(QueryClient::new()));

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        ToastProvider {
            AuthProvider { {children} }
        }
    }
}

pub fn use_services() -> Signal<Services> {
    use_context::<Signal<Services>>()
}

pub fn use_config() -> LmsConfig {
    use_context::<LmsConfig>()
}

pub fn use_query_client() -> Signal<QueryClient> {
    use_context::<Signal<QueryClient>>()
}
