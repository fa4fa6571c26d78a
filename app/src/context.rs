use leptos::prelude::*;

use crate::links::LinkResolver;

cfg_if::cfg_if! {
    if #[cfg(feature = "ssr")] {
        #[derive(Clone, Debug)]
        pub struct Context { // Could be called "AppState"
            pub leptos_options: LeptosOptions,
            pub links: LinkResolver,
        }

        // Looks like we could use `derive(FromRef)` on `Context` if we enabled the macros feature on axum.
        impl axum::extract::FromRef<Context> for LeptosOptions {
            fn from_ref(value: &Context) -> Self {
                value.leptos_options.clone()
            }
        }

        impl axum::extract::FromRef<Context> for LinkResolver {
            fn from_ref(value: &Context) -> Self {
                value.links.clone()
            }
        }
    }
}

/// The resolver provided by the server (per request) or by the frontend
/// (before hydration).
pub fn use_links() -> LinkResolver {
    use_context::<LinkResolver>().unwrap_or_else(|| {
        log::warn!("No link resolver in context, linking to the default repository");
        LinkResolver::default()
    })
}
