//! Transient notification stack rendered above every page.

use leptos::prelude::*;

use crate::state::ui::{NoticeLevel, UiState};

/// Push a notice and schedule its auto-dismissal in the browser.
pub fn notify(ui: RwSignal<UiState>, level: NoticeLevel, message: impl Into<String>) {
    let message = message.into();
    let mut id = 0;
    ui.update(|state| id = state.push(level, message));
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_secs(4)).await;
        ui.update(|state| state.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

/// Renders the current notices with manual dismiss buttons.
#[component]
pub fn NoticeStack() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="notice-stack">
            {move || {
                ui.get()
                    .notices
                    .into_iter()
                    .map(|notice| {
                        let id = notice.id;
                        let class = format!("notice notice--{}", notice.level.css_class());
                        view! {
                            <div class=class>
                                <span class="notice__message">{notice.message}</span>
                                <button
                                    class="notice__dismiss"
                                    on:click=move |_| ui.update(|state| state.dismiss(id))
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
