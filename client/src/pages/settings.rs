//! Account settings page showing the signed-in profile.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::state::session::SessionState;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <div class="settings-page">
            <Navbar/>
            <main class="settings-page__body">
                <h1>"Settings"</h1>
                <section class="settings-page__account">
                    <h2>"Account"</h2>
                    <Show
                        when=move || session.get().user.is_some()
                        fallback=move || view! { <p>"Loading account..."</p> }
                    >
                        <dl class="settings-page__details">
                            <dt>"Name"</dt>
                            <dd>
                                {move || {
                                    session.get().user.map(|u| u.name).unwrap_or_default()
                                }}
                            </dd>
                            <dt>"Email"</dt>
                            <dd>
                                {move || {
                                    session.get().user.map(|u| u.email).unwrap_or_default()
                                }}
                            </dd>
                        </dl>
                    </Show>
                </section>
            </main>
        </div>
    }
}
